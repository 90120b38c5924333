use crate::error::LayoutError;
use crate::keycodes::KeyCode;
use crate::keycodes::KeyCode::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Physical layouts the crate knows how to name.
///
/// Adding a layout means adding a variant here plus its rows in
/// [`LayoutId::builtin_rows`] (or shipping them in a layout file).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum LayoutId {
    Qwerty,
    #[strum(to_string = "dvorak_us", serialize = "dvorak")]
    DvorakUs,
    Azerty,
    Colemak,
}

impl LayoutId {
    /// Parses a layout name, mapping unknown names to `UnsupportedLayout`.
    pub fn parse(name: &str) -> Result<Self, LayoutError> {
        LayoutId::from_str(name.trim())
            .map_err(|_| LayoutError::UnsupportedLayout(name.trim().to_string()))
    }

    /// Rows as printed on the keyboard, top row first.
    pub fn builtin_rows(&self) -> &'static [&'static [KeyCode]] {
        match self {
            Self::Qwerty => QWERTY,
            Self::DvorakUs => DVORAK_US,
            Self::Azerty => AZERTY,
            Self::Colemak => COLEMAK,
        }
    }
}

// QWERTYUIOP[]
// ASDFGHJKL;'
// ZXCVBNM,./
const QWERTY: &[&[KeyCode]] = &[
    &[Q, W, E, R, T, Y, U, I, O, P, LeftBracket, RightBracket],
    &[A, S, D, F, G, H, J, K, L, Semicolon, Quote],
    &[Z, X, C, V, B, N, M, Comma, Period, Slash],
];

// ',.PYFGCRL/=
// AOEUIDHTNS-
// ;QJKXBMWVZ
const DVORAK_US: &[&[KeyCode]] = &[
    &[Quote, Comma, Period, P, Y, F, G, C, R, L, Slash, Equals],
    &[A, O, E, U, I, D, H, T, N, S, Minus],
    &[Semicolon, Q, J, K, X, B, M, W, V, Z],
];

// AZERTYUIOP^$
// QSDFGHJKLM
// <WXCVBN,;:!
const AZERTY: &[&[KeyCode]] = &[
    &[A, Z, E, R, T, Y, U, I, O, P, Caret, Dollar],
    &[Q, S, D, F, G, H, J, K, L, M],
    &[Less, W, X, C, V, B, N, Comma, Semicolon, Colon, Exclaim],
];

// QWFPGJLUY;[]
// ARSTDHNEIO'
// ZXCVBKM,./
const COLEMAK: &[&[KeyCode]] = &[
    &[Q, W, F, P, G, J, L, U, Y, Semicolon, LeftBracket, RightBracket],
    &[A, R, S, T, D, H, N, E, I, O, Quote],
    &[Z, X, C, V, B, K, M, Comma, Period, Slash],
];
