use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// A physical key symbol.
///
/// Letters and digits display as themselves, punctuation displays as the
/// printed symbol. Parsing is case-insensitive and accepts both the variant
/// name and the symbol (`"semicolon"` and `";"` are the same key).
///
/// The discriminant doubles as a dense ordinal, see [`KeyCode::index`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    EnumString,
    Display,
)]
#[serde(try_from = "String")]
#[strum(ascii_case_insensitive)]
pub enum KeyCode {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    #[strum(to_string = "0", serialize = "Alpha0", serialize = "Digit0")]
    Alpha0,
    #[strum(to_string = "1", serialize = "Alpha1", serialize = "Digit1")]
    Alpha1,
    #[strum(to_string = "2", serialize = "Alpha2", serialize = "Digit2")]
    Alpha2,
    #[strum(to_string = "3", serialize = "Alpha3", serialize = "Digit3")]
    Alpha3,
    #[strum(to_string = "4", serialize = "Alpha4", serialize = "Digit4")]
    Alpha4,
    #[strum(to_string = "5", serialize = "Alpha5", serialize = "Digit5")]
    Alpha5,
    #[strum(to_string = "6", serialize = "Alpha6", serialize = "Digit6")]
    Alpha6,
    #[strum(to_string = "7", serialize = "Alpha7", serialize = "Digit7")]
    Alpha7,
    #[strum(to_string = "8", serialize = "Alpha8", serialize = "Digit8")]
    Alpha8,
    #[strum(to_string = "9", serialize = "Alpha9", serialize = "Digit9")]
    Alpha9,

    #[strum(to_string = "[", serialize = "LeftBracket")]
    LeftBracket,
    #[strum(to_string = "]", serialize = "RightBracket")]
    RightBracket,
    #[strum(to_string = ";", serialize = "Semicolon")]
    Semicolon,
    #[strum(to_string = "'", serialize = "Quote")]
    Quote,
    #[strum(to_string = ",", serialize = "Comma")]
    Comma,
    #[strum(to_string = ".", serialize = "Period")]
    Period,
    #[strum(to_string = "/", serialize = "Slash")]
    Slash,
    #[strum(to_string = "=", serialize = "Equals")]
    Equals,
    #[strum(to_string = "-", serialize = "Minus")]
    Minus,
    #[strum(to_string = "^", serialize = "Caret")]
    Caret,
    #[strum(to_string = "$", serialize = "Dollar")]
    Dollar,
    #[strum(to_string = "<", serialize = "Less")]
    Less,
    #[strum(to_string = ":", serialize = "Colon")]
    Colon,
    #[strum(to_string = "!", serialize = "Exclaim")]
    Exclaim,

    // Not placed on any built-in grid.
    Space,
    Tab,
    Return,
    Escape,
    LeftShift,
    RightShift,
}

impl KeyCode {
    /// Dense ordinal in `0..KeyCode::COUNT`, used to index fixed-size tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<String> for KeyCode {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}
