#![allow(dead_code)] // Not every test file uses every helper

use keyshift::{Coord, KeyCode, Keyboard, LayoutId, LayoutRegistry};

pub const WASD: [KeyCode; 4] = [KeyCode::W, KeyCode::A, KeyCode::S, KeyCode::D];

/// Action names as a game would declare them for a WASD binding.
pub mod action {
    pub const UP: usize = 0;
    pub const LEFT: usize = 1;
    pub const DOWN: usize = 2;
    pub const RIGHT: usize = 3;
}

pub fn wasd_on_qwerty() -> Keyboard {
    Keyboard::new(LayoutId::Qwerty, &WASD).expect("WASD must bind on QWERTY")
}

/// Coordinate of `key` on a built-in layout.
pub fn coord_on(layout: LayoutId, key: KeyCode) -> Coord {
    LayoutRegistry::builtin()
        .lookup(layout)
        .unwrap()
        .reverse_index()
        .get(key)
        .unwrap_or_else(|| panic!("{:?} is not on {}", key, layout))
}

/// Key under a raw position, `None` when off the grid.
pub fn key_at(layout: LayoutId, row: i64, col: i64) -> Option<KeyCode> {
    let registry = LayoutRegistry::builtin();
    let grid = registry.lookup(layout).unwrap();
    grid.locate(row, col).and_then(|c| grid.key_at(c))
}
