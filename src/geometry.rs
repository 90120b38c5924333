use crate::error::{KsResult, LayoutError};
use crate::keycodes::KeyCode;
use crate::layouts::LayoutId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use strum::EnumCount;

/// A cell on a layout grid. Row 0 is the bottom row, col 0 the leftmost key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The offset that moves `self` onto `target`.
    pub fn offset_to(self, target: Coord) -> Offset {
        Offset {
            rows: target.row as i32 - self.row as i32,
            cols: target.col as i32 - self.col as i32,
        }
    }

    /// Applies an offset without any bounds check. May be negative.
    pub fn shifted(self, offset: Offset) -> (i64, i64) {
        (
            self.row as i64 + offset.rows as i64,
            self.col as i64 + offset.cols as i64,
        )
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A layout-agnostic move: `rows` up (negative is down), `cols` right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Offset {
    pub rows: i32,
    pub cols: i32,
}

impl Offset {
    pub const ZERO: Offset = Offset { rows: 0, cols: 0 };

    pub fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.rows, self.cols)
    }
}

/// A jagged grid of keys. Rows are stored bottom-up; row sizes are the row
/// lengths, so they can never disagree with the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutGrid {
    id: LayoutId,
    rows: Vec<Vec<KeyCode>>,
}

impl LayoutGrid {
    /// Builds a grid from rows written top row first, as printed on a keyboard.
    pub fn from_top_rows<R: AsRef<[KeyCode]>>(id: LayoutId, top_rows: &[R]) -> KsResult<Self> {
        if top_rows.is_empty() {
            return Err(LayoutError::InvalidLayoutData(format!(
                "{}: layout has no rows",
                id
            )));
        }

        let mut seen = HashSet::new();
        for (i, row) in top_rows.iter().enumerate() {
            let row = row.as_ref();
            if row.is_empty() {
                return Err(LayoutError::InvalidLayoutData(format!(
                    "{}: row {} (from top) is empty",
                    id, i
                )));
            }
            for key in row {
                if !seen.insert(*key) {
                    return Err(LayoutError::InvalidLayoutData(format!(
                        "{}: key '{:?}' appears more than once",
                        id, key
                    )));
                }
            }
        }

        Ok(Self::from_top_rows_unchecked(id, top_rows))
    }

    pub(crate) fn from_top_rows_unchecked<R: AsRef<[KeyCode]>>(id: LayoutId, top_rows: &[R]) -> Self {
        let rows = top_rows
            .iter()
            .rev()
            .map(|row| row.as_ref().to_vec())
            .collect();
        Self { id, rows }
    }

    pub fn id(&self) -> LayoutId {
        self.id
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row_sizes(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }

    /// Rows bottom-up, `rows()[0]` is the bottom row.
    pub fn rows(&self) -> &[Vec<KeyCode>] {
        &self.rows
    }

    pub fn key_at(&self, coord: Coord) -> Option<KeyCode> {
        self.rows.get(coord.row)?.get(coord.col).copied()
    }

    /// Bounds check for a raw (possibly negative) position.
    pub fn locate(&self, row: i64, col: i64) -> Option<Coord> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        let size = self.rows.get(row)?.len();
        (col < size).then_some(Coord { row, col })
    }

    /// Every cell with its coordinate, bottom row first.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, KeyCode)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, keys)| {
            keys.iter()
                .enumerate()
                .map(move |(col, key)| (Coord { row, col }, *key))
        })
    }

    pub fn reverse_index(&self) -> ReverseIndex {
        ReverseIndex::build(self)
    }
}

/// Key to coordinate table for one grid, indexed by key ordinal.
/// `None` marks keys that are not on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseIndex {
    slots: [Option<Coord>; KeyCode::COUNT],
}

impl ReverseIndex {
    pub fn build(grid: &LayoutGrid) -> Self {
        let mut slots = [None; KeyCode::COUNT];
        for (coord, key) in grid.cells() {
            slots[key.index()] = Some(coord);
        }
        Self { slots }
    }

    pub fn get(&self, key: KeyCode) -> Option<Coord> {
        self.slots[key.index()]
    }

    pub fn contains(&self, key: KeyCode) -> bool {
        self.get(key).is_some()
    }
}
