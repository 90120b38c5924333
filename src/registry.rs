use crate::error::{KsResult, LayoutError};
use crate::geometry::LayoutGrid;
use crate::keycodes::KeyCode;
use crate::layouts::LayoutId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, warn};

/// One layout entry of a layout file. Rows are listed top row first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutDefinition {
    pub layout: LayoutId,
    pub rows: Vec<Vec<KeyCode>>,
}

/// On-disk layout file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LayoutFile {
    /// Start from the built-in layouts and let the file override or add to them.
    #[serde(default)]
    pub extend_builtin: bool,
    pub layouts: Vec<LayoutDefinition>,
}

/// The set of layouts an engine may activate.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegistry {
    layouts: BTreeMap<LayoutId, LayoutGrid>,
}

impl LayoutRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every layout in [`LayoutId`] with its built-in rows.
    pub fn builtin() -> Self {
        let layouts = LayoutId::iter()
            .map(|id| (id, LayoutGrid::from_top_rows_unchecked(id, id.builtin_rows())))
            .collect();
        Self { layouts }
    }

    /// Validates and registers a layout, replacing any previous entry for `id`.
    pub fn insert<R: AsRef<[KeyCode]>>(&mut self, id: LayoutId, top_rows: &[R]) -> KsResult<()> {
        let grid = LayoutGrid::from_top_rows(id, top_rows)?;
        if self.layouts.insert(id, grid).is_some() {
            warn!("Layout '{}' replaced by a new definition", id);
        } else {
            debug!("Registered layout '{}'", id);
        }
        Ok(())
    }

    pub fn from_json(content: &str) -> KsResult<Self> {
        let file: LayoutFile = serde_json::from_str(content)?;
        Self::from_layout_file(file)
    }

    pub fn from_layout_file(file: LayoutFile) -> KsResult<Self> {
        let mut registry = if file.extend_builtin {
            Self::builtin()
        } else {
            Self::empty()
        };

        for def in &file.layouts {
            registry.insert(def.layout, &def.rows)?;
        }

        if registry.layouts.is_empty() {
            return Err(LayoutError::InvalidLayoutData(
                "layout file defines no layouts".to_string(),
            ));
        }
        Ok(registry)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KsResult<Self> {
        let content = fs::read_to_string(&path)?;
        debug!("Loading layouts from {:?}", path.as_ref());
        Self::from_json(&content)
    }

    pub fn lookup(&self, id: LayoutId) -> KsResult<&LayoutGrid> {
        self.layouts
            .get(&id)
            .ok_or_else(|| LayoutError::UnsupportedLayout(id.to_string()))
    }

    /// Like [`lookup`](Self::lookup), for names coming from user input.
    pub fn lookup_name(&self, name: &str) -> KsResult<&LayoutGrid> {
        self.lookup(LayoutId::parse(name)?)
    }

    /// Registered layouts in declaration order.
    pub fn supported(&self) -> Vec<LayoutId> {
        self.layouts.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycodes::KeyCode::*;

    #[test]
    fn builtin_covers_every_layout_id() {
        let registry = LayoutRegistry::builtin();
        for id in LayoutId::iter() {
            let grid = registry.lookup(id).unwrap();
            assert_eq!(grid.id(), id);
            assert_eq!(grid.row_count(), 3);
        }
    }

    #[test]
    fn builtin_grids_pass_validation() {
        for id in LayoutId::iter() {
            assert!(LayoutGrid::from_top_rows(id, id.builtin_rows()).is_ok());
        }
    }

    #[test]
    fn empty_registry_rejects_lookup() {
        let registry = LayoutRegistry::empty();
        assert!(registry.supported().is_empty());
        assert!(matches!(
            registry.lookup(LayoutId::Qwerty),
            Err(LayoutError::UnsupportedLayout(_))
        ));
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let mut registry = LayoutRegistry::builtin();
        registry.insert(LayoutId::Qwerty, &[vec![Q, W, E]]).unwrap();
        assert_eq!(registry.lookup(LayoutId::Qwerty).unwrap().row_sizes(), vec![3]);
        assert_eq!(registry.len(), 4);
    }
}
