use crate::error::{KsResult, LayoutError};
use crate::geometry::{Coord, LayoutGrid, Offset, ReverseIndex};
use crate::input::InputSource;
use crate::keycodes::KeyCode;
use crate::layouts::LayoutId;
use crate::registry::LayoutRegistry;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Grid plus reverse index for the layout an engine is currently resolving on.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveLayout {
    grid: LayoutGrid,
    index: ReverseIndex,
}

impl ActiveLayout {
    fn activate(registry: &LayoutRegistry, id: LayoutId) -> KsResult<Self> {
        let grid = registry.lookup(id)?.clone();
        let index = grid.reverse_index();
        debug!("Activated layout '{}' ({:?} keys per row)", id, grid.row_sizes());
        Ok(Self { grid, index })
    }

    fn coordinate_of(&self, key: KeyCode) -> KsResult<Coord> {
        self.index
            .get(key)
            .ok_or(LayoutError::InvalidKeyForLayout {
                key,
                layout: self.grid.id(),
            })
    }
}

/// Fails on the first offset that leaves `grid` when applied to `base`.
fn check_fit(grid: &LayoutGrid, base: Coord, offsets: &[Offset]) -> KsResult<()> {
    for (action, offset) in offsets.iter().enumerate() {
        let (row, col) = base.shifted(*offset);
        if grid.locate(row, col).is_none() {
            return Err(LayoutError::InvalidConfiguration {
                layout: grid.id(),
                action,
                row,
                col,
            });
        }
    }
    Ok(())
}

/// Binds logical actions to key positions that survive layout changes.
///
/// A binding is a base coordinate plus one offset per action. Offsets are
/// computed once, from the keys the caller picked on the initial layout, and
/// are then replayed on whatever layout is active:
///
/// ```
/// use keyshift::{Keyboard, KeyCode, LayoutId};
///
/// let mut wasd = Keyboard::new(LayoutId::Qwerty, &[KeyCode::W, KeyCode::A, KeyCode::S, KeyCode::D])?;
/// wasd.switch_layout(LayoutId::Azerty)?;
/// assert_eq!(wasd.resolve_key(0)?, KeyCode::Z);
/// assert_eq!(wasd.resolve_key(1)?, KeyCode::Q);
/// # Ok::<(), keyshift::LayoutError>(())
/// ```
///
/// The base is carried across layouts as a row/column pair, not as a key, so
/// the key under action 0 changes with the layout just like every other action.
#[derive(Debug, Clone)]
pub struct Keyboard {
    registry: Arc<LayoutRegistry>,
    active: ActiveLayout,
    base: Coord,
    offsets: Vec<Offset>,
}

impl Keyboard {
    /// Binds `keys` on `layout` using the built-in layouts. `keys[0]` is the base.
    pub fn new(layout: LayoutId, keys: &[KeyCode]) -> KsResult<Self> {
        Self::with_registry(Arc::new(LayoutRegistry::builtin()), layout, keys)
    }

    pub fn with_registry(
        registry: Arc<LayoutRegistry>,
        layout: LayoutId,
        keys: &[KeyCode],
    ) -> KsResult<Self> {
        let base_key = *keys.first().ok_or(LayoutError::EmptyBinding)?;
        let active = ActiveLayout::activate(&registry, layout)?;

        let base = active.coordinate_of(base_key)?;
        let offsets = keys
            .iter()
            .map(|&key| active.coordinate_of(key).map(|coord| base.offset_to(coord)))
            .collect::<KsResult<Vec<_>>>()?;

        check_fit(&active.grid, base, &offsets)?;

        debug!(
            "Bound {} keys on '{}' with base '{:?}' at {}",
            keys.len(),
            layout,
            base_key,
            base
        );

        Ok(Self {
            registry,
            active,
            base,
            offsets,
        })
    }

    /// Same offsets as `other`, anchored at `base_key` on `other`'s current layout.
    pub fn derived(other: &Keyboard, base_key: KeyCode) -> KsResult<Self> {
        Self::from_offsets(
            Arc::clone(&other.registry),
            other.current_layout(),
            other.configuration(),
            base_key,
        )
    }

    /// Anchors an existing offset list at `base_key` on `layout`.
    pub fn from_offsets(
        registry: Arc<LayoutRegistry>,
        layout: LayoutId,
        offsets: &[Offset],
        base_key: KeyCode,
    ) -> KsResult<Self> {
        if offsets.is_empty() {
            return Err(LayoutError::EmptyBinding);
        }
        let active = ActiveLayout::activate(&registry, layout)?;
        let base = active.coordinate_of(base_key)?;
        check_fit(&active.grid, base, offsets)?;

        debug!(
            "Derived binding of {} actions on '{}' anchored at '{:?}' {}",
            offsets.len(),
            layout,
            base_key,
            base
        );

        Ok(Self {
            registry,
            active,
            base,
            offsets: offsets.to_vec(),
        })
    }

    /// Validates the binding against `layout` without switching to it.
    pub fn check_switch(&self, layout: LayoutId) -> KsResult<()> {
        let grid = self.registry.lookup(layout)?;
        check_fit(grid, self.base, &self.offsets)
    }

    /// Makes `layout` active if every action still lands on a key there.
    ///
    /// On error nothing changes: the previous layout stays active.
    pub fn switch_layout(&mut self, layout: LayoutId) -> KsResult<()> {
        let previous = self.current_layout();
        let next = ActiveLayout::activate(&self.registry, layout)?;

        if let Err(e) = check_fit(&next.grid, self.base, &self.offsets) {
            warn!("Rejected switch '{}' -> '{}': {}", previous, layout, e);
            return Err(e);
        }

        self.active = next;
        info!("Switched layout '{}' -> '{}'", previous, layout);
        Ok(())
    }

    /// Registered layouts this binding fits on.
    pub fn compatible_layouts(&self) -> Vec<LayoutId> {
        self.registry
            .supported()
            .into_iter()
            .filter(|&id| self.check_switch(id).is_ok())
            .collect()
    }

    pub fn current_layout(&self) -> LayoutId {
        self.active.grid.id()
    }

    /// The offsets of this binding, in action order.
    pub fn configuration(&self) -> &[Offset] {
        &self.offsets
    }

    pub fn base_coordinate(&self) -> Coord {
        self.base
    }

    pub fn grid(&self) -> &LayoutGrid {
        &self.active.grid
    }

    pub fn registry(&self) -> &Arc<LayoutRegistry> {
        &self.registry
    }

    pub fn action_count(&self) -> usize {
        self.offsets.len()
    }

    /// Where `key` sits on the active layout, if it is on it at all.
    pub fn coordinate_of(&self, key: KeyCode) -> Option<Coord> {
        self.active.index.get(key)
    }

    /// The key `action` maps to on the active layout.
    pub fn resolve_key(&self, action: usize) -> KsResult<KeyCode> {
        let offset = self
            .offsets
            .get(action)
            .ok_or(LayoutError::IndexOutOfRange {
                index: action,
                len: self.offsets.len(),
            })?;

        Ok(self.key_at_offset(action, *offset))
    }

    fn key_at_offset(&self, action: usize, offset: Offset) -> KeyCode {
        let (row, col) = self.base.shifted(offset);
        match self
            .active
            .grid
            .locate(row, col)
            .and_then(|coord| self.active.grid.key_at(coord))
        {
            Some(key) => key,
            None => unreachable!(
                "action {} resolved off the '{}' grid at ({}, {})",
                action,
                self.current_layout(),
                row,
                col
            ),
        }
    }

    /// Every action's key on the active layout, in action order.
    pub fn resolved_keys(&self) -> Vec<KeyCode> {
        self.offsets
            .iter()
            .enumerate()
            .map(|(action, offset)| self.key_at_offset(action, *offset))
            .collect()
    }

    pub fn is_pressed<I: InputSource + ?Sized>(&self, input: &I, action: usize) -> KsResult<bool> {
        Ok(input.is_held(self.resolve_key(action)?))
    }

    pub fn was_pressed_this_step<I: InputSource + ?Sized>(
        &self,
        input: &I,
        action: usize,
    ) -> KsResult<bool> {
        Ok(input.pressed_this_step(self.resolve_key(action)?))
    }

    pub fn was_released_this_step<I: InputSource + ?Sized>(
        &self,
        input: &I,
        action: usize,
    ) -> KsResult<bool> {
        Ok(input.released_this_step(self.resolve_key(action)?))
    }
}
