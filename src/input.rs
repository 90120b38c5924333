use crate::keycodes::KeyCode;
use std::collections::HashSet;

/// Per-step key state supplied by the host.
///
/// Implementations are expected to be cheap snapshot reads; the engine calls
/// them once per query and never caches the answer.
pub trait InputSource {
    /// The key is down right now.
    fn is_held(&self, key: KeyCode) -> bool;
    /// The key went down during the current step.
    fn pressed_this_step(&self, key: KeyCode) -> bool;
    /// The key went up during the current step.
    fn released_this_step(&self, key: KeyCode) -> bool;
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn is_held(&self, key: KeyCode) -> bool {
        (**self).is_held(key)
    }

    fn pressed_this_step(&self, key: KeyCode) -> bool {
        (**self).pressed_this_step(key)
    }

    fn released_this_step(&self, key: KeyCode) -> bool {
        (**self).released_this_step(key)
    }
}

/// Input state built from key events.
///
/// Feed `press`/`release` as events arrive, read during the step, then call
/// `advance` before the next one.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    held: HashSet<KeyCode>,
    pressed: HashSet<KeyCode>,
    released: HashSet<KeyCode>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: KeyCode) {
        // OS auto-repeat sends extra downs for a held key.
        if self.held.insert(key) {
            self.pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: KeyCode) {
        if self.held.remove(&key) {
            self.released.insert(key);
        }
    }

    /// Ends the current step: edge flags clear, held keys stay held.
    pub fn advance(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }
}

impl InputSource for InputSnapshot {
    fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    fn pressed_this_step(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    fn released_this_step(&self, key: KeyCode) -> bool {
        self.released.contains(&key)
    }
}
