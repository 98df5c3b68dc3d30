use std::cell::RefCell;

/// One replaceable listener. `get` hands out a clone, so no borrow is held
/// while the listener runs and it may replace or clear the slot itself.
pub struct CallbackSlot<F> {
    inner: RefCell<Option<F>>,
}

impl<F: Clone> CallbackSlot<F> {
    pub const fn new() -> Self {
        Self {
            inner: RefCell::new(None),
        }
    }

    pub fn set(&self, f: Option<F>) {
        *self.inner.borrow_mut() = f;
    }

    pub fn get(&self) -> Option<F> {
        self.inner.borrow().clone()
    }
}

impl<F: Clone> Default for CallbackSlot<F> {
    fn default() -> Self {
        Self::new()
    }
}
