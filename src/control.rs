use std::rc::Rc;

use log::warn;

pub type ChangeHandler<T> = Rc<dyn Fn(&T)>;

/// Ownership of one stateful concern, decided once at construction.
///
/// `Owned` keeps the authoritative value inside the coordinator.
/// `External` only proposes next values through `on_change`; the rendered
/// value is whatever snapshot the caller supplied on the last render pass.
pub enum Concern<T> {
    Owned(T),
    External {
        snapshot: T,
        on_change: ChangeHandler<T>,
    },
}

impl<T: Clone> Concern<T> {
    pub fn owned(initial: T) -> Self {
        Self::Owned(initial)
    }

    pub fn external(initial: T, on_change: impl Fn(&T) + 'static) -> Self {
        Self::External {
            snapshot: initial,
            on_change: Rc::new(on_change),
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::External { .. })
    }

    pub fn current(&self) -> &T {
        match self {
            Self::Owned(value) => value,
            Self::External { snapshot, .. } => snapshot,
        }
    }

    /// Render-time reconciliation with the caller-supplied value for this
    /// concern. A controlled concern adopts the supplied snapshot; an owned
    /// concern never does, so the two modes cannot silently swap mid-lifetime.
    pub fn sync(&mut self, slot: &str, supplied: Option<&T>) {
        match self {
            Self::Owned(_) => {
                if supplied.is_some() {
                    warn!("ignoring supplied `{slot}` value: concern is uncontrolled");
                }
            }
            Self::External { snapshot, .. } => {
                if let Some(value) = supplied {
                    *snapshot = value.clone();
                }
            }
        }
    }

    /// Event-time transition. Returns `true` when the value was stored
    /// internally and the caller should recompute the page view; `false`
    /// when it was only forwarded to the external owner.
    pub fn apply(&mut self, next: T) -> bool {
        match self {
            Self::Owned(value) => {
                *value = next;
                true
            }
            Self::External { on_change, .. } => {
                (on_change)(&next);
                false
            }
        }
    }
}
