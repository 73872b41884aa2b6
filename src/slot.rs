//! Table cell state.

/// One cell of the slot array.
///
/// `Tombstone` is distinct from `Empty` so that probe sequences which passed
/// through a since-deleted entry stay traversable.
#[derive(Debug)]
pub enum Slot<V> {
    Empty,
    Tombstone,
    Occupied { key: Box<str>, value: V },
}

impl<V> Default for Slot<V> {
    fn default() -> Self {
        Slot::Empty
    }
}

impl<V> Slot<V> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied { .. })
    }

    /// Key of an occupied slot.
    pub fn key(&self) -> Option<&str> {
        match self {
            Slot::Occupied { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Value of an occupied slot.
    pub fn value(&self) -> Option<&V> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    pub(crate) fn holds(&self, q: &str) -> bool {
        matches!(self, Slot::Occupied { key, .. } if **key == *q)
    }
}
