use crate::event::EventId;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("could not write favorites: {0}")]
    Write(String),
}

/// Durable home of the favorite ids. The whole list is read once and
/// rewritten wholesale on every change.
pub trait FavoritesStorage {
    fn load(&self) -> Vec<EventId>;
    fn save(&self, ids: &[EventId]) -> Result<(), StorageError>;
}

/// Insertion-ordered set of favorite event ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Favorites {
    ids: Vec<EventId>,
}

impl Favorites {
    pub fn from_ids(ids: impl IntoIterator<Item = EventId>) -> Self {
        let mut favorites = Favorites::default();
        for id in ids {
            if !favorites.contains(id) {
                favorites.ids.push(id);
            }
        }
        favorites
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.ids.contains(&id)
    }

    /// Returns whether `id` is a favorite after the toggle.
    pub fn toggle(&mut self, id: EventId) -> bool {
        if self.contains(id) {
            self.ids.retain(|existing| *existing != id);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn ids(&self) -> &[EventId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// In-memory storage that records every write.
    #[derive(Clone, Default)]
    pub struct MemoryStorage {
        pub writes: Rc<RefCell<Vec<Vec<EventId>>>>,
        pub initial: Vec<EventId>,
        pub fail_writes: bool,
    }

    impl MemoryStorage {
        pub fn last_write(&self) -> Option<Vec<EventId>> {
            self.writes.borrow().last().cloned()
        }
    }

    impl FavoritesStorage for MemoryStorage {
        fn load(&self) -> Vec<EventId> {
            self.initial.clone()
        }

        fn save(&self, ids: &[EventId]) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Write("quota exceeded".into()));
            }
            self.writes.borrow_mut().push(ids.to_vec());
            Ok(())
        }
    }
}
