use web_sys::Storage;

use crate::event::EventId;
use crate::favorites::{FavoritesStorage, StorageError};

/// Favorites kept as a JSON array under one `localStorage` key.
pub struct LocalStorageFavorites {
    storage: Storage,
    key: String,
}

impl LocalStorageFavorites {
    pub fn new(storage: Storage, key: &str) -> Self {
        LocalStorageFavorites {
            storage,
            key: key.to_owned(),
        }
    }

    pub fn from_window(key: &str) -> Result<Self, StorageError> {
        let storage = crate::get_local_storage().ok_or(StorageError::Unavailable)?;
        Ok(Self::new(storage, key))
    }
}

/// Missing or unreadable content counts as no favorites.
pub fn decode_ids(raw: Option<&str>) -> Vec<EventId> {
    raw.and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or_default()
}

impl FavoritesStorage for LocalStorageFavorites {
    fn load(&self) -> Vec<EventId> {
        let raw = self.storage.get_item(&self.key).ok().flatten();
        decode_ids(raw.as_deref())
    }

    fn save(&self, ids: &[EventId]) -> Result<(), StorageError> {
        let encoded =
            serde_json::to_string(ids).map_err(|err| StorageError::Write(err.to_string()))?;

        self.storage
            .set_item(&self.key, &encoded)
            .map_err(|err| StorageError::Write(format!("{:?}", err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_stored_ids() {
        assert_eq!(decode_ids(Some("[3,1,2]")), vec![3, 1, 2]);
        assert_eq!(decode_ids(Some("[]")), Vec::<EventId>::new());
    }

    #[test]
    fn absent_or_garbage_is_empty() {
        assert!(decode_ids(None).is_empty());
        assert!(decode_ids(Some("not json")).is_empty());
        assert!(decode_ids(Some("{\"id\":1}")).is_empty());
    }
}
