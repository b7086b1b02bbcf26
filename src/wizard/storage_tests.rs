#[cfg(test)]
mod tests {
    use super::super::storage::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));

        assert_eq!(store.load(SAVED_PLAYLIST_KEY).unwrap(), None);

        store.save(SAVED_PLAYLIST_KEY, "{\"a\":1}").unwrap();
        assert!(dir.path().join("nested/last_playlist.json").exists());
        assert_eq!(
            store.load(SAVED_PLAYLIST_KEY).unwrap().as_deref(),
            Some("{\"a\":1}")
        );

        store.save(SAVED_PLAYLIST_KEY, "{\"a\":2}").unwrap();
        assert_eq!(
            store.load(SAVED_PLAYLIST_KEY).unwrap().as_deref(),
            Some("{\"a\":2}")
        );
    }

    #[test]
    fn test_file_store_remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());

        store.remove(SAVED_PLAYLIST_KEY).unwrap();
        store.save(SAVED_PLAYLIST_KEY, "value").unwrap();
        store.remove(SAVED_PLAYLIST_KEY).unwrap();
        store.remove(SAVED_PLAYLIST_KEY).unwrap();

        assert_eq!(store.load(SAVED_PLAYLIST_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());

        for key in ["", "../escape", "a/b", "with space"] {
            assert!(matches!(store.save(key, "x"), Err(StoreError::InvalidKey(_))));
            assert!(matches!(store.load(key), Err(StoreError::InvalidKey(_))));
        }
    }

    #[test]
    fn test_serialization_failures_convert_to_store_error() {
        fn encode(map: &std::collections::HashMap<(u8, u8), u8>) -> Result<String, StoreError> {
            Ok(serde_json::to_string(map)?)
        }

        let map = std::collections::HashMap::from([((1, 2), 3)]);
        let err = encode(&map).unwrap_err();

        assert!(matches!(err, StoreError::Serialize(_)));
        assert!(err.to_string().starts_with("could not serialize value"));
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();

        store.save("k", "v").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.load("k").unwrap(), None);
    }
}
