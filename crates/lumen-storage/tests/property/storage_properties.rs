use lumen_core::traits::IKeyValueStore;
use lumen_storage::{InMemoryKeyValueStore, SqliteKeyValueStore};
use proptest::prelude::*;

proptest! {
    #[test]
    fn last_write_wins(key in "[a-z_0-9]{1,32}", values in proptest::collection::vec(".{0,64}", 1..5)) {
        let store = SqliteKeyValueStore::open_in_memory().unwrap();
        for v in &values {
            store.set(&key, v).unwrap();
        }
        prop_assert_eq!(store.get(&key).unwrap(), values.last().cloned());
    }

    #[test]
    fn sqlite_and_memory_agree(pairs in proptest::collection::vec(("[a-c]{1,2}", "[a-z]{0,8}"), 0..20)) {
        let sqlite = SqliteKeyValueStore::open_in_memory().unwrap();
        let memory = InMemoryKeyValueStore::new();
        for (k, v) in &pairs {
            sqlite.set(k, v).unwrap();
            memory.set(k, v).unwrap();
        }
        for (k, _) in &pairs {
            prop_assert_eq!(sqlite.get(k).unwrap(), memory.get(k).unwrap());
        }
    }
}
