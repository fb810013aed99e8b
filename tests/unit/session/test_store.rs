use padrino_client::application::config::Config;
use padrino_client::model::auth::{Role, UserSession};
use padrino_client::model::requests::ResourceId;
use padrino_client::session::{FileStorage, KeyValueStorage, MemoryStorage, SessionStore};
use std::thread;
use tempfile::TempDir;

fn session(id: i64, rol: Role) -> UserSession {
    UserSession {
        id: ResourceId::Number(id),
        nombre: format!("Usuario {id}"),
        rol,
        email: Some(format!("u{id}@example.org")),
    }
}

#[test]
fn test_save_get_clear() {
    let store = SessionStore::in_memory();
    assert!(!store.is_active());
    assert_eq!(store.get(), None);

    let user = session(7, Role::Padrino);
    store.save(&user).unwrap();
    assert_eq!(store.get(), Some(user));
    assert!(store.is_active());
    assert!(store.is_padrino());
    assert!(!store.is_admin());
    assert_eq!(store.user_role(), Some(Role::Padrino));

    store.clear().unwrap();
    assert_eq!(store.get(), None);
    assert!(!store.is_active());
    assert_eq!(store.user_role(), None);
}

#[test]
fn test_save_replaces_previous_session() {
    let store = SessionStore::in_memory();
    store.save(&session(1, Role::Padrino)).unwrap();
    store.save(&session(2, Role::Administrador)).unwrap();
    assert_eq!(store.get().map(|s| s.id), Some(ResourceId::Number(2)));
    assert!(store.is_admin());
}

#[test]
fn test_clones_share_storage() {
    let store = SessionStore::in_memory();
    let other = store.clone();
    store.save(&session(3, Role::Padrino)).unwrap();
    assert!(other.is_active());
    other.clear().unwrap();
    assert!(!store.is_active());
}

#[test]
fn test_undecodable_value_reads_as_absent() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path());
    storage.set_raw("user_data", "{\"id\": 1}").unwrap();
    let store = SessionStore::new(storage.clone());
    assert_eq!(store.get(), None);
    assert!(!store.is_active());

    storage.set_raw("user_data", "not json at all").unwrap();
    assert_eq!(store.get(), None);
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let user = session(11, Role::Administrador);
    SessionStore::new(FileStorage::new(dir.path()))
        .save(&user)
        .unwrap();

    let reopened = SessionStore::new(FileStorage::new(dir.path()));
    assert_eq!(reopened.get(), Some(user));
    assert!(dir.path().join("user_data.json").exists());
}

#[test]
fn test_custom_key_from_config() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::with_base_url("http://localhost:3001/api");
    config.session.storage_dir = dir.path().to_string_lossy().into_owned();
    config.session.storage_key = "sesion_padrino".to_string();

    let store = SessionStore::from_config(&config);
    assert_eq!(store.key(), "sesion_padrino");
    store.save(&session(5, Role::Padrino)).unwrap();
    assert!(dir.path().join("sesion_padrino.json").exists());
}

#[test]
fn test_memory_storage_remove_missing_key() {
    let storage = MemoryStorage::new();
    assert!(storage.remove("nada").is_ok());
    assert_eq!(storage.get_raw("nada").unwrap(), None);
}

#[test]
fn test_concurrent_writers_last_write_wins() {
    let dir = TempDir::new().unwrap();
    let candidates = [session(1, Role::Padrino), session(2, Role::Administrador)];

    let handles: Vec<_> = candidates
        .iter()
        .cloned()
        .map(|user| {
            let store = SessionStore::new(FileStorage::new(dir.path()));
            thread::spawn(move || {
                for _ in 0..50 {
                    store.save(&user).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let stored = SessionStore::new(FileStorage::new(dir.path()))
        .get()
        .expect("a complete session is stored");
    assert!(candidates.contains(&stored));
}
