use padrino_client::utils::id::{REQUEST_ID_LEN, get_id};
use std::collections::HashSet;

#[test]
fn test_get_id_length_and_alphabet() {
    let id = get_id();
    assert_eq!(id.len(), REQUEST_ID_LEN);
    assert!(id.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}

#[test]
fn test_get_id_unique() {
    let ids: HashSet<String> = (0..100).map(|_| get_id()).collect();
    assert_eq!(ids.len(), 100);
}
