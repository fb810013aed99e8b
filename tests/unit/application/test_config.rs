use padrino_client::application::client::ApiClient;
use padrino_client::application::config::Config;
use padrino_client::constants::{DEFAULT_SESSION_DIR, SESSION_STORAGE_KEY};
use std::env;

#[test]
fn test_with_base_url_trims_and_defaults() {
    let config = Config::with_base_url("https://api.example.org/api/");
    assert_eq!(config.rest_api.base_url, "https://api.example.org/api");
    assert_eq!(config.session.storage_dir, DEFAULT_SESSION_DIR);
    assert_eq!(config.session.storage_key, SESSION_STORAGE_KEY);
}

#[test]
fn test_config_from_environment() {
    unsafe {
        env::set_var("PADRINO_API_URL", "http://backend:4000/api/");
        env::set_var("PADRINO_SESSION_KEY", "sesion");
        let config = Config::new();
        assert_eq!(config.rest_api.base_url, "http://backend:4000/api");
        assert_eq!(config.session.storage_key, "sesion");
        env::remove_var("PADRINO_API_URL");
        env::remove_var("PADRINO_SESSION_KEY");
    }
}

#[test]
fn test_config_serializes() {
    let config = Config::with_base_url("http://localhost:3001/api");
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["rest_api"]["base_url"], "http://localhost:3001/api");
    assert_eq!(value["session"]["storage_key"], "user_data");
}

#[test]
fn test_api_client_uses_configured_url() {
    let client = ApiClient::new(&Config::with_base_url("http://localhost:3001/api/")).unwrap();
    assert_eq!(client.base_url(), "http://localhost:3001/api");
    assert_eq!(client.config().session.storage_key, "user_data");
}
