/// API client bound to the configured backend
pub mod client;
/// Application configuration module
pub mod config;
/// Resource adapter interfaces
pub mod interfaces;
/// Generic and domain services
pub mod services;
