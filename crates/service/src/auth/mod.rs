//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Centralizes registration, login and bearer-token resolution.

pub mod domain;
pub mod errors;
pub mod repo;
pub mod repository;
pub mod service;
pub mod token;

pub use service::AuthService;
