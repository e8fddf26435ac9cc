pub mod asset;
pub mod download;
pub mod error;
pub mod github;
pub mod http;
pub mod install;
pub mod platform;
pub mod runtime;
