pub mod config;
pub mod global;
pub mod http;
pub mod provider;
pub mod sources;
pub mod tool;
pub mod upstream;
