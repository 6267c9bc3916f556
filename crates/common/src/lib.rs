pub mod config;
pub mod error;
pub mod playlist;
pub mod profile;
pub mod types;
