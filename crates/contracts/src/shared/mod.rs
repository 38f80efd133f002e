pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod save;
pub mod scale;
pub mod summary;
