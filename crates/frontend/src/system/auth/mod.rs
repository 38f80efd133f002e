//! Demo sign-in gate. No server: a non-empty name signs in.

pub mod context;
pub mod guard;
pub mod storage;
