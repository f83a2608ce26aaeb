//! Core library components.

pub mod cipher;
pub mod format;
pub mod generate;
pub mod recipient;
pub mod sort;
pub mod store;
