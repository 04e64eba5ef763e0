pub mod error;
pub mod receipt;
pub mod tags;
