//! Product-specific entity logic, including the scan action.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
