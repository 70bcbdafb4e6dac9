//! Typed handles over the resource actor.

#[macro_use]
mod macros;
mod product_client;
mod scan_client;

pub use product_client::ProductClient;
pub use scan_client::ScanClient;
