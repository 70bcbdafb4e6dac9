//! # QR Inventory
//!
//! Inventory items identified by QR codes, each with a finite quantity and a
//! finite number of allowed scans.
//!
//! ## Layout
//!
//! - **Domain** - [`domain::Product`], [`domain::ProductStatus`]
//! - **Codec** - [`codec::encode`] / [`codec::decode`] for QR payload text
//! - **Gate** - [`gate::authorize_and_apply`], the check-then-act scan rule
//! - **Store** - [`store::ProductStore`], single-owner in-memory records
//! - **Orchestrator** - [`scanner::handle_scanned_text`] for a store you own,
//!   [`clients::ScanClient`] for the actor-backed store
//! - **Actor** - [`actor_framework::ResourceActor`] serializes every mutation
//! - **System** - [`app_system::InventorySystem`], config, tracing setup
//! - **Admin** - [`admin::AdminConsole`], session-gated product management
//!
//! ## Example
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use qr_inventory::app_system::{AppConfig, InventorySystem};
//!
//! let config = AppConfig::load(None)?;
//! let system = InventorySystem::new(&config);
//! let products = system.seed(&config.products).await?;
//!
//! for product in &products {
//!     let outcome = system.scan_client.handle_scanned_text(product.qr_payload.as_str()).await?;
//!     println!("{}", outcome.notice());
//! }
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod admin;
pub mod app_system;
pub mod clients;
pub mod codec;
pub mod domain;
pub mod gate;
pub mod notify;
pub mod product_actor;
pub mod scanner;
pub mod store;

#[cfg(test)]
mod mock_framework;
