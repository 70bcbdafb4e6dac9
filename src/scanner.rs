//! # Scan Orchestrator
//!
//! Entry point for decoded QR text: decode, resolve, gate. Every input maps to
//! a [`ScanOutcome`]; nothing here fails.

use tracing::{info, instrument, warn};

use crate::codec::{self, DecodeError};
use crate::domain::{Product, ProductStatus};
use crate::gate::{self, RejectReason, ScanCount, ScanVerdict};
use crate::notify::Notice;
use crate::store::ProductStore;

#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// Scan accepted; the product reflects the new counters.
    Applied(Product),
    /// Gate closed; the product is returned unchanged so its status can still be shown.
    Rejected { product: Product, reason: RejectReason },
    /// Payload decoded but no product has that id.
    NotFound { id: String },
    /// Payload could not be decoded. The store was not consulted.
    Invalid(DecodeError),
}

impl ScanOutcome {
    /// Maps the result of a lookup-and-gate step for `id`.
    pub fn from_scan(id: String, scanned: Option<(Product, ScanVerdict)>) -> Self {
        match scanned {
            Some((product, ScanVerdict::Accepted)) => ScanOutcome::Applied(product),
            Some((product, ScanVerdict::Rejected(reason))) => ScanOutcome::Rejected { product, reason },
            None => ScanOutcome::NotFound { id },
        }
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            ScanOutcome::Applied(product) | ScanOutcome::Rejected { product, .. } => Some(product),
            ScanOutcome::NotFound { .. } | ScanOutcome::Invalid(_) => None,
        }
    }

    pub fn status(&self) -> Option<ProductStatus> {
        self.product().map(Product::status)
    }

    pub fn scan_count(&self) -> Option<ScanCount> {
        self.product().map(gate::scan_count)
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, ScanOutcome::Applied(_))
    }

    pub fn notice(&self) -> Notice {
        Notice::from(self)
    }

    pub(crate) fn log(&self) {
        match self {
            ScanOutcome::Applied(product) => info!(
                product_id = %product.id,
                quantity = product.quantity,
                current_scans = product.current_scans,
                "Scan applied"
            ),
            ScanOutcome::Rejected { product, reason } => {
                warn!(product_id = %product.id, %reason, "Scan rejected")
            }
            ScanOutcome::NotFound { id } => warn!(product_id = %id, "Scanned product not found"),
            ScanOutcome::Invalid(err) => warn!(error = %err, "Invalid QR code data"),
        }
    }
}

/// Handles one decoded text against a store owned by the caller.
#[instrument(skip(store, raw_text), fields(len = raw_text.len()))]
pub fn handle_scanned_text(store: &mut ProductStore, raw_text: &str) -> ScanOutcome {
    let outcome = match codec::decode(raw_text) {
        Ok(snapshot) => {
            let scanned = store.apply_scan(&snapshot.id);
            ScanOutcome::from_scan(snapshot.id, scanned)
        }
        Err(err) => ScanOutcome::Invalid(err),
    };
    outcome.log();
    outcome
}
