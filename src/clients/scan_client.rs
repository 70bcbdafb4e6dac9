use tracing::{info, instrument};

use crate::clients::ProductClient;
use crate::codec;
use crate::product_actor::ProductError;
use crate::scanner::ScanOutcome;

/// Scan orchestrator for the actor-backed store.
///
/// Decoding happens on the caller's task; the lookup and the gate run inside
/// the product actor as one request, so concurrent scans of the same product
/// are serialized.
#[derive(Clone)]
pub struct ScanClient {
    product_client: ProductClient,
}

impl ScanClient {
    pub fn new(product_client: ProductClient) -> Self {
        Self { product_client }
    }

    /// Every scanned text maps to a [`ScanOutcome`]. The only error is losing
    /// the product actor.
    #[instrument(skip(self, raw_text), fields(len = raw_text.len()))]
    pub async fn handle_scanned_text(&self, raw_text: &str) -> Result<ScanOutcome, ProductError> {
        info!("Processing scanned text");

        let snapshot = match codec::decode(raw_text) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                let outcome = ScanOutcome::Invalid(err);
                outcome.log();
                return Ok(outcome);
            }
        };

        let scanned = self.product_client.scan_product(snapshot.id.clone()).await?;
        let outcome = ScanOutcome::from_scan(snapshot.id, scanned);
        outcome.log();
        Ok(outcome)
    }
}
