use crate::domain::Product;
use crate::gate::ScanVerdict;

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Runs the scan gate: takes one unit and records one scan when allowed.
    Scan,
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    /// The product as it stands after the gate, plus the verdict.
    Scan { product: Product, verdict: ScanVerdict },
}
