//! Scan authorization: the check-then-act rule applied to a product on every scan.
//!
//! Callers must run [`authorize_and_apply`] without yielding between reading and
//! writing the product. The store does this by holding `&mut Product`; the
//! resource actor does it by handling one request at a time.

use std::fmt;

use crate::domain::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    ScanLimitReached,
    OutOfStock,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::ScanLimitReached => f.write_str("scan limit reached"),
            RejectReason::OutOfStock => f.write_str("out of stock"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanVerdict {
    Accepted,
    Rejected(RejectReason),
}

impl ScanVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ScanVerdict::Accepted)
    }
}

/// Rejects when the scan limit is reached or stock is exhausted, leaving the
/// product untouched. Otherwise takes one unit and records one scan.
///
/// The scan limit is checked first, so a sold-out product reports
/// [`RejectReason::ScanLimitReached`].
pub fn authorize_and_apply(product: &mut Product) -> ScanVerdict {
    if product.current_scans >= product.scan_limit {
        return ScanVerdict::Rejected(RejectReason::ScanLimitReached);
    }
    if product.quantity == 0 {
        return ScanVerdict::Rejected(RejectReason::OutOfStock);
    }

    product.quantity -= 1;
    product.current_scans += 1;
    ScanVerdict::Accepted
}

/// Counter shown next to a scanned product, e.g. `2 / 5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanCount {
    pub shown: u32,
    pub limit: u32,
}

impl fmt::Display for ScanCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.shown, self.limit)
    }
}

/// Previews the count the next successful scan would reach, except once the
/// limit is reached, where the actual count is shown.
// NOTE: the asymmetry is intentional pending product-owner confirmation.
pub fn scan_count(product: &Product) -> ScanCount {
    let shown = if product.current_scans >= product.scan_limit {
        product.current_scans
    } else {
        product.current_scans.saturating_add(1)
    };

    ScanCount { shown, limit: product.scan_limit }
}
