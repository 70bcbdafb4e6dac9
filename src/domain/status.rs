use std::fmt;

use serde::{Deserialize, Serialize};

/// Display classification of a product, derived from its counters and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Available,
    ScanLimitReached,
    OutOfStock,
    /// Scan limit reached and no stock left.
    SoldOut,
}

impl ProductStatus {
    /// Classifies a `(quantity, current_scans, scan_limit)` triple.
    ///
    /// `SoldOut` wins over the two single-condition statuses.
    pub fn classify(quantity: u32, current_scans: u32, scan_limit: u32) -> Self {
        let limit_reached = current_scans >= scan_limit;
        let no_stock = quantity == 0;

        match (limit_reached, no_stock) {
            (true, true) => ProductStatus::SoldOut,
            (true, false) => ProductStatus::ScanLimitReached,
            (false, true) => ProductStatus::OutOfStock,
            (false, false) => ProductStatus::Available,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Available => "Available",
            ProductStatus::ScanLimitReached => "Scan Limit Reached",
            ProductStatus::OutOfStock => "Out of Stock",
            ProductStatus::SoldOut => "Sold Out",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ProductStatus::Available)
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sold_out_takes_precedence() {
        assert_eq!(ProductStatus::classify(0, 2, 2), ProductStatus::SoldOut);
        assert_eq!(ProductStatus::classify(0, 5, 2), ProductStatus::SoldOut);
    }

    #[test]
    fn single_conditions() {
        assert_eq!(ProductStatus::classify(1, 2, 2), ProductStatus::ScanLimitReached);
        assert_eq!(ProductStatus::classify(0, 1, 5), ProductStatus::OutOfStock);
        assert_eq!(ProductStatus::classify(2, 1, 2), ProductStatus::Available);
    }

    #[test]
    fn classification_is_total_over_small_grid() {
        for quantity in 0..5 {
            for scan_limit in 1..5 {
                for current_scans in 0..7 {
                    let status = ProductStatus::classify(quantity, current_scans, scan_limit);
                    let expected = match (current_scans >= scan_limit, quantity == 0) {
                        (true, true) => ProductStatus::SoldOut,
                        (true, false) => ProductStatus::ScanLimitReached,
                        (false, true) => ProductStatus::OutOfStock,
                        (false, false) => ProductStatus::Available,
                    };
                    assert_eq!(status, expected);
                    assert_eq!(
                        status,
                        ProductStatus::classify(quantity, current_scans, scan_limit)
                    );
                }
            }
        }
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&ProductStatus::ScanLimitReached).unwrap();
        assert_eq!(json, "\"scan_limit_reached\"");
        assert_eq!(ProductStatus::OutOfStock.to_string(), "Out of Stock");
    }
}
