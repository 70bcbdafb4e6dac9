use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::codec::QrPayload;
use super::status::ProductStatus;

/// Represents a tracked inventory item.
///
/// The `qr_payload` is fixed when the product is created and encodes the
/// initial snapshot (with zero scans). It is never regenerated.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub location: String,
    pub quantity: u32,
    pub price: f64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub scan_limit: u32,
    pub current_scans: u32,
    pub qr_payload: QrPayload,
}

impl Product {
    /// Current status derived from the counters.
    pub fn status(&self) -> ProductStatus {
        ProductStatus::classify(self.quantity, self.current_scans, self.scan_limit)
    }

    /// Identifying fields as they would appear in a payload.
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            location: self.location.clone(),
            quantity: self.quantity,
            price: self.price,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            scan_limit: self.scan_limit,
            current_scans: self.current_scans,
        }
    }
}

/// The content of a QR payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub id: String,
    pub name: String,
    pub location: String,
    pub quantity: u32,
    pub price: f64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub scan_limit: u32,
    pub current_scans: u32,
}

/// Payload for creating a new product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub location: String,
    pub quantity: u32,
    pub price: f64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub scan_limit: u32,
}

impl ProductCreate {
    /// Snapshot a freshly created product with this id would carry.
    pub fn initial_snapshot(&self, id: impl Into<String>) -> ProductSnapshot {
        ProductSnapshot {
            id: id.into(),
            name: self.name.clone(),
            location: self.location.clone(),
            quantity: self.quantity,
            price: self.price,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            scan_limit: self.scan_limit,
            current_scans: 0,
        }
    }
}

/// Administrative edit. `id` and `qr_payload` cannot be patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub quantity: Option<u32>,
    pub price: Option<f64>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub scan_limit: Option<u32>,
    pub current_scans: Option<u32>,
}

impl ProductPatch {
    /// Merges every present field into `product`.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(location) = self.location {
            product.location = location;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(date) = self.check_in_date {
            product.check_in_date = date;
        }
        if let Some(date) = self.check_out_date {
            product.check_out_date = date;
        }
        if let Some(scan_limit) = self.scan_limit {
            product.scan_limit = scan_limit;
        }
        if let Some(current_scans) = self.current_scans {
            product.current_scans = current_scans;
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn widget(quantity: u32, scan_limit: u32) -> ProductCreate {
        ProductCreate {
            name: "Widget".to_string(),
            location: "Aisle 4".to_string(),
            quantity,
            price: 12.5,
            check_in_date: date(2024, 1, 10),
            check_out_date: date(2024, 2, 10),
            scan_limit,
        }
    }

    pub fn product(quantity: u32, scan_limit: u32, current_scans: u32) -> Product {
        Product {
            id: "p1".to_string(),
            name: "Widget".to_string(),
            location: "Aisle 4".to_string(),
            quantity,
            price: 12.5,
            check_in_date: date(2024, 1, 10),
            check_out_date: date(2024, 2, 10),
            scan_limit,
            current_scans,
            qr_payload: QrPayload::from("{}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn patch_merges_only_present_fields() {
        let mut product = product(3, 2, 0);
        let payload = product.qr_payload.clone();

        ProductPatch {
            quantity: Some(9),
            location: Some("Dock".to_string()),
            ..Default::default()
        }
        .apply_to(&mut product);

        assert_eq!(product.quantity, 9);
        assert_eq!(product.location, "Dock");
        assert_eq!(product.name, "Widget");
        assert_eq!(product.scan_limit, 2);
        assert_eq!(product.qr_payload, payload);
    }

    #[test]
    fn patch_may_set_counters_past_the_limit() {
        let mut product = product(3, 2, 0);
        ProductPatch { current_scans: Some(7), ..Default::default() }.apply_to(&mut product);
        assert_eq!(product.current_scans, 7);
    }

    #[test]
    fn initial_snapshot_starts_at_zero_scans() {
        let snapshot = widget(3, 2).initial_snapshot("abc");
        assert_eq!(snapshot.id, "abc");
        assert_eq!(snapshot.current_scans, 0);
        assert_eq!(snapshot.quantity, 3);
    }
}
