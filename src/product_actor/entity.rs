use crate::actor_framework::{Entity, FrameworkError};
use crate::codec;
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::gate;
use super::actions::{ProductAction, ProductActionResult};

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type Patch = ProductPatch;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Product with zero scans and a payload fixed to this initial state.
    ///
    /// # Errors
    /// Rejects a zero scan limit and a negative or non-finite price.
    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, FrameworkError> {
        if params.scan_limit == 0 {
            return Err(FrameworkError::InvalidParams("scan limit must be at least 1".into()));
        }
        if !params.price.is_finite() || params.price < 0.0 {
            return Err(FrameworkError::InvalidParams(format!(
                "price must be a non-negative number, got {}",
                params.price
            )));
        }

        let qr_payload = codec::encode(&params.initial_snapshot(id.as_str()))
            .map_err(|e| FrameworkError::Encode(e.to_string()))?;

        Ok(Self {
            id,
            name: params.name,
            location: params.location,
            quantity: params.quantity,
            price: params.price,
            check_in_date: params.check_in_date,
            check_out_date: params.check_out_date,
            scan_limit: params.scan_limit,
            current_scans: 0,
            qr_payload,
        })
    }

    /// Administrative edits are not validated; only scans are gated.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), FrameworkError> {
        patch.apply_to(self);
        Ok(())
    }

    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, FrameworkError> {
        match action {
            ProductAction::Scan => {
                let verdict = gate::authorize_and_apply(self);
                Ok(ProductActionResult::Scan { product: self.clone(), verdict })
            }
        }
    }
}
