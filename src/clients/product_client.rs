use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::gate::ScanVerdict;
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self, params), fields(product_name = %params.name))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    /// Returns `None` when the product does not exist.
    #[instrument(skip(self, patch))]
    pub async fn update_product(
        &self,
        id: String,
        patch: ProductPatch,
    ) -> Result<Option<Product>, ProductError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    /// Looks up and gates the product in a single actor step.
    #[instrument(skip(self))]
    pub async fn scan_product(&self, id: String) -> Result<Option<(Product, ScanVerdict)>, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::Scan).await? {
            Some(ProductActionResult::Scan { product, verdict }) => Ok(Some((product, verdict))),
            None => Ok(None),
        }
    }
}
