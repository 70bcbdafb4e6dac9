use tracing::{error, info, instrument};

use crate::actor_framework::ResourceActor;
use crate::app_system::AppConfig;
use crate::clients::{ProductClient, ScanClient};
use crate::domain::{Product, ProductCreate};
use crate::product_actor::ProductError;
use crate::store::ProductStore;

/// Owns the product actor and hands out clients to it.
///
/// Responsible for starting the actor, wiring the clients together, and shutdown.
pub struct InventorySystem {
    pub product_client: ProductClient,
    pub scan_client: ScanClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InventorySystem {
    /// Starts the product actor over an empty store. Must be called inside a tokio runtime.
    #[instrument(name = "inventory_system", skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        Self::with_store(config, ProductStore::default())
    }

    pub fn with_store(config: &AppConfig, store: ProductStore) -> Self {
        let (product_actor, product_resource_client) =
            ResourceActor::new(config.actor.buffer_size, store);
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        let scan_client = ScanClient::new(product_client.clone());

        info!(buffer_size = config.actor.buffer_size, "Inventory system started");

        Self {
            product_client,
            scan_client,
            handles: vec![product_handle],
        }
    }

    /// Adds each product in order, stopping at the first failure.
    #[instrument(skip(self, products), fields(count = products.len()))]
    pub async fn seed(&self, products: &[ProductCreate]) -> Result<Vec<Product>, ProductError> {
        let mut created = Vec::with_capacity(products.len());
        for params in products {
            created.push(self.product_client.create_product(params.clone()).await?);
        }
        info!(count = created.len(), "Seeded products");
        Ok(created)
    }

    /// Drops every client held here and waits for the actor to drain.
    ///
    /// Clients cloned out of the system keep the actor alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.scan_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
