use std::sync::Arc;

use thiserror::Error;
use tracing::{info, instrument};

use crate::clients::ProductClient;
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::notify::Notice;
use crate::product_actor::ProductError;
use super::session::{AuthError, Authenticator, SessionManager, SessionToken};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdminError {
    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] AuthError),
    #[error(transparent)]
    Product(#[from] ProductError),
}

impl AdminError {
    pub fn notice(&self) -> Notice {
        Notice::error(self.to_string())
    }
}

/// Product management for a logged-in administrator.
///
/// Every call checks the session first; product operations pass through to
/// the product actor unchanged.
pub struct AdminConsole<A: Authenticator> {
    sessions: Arc<SessionManager<A>>,
    products: ProductClient,
}

impl<A: Authenticator> AdminConsole<A> {
    pub fn new(sessions: Arc<SessionManager<A>>, products: ProductClient) -> Self {
        Self { sessions, products }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<(SessionToken, Notice), AdminError> {
        let token = self.sessions.login(username, password).await?;
        Ok((token, Notice::success("Successfully logged in")))
    }

    pub async fn logout(&self, token: &SessionToken) -> Notice {
        self.sessions.logout(token).await;
        Notice::success("Logged out successfully")
    }

    #[instrument(skip_all, fields(product_name = %params.name))]
    pub async fn add_product(
        &self,
        token: &SessionToken,
        params: ProductCreate,
    ) -> Result<(Product, Notice), AdminError> {
        self.sessions.validate(token).await?;
        let product = self.products.create_product(params).await?;
        info!(product_id = %product.id, "Product added");
        Ok((product, Notice::success("Product added successfully")))
    }

    #[instrument(skip(self, token, patch))]
    pub async fn update_product(
        &self,
        token: &SessionToken,
        id: &str,
        patch: ProductPatch,
    ) -> Result<(Option<Product>, Notice), AdminError> {
        self.sessions.validate(token).await?;
        let updated = self.products.update_product(id.to_string(), patch).await?;
        let notice = match &updated {
            Some(_) => Notice::success("Product updated successfully"),
            None => Notice::info("Product no longer exists"),
        };
        Ok((updated, notice))
    }

    #[instrument(skip(self, token))]
    pub async fn delete_product(&self, token: &SessionToken, id: &str) -> Result<Notice, AdminError> {
        self.sessions.validate(token).await?;
        let removed = self.products.delete_product(id.to_string()).await?;
        Ok(if removed {
            Notice::success("Product deleted successfully")
        } else {
            Notice::info("Product no longer exists")
        })
    }

    pub async fn get_product(&self, token: &SessionToken, id: &str) -> Result<Option<Product>, AdminError> {
        self.sessions.validate(token).await?;
        Ok(self.products.get_product(id.to_string()).await?)
    }

    pub async fn list_products(&self, token: &SessionToken) -> Result<Vec<Product>, AdminError> {
        self.sessions.validate(token).await?;
        Ok(self.products.list_products().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_system::{AppConfig, InventorySystem};
    use crate::codec;
    use crate::domain::product::fixtures::widget;
    use crate::admin::StaticAuthenticator;
    use crate::notify::NoticeLevel;

    fn console(system: &InventorySystem) -> AdminConsole<StaticAuthenticator> {
        let sessions = Arc::new(SessionManager::new(StaticAuthenticator::new("admin", "secret")));
        AdminConsole::new(sessions, system.product_client.clone())
    }

    #[tokio::test]
    async fn manages_products_with_a_session() {
        let system = InventorySystem::new(&AppConfig::default());
        let admin = console(&system);

        let (token, notice) = admin.login("admin", "secret").await.unwrap();
        assert_eq!(notice.message, "Successfully logged in");

        let (product, notice) = admin.add_product(&token, widget(3, 2)).await.unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert!(codec::decode(product.qr_payload.as_str()).is_ok());

        let patch = ProductPatch { price: Some(99.0), ..Default::default() };
        let (updated, _) = admin.update_product(&token, &product.id, patch).await.unwrap();
        assert_eq!(updated.unwrap().price, 99.0);

        let listed = admin.list_products(&token).await.unwrap();
        assert_eq!(listed.len(), 1);

        let notice = admin.delete_product(&token, &product.id).await.unwrap();
        assert_eq!(notice.message, "Product deleted successfully");
        let notice = admin.delete_product(&token, &product.id).await.unwrap();
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(admin.get_product(&token, &product.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn rejects_without_a_session() {
        let system = InventorySystem::new(&AppConfig::default());
        let admin = console(&system);

        assert_eq!(
            admin.login("admin", "wrong").await.unwrap_err(),
            AdminError::Unauthorized(AuthError::InvalidCredentials)
        );

        let token = SessionToken::from("forged".to_string());
        let result = admin.add_product(&token, widget(1, 1)).await;
        assert_eq!(result.unwrap_err(), AdminError::Unauthorized(AuthError::InvalidSession));

        let (token, _) = admin.login("admin", "secret").await.unwrap();
        admin.logout(&token).await;
        assert!(matches!(admin.list_products(&token).await, Err(AdminError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn invalid_params_surface_as_product_errors() {
        let system = InventorySystem::new(&AppConfig::default());
        let admin = console(&system);
        let (token, _) = admin.login("admin", "secret").await.unwrap();

        let err = admin.add_product(&token, widget(1, 0)).await.unwrap_err();
        assert!(matches!(err, AdminError::Product(ProductError::InvalidProduct(_))));
        assert_eq!(err.notice().level, NoticeLevel::Error);
    }
}
