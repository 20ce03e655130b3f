use tracing::{debug, info, instrument, warn};
use crate::actor_framework::ResourceClient;
use crate::catalog::{self, QueryParams};
use crate::domain::{Product, ProductCreate, Session};
use crate::product_actor::ProductError;

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
    placeholder_image: String,
    related_limit: usize,
}

impl_client_methods!(ProductClient, Product, ProductError, product);

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>, placeholder_image: impl Into<String>, related_limit: usize) -> Self {
        Self {
            inner,
            placeholder_image: placeholder_image.into(),
            related_limit,
        }
    }

    /// The whole catalog in catalog order.
    pub async fn get_all(&self) -> Result<Vec<Product>, ProductError> {
        self.list_products().await
    }

    /// Adds a product on behalf of `session`, which must belong to an admin.
    #[instrument(skip(self, session), fields(user_id = session.user().map(|u| u.id.as_str())))]
    pub async fn add_product(&self, session: &Session, mut params: ProductCreate) -> Result<Product, ProductError> {
        if !session.is_admin() {
            warn!("Rejected product add from non-admin session");
            return Err(ProductError::Forbidden);
        }
        if params.image.trim().is_empty() {
            params.image = self.placeholder_image.clone();
        }
        debug!("Sending request");
        let product = self.inner.create(params).await?;
        info!(product_id = %product.id, "Product added");
        Ok(product)
    }

    /// Runs the catalog query engine over the current catalog.
    #[instrument(skip(self))]
    pub async fn search(&self, params: &QueryParams) -> Result<Vec<Product>, ProductError> {
        let products = self.get_all().await?;
        let results = catalog::query(&products, params);
        debug!(matched = results.len(), total = products.len(), "Catalog query complete");
        Ok(results)
    }

    pub async fn categories(&self) -> Result<Vec<String>, ProductError> {
        Ok(catalog::categories(&self.get_all().await?))
    }

    /// Other products from the same category as `id`.
    #[instrument(skip(self))]
    pub async fn related(&self, id: String) -> Result<Vec<Product>, ProductError> {
        let products = self.get_all().await?;
        let product = catalog::find_by_id(&products, &id)
            .ok_or_else(|| ProductError::NotFound(id.clone()))?;
        Ok(catalog::related(&products, product, self.related_limit))
    }
}
