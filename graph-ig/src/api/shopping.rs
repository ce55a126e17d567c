//! Product tagging and Instagram Shop operations.

use serde::Serialize;

use crate::client::InstagramApi;
use crate::envelope::{DataList, SuccessResponse};
use crate::query::QueryBuilder;
use crate::types::{AppealStatus, Catalog, Product, ProductTag};
use crate::{Result, TransportError};

/// One product tag to create or move on an IG Media.
#[derive(Debug, Clone, Serialize)]
pub struct ProductTagSpec {
    /// The tagged product.
    pub product_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<u64>,
    /// Horizontal position, 0.0..=1.0 from the left edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Vertical position, 0.0..=1.0 from the top edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// One product tag to remove from an IG Media.
#[derive(Debug, Clone, Serialize)]
pub struct DeletedProductTag {
    pub merchant_id: u64,
    pub product_id: u64,
}

/// Parameters for [`InstagramApi::create_product_tags`].
#[derive(Debug, Clone)]
pub struct CreateProductTagsRequest {
    /// The IG Media ID.
    pub media_id: u64,
    /// Tags to create or update.
    pub updated_tags: Vec<ProductTagSpec>,
}

/// Parameters for [`InstagramApi::get_product_tags`].
#[derive(Debug, Clone)]
pub struct GetProductTagsRequest {
    /// The IG Media ID.
    pub media_id: u64,
}

/// Parameters for [`InstagramApi::delete_product_tags`].
#[derive(Debug, Clone)]
pub struct DeleteProductTagsRequest {
    /// The IG Media ID.
    pub media_id: u64,
    /// Tags to remove.
    pub deleted_tags: Vec<DeletedProductTag>,
}

/// Parameters for [`InstagramApi::get_available_catalogs`].
#[derive(Debug, Clone)]
pub struct GetAvailableCatalogsRequest {
    /// The app user's app-scoped user ID.
    pub user_id: u64,
    /// Catalog fields to return for each catalog in the result set.
    pub fields: Vec<String>,
}

/// Parameters for [`InstagramApi::search_products`].
#[derive(Debug, Clone)]
pub struct SearchProductsRequest {
    /// The app user's app-scoped user ID.
    pub user_id: u64,
    /// The catalog to search.
    pub catalog_id: u64,
    /// Matched against each product's name or SKU number.
    pub query: String,
}

/// Parameters for [`InstagramApi::appeal_rejected_product`].
#[derive(Debug, Clone)]
pub struct AppealRejectedProductRequest {
    /// The IG User ID.
    pub user_id: u64,
    /// Explanation of why the product should be approved.
    pub appeal_reason: String,
    /// The rejected product.
    pub product_id: u64,
}

/// Parameters for [`InstagramApi::get_product_appeal_status`].
#[derive(Debug, Clone)]
pub struct GetProductAppealStatusRequest {
    /// The IG User ID.
    pub user_id: u64,
    /// The appealed product.
    pub product_id: u64,
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| TransportError::Json(e.to_string()).into())
}

impl InstagramApi {
    /// Create or update product tags on an IG Media.
    pub async fn create_product_tags(
        &self,
        request: CreateProductTagsRequest,
    ) -> Result<SuccessResponse> {
        let tags = to_json(&request.updated_tags)?;
        let path = QueryBuilder::new()
            .push_encoded("updated_tags", &tags)
            .append_to(&format!("{}/product_tags", request.media_id));
        self.post_json(&path).await
    }

    /// Get the product tags on an IG Media.
    pub async fn get_product_tags(
        &self,
        request: GetProductTagsRequest,
    ) -> Result<DataList<ProductTag>> {
        self.get_json(&format!("{}/product_tags", request.media_id))
            .await
    }

    /// Delete product tags on an existing IG Media.
    pub async fn delete_product_tags(
        &self,
        request: DeleteProductTagsRequest,
    ) -> Result<SuccessResponse> {
        let tags = to_json(&request.deleted_tags)?;
        let path = QueryBuilder::new()
            .push_encoded("deleted_tags", &tags)
            .append_to(&format!("{}/product_tags", request.media_id));
        self.delete_json(&path).await
    }

    /// Get the product catalogs in an IG User's Instagram Shop.
    pub async fn get_available_catalogs(
        &self,
        request: GetAvailableCatalogsRequest,
    ) -> Result<DataList<Catalog>> {
        let path = QueryBuilder::new()
            .push_list("fields", &request.fields)
            .append_to(&format!("{}/available_catalogs", request.user_id));
        self.get_json(&path).await
    }

    /// Search for tag-eligible products in a catalog.
    pub async fn search_products(
        &self,
        request: SearchProductsRequest,
    ) -> Result<DataList<Product>> {
        let path = QueryBuilder::new()
            .push("catalog_id", request.catalog_id)
            .push_encoded("q", &request.query)
            .append_to(&format!("{}/catalog_product_search", request.user_id));
        self.get_json(&path).await
    }

    /// Appeal a rejected product. The response indicates only that the
    /// appeal was received, not its outcome.
    pub async fn appeal_rejected_product(
        &self,
        request: AppealRejectedProductRequest,
    ) -> Result<SuccessResponse> {
        let path = QueryBuilder::new()
            .push_encoded("appeal_reason", &request.appeal_reason)
            .push("product_id", request.product_id)
            .append_to(&format!("{}/product_appeal", request.user_id));
        self.post_json(&path).await
    }

    /// Get the appeal status of a rejected product.
    pub async fn get_product_appeal_status(
        &self,
        request: GetProductAppealStatusRequest,
    ) -> Result<DataList<AppealStatus>> {
        let path = QueryBuilder::new()
            .push("product_id", request.product_id)
            .append_to(&format!("{}/product_appeal", request.user_id));
        self.get_json(&path).await
    }
}
