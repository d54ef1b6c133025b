//! Product catalog

use super::{DEFAULT_PER_PAGE, Identified};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

labelled_enum! {
    /// Catalog status of a product
    ProductStatus {
        /// Listed
        Active => "active",
        /// Being prepared, not yet listed
        Draft => "draft",
        /// Hidden pending review
        UnderReview => "under_review",
        /// No longer produced
        Discontinued => "discontinued",
    }
}

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Stock keeping unit
    #[serde(default)]
    pub sku: Option<String>,
    /// Owning company
    pub company_id: String,
    /// Owning company name, denormalized by the server
    #[serde(default)]
    pub company_name: Option<String>,
    /// Catalog category
    #[serde(default)]
    pub category: Option<String>,
    /// Catalog status
    pub status: ProductStatus,
    /// Transparency score (0-100), computed server-side
    #[serde(default)]
    pub transparency_score: Option<f64>,
    /// Number of traced suppliers
    #[serde(default)]
    pub supplier_count: u32,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Identified for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Query for `GET /admin/products`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilters {
    /// Page (1-based)
    pub page: u32,
    /// Rows per page
    pub per_page: u32,
    /// Free-text search over name and SKU
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Company predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    /// Category predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Status predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
}

impl Default for ProductFilters {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search: None,
            company_id: None,
            category: None,
            status: None,
        }
    }
}

page_filters!(ProductFilters);

/// Body of `POST /admin/products`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCreate {
    /// Product name
    pub name: String,
    /// Owning company
    pub company_id: String,
    /// Stock keeping unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Catalog category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Body of `PUT /admin/products/:id`; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdate {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New SKU
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// New category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
}
