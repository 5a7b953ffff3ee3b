//! Represents a product in the storefront catalog.
//!
//! Products are fixture data: built once when the system starts and handed to the
//! [`CatalogActor`](crate::catalog::CatalogActor), which never mutates them.
//!
//! See [`crate::catalog::fixture`] for the records shipped with the service.
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Kept as text so "3.60" is never re-rendered as 3.6.
    pub price: String,
    pub currency: String,
    pub url: String,
    pub images: Vec<String>,
    /// Stock count. 9999 means "effectively unlimited".
    pub quantity: u32,
    pub description: String,
}

impl Product {
    /// Creates a new Product priced in USD.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier
    /// * `title` - Display title
    /// * `price` - Decimal price, as text
    /// * `quantity` - Available stock quantity
    pub fn new(
        id: i64,
        title: impl Into<String>,
        price: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: ProductId(id),
            title: title.into(),
            price: price.into(),
            currency: "USD".to_string(),
            url: String::new(),
            images: Vec::new(),
            quantity,
            description: String::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.images.push(image.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Response payload of the catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListing {
    pub products: Vec<Product>,
    /// Always `false`: nothing is cached.
    pub cached: bool,
}

impl ProductListing {
    /// Wraps products read straight from the catalog.
    pub fn fresh(products: Vec<Product>) -> Self {
        Self {
            products,
            cached: false,
        }
    }
}
