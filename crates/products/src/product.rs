use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stocksavvy_core::{DomainError, Entity, ProductId};

/// Catalog category (fixed label set offered by the product form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Food,
    Beverages,
    Furniture,
    #[serde(rename = "Office Supplies")]
    OfficeSupplies,
    Other,
}

impl Category {
    /// Every category, in the order the form lists them.
    pub const ALL: [Category; 7] = [
        Category::Electronics,
        Category::Clothing,
        Category::Food,
        Category::Beverages,
        Category::Furniture,
        Category::OfficeSupplies,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Food => "Food",
            Category::Beverages => "Beverages",
            Category::Furniture => "Furniture",
            Category::OfficeSupplies => "Office Supplies",
            Category::Other => "Other",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::validation(format!("unknown category: {wanted}")))
    }
}

/// A product record without its identifier.
///
/// This is what callers hand to `add` and `update`; the store owns id
/// assignment. No field is validated on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub sku: String,
    pub category: Category,
    pub quantity: u32,
    /// Low-stock cutoff: the product is low on stock at or below this quantity.
    pub threshold: u32,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ProductFields {
    pub fn new(name: impl Into<String>, sku: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            sku: sku.into(),
            category,
            quantity: 0,
            threshold: 0,
            price: Decimal::ZERO,
            expiry_date: None,
            image_url: None,
        }
    }

    pub fn with_stock(mut self, quantity: u32, threshold: u32) -> Self {
        self.quantity = quantity;
        self.threshold = threshold;
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    pub fn with_expiry_date(mut self, expiry_date: NaiveDate) -> Self {
        self.expiry_date = Some(expiry_date);
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Checks the form's required fields.
    ///
    /// Opt-in for the form layer; stores accept records that fail this check.
    /// SKU uniqueness is not checked here (it needs the whole catalog).
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(DomainError::validation("price cannot be negative"));
        }
        Ok(())
    }
}

/// A stored catalog product: an immutable id plus replaceable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    #[serde(flatten)]
    fields: ProductFields,
}

impl Product {
    pub fn from_fields(id: ProductId, fields: ProductFields) -> Self {
        Self { id, fields }
    }

    pub fn fields(&self) -> &ProductFields {
        &self.fields
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn sku(&self) -> &str {
        &self.fields.sku
    }

    pub fn category(&self) -> Category {
        self.fields.category
    }

    pub fn quantity(&self) -> u32 {
        self.fields.quantity
    }

    pub fn threshold(&self) -> u32 {
        self.fields.threshold
    }

    pub fn price(&self) -> Decimal {
        self.fields.price
    }

    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.fields.expiry_date
    }

    pub fn image_url(&self) -> Option<&str> {
        self.fields.image_url.as_deref()
    }

    /// Value of the units on hand (`price * quantity`).
    pub fn stock_value(&self) -> Decimal {
        self.fields.price * Decimal::from(self.fields.quantity)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
