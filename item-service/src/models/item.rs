use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A product record in the catalogue.
///
/// Optional fields deserialize to `None` when absent and serialize as
/// `null`. Numeric fields also accept numeric strings, and `id` accepts a
/// whole-valued float. Unknown fields on input are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "name": "Laptop Pro",
    "description": "High-performance laptop for professionals",
    "price": 1500.0,
    "tax": 150.0
}))]
pub struct Item {
    #[serde(deserialize_with = "crate::models::lax::integer")]
    pub id: i64,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "crate::models::lax::float")]
    pub price: f64,
    #[serde(default, deserialize_with = "crate::models::lax::optional_float")]
    pub tax: Option<f64>,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            price,
            tax: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tax(mut self, tax: f64) -> Self {
        self.tax = Some(tax);
        self
    }
}

/// Records present at startup, in listing order.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new(1, "Smartphone X", 999.99)
            .with_description("Latest model smartphone")
            .with_tax(50.0),
        Item::new(2, "Wireless Earbuds", 149.99).with_description("Noise-cancelling earbuds"),
        Item::new(3, "Smartwatch 5", 299.99)
            .with_description("Fitness tracker and smartwatch")
            .with_tax(20.0),
    ]
}
