use serde::Deserialize;
use validator::Validate;

use sd_core::domain::value_objects::NewOrderInput;
use sd_core::errors::{DomainError, FieldViolation, ValidationError};

use super::non_empty;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[serde(default, deserialize_with = "non_empty")]
    #[validate(required)]
    pub product: Option<String>,

    #[validate(required, range(exclusive_min = 0, code = "gt"))]
    pub quantity: Option<i32>,

    #[validate(required, range(exclusive_min = 0.0, code = "gt"))]
    pub price: Option<f64>,
}

impl CreateOrderRequest {
    pub fn into_input(self) -> Result<NewOrderInput, DomainError> {
        match (self.product, self.quantity, self.price) {
            (Some(product), Some(quantity), Some(price)) => Ok(NewOrderInput {
                product,
                quantity,
                price,
            }),
            (product, quantity, price) => Err(ValidationError::Fields(
                [
                    ("price", price.is_none()),
                    ("product", product.is_none()),
                    ("quantity", quantity.is_none()),
                ]
                .iter()
                .filter(|(_, absent)| *absent)
                .map(|(field, _)| FieldViolation::new(*field, "required", None))
                .collect(),
            )
            .into()),
        }
    }
}
