//! Validated input for order creation.

/// Order fields supplied by the client
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderInput {
    pub product: String,
    pub quantity: i32,
    pub price: f64,
}
