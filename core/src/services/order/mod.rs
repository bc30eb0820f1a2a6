//! Order service module.

mod service;

pub use service::OrderService;

#[cfg(test)]
mod tests;
