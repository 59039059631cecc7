//! Restaurant domain.
//!
//! - [`entities::Restaurant`]: a stored restaurant
//! - [`entities::NewRestaurant`]: unvalidated input for adding one
//! - [`value_objects::PriceTier`] / [`value_objects::Rating`]: bounded attributes

pub mod entities;
pub mod value_objects;

pub use entities::{NewRestaurant, Restaurant};
pub use value_objects::{PriceTier, Rating};
