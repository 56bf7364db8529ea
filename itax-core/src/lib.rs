pub mod calculations;
pub mod error;
pub mod models;

pub use calculations::breakdown::calculate_tax;
pub use calculations::common::round_to_rupee;
pub use error::InvalidInput;
pub use models::*;
