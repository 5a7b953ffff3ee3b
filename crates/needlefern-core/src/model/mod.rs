//! Pure data structures (DTOs) exchanged with the catalog and order intake services.

pub mod order;
pub mod product;

pub use order::*;
pub use product::*;
