mod error;
mod tickets_repository;

pub use error::*;
pub use tickets_repository::*;
