pub mod error;
pub mod health;
pub mod root;
pub mod scans;
pub mod traders;

pub use error::AppError;
