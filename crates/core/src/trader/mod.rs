mod error;
mod operations;
mod requests;
mod types;

pub use error::TraderError;
pub use operations::validate_trader;
pub use requests::{CreateTraderRequest, UpdateTraderRequest};
pub use types::Trader;
