pub mod api;
pub mod error;
pub mod signing;
pub mod types;

pub use api::PdiffApi;
pub use error::{ApiError, ApiResult};
pub use types::*;
