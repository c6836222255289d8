pub mod catalog;
pub mod config;
pub mod equipment;
pub mod error;
pub mod share;
pub mod types;

pub use catalog::Catalog;
pub use config::PpeConfig;
pub use error::{PpeError, Result};
pub use share::ShareLinks;
pub use types::*;
