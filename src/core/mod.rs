pub mod links;
pub mod resolver;

pub use crate::domain::model::{ClassificationResult, PharmacyRecord, TimeOfDay};
pub use crate::domain::ports::{Clock, PharmacyDirectory};
pub use crate::utils::error::Result;
