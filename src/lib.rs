pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Cli;

pub use adapters::{
    clock::{FixedClock, SystemClock},
    http::HttpDirectory,
};
pub use app::screen::{FailureKind, LoadStatus, PharmacyCard, PharmacyScreen};
pub use config::AppConfig;
pub use crate::core::resolver::{classify, AvailabilityResolver};
pub use domain::model::{ClassificationResult, PharmacyRecord, TimeOfDay};
pub use utils::error::{FarmaError, Result};
