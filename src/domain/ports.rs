use crate::domain::model::{PharmacyRecord, TimeOfDay};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of pharmacy records. One call is one request; implementations do
/// not retry.
#[async_trait]
pub trait PharmacyDirectory: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<PharmacyRecord>>;
}

pub trait Clock: Send + Sync {
    /// Current local wall-clock time of day.
    fn now(&self) -> TimeOfDay;
}
