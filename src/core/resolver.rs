use crate::domain::model::{ClassificationResult, PharmacyRecord, TimeOfDay};
use crate::domain::ports::Clock;
use crate::utils::error::Result;

/// Splits `records` into those open and those closed at `now`.
///
/// A record is open iff `opens_at <= now <= closes_at`, inclusive at both
/// ends. Windows that cross midnight (`closes_at < opens_at`) are not
/// special-cased and therefore never open. Any unparseable opening or
/// closing time fails the whole call.
pub fn classify(records: Vec<PharmacyRecord>, now: TimeOfDay) -> Result<ClassificationResult> {
    classify_hours(records, now.as_fractional_hours())
}

// `now` is fractional hours within `0.0..=24.0`, always produced from a
// `TimeOfDay`.
fn classify_hours(records: Vec<PharmacyRecord>, now: f64) -> Result<ClassificationResult> {
    debug_assert!((0.0..=24.0).contains(&now), "now out of range: {}", now);

    let mut result = ClassificationResult::default();

    for record in records {
        let (opens_at, closes_at) = record.opening_window()?;
        let open_hour = opens_at.as_fractional_hours();
        let close_hour = closes_at.as_fractional_hours();

        if open_hour <= now && now <= close_hour {
            result.open.push(record);
        } else {
            result.closed.push(record);
        }
    }

    Ok(result)
}

/// [`classify`] against the time reported by a [`Clock`].
pub struct AvailabilityResolver<C: Clock> {
    clock: C,
}

impl<C: Clock> AvailabilityResolver<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn now(&self) -> TimeOfDay {
        self.clock.now()
    }

    /// Classifies at the clock's current time and returns that time with
    /// the result.
    pub fn resolve(
        &self,
        records: Vec<PharmacyRecord>,
    ) -> Result<(TimeOfDay, ClassificationResult)> {
        let now = self.now();
        tracing::debug!("Classifying {} records at {}", records.len(), now);
        Ok((now, classify(records, now)?))
    }
}
