use crate::core::links;
use crate::core::resolver::AvailabilityResolver;
use crate::domain::model::{ClassificationResult, PharmacyRecord, TimeOfDay};
use crate::domain::ports::{Clock, PharmacyDirectory};
use crate::utils::error::{ErrorCategory, FarmaError};
use serde::Serialize;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Network,
    MalformedPayload,
    InvalidTimeFormat,
}

impl From<&FarmaError> for FailureKind {
    fn from(error: &FarmaError) -> Self {
        match error.category() {
            ErrorCategory::Payload => FailureKind::MalformedPayload,
            ErrorCategory::Data => FailureKind::InvalidTimeFormat,
            ErrorCategory::Network | ErrorCategory::Config | ErrorCategory::Io => {
                FailureKind::Network
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    /// Held only while `activate_until` owns the screen; callers never
    /// observe it once activation returns.
    Loading,
    Loaded,
    Failed(FailureKind),
    Cancelled,
}

impl LoadStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, LoadStatus::Loaded | LoadStatus::Failed(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoadStatus::Idle => "idle",
            LoadStatus::Loading => "loading",
            LoadStatus::Loaded => "loaded",
            LoadStatus::Failed(_) => "failed",
            LoadStatus::Cancelled => "cancelled",
        }
    }
}

/// One rendered pharmacy. Expansion is owned by the card.
#[derive(Debug, Clone, PartialEq)]
pub struct PharmacyCard {
    record: PharmacyRecord,
    expanded: bool,
}

impl PharmacyCard {
    pub fn new(record: PharmacyRecord) -> Self {
        Self {
            record,
            expanded: false,
        }
    }

    pub fn record(&self) -> &PharmacyRecord {
        &self.record
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn call_link(&self) -> String {
        links::call_link(&self.record.phone)
    }

    pub fn google_maps_link(&self) -> String {
        links::google_maps_link(self.record.coordinates())
    }

    pub fn waze_link(&self) -> String {
        links::waze_link(self.record.coordinates())
    }
}

/// The pharmacy list screen: fetches once per activation and holds the two
/// sections until it is dropped.
pub struct PharmacyScreen<D: PharmacyDirectory, C: Clock> {
    directory: D,
    resolver: AvailabilityResolver<C>,
    status: LoadStatus,
    classified_at: Option<TimeOfDay>,
    open: Vec<PharmacyCard>,
    closed: Vec<PharmacyCard>,
}

impl<D: PharmacyDirectory, C: Clock> PharmacyScreen<D, C> {
    pub fn new(directory: D, clock: C) -> Self {
        Self {
            directory,
            resolver: AvailabilityResolver::new(clock),
            status: LoadStatus::Idle,
            classified_at: None,
            open: Vec::new(),
            closed: Vec::new(),
        }
    }

    pub async fn activate(&mut self) -> LoadStatus {
        self.activate_until(std::future::pending::<()>()).await
    }

    /// Runs one fetch, racing it against `teardown`. If teardown completes
    /// first the request is dropped and no records are stored.
    pub async fn activate_until<F>(&mut self, teardown: F) -> LoadStatus
    where
        F: Future<Output = ()>,
    {
        self.status = LoadStatus::Loading;
        self.classified_at = None;
        self.open.clear();
        self.closed.clear();

        let outcome = tokio::select! {
            result = load(&self.directory, &self.resolver) => Some(result),
            _ = teardown => None,
        };

        self.status = match outcome {
            Some(Ok((at, result))) => {
                tracing::info!(
                    "Loaded {} pharmacies at {}: {} open, {} closed",
                    result.len(),
                    at,
                    result.open.len(),
                    result.closed.len()
                );
                self.classified_at = Some(at);
                self.open = result.open.into_iter().map(PharmacyCard::new).collect();
                self.closed = result.closed.into_iter().map(PharmacyCard::new).collect();
                LoadStatus::Loaded
            }
            Some(Err(e)) => {
                tracing::error!(
                    "Failed to load pharmacies: {} (Category: {:?})",
                    e,
                    e.category()
                );
                LoadStatus::Failed(FailureKind::from(&e))
            }
            None => {
                tracing::warn!("Screen torn down before the directory responded");
                LoadStatus::Cancelled
            }
        };

        self.status
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn classified_at(&self) -> Option<TimeOfDay> {
        self.classified_at
    }

    pub fn open_cards(&self) -> &[PharmacyCard] {
        &self.open
    }

    pub fn closed_cards(&self) -> &[PharmacyCard] {
        &self.closed
    }

    pub fn open_cards_mut(&mut self) -> &mut [PharmacyCard] {
        &mut self.open
    }

    pub fn closed_cards_mut(&mut self) -> &mut [PharmacyCard] {
        &mut self.closed
    }

    pub fn classification(&self) -> ClassificationResult {
        let records = |cards: &[PharmacyCard]| -> Vec<PharmacyRecord> {
            cards.iter().map(|c| c.record.clone()).collect()
        };
        ClassificationResult {
            open: records(&self.open),
            closed: records(&self.closed),
        }
    }
}

/// Completes when `signal` fires. A listener that failed to install is
/// logged and never completes, so it cannot tear the screen down.
pub async fn teardown_on<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("Teardown signal received, dropping in-flight fetch"),
        Err(err) => {
            tracing::error!("Unable to listen for teardown signal: {}", err);
            std::future::pending::<()>().await;
        }
    }
}

async fn load<D: PharmacyDirectory, C: Clock>(
    directory: &D,
    resolver: &AvailabilityResolver<C>,
) -> crate::utils::error::Result<(TimeOfDay, ClassificationResult)> {
    let records = directory.fetch_all().await?;
    resolver.resolve(records)
}
