//! GetLatestReportHandler - Query handler for the results view.

use std::sync::Arc;

use tracing::warn;

use crate::domain::analysis::ScreeningReport;
use crate::domain::foundation::AssessmentId;
use crate::ports::AssessmentStore;

/// Query for the most recent completed assessment's report.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetLatestReportQuery;

/// The stored assessment's id with its scored report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestReport {
    pub assessment_id: AssessmentId,
    pub report: ScreeningReport,
}

/// Handler for retrieving the latest report.
pub struct GetLatestReportHandler {
    store: Arc<dyn AssessmentStore>,
}

impl GetLatestReportHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    /// `None` when nothing usable is stored.
    pub async fn handle(&self, _query: GetLatestReportQuery) -> Option<LatestReport> {
        let completed = match self.store.load_latest().await {
            Ok(completed) => completed?,
            Err(err) => {
                warn!(error = %err, "Ignoring unreadable completed assessment");
                return None;
            }
        };

        Some(LatestReport {
            assessment_id: completed.assessment_id,
            report: ScreeningReport::generate(&completed.record, completed.variant),
        })
    }
}
