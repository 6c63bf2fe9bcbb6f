//! Market report: a pipeline outcome plus the generated analysis, shaped for
//! display.

use crate::analysis::AnalysisClient;
use crate::pipeline::{Pipeline, QueryOutcome};
use crate::search::Business;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const ANALYSIS_FAILED: &str =
    "Error: The AI model failed to generate an analysis. Please try again later.";

pub const MISSING_INPUT: &str = "Please enter both a location and a business type.";

#[derive(Debug, Clone, Serialize)]
pub struct MarketReport {
    pub location: String,
    pub category: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Business>>,
    pub generated_at: DateTime<Utc>,
}

/// Trimmed location and category, both non-empty.
pub fn validate_input<'a>(location: &'a str, category: &'a str) -> Option<(&'a str, &'a str)> {
    let (location, category) = (location.trim(), category.trim());
    if location.is_empty() || category.is_empty() {
        None
    } else {
        Some((location, category))
    }
}

impl MarketReport {
    /// Build a report from an outcome. The analyst is only consulted on
    /// success; `None` skips the analysis step.
    pub fn from_outcome(
        outcome: QueryOutcome,
        analyst: Option<&dyn AnalysisClient>,
        location: &str,
        category: &str,
    ) -> Self {
        let status = outcome.status();
        let (analysis, data) = match outcome {
            QueryOutcome::Success { businesses } => {
                let analysis = analyst.map(|a| match a.generate(&businesses, category, location) {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::error!(error = %e, "analysis generation failed");
                        ANALYSIS_FAILED.to_string()
                    }
                });
                (analysis, Some(businesses))
            }
            QueryOutcome::NoResults => (None, None),
            QueryOutcome::Failure { message } => (Some(message), None),
        };

        Self {
            location: location.to_string(),
            category: category.to_string(),
            status,
            analysis,
            data,
            generated_at: Utc::now(),
        }
    }

    /// Run the pipeline and build the report in one step.
    pub fn generate(
        pipeline: &Pipeline,
        analyst: Option<&dyn AnalysisClient>,
        location: &str,
        category: &str,
    ) -> Self {
        let outcome = pipeline.run(location, category);
        Self::from_outcome(outcome, analyst, location, category)
    }

    pub fn is_error(&self) -> bool {
        self.status == "error"
    }
}
