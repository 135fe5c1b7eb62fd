//! Bootstrap step outcomes
//!
//! Each step of the sequence produces exactly one [`StepOutcome`]; outcomes
//! are never mutated after creation and are consumed by the final report.

use serde::Serialize;

/// How a single bootstrap step ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepStatus {
    /// The step did what it set out to do
    Succeeded,
    /// The step failed but the sequence continues (warn-and-continue tier)
    FailedNonFatal,
    /// The step failed and the run aborts (SDK acquisition only)
    FailedFatal,
}

/// Outcome of one bootstrap step
#[derive(Clone, Debug, Serialize)]
pub struct StepOutcome {
    /// Stable step identifier, e.g. "sdk-acquire"
    pub id: &'static str,
    pub status: StepStatus,
    /// Human-readable outcome for the report
    pub message: String,
}

impl StepOutcome {
    pub fn succeeded(id: &'static str, message: impl Into<String>) -> Self {
        StepOutcome {
            id,
            status: StepStatus::Succeeded,
            message: message.into(),
        }
    }

    pub fn failed(id: &'static str, message: impl Into<String>) -> Self {
        StepOutcome {
            id,
            status: StepStatus::FailedNonFatal,
            message: message.into(),
        }
    }

    pub fn fatal(id: &'static str, message: impl Into<String>) -> Self {
        StepOutcome {
            id,
            status: StepStatus::FailedFatal,
            message: message.into(),
        }
    }
}
