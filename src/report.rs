//! Final run report
//!
//! Collects the step outcomes and renders the summary the operator (or a
//! calling agent) triages after the run. Can also be written as JSON for
//! machine consumption.

use std::path::Path;

use console::Style;
use serde::Serialize;

use crate::step::{StepOutcome, StepStatus};

/// Accumulated outcomes of one bootstrap run
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    pub steps: Vec<StepOutcome>,
}

impl RunReport {
    pub fn new() -> Self {
        RunReport::default()
    }

    /// Record one step outcome
    pub fn push(&mut self, outcome: StepOutcome) {
        self.steps.push(outcome);
    }

    /// Record several outcomes from one component
    pub fn extend(&mut self, outcomes: Vec<StepOutcome>) {
        self.steps.extend(outcomes);
    }

    /// Whether any recorded step was fatal
    pub fn has_fatal(&self) -> bool {
        self.steps
            .iter()
            .any(|s| s.status == StepStatus::FailedFatal)
    }

    /// Number of non-fatal failures
    pub fn warning_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.status == StepStatus::FailedNonFatal)
            .count()
    }

    /// Print the human-readable summary table
    pub fn print_summary(&self) {
        println!();
        println!("{}", Style::new().cyan().bold().apply_to("Setup summary:"));

        for step in &self.steps {
            let tag = match step.status {
                StepStatus::Succeeded => Style::new().green().apply_to("ok   "),
                StepStatus::FailedNonFatal => Style::new().yellow().apply_to("warn "),
                StepStatus::FailedFatal => Style::new().red().bold().apply_to("fatal"),
            };
            println!(
                "  {} {:<22} {}",
                tag,
                Style::new().bold().apply_to(step.id),
                step.message
            );
        }

        let warnings = self.warning_count();
        if warnings > 0 {
            println!(
                "  {}",
                Style::new().dim().apply_to(format!(
                    "{warnings} step(s) degraded; inspect the warnings above"
                ))
            );
        }
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }
}
