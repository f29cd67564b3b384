//! Report rendering
//!
//! Renders a generation report as plain text for the terminal.

use event_codegen::{GenerationReport, Severity};
use std::fmt;

/// Plain-text view of a report
pub struct TextReport<'a>(pub &'a GenerationReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        if report.artifacts.is_empty() {
            writeln!(f, "No event sets generated.")?;
        } else {
            writeln!(f, "Generated:")?;
            for artifact in &report.artifacts {
                writeln!(
                    f,
                    "  {} ({} arm{}) -> {}",
                    artifact.declaration,
                    artifact.arms,
                    if artifact.arms == 1 { "" } else { "s" },
                    artifact.path.display()
                )?;
            }
        }

        let warnings: Vec<_> = report
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .collect();
        if !warnings.is_empty() {
            writeln!(f, "\nWarnings ({}):", warnings.len())?;
            for warning in warnings {
                writeln!(f, "  {}", warning)?;
            }
        }

        Ok(())
    }
}

/// Render a report as text
pub fn render_text(report: &GenerationReport) -> String {
    TextReport(report).to_string()
}
