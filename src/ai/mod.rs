//! The generative-AI collaborator seam.
//!
//! The client treats the summary service as an opaque collaborator behind
//! [`SummaryGenerator`]. The shipped implementation is offline and
//! deterministic: it composes a markdown briefing from the analyses it is
//! given, so the dashboard works without network access. A real service
//! client would implement the same trait.

use crate::data::MineralAnalysis;
use crate::Result;

/// Produces a markdown synthesis of recent mineral analyses.
pub trait SummaryGenerator: Send + Sync {
    /// Generate the dashboard briefing text.
    fn generate_summary(&self, analyses: &[MineralAnalysis]) -> Result<String>;
}

/// Offline assistant: deterministic, template-driven briefing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldNotesAssistant;

impl FieldNotesAssistant {
    pub fn new() -> Self {
        Self
    }
}

impl SummaryGenerator for FieldNotesAssistant {
    fn generate_summary(&self, analyses: &[MineralAnalysis]) -> Result<String> {
        if analyses.is_empty() {
            return Ok("# Exploration briefing\n\nNo analyses recorded yet.\n".to_string());
        }

        let mut out = String::new();
        out.push_str("# Exploration briefing\n\n");
        out.push_str(&format!(
            "{} recent rock analyses reviewed.\n\n",
            analyses.len()
        ));

        for analysis in analyses {
            out.push_str(&format!("## {}\n", analysis.rock_name));
            out.push_str(&format!("{}\n", analysis.description));
            let dominant = analysis
                .minerals
                .iter()
                .max_by(|a, b| {
                    a.percentage
                        .partial_cmp(&b.percentage)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            if let Some(mineral) = dominant {
                out.push_str(&format!(
                    "* Dominant mineral: {} ({}%)\n",
                    mineral.name, mineral.percentage
                ));
            }
            out.push_str(&format!(
                "* Economic potential: {}\n\n",
                analysis.economic_potential
            ));
        }

        out.push_str("### Recommendation\n");
        out.push_str(
            "Prioritize follow-up sampling on targets flagged with gold pathfinder \
             minerals and confirm assay results before committing drill meters.\n",
        );

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::recent_analyses;

    #[test]
    fn test_summary_mentions_every_rock() {
        let assistant = FieldNotesAssistant::new();
        let analyses = recent_analyses();
        let summary = assistant.generate_summary(&analyses).unwrap();

        for analysis in &analyses {
            assert!(summary.contains(analysis.rock_name));
        }
    }

    #[test]
    fn test_summary_is_deterministic() {
        let assistant = FieldNotesAssistant::new();
        let analyses = recent_analyses();
        let a = assistant.generate_summary(&analyses).unwrap();
        let b = assistant.generate_summary(&analyses).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_summary_handles_no_analyses() {
        let assistant = FieldNotesAssistant::new();
        let summary = assistant.generate_summary(&[]).unwrap();
        assert!(summary.contains("No analyses"));
    }
}
