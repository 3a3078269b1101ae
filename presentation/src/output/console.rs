//! Console output formatter for recommendation results

use colored::Colorize;
use compass_application::RecommendPromptsOutput;

/// Message shown when a run produced no recommendations.
///
/// Rendered for the empty-after-run state only — the never-run state (which
/// only the interactive mode can observe) shows the banner hint instead, so
/// the two are never confused.
pub const EMPTY_RESULT_MESSAGE: &str =
    "No recommendations found. Try adjusting the prompts or domain.";

/// Globally enable or disable colored output.
///
/// Used by the binary to honor the `output.color` config setting; the
/// auto-detection (TTY, NO_COLOR) stays in effect unless this is called.
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}

/// Formats recommendation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete result with header, scores, and rationales
    pub fn format(output: &RecommendPromptsOutput) -> String {
        let mut text = String::new();

        // Header
        text.push_str(&Self::header("Prompt Compass - Recommendations"));
        text.push('\n');

        text.push_str(&format!(
            "{} {}\n\n",
            "Domain:".cyan().bold(),
            output.domain
        ));

        if output.recommendations.is_empty() {
            text.push_str(&format!("{}\n", EMPTY_RESULT_MESSAGE.yellow()));
        } else {
            for (index, recommendation) in output.recommendations.iter().enumerate() {
                text.push_str(&format!(
                    "{}. {}\n",
                    index + 1,
                    recommendation.prompt.bold()
                ));
                text.push_str(&format!(
                    "   {} {:.2}  {}\n",
                    "Score:".cyan(),
                    recommendation.score,
                    recommendation.rationale.dimmed()
                ));
            }
        }

        text.push_str(&Self::footer());

        text
    }

    /// Format one recommendation per line (score, then prompt)
    pub fn format_compact(output: &RecommendPromptsOutput) -> String {
        if output.recommendations.is_empty() {
            return format!("{}\n", EMPTY_RESULT_MESSAGE);
        }

        let mut text = String::new();
        for recommendation in &output.recommendations {
            text.push_str(&format!(
                "{:.2}  {}\n",
                recommendation.score, recommendation.prompt
            ));
        }
        text
    }

    /// Format as JSON
    pub fn format_json(output: &RecommendPromptsOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
