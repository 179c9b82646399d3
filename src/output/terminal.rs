// Colored terminal output for verdicts and filed reports.
//
// main.rs delegates all printing here.

use colored::Colorize;

use super::truncate_chars;
use crate::classifier::{ClassificationResult, Label};
use crate::host::FiledReport;
use crate::settings::ModerationSettings;

/// Display one classification and the decision it leads to.
pub fn display_verdict(text: &str, result: &ClassificationResult, threshold: f64, flagged: bool) {
    let label = match result.label {
        Label::Flag => "flag".red(),
        Label::Normal => "normal".green(),
    };

    println!("  {:<12} {}", "Text".dimmed(), truncate_chars(text, 72));
    println!(
        "  {:<12} {} ({:.1}%)",
        "Class".dimmed(),
        label,
        result.confidence * 100.0
    );
    println!(
        "  {:<12} {:.3} (threshold {:.2})",
        "Score".dimmed(),
        result.score(),
        threshold
    );

    if flagged {
        println!("  {:<12} {}", "Decision".dimmed(), "FLAGGED".red().bold());
    } else {
        println!("  {:<12} {}", "Decision".dimmed(), "ok".green());
    }
}

/// Display the active settings (API key omitted).
pub fn display_settings(settings: &ModerationSettings) {
    let confidence = settings
        .min_confidence
        .map(|c| c.to_string())
        .unwrap_or_else(|| "unset".to_string());
    let targets: Vec<&str> = settings.targets.iter().map(|t| t.label()).collect();

    println!("  {:<20} {}", "Minimum Confidence".dimmed(), confidence);
    println!(
        "  {:<20} {}",
        "Checked Content".dimmed(),
        if targets.is_empty() {
            "none".to_string()
        } else {
            targets.join(", ")
        }
    );
    println!(
        "  {:<20} {}",
        "Recheck Edits".dimmed(),
        if settings.check_edits { "yes" } else { "no" }
    );
}

/// Display the reports filed during a replay.
pub fn display_reports(reports: &[FiledReport]) {
    if reports.is_empty() {
        println!("\n{}", "No content was reported.".green());
        return;
    }

    println!(
        "\n{}",
        format!("=== Reported ({} items) ===", reports.len()).bold()
    );
    for report in reports {
        println!(
            "  {} {:<24} {}",
            "!".red(),
            report.target.to_string(),
            report.reason.dimmed()
        );
    }
}
