// Colored terminal output for analysis reports.
//
// Used by the `analyze` and `demo` CLI commands. The HTTP API always
// returns JSON and never goes through here.

use colored::{ColoredString, Colorize};

use crate::report::{AnalysisReport, ShareDecision};
use crate::scoring::risk::RiskLevel;

/// Display a full analysis report in the terminal.
pub fn display_report(report: &AnalysisReport) {
    let summary = &report.analysis_summary;

    println!("\n{}", "=== Content Analysis ===".bold());
    println!(
        "  Risk: {} ({}/100)",
        colorize_level(summary.risk_level),
        summary.risk_score
    );
    println!("  Credibility: {}", summary.credibility_rating);
    println!("  {}", summary.primary_concern);

    println!("\n{}", "Detected tactics".bold());
    for tactic in &report.detected_tactics {
        println!("  {} {}", "-".dimmed(), tactic.tactic_name.bold());
        println!("    {}", tactic.description);
        println!("    {} {}", "Example:".dimmed(), tactic.example_from_content.italic());
    }

    println!("\n{}", "Cognitive biases".bold());
    for bias in &report.cognitive_biases {
        println!("  {} {}", "-".dimmed(), bias.bias_name.bold());
        println!("    {}", bias.how_its_exploited);
        println!("    {} {}", "Tip:".green(), bias.resistance_tip);
    }

    if !report.fact_check_flags.is_empty() {
        println!("\n{}", "Fact-check flags".bold());
        for flag in &report.fact_check_flags {
            println!("  {} {}: {}", "!".yellow(), flag.claim, flag.flag_reason);
            println!("    {}", flag.verification_suggestion.dimmed());
        }
    }

    let insights = &report.educational_insights;
    println!("\n{}", "Ask yourself".bold());
    for question in &insights.critical_questions {
        println!("  ? {question}");
    }

    let recs = &report.recommendations;
    println!("\n{}", "Recommendation".bold());
    println!("  {}", recs.immediate_action);
    println!("  Sharing: {}", colorize_share(recs.share_decision));

    println!(
        "\n{}",
        format!(
            "{} | {} chars | {}",
            report.metadata.model_used,
            report.metadata.content_length,
            report.metadata.analysis_timestamp
        )
        .dimmed()
    );
}

fn colorize_level(level: RiskLevel) -> ColoredString {
    match level {
        RiskLevel::High => level.as_str().red().bold(),
        RiskLevel::Medium => level.as_str().yellow(),
        RiskLevel::Low => level.as_str().green(),
    }
}

fn colorize_share(decision: ShareDecision) -> ColoredString {
    match decision {
        ShareDecision::AvoidSharing => "avoid sharing".red(),
        ShareDecision::ShareWithContext => "share with context".normal(),
    }
}
