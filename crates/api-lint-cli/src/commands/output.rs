//! Shared output formatting for lint reports.

use anyhow::Result;
use api_lint_core::{LintReport, Severity};

use crate::OutputFormat;

/// Print a lint report in the specified format.
pub fn print(report: &LintReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Json => return print_json(report),
        OutputFormat::Compact => print_compact(report),
    }
    Ok(())
}

fn severity_indicator(severity: Severity) -> &'static str {
    match severity {
        Severity::Must => "\x1b[31mmust\x1b[0m",
        Severity::Should => "\x1b[33mshould\x1b[0m",
        Severity::May => "\x1b[34mmay\x1b[0m",
        Severity::Hint => "\x1b[36mhint\x1b[0m",
    }
}

fn print_text(report: &LintReport) {
    for violation in &report.violations {
        println!(
            "{} [{}] {}",
            severity_indicator(violation.severity),
            violation.code,
            violation.title,
        );
        println!("  {}", violation.description);
        for location in &violation.locations {
            println!("  at {location}");
        }
        println!();
    }

    for diagnostic in &report.diagnostics {
        println!("\x1b[33mwarning\x1b[0m: {diagnostic}");
    }
    if !report.diagnostics.is_empty() {
        println!();
    }

    let counts = report.count_by_severity();
    let summary_color = if counts.must > 0 {
        "\x1b[31m"
    } else if counts.should > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} must, {} should, {} may, {} hint violation(s)\x1b[0m",
        summary_color, counts.must, counts.should, counts.may, counts.hint
    );
}

fn print_json(report: &LintReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

fn print_compact(report: &LintReport) {
    for violation in &report.violations {
        let location = violation
            .first_location()
            .map_or_else(String::new, ToString::to_string);
        println!(
            "{}: {} [{}] {}",
            location, violation.severity, violation.code, violation.title,
        );
    }
}
