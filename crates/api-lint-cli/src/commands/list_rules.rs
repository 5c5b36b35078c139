//! List rules command implementation.

use api_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<36} {:<8} Description", "Code", "Name", "Severity");
    println!("{}", "-".repeat(100));

    for rule in all_rules() {
        println!(
            "{:<8} {:<36} {:<8} {}",
            rule.code(),
            rule.name(),
            rule.default_severity().to_string(),
            rule.description()
        );
    }

    println!("\nUse --rules to run a subset, e.g.:");
    println!("  api-lint lint --rules avoid-trailing-slash,no-version-in-uri api.yaml");
    println!("  api-lint lint --rules AP001,AP002 api.yaml");
}
