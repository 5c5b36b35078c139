//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# api-lint configuration

# Severity threshold for a failing exit code (must, should, may, hint)
fail_on = "must"

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.every-second-path-level-parameter]
enabled = true
# severity = "should"  # Override default severity
allow_trailing_action = true

[rules.avoid-trailing-slash]
enabled = true

# [rules.limit-resource-count]
# max_resources = 8
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("api-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created api-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit api-lint.toml to configure rules");
    println!("  2. Run: api-lint lint your-api.yaml");

    Ok(())
}
