//! The `gradebook init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new("gradebook.toml");
    if path.exists() {
        println!("gradebook.toml already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG)?;
        println!("Created gradebook.toml");
    }

    println!("\nNext steps:");
    println!("  1. Adjust the grade scale in gradebook.toml if needed");
    println!("  2. Run: gradebook");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

# Accepted grade range (inclusive).
min_grade = 0.0
max_grade = 10.0

# Decimal places shown for averages.
average_decimals = 2
"#;
