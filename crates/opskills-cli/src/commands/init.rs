//! The `opskills init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("opskills.toml").exists() {
        println!("opskills.toml already exists, skipping.");
    } else {
        std::fs::write("opskills.toml", SAMPLE_CONFIG)?;
        println!("Created opskills.toml");
    }

    std::fs::create_dir_all("sheets")?;
    let example_path = std::path::Path::new("sheets/example.toml");
    if example_path.exists() {
        println!("sheets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_SHEET)?;
        println!("Created sheets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: opskills contexts");
    println!("  2. Edit sheets/example.toml with your selections");
    println!("  3. Run: opskills score --sheet sheets/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# opskills configuration

# text, json or markdown
output_format = "text"

# log_filter = "opskills=debug"

[bands]
high = 75
medium = 50
"#;

const EXAMPLE_SHEET: &str = r#"sector = "FOOD SECTOR"
role = "SMART LINE OPERATOR"

[selections]
technical = [
    "Quality assessment",
    "Use of the Robot controller",
    "Process awareness",
]
operational = ["Task knowledge", "Situational awareness"]
analytical = ["Problem solving"]
collaboration = []
management = ["Safety checking"]
personal = ["Observation skills"]
interaction = ["Production monitoring"]

# Copied into the Job, Context and Country columns of --export records.
# [respondent]
# job_title = "Line operator"
# industry = "Fresh produce"
# country = "Italy"
"#;
