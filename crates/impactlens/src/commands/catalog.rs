use impactlens_core::{developers, projects, teams};

pub fn run() -> anyhow::Result<()> {
    let output = serde_json::json!({
        "projects": projects(),
        "teams": teams(),
        "developers": developers(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
