use crate::comparison::ComparisonConfig;

/// Print the effective configuration as JSON, whatever the output format
pub fn run(config: &ComparisonConfig) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
