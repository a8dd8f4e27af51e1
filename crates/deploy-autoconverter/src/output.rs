use {
    alloy::primitives::Address,
    anyhow::{Context, Result},
    serde::Serialize,
    std::{fs, path::Path},
};

/// Directory the deployment record is written to, relative to the working
/// directory. Expected to exist already; this tool does not create it.
pub const OUTPUT_DIRECTORY: &str = "script/constants/output";
pub const OUTPUT_FILE: &str = "Tenderly.json";

/// On-disk record of the address this run deployed.
#[derive(Debug, Serialize)]
pub struct DeployOutput {
    #[serde(rename = "AutoConverterFactory")]
    pub auto_converter_factory: Address,
}

/// Writes the record as pretty printed JSON below `dir`.
pub fn write(dir: &Path, output: &DeployOutput) -> Result<()> {
    let path = dir.join(OUTPUT_DIRECTORY).join(OUTPUT_FILE);
    let contents =
        serde_json::to_string_pretty(output).context("could not serialize deployment record")?;
    fs::write(&path, contents).with_context(|| format!("could not write {}", path.display()))
}
