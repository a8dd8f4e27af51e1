//! Model of the build artifacts emitted by the contract compilation pipeline,
//! one JSON file per contract type.

use {
    alloy::{
        json_abi::JsonAbi,
        primitives::{Address, Bytes, hex},
    },
    anyhow::{Context, Result, anyhow, bail, ensure},
    serde::Deserialize,
    std::{collections::BTreeMap, fs, path::Path},
};

/// Addresses of already deployed library contracts to substitute into the
/// creation bytecode, keyed by library name (optionally qualified as
/// `<source file>:<library>`).
pub type Libraries = BTreeMap<String, Address>;

/// A placeholder range inside the creation bytecode, in bytes relative to the
/// start of the code.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
pub struct LinkReference {
    pub start: usize,
    pub length: usize,
}

/// A compiled contract artifact.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    pub abi: JsonAbi,
    /// Creation bytecode as a hex string. Contains a `__$…$__` placeholder
    /// for every library reference that still needs linking.
    pub bytecode: String,
    #[serde(default)]
    pub link_references: BTreeMap<String, BTreeMap<String, Vec<LinkReference>>>,
}

impl Artifact {
    /// Reads the artifact for the given contract type from
    /// `<dir>/<name>.json`.
    pub fn load(dir: &Path, name: &str) -> Result<Self> {
        let path = dir.join(format!("{name}.json"));
        let contents = fs::read_to_string(&path).with_context(|| {
            format!("no compiled artifact for {name} at {}", path.display())
        })?;
        serde_json::from_str(&contents).with_context(|| format!("malformed artifact for {name}"))
    }

    /// Substitutes every library placeholder in the creation bytecode with
    /// the address it links against and decodes the result.
    pub fn link(&self, libraries: &Libraries) -> Result<Bytes> {
        let mut code = self
            .bytecode
            .strip_prefix("0x")
            .unwrap_or(&self.bytecode)
            .to_string();
        for (file, references) in &self.link_references {
            for (library, positions) in references {
                let address = libraries
                    .get(library)
                    .or_else(|| libraries.get(&format!("{file}:{library}")))
                    .ok_or_else(|| anyhow!("no address to link library {file}:{library}"))?;
                let replacement = hex::encode(address);
                for position in positions {
                    // Positions index into the decoded code, so they map to
                    // twice as many characters of the hex string.
                    let range = position.start * 2..(position.start + position.length) * 2;
                    ensure!(
                        position.length == 20 && range.end <= code.len(),
                        "link reference for {library} out of bounds",
                    );
                    code.replace_range(range, &replacement);
                }
            }
        }
        if code.contains("__") {
            bail!(
                "bytecode of {} contains unlinked placeholders",
                self.contract_name
            );
        }
        hex::decode(&code)
            .map(Bytes::from)
            .with_context(|| format!("invalid bytecode for {}", self.contract_name))
    }
}
