use {
    alloy::primitives::Address,
    anyhow::{Context, Result},
    serde::Deserialize,
};

/// Addresses of the live protocol contracts the factory wires itself to,
/// keyed by protocol version. Compiled into the binary and read-only for the
/// process lifetime.
#[derive(Clone, Debug, Deserialize)]
pub struct DeploymentConstants {
    pub v2: V2Constants,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct V2Constants {
    pub forwarder: Address,
    pub voter: Address,
    pub router: Address,
    pub factory_registry: Address,
}

impl DeploymentConstants {
    pub fn load() -> Result<Self> {
        serde_json::from_str(include_str!("../constants/Optimism.json"))
            .context("malformed deployment constants")
    }
}
