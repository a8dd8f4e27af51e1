pub mod arguments;
pub mod constants;
pub mod output;

use {
    crate::{arguments::Arguments, constants::DeploymentConstants, output::DeployOutput},
    alloy::{dyn_abi::DynSolValue, providers::Provider},
    anyhow::{Context, Result},
    contracts::AutoConverterFactory,
    std::path::Path,
};

const CONTRACT_NAME: &str = "AutoConverterFactory";

pub async fn run(args: Arguments) -> Result<()> {
    let constants = DeploymentConstants::load()?;
    let provider =
        shared::ethrpc::provider_with_signer(args.node_url.as_str(), Box::new(args.private_key))?;
    let chain_id = provider
        .get_chain_id()
        .await
        .context("could not fetch current chain id")?;
    tracing::info!("connected to network {chain_id}");

    let factory: AutoConverterFactory::Instance = contracts::deploy(
        &provider,
        &args.artifacts_path,
        CONTRACT_NAME,
        None,
        &[
            DynSolValue::Address(constants.v2.forwarder),
            DynSolValue::Address(constants.v2.voter),
            DynSolValue::Address(constants.v2.router),
            DynSolValue::Address(constants.v2.factory_registry),
        ],
    )
    .await?;
    tracing::info!("AutoConverterFactory deployed to {}", factory.address());

    let output = DeployOutput {
        auto_converter_factory: *factory.address(),
    };
    persist(&std::env::current_dir()?, &output);
    Ok(())
}

/// Persisting the record is best effort: a failed write is logged and
/// swallowed. The deployed address is already part of the log output.
fn persist(dir: &Path, output: &DeployOutput) {
    if let Err(err) = output::write(dir, output) {
        tracing::error!(?err, "error writing deployment record");
    }
}
