#[cfg(any(test, feature = "test-util"))]
use alloy::providers::mock;
use {
    alloy::{
        network::{EthereumWallet, TxSigner},
        primitives::Signature,
        providers::{DynProvider, Provider, ProviderBuilder},
        rpc::client::ClientBuilder,
    },
    anyhow::Result,
};

pub type AlloyProvider = DynProvider;

/// Creates a provider that signs transactions locally with the given signer
/// before submitting them to the node.
pub fn provider_with_signer(
    url: &str,
    signer: Box<dyn TxSigner<Signature> + Send + Sync + 'static>,
) -> Result<AlloyProvider> {
    let rpc = ClientBuilder::default().http(url.parse()?);
    let wallet = EthereumWallet::new(signer);

    Ok(ProviderBuilder::new()
        .wallet(wallet)
        .connect_client(rpc)
        .erased())
}

#[cfg(any(test, feature = "test-util"))]
pub fn dummy_provider() -> AlloyProvider {
    let asserter = mock::Asserter::new();
    ProviderBuilder::new()
        .connect_mocked_client(asserter)
        .erased()
}
