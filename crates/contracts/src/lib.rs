pub mod artifact;
pub mod deploy;

pub use {
    crate::{
        artifact::{Artifact, Libraries},
        deploy::{ContractFactory, deploy},
    },
    alloy::providers::DynProvider as Provider,
};

/// Extension trait to attach some useful functions to the contract instance.
pub trait InstanceExt: Sized {
    /// Creates a contract instance pointing at the given deployed address.
    fn at(address: alloy::primitives::Address, provider: Provider) -> Self;
}

#[allow(non_snake_case)]
mod AutoConverterFactoryPrivate {
    alloy::sol!(
        #[allow(missing_docs)]
        #[sol(rpc)]
        contract AutoConverterFactory {
            function forwarder() external view returns (address);
            function voter() external view returns (address);
            function router() external view returns (address);
            function factoryRegistry() external view returns (address);
        }
    );
}

#[allow(non_snake_case)]
pub mod AutoConverterFactory {
    use alloy::providers::DynProvider;

    pub use super::AutoConverterFactoryPrivate::AutoConverterFactory::*;

    pub type Instance = AutoConverterFactoryInstance<DynProvider>;

    impl crate::InstanceExt for Instance {
        fn at(address: alloy::primitives::Address, provider: DynProvider) -> Self {
            Instance::new(address, provider)
        }
    }
}
