//! Generic deployment support: resolve a contract factory by type name,
//! submit the deployment transaction and wait for it to be mined.

use {
    crate::{
        InstanceExt,
        artifact::{Artifact, Libraries},
    },
    alloy::{
        dyn_abi::{DynSolValue, JsonAbiExt},
        network::TransactionBuilder,
        primitives::Bytes,
        providers::{DynProvider, Provider},
        rpc::types::TransactionRequest,
    },
    anyhow::{Context, Result, ensure},
    std::path::Path,
};

/// Client-side factory for a single contract type: the ABI together with the
/// linked creation bytecode, ready to submit deployment transactions.
#[derive(Debug)]
pub struct ContractFactory {
    artifact: Artifact,
    code: Bytes,
}

impl ContractFactory {
    /// Resolves the factory for the contract type `name` from the artifact
    /// directory, linking the given library addresses into the bytecode.
    pub fn new(artifacts: &Path, name: &str, libraries: Option<&Libraries>) -> Result<Self> {
        let artifact = Artifact::load(artifacts, name)?;
        let default = Libraries::new();
        let code = artifact.link(libraries.unwrap_or(&default))?;
        Ok(Self { artifact, code })
    }

    /// The creation code with the ABI encoded constructor arguments appended.
    ///
    /// Whether the arguments match the constructor's parameter list is left
    /// to the ABI encoder.
    pub fn deploy_code(&self, args: &[DynSolValue]) -> Result<Vec<u8>> {
        let mut code = self.code.to_vec();
        match &self.artifact.abi.constructor {
            Some(constructor) => {
                let encoded = constructor
                    .abi_encode_input(args)
                    .context("could not encode constructor arguments")?;
                code.extend(encoded);
            }
            None => ensure!(
                args.is_empty(),
                "{} does not take constructor arguments",
                self.artifact.contract_name,
            ),
        }
        Ok(code)
    }

    /// Submits the deployment transaction and suspends until the chain
    /// reports it as mined, returning a handle typed as requested by the
    /// caller.
    ///
    /// Every call submits a fresh transaction; deploying the same factory
    /// twice results in two independent instances.
    pub async fn deploy<T: InstanceExt>(
        &self,
        provider: &DynProvider,
        args: &[DynSolValue],
    ) -> Result<T> {
        let tx = TransactionRequest::default().with_deploy_code(self.deploy_code(args)?);
        let receipt = provider
            .send_transaction(tx)
            .await
            .context("could not submit deployment transaction")?
            .get_receipt()
            .await
            .context("deployment transaction was not mined")?;
        ensure!(receipt.status(), "deployment transaction reverted");
        let address = receipt
            .contract_address
            .context("deployment receipt carries no contract address")?;
        Ok(T::at(address, provider.clone()))
    }
}

/// Deploys the contract type `name` from the artifact directory with the
/// given constructor arguments and returns the confirmed instance.
pub async fn deploy<T: InstanceExt>(
    provider: &DynProvider,
    artifacts: &Path,
    name: &str,
    libraries: Option<&Libraries>,
    args: &[DynSolValue],
) -> Result<T> {
    ContractFactory::new(artifacts, name, libraries)?
        .deploy(provider, args)
        .await
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        alloy::primitives::Address,
        maplit::btreemap,
        serde_json::json,
        std::fs,
    };

    fn factory_with_artifact(value: serde_json::Value) -> ContractFactory {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("AutoConverterFactory.json"),
            value.to_string(),
        )
        .unwrap();
        ContractFactory::new(dir.path(), "AutoConverterFactory", None).unwrap()
    }

    fn constructor_abi() -> serde_json::Value {
        json!([{
            "type": "constructor",
            "stateMutability": "nonpayable",
            "inputs": [
                { "name": "_forwarder", "type": "address" },
                { "name": "_voter", "type": "address" },
                { "name": "_router", "type": "address" },
                { "name": "_factoryRegistry", "type": "address" },
            ],
        }])
    }

    fn word(address: Address) -> Vec<u8> {
        let mut word = vec![0; 12];
        word.extend_from_slice(address.as_slice());
        word
    }

    #[test]
    fn encodes_constructor_arguments_in_order() {
        let factory = factory_with_artifact(json!({
            "contractName": "AutoConverterFactory",
            "abi": constructor_abi(),
            "bytecode": "0x60016002",
        }));
        let args = [
            Address::repeat_byte(0xaa),
            Address::repeat_byte(0xbb),
            Address::repeat_byte(0xcc),
            Address::repeat_byte(0xdd),
        ];

        let code = factory
            .deploy_code(&args.map(DynSolValue::Address))
            .unwrap();

        let mut expected = hex_literal::hex!("60016002").to_vec();
        for address in args {
            expected.extend(word(address));
        }
        assert_eq!(code, expected);
    }

    #[test]
    fn rejects_wrong_argument_count() {
        let factory = factory_with_artifact(json!({
            "contractName": "AutoConverterFactory",
            "abi": constructor_abi(),
            "bytecode": "0x60016002",
        }));
        let err = factory
            .deploy_code(&[DynSolValue::Address(Address::ZERO)])
            .unwrap_err();
        assert!(err.to_string().contains("constructor arguments"));
    }

    #[test]
    fn constructorless_code_is_the_plain_bytecode() {
        let factory = factory_with_artifact(json!({
            "contractName": "AutoConverterFactory",
            "abi": [],
            "bytecode": "0x600160020304",
        }));
        let code = factory.deploy_code(&[]).unwrap();
        assert_eq!(code, hex_literal::hex!("600160020304"));
    }

    #[test]
    fn rejects_arguments_without_constructor() {
        let factory = factory_with_artifact(json!({
            "contractName": "AutoConverterFactory",
            "abi": [],
            "bytecode": "0x6001",
        }));
        let err = factory
            .deploy_code(&[DynSolValue::Address(Address::ZERO)])
            .unwrap_err();
        assert!(
            err.to_string()
                .contains("does not take constructor arguments")
        );
    }

    #[test]
    fn links_libraries_during_resolution() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("AutoConverterFactory.json"),
            json!({
                "contractName": "AutoConverterFactory",
                "abi": [],
                "bytecode": "0x__$5b83fd53e6af13c983c2c4c3582c26fddf$__",
                "linkReferences": {
                    "src/Compound.sol": {
                        "Compound": [{ "start": 0, "length": 20 }],
                    },
                },
            })
            .to_string(),
        )
        .unwrap();
        let library = Address::repeat_byte(0x33);
        let libraries = btreemap! { "Compound".to_string() => library };

        let factory =
            ContractFactory::new(dir.path(), "AutoConverterFactory", Some(&libraries)).unwrap();
        assert_eq!(factory.deploy_code(&[]).unwrap(), library.as_slice());
    }

    #[test]
    fn resolution_fails_for_unknown_contract_type() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContractFactory::new(dir.path(), "AutoConverterFactory", None).unwrap_err();
        assert!(err.to_string().contains("no compiled artifact"));
    }
}
