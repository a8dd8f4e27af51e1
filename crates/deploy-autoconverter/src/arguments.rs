use {alloy::signers::local::PrivateKeySigner, clap::Parser, std::path::PathBuf, url::Url};

#[derive(Parser)]
pub struct Arguments {
    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Private key of the account submitting and funding the deployment
    /// transaction.
    #[clap(long, env, hide_env_values = true)]
    pub private_key: PrivateKeySigner,

    /// Directory the compiled contract artifacts are read from.
    #[clap(long, env, default_value = "artifacts")]
    pub artifacts_path: PathBuf,
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "node_url: {}", self.node_url)?;
        writeln!(f, "private_key: SECRET")?;
        writeln!(f, "artifacts_path: {}", self.artifacts_path.display())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // First default account of the local development node.
    const PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn defaults() {
        let args = Arguments::try_parse_from(["deploy-autoconverter", "--private-key", PRIVATE_KEY])
            .unwrap();
        assert_eq!(args.node_url.as_str(), "http://localhost:8545/");
        assert_eq!(args.artifacts_path, PathBuf::from("artifacts"));
    }

    #[test]
    fn requires_private_key() {
        assert!(Arguments::try_parse_from(["deploy-autoconverter"]).is_err());
    }

    #[test]
    fn display_redacts_private_key() {
        let args = Arguments::try_parse_from(["deploy-autoconverter", "--private-key", PRIVATE_KEY])
            .unwrap();
        let displayed = args.to_string();
        assert!(displayed.contains("private_key: SECRET"));
        assert!(!displayed.contains("ac0974be"));
    }
}
