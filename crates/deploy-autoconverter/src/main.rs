use clap::Parser;

#[tokio::main]
async fn main() {
    let args = deploy_autoconverter::arguments::Arguments::parse();
    shared::tracing::initialize(
        "warn,deploy_autoconverter=debug,contracts=debug,shared=debug",
        tracing::Level::ERROR.into(),
    );
    tracing::info!("running deploy-autoconverter with validated arguments:\n{}", args);
    if let Err(err) = deploy_autoconverter::run(args).await {
        tracing::error!(?err, "deployment failed");
        std::process::exit(1);
    }
}
