use clap::Parser;
use keyring_api::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    cli::serve::run(cli).await
}
