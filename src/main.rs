use clap::Parser;
use foobar_service::cli::{execute, Cli};
use foobar_service::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let cli = Cli::parse();
    execute(cli).await?;
    Ok(())
}
