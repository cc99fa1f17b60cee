use anyhow::Result;
use bloom_pizza::app::App;
use bloom_pizza::cli::{self, Cli};
use bloom_pizza::logging::{self, LogTarget};
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    // The form owns the terminal, so it can only log to a file
    let target = if args.command.is_some() {
        LogTarget::Stderr
    } else {
        LogTarget::File
    };
    logging::init(args.debug, target)?;

    let config = args.load_config()?;

    match &args.command {
        Some(command) => cli::run_command(command, config).await,
        None => {
            let client = cli::order_client(&config);
            let mut app = App::new(config, client);
            app.run().await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
