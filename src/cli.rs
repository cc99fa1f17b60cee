use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use crate::config::{AppConfig, StartRoute};
use crate::order::{FormField, HttpOrderClient, OrderClient, SubmissionOutcome, TOPPINGS};
use crate::tea::message::FormMessage;
use crate::tea::{Model, Runtime};

/// Bloom Pizza - order pizza from your terminal
#[derive(Parser, Debug)]
#[command(name = "bloom-pizza")]
#[command(about = "A terminal pizza-order client")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Order-intake endpoint, overrides the configuration file
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (0 waits indefinitely)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Open the order form instead of the welcome page
    #[arg(long)]
    pub order: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate and submit one order without the interactive form
    Order(OrderArgs),

    /// List the topping catalog
    Toppings,

    /// Show the effective configuration
    Config,
}

#[derive(Args, Debug, Clone)]
pub struct OrderArgs {
    /// Full name on the order
    #[arg(long)]
    pub name: String,

    /// Pizza size: S, M or L
    #[arg(long)]
    pub size: String,

    /// Topping catalog id, repeat for more toppings
    #[arg(long = "topping")]
    pub toppings: Vec<String>,
}

impl Cli {
    /// Load the configuration file and apply command-line overrides
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load_from(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
            None => AppConfig::load().context("Failed to load configuration")?,
        };

        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }
        if self.order {
            config.start_route = StartRoute::Order;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Build the HTTP client described by the configuration
pub fn order_client(config: &AppConfig) -> Arc<dyn OrderClient> {
    Arc::new(HttpOrderClient::new(
        config.endpoint.clone(),
        config.request_timeout(),
    ))
}

/// Run a non-interactive subcommand
pub async fn run_command(command: &Commands, config: AppConfig) -> Result<ExitCode> {
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    match command {
        Commands::Order(args) => {
            let client = order_client(&config);
            let model = place_order(args, config, client).await;
            Ok(report_order(&model, &mut stdout, &mut stderr)?)
        }
        Commands::Toppings => {
            for topping in TOPPINGS.iter() {
                writeln!(stdout, "{}  {}", topping.id, topping.text)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config => {
            write!(stdout, "{}", config.to_toml()?)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Feed the arguments through the same update loop the form uses, then submit
pub async fn place_order(
    args: &OrderArgs,
    config: AppConfig,
    client: Arc<dyn OrderClient>,
) -> Model {
    let mut runtime = Runtime::new(Model::new(config), client);

    runtime
        .process(FormMessage::FieldChanged(FormField::FullName, args.name.clone()).into())
        .await;
    runtime
        .process(FormMessage::FieldChanged(FormField::Size, args.size.clone()).into())
        .await;
    for id in &args.toppings {
        runtime
            .process(FormMessage::ToppingToggled(id.clone(), true).into())
            .await;
    }
    runtime.process(FormMessage::Submit.into()).await;

    runtime.model().clone()
}

/// Print the outcome of `place_order`
pub fn report_order(
    model: &Model,
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<ExitCode> {
    for (field, message) in model.form.errors.iter() {
        writeln!(err, "{}: {}", field, message)?;
    }

    match &model.submission.outcome {
        Some(SubmissionOutcome::Success(message)) => {
            writeln!(out, "{}", message)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(SubmissionOutcome::Failure(message)) => {
            writeln!(err, "{}", message)?;
            Ok(ExitCode::FAILURE)
        }
        None => Ok(ExitCode::FAILURE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_order_subcommand() {
        let cli = Cli::try_parse_from([
            "bloom-pizza",
            "order",
            "--name",
            "Alice Smith",
            "--size",
            "M",
            "--topping",
            "1",
            "--topping",
            "3",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Order(args)) => {
                assert_eq!(args.name, "Alice Smith");
                assert_eq!(args.size, "M");
                assert_eq!(args.toppings, vec!["1", "3"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn overrides_apply_on_top_of_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "endpoint = \"http://orders.example/api/order\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "bloom-pizza",
            "--config",
            path.to_str().unwrap(),
            "--timeout",
            "0",
            "--order",
        ])
        .unwrap();

        let config = cli.load_config().unwrap();
        assert_eq!(config.endpoint, "http://orders.example/api/order");
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.start_route, StartRoute::Order);
    }

    #[test]
    fn bad_endpoint_override_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "bloom-pizza",
            "--config",
            dir.path().join("missing.toml").to_str().unwrap(),
            "--endpoint",
            "localhost:9009",
        ])
        .unwrap();

        assert!(cli.load_config().is_err());
    }
}
