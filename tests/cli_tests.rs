use bloom_pizza::cli::{place_order, report_order, Cli, OrderArgs};
use clap::Parser;
use bloom_pizza::config::{AppConfig, StartRoute};
use bloom_pizza::error::OrderError;
use bloom_pizza::order::MockOrderClient;
use std::process::ExitCode;
use std::sync::Arc;

fn args(name: &str, size: &str, toppings: &[&str]) -> OrderArgs {
    OrderArgs {
        name: name.to_string(),
        size: size.to_string(),
        toppings: toppings.iter().map(|t| t.to_string()).collect(),
    }
}

async fn run(args: &OrderArgs, client: &MockOrderClient) -> (ExitCode, String, String) {
    let model = place_order(args, AppConfig::default(), Arc::new(client.clone())).await;

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = report_order(&model, &mut out, &mut err).unwrap();
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[tokio::test]
async fn test_order_command_prints_receipt() {
    let client = MockOrderClient::accepting("Order received");
    let (code, out, err) = run(&args("Alice Smith", "L", &["5"]), &client).await;

    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(out, "Order received\n");
    assert!(err.is_empty());
    assert_eq!(client.requests().await[0].toppings, vec!["5"]);
}

#[tokio::test]
async fn test_order_command_reports_field_errors() {
    let client = MockOrderClient::accepting("Order received");
    let (code, out, err) = run(&args("Al", "XL", &["9"]), &client).await;

    assert_eq!(code, ExitCode::FAILURE);
    assert!(out.is_empty());
    assert!(err.contains("fullName: Full name must be at least 3 characters"));
    assert!(err.contains("size: Size must be S or M or L"));
    assert!(err.contains("toppings: "));
    assert!(err.ends_with("Something went wrong\n"));
    assert!(client.requests().await.is_empty());
}

#[tokio::test]
async fn test_order_command_reports_service_failure() {
    let client = MockOrderClient::failing(OrderError::Status(502));
    let (code, out, err) = run(&args("Alice", "S", &[]), &client).await;

    assert_eq!(code, ExitCode::FAILURE);
    assert!(out.is_empty());
    assert_eq!(err, "Something went wrong\n");
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = AppConfig {
        endpoint: "https://pizza.example/api/order".to_string(),
        request_timeout_secs: 3,
        theme: "High Contrast".to_string(),
        start_route: StartRoute::Order,
    };
    config.save_to(&path).unwrap();

    let loaded = AppConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "request_timeout_secs = 0\n").unwrap();

    let loaded = AppConfig::load_from(&path).unwrap();
    assert_eq!(loaded.request_timeout(), None);
    assert_eq!(loaded.endpoint, AppConfig::default().endpoint);
    assert_eq!(loaded.start_route, StartRoute::Home);
}

#[test]
fn test_unsupported_endpoint_scheme_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "endpoint = \"ftp://pizza.example/order\"\n").unwrap();

    let loaded = AppConfig::load_from(&path).unwrap();
    assert!(loaded.validate().is_err());

    let cli = Cli::try_parse_from(["bloom-pizza", "--config", path.to_str().unwrap()]).unwrap();
    assert!(cli.load_config().is_err());
}

#[test]
fn test_endpoint_flag_repairs_bad_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "endpoint = \"ftp://pizza.example/order\"\nrequest_timeout_secs = 4\n").unwrap();

    let cli = Cli::try_parse_from([
        "bloom-pizza",
        "--config",
        path.to_str().unwrap(),
        "--endpoint",
        "https://pizza.example/api/order",
    ])
    .unwrap();

    let config = cli.load_config().unwrap();
    assert_eq!(config.endpoint, "https://pizza.example/api/order");
    assert_eq!(config.request_timeout_secs, 4);
}
