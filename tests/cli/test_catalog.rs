//! Tests for show-catalog and show-config CLI commands
//!
//! These are simple commands that display loaded state and configuration.

use crate::cli::test_helpers::{create_cli_test_services, create_empty_cli_test_services};
use acervo::cli::commands::catalog::{execute as execute_catalog, CatalogArgs};
use acervo::cli::commands::config::{execute as execute_config, ConfigArgs};
use acervo::cli::OutputFormat;

// =============================================================================
// show-catalog tests
// =============================================================================

#[tokio::test]
async fn test_show_catalog_human() {
    let (services, _temp) = create_cli_test_services();
    let result = execute_catalog(CatalogArgs {}, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Show catalog should succeed");
}

#[tokio::test]
async fn test_show_catalog_json() {
    let (services, _temp) = create_cli_test_services();
    let result = execute_catalog(CatalogArgs {}, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_show_empty_catalog() {
    let services = create_empty_cli_test_services();
    let result = execute_catalog(CatalogArgs {}, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

// =============================================================================
// show-config tests
// =============================================================================

#[tokio::test]
async fn test_show_config_human() {
    let (services, _temp) = create_cli_test_services();
    let result = execute_config(ConfigArgs { all: false }, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Show config should succeed");
}

#[tokio::test]
async fn test_show_config_json_all() {
    let (services, _temp) = create_cli_test_services();
    let result = execute_config(ConfigArgs { all: true }, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Show config (JSON) should succeed");
}
