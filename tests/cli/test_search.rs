//! Tests for the search CLI command

use crate::cli::test_helpers::{create_cli_test_services, create_empty_cli_test_services};
use acervo::cli::commands::search::{execute, SearchArgs};
use acervo::cli::OutputFormat;

fn args(query: &str) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        kinds: vec![],
        specialty: vec![],
        category: vec![],
        limit: None,
        offset: 0,
        urls_only: false,
    }
}

/// Test basic search (human format)
#[tokio::test]
async fn test_search_human() {
    let (services, _temp) = create_cli_test_services();
    let result = execute(args("rinoplastia"), &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

/// Test basic search (JSON format)
#[tokio::test]
async fn test_search_json() {
    let (services, _temp) = create_cli_test_services();
    let result = execute(args("rinoplastia"), &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Search (JSON) should succeed");
}

/// Test search with every filter flag set
#[tokio::test]
async fn test_search_with_filters() {
    let (services, _temp) = create_cli_test_services();
    let search_args = SearchArgs {
        kinds: vec!["case".to_string(), "course".to_string()],
        specialty: vec!["Rinoplastia".to_string()],
        ..args("rinoplastia")
    };

    let filters = search_args.filters();
    assert_eq!(
        filters.kinds,
        Some(vec!["case".to_string(), "course".to_string()])
    );
    assert_eq!(filters.category, None);

    let result = execute(search_args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

/// Test URL-only output with paging
#[tokio::test]
async fn test_search_urls_only_paged() {
    let (services, _temp) = create_cli_test_services();
    let search_args = SearchArgs {
        limit: Some(2),
        offset: 2,
        urls_only: true,
        ..args("rinoplastia")
    };
    let result = execute(search_args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

/// Test offset past the end of results
#[tokio::test]
async fn test_search_offset_past_end() {
    let (services, _temp) = create_cli_test_services();
    let search_args = SearchArgs {
        offset: 100,
        ..args("rinoplastia")
    };
    let result = execute(search_args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

/// Test search with no matches
#[tokio::test]
async fn test_search_no_results() {
    let services = create_empty_cli_test_services();
    let result = execute(args("rinoplastia"), &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Empty result set is not an error");
}

/// Test an overlong query is reported as an error
#[tokio::test]
async fn test_search_query_too_long() {
    let (services, _temp) = create_cli_test_services();
    let result = execute(args(&"x".repeat(600)), &services, OutputFormat::Json).await;

    let err = result.expect_err("Overlong query should fail");
    assert!(err.to_string().contains("Invalid query"));
}

/// Test a zero page size at offset 0
#[tokio::test]
async fn test_search_zero_limit() {
    let (services, _temp) = create_cli_test_services();
    let search_args = SearchArgs {
        limit: Some(0),
        ..args("rinoplastia")
    };
    let result = execute(search_args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}
