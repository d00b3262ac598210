// Search behavior across collections

use crate::common::{clinic_catalog, create_test_services, result_ids, scenario_catalog, search};
use acervo::core::records::{ArchiveEntry, Case, Course};
use acervo::{Catalog, RecordKind, SearchFilters};

#[test]
fn test_scenario_case_outranks_article() {
    let services = create_test_services(scenario_catalog());
    let response = search(&services, "rinoplastia", SearchFilters::default(), 20, 0);

    assert_eq!(response.total, 2);
    assert_eq!(result_ids(&response.results), vec!["case/case-1", "article/article-1"]);

    // Title prefix (80) + specialty (40)
    assert_eq!(response.results[0].relevance_score, 120.0);
    // Summary only
    assert_eq!(response.results[1].relevance_score, 30.0);

    assert_eq!(response.results[0].url, "/cases/case-1");
    assert_eq!(response.results[1].url, "/articles/article-1");
    assert!(!response.has_more);
}

#[test]
fn test_results_sorted_by_descending_score() {
    let services = create_test_services(clinic_catalog());
    let response = search(&services, "rinoplastia", SearchFilters::default(), 50, 0);

    assert_eq!(
        result_ids(&response.results),
        vec![
            "case/case-1",
            "case/case-3",
            "course/course-1",
            "article/article-1",
            "archive/archive-1",
        ]
    );

    let scores: Vec<f64> = response.results.iter().map(|r| r.relevance_score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_zero_score_records_excluded() {
    let services = create_test_services(clinic_catalog());
    let response = search(&services, "rinoplastia", SearchFilters::default(), 50, 0);

    assert!(response.results.iter().all(|r| r.relevance_score > 0.0));
    assert!(!response.results.iter().any(|r| r.id == "case-2"));
    assert!(!response.results.iter().any(|r| r.id == "archive-2"));
}

#[test]
fn test_ties_keep_scan_order() {
    // Same title everywhere: every kind scores the same prefix tier
    let catalog = Catalog {
        cases: vec![Case::new("c1", "Anatomia nasal")],
        articles: Vec::new(),
        courses: vec![Course::new("k1", "Anatomia nasal")],
        archive: vec![ArchiveEntry::new("x1", "Anatomia nasal")],
    };
    let services = create_test_services(catalog);
    let response = search(&services, "anatomia", SearchFilters::default(), 20, 0);

    assert_eq!(
        result_ids(&response.results),
        vec!["case/c1", "course/k1", "archive/x1"]
    );
}

#[test]
fn test_multi_token_scores_sum() {
    let services = create_test_services(clinic_catalog());
    let single = search(&services, "rinoplastia", SearchFilters::default(), 50, 0);
    let double = search(&services, "rinoplastia secundária", SearchFilters::default(), 50, 0);

    let score_of = |results: &[acervo::SearchResult], id: &str| {
        results
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.relevance_score)
            .unwrap()
    };

    // "secundária" adds a title contains hit (60) on case-3 only
    assert_eq!(score_of(&double.results, "case-3"), score_of(&single.results, "case-3") + 60.0);
    assert_eq!(score_of(&double.results, "case-1"), score_of(&single.results, "case-1"));
    assert_eq!(double.results[0].id, "case-3");
}

#[test]
fn test_case_insensitive_query() {
    let services = create_test_services(clinic_catalog());
    let lower = search(&services, "rinoplastia", SearchFilters::default(), 50, 0);
    let upper = search(&services, "RINOPLASTIA", SearchFilters::default(), 50, 0);

    assert_eq!(result_ids(&lower.results), result_ids(&upper.results));
}

#[test]
fn test_accents_are_significant() {
    let services = create_test_services(clinic_catalog());

    let accented = search(&services, "secundária", SearchFilters::default(), 20, 0);
    assert_eq!(accented.total, 1);

    let plain = search(&services, "secundaria", SearchFilters::default(), 20, 0);
    assert_eq!(plain.total, 0);
}

#[test]
fn test_empty_and_whitespace_queries() {
    let services = create_test_services(clinic_catalog());

    for query in ["", "   ", "\t\n"] {
        let response = search(&services, query, SearchFilters::default(), 20, 0);
        assert_eq!(response.total, 0, "query {query:?}");
        assert!(response.results.is_empty());
    }
}

#[test]
fn test_popularity_breaks_equal_text_scores() {
    let catalog = Catalog {
        cases: vec![
            Case::new("quiet", "Ritidoplastia"),
            Case {
                views: Some(450),
                rating: Some(4.5),
                ..Case::new("popular", "Ritidoplastia")
            },
        ],
        ..Catalog::default()
    };
    let services = create_test_services(catalog);
    let response = search(&services, "ritidoplastia", SearchFilters::default(), 20, 0);

    assert_eq!(response.results[0].id, "popular");
    // Exact title (100) + 4.5 views boost + 9 rating boost
    assert_eq!(response.results[0].relevance_score, 113.5);
    assert_eq!(response.results[1].relevance_score, 100.0);
}

#[test]
fn test_popular_records_match_any_query() {
    let catalog = Catalog {
        courses: vec![Course {
            views: Some(5_000),
            ..Course::new("k1", "Sutura")
        }],
        ..Catalog::default()
    };
    let services = create_test_services(catalog);
    let response = search(&services, "mamoplastia", SearchFilters::default(), 20, 0);

    assert_eq!(response.total, 1);
    assert_eq!(response.results[0].relevance_score, 10.0);
}

#[test]
fn test_result_construction() {
    let services = create_test_services(clinic_catalog());
    let response = search(&services, "congresso", SearchFilters::default(), 20, 0);

    let archive = &response.results[0];
    assert_eq!(archive.kind, RecordKind::Archive);
    assert_eq!(archive.url, "/archive/archive-1");
    assert_eq!(archive.description, "Slides do congresso nacional.");
    assert_eq!(archive.image_url, None);
    assert_eq!(archive.metadata.author.as_deref(), Some("Congresso 2023"));
    assert_eq!(archive.metadata.category.as_deref(), Some("Eventos"));
    assert_eq!(archive.metadata.specialty, None);
    assert_eq!(
        archive.metadata.tags,
        Some(vec!["rinoplastia".to_string(), "enxerto".to_string()])
    );

    let case = search(&services, "giba", SearchFilters::default(), 20, 0);
    let case = &case.results[0];
    assert_eq!(case.kind, RecordKind::Case);
    assert_eq!(case.image_url.as_deref(), Some("/uploads/case-1/front.jpg"));
    assert_eq!(case.metadata.specialty.as_deref(), Some("Rinoplastia"));
    assert_eq!(case.metadata.category, None);
}

#[test]
fn test_response_serializes_camel_case() {
    let services = create_test_services(scenario_catalog());
    let response = search(&services, "rinoplastia", SearchFilters::default(), 1, 0);
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["total"], 2);
    assert_eq!(json["hasMore"], true);
    assert!(json.get("durationMs").is_some());
    assert_eq!(json["results"][0]["type"], "case");
    assert_eq!(json["results"][0]["relevanceScore"], 120.0);
}
