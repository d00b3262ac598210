// Filter semantics: AND across dimensions, OR within one

use crate::common::{clinic_catalog, create_test_services, result_ids, search};
use acervo::SearchFilters;

fn kinds(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|v| v.to_string()).collect())
}

#[test]
fn test_type_filter() {
    let services = create_test_services(clinic_catalog());
    let filters = SearchFilters {
        kinds: kinds(&["article"]),
        ..Default::default()
    };
    let response = search(&services, "rinoplastia", filters, 20, 0);

    assert_eq!(result_ids(&response.results), vec!["article/article-1"]);
    assert_eq!(response.total, 1);
}

#[test]
fn test_values_within_dimension_are_ored() {
    let services = create_test_services(clinic_catalog());
    let filters = SearchFilters {
        kinds: kinds(&["course", "archive"]),
        ..Default::default()
    };
    let response = search(&services, "rinoplastia", filters, 20, 0);

    assert_eq!(
        result_ids(&response.results),
        vec!["course/course-1", "archive/archive-1"]
    );
}

#[test]
fn test_specialty_filter_excludes_records_without_specialty() {
    let services = create_test_services(clinic_catalog());
    let filters = SearchFilters {
        specialty: kinds(&["Rinoplastia"]),
        ..Default::default()
    };
    let response = search(&services, "rinoplastia", filters, 20, 0);

    // Courses and archive entries carry a category, never a specialty
    assert_eq!(
        result_ids(&response.results),
        vec!["case/case-1", "case/case-3"]
    );
}

#[test]
fn test_category_filter() {
    let services = create_test_services(clinic_catalog());
    let filters = SearchFilters {
        category: kinds(&["Cirurgia Plástica", "Eventos"]),
        ..Default::default()
    };
    let response = search(&services, "rinoplastia", filters, 20, 0);

    assert_eq!(
        result_ids(&response.results),
        vec!["course/course-1", "archive/archive-1"]
    );
}

#[test]
fn test_dimensions_are_anded() {
    let services = create_test_services(clinic_catalog());
    let filters = SearchFilters {
        kinds: kinds(&["case", "course"]),
        specialty: kinds(&["Rinoplastia"]),
        category: None,
    };
    let response = search(&services, "rinoplastia", filters, 20, 0);

    assert_eq!(
        result_ids(&response.results),
        vec!["case/case-1", "case/case-3"]
    );
}

#[test]
fn test_filter_values_are_case_sensitive() {
    let services = create_test_services(clinic_catalog());
    let filters = SearchFilters {
        specialty: kinds(&["rinoplastia"]),
        ..Default::default()
    };
    let response = search(&services, "rinoplastia", filters, 20, 0);
    assert_eq!(response.total, 0);
}

#[test]
fn test_unknown_type_matches_nothing() {
    let services = create_test_services(clinic_catalog());
    let filters = SearchFilters {
        kinds: kinds(&["video"]),
        ..Default::default()
    };
    let response = search(&services, "rinoplastia", filters, 20, 0);
    assert_eq!(response.total, 0);
    assert!(response.results.is_empty());
}

#[test]
fn test_empty_filter_list_rejects_all() {
    let services = create_test_services(clinic_catalog());
    let filters: SearchFilters = serde_json::from_str(r#"{ "specialty": [] }"#).unwrap();
    let response = search(&services, "rinoplastia", filters, 20, 0);

    assert_eq!(response.total, 0);
    assert!(response.results.is_empty());
}

#[test]
fn test_filtering_preserves_relative_order() {
    let services = create_test_services(clinic_catalog());
    let unfiltered = search(&services, "rinoplastia", SearchFilters::default(), 20, 0);
    let filters = SearchFilters {
        kinds: kinds(&["case", "article", "archive"]),
        ..Default::default()
    };
    let filtered = search(&services, "rinoplastia", filters, 20, 0);

    let expected: Vec<String> = result_ids(&unfiltered.results)
        .into_iter()
        .filter(|id| !id.starts_with("course/"))
        .collect();
    assert_eq!(result_ids(&filtered.results), expected);
}

#[test]
fn test_filters_deserialize_from_json() {
    let filters: SearchFilters =
        serde_json::from_str(r#"{ "type": ["case"], "specialty": ["Otoplastia"] }"#).unwrap();
    let services = create_test_services(clinic_catalog());
    let response = search(&services, "plastia", filters, 20, 0);

    assert_eq!(result_ids(&response.results), vec!["case/case-2"]);
}
