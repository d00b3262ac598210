// Type-ahead suggestions

use crate::common::{clinic_catalog, create_test_services};
use acervo::core::records::{Case, Course};
use acervo::core::services::Services;
use acervo::{Catalog, SuggestRequest};

fn suggest(services: &Services, query: &str, limit: Option<usize>) -> Vec<String> {
    services
        .search
        .suggest(SuggestRequest {
            query: query.to_string(),
            limit,
        })
        .expect("Suggest failed")
        .suggestions
}

#[test]
fn test_titles_before_vocabulary() {
    let services = create_test_services(clinic_catalog());
    let suggestions = suggest(&services, "rino", Some(10));

    assert_eq!(
        suggestions,
        vec![
            "Rinoplastia em paciente jovem",
            "Rinoplastia secundária",
            "Rinoplastia estruturada",
            "Rinoplastia",
        ]
    );
}

#[test]
fn test_default_limit() {
    let services = create_test_services(clinic_catalog());
    let suggestions = suggest(&services, "plastia", None);

    assert_eq!(suggestions.len(), 5);
    assert_eq!(
        suggestions,
        vec![
            "Rinoplastia em paciente jovem",
            "Otoplastia bilateral",
            "Rinoplastia secundária",
            "Rinoplastia estruturada",
            "Rinoplastia",
        ]
    );
}

#[test]
fn test_limit_stops_title_scan() {
    let services = create_test_services(clinic_catalog());
    let suggestions = suggest(&services, "rino", Some(2));

    assert_eq!(
        suggestions,
        vec!["Rinoplastia em paciente jovem", "Rinoplastia secundária"]
    );
}

#[test]
fn test_short_queries_return_nothing() {
    let services = create_test_services(clinic_catalog());

    assert!(suggest(&services, "", None).is_empty());
    assert!(suggest(&services, "r", None).is_empty());
    // Surrounding whitespace does not count towards the minimum
    assert!(suggest(&services, "  r  ", None).is_empty());
    assert!(!suggest(&services, " ri ", None).is_empty());
}

#[test]
fn test_case_insensitive() {
    let services = create_test_services(clinic_catalog());
    assert_eq!(
        suggest(&services, "OTOPLASTIA", None),
        vec!["Otoplastia bilateral", "Otoplastia"]
    );
}

#[test]
fn test_suggestions_are_distinct() {
    let catalog = Catalog {
        cases: vec![Case::new("c1", "Anatomia"), Case::new("c2", "Anatomia")],
        courses: vec![Course::new("k1", "Anatomia")],
        ..Catalog::default()
    };
    let services = create_test_services(catalog);

    assert_eq!(suggest(&services, "anatomia", None), vec!["Anatomia"]);
}

#[test]
fn test_vocabulary_only_on_empty_catalog() {
    let services = create_test_services(Catalog::new());
    assert_eq!(
        suggest(&services, "cirurgia", None),
        vec!["Cirurgia Plástica", "Cirurgia Reparadora"]
    );
}

#[test]
fn test_limit_clamped_to_max() {
    let catalog = Catalog {
        cases: (0..40)
            .map(|i| Case::new(format!("c{i}"), format!("Blefaroplastia {i}")))
            .collect(),
        ..Catalog::default()
    };
    let services = create_test_services(catalog);

    assert_eq!(suggest(&services, "blefaro", Some(500)).len(), 20);
    assert!(suggest(&services, "blefaro", Some(0)).is_empty());
}
