use openfema_api::{DeclarationQuery, Query};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

fn rendered(query: DeclarationQuery) -> String {
    query.add_to_url(&base_url()).query().unwrap().to_string()
}

#[test]
fn default_query_starts_with_default_order_by() {
    let query = rendered(DeclarationQuery::default());
    assert!(query.starts_with("$orderby=declarationDate+desc"));
    assert!(!query.contains("$top"));
    assert!(!query.contains("$filter"));
}

#[test]
fn order_by_leads_even_when_other_options_set() {
    let query = rendered(
        DeclarationQuery::default()
            .with_max_count(5)
            .with_state("VA"),
    );
    assert!(query.starts_with("$orderby=declarationDate+desc"));
}

#[test]
fn max_count_renders_top_exactly_once() {
    let query = rendered(DeclarationQuery::default().with_max_count(25));
    assert_eq!(query.matches("$top=25").count(), 1);
}

#[test]
fn max_count_is_last_write_wins() {
    let query = rendered(DeclarationQuery::default().with_max_count(5).with_max_count(10));
    assert!(query.contains("$top=10"));
    assert!(!query.contains("$top=5"));
}

#[test]
fn offset_renders_skip() {
    let query = rendered(DeclarationQuery::default().with_offset(100));
    assert!(query.contains("$skip=100"));
}

#[test]
fn selected_fields_render_comma_joined() {
    let query = rendered(
        DeclarationQuery::default()
            .with_selected_field("state")
            .with_selected_field("declarationDate"),
    );
    assert!(query.contains("$select=state%2CdeclarationDate"));
}

#[test]
fn state_filter_renders_quoted_clause() {
    let query = rendered(DeclarationQuery::default().with_state("TN"));
    assert!(query.contains("$filter=state+eq+%27TN%27"));
}

#[test]
fn declared_after_filter_renders_iso8601_timestamp() {
    let query = rendered(DeclarationQuery::default().with_declared_after(2010, 1));
    assert!(query.contains("$filter=declarationDate+gt+%272010-01-01T00%3A00%3A01.000Z%27"));
}

#[test]
fn two_filters_join_with_single_and() {
    let query = rendered(
        DeclarationQuery::default()
            .with_state("TN")
            .with_declared_after(2021, 8),
    );
    assert_eq!(query.matches("+and+").count(), 1);
}

#[test]
fn filter_join_count_is_independent_of_call_order() {
    let forward = rendered(
        DeclarationQuery::default()
            .with_state("TN")
            .with_declared_after(2021, 8)
            .with_filter("disasterNumber gt 1000"),
    );
    let reverse = rendered(
        DeclarationQuery::default()
            .with_filter("disasterNumber gt 1000")
            .with_declared_after(2021, 8)
            .with_state("TN"),
    );
    assert_eq!(forward.matches("+and+").count(), 2);
    assert_eq!(reverse.matches("+and+").count(), 2);
}

#[test]
fn current_month_filter_adds_one_clause() {
    let query = rendered(DeclarationQuery::default().with_current_month());
    assert_eq!(query.matches("declarationDate+gt").count(), 1);
    assert_eq!(query.matches("+and+").count(), 0);
}

#[test]
fn filter_values_are_encoded_exactly_once() {
    let query = rendered(DeclarationQuery::default().with_state("TN"));
    // A double-encoded clause would contain %2527 instead of %27.
    assert!(!query.contains("%25"));
}

#[test]
fn combined_query_renders_all_sections() {
    let query = rendered(
        DeclarationQuery::default()
            .with_max_count(2)
            .with_state("TN")
            .with_current_month(),
    );
    assert!(query.starts_with("$orderby=declarationDate+desc"));
    assert!(query.contains("$top=2"));
    assert!(query.contains("state+eq+%27TN%27+and+declarationDate+gt"));
}
