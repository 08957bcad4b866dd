#![cfg(feature = "test-mocks")]

use pushkind_shop::domain::query::{FilterSpec, SortSpec};
use pushkind_shop::domain::record::Record;
use pushkind_shop::domain::screen::ListScreen;
use pushkind_shop::domain::types::PageSize;
use pushkind_shop::dto::list::ListParams;
use pushkind_shop::engine::QueryError;
use pushkind_shop::repository::errors::RepositoryError;
use pushkind_shop::repository::mock::MockRepository;
use pushkind_shop::services::ServiceError;
use pushkind_shop::services::list::load_list_page;
use serde_json::{Value, json};

fn orders() -> Vec<Record> {
    [
        json!({"order_number": "A-100", "customer_name": "Alice", "customer_email": "alice@example.com", "status": "paid", "payment_status": "captured", "total": 120.5, "created_at": "2024-03-01"}),
        json!({"order_number": "A-101", "customer_name": "Bob", "customer_email": "bob@example.com", "status": "pending", "payment_status": "authorized", "total": 40, "created_at": "2024-03-02"}),
        json!({"order_number": "A-102", "customer_name": "Carol", "customer_email": "carol@example.com", "status": "paid", "payment_status": "captured", "total": 310, "created_at": "2024-03-03"}),
        json!({"order_number": "A-103", "customer_name": "Dave", "customer_email": "dave@example.org", "status": "paid", "payment_status": "refunded", "total": 15, "created_at": "2024-03-04"}),
    ]
    .into_iter()
    .map(|value| Record::try_from(value).unwrap())
    .collect()
}

fn numbers(records: &[Record]) -> Vec<&str> {
    records
        .iter()
        .filter_map(|r| r.get("order_number").and_then(Value::as_str))
        .collect()
}

fn repo_with_orders() -> MockRepository {
    let mut repo = MockRepository::new();
    repo.expect_list_records()
        .withf(|collection| collection == "orders")
        .times(1)
        .returning(|_| Ok(orders()));
    repo
}

#[test]
fn orders_screen_filters_and_sorts_by_total() {
    let repo = repo_with_orders();
    let screen = ListScreen::orders().unwrap();
    let params = ListParams::default()
        .filter(FilterSpec::matching("status", "paid"))
        .sort(SortSpec::desc("total"));

    let data = load_list_page(&repo, &screen, params, 2).unwrap();

    assert_eq!(data.screen, "orders");
    assert_eq!(numbers(&data.list.items), vec!["A-102", "A-100", "A-103"]);
    assert_eq!(data.list.total_items, 3);
    assert_eq!(data.list.total_pages, 1);
    assert!(data.list.pages.is_empty());
    assert_eq!(data.sort, Some(SortSpec::desc("total")));
}

#[test]
fn orders_screen_defaults_to_newest_first() {
    let repo = repo_with_orders();
    let screen = ListScreen::orders().unwrap();

    let data = load_list_page(&repo, &screen, ListParams::default(), 2).unwrap();

    assert_eq!(
        numbers(&data.list.items),
        vec!["A-103", "A-102", "A-101", "A-100"]
    );
    assert_eq!(data.search_query, None);
}

#[test]
fn search_matches_customer_email() {
    let repo = repo_with_orders();
    let screen = ListScreen::orders().unwrap();
    let params = ListParams::default().search("  EXAMPLE.ORG ");

    let data = load_list_page(&repo, &screen, params, 2).unwrap();

    assert_eq!(numbers(&data.list.items), vec!["A-103"]);
    assert_eq!(data.search_query.as_deref(), Some("EXAMPLE.ORG"));
}

#[test]
fn page_past_the_end_shows_last_page() {
    let repo = repo_with_orders();
    let screen = ListScreen::orders().unwrap().page_size(PageSize::try_from(3).unwrap());
    let params = ListParams::default()
        .sort(SortSpec::asc("order_number"))
        .page(9);

    let data = load_list_page(&repo, &screen, params, 2).unwrap();

    assert_eq!(data.list.page, 2);
    assert_eq!(data.list.total_pages, 2);
    assert_eq!(numbers(&data.list.items), vec!["A-103"]);
}

#[test]
fn unsupported_filter_is_rejected_before_loading() {
    let mut repo = MockRepository::new();
    repo.expect_list_records().never();
    let screen = ListScreen::orders().unwrap();
    let params = ListParams::default().filter(FilterSpec::matching("customer_email", "x"));

    let result = load_list_page(&repo, &screen, params, 2);

    assert!(matches!(
        result,
        Err(ServiceError::Query(QueryError::UnsupportedField { capability: "filterable", .. }))
    ));
}

#[test]
fn missing_collection_maps_to_not_found() {
    let mut repo = MockRepository::new();
    repo.expect_list_records()
        .returning(|name| Err(RepositoryError::NotFound(name.to_string())));
    let screen = ListScreen::social_links().unwrap();

    let result = load_list_page(&repo, &screen, ListParams::default(), 2);

    assert!(matches!(result, Err(ServiceError::NotFound(name)) if name == "social-links"));
}
