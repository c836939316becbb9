use console_lib::model::{AuditLog, QueuedMessage, Tenant};
use console_lib::query::{Dataset, Filter, OrderBy, Query, Value};
use console_lib::{Error, MockData};

fn tenants() -> Dataset<Tenant> {
    Dataset::new(MockData::load().unwrap().tenants)
}

fn ids<T: console_lib::query::Record>(rows: &[T]) -> Vec<&str> {
    rows.iter().map(|r| r.id()).collect()
}

#[test]
fn test_order_by_created_desc() {
    let page = tenants()
        .query(&Query::new().order(OrderBy::desc("created_at")))
        .unwrap();
    assert_eq!(ids(page.rows()), vec!["4", "2", "1", "3", "5"]);
    assert_eq!(page.total_count(), 5);
    assert_eq!(page.total_pages(), 1);
    assert!(!page.has_more());
}

#[test]
fn test_filter_then_sort() {
    let page = tenants()
        .query(
            &Query::new()
                .filter(Filter::eq("plan", "enterprise"))
                .order(OrderBy::asc("name")),
        )
        .unwrap();
    let names: Vec<_> = page.rows().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Acme Corporation", "Global Retail Ltd", "MegaMart"]);
}

#[test]
fn test_sort_is_stable() {
    let page = tenants()
        .query(&Query::new().order(OrderBy::asc("plan")))
        .unwrap();
    assert_eq!(ids(page.rows()), vec!["1", "3", "5", "2", "4"]);
}

#[test]
fn test_secondary_order_breaks_ties() {
    let page = tenants()
        .query(&Query::new().order(OrderBy::asc("plan").then_desc("user_count")))
        .unwrap();
    assert_eq!(ids(page.rows()), vec!["5", "3", "1", "2", "4"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let dataset = tenants();
    let page = dataset.query(&Query::new().search("GLOBAL")).unwrap();
    assert_eq!(ids(page.rows()), vec!["3"]);

    let page = dataset.query(&Query::new().search("techstart.io")).unwrap();
    assert_eq!(ids(page.rows()), vec!["2"]);

    let page = dataset.query(&Query::new().search("  ")).unwrap();
    assert_eq!(page.total_count(), 5);
}

#[test]
fn test_message_search_matches_phone_verbatim() {
    let messages: Dataset<QueuedMessage> = Dataset::new(MockData::load().unwrap().messages);
    let page = messages.query(&Query::new().search("+91987")).unwrap();
    assert_eq!(ids(page.rows()), vec!["1"]);

    let page = messages.query(&Query::new().search("acme")).unwrap();
    assert_eq!(ids(page.rows()), vec!["1", "3"]);
}

#[test]
fn test_combined_filters() {
    let filter = Filter::eq("status", "active").and_also(Filter::or([
        Filter::contains("owner_email", ".COM"),
        Filter::eq("plan", "growth"),
    ]));
    let page = tenants().query(&Query::new().filter(filter)).unwrap();
    assert_eq!(ids(page.rows()), vec!["1", "2", "3"]);

    let page = tenants()
        .query(&Query::new().filter(Filter::ne("status", "active")))
        .unwrap();
    assert_eq!(ids(page.rows()), vec!["4", "5"]);
}

#[test]
fn test_pagination_and_clamping() {
    let dataset = tenants();
    let page = dataset
        .query(&Query::new().order(OrderBy::asc("id")).page(2, 2))
        .unwrap();
    assert_eq!(ids(page.rows()), vec!["3", "4"]);
    assert_eq!(page.total_pages(), 3);
    assert!(page.has_more());

    let page = dataset
        .query(&Query::new().order(OrderBy::asc("id")).page(99, 2))
        .unwrap();
    assert_eq!(page.page(), 3);
    assert_eq!(ids(page.rows()), vec!["5"]);

    let page = dataset.query(&Query::new().page(0, 2)).unwrap();
    assert_eq!(page.page(), 1);
}

#[test]
fn test_empty_result_is_page_one() {
    let page = tenants().query(&Query::new().search("nothing-matches")).unwrap();
    assert!(page.is_empty());
    assert_eq!(page.page(), 1);
    assert_eq!(page.total_pages(), 0);
}

#[test]
fn test_zero_page_size_is_rejected() {
    let err = tenants().query(&Query::new().page(1, 0)).unwrap_err();
    assert!(matches!(err, Error::InvalidPageSize));
}

#[test]
fn test_unknown_fields_are_rejected() {
    let err = tenants()
        .query(&Query::new().filter(Filter::eq("colour", "red")))
        .unwrap_err();
    assert_eq!(err.to_string(), "unknown field 'colour' on tenant");

    let empty: Dataset<Tenant> = Dataset::default();
    let err = empty
        .query(&Query::new().order(OrderBy::asc("nope")))
        .unwrap_err();
    assert!(matches!(err, Error::UnknownField { .. }));
}

#[test]
fn test_null_sorts_first_ascending() {
    let logs: Dataset<AuditLog> = Dataset::new(MockData::load().unwrap().audit_logs);
    let page = logs
        .query(&Query::new().order(OrderBy::asc("tenant_name")))
        .unwrap();
    assert_eq!(page.rows()[0].id, "2");
}

#[test]
fn test_value_ordering() {
    assert!(Value::Null < Value::Bool(false));
    assert!(Value::Int(3) < Value::Int(10));
    assert!(Value::from("apple") < Value::from("Banana"));
    assert_eq!(Value::from(None::<String>), Value::Null);
}

#[test]
fn test_get_by_id() {
    let dataset = tenants();
    assert_eq!(dataset.get("3").map(|t| t.slug.as_str()), Some("global-retail"));
    assert!(dataset.get("42").is_none());
}
