//! Tests for list loading and local reconciliation.

use rstest::rstest;

use super::*;
use crate::domain::ports::{MockSelectifyApi, NoticeLevel};
use crate::domain::test_fixtures::{OWNER_EMAIL, context, query, record_id, signed_in};
use crate::domain::{QuerySource, Session};

fn widget_and_gadget() -> Vec<crate::domain::Query> {
    vec![
        query("1", "Widget", "2024-01-01"),
        query("2", "Gadget", "2024-02-01"),
        query("3", "Gizmo", "2024-01-15"),
    ]
}

#[tokio::test]
async fn load_replaces_records_and_clears_flags() {
    let mut api = MockSelectifyApi::new();
    api.expect_list_queries()
        .times(1)
        .return_once(|| Ok(widget_and_gadget()));
    let (context, notifier) = context(api, true, Session::anonymous());
    let mut store = ListStore::<QuerySource>::new(&context);

    let outcome = store.load(QuerySource::All).await;

    assert_eq!(outcome, LoadOutcome::Loaded { count: 3 });
    assert!(!store.is_loading());
    assert!(store.error().is_none());
    assert_eq!(store.records().len(), 3);
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn failed_load_keeps_previous_records_and_notifies() {
    let mut api = MockSelectifyApi::new();
    let mut calls = 0;
    api.expect_list_queries().times(2).returning(move || {
        calls += 1;
        if calls == 1 {
            Ok(widget_and_gadget())
        } else {
            Err(SelectifyApiError::http(500_u16, "boom"))
        }
    });
    let (context, notifier) = context(api, true, Session::anonymous());
    let mut store = ListStore::<QuerySource>::new(&context);
    store.load(QuerySource::All).await;

    let outcome = store.reload().await;

    assert_eq!(
        outcome,
        LoadOutcome::Failed {
            error: SelectifyApiError::http(500_u16, "boom")
        }
    );
    assert!(!store.is_loading());
    assert_eq!(store.records().len(), 3);
    assert_eq!(store.error().and_then(SelectifyApiError::status), Some(500));
    assert_eq!(
        notifier.messages(NoticeLevel::Error),
        vec!["Error fetching queries".to_owned()]
    );
}

#[tokio::test]
async fn identity_keyed_load_waits_for_session() {
    let mut api = MockSelectifyApi::new();
    api.expect_list_queries_by_owner().never();
    let (context, _notifier) = context(api, true, Session::anonymous());
    let mut store = ListStore::<QuerySource>::new(&context);

    let outcome = store
        .load_when_ready(QuerySource::owned_by(&context.session))
        .await;

    assert_eq!(outcome, LoadOutcome::Skipped);
    assert!(store.source().is_none());
}

#[tokio::test]
async fn identity_keyed_load_fires_once_email_is_known() {
    let mut api = MockSelectifyApi::new();
    api.expect_list_queries_by_owner()
        .withf(|email| email == OWNER_EMAIL)
        .times(1)
        .return_once(|_| Ok(vec![query("1", "Widget", "2024-01-01")]));
    let (context, _notifier) = context(api, true, signed_in());
    let mut store = ListStore::<QuerySource>::new(&context);

    let outcome = store
        .load_when_ready(QuerySource::owned_by(&context.session))
        .await;

    assert_eq!(outcome, LoadOutcome::Loaded { count: 1 });
}

#[rstest]
#[case("1", 1, vec!["2", "3"])]
#[case("2", 1, vec!["1", "3"])]
#[case("missing", 0, vec!["1", "2", "3"])]
#[tokio::test]
async fn remove_preserves_relative_order(
    #[case] id: &str,
    #[case] removed: usize,
    #[case] expected: Vec<&str>,
) {
    let mut api = MockSelectifyApi::new();
    api.expect_list_queries()
        .return_once(|| Ok(widget_and_gadget()));
    let (context, _notifier) = context(api, true, Session::anonymous());
    let mut store = ListStore::<QuerySource>::new(&context);
    store.load(QuerySource::All).await;

    assert_eq!(store.remove(&record_id(id)), removed);
    let ids: Vec<&str> = store.records().iter().map(|q| q.id.as_ref()).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn replace_and_update_patch_in_place() {
    let mut api = MockSelectifyApi::new();
    api.expect_list_queries()
        .return_once(|| Ok(widget_and_gadget()));
    let (context, _notifier) = context(api, true, Session::anonymous());
    let mut store = ListStore::<QuerySource>::new(&context);
    store.load(QuerySource::All).await;

    let mut renamed = query("2", "Gadget Pro", "2024-02-01");
    renamed.recommendation_count = 4;
    assert!(store.replace(renamed));
    assert!(store.update(&record_id("3"), |q| q.recommendation_count += 1));
    assert!(!store.replace(query("9", "Ghost", "2024-01-01")));

    assert_eq!(
        store.find(&record_id("2")).map(|q| q.product_name.as_str()),
        Some("Gadget Pro")
    );
    assert_eq!(
        store.find(&record_id("3")).map(|q| q.recommendation_count),
        Some(1)
    );
    assert_eq!(store.records().len(), 3);
}
