//! Search input timing: debounced searches, immediate recent fetches, history saves,
//! and superseded responses.

mod helpers;

use std::time::Duration;

use helpers::{ScriptedSource, SearchHarness};
use photogrid_core::api::SearchRequest;
use tokio::task::LocalSet;
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn settled_query_issues_exactly_one_search() {
    LocalSet::new()
        .run_until(async {
            let mut h = SearchHarness::new(ScriptedSource::new(100, 40));
            h.type_text("cat");

            sleep(Duration::from_millis(799)).await;
            assert!(h.source.requests().is_empty());

            h.settle().await;
            assert_eq!(h.source.requests(), vec![SearchRequest::new("cat", 1)]);
            assert_eq!(h.gallery.borrow().query(), "cat");
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn typing_within_quiet_period_searches_only_final_text() {
    LocalSet::new()
        .run_until(async {
            let mut h = SearchHarness::new(ScriptedSource::new(100, 40));
            h.type_text("c");
            sleep(Duration::from_millis(200)).await;
            h.type_text("ca");
            sleep(Duration::from_millis(500)).await;
            h.type_text("cat");
            h.settle().await;

            assert_eq!(h.source.requests(), vec![SearchRequest::new("cat", 1)]);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn clearing_input_fetches_recent_immediately() {
    LocalSet::new()
        .run_until(async {
            let mut h = SearchHarness::new(ScriptedSource::new(100, 40));
            h.type_text("cat");
            h.settle().await;

            h.type_text("");
            sleep(Duration::from_millis(1)).await;
            assert_eq!(h.source.requests().last(), Some(&SearchRequest::recent(1)));

            h.settle().await;
            assert_eq!(h.gallery.borrow().query(), "");
            assert!(h.photo_ids().iter().all(|id| id.starts_with("recent-1-")));
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn stabilized_queries_are_saved_most_recent_first() {
    LocalSet::new()
        .run_until(async {
            let mut h = SearchHarness::new(ScriptedSource::new(10, 40));
            h.type_text("ca");
            h.type_text("cat");
            h.settle().await;
            h.type_text("dog");
            h.settle().await;
            h.type_text("cat");
            h.settle().await;
            h.type_text("");
            h.settle().await;

            let history = h.history.borrow();
            assert_eq!(history.entries(), ["cat", "dog"]);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn slow_response_for_old_query_is_discarded() {
    LocalSet::new()
        .run_until(async {
            let source = ScriptedSource::new(100, 40).with_latency("ca", Duration::from_secs(5));
            let mut h = SearchHarness::new(source);

            h.type_text("ca");
            // Let the "ca" search fire and go in flight.
            sleep(Duration::from_millis(900)).await;
            h.type_text("cat");
            h.settle().await;

            assert_eq!(
                h.source.requests(),
                vec![SearchRequest::new("ca", 1), SearchRequest::new("cat", 1)]
            );
            assert_eq!(h.gallery.borrow().query(), "cat");
            assert!(h.photo_ids().iter().all(|id| id.starts_with("cat-1-")));
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn scroll_appends_next_page_of_active_query() {
    LocalSet::new()
        .run_until(async {
            let mut h = SearchHarness::new(ScriptedSource::new(100, 40));
            h.type_text("cat");
            h.settle().await;

            h.scroll_to_bottom();
            // A second scroll while the first is in flight is ignored.
            h.scroll_to_bottom();
            h.settle().await;

            assert_eq!(
                h.source.requests(),
                vec![SearchRequest::new("cat", 1), SearchRequest::new("cat", 2)]
            );
            assert_eq!(h.photo_ids().len(), 80);
        })
        .await;
}
