//! E2E tests for browsing: discovery, trending, search, pagination,
//! filters and favorites.

mod common;

use axum::http::StatusCode;
use common::{fixtures, TestFixture};
use explorer_core::testing::RecordedQuery;
use explorer_core::{CatalogError, DiscoverFilters, TrendingWindow};
use serde_json::json;

#[tokio::test]
async fn test_initial_browse_state() {
    let fixture = TestFixture::new();

    let response = fixture.get("/api/v1/browse").await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["mode"], "browse");
    assert_eq!(response.body["results"], json!([]));
    assert_eq!(response.body["page_cursor"], 1);
    assert_eq!(response.body["has_more"], true);
    assert_eq!(response.body["is_loading"], false);
}

#[tokio::test]
async fn test_discover_serves_first_page() {
    let fixture = TestFixture::new();
    fixture
        .catalog
        .set_discover_pages(vec![fixtures::movie_page(1, 3)])
        .await;

    let response = fixture.post_empty("/api/v1/browse/discover").await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["mode"], "browse");
    assert_eq!(response.body["results"].as_array().unwrap().len(), 3);
    assert_eq!(response.body["results"][0]["id"], 1);
    assert_eq!(response.body["page_cursor"], 2);
    assert_eq!(response.body["has_more"], true);
}

#[tokio::test]
async fn test_load_more_appends_next_page() {
    let fixture = TestFixture::new();
    fixture
        .catalog
        .set_discover_pages(vec![
            fixtures::movie_page(1, 2),
            fixtures::movie_page(3, 2),
            vec![],
        ])
        .await;

    fixture.post_empty("/api/v1/browse/discover").await;
    let response = fixture.post_empty("/api/v1/browse/more").await;

    assert_status!(response, StatusCode::OK);
    let ids: Vec<u64> = response.body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(response.body["page_cursor"], 3);

    // Empty page turns pagination off.
    let response = fixture.post_empty("/api/v1/browse/more").await;
    assert_eq!(response.body["has_more"], false);
    assert_eq!(response.body["results"].as_array().unwrap().len(), 4);

    // Exhausted: no further catalog call.
    let before = fixture.catalog.query_count().await;
    fixture.post_empty("/api/v1/browse/more").await;
    assert_eq!(fixture.catalog.query_count().await, before);
}

#[tokio::test]
async fn test_trending_switches_mode() {
    let fixture = TestFixture::new();
    fixture
        .catalog
        .set_trending_pages(vec![fixtures::movie_page(10, 2)])
        .await;

    let response = fixture.post_empty("/api/v1/browse/trending").await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["mode"], "trending");
    assert_eq!(response.body["results"][0]["id"], 10);

    let queries = fixture.catalog.recorded_queries().await;
    assert_eq!(
        queries[0],
        RecordedQuery::Trending {
            window: TrendingWindow::Day,
            page: 1,
        }
    );
}

#[tokio::test]
async fn test_search_sets_query_and_mode() {
    let fixture = TestFixture::new();
    fixture
        .catalog
        .set_search_pages(vec![fixtures::movie_page(100, 1)])
        .await;

    let response = fixture
        .post("/api/v1/browse/search", json!({"query": "  matrix  "}))
        .await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["mode"], "search");
    assert_eq!(response.body["search_query"], "matrix");
    assert_eq!(response.body["results"][0]["id"], 100);

    let queries = fixture.catalog.recorded_queries().await;
    assert_eq!(
        queries[0],
        RecordedQuery::Search {
            query: "matrix".to_string(),
            page: 1,
        }
    );
}

#[tokio::test]
async fn test_blank_search_is_a_no_op() {
    let fixture = TestFixture::new();
    fixture
        .catalog
        .set_discover_pages(vec![fixtures::movie_page(1, 2)])
        .await;
    fixture.post_empty("/api/v1/browse/discover").await;
    let before = fixture.catalog.query_count().await;

    let response = fixture
        .post("/api/v1/browse/search", json!({"query": "   "}))
        .await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["mode"], "browse");
    assert_eq!(fixture.catalog.query_count().await, before);
}

#[tokio::test]
async fn test_clear_search_keeps_results() {
    let fixture = TestFixture::new();
    fixture
        .catalog
        .set_search_pages(vec![fixtures::movie_page(100, 2)])
        .await;
    fixture
        .post("/api/v1/browse/search", json!({"query": "matrix"}))
        .await;

    let response = fixture.delete("/api/v1/browse/search").await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["search_query"], "");
    assert_eq!(response.body["results"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_put_filters_triggers_refetch() {
    let fixture = TestFixture::new();
    fixture
        .catalog
        .set_discover_pages(vec![fixtures::movie_page(1, 1)])
        .await;

    let response = fixture
        .put(
            "/api/v1/browse/filters",
            json!({"genre": 28, "year": 2023, "min_rating": 7.5}),
        )
        .await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["filters"]["genre"], 28);
    assert_eq!(response.body["filters"]["year"], 2023);

    let queries = fixture.catalog.recorded_queries().await;
    assert_eq!(
        queries[0],
        RecordedQuery::Discover {
            filters: DiscoverFilters {
                genre: Some(28),
                year: Some(2023),
                min_rating: Some(7.5),
            },
            page: 1,
        }
    );
}

#[tokio::test]
async fn test_toggle_favorite_roundtrip() {
    let fixture = TestFixture::new();
    let movie = fixtures::movie_with_id(42, "Blade Runner");

    let response = fixture
        .post("/api/v1/favorites", serde_json::to_value(&movie).unwrap())
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["favorite_ids"], json!([42]));

    let favorites = fixture.get("/api/v1/favorites").await;
    assert_eq!(favorites.body[0]["id"], 42);
    assert_eq!(favorites.body[0]["title"], "Blade Runner");

    // Second toggle removes it.
    let response = fixture
        .post("/api/v1/favorites", serde_json::to_value(&movie).unwrap())
        .await;
    assert_eq!(response.body["favorite_ids"], json!([]));
}

#[tokio::test]
async fn test_show_favorites_mode() {
    let fixture = TestFixture::new();
    let movie = fixtures::movie_with_id(7, "Seven");
    fixture
        .post("/api/v1/favorites", serde_json::to_value(&movie).unwrap())
        .await;

    let response = fixture.post_empty("/api/v1/browse/favorites").await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["mode"], "favorites");
    assert_eq!(response.body["results"][0]["id"], 7);
    assert_eq!(response.body["has_more"], false);
}

#[tokio::test]
async fn test_rate_limit_maps_to_429() {
    let fixture = TestFixture::new();
    fixture
        .catalog
        .set_next_error(CatalogError::RateLimitExceeded)
        .await;

    let response = fixture.post_empty("/api/v1/browse/discover").await;

    assert_status!(response, StatusCode::TOO_MANY_REQUESTS);
    assert!(response.body["error"].is_string());
}

#[tokio::test]
async fn test_fetch_failure_keeps_previous_results() {
    let fixture = TestFixture::new();
    fixture
        .catalog
        .set_discover_pages(vec![fixtures::movie_page(1, 2)])
        .await;
    fixture.post_empty("/api/v1/browse/discover").await;

    fixture
        .catalog
        .set_next_error(CatalogError::NotConfigured("no token".to_string()))
        .await;
    let response = fixture.post_empty("/api/v1/browse/discover").await;
    assert_status!(response, StatusCode::SERVICE_UNAVAILABLE);

    let state = fixture.get("/api/v1/browse").await;
    assert_eq!(state.body["results"].as_array().unwrap().len(), 2);
    assert_eq!(state.body["is_loading"], false);
}
