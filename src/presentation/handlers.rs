// HTTP request handlers
use crate::error::SolarError;
use crate::presentation::app_state::{AppState, SummarySource};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

fn fetch_failed(what: &str, e: SolarError) -> Response {
    tracing::warn!("Failed to update {} data: {}", what, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Failed to update {} data: {}", what, e),
    )
        .into_response()
}

/// Latest live generation and consumption
pub async fn live(State(state): State<Arc<AppState>>) -> Response {
    match &state.source {
        SummarySource::OnDemand(service) => match service.live_summary().await {
            Ok(summary) => Json(summary).into_response(),
            Err(e) => fetch_failed("live", e),
        },
        SummarySource::Background(store) => Json(store.live().await).into_response(),
    }
}

/// Today's totals
pub async fn site(State(state): State<Arc<AppState>>) -> Response {
    match &state.source {
        SummarySource::OnDemand(service) => match service.site_summary().await {
            Ok(summary) => Json(summary).into_response(),
            Err(e) => fetch_failed("site", e),
        },
        SummarySource::Background(store) => Json(store.site().await).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use crate::application::fake_gateway::FakeGateway;
    use crate::application::snapshot_store::SnapshotStore;
    use crate::application::solar_service::SolarService;
    use crate::application::token_manager::TokenManager;
    use crate::domain::credentials::Credentials;
    use crate::domain::summary::{DailySummary, LiveSummary};
    use crate::presentation::app_state::{AppState, SummarySource};
    use crate::presentation::routes::create_router;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn on_demand(gateway: Arc<FakeGateway>) -> AppState {
        let creds = Credentials::new("user".into(), "pass".into(), "42".into());
        let tokens = Arc::new(TokenManager::new(gateway.clone(), creds));
        AppState {
            source: SummarySource::OnDemand(SolarService::new(gateway, tokens)),
        }
    }

    async fn get(state: AppState, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = create_router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_health_check() {
        let state = AppState {
            source: SummarySource::Background(Arc::new(SnapshotStore::new())),
        };
        let (status, body) = get(state, "/healthz").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn test_on_demand_live() {
        let gateway = Arc::new(FakeGateway::new());
        let (status, body) = get(on_demand(gateway.clone()), "/live").await;
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["available"], true);
        assert_eq!(json["generated"], 4.5);
        assert_eq!(json["consumed"], 1.5);
        assert_eq!(gateway.live_count(), 1);
    }

    #[tokio::test]
    async fn test_on_demand_site_shape() {
        let gateway = Arc::new(FakeGateway::new());
        let (status, body) = get(on_demand(gateway), "/site").await;
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        for key in [
            "available", "generated", "consumed", "imported", "exported", "hot_water", "ac1",
            "ac2", "stove", "timestamp",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(json["available"], true);
    }

    #[tokio::test]
    async fn test_on_demand_failure_is_500() {
        let gateway = Arc::new(FakeGateway::new());
        gateway.fail_data.store(true, Ordering::SeqCst);

        let (status, body) = get(on_demand(gateway), "/site").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(String::from_utf8(body).unwrap().starts_with("Failed to update site data"));
    }

    #[tokio::test]
    async fn test_on_demand_token_failure_is_500() {
        let gateway = Arc::new(FakeGateway::new());
        gateway.fail_token.store(true, Ordering::SeqCst);

        let (status, _) = get(on_demand(gateway.clone()), "/live").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(gateway.live_count(), 0);
    }

    #[tokio::test]
    async fn test_background_serves_snapshot_without_fetching() {
        let store = Arc::new(SnapshotStore::new());
        store
            .set_live(LiveSummary { available: true, generated: 2.0, consumed: 0.5 })
            .await;
        let state = AppState {
            source: SummarySource::Background(store),
        };

        let (status, body) = get(state, "/live").await;
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["generated"], 2.0);
    }

    #[tokio::test]
    async fn test_background_unavailable_is_200() {
        let store = Arc::new(SnapshotStore::new());
        store.set_site(DailySummary::unavailable()).await;
        let state = AppState {
            source: SummarySource::Background(store),
        };

        let (status, body) = get(state, "/site").await;
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["available"], false);
        assert_eq!(json["generated"], 0.0);
        assert_eq!(json["exported"], 0.0);
    }
}
