#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use promflare_core::error::Result;
use promflare_core::metrics::MetricRegistry;
use promflare_exporter::app_state::AppState;
use promflare_exporter::config;
use promflare_exporter::metrics::ExporterMetrics;
use promflare_exporter::router::build_router;
use promflare_exporter::source::SampleSource;
use promflare_exporter::updater::Updater;

struct FixedSource(f64);

impl SampleSource for FixedSource {
    fn sample(&self) -> Result<f64> {
        Ok(self.0)
    }
}

const MINIMAL_CONFIG: &str = r#"
[source]
poll_budget = 1
endpoint = "local"
"#;

fn setup() -> (AppState, ExporterMetrics) {
    let cfg = config::load_from_str(MINIMAL_CONFIG).unwrap();
    let registry = Arc::new(MetricRegistry::new());
    let metrics = ExporterMetrics::register(&registry).unwrap();
    (AppState::new(cfg, registry), metrics)
}

async fn get_metrics(state: AppState) -> (StatusCode, String, Option<String>) {
    let app = build_router(state);
    let resp = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap(), content_type)
}

#[tokio::test]
async fn scrape_before_first_tick_shows_default_state() {
    let (state, _metrics) = setup();

    let (status, body, content_type) = get_metrics(state).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        content_type.as_deref(),
        Some("text/plain; version=0.0.4; charset=utf-8")
    );
    assert!(body.contains("# TYPE promflare_sample_value gauge"));
    assert!(body.contains("# TYPE promflare_sample_distribution histogram"));
    assert!(body.contains("promflare_sample_distribution_count 0\n"));
    assert!(!body.contains("promflare_sample_value{"));
}

#[tokio::test]
async fn scrape_after_update_shows_both_metrics() {
    let (state, metrics) = setup();
    let updater = Updater::new(
        metrics,
        Arc::new(FixedSource(0.25)),
        Duration::from_millis(10),
    );
    updater.step().unwrap();

    let (status, body, _) = get_metrics(state).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("promflare_sample_value{label1=\"value1\",label2=\"value2\"} 0.25\n"));
    assert!(body.contains("promflare_sample_distribution_bucket{le=\"0.3\"} 1\n"));
    assert!(body.contains("promflare_sample_distribution_count 1\n"));
    assert!(body.contains("promflare_sample_distribution_sum 0.25\n"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (state, _metrics) = setup();
    let app = build_router(state);

    let resp = app
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn scrape_never_mutates_state() {
    let (state, _metrics) = setup();

    let (_, first, _) = get_metrics(state.clone()).await;
    let (_, second, _) = get_metrics(state).await;
    assert_eq!(first, second);
}
