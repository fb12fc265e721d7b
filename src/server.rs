//! HTTP surface: the card endpoint, its JSON twin, and a health probe.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use crate::app::{AppContext, CardError, Result};
use crate::normalizer::parse_feed;
use crate::params::{resolve_boolean, resolve_feed_source, resolve_limit};
use crate::projector::{project_feed, FeedJson};
use crate::render::{render_card, CardOptions, Theme};

const CACHE_CONTROL: &str = "public, max-age=3600";

#[derive(Debug, Default, Deserialize)]
pub struct CardQuery {
    rss: Option<String>,
    username: Option<String>,
    theme: Option<String>,
    limit: Option<String>,
    show_date: Option<String>,
    show_tags: Option<String>,
}

impl CardError {
    fn status_code(&self) -> StatusCode {
        match self {
            CardError::InvalidInput(_) | CardError::InvalidFeed(_) => StatusCode::BAD_REQUEST,
            CardError::UpstreamStatus(_) | CardError::Http(_) => StatusCode::BAD_GATEWAY,
            CardError::Io(_) | CardError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CardError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Client mistakes echo their message; anything upstream or
        // internal is logged in full and reported opaquely.
        let message = if status == StatusCode::BAD_REQUEST {
            self.to_string()
        } else {
            error!(error = %self, "request failed");
            "Internal server error".to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub fn router(ctx: Arc<AppContext>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(health))
        .route("/api/medium-card", get(medium_card))
        .route("/api/medium-blog-card", get(medium_card))
        .route("/api/medium-json", get(medium_json))
        .layer(cors)
        .with_state(ctx)
}

/// Bind and serve until the process is stopped.
pub async fn serve(ctx: AppContext, port: u16) -> Result<()> {
    let app = router(Arc::new(ctx));
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn medium_card(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<CardQuery>,
) -> Result<Response> {
    let limit = resolve_limit(query.limit.as_deref())?;
    let show_date = resolve_boolean(query.show_date.as_deref(), true);
    let show_tags = resolve_boolean(query.show_tags.as_deref(), true);
    let theme = Theme::from_param(query.theme.as_deref().unwrap_or("dark"));

    let feed = load_feed(&ctx, query.rss.as_deref(), query.username.as_deref()).await?;

    let username = query
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .or_else(|| ctx.config.default_username.clone())
        .unwrap_or_default();

    let options = CardOptions {
        username,
        theme,
        show_date,
        show_tags,
        header_label: None,
    };
    let svg = render_card(&feed.limited(limit).items, &options);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("image/svg+xml"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(CACHE_CONTROL),
    );
    Ok((StatusCode::OK, headers, svg).into_response())
}

async fn medium_json(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<CardQuery>,
) -> Result<([(header::HeaderName, &'static str); 1], Json<FeedJson>)> {
    let feed = load_feed(&ctx, query.rss.as_deref(), query.username.as_deref()).await?;
    Ok((
        [(header::CACHE_CONTROL, CACHE_CONTROL)],
        Json(project_feed(&feed)),
    ))
}

async fn load_feed(
    ctx: &AppContext,
    rss: Option<&str>,
    username: Option<&str>,
) -> Result<crate::domain::Feed> {
    let source = resolve_feed_source(rss, username, ctx.config.default_feed_url.as_deref())?;
    let body = ctx.fetcher.fetch(&source).await?;
    parse_feed(&body)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "ok": true,
        "message": "Medium blog card API is running",
        "endpoint": "/api/medium-blog-card?username=<handle>&limit=<optional number>",
    }))
}
