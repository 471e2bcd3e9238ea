//! Re-React Lab Gateway — serves the lab page and its JSON API.
//! Hook Runtime Lab (call-order cache), Icon Registry, Logic Analyzer chat.
//! The LLM key stays here; the page never sees it.

use axum::{
    body::Body,
    extract::{Query, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use relab_core::{
    ChatSession, HookError, HookLab, HookLabView, IconIndex, IconPage, LabConfig, LlmMode,
    MockResponder, OpenRouterResponder, Responder, SubmitOutcome,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// The two main views of the page; the chat panel sits beside either.
const VIEWS: &[(&str, &str)] = &[("hooks", "Hook Runtime Lab"), ("icons", "Icon Registry")];

#[derive(Clone)]
struct AppState {
    config: Arc<LabConfig>,
    hook_lab: Arc<RwLock<HookLab>>,
    icons: Arc<IconIndex>,
    chat: Arc<ChatSession>,
}

#[derive(Deserialize)]
struct NameUpdate {
    value: String,
}

#[derive(Deserialize)]
struct IconQuery {
    #[serde(default)]
    q: String,
    #[serde(default)]
    page: Option<usize>,
}

#[derive(Deserialize)]
struct ChatRequest {
    message: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[relab-gateway] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = LabConfig::load()?;
    let responder = build_responder(&config);
    let state = AppState::new(config, responder)?;
    let addr = state.config.bind_addr();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        "[RELAB SYSTEM] {} listening on http://{} (responder: {})",
        state.config.app_name,
        addr,
        state.chat.responder_name()
    );
    axum::serve(listener, app(state)).await?;
    Ok(())
}

/// `openrouter` mode without a key falls back to the offline responder.
fn build_responder(config: &LabConfig) -> Arc<dyn Responder> {
    match config.llm_mode {
        LlmMode::Mock => Arc::new(MockResponder),
        LlmMode::OpenRouter => match OpenRouterResponder::from_config(config) {
            Ok(r) => Arc::new(r),
            Err(e) => {
                tracing::warn!(
                    "[RELAB SYSTEM] {}; set RELAB_LLM_API_KEY or OPENROUTER_API_KEY in .env. Using mock responder.",
                    e
                );
                Arc::new(MockResponder)
            }
        },
    }
}

impl AppState {
    fn new(config: LabConfig, responder: Arc<dyn Responder>) -> Result<Self, HookError> {
        let chat = ChatSession::new(responder, config.reply_timeout());
        Ok(Self {
            config: Arc::new(config),
            hook_lab: Arc::new(RwLock::new(HookLab::new()?)),
            icons: Arc::new(IconIndex::builtin()),
            chat: Arc::new(chat),
        })
    }
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(serve_lab_ui))
        .route("/api/v1/status", get(status_handler))
        .route("/api/v1/hooks", get(hooks_handler))
        .route("/api/v1/hooks/increment", post(hooks_increment_handler))
        .route("/api/v1/hooks/name", post(hooks_name_handler))
        .route("/api/v1/icons", get(icons_handler))
        .route("/api/v1/chat", get(chat_history_handler).post(chat_submit_handler))
        .with_state(state)
        .layer(axum::middleware::from_fn(log_lab_traffic))
}

async fn log_lab_traffic(request: Request<Body>, next: Next) -> Response {
    tracing::info!("[RELAB HTTP] {} {}", request.method(), request.uri().path());
    next.run(request).await
}

async fn health() -> &'static str {
    "OK"
}

/// Lab page: tabs for the two views plus the analyzer side panel.
async fn serve_lab_ui() -> Html<&'static str> {
    const INDEX: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html"));
    Html(INDEX)
}

async fn status_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let views: Vec<serde_json::Value> = VIEWS
        .iter()
        .map(|(id, title)| serde_json::json!({ "id": id, "title": title }))
        .collect();
    Json(serde_json::json!({
        "app": state.config.app_name,
        "version": relab_core::version(),
        "views": views,
        "llm_mode": state.config.llm_mode,
        "responder": state.chat.responder_name(),
    }))
}

fn hook_error(e: HookError) -> (StatusCode, String) {
    tracing::error!("[RELAB HOOKS] {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

async fn hooks_handler(State(state): State<AppState>) -> Json<HookLabView> {
    Json(state.hook_lab.read().await.view().clone())
}

/// "Increment Mock State": setter on hook 1, then a full re-render pass.
async fn hooks_increment_handler(
    State(state): State<AppState>,
) -> Result<Json<HookLabView>, (StatusCode, String)> {
    let view = state
        .hook_lab
        .write()
        .await
        .increment_count()
        .map_err(hook_error)?;
    Ok(Json(view))
}

async fn hooks_name_handler(
    State(state): State<AppState>,
    Json(body): Json<NameUpdate>,
) -> Result<Json<HookLabView>, (StatusCode, String)> {
    let view = state
        .hook_lab
        .write()
        .await
        .update_name(&body.value)
        .map_err(hook_error)?;
    Ok(Json(view))
}

async fn icons_handler(
    State(state): State<AppState>,
    Query(query): Query<IconQuery>,
) -> Json<IconPage> {
    let page = query.page.unwrap_or(1);
    Json(state.icons.page(&query.q, page, state.config.icon_page_size))
}

async fn chat_history_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "messages": state.chat.transcript().await,
        "typing": state.chat.is_typing(),
    }))
}

/// One exchange with the analyzer. Blank text is ignored; a pending reply answers 409.
async fn chat_submit_handler(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Response {
    match state.chat.submit(&body.message).await {
        SubmitOutcome::Ignored => Json(serde_json::json!({ "status": "ignored" })).into_response(),
        SubmitOutcome::Busy => (
            StatusCode::CONFLICT,
            Json(serde_json::json!({ "status": "busy" })),
        )
            .into_response(),
        SubmitOutcome::Replied(reply) => Json(serde_json::json!({
            "status": "replied",
            "reply": reply,
            "messages": state.chat.transcript().await,
        }))
        .into_response(),
    }
}
