//! HTTP handlers and router.
//!
//! The three word endpoints always answer 200: dispatcher failures are
//! converted right here into placeholder payloads, so the browser page never
//! has to distinguish "service unreachable" from "model said nothing". The
//! server-side log is the only place the failure cause survives.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::ai::extract::{extract_analysis, extract_word_lists, whole_text_translation};
use crate::ai::prompt::{analyze_prompt, dictionary_prompt, translate_prompt};
use crate::ai::CompletionClient;
use crate::core::models::{
    AnalysisResult, AnalyzeRequest, DictionaryResponse, TranslationResponse,
    TRANSLATION_ERROR_PLACEHOLDER,
};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub client: CompletionClient,
}

pub fn build_router(state: SharedState, public_dir: &str) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze))
        .route("/api/translate", post(translate))
        .route("/api/dictionary/{word}", get(dictionary))
        .route("/healthz", get(health))
        .with_state(state)
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "service": "words-helper" }))
}

/// Combined translation + synonyms + antonyms in one completion round trip.
async fn analyze(
    State(state): State<SharedState>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalysisResult> {
    let word = request.word.trim();
    if word.is_empty() {
        return Json(AnalysisResult::error_placeholder());
    }

    match state.client.complete(&analyze_prompt(word)).await {
        Ok(response) => Json(extract_analysis(&response.into_text())),
        Err(e) => {
            error!(%word, error = %e, "Analysis failed");
            Json(AnalysisResult::error_placeholder())
        }
    }
}

/// Translation only. The prompt asks for the bare translation, so the whole
/// trimmed reply is the answer; no label matching here.
async fn translate(
    State(state): State<SharedState>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<TranslationResponse> {
    let word = request.word.trim();
    if word.is_empty() {
        return Json(TranslationResponse {
            translation: TRANSLATION_ERROR_PLACEHOLDER.to_string(),
        });
    }

    match state.client.complete(&translate_prompt(word)).await {
        Ok(response) => Json(TranslationResponse {
            translation: whole_text_translation(&response.into_text()),
        }),
        Err(e) => {
            error!(%word, error = %e, "Translation failed");
            Json(TranslationResponse {
                translation: TRANSLATION_ERROR_PLACEHOLDER.to_string(),
            })
        }
    }
}

/// Synonyms and antonyms only.
async fn dictionary(
    State(state): State<SharedState>,
    Path(word): Path<String>,
) -> Json<DictionaryResponse> {
    let word = word.trim();
    if word.is_empty() {
        return Json(DictionaryResponse::empty());
    }

    match state.client.complete(&dictionary_prompt(word)).await {
        Ok(response) => Json(extract_word_lists(&response.into_text())),
        Err(e) => {
            error!(%word, error = %e, "Dictionary lookup failed");
            Json(DictionaryResponse::empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AppConfig;
    use axum::body::Body;
    use axum::extract::State as AxumState;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::post as axum_post;
    use serde_json::Value;
    use std::net::SocketAddr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    struct MockCompletion {
        hits: AtomicUsize,
        reply: Option<String>,
    }

    /// Serve a fake completion endpoint; `reply: None` means answer 400 so
    /// every dispatcher attempt fails fast without backoff classification
    /// mattering for the assertion.
    async fn spawn_completion(reply: Option<&str>) -> (SocketAddr, Arc<MockCompletion>) {
        let mock = Arc::new(MockCompletion {
            hits: AtomicUsize::new(0),
            reply: reply.map(str::to_string),
        });

        async fn respond(
            AxumState(mock): AxumState<Arc<MockCompletion>>,
        ) -> axum::response::Response {
            mock.hits.fetch_add(1, Ordering::SeqCst);
            match &mock.reply {
                Some(text) => axum::response::IntoResponse::into_response(Json(json!({
                    "choices": [{"message": {"role": "assistant", "content": text}}]
                }))),
                None => axum::response::Response::builder()
                    .status(StatusCode::BAD_REQUEST)
                    .body(Body::from("mock failure"))
                    .unwrap(),
            }
        }

        let router = Router::new()
            .route("/chat/completions", axum_post(respond))
            .with_state(Arc::clone(&mock));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        (addr, mock)
    }

    fn test_router(completion_addr: SocketAddr) -> Router {
        let config = AppConfig {
            groq_api_key: "test-key".to_string(),
            groq_api_url: format!("http://{completion_addr}/chat/completions"),
            model: "llama-3.1-8b-instant".to_string(),
            port: 0,
            public_dir: "public".to_string(),
        };
        let state = Arc::new(AppState {
            client: CompletionClient::new(&config),
        });
        build_router(state, &config.public_dir)
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn analyze_happy_path_end_to_end() {
        let reply = "Translation: খুশি | Synonyms: joyful, glad, cheerful | Antonyms: sad, unhappy";
        let (addr, _mock) = spawn_completion(Some(reply)).await;
        let router = test_router(addr);

        let response = router
            .oneshot(post_json("/api/analyze", json!({ "word": "happy" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload = json_body(response).await;
        assert_eq!(payload["translation"], "খুশি");
        assert_eq!(payload["synonyms"], json!(["joyful", "glad", "cheerful"]));
        assert_eq!(payload["antonyms"], json!(["sad", "unhappy"]));
    }

    #[tokio::test]
    async fn analyze_maps_dispatcher_failure_to_placeholder_payload() {
        let (addr, mock) = spawn_completion(None).await;
        let router = test_router(addr);

        let response = router
            .oneshot(post_json("/api/analyze", json!({ "word": "happy" })))
            .await
            .unwrap();
        // Failure is never signalled via HTTP status.
        assert_eq!(response.status(), StatusCode::OK);

        let payload = json_body(response).await;
        assert_eq!(payload["translation"], TRANSLATION_ERROR_PLACEHOLDER);
        assert_eq!(payload["synonyms"], json!([]));
        assert_eq!(payload["antonyms"], json!([]));
        assert_eq!(mock.hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn analyze_blank_word_skips_external_call() {
        let (addr, mock) = spawn_completion(Some("unreached")).await;
        let router = test_router(addr);

        let response = router
            .oneshot(post_json("/api/analyze", json!({ "word": "   " })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload = json_body(response).await;
        assert_eq!(payload["translation"], TRANSLATION_ERROR_PLACEHOLDER);
        assert_eq!(mock.hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn translate_returns_whole_trimmed_reply() {
        let (addr, _mock) = spawn_completion(Some("  খুশি \n")).await;
        let router = test_router(addr);

        let response = router
            .oneshot(post_json("/api/translate", json!({ "word": "happy" })))
            .await
            .unwrap();
        let payload = json_body(response).await;
        assert_eq!(payload, json!({ "translation": "খুশি" }));
    }

    #[tokio::test]
    async fn dictionary_extracts_both_lists() {
        let reply = "Synonyms: joyful, glad | Antonyms: sad";
        let (addr, _mock) = spawn_completion(Some(reply)).await;
        let router = test_router(addr);

        let response = router
            .oneshot(
                Request::get("/api/dictionary/happy")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload = json_body(response).await;
        assert_eq!(payload["synonyms"], json!(["joyful", "glad"]));
        assert_eq!(payload["antonyms"], json!(["sad"]));
    }

    #[tokio::test]
    async fn dictionary_failure_degrades_to_empty_lists() {
        let (addr, _mock) = spawn_completion(None).await;
        let router = test_router(addr);

        let response = router
            .oneshot(
                Request::get("/api/dictionary/happy")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload, json!({ "synonyms": [], "antonyms": [] }));
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let (addr, _mock) = spawn_completion(Some("unused")).await;
        let router = test_router(addr);

        let response = router
            .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["status"], "ok");
    }
}
