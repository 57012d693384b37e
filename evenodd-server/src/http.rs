// HTTP API routes for the even/odd game

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use evenodd_core::{validate, Error, ParityResult};
use evenodd_i18n::{bundle, format_response, Language};
use evenodd_spk::SpeechSynthesizer;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

/// Shared handler state
#[derive(Clone)]
pub struct ApiState {
    /// None when speech synthesis is disabled; text results still work
    pub synthesizer: Option<Arc<SpeechSynthesizer>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub name: String,
    pub number: String,
    pub language: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResponse {
    pub result_sentence: String,
    pub info_sentence: String,
    pub language_code: String,
    pub value: i64,
    pub is_even: bool,
}

#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    pub text: String,
    pub language: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub name_prompt: String,
    pub number_prompt: String,
    pub play_button: String,
}

/// Build the API router
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/languages", get(list_languages))
        .route("/api/check", post(check))
        .route("/api/speak", post(speak))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// The fixed language set with enough localized text to render the page
async fn list_languages() -> impl IntoResponse {
    let languages: Vec<LanguageInfo> = Language::ALL
        .iter()
        .map(|lang| {
            let b = bundle(*lang);
            LanguageInfo {
                code: b.language_code.to_string(),
                name: lang.name().to_string(),
                title: b.title.to_string(),
                subtitle: b.subtitle.to_string(),
                name_prompt: b.name_prompt.to_string(),
                number_prompt: b.number_prompt.to_string(),
                play_button: b.play_button.to_string(),
            }
        })
        .collect();
    Json(languages)
}

/// Validate the submission, evaluate parity, format the localized response
async fn check(State(_state): State<ApiState>, Json(req): Json<CheckRequest>) -> Response {
    let language = match Language::from_selector(&req.language) {
        Ok(lang) => lang,
        Err(e) => {
            // Not reachable through the shipped UI; a client bug
            warn!("Rejected language selector: {:?}", req.language);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                    code: e.code().to_string(),
                }),
            )
                .into_response();
        }
    };
    let locale = bundle(language);

    let input = match validate(&req.name, &req.number) {
        Ok(input) => input,
        Err(e) => {
            // Missing input gets no message: the UI simply withholds
            // output until both fields are filled
            let error = match e {
                Error::MissingInput => String::new(),
                _ => locale.error_msg.to_string(),
            };
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error,
                    code: e.code().to_string(),
                }),
            )
                .into_response();
        }
    };

    let parity = ParityResult::evaluate(input.number);
    let formatted = format_response(&parity, &input.name, locale);

    Json(CheckResponse {
        result_sentence: formatted.result_sentence,
        info_sentence: formatted.info_sentence,
        language_code: locale.language_code.to_string(),
        value: parity.value,
        is_even: parity.is_even,
    })
    .into_response()
}

/// Synthesize a sentence to audio on explicit user action.
///
/// Failures never touch the already-displayed result: the client keeps
/// the text and shows the locale's audio error instead.
async fn speak(State(state): State<ApiState>, Json(req): Json<SpeakRequest>) -> Response {
    let language = match Language::from_selector(&req.language) {
        Ok(lang) => lang,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                    code: e.code().to_string(),
                }),
            )
                .into_response();
        }
    };
    let locale = bundle(language);

    if req.text.trim().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: String::new(),
                code: "MISSING_INPUT".to_string(),
            }),
        )
            .into_response();
    }

    let Some(synthesizer) = &state.synthesizer else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: locale.audio_error.to_string(),
                code: "SPEECH_DISABLED".to_string(),
            }),
        )
            .into_response();
    };

    match synthesizer.speak(&req.text, locale.language_code).await {
        Ok(audio) => {
            info!(
                "Synthesized {} bytes of audio ({})",
                audio.len(),
                locale.language_code
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "audio/mpeg")],
                audio,
            )
                .into_response()
        }
        Err(e) => {
            // Diagnostic detail stays in the logs; the user sees only
            // the localized audio error
            error!("Speech synthesis failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: locale.audio_error.to_string(),
                    code: "SYNTHESIS_ERROR".to_string(),
                }),
            )
                .into_response()
        }
    }
}
