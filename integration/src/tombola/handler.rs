use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tombola_card_gen::{
    client_adapter, generate_card_sets, GenerateError, GenerateRequest, GeneratorConfig,
};

// ---------------------------------------------------------------------------
// Shared state: the generator bounds, injected at router construction
// ---------------------------------------------------------------------------

pub type SharedConfig = Arc<GeneratorConfig>;

pub fn default_config() -> SharedConfig {
    Arc::new(GeneratorConfig::default())
}

// ---------------------------------------------------------------------------
// GET /api/generate/:count
// ---------------------------------------------------------------------------

pub async fn generate(
    State(config): State<SharedConfig>,
    Path(raw_count): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    // The path segment is parsed by hand so a non-numeric count gets the
    // same 400 envelope as an out-of-range one.
    let count: u32 = raw_count.parse().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(client_adapter::to_client_error(&format!(
                "Invalid set count '{raw_count}'. It must be a number between 1 and {}.",
                config.max_sets
            ))),
        )
    })?;

    let sets = generate_card_sets(&GenerateRequest::new(count), &config).map_err(|err| {
        match err {
            GenerateError::InvalidCount { requested, max } => (
                StatusCode::BAD_REQUEST,
                Json(client_adapter::to_client_error(&format!(
                    "Invalid set count {requested}. It must be between 1 and {max}."
                ))),
            ),
            GenerateError::Corrupt(violation) => {
                log::error!("card generation failed a structural check: {violation}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(client_adapter::to_client_error(
                        "An error occurred while generating the cards.",
                    )),
                )
            }
        }
    })?;

    Ok(Json(client_adapter::to_client_response(&sets)))
}
