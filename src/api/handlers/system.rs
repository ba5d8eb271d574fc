use crate::types::InstructionsResponse;
use axum::Json;

/// Usage instructions shown to English-speaking users.
pub const ENGLISH_INSTRUCTIONS: [&str; 4] = [
    "You can ask questions in English",
    "Responses will always be in Gujarati",
    "Ask clear and specific questions",
    "The response will include detailed explanations",
];

/// Usage instructions shown to Gujarati-speaking users.
pub const GUJARATI_INSTRUCTIONS: [&str; 4] = [
    "તમે ગુજરાતીમાં પ્રશ્નો પૂછી શકો છો",
    "જવાબો હંમેશા ગુજરાતીમાં આપવામાં આવશે",
    "સ્પષ્ટ અને ચોક્કસ પ્રશ્નો પૂછો",
    "જવાબમાં વિગતવાર સમજૂતી આપવામાં આવશે",
];

/// Bilingual usage instructions.
#[utoipa::path(
    get,
    path = "/api/instructions",
    responses((status = 200, description = "Usage instructions", body = InstructionsResponse)),
    tag = "system"
)]
pub async fn instructions() -> Json<InstructionsResponse> {
    Json(InstructionsResponse {
        english: ENGLISH_INSTRUCTIONS.iter().map(|s| s.to_string()).collect(),
        gujarati: GUJARATI_INSTRUCTIONS.iter().map(|s| s.to_string()).collect(),
    })
}

/// Health check.
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is up")),
    tag = "system"
)]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "kara-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
