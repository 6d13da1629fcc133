//! Scoreboard HTTP routes, mounted under `/api`.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::{Players, WinThreshold};
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddPlayerRequest {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddScoreRequest {
    #[serde(default)]
    pub player: Option<String>,
    // Explicit `null` must reach the coercion step as a value, not as "missing"
    #[serde(default, deserialize_with = "present")]
    pub score: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct SetThresholdRequest {
    #[serde(default, deserialize_with = "present")]
    pub threshold: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct RemovePlayerRequest {
    #[serde(default)]
    pub player: Option<String>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize)]
pub struct AddPlayerResponse {
    pub success: bool,
    pub players: Players,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub success: bool,
    pub players: Players,
    pub winner: Option<String>,
    pub game_over: bool,
}

#[derive(Debug, Serialize)]
pub struct ThresholdResponse {
    pub success: bool,
    pub win_threshold: WinThreshold,
    pub winner: Option<String>,
    pub game_over: bool,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub success: bool,
    pub message: String,
    pub players: Players,
}

/// GET /api/game_state
async fn get_game_state(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(app_state.game.snapshot()))
}

/// POST /api/add_player
async fn add_player(
    app_state: web::Data<AppState>,
    body: ValidatedJson<AddPlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let raw_name = body.into_inner().name.unwrap_or_default();
    let added = app_state.game.add_player(&raw_name)?;

    Ok(HttpResponse::Ok().json(AddPlayerResponse {
        success: true,
        message: format!("Player {} added", added.name),
        players: added.players,
    }))
}

/// POST /api/add_score
async fn add_score(
    app_state: web::Data<AppState>,
    body: ValidatedJson<AddScoreRequest>,
) -> Result<HttpResponse, AppError> {
    let AddScoreRequest { player, score } = body.into_inner();
    let outcome = app_state
        .game
        .add_score(player.as_deref().unwrap_or_default(), score.as_ref())?;

    Ok(HttpResponse::Ok().json(ScoreResponse {
        success: true,
        players: outcome.players,
        winner: outcome.winner,
        game_over: outcome.game_over,
    }))
}

/// POST /api/set_threshold
async fn set_threshold(
    app_state: web::Data<AppState>,
    body: ValidatedJson<SetThresholdRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome = app_state.game.set_threshold(body.threshold.as_ref())?;

    Ok(HttpResponse::Ok().json(ThresholdResponse {
        success: true,
        win_threshold: outcome.win_threshold,
        winner: outcome.winner,
        game_over: outcome.game_over,
    }))
}

/// POST /api/reset_game
///
/// Takes no body; anything sent is ignored.
async fn reset_game(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let players = app_state.game.reset_game();

    Ok(HttpResponse::Ok().json(ResetResponse {
        success: true,
        message: "Game reset".to_string(),
        players,
    }))
}

/// POST /api/reset_scores
async fn reset_scores(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let players = app_state.game.reset_scores();

    Ok(HttpResponse::Ok().json(ResetResponse {
        success: true,
        message: "All scores reset".to_string(),
        players,
    }))
}

/// POST /api/remove_player
async fn remove_player(
    app_state: web::Data<AppState>,
    body: ValidatedJson<RemovePlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let player = body.into_inner().player.unwrap_or_default();
    let outcome = app_state.game.remove_player(&player)?;

    Ok(HttpResponse::Ok().json(ScoreResponse {
        success: true,
        players: outcome.players,
        winner: outcome.winner,
        game_over: outcome.game_over,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/game_state").route(web::get().to(get_game_state)))
        .service(web::resource("/add_player").route(web::post().to(add_player)))
        .service(web::resource("/add_score").route(web::post().to(add_score)))
        .service(web::resource("/set_threshold").route(web::post().to(set_threshold)))
        .service(web::resource("/reset_game").route(web::post().to(reset_game)))
        .service(web::resource("/reset_scores").route(web::post().to(reset_scores)))
        .service(web::resource("/remove_player").route(web::post().to(remove_player)));
}
