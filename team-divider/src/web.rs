use std::sync::{Mutex, MutexGuard};
use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use crate::divider::{DividerError, TeamDivider};
use crate::form::{FormError, Position};
use crate::history::{Storage, TeamRecord};
use crate::teams::{CoinFlip, RandomCoin, TeamPair};

/// One shared divider session behind a lock
pub struct AppState<S: Storage, C: CoinFlip> {
    pub divider: Mutex<TeamDivider<S, C>>,
}

impl<S: Storage, C: CoinFlip> AppState<S, C> {
    pub fn new(divider: TeamDivider<S, C>) -> Self {
        Self { divider: Mutex::new(divider) }
    }
}

#[derive(Deserialize)]
pub struct PlayerNameRequest {
    name: String,
}

#[derive(Serialize)]
pub struct PositionSlots {
    position: Position,
    names: [String; 2],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateResponse {
    players: Vec<PositionSlots>,
    current: Option<TeamPair>,
    records: Vec<TeamRecord>,
    show_history: bool,
}

fn lock<S: Storage, C: CoinFlip>(
    state: &AppState<S, C>,
) -> Result<MutexGuard<'_, TeamDivider<S, C>>> {
    state
        .divider
        .lock()
        .map_err(|_| actix_web::error::ErrorInternalServerError("Divider state is unavailable"))
}

fn state_response<S: Storage, C: CoinFlip>(divider: &TeamDivider<S, C>) -> StateResponse {
    StateResponse {
        players: Position::ALL
            .iter()
            .map(|&position| PositionSlots {
                position,
                names: divider.form().slots(position).clone(),
            })
            .collect(),
        current: divider.current_teams().cloned(),
        records: divider.records().to_vec(),
        show_history: divider.show_history(),
    }
}

fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "success": false,
        "error": message.into(),
    }))
}

fn error_response(err: &DividerError) -> HttpResponse {
    match err {
        DividerError::Form(FormError::Incomplete { missing }) => HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": err.to_string(),
            "missing": missing,
        })),
        DividerError::Form(_) => bad_request(err.to_string()),
        DividerError::History(e) => {
            log::error!("Failed to save team history: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to save team history: {}", e),
            }))
        }
    }
}

// Current form, displayed split, and history
async fn get_state<S: Storage, C: CoinFlip>(state: web::Data<AppState<S, C>>) -> Result<HttpResponse> {
    let divider = lock(&state)?;
    Ok(HttpResponse::Ok().json(state_response(&divider)))
}

async fn set_player<S: Storage, C: CoinFlip>(
    path: web::Path<(String, String)>,
    req: web::Json<PlayerNameRequest>,
    state: web::Data<AppState<S, C>>,
) -> Result<HttpResponse> {
    let (position, slot) = path.into_inner();
    let position: Position = match position.parse() {
        Ok(p) => p,
        Err(e) => return Ok(bad_request(e)),
    };
    // Parsed here so a non-numeric slot is a 400 like an out-of-range one
    let slot: usize = match slot.trim().parse() {
        Ok(s) => s,
        Err(_) => return Ok(bad_request(format!("Invalid player slot {} (expected 0 or 1)", slot))),
    };

    let mut divider = lock(&state)?;
    match divider.set_player_name(position, slot, req.into_inner().name) {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({"success": true}))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn submit_teams<S: Storage, C: CoinFlip>(state: web::Data<AppState<S, C>>) -> Result<HttpResponse> {
    let mut divider = lock(&state)?;
    match divider.submit_assignment() {
        Ok(record) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "record": record,
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn reset_form<S: Storage, C: CoinFlip>(state: web::Data<AppState<S, C>>) -> Result<HttpResponse> {
    let mut divider = lock(&state)?;
    divider.reset_form();
    Ok(HttpResponse::Ok().json(state_response(&divider)))
}

async fn toggle_history<S: Storage, C: CoinFlip>(state: web::Data<AppState<S, C>>) -> Result<HttpResponse> {
    let mut divider = lock(&state)?;
    let show_history = divider.toggle_history_visibility();
    Ok(HttpResponse::Ok().json(serde_json::json!({"showHistory": show_history})))
}

async fn delete_record<S: Storage, C: CoinFlip>(
    id: web::Path<String>,
    state: web::Data<AppState<S, C>>,
) -> Result<HttpResponse> {
    let mut divider = lock(&state)?;
    match divider.delete_record(id.as_str()) {
        Ok(deleted) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "deleted": deleted,
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn clear_history<S: Storage, C: CoinFlip>(state: web::Data<AppState<S, C>>) -> Result<HttpResponse> {
    let mut divider = lock(&state)?;
    match divider.clear_history() {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({"success": true}))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Registers the page and API routes for a divider stored in `S`
pub fn configure<S, C>(cfg: &mut web::ServiceConfig)
where
    S: Storage + 'static,
    C: CoinFlip + 'static,
{
    cfg.route("/", web::get().to(index))
        .route("/api/state", web::get().to(get_state::<S, C>))
        .route("/api/players/{position}/{slot}", web::put().to(set_player::<S, C>))
        .route("/api/teams", web::post().to(submit_teams::<S, C>))
        .route("/api/reset", web::post().to(reset_form::<S, C>))
        .route("/api/history/toggle", web::post().to(toggle_history::<S, C>))
        .route("/api/history", web::delete().to(clear_history::<S, C>))
        .route("/api/history/{id}", web::delete().to(delete_record::<S, C>));
}

pub async fn start_server<S>(port: u16, storage: S) -> std::io::Result<()>
where
    S: Storage + Send + 'static,
{
    let divider = TeamDivider::new(storage, RandomCoin::from_entropy());
    let app_state = web::Data::new(AppState::new(divider));

    log::info!("Starting web server on port {}", port);
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure::<S, RandomCoin<StdRng>>)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
