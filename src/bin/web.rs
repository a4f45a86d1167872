//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use swiss_qualifier_web::{
    day2_report, rounds_for_players, top8_field_report, top8_live_report, CalcError, Record,
    RoundResult, RoundTracker,
};
use uuid::Uuid;

/// Per-tracker entry: round tracker + last activity time (for auto-cleanup).
struct TrackerEntry {
    tracker: RoundTracker,
    num_players: u32,
    last_activity: Instant,
}

/// In-memory state: many round trackers by ID (sessioned). Entries are removed
/// after long inactivity. This map is the only mutable state in the app; the
/// engine itself is pure.
type AppState = Data<RwLock<HashMap<Uuid, TrackerEntry>>>;

/// Inactivity threshold: trackers not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct Day2Body {
    total_rounds: u32,
    threshold: u32,
    wins: u32,
    losses: u32,
    draws: u32,
}

#[derive(Deserialize)]
struct FieldBody {
    num_players: u32,
}

#[derive(Deserialize)]
struct LiveBody {
    num_players: u32,
    wins: u32,
    losses: u32,
    draws: u32,
}

#[derive(Deserialize)]
struct CreateTrackerBody {
    num_players: u32,
}

#[derive(Deserialize)]
struct SetRoundBody {
    result: RoundResult,
}

/// Path segment: tracker id (e.g. /api/trackers/{id})
#[derive(Deserialize)]
struct TrackerPath {
    id: Uuid,
}

/// Path segments: tracker id and round number (e.g. /api/trackers/{id}/rounds/{round})
#[derive(Deserialize)]
struct TrackerRoundPath {
    id: Uuid,
    round: u32,
}

/// Tracker state as served to the client.
#[derive(Serialize)]
struct TrackerView<'a> {
    id: Uuid,
    num_players: u32,
    total_rounds: u32,
    rounds_played: u32,
    record: Record,
    rounds: &'a [RoundResult],
}

impl<'a> TrackerView<'a> {
    fn from_entry(id: Uuid, entry: &'a TrackerEntry) -> Self {
        Self {
            id,
            num_players: entry.num_players,
            total_rounds: entry.tracker.total_rounds(),
            rounds_played: entry.tracker.rounds_played(),
            record: entry.tracker.record(),
            rounds: entry.tracker.results(),
        }
    }
}

fn bad_request(e: CalcError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-qualifier-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Day 2 outlook: current band, verdict, and the remaining-round scenario table.
#[post("/api/day2")]
async fn api_day2(body: Json<Day2Body>) -> HttpResponse {
    let record = Record::new(body.wins, body.losses, body.draws);
    match day2_report(record, body.total_rounds, body.threshold) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => bad_request(e),
    }
}

/// Pre-tournament Top 8 table: every possible final record for a field size.
#[post("/api/top8/field")]
async fn api_top8_field(body: Json<FieldBody>) -> HttpResponse {
    match top8_field_report(body.num_players) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => bad_request(e),
    }
}

/// In-progress Top 8 outlook from a bare record (no round order, so no OMW estimate).
#[post("/api/top8/live")]
async fn api_top8_live(body: Json<LiveBody>) -> HttpResponse {
    let record = Record::new(body.wins, body.losses, body.draws);
    match top8_live_report(record, None, body.num_players) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => bad_request(e),
    }
}

/// Create a round tracker for a field (returns it with id; client stores the
/// id for subsequent requests).
#[post("/api/trackers")]
async fn api_create_tracker(state: AppState, body: Json<CreateTrackerBody>) -> HttpResponse {
    if body.num_players < 8 {
        return bad_request(CalcError::FieldTooSmall {
            num_players: body.num_players,
        });
    }
    let total_rounds = rounds_for_players(body.num_players);
    let id = Uuid::new_v4();
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        TrackerEntry {
            tracker: RoundTracker::new(total_rounds),
            num_players: body.num_players,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(TrackerView::from_entry(id, g.get(&id).unwrap()))
}

/// Get a tracker by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/trackers/{id}")]
async fn api_get_tracker(state: AppState, path: Path<TrackerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(TrackerView::from_entry(path.id, entry))
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tracker" })),
    }
}

/// Set one round's result. Results must stay a contiguous played prefix.
#[put("/api/trackers/{id}/rounds/{round}")]
async fn api_set_round(
    state: AppState,
    path: Path<TrackerRoundPath>,
    body: Json<SetRoundBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tracker" })),
    };
    entry.last_activity = Instant::now();
    match entry.tracker.set_result(path.round, body.result) {
        Ok(()) => HttpResponse::Ok().json(TrackerView::from_entry(path.id, entry)),
        Err(e) => bad_request(e),
    }
}

/// Clear a round and every round after it (keeps results gap-free).
#[delete("/api/trackers/{id}/rounds/{round}")]
async fn api_clear_round(state: AppState, path: Path<TrackerRoundPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tracker" })),
    };
    entry.last_activity = Instant::now();
    match entry.tracker.clear_from(path.round) {
        Ok(()) => HttpResponse::Ok().json(TrackerView::from_entry(path.id, entry)),
        Err(e) => bad_request(e),
    }
}

/// In-progress Top 8 report for a tracker, OMW estimate folded in.
#[get("/api/trackers/{id}/report")]
async fn api_tracker_report(state: AppState, path: Path<TrackerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tracker" })),
    };
    entry.last_activity = Instant::now();
    let record = entry.tracker.record();
    match top8_live_report(record, Some(entry.tracker.results()), entry.num_players) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => bad_request(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<Uuid, TrackerEntry>::new()));

    // Background task: every 30 minutes, remove trackers inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tracker(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_day2)
            .service(api_top8_field)
            .service(api_top8_live)
            .service(api_create_tracker)
            .service(api_get_tracker)
            .service(api_set_round)
            .service(api_clear_round)
            .service(api_tracker_report)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
