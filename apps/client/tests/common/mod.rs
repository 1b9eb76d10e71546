//! Common test utilities for integration tests.
//!
//! This module provides:
//! - MockApi: an in-process stand-in for the json-server decks/cards API
//! - ScriptedConsole: a Console fed from a list of input lines
//! - Helpers for seeding decks and cards

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Query, Request, State},
    http::{Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use flashcard_core::types::{CardId, DeckId};
use flashcards_client::{ApiClient, Console};

/// A request body the mock received, keyed like `PUT /decks/1`.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub route: String,
    pub body: Value,
}

#[derive(Debug, Default)]
struct MockState {
    decks: Vec<Value>,
    cards: Vec<Value>,
    next_id: i64,
    recorded: Vec<Recorded>,
    forced_status: Option<u16>,
    forced_delete_status: Option<u16>,
    delay: Option<Duration>,
}

impl MockState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn embed(&self, deck: &Value) -> Value {
        let mut deck = deck.clone();
        let cards: Vec<Value> = self
            .cards
            .iter()
            .filter(|c| c["deckId"] == deck["id"])
            .cloned()
            .collect();
        deck["cards"] = Value::Array(cards);
        deck
    }

    fn record(&mut self, route: String, body: &Value) {
        self.recorded.push(Recorded {
            route,
            body: body.clone(),
        });
    }
}

type Shared = Arc<Mutex<MockState>>;

/// In-process mock of the REST API on an ephemeral port.
pub struct MockApi {
    pub base_url: String,
    state: Shared,
}

impl MockApi {
    pub async fn start() -> Self {
        let state = Shared::default();
        let app = router(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock api");
        let addr = listener.local_addr().expect("mock api address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock api server");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone())
    }

    pub fn seed_deck(&self, name: &str, description: &str) -> DeckId {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state
            .decks
            .push(json!({ "id": id, "name": name, "description": description }));
        DeckId(id)
    }

    pub fn seed_card(&self, deck_id: DeckId, front: &str, back: &str) -> CardId {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state
            .cards
            .push(json!({ "id": id, "front": front, "back": back, "deckId": deck_id.0 }));
        CardId(id)
    }

    /// Seed a deck holding `n` cards named `front i` / `back i`.
    pub fn seed_deck_with_cards(&self, name: &str, n: usize) -> DeckId {
        let deck_id = self.seed_deck(name, &format!("{name} description"));
        for i in 1..=n {
            self.seed_card(deck_id, &format!("front {i}"), &format!("back {i}"));
        }
        deck_id
    }

    /// Answer every request with `status` until cleared.
    pub fn fail_with(&self, status: Option<u16>) {
        self.state.lock().unwrap().forced_status = status;
    }

    /// Answer only DELETE requests with `status` until cleared.
    pub fn fail_deletes_with(&self, status: Option<u16>) {
        self.state.lock().unwrap().forced_delete_status = status;
    }

    /// Hold every response for `delay` until cleared.
    pub fn delay(&self, delay: Option<Duration>) {
        self.state.lock().unwrap().delay = delay;
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().recorded.clone()
    }

    pub fn deck_ids(&self) -> Vec<i64> {
        let state = self.state.lock().unwrap();
        state.decks.iter().filter_map(|d| d["id"].as_i64()).collect()
    }

    pub fn cards(&self) -> Vec<Value> {
        self.state.lock().unwrap().cards.clone()
    }

    pub fn deck(&self, deck_id: DeckId) -> Option<Value> {
        let state = self.state.lock().unwrap();
        state.decks.iter().find(|d| d["id"] == deck_id.0).cloned()
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/decks", get(list_decks).post(create_deck))
        .route(
            "/decks/{id}",
            get(read_deck).put(update_deck).delete(delete_deck),
        )
        .route("/cards", post(create_card))
        .route(
            "/cards/{id}",
            get(read_card).put(update_card).delete(delete_card),
        )
        .layer(middleware::from_fn_with_state(state.clone(), faults))
        .with_state(state)
}

async fn faults(State(state): State<Shared>, req: Request, next: Next) -> Response {
    let (delay, forced) = {
        let state = state.lock().unwrap();
        let forced = if req.method() == Method::DELETE {
            state.forced_status.or(state.forced_delete_status)
        } else {
            state.forced_status
        };
        (state.delay, forced)
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    if let Some(code) = forced {
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, Json(json!({}))).into_response();
    }
    next.run(req).await
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({}))).into_response()
}

fn wants_cards(query: &HashMap<String, String>) -> bool {
    query.get("_embed").map(String::as_str) == Some("cards")
}

async fn list_decks(
    State(state): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Vec<Value>> {
    let state = state.lock().unwrap();
    let decks = state
        .decks
        .iter()
        .map(|d| if wants_cards(&query) { state.embed(d) } else { d.clone() })
        .collect();
    Json(decks)
}

async fn create_deck(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut state = state.lock().unwrap();
    state.record("POST /decks".to_string(), &body);
    let mut deck = body;
    deck["id"] = json!(state.next_id());
    state.decks.push(deck.clone());
    (StatusCode::CREATED, Json(deck)).into_response()
}

async fn read_deck(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let state = state.lock().unwrap();
    match state.decks.iter().find(|d| d["id"] == id) {
        Some(deck) if wants_cards(&query) => Json(state.embed(deck)).into_response(),
        Some(deck) => Json(deck.clone()).into_response(),
        None => not_found(),
    }
}

async fn update_deck(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.record(format!("PUT /decks/{id}"), &body);
    let Some(pos) = state.decks.iter().position(|d| d["id"] == id) else {
        return not_found();
    };
    let mut deck = body;
    deck["id"] = json!(id);
    state.decks[pos] = deck.clone();
    Json(deck).into_response()
}

async fn delete_deck(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = state.lock().unwrap();
    let Some(pos) = state.decks.iter().position(|d| d["id"] == id) else {
        return not_found();
    };
    state.decks.remove(pos);
    state.cards.retain(|c| c["deckId"] != id);
    Json(json!({})).into_response()
}

async fn create_card(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut state = state.lock().unwrap();
    state.record("POST /cards".to_string(), &body);
    let mut card = body;
    card["id"] = json!(state.next_id());
    state.cards.push(card.clone());
    (StatusCode::CREATED, Json(card)).into_response()
}

async fn read_card(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let state = state.lock().unwrap();
    match state.cards.iter().find(|c| c["id"] == id) {
        Some(card) => Json(card.clone()).into_response(),
        None => not_found(),
    }
}

async fn update_card(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.record(format!("PUT /cards/{id}"), &body);
    let Some(pos) = state.cards.iter().position(|c| c["id"] == id) else {
        return not_found();
    };
    let mut card = body;
    card["id"] = json!(id);
    state.cards[pos] = card.clone();
    Json(card).into_response()
}

async fn delete_card(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = state.lock().unwrap();
    let Some(pos) = state.cards.iter().position(|c| c["id"] == id) else {
        return not_found();
    };
    state.cards.remove(pos);
    Json(json!({})).into_response()
}

/// Console that replays scripted input and records everything shown.
///
/// Input running out behaves like end of stdin.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            output: Vec::new(),
        }
    }

    /// Everything printed, prompts included, one entry per line.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.push(prompt.to_string());
        Ok(self.input.pop_front())
    }
}
