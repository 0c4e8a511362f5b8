//! In-process stub of the Red List API and a wiki host for integration tests.
//!
//! Bound to `127.0.0.1:0`, served by axum on the test runtime, stopped on drop.

#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[derive(Default)]
pub struct Fixture {
    countries: HashMap<String, Value>,
    country_names: Vec<(String, String)>,
    taxa: HashMap<String, Value>,
    failing_countries: HashMap<String, StatusCode>,
    failing_country_list: Option<StatusCode>,
    garbled_countries: Vec<String>,
    taxon_delays: HashMap<String, Duration>,
    default_taxon_delay: Duration,
    wiki_pages: HashMap<String, String>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a country whose assessments are `(scientific name, category)` pairs.
    pub fn country(mut self, code: &str, name: &str, assessments: &[(&str, &str)]) -> Self {
        let assessments: Vec<Value> = assessments
            .iter()
            .map(|(scientific_name, category)| {
                json!({
                    "taxon_scientific_name": scientific_name,
                    "red_list_category_code": category,
                    "url": format!("https://www.iucnredlist.org/search?q={}", scientific_name.replace(' ', "+")),
                })
            })
            .collect();
        self.countries.insert(
            code.to_string(),
            json!({
                "country": {"code": code, "description": {"en": name}},
                "assessments": assessments,
            }),
        );
        self.country_names.push((code.to_string(), name.to_string()));
        self
    }

    pub fn taxon(mut self, scientific_name: &str, common_name: &str, family: &str) -> Self {
        self.taxa.insert(
            scientific_name.to_string(),
            json!({
                "taxon": {
                    "scientific_name": scientific_name,
                    "kingdom_name": "ANIMALIA",
                    "phylum_name": "CHORDATA",
                    "class_name": "MAMMALIA",
                    "order_name": "PRIMATES",
                    "family_name": family,
                    "common_names": [
                        {"name": format!("{} (fr)", common_name), "language": "fre", "main": true},
                        {"name": common_name, "language": "eng", "main": true},
                    ],
                }
            }),
        );
        self
    }

    pub fn failing_country(mut self, code: &str, status: StatusCode) -> Self {
        self.failing_countries.insert(code.to_string(), status);
        self
    }

    /// The bulk `/countries` endpoint answers `status`.
    pub fn failing_country_list(mut self, status: StatusCode) -> Self {
        self.failing_country_list = Some(status);
        self
    }

    /// The country endpoint answers 200 with a body that is not JSON.
    pub fn garbled_country(mut self, code: &str) -> Self {
        self.garbled_countries.push(code.to_string());
        self
    }

    pub fn taxon_delay(mut self, scientific_name: &str, delay: Duration) -> Self {
        self.taxon_delays.insert(scientific_name.to_string(), delay);
        self
    }

    pub fn default_taxon_delay(mut self, delay: Duration) -> Self {
        self.default_taxon_delay = delay;
        self
    }

    /// Serves `html` at `/wiki/{page}`.
    pub fn wiki_page(mut self, page: &str, html: &str) -> Self {
        self.wiki_pages.insert(page.to_string(), html.to_string());
        self
    }
}

#[derive(Clone)]
struct StubState {
    fixture: Arc<Fixture>,
    tokens: Arc<Mutex<Vec<Option<String>>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    taxon_calls: Arc<AtomicUsize>,
    country_calls: Arc<AtomicUsize>,
    wiki_calls: Arc<AtomicUsize>,
}

pub struct StubUpstream {
    pub base_url: String,
    state: StubState,
    shutdown: Option<oneshot::Sender<()>>,
}

impl StubUpstream {
    pub async fn start(fixture: Fixture) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("stub upstream bind failed");
        let addr = listener.local_addr().expect("stub upstream local addr");

        let state = StubState {
            fixture: Arc::new(fixture),
            tokens: Arc::default(),
            in_flight: Arc::default(),
            max_in_flight: Arc::default(),
            taxon_calls: Arc::default(),
            country_calls: Arc::default(),
            wiki_calls: Arc::default(),
        };

        let app = Router::new()
            .route("/countries", get(list_countries))
            .route("/countries/{code}", get(country))
            .route("/taxa/scientific_name", get(taxon))
            .route("/wiki/{page}", get(wiki_page))
            .with_state(state.clone());

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        tokio::spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            let _ = server.await;
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
            shutdown: Some(shutdown_tx),
        }
    }

    pub fn wiki_url(&self) -> String {
        format!("{}/wiki", self.base_url)
    }

    pub fn max_in_flight(&self) -> usize {
        self.state.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn taxon_calls(&self) -> usize {
        self.state.taxon_calls.load(Ordering::SeqCst)
    }

    pub fn country_calls(&self) -> usize {
        self.state.country_calls.load(Ordering::SeqCst)
    }

    pub fn wiki_calls(&self) -> usize {
        self.state.wiki_calls.load(Ordering::SeqCst)
    }

    /// The `token` query parameter of every request, in arrival order.
    pub fn tokens(&self) -> Vec<Option<String>> {
        self.state.tokens.lock().expect("token log poisoned").clone()
    }
}

impl Drop for StubUpstream {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

fn record_token(state: &StubState, query: &HashMap<String, String>) {
    state
        .tokens
        .lock()
        .expect("token log poisoned")
        .push(query.get("token").cloned());
}

async fn list_countries(
    State(state): State<StubState>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    record_token(&state, &query);
    if let Some(status) = state.fixture.failing_country_list {
        return (status, "upstream says no").into_response();
    }
    let countries: Vec<Value> = state
        .fixture
        .country_names
        .iter()
        .map(|(code, name)| json!({"code": code, "description": {"en": name}}))
        .collect();
    Json(json!({ "countries": countries })).into_response()
}

async fn country(
    State(state): State<StubState>,
    Path(code): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    record_token(&state, &query);
    state.country_calls.fetch_add(1, Ordering::SeqCst);

    if let Some(status) = state.fixture.failing_countries.get(&code) {
        return (*status, "upstream says no").into_response();
    }
    if state.fixture.garbled_countries.contains(&code) {
        return (StatusCode::OK, "<html>maintenance</html>").into_response();
    }
    match state.fixture.countries.get(&code) {
        Some(body) => Json(body.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))).into_response(),
    }
}

async fn taxon(
    State(state): State<StubState>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    record_token(&state, &query);
    state.taxon_calls.fetch_add(1, Ordering::SeqCst);
    let now = state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    state.max_in_flight.fetch_max(now, Ordering::SeqCst);

    let name = format!(
        "{} {}",
        query.get("genus_name").map(String::as_str).unwrap_or_default(),
        query.get("species_name").map(String::as_str).unwrap_or_default()
    );
    let delay = state
        .fixture
        .taxon_delays
        .get(&name)
        .copied()
        .unwrap_or(state.fixture.default_taxon_delay);
    tokio::time::sleep(delay).await;

    state.in_flight.fetch_sub(1, Ordering::SeqCst);
    match state.fixture.taxa.get(&name) {
        Some(body) => Json(body.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))).into_response(),
    }
}

async fn wiki_page(State(state): State<StubState>, Path(page): Path<String>) -> Response {
    state.wiki_calls.fetch_add(1, Ordering::SeqCst);
    match state.fixture.wiki_pages.get(&page) {
        Some(html) => Html(html.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Html("<html>missing</html>")).into_response(),
    }
}
