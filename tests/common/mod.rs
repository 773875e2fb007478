#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use pokedex::cache::PokeCache;
use pokedex::client::PokeApiClient;

pub const AREAS: [&str; 5] = [
    "canalave-city-area",
    "eterna-city-area",
    "pastoria-city-area",
    "sunyshore-city-area",
    "sinnoh-pokemon-league-area",
];

struct MockState {
    base_url: String,
    hits: AtomicUsize,
}

/// In-process stand-in for PokeAPI that counts every request it serves.
pub struct MockPokeApi {
    state: Arc<MockState>,
}

impl MockPokeApi {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let state = Arc::new(MockState {
            base_url: format!("http://{}/api/v2", addr),
            hits: AtomicUsize::new(0),
        });

        let app = Router::new()
            .route("/api/v2/location-area", get(location_areas))
            .route("/api/v2/location-area/{name}", get(location_area))
            .route("/api/v2/pokemon/{name}", get(pokemon))
            .with_state(Arc::clone(&state));

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { state }
    }

    pub fn base_url(&self) -> &str {
        &self.state.base_url
    }

    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub fn client(&self, interval: Duration) -> (Arc<PokeCache>, PokeApiClient) {
        let cache = Arc::new(PokeCache::new(interval).unwrap());
        let client = PokeApiClient::new(self.base_url(), cache.clone()).unwrap();
        (cache, client)
    }
}

#[derive(Deserialize)]
struct PageQuery {
    offset: Option<usize>,
    limit: Option<usize>,
}

async fn location_areas(
    State(state): State<Arc<MockState>>,
    Query(query): Query<PageQuery>,
) -> Json<Value> {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let offset = query.offset.unwrap_or(0);
    let limit = query.limit.unwrap_or(2);
    let page_url = |offset: usize| {
        format!(
            "{}/location-area?offset={}&limit={}",
            state.base_url, offset, limit
        )
    };

    let results: Vec<Value> = AREAS
        .iter()
        .enumerate()
        .skip(offset)
        .take(limit)
        .map(|(id, name)| {
            json!({
                "name": name,
                "url": format!("{}/location-area/{}/", state.base_url, id + 1),
            })
        })
        .collect();

    let next = (offset + limit < AREAS.len()).then(|| page_url(offset + limit));
    let previous = (offset > 0).then(|| page_url(offset.saturating_sub(limit)));

    Json(json!({
        "count": AREAS.len(),
        "next": next,
        "previous": previous,
        "results": results,
    }))
}

async fn location_area(
    State(state): State<Arc<MockState>>,
    Path(name): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    state.hits.fetch_add(1, Ordering::SeqCst);

    if name != "canalave-city-area" {
        return Err(StatusCode::NOT_FOUND);
    }

    Ok(Json(json!({
        "id": 1,
        "name": name,
        "game_index": 1,
        "pokemon_encounters": [
            {"pokemon": {"name": "tentacool", "url": "u"}, "version_details": []},
            {"pokemon": {"name": "wingull", "url": "u"}, "version_details": []}
        ]
    })))
}

async fn pokemon(
    State(state): State<Arc<MockState>>,
    Path(name): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let base_experience = match name.as_str() {
        "magikarp" => 0,
        "arceus" => 810,
        "glitch" => return Err(StatusCode::INTERNAL_SERVER_ERROR),
        _ => return Err(StatusCode::NOT_FOUND),
    };

    Ok(Json(json!({
        "id": 129,
        "name": name,
        "base_experience": base_experience,
        "height": 9,
        "weight": 100,
        "stats": [{"base_stat": 20, "effort": 0, "stat": {"name": "hp", "url": "u"}}],
        "types": [{"slot": 1, "type": {"name": "water", "url": "u"}}]
    })))
}
