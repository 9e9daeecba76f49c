//! Common test utilities for integration tests
//!
//! A wiremock server that serves a character page shaped like the public
//! Rick and Morty API, plus configs pointing at it.

#![allow(dead_code)]

use charlist::config::AppConfig;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CHARACTER_PATH: &str = "/api/character";

fn record(id: i64, name: &str, status: &str, species: &str, gender: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "species": species,
        "type": "",
        "gender": gender,
        "origin": { "name": "Earth (C-137)", "url": "" },
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        "episode": [],
        "created": "2017-11-04T18:48:46.250Z"
    })
}

/// First page with a mix of statuses and genders; three are male and alive
pub fn sample_page() -> Value {
    json!({
        "info": {
            "count": 826,
            "pages": 42,
            "next": "https://rickandmortyapi.com/api/character?page=2",
            "prev": null
        },
        "results": [
            record(1, "Rick Sanchez", "Alive", "Human", "Male"),
            record(2, "Morty Smith", "Alive", "Human", "Male"),
            record(3, "Summer Smith", "Alive", "Human", "Female"),
            record(4, "Beth Smith", "Alive", "Human", "Female"),
            record(5, "Jerry Smith", "Alive", "Human", "Male"),
            record(6, "Abadango Cluster Princess", "Alive", "Alien", "Female"),
            record(7, "Abradolf Lincler", "unknown", "Human", "Male"),
            record(8, "Adjudicator Rick", "Dead", "Human", "Male"),
        ]
    })
}

pub async fn start_server() -> MockServer {
    MockServer::start().await
}

/// Serve `body` with status 200 on the character path
pub async fn mount_page(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path(CHARACTER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Serve `status` with an empty body on the character path
pub async fn mount_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path(CHARACTER_PATH))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

pub fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), CHARACTER_PATH)
}

pub fn config_for(server: &MockServer) -> AppConfig {
    AppConfig::defaults("test", "/nonexistent/profile").with_endpoint(Some(&endpoint(server)))
}

pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or_default()
}
