//! Mock PokeAPI server helpers

use serde_json::Value;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pokedex::Config;

use super::fixtures;

/// Config whose base URL is the mock server's `/api/v2/`
pub fn config_for(server: &MockServer) -> Config {
    Config {
        base_url: format!("{}/api/v2/", server.uri()),
        ..Default::default()
    }
}

pub async fn serve(server: &MockServer, resource_path: &str, body: Value) {
    serve_delayed(server, resource_path, body, Duration::ZERO).await;
}

pub async fn serve_delayed(server: &MockServer, resource_path: &str, body: Value, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v2/{resource_path}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body).set_delay(delay))
        .mount(server)
        .await;
}

pub async fn serve_status(server: &MockServer, resource_path: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v2/{resource_path}")))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// A mock PokeAPI that knows Pikachu (25) and Bulbasaur (1) plus everything
/// their expansion needs. Pikachu answers slower than Bulbasaur.
pub async fn start_mock_pokeapi() -> MockServer {
    let server = MockServer::start().await;

    serve_delayed(&server, "pokemon/25/", fixtures::pikachu(), Duration::from_millis(250)).await;
    serve(&server, "pokemon/1/", fixtures::bulbasaur()).await;

    serve(&server, "ability/static/", fixtures::ability("static", 9, &["pikachu", "raichu"])).await;
    serve(
        &server,
        "ability/lightning-rod/",
        fixtures::ability("lightning-rod", 31, &["pikachu", "raichu", "cubone"]),
    )
    .await;
    serve(&server, "ability/overgrow/", fixtures::ability("overgrow", 65, &["bulbasaur"])).await;

    serve(&server, "move/thunder-shock/", fixtures::damaging_move("thunder-shock", 84, 40)).await;
    serve(&server, "move/growl/", fixtures::status_move("growl", 45)).await;

    serve(&server, "stat/hp/", fixtures::stat("hp", 1)).await;
    serve(&server, "stat/speed/", fixtures::stat("speed", 6)).await;

    server
}
