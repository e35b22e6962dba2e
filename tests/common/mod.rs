#![allow(dead_code)]

use serde_json::{Value, json};
use uschess_rating_tracker::config::AppConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MEMBER_ID: &str = "12345678";

pub fn sections_path(member_id: &str) -> String {
    format!("/api/v1/members/{}/sections", member_id)
}

pub fn spring_open_body() -> Value {
    json!({
        "items": [{
            "ratingRecords": [{"preRating": 1500, "postRating": 1520}],
            "ratingSystem": "R",
            "sectionName": "Open",
            "event": {"name": "Spring Open", "startDate": "2024-03-09T00:00:00Z", "endDate": "2024-03-10T00:00:00Z"}
        }],
        "offset": 0,
        "size": 50
    })
}

/// Serve `body` for the default page of `MEMBER_ID`.
pub async fn mount_sections(server: &MockServer, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(sections_path(MEMBER_ID)))
        .and(query_param("Offset", "0"))
        .and(query_param("Size", "50"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// A base URL nothing is listening on.
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub fn plain_config(base_url: &str) -> AppConfig {
    AppConfig::new().with_base_url(base_url).without_color()
}
