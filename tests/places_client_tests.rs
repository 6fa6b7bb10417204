//! Google Places client tests against a local fake Places API

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::{Value, json};

use tripplanner::config::PlacesConfig;
use tripplanner::enrichment::ReferenceCollector;
use tripplanner::{
    Activity, Day, EnrichmentEngine, GooglePlacesClient, LookupError, PlaceLookup,
};

const API_KEY: &str = "test-key";

#[derive(Clone, Default)]
struct FakePlaces {
    requests: Arc<Mutex<Vec<(HeaderMap, Value)>>>,
}

async fn search_text(
    State(fake): State<FakePlaces>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    fake.requests
        .lock()
        .unwrap()
        .push((headers.clone(), body.clone()));

    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some(API_KEY) {
        return (StatusCode::FORBIDDEN, "API key not valid").into_response();
    }

    match body["textQuery"].as_str().unwrap_or_default() {
        "Colosseum, Rome" => Json(json!({
            "places": [{
                "id": "ChIJrRMgU7ZhLxMRxAOFkC7I8Sg",
                "displayName": { "text": "Colosseum", "languageCode": "en" },
                "formattedAddress": "Piazza del Colosseo, 1, 00184 Roma RM, Italy",
                "location": { "latitude": 41.8902102, "longitude": 12.4922309 },
                "websiteUri": "https://colosseo.it/",
                "rating": 4.7,
                "nationalPhoneNumber": "06 2111 5843",
                "photos": [
                    { "name": "places/colosseum/photos/1", "widthPx": 4032 },
                    { "name": "places/colosseum/photos/2", "widthPx": 4032 },
                    { "name": "places/colosseum/photos/3", "widthPx": 4032 },
                    { "name": "places/colosseum/photos/4", "widthPx": 4032 }
                ]
            }]
        }))
        .into_response(),
        "Nowhere, Rome" => Json(json!({ "places": [] })).into_response(),
        "Nothing at all, Rome" => Json(json!({})).into_response(),
        "Garbled, Rome" => (StatusCode::OK, "<html>oops</html>").into_response(),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "backend unavailable").into_response(),
    }
}

async fn spawn_fake_places() -> (String, FakePlaces) {
    let fake = FakePlaces::default();
    let app = Router::new()
        .route("/v1/places:searchText", post(search_text))
        .with_state(fake.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/v1"), fake)
}

fn client(base_url: &str, api_key: &str) -> GooglePlacesClient {
    GooglePlacesClient::new(&PlacesConfig {
        api_key: Some(api_key.to_string()),
        base_url: base_url.to_string(),
        timeout_seconds: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_lookup_parses_first_candidate() {
    let (base_url, fake) = spawn_fake_places().await;
    let client = client(&base_url, API_KEY);

    let details = client.lookup("Colosseum, Rome").await.unwrap().unwrap();

    assert_eq!(details.place_id, "ChIJrRMgU7ZhLxMRxAOFkC7I8Sg");
    assert_eq!(details.formatted_address, "Piazza del Colosseo, 1, 00184 Roma RM, Italy");
    assert_eq!(details.lat, 41.8902102);
    assert_eq!(details.lng, 12.4922309);
    assert_eq!(details.rating, 4.7);
    assert_eq!(details.phone_number, "06 2111 5843");
    assert_eq!(details.price_level, "");
    assert_eq!(
        details.photo_urls,
        vec![
            format!("{base_url}/places/colosseum/photos/1/media?maxHeightPx=800&key={API_KEY}"),
            format!("{base_url}/places/colosseum/photos/2/media?maxHeightPx=800&key={API_KEY}"),
            format!("{base_url}/places/colosseum/photos/3/media?maxHeightPx=800&key={API_KEY}"),
        ]
    );

    let requests = fake.requests.lock().unwrap();
    let (headers, body) = &requests[0];
    assert_eq!(body, &json!({ "textQuery": "Colosseum, Rome", "maxResultCount": 1 }));
    let field_mask = headers.get("x-goog-fieldmask").unwrap().to_str().unwrap();
    assert!(field_mask.contains("places.id"));
    assert!(field_mask.contains("places.photos"));
    assert!(field_mask.contains("places.nationalPhoneNumber"));
}

#[tokio::test]
async fn test_lookup_without_candidates_is_not_found() {
    let (base_url, _fake) = spawn_fake_places().await;
    let client = client(&base_url, API_KEY);

    assert!(client.lookup("Nowhere, Rome").await.unwrap().is_none());
    assert!(client.lookup("Nothing at all, Rome").await.unwrap().is_none());
}

#[tokio::test]
async fn test_lookup_error_status() {
    let (base_url, _fake) = spawn_fake_places().await;
    let client = client(&base_url, API_KEY);

    match client.lookup("Broken, Rome").await {
        Err(LookupError::ApiError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "backend unavailable");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_lookup_rejected_key() {
    let (base_url, _fake) = spawn_fake_places().await;
    let client = client(&base_url, "wrong-key");

    let result = client.lookup("Colosseum, Rome").await;
    assert!(matches!(result, Err(LookupError::ApiError { status: 403, .. })));
}

#[tokio::test]
async fn test_lookup_malformed_payload() {
    let (base_url, _fake) = spawn_fake_places().await;
    let client = client(&base_url, API_KEY);

    let result = client.lookup("Garbled, Rome").await;
    assert!(matches!(result, Err(LookupError::ParseError(_))));
}

#[tokio::test]
async fn test_lookup_unreachable_service() {
    // Bind and drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client(&format!("http://{addr}/v1"), API_KEY);
    let result = client.lookup("Colosseum, Rome").await;
    assert!(matches!(result, Err(LookupError::NetworkError(_))));
}

#[tokio::test]
async fn test_engine_counts_empty_candidates_as_not_found() {
    let (base_url, _fake) = spawn_fake_places().await;
    let engine = EnrichmentEngine::new(Arc::new(client(&base_url, API_KEY)));
    let mut days = vec![Day {
        activities: Some(vec![
            Activity::named("Colosseum"),
            Activity::named("Nowhere"),
            Activity::named("Broken"),
        ]),
        ..Day::default()
    }];

    let targets = ReferenceCollector::collect(&days, "Rome");
    let summary = engine.enrich(&mut days, targets).await;

    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.not_found, 1);
    assert_eq!(summary.failed, 1);
    let activities = days[0].activities.as_ref().unwrap();
    assert!(activities[0].place_details.is_some());
    assert!(activities[1].place_details.is_none());
    assert!(activities[2].place_details.is_none());
}
