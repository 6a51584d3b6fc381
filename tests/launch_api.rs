use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use launch_dash::{
    DashboardController, GatewayError, LaunchApiClient, LaunchDataGateway, LaunchGateway,
    LaunchSource,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Clone)]
struct FakeApi {
    launches: Arc<Vec<Value>>,
    stats_status: StatusCode,
}

async fn list_launches(State(api): State<FakeApi>) -> Json<Value> {
    let summaries: Vec<Value> = api
        .launches
        .iter()
        .map(|l| {
            json!({
                "launchId": l["launchId"],
                "missionName": l["missionName"],
                "flightNumber": l["flightNumber"],
                "launchDateUtc": l["launchDateUtc"],
                "status": l["status"],
                "rocketId": l["rocketId"],
            })
        })
        .collect();
    Json(Value::Array(summaries))
}

async fn launch_by_id(State(api): State<FakeApi>, Path(id): Path<String>) -> Response {
    match api.launches.iter().find(|l| l["launchId"] == id.as_str()) {
        Some(launch) => Json(launch.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn launch_stats(State(api): State<FakeApi>) -> Response {
    if api.stats_status != StatusCode::OK {
        return api.stats_status.into_response();
    }
    Json(json!({
        "totalLaunches": api.launches.len(),
        "successRate": 66.666,
        "successfulLaunches": 2,
        "failedLaunches": 1,
        "upcomingLaunches": null
    }))
    .into_response()
}

fn launches() -> Vec<Value> {
    vec![
        json!({
            "launchId": "5eb87cd9ffd86e000604b32a",
            "missionName": "FalconSat",
            "flightNumber": 1,
            "launchDateUtc": "2006-03-24T22:30:00.000Z",
            "status": "failed",
            "rocketId": "falcon1",
            "success": false,
            "details": "Engine failure at 33 seconds and loss of vehicle",
            "launchpadId": "kwajalein_atoll",
            "payloads": ["FalconSAT-2"],
            "patchSmallLink": "https://images2.imgbox.com/94/f2/NN6Ph45r_o.png",
            "patchLargeLink": "https://images2.imgbox.com/5b/02/QcxHUb5V_o.png",
            "webcastLink": "https://www.youtube.com/watch?v=0a_00nJ_Y88",
            "articleLink": null,
            "wikipediaLink": "https://en.wikipedia.org/wiki/DemoSat"
        }),
        json!({
            "launchId": "5eb87d46ffd86e000604b388",
            "missionName": "CRS-20",
            "flightNumber": 91,
            "launchDateUtc": "2020-03-07T04:50:31.000Z",
            "status": "success",
            "rocketId": "falcon9",
            "success": true,
            "payloads": ["Dragon CRS-20"]
        }),
        json!({
            "launchId": "5eb87d4dffd86e000604b38e",
            "missionName": "Demo-2",
            "flightNumber": 94,
            "launchDateUtc": "2020-05-30T19:22:00.000Z",
            "status": "SUCCESS",
            "rocketId": "falcon9",
            "success": true,
            "payloads": ["Crew Dragon DM-2"]
        }),
        json!({
            "launchId": "62dd70d5202306255024d139",
            "missionName": "Crew-5",
            "flightNumber": 187,
            "launchDateUtc": "2022-10-05T16:00:00.000Z",
            "status": "upcoming",
            "rocketId": "falcon9"
        }),
    ]
}

async fn spawn_fake_api(stats_status: StatusCode) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake launch api");
    let addr = listener.local_addr().expect("local addr");
    let api = FakeApi {
        launches: Arc::new(launches()),
        stats_status,
    };
    let app = Router::new()
        .route("/api/launches", get(list_launches))
        .route("/api/launches/stats", get(launch_stats))
        .route("/api/launches/:id", get(launch_by_id))
        .with_state(api);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}/api")
}

fn client(base_url: &str) -> LaunchApiClient {
    LaunchApiClient::new(base_url.to_string(), Duration::from_secs(5)).expect("build client")
}

#[tokio::test]
async fn client_reads_collection_detail_and_stats() {
    let base = spawn_fake_api(StatusCode::OK).await;
    let client = client(&base);

    let all = client.fetch_all().await.unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].mission_name, "FalconSat");

    let detail = client.fetch_by_id("5eb87cd9ffd86e000604b32a").await.unwrap();
    assert!(!detail.success);
    assert_eq!(detail.payloads, vec!["FalconSAT-2".to_string()]);
    assert_eq!(detail.article_link, "");

    let stats = client.fetch_statistics().await.unwrap();
    assert_eq!(stats.total_launches, Some(4));
    assert_eq!(stats.upcoming_launches, None);
}

#[tokio::test]
async fn client_maps_404_to_not_found_and_5xx_to_transport() {
    let base = spawn_fake_api(StatusCode::INTERNAL_SERVER_ERROR).await;
    let client = client(&base);

    let err = client.fetch_by_id("nope").await.unwrap_err();
    assert!(matches!(err, GatewayError::NotFound(_)));

    let err = client.fetch_statistics().await.unwrap_err();
    assert!(matches!(err, GatewayError::Transport(_)));
}

#[tokio::test]
async fn gateway_pages_and_filters_over_http() {
    let base = spawn_fake_api(StatusCode::OK).await;
    let gateway = LaunchDataGateway::new(client(&base));

    let page = gateway.fetch_page(0, 9, Some("success")).await.unwrap();
    assert_eq!(page.total_elements, 2);
    assert_eq!(page.content[0].mission_name, "CRS-20");
    assert_eq!(page.content[1].mission_name, "Demo-2");

    let page = gateway.fetch_page(1, 3, None).await.unwrap();
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.total_elements, 4);

    let recent = gateway.fetch_recent(2).await.unwrap();
    let names: Vec<&str> = recent.iter().map(|l| l.mission_name.as_str()).collect();
    assert_eq!(names, vec!["Crew-5", "Demo-2"]);

    let falcon9 = gateway.fetch_by_rocket("falcon9").await.unwrap();
    assert_eq!(falcon9.len(), 3);
}

#[tokio::test]
async fn dashboard_end_to_end_with_statistics_outage() {
    let base = spawn_fake_api(StatusCode::SERVICE_UNAVAILABLE).await;
    let gateway = Arc::new(LaunchDataGateway::new(client(&base)));
    let mut dashboard = DashboardController::new(gateway);

    dashboard.initialize();
    dashboard.settle().await;

    let view = dashboard.view();
    assert_eq!(view.error.as_deref(), Some("Failed to load launch statistics"));
    assert_eq!(view.launches.len(), 4);
    assert_eq!(view.total_pages, 1);
    assert!(!view.is_loading);
    assert_eq!(dashboard.visible_pages(), vec![0]);

    dashboard.on_launch_card_click("62dd70d5202306255024d139");
    dashboard.settle().await;
    let detail = dashboard.modal().launch.as_ref().expect("detail loaded");
    assert_eq!(detail.mission_name, "Crew-5");

    dashboard.on_modal_close();
    assert!(dashboard.modal().launch.is_none());
}

#[tokio::test]
async fn dashboard_filter_refetches_first_page() {
    let base = spawn_fake_api(StatusCode::OK).await;
    let gateway = Arc::new(LaunchDataGateway::new(client(&base)));
    let mut dashboard = DashboardController::new(gateway);

    dashboard.initialize();
    dashboard.settle().await;
    assert_eq!(dashboard.view().stats[1].value, "66.7%");

    dashboard.on_status_filter(Some("failed".to_string()));
    dashboard.settle().await;
    let view = dashboard.view();
    assert_eq!(view.total_elements, 1);
    assert_eq!(view.launches[0].mission_name, "FalconSat");
    assert!(view.error.is_none());
}
