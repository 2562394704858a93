use crate::common::{collector_for, healthy_router};
use sagemcom_exporter::server::router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serves the exporter on an ephemeral port and returns its address
async fn spawn_exporter(collector: sagemcom_exporter::Collector) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(Arc::new(collector), "/metrics");
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_metrics_endpoint_serves_exposition() {
    let device = healthy_router().await;
    let addr = spawn_exporter(collector_for(&device)).await;

    let response = reqwest::get(format!("http://{}/metrics", addr)).await.unwrap();
    assert_eq!(response.status(), 200);

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = response.text().await.unwrap();
    assert!(body.contains("# TYPE lan_network_receive_bytes gauge"));
    assert!(body.contains("lan_network_receive_bytes{device=\"eth0\"} 1245863"));
    assert!(body.contains("wan_network_send_packets{device=\"ppp0.1\",disposition=\"transfer\"} 1533020"));
    assert!(body.contains("adsl_rate_down_kbps 12993"));
    assert!(body.contains("sagemcom_page_scrape_success{page=\"adsl\"} 1"));
}

#[tokio::test]
async fn test_metrics_endpoint_with_router_down() {
    let device = wiremock::MockServer::start().await;
    let addr = spawn_exporter(collector_for(&device)).await;

    let response = reqwest::get(format!("http://{}/metrics", addr)).await.unwrap();
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(!body.contains("lan_network_receive_bytes"));
    assert!(body.contains("sagemcom_page_scrape_success{page=\"lan\"} 0"));
}

#[tokio::test]
async fn test_landing_page_links_metrics() {
    let device = healthy_router().await;
    let addr = spawn_exporter(collector_for(&device)).await;

    let body = reqwest::get(format!("http://{}/", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("href=\"/metrics\""));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let device = healthy_router().await;
    let addr = spawn_exporter(collector_for(&device)).await;

    let response = reqwest::get(format!("http://{}/nope", addr)).await.unwrap();
    assert_eq!(response.status(), 404);
}
