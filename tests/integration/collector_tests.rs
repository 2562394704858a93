use crate::common::{
    collector_for, find, healthy_router, mount_page, names_with_prefix, ADSL_PAGE, LAN_PAGE,
};
use sagemcom_exporter::collector::{fetch_page, FetchResult, Page, PAGE_SUCCESS_METRIC};
use sagemcom_exporter::{ExtractError, PageError};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_collects_all_pages() {
    let server = healthy_router().await;
    let families = collector_for(&server).collect().await;

    let rx_bytes = find(&families, "lan_network_receive_bytes").expect("lan rx bytes");
    assert_eq!(rx_bytes.value_for(&["eth0"]), Some(1245863.0));
    assert_eq!(rx_bytes.value_for(&["wl0"]), Some(58823412.0));
    assert_eq!(rx_bytes.samples.len(), 3);

    let lan_tx_packets = find(&families, "lan_network_send_packets").expect("lan tx packets");
    assert_eq!(lan_tx_packets.value_for(&["wl0", "drop"]), Some(3.0));
    assert_eq!(lan_tx_packets.value_for(&["eth0", "transfer"]), Some(12087.0));

    let wan_rx_bytes = find(&families, "wan_network_receive_bytes").expect("wan rx bytes");
    assert_eq!(wan_rx_bytes.value_for(&["ppp0.1"]), Some(3482991023.0));

    let wan_rx_packets = find(&families, "wan_network_receive_packets").expect("wan rx packets");
    assert_eq!(wan_rx_packets.value_for(&["ppp0.1", "drop"]), Some(12.0));

    let adsl = |name: &str| find(&families, name).and_then(|f| f.value_for(&[]));
    assert_eq!(adsl("adsl_attainable_rate_down_kbps"), Some(16548.0));
    assert_eq!(adsl("adsl_attainable_rate_up_kbps"), Some(1164.0));
    assert_eq!(adsl("adsl_rate_down_kbps"), Some(12993.0));
    assert_eq!(adsl("adsl_rate_up_kbps"), Some(1020.0));

    let success = find(&families, PAGE_SUCCESS_METRIC).expect("success family");
    assert_eq!(success.value_for(&["lan"]), Some(1.0));
    assert_eq!(success.value_for(&["wan"]), Some(1.0));
    assert_eq!(success.value_for(&["adsl"]), Some(1.0));
    assert_eq!(success.value_for(&["xtm"]), None);
}

#[tokio::test]
async fn test_wan_fetch_failure_is_isolated() {
    let server = MockServer::start().await;
    mount_page(&server, "statsifc.html", 200, LAN_PAGE).await;
    mount_page(&server, "statswan.cmd", 500, "Internal Server Error").await;
    mount_page(&server, "statsadsl.html", 200, ADSL_PAGE).await;

    let families = collector_for(&server).collect().await;

    assert!(names_with_prefix(&families, "wan_").is_empty());
    assert_eq!(names_with_prefix(&families, "lan_").len(), 4);
    assert_eq!(names_with_prefix(&families, "adsl_").len(), 4);

    let success = find(&families, PAGE_SUCCESS_METRIC).expect("success family");
    assert_eq!(success.value_for(&["wan"]), Some(0.0));
    assert_eq!(success.value_for(&["lan"]), Some(1.0));
}

#[tokio::test]
async fn test_fetch_failure_reports_status() {
    let server = MockServer::start().await;
    mount_page(&server, "statswan.cmd", 503, "").await;

    let result = collector_for(&server).collect_page(Page::Wan).await;
    assert_eq!(result.as_ref().map_err(|e| e.page()).err(), Some(Page::Wan));
    match result {
        Err(PageError::Fetch { page, url, reason }) => {
            assert_eq!(page, Page::Wan);
            assert!(url.ends_with("/statswan.cmd"));
            assert!(reason.contains("503"));
        }
        other => panic!("expected fetch failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_slow_page_times_out_and_is_omitted() {
    let server = healthy_router().await;
    Mock::given(method("GET"))
        .and(path("/statsadsl.html"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .with_priority(1)
        .mount(&server)
        .await;

    let families = collector_for(&server).collect().await;

    assert!(names_with_prefix(&families, "adsl_").is_empty());
    assert_eq!(names_with_prefix(&families, "lan_").len(), 4);
    assert_eq!(names_with_prefix(&families, "wan_").len(), 4);
}

#[tokio::test]
async fn test_all_pages_down_still_yields_success_family() {
    let server = MockServer::start().await;

    let families = collector_for(&server).collect().await;

    assert_eq!(families.len(), 1);
    let success = &families[0];
    assert_eq!(success.name, PAGE_SUCCESS_METRIC);
    assert!(success.samples.iter().all(|s| s.value == 0.0));
    assert_eq!(success.samples.len(), 3);
}

#[tokio::test]
async fn test_page_without_table_is_empty_table() {
    let server = healthy_router().await;
    Mock::given(method("GET"))
        .and(path("/statsadsl.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>Please log in</body></html>"))
        .with_priority(1)
        .mount(&server)
        .await;

    let collector = collector_for(&server);
    let result = collector.collect_page(Page::Adsl).await;
    assert!(matches!(
        result,
        Err(PageError::Extract {
            page: Page::Adsl,
            source: ExtractError::EmptyTable,
        })
    ));

    let families = collector.collect().await;
    assert!(names_with_prefix(&families, "adsl_").is_empty());
    assert_eq!(names_with_prefix(&families, "lan_").len(), 4);
}

#[tokio::test]
async fn test_malformed_row_drops_whole_page() {
    let server = healthy_router().await;
    let broken = LAN_PAGE.replace("<td>58823412</td>", "<td>--</td>");
    Mock::given(method("GET"))
        .and(path("/statsifc.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(broken))
        .with_priority(1)
        .mount(&server)
        .await;

    let collector = collector_for(&server);
    let result = collector.collect_page(Page::Lan).await;
    assert!(matches!(
        result,
        Err(PageError::Extract {
            source: ExtractError::ValueFormat { row: 4, col: 1, .. },
            ..
        })
    ));

    let families = collector.collect().await;
    assert!(names_with_prefix(&families, "lan_").is_empty());
    assert_eq!(names_with_prefix(&families, "wan_").len(), 4);
}

#[tokio::test]
async fn test_truncated_adsl_table_is_shape_mismatch() {
    let server = MockServer::start().await;
    let short = "<table><tr><td>Mode:</td><td>ADSL_2plus</td></tr></table>";
    mount_page(&server, "statsadsl.html", 200, short).await;

    let result = collector_for(&server).collect_page(Page::Adsl).await;
    assert!(matches!(
        result,
        Err(PageError::Extract {
            source: ExtractError::ShapeMismatch(_),
            ..
        })
    ));
    assert_eq!(result.err().map(|e| e.page()), Some(Page::Adsl));
}

#[tokio::test]
async fn test_fetch_page_success_carries_status_and_body() {
    let server = MockServer::start().await;
    mount_page(&server, "statsadsl.html", 200, ADSL_PAGE).await;

    let collector = collector_for(&server);
    let url = collector.page_url(Page::Adsl).unwrap();
    match fetch_page(&reqwest::Client::new(), &url).await {
        FetchResult::Success { status_code, body } => {
            assert_eq!(status_code, 200);
            assert_eq!(body, ADSL_PAGE);
        }
        other => panic!("expected success, got {:?}", other),
    }
}

#[tokio::test]
async fn test_collect_is_idempotent() {
    let server = healthy_router().await;
    let collector = collector_for(&server);

    let first = collector.collect().await;
    let second = collector.collect().await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_every_scrape_refetches() {
    let server = healthy_router().await;
    let collector = collector_for(&server);

    collector.collect().await;
    collector.collect().await;

    let requests = server.received_requests().await.expect("recording enabled");
    let lan_fetches = requests
        .iter()
        .filter(|r| r.url.path() == "/statsifc.html")
        .count();
    assert_eq!(lan_fetches, 2);
    assert!(requests.iter().all(|r| r.url.path() != "/statsxtm.cmd"));
}
