use sagemcom_exporter::config::DeviceConfig;
use sagemcom_exporter::{Collector, MetricFamily};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LAN_PAGE: &str = include_str!("../fixtures/statsifc.html");
pub const WAN_PAGE: &str = include_str!("../fixtures/statswan.cmd");
pub const ADSL_PAGE: &str = include_str!("../fixtures/statsadsl.html");

/// Mounts a page body at `/<page_path>`
pub async fn mount_page(server: &MockServer, page_path: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{}", page_path)))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Starts a mock router serving the LAN, WAN and ADSL fixtures
pub async fn healthy_router() -> MockServer {
    let server = MockServer::start().await;
    mount_page(&server, "statsifc.html", 200, LAN_PAGE).await;
    mount_page(&server, "statswan.cmd", 200, WAN_PAGE).await;
    mount_page(&server, "statsadsl.html", 200, ADSL_PAGE).await;
    server
}

/// Builds a collector targeting the mock router with short timeouts
pub fn collector_for(server: &MockServer) -> Collector {
    let config = DeviceConfig {
        base_url: server.uri(),
        request_timeout_secs: 1,
        connect_timeout_secs: 1,
    };
    Collector::new(&config).expect("Failed to build collector")
}

pub fn find<'a>(families: &'a [MetricFamily], name: &str) -> Option<&'a MetricFamily> {
    families.iter().find(|f| f.name == name)
}

pub fn names_with_prefix(families: &[MetricFamily], prefix: &str) -> Vec<String> {
    families
        .iter()
        .filter(|f| f.name.starts_with(prefix))
        .map(|f| f.name.clone())
        .collect()
}
