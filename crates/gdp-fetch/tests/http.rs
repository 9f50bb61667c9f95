// File: crates/gdp-fetch/tests/http.rs
// Purpose: Loader against a local HTTP server through the real reqwest transport.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use gdp_core::{Chart, Page, RenderOptions};
use gdp_fetch::{FetchConfig, HttpTransport, Loader};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Serve exactly one canned response, then stop.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });
    format!("http://{addr}/GDP-data.json")
}

/// Local server, so skip any proxy the environment configures.
fn local_loader(url: String) -> Loader<HttpTransport> {
    let client = reqwest::Client::builder().no_proxy().build().expect("client");
    Loader::with_transport(FetchConfig::new(url), HttpTransport::with_client(client))
}

#[derive(Clone, Default)]
struct ErrorCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[tokio::test]
async fn renders_two_bars_from_server() {
    let url = serve_once("200 OK", r#"{ "data": [["1947-01-01", 243.1], ["1947-04-01", 246.3]] }"#).await;
    let loader = local_loader(url);
    let mut page = Page::default();
    let mounted = loader
        .run(|series| {
            let chart = Chart::new(series).render(&RenderOptions::default()).expect("render");
            page.mount(chart);
        })
        .await;
    assert!(mounted.is_some());
    assert_eq!(page.bar_count(), 2);
}

#[tokio::test]
async fn not_found_draws_nothing_and_logs_once() {
    let url = serve_once("404 Not Found", "{}").await;
    let counter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let loader = local_loader(url);
    let mut page = Page::default();
    let mounted = loader
        .run(|series| {
            let chart = Chart::new(series).render(&RenderOptions::default()).expect("render");
            page.mount(chart);
        })
        .await;

    assert!(mounted.is_none());
    assert_eq!(page.bar_count(), 0);
    assert!(page.tooltip().is_none());
    assert_eq!(counter.0.load(Ordering::SeqCst), 1);
}
