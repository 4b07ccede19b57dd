//! End-to-end poll loop tests: real HTTP fetcher, mock endpoint, captured sink.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use stats_monitor::config::MonitorConfig;
use stats_monitor::lifecycle::{startup, Shutdown};
use stats_monitor::monitor::{PollOutcome, UNAVAILABLE_MESSAGE};

mod common;

fn config_for(addr: std::net::SocketAddr) -> MonitorConfig {
    let mut config = MonitorConfig::default();
    config.endpoint.url = common::stats_url(addr);
    config.endpoint.timeout_secs = 2;
    config.polling.interval_ms = 10;
    config.polling.evaluation_pause_ms = 0;
    config
}

#[tokio::test]
async fn test_quiet_host_produces_no_output() {
    let addr = common::start_stats_endpoint("10,1000,100,1000,100,1000,100").await;
    let mut monitor = startup::build_monitor(&config_for(addr), Vec::new()).unwrap();

    for _ in 0..3 {
        assert_eq!(monitor.poll_once().await, PollOutcome::Evaluated { warnings: 0 });
    }
    assert!(monitor.sink().is_empty());
}

#[tokio::test]
async fn test_unreachable_endpoint_reports_once() {
    // Bind and drop to get a port nothing listens on.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let mut monitor = startup::build_monitor(&config_for(addr), Vec::new()).unwrap();

    for _ in 0..5 {
        monitor.poll_once().await;
    }
    let output = String::from_utf8(monitor.sink().clone()).unwrap();
    assert_eq!(output, format!("{}\n", UNAVAILABLE_MESSAGE));
    assert_eq!(monitor.streak().count(), 5);
}

#[tokio::test]
async fn test_outage_then_recovery() {
    let calls = Arc::new(AtomicU32::new(0));
    let c = calls.clone();
    let addr = common::start_programmable_endpoint(move || {
        let c = c.clone();
        async move {
            match c.fetch_add(1, Ordering::SeqCst) {
                0 => (500, "error".to_string()),
                1 => (200, "1,2,3".to_string()),
                2 => (502, "bad gateway".to_string()),
                _ => (200, "45,1000,100,1000,100,1000,100".to_string()),
            }
        }
    })
    .await;

    let shutdown = Shutdown::new();
    let monitor = startup::build_monitor(&config_for(addr), Vec::new()).unwrap();
    let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

    let mut waited = 0;
    while calls.load(Ordering::SeqCst) < 6 && waited < 100 {
        tokio::time::sleep(Duration::from_millis(20)).await;
        waited += 1;
    }
    shutdown.trigger();

    let sink = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("monitor did not stop")
        .unwrap();
    let output = String::from_utf8(sink).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], UNAVAILABLE_MESSAGE);
    assert!(lines.len() >= 2, "no warnings after recovery: {:?}", lines);
    assert!(lines[1..].iter().all(|l| *l == "Load Average is too high: 45"));
}
