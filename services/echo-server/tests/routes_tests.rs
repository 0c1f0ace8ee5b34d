//! Route behavior tests against a live listener.

use echo_server::{router, SLOW_ROUTE_DELAY};
use std::net::SocketAddr;
use std::time::Instant;

async fn serve() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router()).await.expect("serve");
    });
    addr
}

#[tokio::test]
async fn root_returns_ok() {
    let addr = serve().await;
    let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn ping_returns_ok() {
    let addr = serve().await;
    let response = reqwest::get(format!("http://{}/ping", addr)).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn slow_returns_ok_after_fixed_delay() {
    let addr = serve().await;
    let started = Instant::now();
    let response = reqwest::get(format!("http://{}/slow", addr)).await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");
    assert!(
        elapsed >= SLOW_ROUTE_DELAY,
        "responded in {:?}, before the {:?} delay",
        elapsed,
        SLOW_ROUTE_DELAY
    );
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let addr = serve().await;
    let response = reqwest::get(format!("http://{}/nope", addr)).await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
}
