//! End-to-end tests over a loopback socket.

use std::time::Duration;

mod common;

#[tokio::test]
async fn test_serves_both_routes() {
    let server = common::spawn_server().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .get(format!("http://{}/", server.addr))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Hello World");

    let res = client
        .get(format!("http://{}/ping", server.addr))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(res.text().await.unwrap(), "pong");

    let res = client
        .get(format!("http://{}/nonexistent", server.addr))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 404);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let server = common::spawn_server().await;
    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();

    let res = client
        .get(format!("http://{}/ping", server.addr))
        .send()
        .await
        .expect("server unreachable");
    assert!(res.status().is_success());

    server.shutdown.trigger();

    let result = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server did not stop")
        .expect("server task panicked");
    assert!(result.is_ok());

    let after = client
        .get(format!("http://{}/ping", server.addr))
        .send()
        .await;
    assert!(after.is_err(), "server still accepting after shutdown");
}
