//! End-to-end tests over real sockets: all five servers at once.

use reqwest::Method;
use serde_json::{json, Value};

use funky_router::Flavor;

mod common;

fn method(token: &str) -> Method {
    Method::from_bytes(token.as_bytes()).unwrap()
}

#[tokio::test]
async fn test_funkytown_on_every_server() {
    let (running, shutdown) = common::start_all().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let expected = [
        (Flavor::NetHttp, "Welcome to Funkytown!"),
        (Flavor::Gin, "Gin Funkytown!"),
        (Flavor::Echo, "Echo Funkytown!"),
        (Flavor::Fiber, "Fiber Funkytown!"),
        (Flavor::Chi, "Chi Funkytown!"),
    ];
    for (flavor, message) in expected {
        let addr = running.addr_of(flavor).unwrap();
        let url = format!("http://{}{}/funkytown", addr, flavor.prefix());

        let res = client.request(method("FUNKYTOWN"), &url).send().await.unwrap();
        assert_eq!(res.status(), 200, "{flavor}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body, json!({"message": message}));
    }

    running.shutdown(&shutdown).await.unwrap();
}

#[tokio::test]
async fn test_method_and_path_errors_over_the_wire() {
    let (running, shutdown) = common::start_all().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let base = format!("http://{}", running.addr_of(Flavor::Chi).unwrap());

    let res = client.get(format!("{base}/api/v5/dance")).send().await.unwrap();
    assert_eq!(res.status(), 405);
    assert_eq!(res.headers().get("allow").unwrap(), "DANCE");
    assert!(res.text().await.unwrap().is_empty());

    let res = client
        .request(method("dance"), format!("{base}/api/v5/dance"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 405);

    let res = client.get(format!("{base}/api/v1/users")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    running.shutdown(&shutdown).await.unwrap();
}

#[tokio::test]
async fn test_echo_round_trip_over_the_wire() {
    let (running, shutdown) = common::start_all().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let base = format!("http://{}", running.addr_of(Flavor::NetHttp).unwrap());

    let res = client
        .post(format!("{base}/api/v1/users/create"))
        .body(r#"{"name":"Zed"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);
    assert_eq!(res.headers().get("content-type").unwrap(), "application/json");
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"message": "User created", "data": {"name": "Zed"}}));

    let res = client
        .request(method("PARTY"), format!("{base}/api/v1/bad/no-error-handling"))
        .body("exactly these bytes")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "exactly these bytes");

    running.shutdown(&shutdown).await.unwrap();
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    use funky_router::config::AppConfig;
    use funky_router::lifecycle::launch;
    use funky_router::Shutdown;

    let mut config = AppConfig::default();
    config.restrict_to(&[Flavor::Echo]);
    for server in &mut config.servers {
        server.bind_address = "127.0.0.1:0".into();
    }
    config.limits.max_body_bytes = 32;

    let shutdown = Shutdown::new();
    let running = launch(&config, &shutdown).await.unwrap();
    let base = format!("http://{}", running.addr_of(Flavor::Echo).unwrap());
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .post(format!("{base}/api/v3/bad/no-validation"))
        .body(format!(r#"{{"padding":"{}"}}"#, "x".repeat(64)))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 413);

    let res = client
        .post(format!("{base}/api/v3/bad/no-validation"))
        .body(r#"{"ok":1}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    running.shutdown(&shutdown).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_requests() {
    let (running, shutdown) = common::start_all().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let url = format!(
        "http://{}/api/v2/custom",
        running.addr_of(Flavor::Gin).unwrap()
    );

    let mut tasks = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        let url = url.clone();
        tasks.push(tokio::spawn(async move {
            let token = if i % 2 == 0 { "FUNKYTOWN" } else { "PARTY" };
            let res = client.request(method(token), &url).send().await.unwrap();
            let body: Value = res.json().await.unwrap();
            (token, body)
        }));
    }

    for task in tasks {
        let (token, body) = task.await.unwrap();
        assert_eq!(body["method"], token.to_lowercase());
        assert_eq!(body["framework"], "gin");
    }

    running.shutdown(&shutdown).await.unwrap();
}
