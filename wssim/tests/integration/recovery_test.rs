use reqwest::StatusCode;

use crate::helpers::{faulty_router, spawn_router};

#[tokio::test]
async fn should_convert_panic_into_500_with_standard_text() {
    let base = spawn_router(faulty_router()).await;

    let resp = reqwest::Client::new()
        .get(format!("{base}/api/boom"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.text().await.unwrap(), "Internal Server Error");
}

#[tokio::test]
async fn should_keep_serving_after_a_panic() {
    let base = spawn_router(faulty_router()).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/api/boom")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let resp = client.get(format!("{base}/api/ok")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "still serving");
}
