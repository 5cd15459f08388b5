use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = pdv_api::app::build_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_product(
    client: &reqwest::Client,
    base_url: &str,
    description: &str,
    stock_quantity: i64,
) -> i64 {
    let res = client
        .post(format!("{}/products", base_url))
        .json(&json!({ "description": description, "stock_quantity": stock_quantity }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json::<serde_json::Value>().await.unwrap()["id"]
        .as_i64()
        .unwrap()
}

async fn create_adjustment(client: &reqwest::Client, base_url: &str, user: &str) -> i64 {
    let res = client
        .post(format!("{}/adjustments", base_url))
        .json(&json!({ "user": user }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json::<serde_json::Value>().await.unwrap()["id"]
        .as_i64()
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_is_open() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn full_adjustment_flow() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let product_id = create_product(&client, &srv.base_url, "Café torrado 500g", 10).await;
    let adjustment_id = create_adjustment(&client, &srv.base_url, "gerente").await;

    // Add a line: +5 on top of the current stock of 10.
    let res = client
        .post(format!(
            "{}/adjustments/{}/lines",
            srv.base_url, adjustment_id
        ))
        .json(&json!({ "product_id": product_id, "quantity_delta": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Ajuste processado com sucesso");

    let res = client
        .get(format!(
            "{}/adjustments/{}/lines",
            srv.base_url, adjustment_id
        ))
        .send()
        .await
        .unwrap();
    let lines: serde_json::Value = res.json().await.unwrap();
    assert_eq!(lines.as_array().unwrap().len(), 1);
    assert_eq!(lines[0]["prior_quantity"], 10);
    assert_eq!(lines[0]["delta"], 5);
    assert_eq!(lines[0]["new_quantity"], 15);

    // The same product cannot enter the batch twice.
    let res = client
        .post(format!(
            "{}/adjustments/{}/lines",
            srv.base_url, adjustment_id
        ))
        .json(&json!({ "product_id": product_id, "quantity_delta": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Este produto já existe neste ajuste");

    // Process: the line's resulting quantity becomes the product's stock.
    let res = client
        .post(format!(
            "{}/adjustments/{}/process",
            srv.base_url, adjustment_id
        ))
        .json(&json!({ "observation": "balanço mensal" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/products", srv.base_url))
        .send()
        .await
        .unwrap();
    let products: serde_json::Value = res.json().await.unwrap();
    assert_eq!(products[0]["stock"]["quantity"], 15);

    // The batch is sealed now.
    let res = client
        .post(format!(
            "{}/adjustments/{}/lines",
            srv.base_url, adjustment_id
        ))
        .json(&json!({ "product_id": product_id, "quantity_delta": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Ajuste já esta processado");
}

#[tokio::test]
async fn removing_a_line_allows_re_adding_the_product() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let product_id = create_product(&client, &srv.base_url, "Açúcar cristal", 0).await;
    let adjustment_id = create_adjustment(&client, &srv.base_url, "caixa").await;

    let res = client
        .post(format!(
            "{}/adjustments/{}/lines",
            srv.base_url, adjustment_id
        ))
        .json(&json!({ "product_id": product_id, "quantity_delta": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .get(format!(
            "{}/adjustments/{}/lines",
            srv.base_url, adjustment_id
        ))
        .send()
        .await
        .unwrap();
    let lines: serde_json::Value = res.json().await.unwrap();
    assert_eq!(lines[0]["new_quantity"], 5);
    let line_id = lines[0]["id"].as_i64().unwrap();

    let res = client
        .delete(format!(
            "{}/adjustments/{}/lines/{}",
            srv.base_url, adjustment_id, line_id
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Produto removido com sucesso");

    // Re-adding creates a fresh line with a fresh id.
    let res = client
        .post(format!(
            "{}/adjustments/{}/lines",
            srv.base_url, adjustment_id
        ))
        .json(&json!({ "product_id": product_id, "quantity_delta": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .get(format!(
            "{}/adjustments/{}/lines",
            srv.base_url, adjustment_id
        ))
        .send()
        .await
        .unwrap();
    let lines: serde_json::Value = res.json().await.unwrap();
    assert_eq!(lines.as_array().unwrap().len(), 1);
    assert_ne!(lines[0]["id"].as_i64().unwrap(), line_id);
    assert_eq!(lines[0]["new_quantity"], 3);
}

#[tokio::test]
async fn unknown_adjustment_reports_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/adjustments/999/lines", srv.base_url))
        .json(&json!({ "product_id": 1, "quantity_delta": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Ajuste não encontrado");
}

#[tokio::test]
async fn unknown_product_reports_catalog_wording() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let adjustment_id = create_adjustment(&client, &srv.base_url, "gerente").await;

    let res = client
        .post(format!(
            "{}/adjustments/{}/lines",
            srv.base_url, adjustment_id
        ))
        .json(&json!({ "product_id": 42, "quantity_delta": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Produto não encontrado");
}

#[tokio::test]
async fn deleting_an_adjustment_cascades_to_lines() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let product_id = create_product(&client, &srv.base_url, "Farinha de trigo", 8).await;
    let adjustment_id = create_adjustment(&client, &srv.base_url, "gerente").await;

    let res = client
        .post(format!(
            "{}/adjustments/{}/lines",
            srv.base_url, adjustment_id
        ))
        .json(&json!({ "product_id": product_id, "quantity_delta": -8 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .delete(format!("{}/adjustments/{}", srv.base_url, adjustment_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Ajuste removido com sucesso");

    let res = client
        .get(format!("{}/adjustments", srv.base_url))
        .send()
        .await
        .unwrap();
    let adjustments: serde_json::Value = res.json().await.unwrap();
    assert_eq!(adjustments.as_array().unwrap().len(), 0);

    let res = client
        .get(format!(
            "{}/adjustments/{}/lines",
            srv.base_url, adjustment_id
        ))
        .send()
        .await
        .unwrap();
    let lines: serde_json::Value = res.json().await.unwrap();
    assert_eq!(lines.as_array().unwrap().len(), 0);
}
