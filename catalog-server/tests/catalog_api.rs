use anyhow::Result;
use axum::http::StatusCode;
use axum_test::TestServer;
use catalog_config::Config;
use catalog_core::PostgresDatabase;
use catalog_core::api::routes::{HEALTH, PING, v1};
use catalog_server::{AppState, create_app};
use serde_json::{Value, json};
use sqlx::PgPool;

fn build_server(pool: PgPool) -> Result<TestServer> {
    let state = AppState::new(PostgresDatabase::from_pool(pool), Config::default())?;
    TestServer::builder()
        .http_transport()
        .build(create_app(state).into_make_service())
        .map_err(|err| anyhow::anyhow!(err.to_string()))
}

#[sqlx::test(
    migrator = "catalog_core::MIGRATOR",
    fixtures(path = "../../catalog-core/fixtures", scripts("catalog_base"))
)]
async fn items_page_reports_total_and_echoes_paging(pool: PgPool) -> Result<()> {
    let server = build_server(pool)?;

    let response = server
        .post(v1::catalog_bff::ITEMS)
        .json(&json!({ "pageIndex": 1, "pageSize": 2 }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["count"], 5);
    assert_eq!(body["pageIndex"], 1);
    assert_eq!(body["pageSize"], 2);
    let names: Vec<&str> = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|item| item["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Ryzen 3 1200", "Ryzen 5 5600X"]);
    assert_eq!(body["data"][0]["catalogBrand"]["brand"], "AMD");
    assert_eq!(body["data"][0]["specification"]["socket"], "AM4");
    assert_eq!(body["data"][0]["price"], 3099.5);

    Ok(())
}

#[sqlx::test(
    migrator = "catalog_core::MIGRATOR",
    fixtures(path = "../../catalog-core/fixtures", scripts("catalog_base"))
)]
async fn items_brand_filter_restricts_results(pool: PgPool) -> Result<()> {
    let server = build_server(pool)?;

    let response = server
        .post(v1::catalog_bff::ITEMS)
        .json(&json!({
            "pageIndex": 0,
            "pageSize": 10,
            "filters": { "Brand": 2 }
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["count"], 2);
    let data = body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 2);
    assert!(data.iter().all(|item| item["catalogBrandId"] == 2));

    Ok(())
}

#[sqlx::test(
    migrator = "catalog_core::MIGRATOR",
    fixtures(path = "../../catalog-core/fixtures", scripts("catalog_base"))
)]
async fn invalid_paging_and_unknown_filter_are_bad_request(
    pool: PgPool,
) -> Result<()> {
    let server = build_server(pool)?;

    let negative = server
        .post(v1::catalog_bff::ITEMS)
        .json(&json!({ "pageIndex": -1, "pageSize": 10 }))
        .await;
    negative.assert_status(StatusCode::BAD_REQUEST);
    assert!(negative.text().is_empty());

    let unknown_filter = server
        .post(v1::catalog_bff::ITEMS)
        .json(&json!({
            "pageIndex": 0,
            "pageSize": 10,
            "filters": { "Colour": 1 }
        }))
        .await;
    unknown_filter.assert_status(StatusCode::BAD_REQUEST);

    let malformed = server
        .post(v1::catalog_bff::GET_BY_ID)
        .text("{ not json")
        .content_type("application/json")
        .await;
    malformed.assert_status(StatusCode::BAD_REQUEST);

    Ok(())
}

#[sqlx::test(
    migrator = "catalog_core::MIGRATOR",
    fixtures(path = "../../catalog-core/fixtures", scripts("catalog_base"))
)]
async fn get_by_id_returns_item_or_bad_request(pool: PgPool) -> Result<()> {
    let server = build_server(pool)?;

    let found = server
        .post(v1::catalog_bff::GET_BY_ID)
        .json(&json!({ "id": 4 }))
        .await;
    found.assert_status_ok();
    let body: Value = found.json();
    assert_eq!(body["id"], 4);
    assert_eq!(body["name"], "Core i5-10400");
    assert_eq!(body["catalogBrand"]["brand"], "Intel");
    assert_eq!(body["specification"]["videoLink"], Value::Null);

    let missing = server
        .post(v1::catalog_bff::GET_BY_ID)
        .json(&json!({ "id": 404 }))
        .await;
    missing.assert_status(StatusCode::BAD_REQUEST);
    assert!(missing.text().is_empty());

    Ok(())
}

#[sqlx::test(
    migrator = "catalog_core::MIGRATOR",
    fixtures(path = "../../catalog-core/fixtures", scripts("catalog_base"))
)]
async fn brands_are_paged(pool: PgPool) -> Result<()> {
    let server = build_server(pool)?;

    let response = server
        .post(v1::catalog_bff::BRANDS)
        .json(&json!({ "pageIndex": 0, "pageSize": 1 }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "count": 2,
            "pageIndex": 0,
            "pageSize": 1,
            "data": [{ "id": 1, "brand": "AMD" }]
        })
    );

    Ok(())
}

#[sqlx::test(
    migrator = "catalog_core::MIGRATOR",
    fixtures(path = "../../catalog-core/fixtures", scripts("catalog_base"))
)]
async fn item_create_update_remove_flow(pool: PgPool) -> Result<()> {
    let server = build_server(pool)?;

    let created = server
        .post(v1::catalog_item::CREATE)
        .json(&json!({
            "catalogBrandId": 2,
            "name": "Core i9-12900K",
            "price": 18999.99,
            "specificationId": 2,
            "pictureFileName": "6.png"
        }))
        .await;
    created.assert_status_ok();
    let id = created.json::<Value>()["id"]
        .as_i64()
        .expect("created id");

    let fetched: Value = server
        .post(v1::catalog_bff::GET_BY_ID)
        .json(&json!({ "id": id }))
        .await
        .json();
    assert_eq!(fetched["name"], "Core i9-12900K");
    assert_eq!(fetched["price"], 18999.99);
    assert_eq!(fetched["pictureFileName"], "6.png");

    let updated = server
        .post(v1::catalog_item::UPDATE)
        .json(&json!({
            "id": id,
            "catalogBrandId": 1,
            "name": "Ryzen 9 7950X",
            "price": 21000,
            "specificationId": 3,
            "pictureFileName": "7.png"
        }))
        .await;
    updated.assert_status_ok();
    assert!(updated.text().is_empty());

    let fetched: Value = server
        .post(v1::catalog_bff::GET_BY_ID)
        .json(&json!({ "id": id }))
        .await
        .json();
    assert_eq!(fetched["name"], "Ryzen 9 7950X");
    assert_eq!(fetched["catalogBrandId"], 1);
    assert_eq!(fetched["specificationId"], 3);
    assert_eq!(fetched["price"], 21000.0);

    server
        .post(v1::catalog_item::REMOVE)
        .json(&json!({ "id": id }))
        .await
        .assert_status_ok();

    server
        .post(v1::catalog_bff::GET_BY_ID)
        .json(&json!({ "id": id }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .post(v1::catalog_item::REMOVE)
        .json(&json!({ "id": id }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    Ok(())
}

#[sqlx::test(
    migrator = "catalog_core::MIGRATOR",
    fixtures(path = "../../catalog-core/fixtures", scripts("catalog_base"))
)]
async fn brand_and_specification_endpoints(pool: PgPool) -> Result<()> {
    let server = build_server(pool)?;

    let brand = server
        .post(v1::catalog_brand::CREATE)
        .json(&json!({ "brand": "Apple" }))
        .await;
    brand.assert_status_ok();
    let brand_id = brand.json::<Value>()["id"].as_i64().expect("brand id");

    server
        .post(v1::catalog_brand::UPDATE)
        .json(&json!({ "id": brand_id, "brand": "Apple Silicon" }))
        .await
        .assert_status_ok();

    let spec = server
        .post(v1::specification::CREATE)
        .json(&json!({
            "socket": "SoC",
            "numberOfCores": 8,
            "numberOfThreads": 8,
            "clockFrequency": 3.2,
            "maximumClockFrequency": 3.5,
            "memoryType": "LPDDR5"
        }))
        .await;
    spec.assert_status_ok();
    let spec_id = spec.json::<Value>()["id"].as_i64().expect("spec id");

    server
        .post(v1::specification::UPDATE)
        .json(&json!({
            "id": spec_id,
            "socket": "SoC",
            "numberOfCores": 10,
            "numberOfThreads": 10,
            "clockFrequency": 3.2,
            "maximumClockFrequency": 3.7,
            "memoryType": "LPDDR5",
            "videoLink": "https://www.youtube.com/embed/m2"
        }))
        .await
        .assert_status_ok();

    let item = server
        .post(v1::catalog_item::CREATE)
        .json(&json!({
            "catalogBrandId": brand_id,
            "name": "M2",
            "price": 999,
            "specificationId": spec_id,
            "pictureFileName": "m2.png"
        }))
        .await;
    item.assert_status_ok();
    let item_id = item.json::<Value>()["id"].as_i64().expect("item id");

    let fetched: Value = server
        .post(v1::catalog_bff::GET_BY_ID)
        .json(&json!({ "id": item_id }))
        .await
        .json();
    assert_eq!(fetched["catalogBrand"]["brand"], "Apple Silicon");
    assert_eq!(fetched["specification"]["numberOfCores"], 10);
    assert_eq!(
        fetched["specification"]["videoLink"],
        "https://www.youtube.com/embed/m2"
    );

    server
        .post(v1::specification::REMOVE)
        .json(&json!({ "id": spec_id }))
        .await
        .assert_status_ok();
    server
        .post(v1::catalog_bff::GET_BY_ID)
        .json(&json!({ "id": item_id }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .post(v1::catalog_brand::REMOVE)
        .json(&json!({ "id": brand_id }))
        .await
        .assert_status_ok();
    server
        .post(v1::catalog_brand::UPDATE)
        .json(&json!({ "id": brand_id, "brand": "Gone" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    Ok(())
}

#[sqlx::test(
    migrator = "catalog_core::MIGRATOR",
    fixtures(path = "../../catalog-core/fixtures", scripts("catalog_base"))
)]
async fn ping_and_health_respond(pool: PgPool) -> Result<()> {
    let server = build_server(pool)?;

    server.get(PING).await.assert_status_ok();

    let health = server.get(HEALTH).await;
    health.assert_status_ok();
    let body: Value = health.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "healthy");

    Ok(())
}
