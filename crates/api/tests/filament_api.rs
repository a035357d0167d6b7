//! Integration tests for the filament catalog, price history, and surcharge
//! settings endpoints, including estimates priced from stored rows.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use printshop_db::models::model_metadata::UpsertModelMetadata;
use printshop_db::repositories::ModelMetadataRepo;
use serde_json::json;
use sqlx::PgPool;

/// Create a filament through the API and return its id.
async fn create_filament(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/filaments",
        json!({ "name": name, "material": "PLA" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn add_price(pool: &PgPool, filament_id: i64, price_per_gram: f64) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/filaments/{filament_id}/prices"),
        json!({ "price_per_gram": price_per_gram }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

async fn seed_model(pool: &PgPool, model_id: i64, volume_mm3: f64) {
    ModelMetadataRepo::upsert(
        pool,
        &UpsertModelMetadata {
            model_id,
            file_name: Some("cube.stl".into()),
            volume_mm3,
        },
    )
    .await
    .unwrap();
}

fn estimate_body(filament: &str, custom_text: Option<&str>) -> serde_json::Value {
    json!({
        "model_id": 1,
        "x_mm": 10.0,
        "y_mm": 10.0,
        "z_mm": 10.0,
        "filament_type": filament,
        "filament_colors": [],
        "print_profile": "standard",
        "custom_text": custom_text,
    })
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_fetch_filament(pool: PgPool) {
    let id = create_filament(&pool, "PLA Black").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/filaments/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "PLA Black");
    assert_eq!(json["data"]["material"], "PLA");
    assert_eq!(json["data"]["is_active"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_filament_name_returns_409(pool: PgPool) {
    create_filament(&pool, "PETG Clear").await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/filaments", json!({ "name": "PETG Clear" })).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_filament_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/filaments", json!({ "name": "   " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_filament_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/filaments/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_filament_changes_only_given_fields(pool: PgPool) {
    let id = create_filament(&pool, "ABS White").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/filaments/{id}"),
        json!({ "description": "Matte finish" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "ABS White");
    assert_eq!(json["data"]["description"], "Matte finish");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deactivated_filament_is_hidden_from_default_list(pool: PgPool) {
    let id = create_filament(&pool, "TPU Red").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/filaments/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/filaments").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/filaments?include_inactive=true").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deactivating_twice_is_idempotent(pool: PgPool) {
    let id = create_filament(&pool, "PLA Orange").await;

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = delete(app, &format!("/api/v1/filaments/{id}")).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/filaments/{id}")).await).await;
    assert_eq!(json["data"]["is_active"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_update_returns_400(pool: PgPool) {
    let id = create_filament(&pool, "PLA Purple").await;

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/api/v1/filaments/{id}"), json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "No fields to update");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deactivating_missing_filament_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/filaments/424242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Price history
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn prices_are_listed_newest_first(pool: PgPool) {
    let id = create_filament(&pool, "PLA Blue").await;
    add_price(&pool, id, 0.04).await;
    add_price(&pool, id, 0.05).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/filaments/{id}/prices")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let prices = json["data"].as_array().unwrap();
    assert_eq!(prices.len(), 2);
    assert_eq!(prices[0]["price_per_gram"], 0.05);
    assert_eq!(prices[1]["price_per_gram"], 0.04);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn negative_price_returns_400(pool: PgPool) {
    let id = create_filament(&pool, "PLA Green").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/filaments/{id}/prices"),
        json!({ "price_per_gram": -0.01 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn price_for_missing_filament_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/filaments/31337/prices",
        json!({ "price_per_gram": 0.05 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Surcharge settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn settings_default_until_stored(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/estimate-settings").await).await;
    assert_eq!(json["data"]["is_default"], true);
    assert_eq!(json["data"]["custom_text_base_cost"], 2.0);
    assert_eq!(json["data"]["custom_text_cost_per_char"], 0.1);
    assert!(json["data"]["updated_at"].is_null());

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/estimate-settings",
        json!({ "custom_text_base_cost": 1.5, "custom_text_cost_per_char": 0.25 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/estimate-settings").await).await;
    assert_eq!(json["data"]["is_default"], false);
    assert_eq!(json["data"]["custom_text_base_cost"], 1.5);
    assert_eq!(json["data"]["custom_text_cost_per_char"], 0.25);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn negative_settings_return_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/estimate-settings",
        json!({ "custom_text_base_cost": -1.0, "custom_text_cost_per_char": 0.1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Estimates priced from stored rows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn estimate_uses_latest_stored_price(pool: PgPool) {
    seed_model(&pool, 1, 1000.0).await;
    let id = create_filament(&pool, "PLA Test").await;
    add_price(&pool, id, 1.00).await;
    add_price(&pool, id, 0.05).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/estimates", estimate_body("PLA Test", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["estimated_cost_usd"], 0.06);
    assert_eq!(json["data"]["estimated_time_minutes"], 2.08);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn estimate_applies_stored_surcharge(pool: PgPool) {
    seed_model(&pool, 1, 1000.0).await;
    let id = create_filament(&pool, "PLA Test").await;
    add_price(&pool, id, 0.05).await;

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        "/api/v1/estimate-settings",
        json!({ "custom_text_base_cost": 1.0, "custom_text_cost_per_char": 0.5 }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/estimates", estimate_body("PLA Test", Some("HI"))).await;

    let json = body_json(response).await;
    // 0.062 + 1.0 + 2 * 0.5
    assert_eq!(json["data"]["estimated_cost_usd"], 2.06);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn estimate_for_deactivated_filament_returns_filament_not_found(pool: PgPool) {
    seed_model(&pool, 1, 1000.0).await;
    let id = create_filament(&pool, "PLA Test").await;
    add_price(&pool, id, 0.05).await;

    let app = common::build_test_app(pool.clone());
    delete(app, &format!("/api/v1/filaments/{id}")).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/estimates", estimate_body("PLA Test", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "FILAMENT_NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn estimate_for_unpriced_filament_returns_pricing_not_found(pool: PgPool) {
    seed_model(&pool, 1, 1000.0).await;
    create_filament(&pool, "PLA Test").await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/estimates", estimate_body("PLA Test", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "PRICING_NOT_FOUND");
}
