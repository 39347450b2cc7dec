use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, catalog};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- filter ---

#[tokio::test]
async fn filter_dessert_returns_seeded_catalog_in_order() {
    let resp = app()
        .oneshot(get("/api/json/v1/1/filter.php?c=Dessert"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let meals = body["meals"].as_array().unwrap();
    assert_eq!(meals.len(), catalog().len());
    for (meal, fixture) in meals.iter().zip(catalog()) {
        assert_eq!(meal["idMeal"], fixture.id);
        assert_eq!(meal["strMeal"], fixture.name);
        assert_eq!(meal["strMealThumb"], fixture.thumb);
    }
}

#[tokio::test]
async fn filter_summaries_omit_detail_fields() {
    let resp = app()
        .oneshot(get("/api/json/v1/1/filter.php?c=Dessert"))
        .await
        .unwrap();

    let body = body_json(resp).await;
    let first = &body["meals"][0];
    assert!(first.get("strInstructions").is_none());
    assert!(first.get("strIngredient1").is_none());
}

#[tokio::test]
async fn filter_unknown_category_answers_null_meals() {
    let resp = app()
        .oneshot(get("/api/json/v1/1/filter.php?c=Seafood"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["meals"].is_null());
}

#[tokio::test]
async fn filter_without_category_answers_null_meals() {
    let resp = app()
        .oneshot(get("/api/json/v1/1/filter.php"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["meals"].is_null());
}

// --- lookup ---

#[tokio::test]
async fn lookup_known_id_returns_single_full_record() {
    let fixture = &catalog()[0];
    let resp = app()
        .oneshot(get(&format!("/api/json/v1/1/lookup.php?i={}", fixture.id)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let meals = body["meals"].as_array().unwrap();
    assert_eq!(meals.len(), 1);
    let record = &meals[0];
    assert_eq!(record["idMeal"], fixture.id);
    assert_eq!(record["strMeal"], fixture.name);
    assert!(record["strInstructions"].as_str().unwrap().contains("\r\n"));
    assert!(record["strIngredient1"].is_string());
    assert!(record["strIngredient20"].is_string());
    assert!(record["strMeasure20"].is_string());
}

#[tokio::test]
async fn lookup_unknown_id_answers_null_meals() {
    let resp = app()
        .oneshot(get("/api/json/v1/1/lookup.php?i=99999"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["meals"].is_null());
}

#[tokio::test]
async fn lookup_empty_id_answers_null_meals() {
    let resp = app()
        .oneshot(get("/api/json/v1/1/lookup.php?i="))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["meals"].is_null());
}

#[tokio::test]
async fn lookup_without_id_answers_null_meals() {
    let resp = app()
        .oneshot(get("/api/json/v1/1/lookup.php"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["meals"].is_null());
}

// --- list-then-lookup lifecycle ---

#[tokio::test]
async fn listing_id_resolves_through_lookup() {
    use tower::Service;

    let mut app = app().into_service();

    // list the catalog
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/api/json/v1/1/filter.php?c=Dessert"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let id = body["meals"][0]["idMeal"].as_str().unwrap().to_string();

    // look the first entry up by its listed id
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get(&format!("/api/json/v1/1/lookup.php?i={id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let record = &body["meals"][0];
    assert_eq!(record["idMeal"].as_str().unwrap(), id);
    assert_eq!(record["strCategory"], "Dessert");
}
