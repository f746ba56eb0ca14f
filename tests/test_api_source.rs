use mockito::Matcher;
use recipe_browser::{
    fetch_recipe, search_recipes, ApiSource, BrowseError, Difficulty, RecipeQuery, RecipeSource,
    RetrySource,
};
use std::sync::Arc;

const RECIPES_JSON: &str = r#"
[
    {
        "id": "1",
        "title": "Chicken Biryani",
        "image": "/images/biryani.jpg",
        "category": "Rice",
        "cookingTime": 60,
        "servings": 4,
        "ingredients": [
            { "id": "1", "name": "Basmati rice", "amount": "2", "unit": "cups" },
            { "id": "2", "name": "Chicken", "amount": "500", "unit": "g" }
        ],
        "instructions": ["Soak the rice", "Layer and cook on dum"],
        "difficulty": "Medium",
        "rating": 4.8
    },
    {
        "id": "2",
        "title": "Vegetable Biryani",
        "category": "Rice",
        "cookingTime": 45,
        "servings": 4,
        "difficulty": "Easy",
        "rating": 4.5
    }
]
"#;

#[tokio::test]
async fn test_list_all_recipes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/recipes")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(RECIPES_JSON)
        .create_async()
        .await;

    let source = ApiSource::new(&server.url(), None).unwrap();
    let recipes = source.list(&RecipeQuery::All).await.unwrap();

    mock.assert_async().await;
    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].title, "Chicken Biryani");
    assert_eq!(recipes[0].cooking_time, 60);
    assert_eq!(recipes[0].difficulty, Difficulty::Medium);
    assert_eq!(recipes[0].ingredients[0].to_string(), "2 cups Basmati rice");
    // Sparse entries fall back to defaults
    assert!(recipes[1].ingredients.is_empty());
    assert!(recipes[1].image.is_empty());
}

#[tokio::test]
async fn test_search_sends_query_parameter() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/recipes")
        .match_query(Matcher::UrlEncoded("q".into(), "chicken biryani".into()))
        .with_status(200)
        .with_body(RECIPES_JSON)
        .create_async()
        .await;

    let recipes = search_recipes(&server.url(), "chicken biryani").await.unwrap();

    mock.assert_async().await;
    assert_eq!(recipes.len(), 2);
}

#[tokio::test]
async fn test_category_sends_category_parameter() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/recipes")
        .match_query(Matcher::UrlEncoded("category".into(), "Meat-Seafood".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let source = ApiSource::new(&server.url(), None).unwrap();
    let recipes = source
        .list(&RecipeQuery::category("Meat-Seafood"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(recipes.is_empty());
}

#[tokio::test]
async fn test_get_recipe_by_id() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/2")
        .with_status(200)
        .with_body(r#"{ "id": "2", "title": "Vegetable Biryani", "category": "Rice" }"#)
        .create_async()
        .await;

    let recipe = fetch_recipe(&server.url(), "2").await.unwrap().unwrap();
    assert_eq!(recipe.id, "2");
    assert_eq!(recipe.title, "Vegetable Biryani");
}

#[tokio::test]
async fn test_unknown_id_is_none() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/999")
        .with_status(404)
        .with_body(r#"{ "error": "Recipe not found" }"#)
        .create_async()
        .await;

    let recipe = fetch_recipe(&server.url(), "999").await.unwrap();
    assert!(recipe.is_none());
}

#[tokio::test]
async fn test_server_error_is_status_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes")
        .with_status(500)
        .create_async()
        .await;

    let source = ApiSource::new(&server.url(), None).unwrap();
    let err = source.list(&RecipeQuery::All).await.unwrap_err();

    assert!(matches!(err, BrowseError::Status { status: 500, .. }));
    assert!(err.to_string().starts_with("HTTP error! status: 500"));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes")
        .with_status(200)
        .with_body(r#"{ "recipes": "not a list" }"#)
        .create_async()
        .await;

    let source = ApiSource::new(&server.url(), None).unwrap();
    let err = source.list(&RecipeQuery::All).await.unwrap_err();
    assert!(matches!(err, BrowseError::Decode(_)));
}

#[tokio::test]
async fn test_retry_gives_up_after_configured_attempts() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/recipes")
        .with_status(503)
        .expect(3)
        .create_async()
        .await;

    let api = Arc::new(ApiSource::new(&server.url(), None).unwrap());
    let source = RetrySource::new(api, 3, 10);
    let result = source.list(&RecipeQuery::All).await;

    mock.assert_async().await;
    assert!(matches!(result, Err(BrowseError::Status { status: 503, .. })));
}

#[tokio::test]
async fn test_retry_does_not_repeat_not_found() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/recipes/999")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    let api = Arc::new(ApiSource::new(&server.url(), None).unwrap());
    let source = RetrySource::new(api, 3, 10);
    assert!(source.get("999").await.unwrap().is_none());

    mock.assert_async().await;
}
