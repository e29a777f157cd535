use actix_web::{Route, guard, web};

use crate::campground_handlers::*;
use crate::fault::Fault;

/// Registers every route plus the unmatched-route fallback.
///
/// `/campgrounds/new` is registered before `/campgrounds/{id}` so it is not
/// read as an id. A known path with an unregistered method falls through to
/// the fallback as well. Trailing slashes are left to `NormalizePath::trim()`
/// on the app.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", get_or_head().to(home))
        .route("/campgrounds", get_or_head().to(index))
        .route("/campgrounds", web::post().to(create))
        .route("/campgrounds/new", get_or_head().to(new_form))
        .route("/campgrounds/{id}", get_or_head().to(show))
        .route("/campgrounds/{id}", web::put().to(update))
        .route("/campgrounds/{id}", web::delete().to(destroy))
        .route("/campgrounds/{id}/edit", get_or_head().to(edit_form))
        .default_service(web::to(route_not_found));
}

/// `GET` route that also answers `HEAD`
fn get_or_head() -> Route {
    web::route().guard(guard::Any(guard::Get()).or(guard::Head()))
}

/// Fallback for requests no route matches
pub async fn route_not_found() -> Result<actix_web::HttpResponse, Fault> {
    Err(Fault::route_not_found())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::http::header::{CONTENT_TYPE, LOCATION};
    use actix_web::middleware::NormalizePath;
    use actix_web::{App, test};
    use campgrounds::{
        Campground, CampgroundFields, CampgroundStore, MemoryCampgroundStore, StoreError,
    };
    use serde_json::json;

    use super::*;
    use crate::fault::{DEFAULT_FAULT_MESSAGE, ROUTE_NOT_FOUND_MESSAGE};
    use crate::method_override::MethodOverride;

    macro_rules! init_app {
        ($store:expr) => {{
            let store: Arc<dyn CampgroundStore> = Arc::new($store);
            test::init_service(
                App::new()
                    .app_data(web::Data::from(store))
                    .wrap(MethodOverride)
                    .wrap(NormalizePath::trim())
                    .configure(configure_routes),
            )
            .await
        }};
    }

    /// Store whose every operation fails like a dead database connection
    struct DeadStore;

    #[async_trait::async_trait]
    impl CampgroundStore for DeadStore {
        async fn create(&self, _fields: CampgroundFields) -> Result<Campground, StoreError> {
            Err(StoreError::Database(sqlx::Error::PoolClosed))
        }

        async fn list_all(&self) -> Result<Vec<Campground>, StoreError> {
            Err(StoreError::Database(sqlx::Error::PoolClosed))
        }

        async fn get_by_id(&self, _id: &str) -> Result<Campground, StoreError> {
            Err(StoreError::Database(sqlx::Error::PoolClosed))
        }

        async fn update_by_id(
            &self,
            _id: &str,
            _fields: CampgroundFields,
        ) -> Result<Campground, StoreError> {
            Err(StoreError::Database(sqlx::Error::PoolClosed))
        }

        async fn delete_by_id(&self, _id: &str) -> Result<(), StoreError> {
            Err(StoreError::Database(sqlx::Error::PoolClosed))
        }
    }

    fn pine_ridge_body() -> serde_json::Value {
        json!({
            "campground": {
                "title": "Pine Ridge",
                "location": "Boulder, CO",
                "image": "https://x/y.jpg",
                "description": "nice",
                "price": 25
            }
        })
    }

    fn pine_ridge_fields() -> CampgroundFields {
        CampgroundFields {
            title: "Pine Ridge".to_string(),
            location: "Boulder, CO".to_string(),
            image: "https://x/y.jpg".to_string(),
            description: "nice".to_string(),
            price: 25.0,
        }
    }

    fn location_of(resp: &actix_web::dev::ServiceResponse) -> String {
        resp.headers()
            .get(LOCATION)
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    async fn body_text(resp: actix_web::dev::ServiceResponse) -> String {
        let bytes = test::read_body(resp).await;
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn test_home_renders() {
        let app = init_app!(MemoryCampgroundStore::new());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("View Campgrounds"));
    }

    #[actix_web::test]
    async fn test_create_redirects_and_show_renders() {
        let store = MemoryCampgroundStore::new();
        let app = init_app!(store.clone());

        let req = test::TestRequest::post()
            .uri("/campgrounds")
            .set_json(pine_ridge_body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        let location = location_of(&resp);

        let stored = store.list_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].fields(), pine_ridge_fields());
        assert_eq!(location, format!("/campgrounds/{}", stored[0].id));

        let resp = test::call_service(&app, test::TestRequest::get().uri(&location).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("<h1>Pine Ridge</h1>"));
    }

    #[actix_web::test]
    async fn test_create_from_html_form() {
        let store = MemoryCampgroundStore::new();
        let app = init_app!(store.clone());

        let req = test::TestRequest::post()
            .uri("/campgrounds")
            .insert_header((CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .set_payload(
                "campground%5Btitle%5D=Pine+Ridge&campground%5Blocation%5D=Boulder%2C+CO\
                 &campground%5Bimage%5D=https%3A%2F%2Fx%2Fy.jpg&campground%5Bprice%5D=25\
                 &campground%5Bdescription%5D=nice",
            )
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        let stored = store.list_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].fields(), pine_ridge_fields());
    }

    #[actix_web::test]
    async fn test_empty_title_is_rejected_without_writing() {
        let store = MemoryCampgroundStore::new();
        let app = init_app!(store.clone());

        let mut body = pine_ridge_body();
        body["campground"]["title"] = json!("");
        let req = test::TestRequest::post()
            .uri("/campgrounds")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let html = body_text(resp).await;
        assert!(html.contains("campground.title"));
        assert!(html.contains("is not allowed to be empty"));
        assert!(store.is_empty().await);
    }

    #[actix_web::test]
    async fn test_missing_fields_never_reach_the_store() {
        let store = MemoryCampgroundStore::new();
        let app = init_app!(store.clone());

        for field in ["title", "location", "image", "description", "price"] {
            let mut body = pine_ridge_body();
            body["campground"].as_object_mut().unwrap().remove(field);

            let req = test::TestRequest::post()
                .uri("/campgrounds")
                .set_json(body)
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "field {}", field);
        }
        assert!(store.is_empty().await);
    }

    #[actix_web::test]
    async fn test_update_replaces_fields() {
        let store = MemoryCampgroundStore::new();
        let created = store.create(pine_ridge_fields()).await.unwrap();
        let app = init_app!(store.clone());

        let mut body = pine_ridge_body();
        body["campground"]["title"] = json!("Aspen Hollow");
        body["campground"]["price"] = json!(40.5);
        let req = test::TestRequest::put()
            .uri(&format!("/campgrounds/{}", created.id))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location_of(&resp), format!("/campgrounds/{}", created.id));

        let updated = store.get_by_id(&created.id.to_string()).await.unwrap();
        assert_eq!(updated.title, "Aspen Hollow");
        assert_eq!(updated.price, 40.5);
        assert_eq!(updated.location, created.location);
    }

    #[actix_web::test]
    async fn test_update_through_method_override() {
        let store = MemoryCampgroundStore::new();
        let created = store.create(pine_ridge_fields()).await.unwrap();
        let app = init_app!(store.clone());

        let req = test::TestRequest::post()
            .uri(&format!("/campgrounds/{}?_method=PUT", created.id))
            .insert_header((CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .set_payload(
                "campground[title]=Renamed&campground[location]=Moab,+UT\
                 &campground[image]=https://x/z.jpg&campground[price]=0\
                 &campground[description]=dry",
            )
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        let updated = store.get_by_id(&created.id.to_string()).await.unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.location, "Moab, UT");
        assert_eq!(updated.price, 0.0);
    }

    #[actix_web::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = MemoryCampgroundStore::new();
        let existing = store.create(pine_ridge_fields()).await.unwrap();
        let app = init_app!(store.clone());

        for bogus in [uuid::Uuid::new_v4().to_string(), "bogus-id".to_string()] {
            let mut body = pine_ridge_body();
            body["campground"]["title"] = json!("Hijacked");
            let req = test::TestRequest::put()
                .uri(&format!("/campgrounds/{}", bogus))
                .set_json(body)
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "id {}", bogus);
        }

        let all = store.list_all().await.unwrap();
        assert_eq!(all, vec![existing]);
    }

    #[actix_web::test]
    async fn test_delete_then_delete_again() {
        let store = MemoryCampgroundStore::new();
        let created = store.create(pine_ridge_fields()).await.unwrap();
        let app = init_app!(store.clone());
        let uri = format!("/campgrounds/{}", created.id);

        let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location_of(&resp), "/campgrounds");
        assert!(store.is_empty().await);

        let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(body_text(resp).await.contains("VALID_ID_ABSENT"));
    }

    #[actix_web::test]
    async fn test_show_distinguishes_malformed_and_missing_ids() {
        let app = init_app!(MemoryCampgroundStore::new());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/campgrounds/bogus").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(body_text(resp).await.contains("INVALID_ID"));

        let uri = format!("/campgrounds/{}", uuid::Uuid::new_v4());
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(body_text(resp).await.contains("VALID_ID_ABSENT"));
    }

    #[actix_web::test]
    async fn test_index_new_and_edit_render() {
        let store = MemoryCampgroundStore::new();
        let created = store.create(pine_ridge_fields()).await.unwrap();
        let app = init_app!(store.clone());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/campgrounds").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("Pine Ridge"));

        let resp = test::call_service(&app, test::TestRequest::get().uri("/campgrounds/new").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("name=\"campground[title]\""));

        let uri = format!("/campgrounds/{}/edit", created.id);
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("value=\"Pine Ridge\""));
    }

    #[actix_web::test]
    async fn test_unmatched_routes_are_not_found() {
        let app = init_app!(MemoryCampgroundStore::new());

        let requests = vec![
            test::TestRequest::get().uri("/nowhere").to_request(),
            test::TestRequest::get().uri("/campgrounds/a/b/c").to_request(),
            test::TestRequest::patch().uri("/campgrounds").to_request(),
            test::TestRequest::delete().uri("/campgrounds").to_request(),
        ];
        for req in requests {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
            let html = body_text(resp).await;
            assert!(html.contains(ROUTE_NOT_FOUND_MESSAGE));
            assert!(html.contains("ROUTE_NOT_FOUND"));
        }
    }

    #[actix_web::test]
    async fn test_store_failures_render_default_fault() {
        let app = init_app!(DeadStore);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/campgrounds").to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(resp).await.contains(DEFAULT_FAULT_MESSAGE));

        let req = test::TestRequest::post()
            .uri("/campgrounds")
            .set_json(pine_ridge_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_only_campground_paths_exist() {
        let app = init_app!(MemoryCampgroundStore::new());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(body_text(resp).await.contains("ROUTE_NOT_FOUND"));
    }

    #[actix_web::test]
    async fn test_head_and_trailing_slash_reach_get_routes() {
        let store = MemoryCampgroundStore::new();
        let created = store.create(pine_ridge_fields()).await.unwrap();
        let app = init_app!(store.clone());

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::HEAD)
            .uri("/campgrounds")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/campgrounds/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("Pine Ridge"));

        let uri = format!("/campgrounds/{}/", created.id);
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_deeply_nested_form_key_is_rejected() {
        let store = MemoryCampgroundStore::new();
        let app = init_app!(store.clone());

        let req = test::TestRequest::post()
            .uri("/campgrounds")
            .insert_header((CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .set_payload(format!("campground{}=1", "[x]".repeat(50_000)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let html = body_text(resp).await;
        assert!(html.contains("campground.x"));
        assert!(html.contains("is not allowed"));
        assert!(store.is_empty().await);
    }
}
