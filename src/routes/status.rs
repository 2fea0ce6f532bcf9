use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::models::{StatusCheck, StatusCheckCreate};
use crate::service::StatusService;
use actix_web::{HttpResponse, Responder, get, post, web};

/// # Create Status Check
///
/// Records `client_name` with a generated id and UTC timestamp and returns
/// the record. When the store is unavailable the record is returned without
/// being persisted.
///
/// ## Responses
/// - **200 OK**: the created [`StatusCheck`]
/// - **422 Unprocessable Entity**: `client_name` missing or not a string
///
/// ## Example Request
/// ```json
/// { "client_name": "drum-kit-01" }
/// ```
#[utoipa::path(
    post,
    path = "/api/status",
    request_body = StatusCheckCreate,
    responses(
        (status = 200, description = "Status check created", body = StatusCheck),
        (status = 422, description = "Invalid request payload")
    ),
    tag = "Status Checks"
)]
#[post("/status")]
pub async fn create_status_check(
    req: JsonBody<StatusCheckCreate>,
    service: web::Data<StatusService>,
) -> impl Responder {
    let check = service
        .create_status_check(req.into_inner().client_name)
        .await;
    HttpResponse::Ok().json(check)
}

/// # List Status Checks
///
/// Up to 1000 stored records in store order; `[]` when the store is
/// unavailable.
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Stored status checks", body = [StatusCheck]),
        (status = 500, description = "A stored record could not be read")
    ),
    tag = "Status Checks"
)]
#[get("/status")]
pub async fn list_status_checks(
    service: web::Data<StatusService>,
) -> Result<impl Responder, ApiError> {
    let checks = service.list_status_checks().await?;
    Ok(HttpResponse::Ok().json(checks))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_status_check).service(list_status_checks);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::tests::connected_service;
    use crate::store::{MockStatusCollection, StoreConnection};
    use actix_web::dev::{Service, ServiceResponse};
    use actix_web::{App, test};
    use mongodb::bson::doc;
    use serde_json::{Value, json};
    use std::collections::HashSet;
    use std::sync::Arc;

    async fn app_with(
        service: StatusService,
    ) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
    {
        test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(configure_routes),
        )
        .await
    }

    fn disconnected() -> StatusService {
        StatusService::new(StoreConnection::Disconnected)
    }

    #[actix_web::test]
    async fn test_create_returns_record_when_store_is_down() {
        let app = app_with(disconnected()).await;

        let req = test::TestRequest::post()
            .uri("/status")
            .set_json(json!({ "client_name": "offline-client" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let check: StatusCheck = test::read_body_json(resp).await;
        assert_eq!(check.client_name, "offline-client");
        assert!(uuid::Uuid::parse_str(&check.id).is_ok());
    }

    #[actix_web::test]
    async fn test_list_is_empty_when_store_is_down() {
        let app = app_with(disconnected()).await;

        let req = test::TestRequest::post()
            .uri("/status")
            .set_json(json!({ "client_name": "not-saved" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/status").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_created_record_is_listed() {
        let app = app_with(connected_service()).await;

        let req = test::TestRequest::post()
            .uri("/status")
            .set_json(json!({ "client_name": "persisted" }))
            .to_request();
        let created: StatusCheck = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get().uri("/status").to_request();
        let listed: Vec<StatusCheck> = test::call_and_read_body_json(&app, req).await;

        let found = listed
            .iter()
            .find(|check| check.id == created.id)
            .expect("created record should be listed");
        assert_eq!(found.client_name, "persisted");
        assert_eq!(found.timestamp.timestamp(), created.timestamp.timestamp());
    }

    #[actix_web::test]
    async fn test_listed_records_omit_internal_id() {
        let mut collection = MockStatusCollection::new();
        collection.expect_find_all().returning(|_| {
            Ok(vec![doc! {
                "id": "abc",
                "client_name": "stored",
                "timestamp": "2024-03-10T15:30:45.123456+00:00",
            }])
        });
        let app = app_with(StatusService::new(StoreConnection::Connected(Arc::new(
            collection,
        ))))
        .await;

        let req = test::TestRequest::get().uri("/status").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!([{
                "id": "abc",
                "client_name": "stored",
                "timestamp": "2024-03-10T15:30:45.123456Z"
            }])
        );
    }

    #[actix_web::test]
    async fn test_client_name_is_returned_verbatim() {
        let app = app_with(disconnected()).await;
        let long = "a".repeat(1000);

        for name in ["", "  spaced  ", "Pelé", "<script>", long.as_str()] {
            let req = test::TestRequest::post()
                .uri("/status")
                .set_json(json!({ "client_name": name }))
                .to_request();
            let check: StatusCheck = test::call_and_read_body_json(&app, req).await;
            assert_eq!(check.client_name, name);
        }
    }

    #[actix_web::test]
    async fn test_ids_are_unique() {
        let app = app_with(disconnected()).await;
        let mut ids = HashSet::new();

        for _ in 0..25 {
            let req = test::TestRequest::post()
                .uri("/status")
                .set_json(json!({ "client_name": "c" }))
                .to_request();
            let check: StatusCheck = test::call_and_read_body_json(&app, req).await;
            assert!(ids.insert(check.id), "duplicate id returned");
        }
    }

    #[actix_web::test]
    async fn test_missing_client_name_is_422() {
        let app = app_with(disconnected()).await;

        let req = test::TestRequest::post()
            .uri("/status")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 422);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"][0]["loc"], json!(["body", "client_name"]));
        assert_eq!(body["detail"][0]["type"], "missing");
    }

    #[actix_web::test]
    async fn test_wrong_type_client_name_is_422() {
        let app = app_with(disconnected()).await;

        for payload in [
            json!({ "client_name": 7 }),
            json!({ "client_name": null }),
            json!({ "client_name": ["x"] }),
        ] {
            let req = test::TestRequest::post()
                .uri("/status")
                .set_json(&payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status().as_u16(), 422, "payload: {payload}");

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["detail"][0]["loc"], json!(["body", "client_name"]));
            assert_eq!(body["detail"][0]["type"], "type_error");
        }
    }

    #[actix_web::test]
    async fn test_body_without_content_type_is_accepted() {
        let app = app_with(disconnected()).await;

        let req = test::TestRequest::post()
            .uri("/status")
            .set_payload(r#"{"client_name":"x"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let check: StatusCheck = test::read_body_json(resp).await;
        assert_eq!(check.client_name, "x");
    }

    #[actix_web::test]
    async fn test_body_with_other_content_type_is_accepted() {
        let app = app_with(disconnected()).await;

        let req = test::TestRequest::post()
            .uri("/status")
            .insert_header(("content-type", "text/plain"))
            .set_payload(r#"{"client_name":"plain"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_422() {
        let app = app_with(disconnected()).await;

        let req = test::TestRequest::post()
            .uri("/status")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"client_name": "#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 422);
    }

    #[actix_web::test]
    async fn test_malformed_stored_document_is_500() {
        let mut collection = MockStatusCollection::new();
        collection
            .expect_find_all()
            .returning(|_| Ok(vec![doc! { "id": "abc", "client_name": "stored" }]));
        let app = app_with(StatusService::new(StoreConnection::Connected(Arc::new(
            collection,
        ))))
        .await;

        let req = test::TestRequest::get().uri("/status").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 500);
    }
}
