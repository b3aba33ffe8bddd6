use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Origin the console UI is served from when `WEB_ORIGIN` is unset
pub const DEFAULT_WEB_ORIGIN: &str = "http://localhost:3000";

/// Only the console UI origin may call the API from a browser
pub fn cors_middleware(web_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(web_origin)
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .supports_credentials()
        .max_age(3600)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn test_console_origin_is_allowed() {
        let app = test::init_service(
            App::new()
                .wrap(cors_middleware(DEFAULT_WEB_ORIGIN))
                .route("/ping", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/ping")
            .insert_header((header::ORIGIN, DEFAULT_WEB_ORIGIN))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some(DEFAULT_WEB_ORIGIN)
        );
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .and_then(|v| v.to_str().ok()),
            Some("true")
        );
    }

    #[actix_web::test]
    async fn test_foreign_origin_is_rejected() {
        let app = test::init_service(
            App::new()
                .wrap(cors_middleware(DEFAULT_WEB_ORIGIN))
                .route("/ping", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/ping")
            .insert_header((header::ORIGIN, "http://evil.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_client_error());
        assert!(resp
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[actix_web::test]
    async fn test_requests_without_origin_pass_through() {
        let app = test::init_service(
            App::new()
                .wrap(cors_middleware(DEFAULT_WEB_ORIGIN))
                .route("/ping", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get().uri("/ping").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
    }
}
