use actix_web::{delete, get, post, web, HttpResponse};
use crate::error::ApiError;
use crate::models::{AppState, ReportRequest, ReportsResponse};
use crate::services::report_store::ReportKind;

#[post("/api/dictionary/report")]
pub async fn submit_report(
    data: web::Data<AppState>,
    body: web::Json<ReportRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();

    let word = request
        .word
        .ok_or_else(|| ApiError::Validation("word is required".to_string()))?;
    let kind = request
        .kind
        .ok_or_else(|| ApiError::Validation("type is required".to_string()))?
        .parse::<ReportKind>()
        .map_err(ApiError::Validation)?;

    data.reports.append(kind, &word).await?;
    Ok(HttpResponse::Ok().finish())
}

#[get("/api/dictionary/report")]
pub async fn get_reports(data: web::Data<AppState>) -> HttpResponse {
    let (add, remove) = data.reports.read_all().await;
    HttpResponse::Ok().json(ReportsResponse { add, remove })
}

#[delete("/api/dictionary/report")]
pub async fn clear_reports(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    data.reports.clear().await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;
    use tempfile::tempdir;
    use crate::handlers::configure;
    use crate::handlers::test_support::state_with;
    use crate::models::ReportsResponse;

    #[actix_web::test]
    async fn test_report_lifecycle() {
        let dir = tempdir().unwrap();
        let state = state_with(&[], dir.path(), 10).await;
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        for (word, kind) in [("hello", "add"), ("hello", "add"), ("zzz", "remove")] {
            let req = test::TestRequest::post()
                .uri("/api/dictionary/report")
                .set_json(json!({ "word": word, "type": kind }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            assert!(test::read_body(resp).await.is_empty());
        }

        let req = test::TestRequest::get().uri("/api/dictionary/report").to_request();
        let lists: ReportsResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(lists.add, vec!["HELLO"]);
        assert_eq!(lists.remove, vec!["ZZZ"]);

        let req = test::TestRequest::delete().uri("/api/dictionary/report").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/dictionary/report").to_request();
        let lists: ReportsResponse = test::call_and_read_body_json(&app, req).await;
        assert!(lists.add.is_empty());
        assert!(lists.remove.is_empty());
    }

    #[actix_web::test]
    async fn test_report_validation() {
        let dir = tempdir().unwrap();
        let state = state_with(&[], dir.path(), 10).await;
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let bad_bodies = [
            json!({ "type": "add" }),
            json!({ "word": "hello" }),
            json!({ "word": "hello", "type": "maybe" }),
            json!({ "word": "   ", "type": "add" }),
            json!({ "word": 12, "type": "add" }),
        ];
        for body in bad_bodies {
            let req = test::TestRequest::post()
                .uri("/api/dictionary/report")
                .set_json(&body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {}", body);
        }
    }

    #[actix_web::test]
    async fn test_full_list_returns_429() {
        let dir = tempdir().unwrap();
        let state = state_with(&[], dir.path(), 2).await;
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let statuses = [
            ("ONE", StatusCode::OK),
            ("TWO", StatusCode::OK),
            ("SIX", StatusCode::TOO_MANY_REQUESTS),
        ];
        for (word, expected) in statuses {
            let req = test::TestRequest::post()
                .uri("/api/dictionary/report")
                .set_json(json!({ "word": word, "type": "add" }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected, "word: {}", word);
        }
    }
}
