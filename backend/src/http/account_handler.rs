use crate::api_error::ApiError;
use crate::http::AppState;
use crate::models::history_to_csv;
use actix_web::{http::header, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub format: HistoryFormat,
}

/// GET /api/accounts/:address/history
/// Recent transactions of an account, as JSON or a CSV download
pub async fn account_history(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<HistoryQuery>,
) -> Result<impl Responder, ApiError> {
    let account = path.into_inner();

    info!(account = %account, format = ?query.format, "Received account history request");

    let records = state
        .soroban_service
        .fetch_account_history(&account)
        .await?;

    match query.format {
        HistoryFormat::Json => Ok(HttpResponse::Ok().json(serde_json::json!({
            "account": account,
            "records": records
        }))),
        HistoryFormat::Csv => {
            let body = history_to_csv(&records).map_err(|e| {
                warn!(account = %account, error = %e, "Failed to render history CSV");
                ApiError::InternalServerError
            })?;

            Ok(HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header((
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}-history.csv\"", account),
                ))
                .body(body))
        }
    }
}
