use crate::api_error::ApiError;
use crate::http::tools_handler::StorageKeyInput;
use crate::http::AppState;
use crate::models::{raw_from_value, ContractIdentifier, DurabilityClass};
use crate::soroban::scval::encode;
use crate::soroban::wasm_spec::has_functions;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::info;

fn parse_contract_id(raw: &str) -> Result<ContractIdentifier, ApiError> {
    raw.parse::<ContractIdentifier>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid contract id: {}", raw)))
}

/// GET /api/contracts/:id/functions
/// Probable public functions of a deployed contract
pub async fn contract_functions(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let contract = parse_contract_id(&path.into_inner())?;

    info!(contract_id = %contract, "Received contract functions request");

    let functions = state
        .soroban_service
        .contract_functions(&contract, &state.spec_miner)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "contract_id": contract.to_string(),
        "has_functions": has_functions(&functions),
        "functions": functions
    })))
}

#[derive(Debug, Deserialize)]
pub struct ReadStorageRequest {
    pub key: StorageKeyInput,
    #[serde(default)]
    pub durability: DurabilityClass,
}

/// POST /api/contracts/:id/storage
/// Read one contract-data entry from the ledger
pub async fn read_storage(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<ReadStorageRequest>,
) -> Result<impl Responder, ApiError> {
    let contract = parse_contract_id(&path.into_inner())?;
    let req = req.into_inner();

    info!(
        contract_id = %contract,
        key_type = %req.key.kind,
        durability = %req.durability,
        "Received storage read request"
    );

    let key = encode(req.key.kind, &raw_from_value(req.key.value))?;
    let entry = state
        .soroban_service
        .read_contract_data(&contract, key, req.durability)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("No {} storage entry", req.durability)))?;

    Ok(HttpResponse::Ok().json(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::soroban_service::{NetworkConfig, SorobanService};
    use crate::soroban::wasm_spec::SpecMiner;
    use actix_web::{test, App};
    use serde_json::json;

    fn app_state() -> web::Data<AppState> {
        web::Data::new(AppState {
            soroban_service: SorobanService::new(NetworkConfig::custom(
                "http://127.0.0.1:9".to_string(),
                "Test Net".to_string(),
            )),
            spec_miner: SpecMiner::new(),
        })
    }

    #[actix_web::test]
    async fn test_functions_rejects_invalid_contract_id() {
        let app = test::init_service(
            App::new()
                .app_data(app_state())
                .route("/contracts/{id}/functions", web::get().to(contract_functions)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/contracts/GABC/functions")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_storage_rejects_invalid_key_before_rpc() {
        let contract = stellar_strkey::Contract([3u8; 32]).to_string();
        let app = test::init_service(
            App::new()
                .app_data(app_state())
                .route("/contracts/{id}/storage", web::post().to(read_storage)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/contracts/{}/storage", contract))
            .set_json(json!({"key": {"type": "symbol", "value": "not a symbol!"}}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_storage_reports_unreachable_rpc() {
        let contract = stellar_strkey::Contract([3u8; 32]).to_string();
        let app = test::init_service(
            App::new()
                .app_data(app_state())
                .route("/contracts/{id}/storage", web::post().to(read_storage)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/contracts/{}/storage", contract))
            .set_json(json!({"key": {"type": "symbol", "value": "COUNTER"}, "durability": "temporary"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 502);
    }
}
