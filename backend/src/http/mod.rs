// HTTP layer for the DevConsole backend
pub mod account_handler;
pub mod contract_handler;
pub mod health;
pub mod tools_handler;

use actix_web::web;

use crate::service::soroban_service::SorobanService;
use crate::soroban::wasm_spec::SpecMiner;

/// Application state shared by all handlers
pub struct AppState {
    pub soroban_service: SorobanService,
    pub spec_miner: SpecMiner,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/tools")
                    .route("/scval", web::post().to(tools_handler::encode_arguments))
                    .route("/ledger-key", web::post().to(tools_handler::ledger_key))
                    .route("/xdr/decode", web::post().to(tools_handler::decode_xdr))
                    .route("/xdr/encode", web::post().to(tools_handler::encode_xdr))
                    .route("/wasm/functions", web::post().to(tools_handler::wasm_functions))
                    .route("/state-diff", web::post().to(tools_handler::state_diff)),
            )
            .service(
                web::scope("/contracts/{contract_id}")
                    .route("/functions", web::get().to(contract_handler::contract_functions))
                    .route("/storage", web::post().to(contract_handler::read_storage)),
            )
            .route(
                "/accounts/{address}/history",
                web::get().to(account_handler::account_history),
            ),
    );
}
