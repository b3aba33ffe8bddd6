use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::service::soroban_service::SorobanError;
use crate::soroban::error::{DecodeError, EncodeError};
use crate::soroban::xdr_decoder::XdrJsonError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Internal server error")]
    InternalServerError,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    XdrJson(#[from] XdrJsonError),

    #[error("Stellar error: {0}")]
    StellarError(#[from] SorobanError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
    details: Option<String>,
}

impl ApiError {
    fn kind(&self) -> Option<&'static str> {
        match self {
            ApiError::Encode(e) => Some(e.code()),
            ApiError::Decode(DecodeError::NoSchemaMatched) => Some("no_schema_matched"),
            _ => None,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Encode(_) => StatusCode::BAD_REQUEST,
            ApiError::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::XdrJson(_) => StatusCode::BAD_REQUEST,
            ApiError::StellarError(SorobanError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::StellarError(SorobanError::NoWasmExecutable(_)) => StatusCode::BAD_REQUEST,
            ApiError::StellarError(SorobanError::InvalidAccount(_)) => StatusCode::BAD_REQUEST,
            ApiError::StellarError(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            ApiError::StellarError(e) => e.user_message(),
            _ => self.to_string(),
        };

        let error_response = ErrorResponse {
            error: message,
            code: status.as_u16(),
            kind: self.kind(),
            details: Some(self.to_string()),
        };

        HttpResponse::build(status).json(error_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArgKind;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let encode = ApiError::from(EncodeError::InvalidBoolean { raw: "x".into() });
        assert_eq!(encode.status_code(), StatusCode::BAD_REQUEST);

        let decode = ApiError::from(DecodeError::NoSchemaMatched);
        assert_eq!(decode.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let missing = ApiError::from(SorobanError::NotFound("instance".into()));
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let account = ApiError::from(SorobanError::InvalidAccount("GXYZ".into()));
        assert_eq!(account.status_code(), StatusCode::BAD_REQUEST);

        let rpc = ApiError::from(SorobanError::RpcError("boom".into()));
        assert_eq!(rpc.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_encode_errors_keep_their_specific_message() {
        let err = ApiError::from(EncodeError::OutOfRange {
            kind: ArgKind::U32,
            raw: "4294967296".into(),
        });

        assert_eq!(err.to_string(), "'4294967296' is out of range for u32");
        assert_eq!(err.kind(), Some("out_of_range"));
    }
}
