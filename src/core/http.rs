//! Shared HTTP helpers for entity handlers

use crate::core::Entity;
use crate::core::error::{PayrollError, PayrollResult, ValidationError};
use crate::core::hal::EntityModel;
use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse a path segment into the identifier type of `T`
pub fn parse_id<T: Entity>(raw: &str) -> PayrollResult<T::Id> {
    raw.parse::<T::Id>().map_err(|_| {
        ValidationError::InvalidId {
            entity_type: T::resource_name_singular().to_string(),
            value: raw.to_string(),
        }
        .into()
    })
}

/// Decode a request body into a typed payload
///
/// Handlers take the body as a raw JSON value so that shape errors come back
/// in the same error envelope as every other failure.
pub fn decode_body<P: DeserializeOwned>(body: Value) -> PayrollResult<P> {
    serde_json::from_value(body).map_err(PayrollError::from)
}

/// `201 Created` with a `Location` header pointing at the model's self link
pub fn created<T: Serialize>(model: EntityModel<T>) -> PayrollResult<Response> {
    let location = model
        .self_href()
        .map(str::to_owned)
        .ok_or_else(|| PayrollError::Internal("created entity has no self link".to_string()))?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(model),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hal::{Link, Links, SELF_REL};
    use crate::entities::order::Order;
    use serde::Deserialize;

    #[test]
    fn test_parse_id_valid() {
        let id = uuid::Uuid::new_v4();
        assert_eq!(parse_id::<Order>(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_id_invalid() {
        let err = parse_id::<Order>("not-a-uuid").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("not-a-uuid"));
    }

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        name: String,
    }

    #[test]
    fn test_decode_body_missing_field() {
        let err = decode_body::<Payload>(serde_json::json!({})).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "INVALID_JSON");
    }

    #[test]
    fn test_created_sets_location() {
        let model = EntityModel::new(
            serde_json::json!({"id": 1}),
            Links::new().with(SELF_REL, Link { href: "/orders/1".into() }),
        );
        let response = created(model).unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/orders/1");
    }

    #[test]
    fn test_created_without_self_link_fails() {
        let model = EntityModel::new(serde_json::json!({}), Links::new());
        assert!(created(model).is_err());
    }
}
