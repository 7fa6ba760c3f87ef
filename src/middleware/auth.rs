use axum::{
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};

use crate::auth::{validate_jwt, Claims, Role};
use crate::error::ApiError;

/// Request-scoped identity, decoded from the token once per request
/// and injected as an axum extension.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: i32,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.sub,
            name: claims.name,
            role: claims.role,
        }
    }
}

/// Validates the bearer token and makes `AuthUser` available to every
/// protected handler. Rejections short-circuit with a 401 envelope.
pub async fn jwt_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let token =
        extract_jwt_from_headers(&headers).map_err(|e| unauthorized(e).into_response())?;
    let claims =
        validate_jwt(&token).map_err(|e| unauthorized(e.to_string()).into_response())?;

    let auth_user = AuthUser::from(claims);
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

fn unauthorized(msg: String) -> (StatusCode, Json<serde_json::Value>) {
    let api_error = ApiError::unauthorized(msg);
    (api_error.status_code(), Json(api_error.to_json()))
}

fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty JWT token".to_string());
        }
        Ok(token.to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}

/// Guard a handler body to the given roles. Admins pass every check.
pub fn require_role(user: &AuthUser, allowed: &[Role]) -> Result<(), ApiError> {
    if user.role == Role::Admin || allowed.contains(&user.role) {
        Ok(())
    } else {
        Err(ApiError::forbidden(
            "You do not have permission to perform this action",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_jwt_from_headers(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn rejects_missing_and_malformed_headers() {
        assert!(extract_jwt_from_headers(&HeaderMap::new()).is_err());
        assert!(extract_jwt_from_headers(&headers_with("Token abc")).is_err());
        assert!(extract_jwt_from_headers(&headers_with("Bearer ")).is_err());
    }

    #[test]
    fn admin_passes_every_role_check() {
        let admin = AuthUser {
            user_id: 1,
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            role: Role::Admin,
        };
        assert!(require_role(&admin, &[]).is_ok());
        assert!(require_role(&admin, &[Role::Owner]).is_ok());
    }

    #[test]
    fn non_member_role_is_forbidden() {
        let owner = AuthUser {
            user_id: 3,
            email: "owner@example.com".to_string(),
            name: "Owner".to_string(),
            role: Role::Owner,
        };
        assert!(require_role(&owner, &[Role::Manager]).is_err());
        assert!(require_role(&owner, &[Role::Manager, Role::Owner]).is_ok());
    }
}
