use axum::{
    extract::{Path, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{self, Claims};
use crate::error::ApiError;

/// Authenticated identity extracted from a verified bearer token. Attached
/// to the request by `identify`; lives for one request.
#[derive(Clone, Debug)]
pub struct Principal {
    pub username: String,
    pub is_admin: bool,
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            is_admin: claims.is_admin,
        }
    }
}

/// Pull the token out of `Authorization: Bearer <token>`. Lowercase
/// `bearer` is also accepted.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("authorization")?.to_str().ok()?;
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))?
        .trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Identification middleware, applied to every route. Attaches a `Principal`
/// when a valid token is presented; a missing or invalid token is not an
/// error here, the per-route guards decide whether to reject.
pub async fn identify(mut request: Request, next: Next) -> Response {
    if let Some(token) = bearer_token(request.headers()) {
        if let Some(claims) = auth::validate_jwt(&token) {
            request.extensions_mut().insert(Principal::from(claims));
        }
    }

    next.run(request).await
}

fn authorize_login(principal: Option<&Principal>) -> Result<(), ApiError> {
    match principal {
        Some(_) => Ok(()),
        None => Err(ApiError::unauthorized("Authentication required")),
    }
}

fn authorize_admin(principal: Option<&Principal>) -> Result<(), ApiError> {
    match principal {
        Some(p) if p.is_admin => Ok(()),
        _ => Err(ApiError::unauthorized("Admin privileges required")),
    }
}

fn authorize_admin_or_self(principal: Option<&Principal>, username: &str) -> Result<(), ApiError> {
    match principal {
        Some(p) if p.is_admin || p.username == username => Ok(()),
        _ => Err(ApiError::unauthorized(
            "Admin privileges or account ownership required",
        )),
    }
}

/// Guard for routes that need any authenticated principal.
pub async fn require_login(request: Request, next: Next) -> Result<Response, ApiError> {
    authorize_login(request.extensions().get::<Principal>())?;
    Ok(next.run(request).await)
}

/// Guard for admin-only routes.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    authorize_admin(request.extensions().get::<Principal>())?;
    Ok(next.run(request).await)
}

/// Guard for routes owned by the `:username` path parameter: the principal
/// must be an admin or the named account itself.
pub async fn require_admin_or_self(
    Path(username): Path<String>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    authorize_admin_or_self(request.extensions().get::<Principal>(), &username)?;
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn principal(username: &str, is_admin: bool) -> Principal {
        Principal {
            username: username.to_string(),
            is_admin,
        }
    }

    #[test]
    fn login_requires_a_principal() {
        assert!(authorize_login(None).is_err());
        assert!(authorize_login(Some(&principal("u1", false))).is_ok());
    }

    #[test]
    fn admin_guard_rejects_non_admins() {
        assert!(authorize_admin(None).is_err());
        assert!(authorize_admin(Some(&principal("u1", false))).is_err());
        assert!(authorize_admin(Some(&principal("u1", true))).is_ok());
    }

    #[test]
    fn admin_or_self_accepts_matching_username() {
        let p = principal("a", false);
        assert!(authorize_admin_or_self(Some(&p), "a").is_ok());
        assert!(authorize_admin_or_self(Some(&p), "b").is_err());
    }

    #[test]
    fn admin_or_self_accepts_any_admin() {
        let p = principal("admin", true);
        assert!(authorize_admin_or_self(Some(&p), "someone-else").is_ok());
    }

    #[test]
    fn admin_or_self_rejects_anonymous() {
        assert!(authorize_admin_or_self(None, "a").is_err());
    }

    #[test]
    fn bearer_token_parses_both_spellings() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers).as_deref(), Some("abc.def"));

        headers.insert("authorization", HeaderValue::from_static("bearer abc.def"));
        assert_eq!(bearer_token(&headers).as_deref(), Some("abc.def"));
    }

    #[test]
    fn bearer_token_rejects_other_schemes_and_empties() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_none());

        headers.insert("authorization", HeaderValue::from_static("Basic dXNlcg=="));
        assert!(bearer_token(&headers).is_none());

        headers.insert("authorization", HeaderValue::from_static("Bearer "));
        assert!(bearer_token(&headers).is_none());
    }
}
