//! Edge access control: HTTP Basic credentials for the admin area and the
//! mutating API prefixes, CORS for those prefixes, and the production gate
//! on `/admin`.

use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, Method, Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Basic};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::presentation::http::state::HttpState;

pub const PROTECTED_API_PREFIXES: &[&str] = &[
    "/api/articles",
    "/api/categories",
    "/api/tags",
    "/api/bootstrap",
    "/api/ai-generate",
    "/api/ai",
    "/api/assist",
    "/api/rss/translate",
    "/api/rss/import",
];

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";
const ALLOW_HEADERS: &str = "Authorization, Content-Type";
const WWW_AUTHENTICATE: &str = r#"Basic realm="Admin Panel", charset="UTF-8""#;
const MISSING_CREDENTIALS: &str = "ADMIN_USERNAME / ADMIN_PASSWORD is not configured";

type Digest256 = [u8; 32];

fn digest(value: &str) -> Digest256 {
    Sha256::digest(value.as_bytes()).into()
}

/// Equal-length comparison that does not stop at the first mismatch.
fn digests_match(a: &Digest256, b: &Digest256) -> bool {
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[derive(Clone)]
struct AdminCredentials {
    username: Digest256,
    password: Digest256,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AdminCredentials(..)")
    }
}

/// Server-held secrets and the deployment flags the guard consults.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    credentials: Option<AdminCredentials>,
    production: bool,
    admin_dashboard_enabled: bool,
}

impl AccessPolicy {
    /// Credentials are kept only as SHA-256 digests. Either value missing
    /// or blank disables every protected route.
    pub fn new(username: Option<&str>, password: Option<&str>) -> Self {
        let credentials = match (username, password) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => {
                Some(AdminCredentials {
                    username: digest(user),
                    password: digest(pass),
                })
            }
            _ => None,
        };
        Self {
            credentials,
            production: false,
            admin_dashboard_enabled: false,
        }
    }

    pub fn with_production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    pub fn with_admin_dashboard(mut self, enabled: bool) -> Self {
        self.admin_dashboard_enabled = enabled;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    fn admin_hidden(&self) -> bool {
        self.production && !self.admin_dashboard_enabled
    }

    /// `None` when no credentials are configured.
    fn authorize(&self, headers: &HeaderMap) -> Option<bool> {
        let expected = self.credentials.as_ref()?;
        let Some(basic) = headers.typed_get::<Authorization<Basic>>() else {
            return Some(false);
        };
        let user_ok = digests_match(&digest(basic.username()), &expected.username);
        let pass_ok = digests_match(&digest(basic.password()), &expected.password);
        Some(user_ok & pass_ok)
    }
}

pub fn is_protected_api(path: &str) -> bool {
    PROTECTED_API_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

fn is_admin_route(path: &str) -> bool {
    path.starts_with("/admin")
}

fn apply_cors(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}

fn text(status: StatusCode, body: &'static str) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

fn with_cors(mut response: Response) -> Response {
    apply_cors(response.headers_mut());
    response
}

pub async fn access_guard(req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    let protected_api = is_protected_api(&path);
    let admin = is_admin_route(&path);

    if protected_api && req.method() == Method::OPTIONS {
        return with_cors(StatusCode::NO_CONTENT.into_response());
    }

    if !protected_api && !admin {
        return next.run(req).await;
    }

    let Some(policy) = req
        .extensions()
        .get::<HttpState>()
        .map(|state| state.access.clone())
    else {
        warn!("access guard running without application state");
        return text(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error");
    };

    if admin && policy.admin_hidden() {
        return text(StatusCode::NOT_FOUND, "Not Found");
    }

    let is_api = path.starts_with("/api");
    match policy.authorize(req.headers()) {
        None => {
            warn!(path = %path, "protected route requested without configured credentials");
            if is_api {
                with_cors(text(StatusCode::SERVICE_UNAVAILABLE, MISSING_CREDENTIALS))
            } else {
                text(StatusCode::SERVICE_UNAVAILABLE, "Service unavailable")
            }
        }
        Some(false) => {
            debug!(path = %path, "rejected credentials");
            if is_api {
                let mut response =
                    with_cors(text(StatusCode::UNAUTHORIZED, "Authentication required"));
                response.headers_mut().insert(
                    header::WWW_AUTHENTICATE,
                    HeaderValue::from_static(WWW_AUTHENTICATE),
                );
                response
            } else {
                text(StatusCode::UNAUTHORIZED, "Unauthorized")
            }
        }
        Some(true) => {
            let response = next.run(req).await;
            if protected_api {
                with_cors(response)
            } else {
                response
            }
        }
    }
}
