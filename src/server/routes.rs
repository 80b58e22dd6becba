use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::data::{CatalogEntry, Catalogs, Category};
use crate::resolve::{lookup, parse_hints, DESC_MODE_PARAM};
use crate::server::api;
use crate::server::pages;
use crate::server::query::{decode_path_segment, encode_location, RequestTarget};

/// Legacy spelling of `descMode` still found in shared links.
pub const LEGACY_DESC_MODE_PARAM: &str = "skillDesc";

const GOTO_PREFIX: &str = "/goto/";
const API_GOTO_PREFIX: &str = "/api/goto/";
const API_CATALOGS_PREFIX: &str = "/api/catalogs/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub content_type: &'static str,
    pub body: String,
    /// Redirect target, already encoded for the header.
    pub location: Option<String>,
}

impl HttpResponse {
    fn ok(content_type: &'static str, body: String) -> Self {
        HttpResponse {
            status_code: 200,
            content_type,
            body,
            location: None,
        }
    }

    fn redirect(location: String) -> Self {
        HttpResponse {
            status_code: 302,
            content_type: "text/plain; charset=utf-8",
            body: String::new(),
            location: Some(location),
        }
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response =
            (status, [(header::CONTENT_TYPE, self.content_type)], self.body).into_response();
        if let Some(location) = self.location {
            match HeaderValue::from_str(&location) {
                Ok(value) => {
                    response.headers_mut().insert(header::LOCATION, value);
                }
                Err(err) => tracing::error!(%location, %err, "unencodable redirect target"),
            }
        }
        response
    }
}

pub fn route_request(catalogs: &Catalogs, method: &str, target: &str) -> HttpResponse {
    let request = RequestTarget::parse(target);
    let path = request.path;
    let is_get = matches!(method, "GET" | "HEAD");

    match path {
        "/" if is_get => HttpResponse::ok("text/html; charset=utf-8", pages::index_html()),
        "/api/health" if is_get => json_result(api::health_payload(catalogs)),
        "/api/catalogs" if is_get => json_result(api::catalogs_payload(catalogs)),
        path if is_get && path.starts_with(API_CATALOGS_PREFIX) => {
            let raw = decode_path_segment(&path[API_CATALOGS_PREFIX.len()..]);
            match raw.parse::<Category>() {
                Ok(category) => json_result(api::catalog_entries_payload(catalogs, category)),
                Err(err) => error_response(404, &err.to_string()),
            }
        }
        path if is_get && path.starts_with(API_GOTO_PREFIX) => {
            let name = decode_path_segment(&path[API_GOTO_PREFIX.len()..]);
            json_result(api::goto_payload(catalogs, &name, request.param("category")))
        }
        path if is_get && path.starts_with(GOTO_PREFIX) => {
            let name = decode_path_segment(&path[GOTO_PREFIX.len()..]);
            goto_redirect(catalogs, &name, &request)
        }
        "/" | "/api/health" | "/api/catalogs" => method_not_allowed(),
        path if path.starts_with(API_CATALOGS_PREFIX)
            || path.starts_with(API_GOTO_PREFIX)
            || path.starts_with(GOTO_PREFIX) =>
        {
            method_not_allowed()
        }
        _ => error_response(404, "Route not found"),
    }
}

/// Redirect to the resolved page, or render the not-found page.
/// `descMode` wins over `skillDesc`; values outside description/detailed are ignored.
fn goto_redirect(catalogs: &Catalogs, name: &str, request: &RequestTarget<'_>) -> HttpResponse {
    let category = request.param("category");
    let desc_mode = request
        .param(DESC_MODE_PARAM)
        .or_else(|| request.param(LEGACY_DESC_MODE_PARAM));

    let found = parse_hints(category, desc_mode)
        .ok()
        .and_then(|(hint, options)| Some((lookup(catalogs, name, hint)?, options)));

    match found {
        Some((record, options)) => {
            HttpResponse::redirect(encode_location(&record.path_segments(), options.desc_mode))
        }
        None => HttpResponse {
            status_code: 404,
            content_type: "text/html; charset=utf-8",
            body: pages::not_found_html(name.trim(), category),
            location: None,
        },
    }
}

fn json_result(payload: Result<String, serde_json::Error>) -> HttpResponse {
    match payload {
        Ok(body) => HttpResponse::ok("application/json", body),
        Err(err) => error_response(500, &err.to_string()),
    }
}

fn method_not_allowed() -> HttpResponse {
    error_response(405, "Method not allowed")
}

fn error_response(status_code: u16, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
        location: None,
    }
}
