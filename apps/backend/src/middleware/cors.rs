use actix_cors::Cors;
use actix_web::http::header;

/// Origins allowed when nothing valid is configured.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:8080", "http://127.0.0.1:8080"];

/// Build CORS middleware for the scoreboard front-end.
///
/// The API only reads and posts JSON, so only GET/POST (plus preflight) and
/// `Content-Type`/`Accept` are allowed. `x-trace-id` is exposed so the page
/// can show it alongside an error.
pub fn cors_middleware(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .max_age(3600);

    for origin in effective_origins(allowed_origins) {
        cors = cors.allowed_origin(&origin);
    }

    cors
}

/// Parse a comma-separated origin list, dropping blanks, `null` and anything
/// that is not http(s).
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}

fn effective_origins(configured: &[String]) -> Vec<String> {
    if configured.is_empty() {
        DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        configured.to_vec()
    }
}
