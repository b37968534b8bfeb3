use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Request, header},
    middleware::{self, Next},
    response::Response,
    routing,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
};

async fn healthz() -> &'static str {
    "ok"
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let static_files =
        ServeDir::new("../dist").not_found_service(ServeFile::new("../dist/index.html"));

    let app = Router::new()
        .route("/healthz", routing::get(healthz))
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(CompressionLayer::new().br(true).gzip(true))
                .layer(middleware::from_fn(cache_control)),
        );

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("0.0.0.0:{port}");
    tracing::info!("Flux Ring server running on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn cache_control(req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path().to_owned(); // <- avoid borrowing req
    let mut res = next.run(req).await;

    res.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_policy(&path)),
    );
    res
}

/// Pick the Cache-Control value for a request path.
///
/// HTML always revalidates so a new deploy shows up on the next load;
/// content-hashed bundles never change and can be cached for a year.
fn cache_policy(path: &str) -> &'static str {
    if path == "/" || path.ends_with(".html") {
        return "no-cache, must-revalidate";
    }

    if has_content_hash(path) {
        "public, max-age=31536000, immutable"
    } else {
        "public, max-age=0, must-revalidate"
    }
}

// Heuristic: treat "name.<hex hash>.ext" files as content-addressed.
fn has_content_hash(path: &str) -> bool {
    let file = path.rsplit('/').next().unwrap_or(path);
    let parts: Vec<&str> = file.split('.').collect();

    // need at least name.hash.ext
    if parts.len() < 3 {
        return false;
    }

    let hash = parts[1];
    hash.len() >= 8 && hash.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_always_revalidates() {
        assert_eq!(cache_policy("/"), "no-cache, must-revalidate");
        assert_eq!(cache_policy("/index.html"), "no-cache, must-revalidate");
    }

    #[test]
    fn test_hashed_bundles_cache_forever() {
        assert_eq!(
            cache_policy("/flux_ring.4f9a01bc.wasm"),
            "public, max-age=31536000, immutable"
        );
        assert_eq!(
            cache_policy("/assets/app.deadbeef01.js"),
            "public, max-age=31536000, immutable"
        );
    }

    #[test]
    fn test_plain_assets_revalidate() {
        assert_eq!(
            cache_policy("/flux_ring.wasm"),
            "public, max-age=0, must-revalidate"
        );
        assert_eq!(
            cache_policy("/favicon.ico"),
            "public, max-age=0, must-revalidate"
        );
        // Short or non-hex middle parts are not hashes
        assert_eq!(
            cache_policy("/app.min.js"),
            "public, max-age=0, must-revalidate"
        );
    }
}
