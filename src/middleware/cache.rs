use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

const STATIC_EXTENSIONS: &[&str] = &[
    ".css", ".js", ".svg", ".png", ".jpg", ".jpeg", ".webp", ".ico", ".woff2",
];

fn is_static(path: &str) -> bool {
    path.starts_with("/static/") || STATIC_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Embedded assets are cached for a year, everything else is never cached so
/// admin edits show up on the next request.
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let is_static = is_static(req.uri().path());
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    if is_static {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=31536000, immutable"),
        );
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate"),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_paths() {
        assert!(is_static("/static/css/main.css"));
        assert!(is_static("/favicon.ico"));
        assert!(!is_static("/admin/projects"));
        assert!(!is_static("/api/send-email"));
    }
}
