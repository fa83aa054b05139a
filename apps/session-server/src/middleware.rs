use axum::body::Body;
use axum::http::Request;

pub struct HttpRequestContext<'a> {
    pub path: &'a str,
    pub method: &'a str,
    pub request_id: Option<&'a str>,
}

pub fn get_http_request_context(request: &Request<Body>) -> HttpRequestContext<'_> {
    HttpRequestContext {
        path: request.uri().path(),
        method: request.method().as_str(),
        request_id: request
            .headers()
            .get("x-request-id")
            .and_then(|header| header.to_str().ok()),
    }
}
