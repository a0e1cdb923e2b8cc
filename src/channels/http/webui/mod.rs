use axum::{
    extract::Path,
    http::{HeaderValue, header},
    response::IntoResponse,
};
use reqwest::StatusCode;

#[derive(rust_embed::RustEmbed)]
#[folder = "webui/"]
struct WebUI;

pub async fn index() -> impl IntoResponse {
    match WebUI::get("index.html") {
        Some(content) => (
            StatusCode::OK,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            )],
            content.data,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Index Not Found").into_response(),
    }
}

pub async fn assets(Path(path): Path<String>) -> impl IntoResponse {
    match WebUI::get(&path) {
        Some(content) => {
            let mime_type = mime_guess::from_path(&path).first_or_octet_stream();
            let content_type = HeaderValue::from_str(mime_type.as_ref())
                .unwrap_or(HeaderValue::from_static("application/octet-stream"));

            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, content_type)],
                content.data,
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "Asset not found").into_response(),
    }
}
