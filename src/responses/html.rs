use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_response_with_cookie(markup, None)
}

/// HTML response, optionally attaching a Set-Cookie header (used when a
/// request minted a fresh session).
pub fn html_response_with_cookie(markup: Markup, set_cookie: Option<String>) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8");

    if let Some(cookie) = set_cookie {
        builder = builder.header("Set-Cookie", cookie);
    }

    builder
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// Static asset response with an explicit content type.
pub fn asset_response(content: &'static str, content_type: mime::Mime) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(content))
        .map_err(|_| ServerError::InternalError)
}
