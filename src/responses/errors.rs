use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use maud::html;

/// Convert a ServerError into a proper HTML response.
pub fn error_to_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => error_page(404, "Page not found"),
        ServerError::BadRequest(msg) => error_page(400, &msg),
        ServerError::DbError(msg) => error_page(500, &msg),
        ServerError::Backend(msg) => error_page(502, &msg),
        ServerError::InternalError => error_page(500, "Internal Server Error"),
    }
}

/// Build a minimal HTML error page.
pub fn error_page(status: u16, message: &str) -> Response {
    let markup = html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "Back to home" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(markup.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
