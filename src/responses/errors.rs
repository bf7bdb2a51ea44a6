use crate::errors::ServerError;
use crate::templates::components::error::render_error_page;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into an HTML error page with the matching status.
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status_code();
    let message = match &err {
        ServerError::BadRequest(msg) => msg.clone(),
        ServerError::NotFound => "Not Found".to_string(),
        // Internal details stay in the logs.
        _ => "Something went wrong on our side.".to_string(),
    };

    let html = render_error_page(status, &message).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(html))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
