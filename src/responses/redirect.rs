use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// 302 to `location`; used after every successful form POST.
pub fn redirect(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

/// Only same-site absolute paths are honoured as redirect targets.
pub fn safe_return_to<'a>(candidate: Option<&'a str>, fallback: &'a str) -> &'a str {
    match candidate {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_offsite_targets() {
        assert_eq!(safe_return_to(Some("/admin/payouts?page=2"), "/admin"), "/admin/payouts?page=2");
        assert_eq!(safe_return_to(Some("//evil.example"), "/admin"), "/admin");
        assert_eq!(safe_return_to(Some("https://evil.example"), "/admin"), "/admin");
        assert_eq!(safe_return_to(None, "/admin"), "/admin");
    }
}
