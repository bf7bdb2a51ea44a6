pub mod account;
pub mod admin;
pub mod apply;

use crate::errors::ServerError;
use crate::table::{parse_query_string, QueryParams};
use astra::Request;
use chrono::NaiveDateTime;
use std::io::Read;
use url::form_urlencoded;

pub fn query_params(req: &Request) -> QueryParams {
    req.uri().query().map(parse_query_string).unwrap_or_default()
}

/// Decode an `application/x-www-form-urlencoded` body.
pub fn read_form(req: Request) -> Result<QueryParams, ServerError> {
    let mut body = req.into_body();
    let mut raw = Vec::new();
    body.reader()
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("failed to read form body: {e}")))?;

    Ok(form_urlencoded::parse(&raw).into_owned().collect())
}

/// Trimmed, non-empty form value.
pub fn required<'a>(form: &'a QueryParams, key: &str) -> Result<&'a str, ServerError> {
    optional(form, key).ok_or_else(|| ServerError::BadRequest(format!("missing field '{key}'")))
}

pub fn optional<'a>(form: &'a QueryParams, key: &str) -> Option<&'a str> {
    form.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Path ids that are not numbers can't name a row.
pub fn parse_id(segment: &str) -> Result<i64, ServerError> {
    segment.parse().map_err(|_| ServerError::NotFound)
}

pub fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_count_as_missing() {
        let form = parse_query_string("subject=+++&body=hi");
        assert!(matches!(required(&form, "subject"), Err(ServerError::BadRequest(_))));
        assert_eq!(required(&form, "body").unwrap(), "hi");
        assert_eq!(optional(&form, "nope"), None);
    }

    #[test]
    fn non_numeric_ids_are_not_found() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(ServerError::NotFound)));
    }
}
