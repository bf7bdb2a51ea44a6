use crate::db::affiliate_requests::insert_request;
use crate::domain::affiliate_request::NewAffiliateRequest;
use crate::errors::ServerError;
use crate::handlers::{now, optional, required};
use crate::responses::{html_response, redirect, ResultResp};
use crate::router::App;
use crate::table::QueryParams;
use crate::templates::pages::{apply_page, ApplyVm};
use tracing::{info, warn};

pub fn form(params: &QueryParams) -> ResultResp {
    let vm = ApplyVm {
        submitted: params.contains_key("submitted"),
        error: None,
    };
    html_response(apply_page(&vm))
}

/// Validates the application form into a request ready to store.
pub fn validate(form: &QueryParams) -> Result<NewAffiliateRequest, ServerError> {
    let full_name = required(form, "full_name")?;
    let email = required(form, "email")?;
    let country = required(form, "country")?.to_ascii_uppercase();

    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(ServerError::BadRequest(format!("'{email}' is not a valid email")));
    }
    if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ServerError::BadRequest(
            "country must be a two-letter code".to_string(),
        ));
    }

    Ok(NewAffiliateRequest {
        full_name: full_name.to_string(),
        email: email.to_lowercase(),
        website: optional(form, "website").map(str::to_string),
        country,
        message: optional(form, "message").map(str::to_string),
    })
}

pub fn submit(app: &App, form: &QueryParams) -> ResultResp {
    let new = match validate(form) {
        Ok(new) => new,
        Err(ServerError::BadRequest(msg)) => {
            warn!(error = %msg, "rejected affiliate application");
            let vm = ApplyVm {
                submitted: false,
                error: Some(msg),
            };
            return html_response(apply_page(&vm));
        }
        Err(e) => return Err(e),
    };

    let id = app.db.with_conn(|conn| insert_request(conn, &new, now()))?;
    info!(request_id = id, email = %new.email, "affiliate application received");

    redirect("/apply?submitted=1")
}
