use crate::config::AppConfig;
use crate::db::Database;
use crate::errors::ServerError;
use crate::handlers::admin::{self, AdminTable};
use crate::handlers::{account, apply, parse_id, query_params, read_form};
use crate::responses::{error_to_response, html_response};
use crate::responses::ResultResp;
use crate::templates;
use astra::{Request, Response};
use tracing::{debug, error, warn};

/// Everything a request handler needs.
#[derive(Debug, Clone)]
pub struct App {
    pub db: Database,
    pub config: AppConfig,
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let params = query_params(&req);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    debug!(%method, %path, "handling request");

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => html_response(templates::pages::home_page()),

        ("GET", ["admin"]) => admin::overview(app),
        ("GET", ["admin", table]) => {
            admin::table_page(app, AdminTable::from_segment(table)?, &params)
        }
        ("GET", ["admin", table, "export.xlsx"]) => {
            admin::export(app, AdminTable::from_segment(table)?, &params)
        }
        ("POST", ["admin", table, id, "status"]) => {
            let table = AdminTable::from_segment(table)?;
            let id = parse_id(id)?;
            admin::update_status(app, table, id, &read_form(req)?)
        }
        ("GET", ["api", table]) => admin::api_page(app, AdminTable::from_segment(table)?, &params),

        ("GET", ["affiliates", id]) => account::show(app, parse_id(id)?, &params),
        ("POST", ["affiliates", id, "payouts"]) => {
            let id = parse_id(id)?;
            account::request_payout(app, id, &read_form(req)?)
        }
        ("POST", ["affiliates", id, "tickets"]) => {
            let id = parse_id(id)?;
            account::open_ticket(app, id, &read_form(req)?)
        }

        ("GET", ["apply"]) => apply::form(&params),
        ("POST", ["apply"]) => apply::submit(app, &read_form(req)?),

        _ => Err(ServerError::NotFound),
    }
}

/// Runs [`handle`] and turns any error into its HTML error page, logging
/// server faults at `error` and client mistakes at `warn`.
pub fn respond(req: Request, app: &App) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status_code() >= 500 {
                error!(%method, %path, error = %err, "request failed");
            } else {
                warn!(%method, %path, error = %err, "request rejected");
            }
            error_to_response(err)
        }
    }
}
