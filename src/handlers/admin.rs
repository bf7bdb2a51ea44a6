// Admin listings and their status updates.
use crate::db::affiliate_requests::{list_requests, review_request};
use crate::db::affiliates::count_affiliates;
use crate::db::commissions::{list_commissions, transition_commission};
use crate::db::payouts::{list_payouts, transition_payout};
use crate::db::tickets::{list_tickets, transition_ticket};
use crate::domain::affiliate_request::RequestStatus;
use crate::domain::commission::CommissionStatus;
use crate::domain::payout::PayoutStatus;
use crate::domain::ticket::TicketStatus;
use crate::errors::ServerError;
use crate::handlers::{now, required};
use crate::responses::redirect::safe_return_to;
use crate::responses::{html_response, json_response, redirect, ResultResp};
use crate::router::App;
use crate::spreadsheets::{export_table_xlsx, ExportRow};
use crate::table::{QueryParams, RecordStatus, SortField, TableRecord, TableView};
use crate::templates::pages::admin::TableSummary;
use crate::templates::pages::affiliate_requests::request_tone;
use crate::templates::pages::commissions::commission_tone;
use crate::templates::pages::payouts::payout_tone;
use crate::templates::pages::tickets::ticket_tone;
use crate::templates::pages::{
    admin_page, affiliate_requests_page, commissions_page, payouts_page, tickets_page, AdminVm,
};
use rusqlite::Connection;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTable {
    Commissions,
    Payouts,
    AffiliateRequests,
    Tickets,
}

impl AdminTable {
    pub fn from_segment(segment: &str) -> Result<Self, ServerError> {
        match segment {
            "commissions" => Ok(Self::Commissions),
            "payouts" => Ok(Self::Payouts),
            "affiliate-requests" => Ok(Self::AffiliateRequests),
            "tickets" => Ok(Self::Tickets),
            _ => Err(ServerError::NotFound),
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Commissions => "commissions",
            Self::Payouts => "payouts",
            Self::AffiliateRequests => "affiliate-requests",
            Self::Tickets => "tickets",
        }
    }

    pub fn path(&self) -> String {
        format!("/admin/{}", self.slug())
    }
}

/// The JSON shape of one table page.
#[derive(Serialize)]
pub struct PageSnapshot<'a, R: Serialize> {
    pub rows: Vec<&'a R>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub items_per_page: usize,
    pub sort: &'static str,
    pub dir: &'static str,
}

impl<'a, R: TableRecord + Serialize> PageSnapshot<'a, R> {
    pub fn from_view(view: &'a TableView<R>) -> Self {
        let sort = view.sort();
        Self {
            rows: view.visible_rows(),
            page: view.current_page(),
            total_pages: view.total_pages(),
            filtered_count: view.filtered_count(),
            items_per_page: view.items_per_page(),
            sort: sort.field.as_str(),
            dir: sort.direction.as_str(),
        }
    }
}

fn load_view<R: TableRecord>(
    app: &App,
    params: &QueryParams,
    list: fn(&Connection) -> Result<Vec<R>, ServerError>,
) -> Result<TableView<R>, ServerError> {
    let records = app.db.with_conn(|conn| list(conn))?;
    Ok(TableView::from_params(records, params, app.config.table.options()))
}

pub fn overview(app: &App) -> ResultResp {
    let (affiliates, commissions, payouts, requests, tickets) = app.db.with_conn(|conn| {
        Ok((
            count_affiliates(conn)?,
            list_commissions(conn)?,
            list_payouts(conn)?,
            list_requests(conn)?,
            list_tickets(conn)?,
        ))
    })?;

    let pending_commissions_cents = commissions
        .iter()
        .filter(|c| c.status == CommissionStatus::Pending)
        .map(|c| c.amount_cents)
        .sum();
    let open_payouts_cents = payouts
        .iter()
        .filter(|p| !p.status.is_final())
        .map(|p| p.amount_cents)
        .sum();

    let vm = AdminVm {
        affiliates,
        pending_commissions_cents,
        open_payouts_cents,
        tables: vec![
            TableSummary::from_records("Commissions", "/admin/commissions", &commissions, commission_tone),
            TableSummary::from_records("Payouts", "/admin/payouts", &payouts, payout_tone),
            TableSummary::from_records(
                "Applications",
                "/admin/affiliate-requests",
                &requests,
                request_tone,
            ),
            TableSummary::from_records("Tickets", "/admin/tickets", &tickets, ticket_tone),
        ],
    };

    html_response(admin_page(&vm))
}

pub fn table_page(app: &App, table: AdminTable, params: &QueryParams) -> ResultResp {
    let markup = match table {
        AdminTable::Commissions => commissions_page(&load_view(app, params, list_commissions)?),
        AdminTable::Payouts => payouts_page(&load_view(app, params, list_payouts)?),
        AdminTable::AffiliateRequests => {
            affiliate_requests_page(&load_view(app, params, list_requests)?)
        }
        AdminTable::Tickets => tickets_page(&load_view(app, params, list_tickets)?),
    };
    html_response(markup)
}

fn export_view<R: TableRecord + ExportRow>(view: &TableView<R>, table: AdminTable) -> ResultResp {
    let rows = view.sorted_rows();
    info!(table = table.slug(), rows = rows.len(), "exporting table");
    export_table_xlsx(&rows, &format!("{}.xlsx", table.slug()))
}

pub fn export(app: &App, table: AdminTable, params: &QueryParams) -> ResultResp {
    match table {
        AdminTable::Commissions => export_view(&load_view(app, params, list_commissions)?, table),
        AdminTable::Payouts => export_view(&load_view(app, params, list_payouts)?, table),
        AdminTable::AffiliateRequests => {
            export_view(&load_view(app, params, list_requests)?, table)
        }
        AdminTable::Tickets => export_view(&load_view(app, params, list_tickets)?, table),
    }
}

pub fn api_page(app: &App, table: AdminTable, params: &QueryParams) -> ResultResp {
    match table {
        AdminTable::Commissions => {
            json_response(&PageSnapshot::from_view(&load_view(app, params, list_commissions)?))
        }
        AdminTable::Payouts => {
            json_response(&PageSnapshot::from_view(&load_view(app, params, list_payouts)?))
        }
        AdminTable::AffiliateRequests => {
            json_response(&PageSnapshot::from_view(&load_view(app, params, list_requests)?))
        }
        AdminTable::Tickets => {
            json_response(&PageSnapshot::from_view(&load_view(app, params, list_tickets)?))
        }
    }
}

pub fn update_status(app: &App, table: AdminTable, id: i64, form: &QueryParams) -> ResultResp {
    let raw = required(form, "status")?;

    let (from, to) = match table {
        AdminTable::Commissions => {
            let next: CommissionStatus = raw.parse()?;
            let previous = app.db.with_conn(|conn| transition_commission(conn, id, next))?;
            (previous.as_str(), next.as_str())
        }
        AdminTable::Payouts => {
            let next: PayoutStatus = raw.parse()?;
            let previous = app.db.with_conn(|conn| transition_payout(conn, id, next, now()))?;
            (previous.as_str(), next.as_str())
        }
        AdminTable::AffiliateRequests => {
            let next: RequestStatus = raw.parse()?;
            // Only pending applications can be reviewed.
            app.db.with_conn(|conn| review_request(conn, id, next, now()))?;
            (RequestStatus::Pending.as_str(), next.as_str())
        }
        AdminTable::Tickets => {
            let next: TicketStatus = raw.parse()?;
            let previous = app.db.with_conn(|conn| transition_ticket(conn, id, next, now()))?;
            (previous.as_str(), next.as_str())
        }
    };

    info!(table = table.slug(), id, from, to, "status updated");

    let fallback = table.path();
    redirect(safe_return_to(form.get("return_to").map(String::as_str), &fallback))
}
