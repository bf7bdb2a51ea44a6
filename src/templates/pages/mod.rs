pub mod account;
pub mod admin;
pub mod affiliate_requests;
pub mod apply;
pub mod commissions;
pub mod home;
pub mod payouts;
pub mod tickets;

pub use account::{account_page, AccountVm};
pub use admin::{admin_page, AdminVm};
pub use affiliate_requests::affiliate_requests_page;
pub use apply::{apply_page, ApplyVm};
pub use commissions::commissions_page;
pub use home::home_page;
pub use payouts::payouts_page;
pub use tickets::tickets_page;
