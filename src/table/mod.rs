//! Client-side table model shared by every admin listing:
//! filter → sort → paginate over an already-loaded snapshot.

pub mod query;
pub mod record;
pub mod state;
pub mod view;

pub use query::{parse_query_string, QueryParams};
pub use record::{RecordStatus, SortField, SortKey, TableRecord};
pub use state::{SortState, StatusFilter, TableOptions, DEFAULT_ITEMS_PER_PAGE};
pub use view::TableView;
