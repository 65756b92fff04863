//! Artwork Picker Common Library
//!
//! CLIとWeb(WASM)で共有される型と選択ロジック

pub mod types;
pub mod error;
pub mod paging;
pub mod selection;
pub mod count;
pub mod sort;
pub mod source;
pub mod bulk;
pub mod view;

pub use types::{Artwork, ArtworkPage, Pagination};
pub use error::{Error, Result};
pub use paging::{PageState, PAGE_SIZE, offset_for_page, page_for_offset, total_pages};
pub use selection::Selection;
pub use count::parse_select_count;
pub use sort::{SortField, SortOrder, SortState};
pub use source::{PageSource, DEFAULT_BASE_URL, page_url, parse_page_response};
pub use bulk::{BulkRequest, CancelToken, collect_first};
pub use view::{ArtworkView, BulkOutcome, Diagnostic, DiagnosticKind, FetchTicket, NO_SELECTION_MESSAGE};
