pub mod empty_state;
pub mod page_header;

pub use empty_state::EmptyState;
pub use page_header::PageHeader;
