pub mod control;
pub mod error;
pub mod pagination_state;
pub mod selection_state;
pub mod sort_state;
pub mod table_state;


pub use control::Concern;
pub use error::TableError;
pub use pagination_state::{PageItem, PaginationState};
pub use selection_state::{SelectAllStatus, SelectionState};
pub use sort_state::{ColumnSort, SortDirection, SortState};
pub use table_state::{Column, PageView, RenderInput, Row, TableCoordinator};
