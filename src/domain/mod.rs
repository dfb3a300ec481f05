pub mod filters;
pub mod pagination;
pub mod price;
pub mod view_state;

pub use filters::{ProjectFilters, PropertyFilters};
pub use pagination::{page_numbers, PageEntry, PageSlice};
pub use view_state::{MountState, NavigationSnapshot, ScreenState, ViewMode};
