pub mod card;
pub mod filter_panel;
pub mod pager;

pub use card::{
    area_unit, project_card_list, project_card_tile, property_card_list, property_card_tile,
};
pub use filter_panel::{project_filter_panel, property_filter_panel};
pub use pager::{pager, results_summary};
