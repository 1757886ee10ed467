//! Reusable UI components.

mod active_filters;
mod filter_tags;
mod project_card;
mod project_grid;
mod search_bar;

pub use active_filters::ActiveFilters;
pub use filter_tags::FilterTags;
pub use project_card::ProjectCard;
pub use project_grid::ProjectGrid;
pub use search_bar::SearchBar;
