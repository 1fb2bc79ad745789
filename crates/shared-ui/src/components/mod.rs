// Building blocks
pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_select;

// Layout & navigation
pub mod nav_main;
pub mod sidebar;

// Dashboard widgets; depend on the building blocks above
pub mod coverage_map;
pub mod regional_performance;
pub mod stat_card;

// Re-exports for convenience
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use coverage_map::*;
pub use data_table::*;
pub use form_select::*;
pub use nav_main::*;
pub use regional_performance::*;
pub use sidebar::*;
pub use stat_card::*;
