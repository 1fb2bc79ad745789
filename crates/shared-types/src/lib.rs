pub mod config;
pub mod count_up;
pub mod error;
pub mod expand;
pub mod format;
pub mod geo;
pub mod nav;
pub mod region;

pub use config::*;
pub use count_up::CountUp;
pub use error::*;
pub use expand::ExpandState;
pub use geo::*;
pub use nav::{MatchPolicy, NavIcon, NavItem, NavNode, NavPath, NavTree};
pub use region::*;
