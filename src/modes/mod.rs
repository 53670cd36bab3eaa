pub mod auto;
pub mod autopilot;
pub mod human;

pub use auto::{AutoMode, AutoSummary};
pub use human::HumanMode;
