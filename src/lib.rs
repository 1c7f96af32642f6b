pub mod ai;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod settings;
pub mod state;

pub use error::{DinnerError, Result};
pub use models::{Diner, DinnerType, Recipe, WeeklyPlan};
