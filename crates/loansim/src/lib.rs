//! Terminal loan simulator
//!
//! A three-step wizard (birth date, loan amount and term, summary) on top of
//! [`loansim_core`], with light/dark themes and a saved in-progress session.

pub mod app;
pub mod components;
pub mod data;
pub mod logging;
pub mod report;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use data::DataDirectory;
pub use logging::init_logging;
pub use state::{AppState, Theme};
