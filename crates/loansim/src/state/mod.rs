mod app_state;
mod forms;
mod session;
mod steps;
mod submission;
mod theme;

// Re-export all types from submodules
pub use app_state::*;
pub use forms::*;
pub use session::*;
pub use steps::*;
pub use submission::*;
pub use theme::*;
