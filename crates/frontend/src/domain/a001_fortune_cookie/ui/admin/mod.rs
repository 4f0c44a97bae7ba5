//! Fortune Cookie Admin UI Module
//!
//! MVVM split:
//! - model.rs: remote client (list, create, delete)
//! - state.rs: screen state and its transitions
//! - view_model.rs: flows and commands
//! - view.rs / cells.rs: Leptos components (pure UI)

mod cells;
pub mod model;
pub mod state;
mod view;
pub mod view_model;

pub use model::{FortuneApi, FortuneApiError, HttpFortuneApi};
pub use view::FortuneCookieAdmin;
pub use view_model::FortuneAdminViewModel;
