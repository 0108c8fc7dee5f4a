//! Client-side dashboard: cached collections, dialogs, and the
//! fetch-then-patch protocol that keeps them in step with the backend.

mod controller;
mod state;
pub mod view;

pub use controller::Dashboard;
pub use state::Action;
pub use view::{DashboardView, PaymentPreview};
