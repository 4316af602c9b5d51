mod tui;

pub use tui::{DashboardApp, FetchEvent, PendingFetch};
