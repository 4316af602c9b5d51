//! Ratatui widgets for the dashboard.
//!
//! Each view wraps a ViewModel reference and implements `Widget`; the
//! renderer composes them into the screen. Views never compute domain
//! values, they only draw what the mapper already decided.

mod breakdown;
mod feedback;
mod form;
mod insight;
mod profile;
mod promo;
mod rating;
mod success;

pub use breakdown::BreakdownView;
pub use feedback::FeedbackView;
pub use form::FormView;
pub use insight::InsightView;
pub use profile::ProfileSummaryView;
pub use promo::PromoView;
pub use rating::RatingView;
pub use success::SuccessView;

use crate::presentation::view_models::IndicatorColor;
use ratatui::style::Color;

/// Palette decision for the terminal renderer.
pub(crate) fn indicator_color(color: IndicatorColor) -> Color {
    match color {
        IndicatorColor::Good => Color::Green,
        IndicatorColor::Caution => Color::Yellow,
        IndicatorColor::Warning => Color::LightRed,
        IndicatorColor::Neutral => Color::DarkGray,
    }
}
