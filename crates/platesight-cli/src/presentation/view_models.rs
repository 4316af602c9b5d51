//! ViewModels for the result screen.
//!
//! These define the complete data contract between the mapper and the
//! widgets: primitive values and already-made color decisions only, no
//! domain logic. The same structs back the TUI widgets, the plain-text
//! report, and `predict --format json`.

use serde::Serialize;

/// Color decision for an indicator, named by meaning rather than hue so
/// each renderer picks its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorColor {
    Good,
    Caution,
    Warning,
    Neutral,
}

/// Feedback indicator: three slots filled left-to-right by label rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackViewModel {
    pub label: String,
    pub color: IndicatorColor,
    pub slots: [IndicatorColor; 3],
}

/// Success likelihood gauge, with the predicted revenue as a secondary line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuccessViewModel {
    /// 0..=100, None when the service omitted the field.
    pub percent: Option<f64>,
    pub color: IndicatorColor,
    pub sales_prediction: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingViewModel {
    /// Predicted rating clamped to the scale, None when absent.
    pub value: Option<f64>,
    pub scale_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownBar {
    pub label: String,
    pub percent: f64,
}

/// Bar list for the city and month breakdown widgets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownViewModel {
    pub bars: Vec<BreakdownBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightViewModel {
    pub text: Option<String>,
}

/// Echo of the submitted profile shown alongside the predictions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummaryViewModel {
    pub restaurant_name: String,
    pub cuisine: String,
    pub location: String,
    pub city: String,
    pub established: String,
    pub sales_amount: f64,
    pub sales_quantity: f64,
    pub rating: f64,
}

/// Everything the result screen renders, derived in one pass from a single
/// response object. Widgets consume their own slice independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultScreenViewModel {
    pub profile: ProfileSummaryViewModel,
    pub feedback: FeedbackViewModel,
    pub success: SuccessViewModel,
    pub rating: RatingViewModel,
    pub city: BreakdownViewModel,
    pub month: BreakdownViewModel,
    pub insight: InsightViewModel,
}
