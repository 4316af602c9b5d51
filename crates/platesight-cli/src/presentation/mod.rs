pub mod form;
pub mod gate;
pub mod mapper;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use form::FormState;
pub use gate::{ActiveTab, SubmissionGate};
pub use mapper::map_response;
pub use view_models::{
    BreakdownBar, BreakdownViewModel, FeedbackViewModel, IndicatorColor, InsightViewModel,
    ProfileSummaryViewModel, RatingViewModel, ResultScreenViewModel, SuccessViewModel,
};
