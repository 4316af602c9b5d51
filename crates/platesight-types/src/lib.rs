pub mod label;
pub mod profile;
pub mod wire;

pub use label::FeedbackLabel;
pub use profile::{BusinessProfile, Field, FieldError, FieldErrorKind, ProfileDraft};
pub use wire::{
    CityScore, FeedbackRequest, FeedbackResponse, MonthScore, UnifiedRequest, UnifiedResponse,
};
