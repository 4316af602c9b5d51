//! Wire schema for the prediction service.
//!
//! Request key names are the service's own spelling (including the
//! historical `Resturant_Name`), pinned with serde renames so the Rust side
//! can use normal field names.

use crate::label::FeedbackLabel;
use crate::profile::BusinessProfile;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Body for `POST /predict/feedback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    #[serde(rename = "Resturant_Name")]
    pub restaurant_name: String,
    #[serde(rename = "Cuisine")]
    pub cuisine: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "City")]
    pub city: String,
}

impl From<&BusinessProfile> for FeedbackRequest {
    fn from(profile: &BusinessProfile) -> Self {
        Self {
            restaurant_name: profile.restaurant_name.clone(),
            cuisine: profile.cuisine.clone(),
            location: profile.location.clone(),
            city: profile.city.clone(),
        }
    }
}

/// Body for `POST /predict/unified`.
///
/// The establishment date travels decomposed into `year` and `month`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedRequest {
    pub year: i32,
    pub month: u32,
    pub sales_qty: f64,
    pub sales_amount: f64,
    #[serde(rename = "Ratings")]
    pub ratings: f64,
    #[serde(rename = "Resturant_Name")]
    pub restaurant_name: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Cuisine")]
    pub cuisine: String,
    #[serde(rename = "Location")]
    pub location: String,
}

impl From<&BusinessProfile> for UnifiedRequest {
    fn from(profile: &BusinessProfile) -> Self {
        Self {
            year: profile.established.year(),
            month: profile.established.month(),
            sales_qty: profile.sales_quantity,
            sales_amount: profile.sales_amount,
            ratings: profile.rating,
            restaurant_name: profile.restaurant_name.clone(),
            city: profile.city.clone(),
            cuisine: profile.cuisine.clone(),
            location: profile.location.clone(),
        }
    }
}

/// Response of `POST /predict/feedback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub feedback_prediction: FeedbackLabel,
}

/// One city's share of the predicted market fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityScore {
    pub city: String,
    pub probability: f64,
}

/// One calendar month's predicted launch strength.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthScore {
    pub month: u32,
    pub probability: f64,
}

/// Response of `POST /predict/unified`.
///
/// Every field is optional on the wire: a widget whose field is absent
/// degrades on its own without failing the decode for its siblings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnifiedResponse {
    #[serde(default)]
    pub feedback_prediction: Option<FeedbackLabel>,
    #[serde(default)]
    pub rating_prediction: Option<f64>,
    #[serde(default)]
    pub success_probability: Option<f64>,
    #[serde(default)]
    pub sales_prediction: Option<f64>,
    #[serde(default)]
    pub city_breakdown: Vec<CityScore>,
    #[serde(default)]
    pub month_breakdown: Vec<MonthScore>,
    #[serde(default)]
    pub insight: Option<String>,
}
