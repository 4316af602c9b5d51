//! Pure response-to-view derivation.
//!
//! Everything here is a total, deterministic function of the decoded
//! response (plus the submitted profile for the summary widget). No state,
//! no I/O; the result screen recomputes this on every render.

use crate::presentation::view_models::{
    BreakdownBar, BreakdownViewModel, FeedbackViewModel, IndicatorColor, InsightViewModel,
    ProfileSummaryViewModel, RatingViewModel, ResultScreenViewModel, SuccessViewModel,
};
use platesight_types::{BusinessProfile, FeedbackLabel, UnifiedResponse};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn map_response(profile: &BusinessProfile, response: &UnifiedResponse) -> ResultScreenViewModel {
    ResultScreenViewModel {
        profile: map_profile(profile),
        feedback: map_feedback(response.feedback_prediction.as_ref()),
        success: map_success(response.success_probability, response.sales_prediction),
        rating: map_rating(response.rating_prediction),
        city: map_city_breakdown(response),
        month: map_month_breakdown(response),
        insight: InsightViewModel {
            text: response.insight.clone(),
        },
    }
}

fn map_profile(profile: &BusinessProfile) -> ProfileSummaryViewModel {
    ProfileSummaryViewModel {
        restaurant_name: profile.restaurant_name.clone(),
        cuisine: profile.cuisine.clone(),
        location: profile.location.clone(),
        city: profile.city.clone(),
        established: profile.established.format("%Y-%m-%d").to_string(),
        sales_amount: profile.sales_amount,
        sales_quantity: profile.sales_quantity,
        rating: profile.rating,
    }
}

/// Excellent -> Good, median -> Caution, poor -> Warning, anything else
/// (including a missing field) -> Neutral. Slots fill left-to-right by the
/// label's rank; unfilled slots stay Neutral regardless of the active color.
pub fn map_feedback(label: Option<&FeedbackLabel>) -> FeedbackViewModel {
    let color = match label {
        Some(FeedbackLabel::Excellent) => IndicatorColor::Good,
        Some(FeedbackLabel::Median) => IndicatorColor::Caution,
        Some(FeedbackLabel::Poor) => IndicatorColor::Warning,
        Some(FeedbackLabel::Unrecognized(_)) | None => IndicatorColor::Neutral,
    };
    let rank = label.map(FeedbackLabel::rank).unwrap_or(0);

    let mut slots = [IndicatorColor::Neutral; 3];
    for slot in slots.iter_mut().take(rank) {
        *slot = color;
    }

    FeedbackViewModel {
        label: label
            .map(FeedbackLabel::display_label)
            .unwrap_or_else(|| "No Prediction".to_string()),
        color,
        slots,
    }
}

pub fn map_success(percent: Option<f64>, sales_prediction: Option<f64>) -> SuccessViewModel {
    let percent = percent.map(|p| p.clamp(0.0, 100.0));
    let color = match percent {
        Some(p) if p >= 70.0 => IndicatorColor::Good,
        Some(p) if p >= 40.0 => IndicatorColor::Caution,
        Some(_) => IndicatorColor::Warning,
        None => IndicatorColor::Neutral,
    };
    SuccessViewModel {
        percent,
        color,
        sales_prediction,
    }
}

pub fn map_rating(value: Option<f64>) -> RatingViewModel {
    RatingViewModel {
        value: value.map(|v| v.clamp(0.0, 5.0)),
        scale_max: 5.0,
    }
}

/// Cities sorted by descending probability; the service's order is not
/// trusted.
fn map_city_breakdown(response: &UnifiedResponse) -> BreakdownViewModel {
    let mut bars: Vec<BreakdownBar> = response
        .city_breakdown
        .iter()
        .map(|score| BreakdownBar {
            label: score.city.clone(),
            percent: score.probability.clamp(0.0, 100.0),
        })
        .collect();
    bars.sort_by(|a, b| b.percent.total_cmp(&a.percent));
    BreakdownViewModel { bars }
}

/// Months in calendar order with named labels; an out-of-range month number
/// keeps a literal label instead of failing the widget.
fn map_month_breakdown(response: &UnifiedResponse) -> BreakdownViewModel {
    let mut scores = response.month_breakdown.clone();
    scores.sort_by_key(|score| score.month);

    let bars = scores
        .iter()
        .map(|score| BreakdownBar {
            label: month_name(score.month),
            percent: score.probability.clamp(0.0, 100.0),
        })
        .collect();
    BreakdownViewModel { bars }
}

fn month_name(month: u32) -> String {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize].to_string(),
        other => format!("M{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use platesight_types::{CityScore, MonthScore};

    fn profile() -> BusinessProfile {
        BusinessProfile {
            restaurant_name: "Test".to_string(),
            cuisine: "Italian".to_string(),
            location: "X".to_string(),
            city: "Y".to_string(),
            sales_amount: 100.0,
            sales_quantity: 10.0,
            established: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            rating: 4.0,
        }
    }

    #[test]
    fn excellent_fills_all_three_slots_with_good() {
        let vm = map_feedback(Some(&FeedbackLabel::Excellent));
        assert_eq!(vm.color, IndicatorColor::Good);
        assert_eq!(vm.slots, [IndicatorColor::Good; 3]);
        assert_eq!(vm.label, "Excellent Feedback");
    }

    #[test]
    fn median_fills_two_slots_with_caution() {
        let vm = map_feedback(Some(&FeedbackLabel::Median));
        assert_eq!(vm.color, IndicatorColor::Caution);
        assert_eq!(
            vm.slots,
            [
                IndicatorColor::Caution,
                IndicatorColor::Caution,
                IndicatorColor::Neutral
            ]
        );
        assert_eq!(vm.label, "Median Feedback");
    }

    #[test]
    fn poor_fills_one_slot_with_warning() {
        let vm = map_feedback(Some(&FeedbackLabel::Poor));
        assert_eq!(vm.color, IndicatorColor::Warning);
        assert_eq!(
            vm.slots,
            [
                IndicatorColor::Warning,
                IndicatorColor::Neutral,
                IndicatorColor::Neutral
            ]
        );
        assert_eq!(vm.label, "Poor Feedback");
    }

    #[test]
    fn unrecognized_labels_fall_back_to_neutral() {
        let label = FeedbackLabel::parse("unexpected value");
        let vm = map_feedback(Some(&label));
        assert_eq!(vm.color, IndicatorColor::Neutral);
        assert_eq!(vm.slots, [IndicatorColor::Neutral; 3]);
        assert_eq!(vm.label, "Unexpected Value");
    }

    #[test]
    fn missing_label_is_neutral_with_a_placeholder() {
        let vm = map_feedback(None);
        assert_eq!(vm.color, IndicatorColor::Neutral);
        assert_eq!(vm.slots, [IndicatorColor::Neutral; 3]);
        assert_eq!(vm.label, "No Prediction");
    }

    #[test]
    fn mapping_is_deterministic() {
        let response = UnifiedResponse {
            feedback_prediction: Some(FeedbackLabel::Excellent),
            success_probability: Some(87.5),
            ..UnifiedResponse::default()
        };
        let a = map_response(&profile(), &response);
        let b = map_response(&profile(), &response);
        assert_eq!(a, b);
    }

    #[test]
    fn success_bands_and_clamping() {
        assert_eq!(map_success(Some(87.5), None).color, IndicatorColor::Good);
        assert_eq!(map_success(Some(55.0), None).color, IndicatorColor::Caution);
        assert_eq!(map_success(Some(12.0), None).color, IndicatorColor::Warning);
        assert_eq!(map_success(None, None).color, IndicatorColor::Neutral);

        assert_eq!(map_success(Some(130.0), None).percent, Some(100.0));
        assert_eq!(map_success(Some(-5.0), None).percent, Some(0.0));
    }

    #[test]
    fn cities_are_sorted_by_descending_probability() {
        let response = UnifiedResponse {
            city_breakdown: vec![
                CityScore {
                    city: "Delhi".to_string(),
                    probability: 33.5,
                },
                CityScore {
                    city: "Chennai".to_string(),
                    probability: 41.0,
                },
            ],
            ..UnifiedResponse::default()
        };

        let vm = map_response(&profile(), &response);
        let labels: Vec<_> = vm.city.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Chennai", "Delhi"]);
    }

    #[test]
    fn months_are_named_and_in_calendar_order() {
        let response = UnifiedResponse {
            month_breakdown: vec![
                MonthScore {
                    month: 10,
                    probability: 14.5,
                },
                MonthScore {
                    month: 1,
                    probability: 8.0,
                },
                MonthScore {
                    month: 13,
                    probability: 2.0,
                },
            ],
            ..UnifiedResponse::default()
        };

        let vm = map_response(&profile(), &response);
        let labels: Vec<_> = vm.month.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Jan", "Oct", "M13"]);
    }

    #[test]
    fn a_missing_field_degrades_only_its_own_widget() {
        let response = UnifiedResponse {
            feedback_prediction: Some(FeedbackLabel::Median),
            ..UnifiedResponse::default()
        };

        let vm = map_response(&profile(), &response);
        assert_eq!(vm.feedback.color, IndicatorColor::Caution);
        assert_eq!(vm.success.percent, None);
        assert_eq!(vm.rating.value, None);
        assert!(vm.city.bars.is_empty());
        assert!(vm.month.bars.is_empty());
        assert_eq!(vm.insight.text, None);
    }

    #[test]
    fn documented_scenario_maps_to_three_green_slots() {
        let raw = serde_json::json!({ "feedback_prediction": "excellent feedback" });
        let response: UnifiedResponse = serde_json::from_value(raw).unwrap();

        let vm = map_response(&profile(), &response);
        assert_eq!(vm.feedback.slots, [IndicatorColor::Good; 3]);
        assert_eq!(vm.feedback.label, "Excellent Feedback");
    }
}
