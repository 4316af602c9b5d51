//! Plain-text report for the one-shot `predict` command.

use crate::presentation::view_models::{IndicatorColor, ResultScreenViewModel};
use owo_colors::OwoColorize;
use std::fmt::Write;

fn paint(text: &str, color: IndicatorColor, colored: bool) -> String {
    if !colored {
        return text.to_string();
    }
    match color {
        IndicatorColor::Good => text.green().to_string(),
        IndicatorColor::Caution => text.yellow().to_string(),
        IndicatorColor::Warning => text.red().to_string(),
        IndicatorColor::Neutral => text.dimmed().to_string(),
    }
}

pub fn render_report(vm: &ResultScreenViewModel, colored: bool) -> String {
    let mut out = String::new();

    let header = format!("Predictions for {}", vm.profile.restaurant_name);
    if colored {
        let _ = writeln!(out, "{}", header.bold());
    } else {
        let _ = writeln!(out, "{}", header);
    }
    let _ = writeln!(
        out,
        "  {} cuisine · {} · {} · established {}",
        vm.profile.cuisine, vm.profile.location, vm.profile.city, vm.profile.established
    );
    let _ = writeln!(out);

    let stars: String = vm
        .feedback
        .slots
        .iter()
        .map(|slot| paint("★", *slot, colored))
        .collect();
    let _ = writeln!(
        out,
        "Feedback   {}  {}",
        stars,
        paint(&vm.feedback.label, vm.feedback.color, colored)
    );

    match vm.success.percent {
        Some(percent) => {
            let value = format!("{:.1}%", percent);
            let _ = write!(out, "Success    {}", paint(&value, vm.success.color, colored));
            if let Some(sales) = vm.success.sales_prediction {
                let _ = write!(out, "  (est. revenue {:.0})", sales);
            }
            let _ = writeln!(out);
        }
        None => {
            let _ = writeln!(out, "Success    no data");
        }
    }

    match vm.rating.value {
        Some(value) => {
            let _ = writeln!(out, "Rating     {:.2} / {:.0}", value, vm.rating.scale_max);
        }
        None => {
            let _ = writeln!(out, "Rating     no data");
        }
    }

    if !vm.city.bars.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Best cities:");
        for bar in &vm.city.bars {
            let _ = writeln!(out, "  {:<14} {:5.1}%", bar.label, bar.percent);
        }
    }

    if !vm.month.bars.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Best months:");
        for bar in &vm.month.bars {
            let _ = writeln!(out, "  {:<14} {:5.1}%", bar.label, bar.percent);
        }
    }

    if let Some(text) = &vm.insight.text {
        let _ = writeln!(out);
        let _ = writeln!(out, "Insight:");
        let _ = writeln!(out, "  {}", text);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::map_response;
    use chrono::NaiveDate;
    use platesight_types::{BusinessProfile, CityScore, FeedbackLabel, UnifiedResponse};

    fn fixture() -> ResultScreenViewModel {
        let profile = BusinessProfile {
            restaurant_name: "Test".to_string(),
            cuisine: "Italian".to_string(),
            location: "X".to_string(),
            city: "Y".to_string(),
            sales_amount: 100.0,
            sales_quantity: 10.0,
            established: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            rating: 4.0,
        };
        let response = UnifiedResponse {
            feedback_prediction: Some(FeedbackLabel::Excellent),
            rating_prediction: Some(4.2),
            success_probability: Some(87.5),
            sales_prediction: Some(152000.0),
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
            month_breakdown: vec![],
            insight: Some("Strong launch window in October.".to_string()),
        };
        map_response(&profile, &response)
    }

    #[test]
    fn uncolored_report_contains_every_section() {
        let report = render_report(&fixture(), false);

        assert!(report.contains("Predictions for Test"));
        assert!(report.contains("★★★  Excellent Feedback"));
        assert!(report.contains("Success    87.5%  (est. revenue 152000)"));
        assert!(report.contains("Rating     4.20 / 5"));
        assert!(report.contains("Strong launch window in October."));

        // Cities sorted by probability, best first.
        let chennai = report.find("Chennai").unwrap();
        let delhi = report.find("Delhi").unwrap();
        assert!(chennai < delhi);
    }

    #[test]
    fn uncolored_report_has_no_escape_codes() {
        let report = render_report(&fixture(), false);
        assert!(!report.contains('\u{1b}'));
    }

    #[test]
    fn missing_fields_render_placeholders_without_panicking() {
        let profile = BusinessProfile {
            restaurant_name: "Test".to_string(),
            cuisine: "Italian".to_string(),
            location: "X".to_string(),
            city: "Y".to_string(),
            sales_amount: 100.0,
            sales_quantity: 10.0,
            established: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            rating: 4.0,
        };
        let vm = map_response(&profile, &UnifiedResponse::default());
        let report = render_report(&vm, false);

        assert!(report.contains("Success    no data"));
        assert!(report.contains("Rating     no data"));
        assert!(report.contains("No Prediction"));
    }
}
