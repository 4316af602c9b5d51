use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated snapshot of the business attributes submitted for prediction.
///
/// Only [`ProfileDraft::validate`] produces one, so holding a
/// `BusinessProfile` means every field already passed its rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub restaurant_name: String,
    pub cuisine: String,
    pub location: String,
    pub city: String,
    pub sales_amount: f64,
    pub sales_quantity: f64,
    pub established: NaiveDate,
    pub rating: f64,
}

/// The closed set of form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    RestaurantName,
    Cuisine,
    Location,
    City,
    SalesAmount,
    SalesQuantity,
    Established,
    Rating,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::RestaurantName,
        Field::Cuisine,
        Field::Location,
        Field::City,
        Field::SalesAmount,
        Field::SalesQuantity,
        Field::Established,
        Field::Rating,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::RestaurantName => "Restaurant Name",
            Field::Cuisine => "Cuisine",
            Field::Location => "Location",
            Field::City => "City",
            Field::SalesAmount => "Sales Amount",
            Field::SalesQuantity => "Sales Quantity",
            Field::Established => "Date of Establishment",
            Field::Rating => "Rating",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldErrorKind {
    Missing,
    NotANumber,
    Negative,
    OutOfRange { min: f64, max: f64 },
    InvalidDate,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FieldErrorKind::Missing => write!(f, "{} is required", self.field),
            FieldErrorKind::NotANumber => write!(f, "{} must be a number", self.field),
            FieldErrorKind::Negative => write!(f, "{} must not be negative", self.field),
            FieldErrorKind::OutOfRange { min, max } => {
                write!(f, "{} must be between {} and {}", self.field, min, max)
            }
            FieldErrorKind::InvalidDate => {
                write!(f, "{} must be a date in YYYY-MM-DD form", self.field)
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Raw, unvalidated field edits as the user typed them.
///
/// Every field is a string so partially typed numbers and dates are held
/// verbatim; [`ProfileDraft::validate`] is the single place raw edits become
/// a [`BusinessProfile`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDraft {
    pub restaurant_name: String,
    pub cuisine: String,
    pub location: String,
    pub city: String,
    pub sales_amount: String,
    pub sales_quantity: String,
    pub established: String,
    pub rating: String,
}

impl ProfileDraft {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::RestaurantName => &self.restaurant_name,
            Field::Cuisine => &self.cuisine,
            Field::Location => &self.location,
            Field::City => &self.city,
            Field::SalesAmount => &self.sales_amount,
            Field::SalesQuantity => &self.sales_quantity,
            Field::Established => &self.established,
            Field::Rating => &self.rating,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::RestaurantName => &mut self.restaurant_name,
            Field::Cuisine => &mut self.cuisine,
            Field::Location => &mut self.location,
            Field::City => &mut self.city,
            Field::SalesAmount => &mut self.sales_amount,
            Field::SalesQuantity => &mut self.sales_quantity,
            Field::Established => &mut self.established,
            Field::Rating => &mut self.rating,
        }
    }

    /// Validate every field and build the immutable snapshot.
    ///
    /// Pure: reports all failing fields at once rather than stopping at the
    /// first, so the form can mark each offending input.
    pub fn validate(&self) -> Result<BusinessProfile, Vec<FieldError>> {
        let mut errors = Vec::new();

        let restaurant_name = require_text(&self.restaurant_name, Field::RestaurantName, &mut errors);
        let cuisine = require_text(&self.cuisine, Field::Cuisine, &mut errors);
        let location = require_text(&self.location, Field::Location, &mut errors);
        let city = require_text(&self.city, Field::City, &mut errors);

        let sales_amount = require_non_negative(&self.sales_amount, Field::SalesAmount, &mut errors);
        let sales_quantity =
            require_non_negative(&self.sales_quantity, Field::SalesQuantity, &mut errors);
        let rating = require_bounded(&self.rating, Field::Rating, 0.0, 5.0, &mut errors);
        let established = require_date(&self.established, Field::Established, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        // Unwraps below cannot fire: every accessor pushed an error on None
        // and the error path returned above.
        Ok(BusinessProfile {
            restaurant_name: restaurant_name.unwrap(),
            cuisine: cuisine.unwrap(),
            location: location.unwrap(),
            city: city.unwrap(),
            sales_amount: sales_amount.unwrap(),
            sales_quantity: sales_quantity.unwrap(),
            established: established.unwrap(),
            rating: rating.unwrap(),
        })
    }
}

fn require_text(raw: &str, field: Field, errors: &mut Vec<FieldError>) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(FieldError {
            field,
            kind: FieldErrorKind::Missing,
        });
        return None;
    }
    Some(trimmed.to_string())
}

fn parse_number(raw: &str, field: Field, errors: &mut Vec<FieldError>) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(FieldError {
            field,
            kind: FieldErrorKind::Missing,
        });
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            errors.push(FieldError {
                field,
                kind: FieldErrorKind::NotANumber,
            });
            None
        }
    }
}

fn require_non_negative(raw: &str, field: Field, errors: &mut Vec<FieldError>) -> Option<f64> {
    let value = parse_number(raw, field, errors)?;
    if value < 0.0 {
        errors.push(FieldError {
            field,
            kind: FieldErrorKind::Negative,
        });
        return None;
    }
    Some(value)
}

fn require_bounded(
    raw: &str,
    field: Field,
    min: f64,
    max: f64,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let value = parse_number(raw, field, errors)?;
    if value < min || value > max {
        errors.push(FieldError {
            field,
            kind: FieldErrorKind::OutOfRange { min, max },
        });
        return None;
    }
    Some(value)
}

fn require_date(raw: &str, field: Field, errors: &mut Vec<FieldError>) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(FieldError {
            field,
            kind: FieldErrorKind::Missing,
        });
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError {
                field,
                kind: FieldErrorKind::InvalidDate,
            });
            None
        }
    }
}
