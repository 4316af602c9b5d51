use assert_cmd::Command;
use predicates::prelude::*;

fn platesight() -> Command {
    let mut cmd = Command::cargo_bin("platesight").unwrap();
    // Keep tests hermetic from the developer's environment and config.
    cmd.env_remove("PLATESIGHT_API_URL");
    cmd
}

/// Full predict invocation with per-test overrides for single fields.
fn predict_args(sales_amount: &str, rating: &str) -> Vec<String> {
    [
        "predict",
        "--restaurant-name",
        "Test",
        "--cuisine",
        "Italian",
        "--location",
        "X",
        "--city",
        "Y",
        "--sales-amount",
        sales_amount,
        "--sales-quantity",
        "10",
        "--established",
        "2020-01-01",
        "--rating",
        rating,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[test]
fn help_lists_the_commands() {
    platesight()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("predict"));
}

#[test]
fn predict_without_fields_reports_every_missing_field() {
    platesight()
        .arg("predict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Restaurant Name is required"))
        .stderr(predicate::str::contains("Cuisine is required"))
        .stderr(predicate::str::contains("Location is required"))
        .stderr(predicate::str::contains("City is required"))
        .stderr(predicate::str::contains("Sales Amount is required"))
        .stderr(predicate::str::contains("Sales Quantity is required"))
        .stderr(predicate::str::contains("Date of Establishment is required"))
        .stderr(predicate::str::contains("Rating is required"))
        .stderr(predicate::str::contains("validation failed"));
}

#[test]
fn predict_with_out_of_range_rating_is_blocked() {
    platesight()
        .args(predict_args("100", "9"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Rating must be between 0 and 5"));
}

#[test]
fn predict_with_negative_sales_is_blocked() {
    platesight()
        .args(predict_args("-5", "4"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Sales Amount must not be negative"));
}

#[test]
fn predict_without_a_configured_service_gives_guidance() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("missing.toml");

    platesight()
        .args(predict_args("100", "4"))
        .arg("--config")
        .arg(config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No prediction service configured"));
}

#[test]
fn predict_against_an_unreachable_service_reports_models_unavailable() {
    platesight()
        .args(predict_args("100", "4"))
        .args(["--api-url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("models unavailable"));
}
