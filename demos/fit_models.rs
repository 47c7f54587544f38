//! # Fitting OLS and Logit Models
//!
//! Builds a small survey data set, fits a logistic regression of `white` on
//! sex, age and education, then an OLS regression of an income score on the
//! same features, and prints both coefficient tables.
//!
//! Set `RUST_LOG=debug` to see dispatch and optimizer progress.
//!
//! Run with: `cargo run --example fit_models`

use statmodel::prelude::*;

const SEX: [f64; 16] = [
    1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0,
];
const AGE: [f64; 16] = [
    30.0, 45.0, 52.0, 23.0, 38.0, 61.0, 27.0, 49.0, 56.0, 34.0, 42.0, 29.0, 64.0, 40.0, 33.0, 58.0,
];
const EDUC: [f64; 16] = [
    12.0, 16.0, 10.0, 14.0, 18.0, 12.0, 11.0, 13.0, 16.0, 12.0, 14.0, 17.0, 9.0, 15.0, 12.0, 11.0,
];
const WHITE: [f64; 16] = [
    1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0,
];

fn main() -> Result<(), RegressionError> {
    env_logger::init();

    println!("=== Logistic Regression ===\n");
    logit_model()?;

    println!("\n=== Ordinary Least Squares ===\n");
    ols_model()?;

    println!("\n=== Unknown Regression Type ===\n");
    unknown_type()?;

    Ok(())
}

fn features() -> Vec<(&'static str, Vec<f64>)> {
    vec![
        ("sex", SEX.to_vec()),
        ("age", AGE.to_vec()),
        ("educ", EDUC.to_vec()),
    ]
}

/// Logit of a binary response.
fn logit_model() -> Result<(), RegressionError> {
    let data = ObservationSet::from_columns(features(), WHITE.to_vec())?;
    let mut model = Model::new(data, "logit");
    model.fit()?;

    print!("{}", model.summary());

    if let Some(age) = model.results().get("age") {
        println!(
            "\nOne more year of age multiplies the odds by {:.4}",
            age.coefficient.exp()
        );
    }
    Ok(())
}

/// OLS of a continuous score on the same features.
fn ols_model() -> Result<(), RegressionError> {
    let score: Vec<f64> = (0..16)
        .map(|i| 5.0 + 2.0 * SEX[i] + 0.3 * AGE[i] + 1.5 * EDUC[i] + 0.5 * (i as f64 % 3.0 - 1.0))
        .collect();

    let options = FitOptions::builder().confidence_level(0.9).build()?;
    let data = ObservationSet::from_columns(features(), score)?;
    let mut model = Model::with_options(data, "ols", options);
    model.fit()?;

    print!("{}", model.summary());

    if let Some(FittedModel::Ols(fitted)) = model.fitted() {
        let result = fitted.result();
        println!("\n90% confidence intervals:");
        for (j, (name, _)) in model.results().iter().enumerate() {
            println!(
                "  {:<10} [{:>10.4}, {:>10.4}]",
                name, result.conf_interval_lower[j], result.conf_interval_upper[j]
            );
        }
    }
    Ok(())
}

/// An unknown selector fails at fit time and leaves no results.
fn unknown_type() -> Result<(), RegressionError> {
    let data = ObservationSet::from_columns(features(), WHITE.to_vec())?;
    let mut model = Model::new(data, "probit");

    match model.fit() {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("fit failed: {}", err),
    }
    println!("results empty: {}", model.results().is_empty());
    Ok(())
}
