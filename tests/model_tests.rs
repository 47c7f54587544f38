//! End-to-end tests through the `Model` facade.

mod common;

use approx::assert_relative_eq;
use statmodel::model::FittedModel;
use statmodel::optimize::{MinimizeResult, Minimizer, Objective};
use statmodel::{FitOptions, Model, ModelState, ObservationSet, RegressionError, RegressionType};

fn sorted_names(model: &Model<impl Minimizer>) -> Vec<String> {
    let mut names: Vec<String> = model.results().names().map(String::from).collect();
    names.sort();
    names
}

#[test]
fn test_logit_end_to_end() {
    let mut model = Model::new(common::survey_observations(), "logit");
    let results = model.fit().expect("logit fit should succeed");

    assert_eq!(results.regression_type(), Some(RegressionType::Logit));
    assert_eq!(results.len(), 4);
    for (name, entry) in results.iter() {
        assert!(entry.coefficient.is_finite(), "{} coefficient", name);
        assert!(entry.standard_error.is_finite(), "{} standard error", name);
        assert!(entry.test_statistic.is_finite(), "{} z", name);
        assert!((0.0..=1.0).contains(&entry.p_value), "{} p-value", name);
    }

    assert_eq!(sorted_names(&model), vec!["age", "educ", "intercept", "sex"]);
    assert_eq!(model.state(), ModelState::Fit(RegressionType::Logit));

    let age = model.results().get("age").expect("age entry");
    assert_relative_eq!(age.coefficient, 0.0568695, epsilon = 1e-3);

    let text = model.summary().to_string();
    assert!(text.contains("z_stat"));
    assert!(!text.contains("t_stat"));
    assert!(text.contains("Pseudo R-squared"));
}

#[test]
fn test_ols_end_to_end() {
    let mut model = Model::new(common::survey_observations_continuous(), "OLS");
    model.fit().expect("ols fit should succeed");

    assert_eq!(sorted_names(&model), vec!["age", "educ", "intercept", "sex"]);
    for (_, entry) in model.results().iter() {
        assert!(entry.coefficient.is_finite());
        assert!((0.0..=1.0).contains(&entry.p_value));
    }

    match model.fitted() {
        Some(FittedModel::Ols(fitted)) => {
            assert_eq!(fitted.residual_df(), 12);
            assert!(fitted.r_squared > 0.5);
        }
        other => panic!("expected an OLS fit, got {:?}", other),
    }

    let text = model.summary().to_string();
    assert!(text.contains("t_stat"));
    assert!(!text.contains("z_stat"));
}

#[test]
fn test_refit_is_idempotent() {
    let mut model = Model::new(common::survey_observations(), "logit");
    let first: Vec<(String, u64, u64)> = model
        .fit()
        .unwrap()
        .iter()
        .map(|(name, e)| (name.to_string(), e.coefficient.to_bits(), e.p_value.to_bits()))
        .collect();
    let second: Vec<(String, u64, u64)> = model
        .fit()
        .unwrap()
        .iter()
        .map(|(name, e)| (name.to_string(), e.coefficient.to_bits(), e.p_value.to_bits()))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_unknown_regression_type() {
    for selector in ["probio", "probit", ""] {
        let mut model = Model::new(common::survey_observations(), selector);
        match model.fit() {
            Err(RegressionError::InvalidRegressionType(name)) => assert_eq!(name, selector),
            other => panic!("expected InvalidRegressionType, got {:?}", other.map(|r| r.len())),
        }
        assert!(model.results().is_empty());
        assert_eq!(model.state(), ModelState::Failed);
    }
}

#[test]
fn test_switching_regression_type() {
    let mut model = Model::new(common::survey_observations(), "logit");
    model.fit().unwrap();
    let logit_age = model.results().get("age").unwrap().coefficient;

    model.set_regression_type("ols");
    model.fit().unwrap();

    assert_eq!(model.results().regression_type(), Some(RegressionType::Ols));
    assert_eq!(model.regression_type(), "ols");
    // Linear probability slope differs from the log-odds slope
    let ols_age = model.results().get("age").unwrap().coefficient;
    assert!((ols_age - logit_age).abs() > 1e-6);
}

#[test]
fn test_failed_fit_clears_previous_results() {
    let mut model = Model::new(common::survey_observations_continuous(), "ols");
    model.fit().unwrap();
    assert!(!model.results().is_empty());

    // The continuous response is not 0/1
    model.set_regression_type("logit");
    assert!(matches!(
        model.fit(),
        Err(RegressionError::NonBinaryResponse { .. })
    ));
    assert!(model.results().is_empty());
    assert!(model.fitted().is_none());
    assert_eq!(model.summary().to_string(), "model has not been fit\n");
}

#[test]
fn test_intercept_name_collision() {
    let data = ObservationSet::from_columns(
        vec![("x", vec![1.0, 2.0, 3.0, 4.0]), ("intercept", vec![0.0, 1.0, 0.0, 1.0])],
        vec![1.0, 2.0, 2.5, 4.5],
    )
    .unwrap();

    let mut model = Model::new(data.clone(), "ols");
    assert!(matches!(
        model.fit(),
        Err(RegressionError::ReservedColumnName(_))
    ));

    // Without an appended intercept the name is an ordinary feature
    let mut model = Model::new(data, "ols").with_intercept(false);
    model.fit().expect("fit without intercept");
    assert_eq!(sorted_names(&model), vec!["intercept", "x"]);
}

#[test]
fn test_too_few_observations() {
    let data = ObservationSet::from_columns(
        vec![("a", vec![1.0, 2.0, 3.0]), ("b", vec![0.5, 0.1, 0.9])],
        vec![1.0, 0.0, 1.0],
    )
    .unwrap();

    for selector in ["ols", "logit"] {
        let mut model = Model::new(data.clone(), selector);
        assert!(matches!(
            model.fit(),
            Err(RegressionError::DegenerateDesign {
                observations: 3,
                parameters: 3
            })
        ));
    }
}

#[test]
fn test_custom_minimizer_is_used_for_logit() {
    struct Stalled;

    impl Minimizer for Stalled {
        fn minimize<O: Objective>(
            &self,
            objective: &O,
            x0: &[f64],
        ) -> Result<MinimizeResult, RegressionError> {
            Ok(MinimizeResult {
                x: x0.to_vec(),
                fun: objective.value(x0),
                success: false,
                message: "stalled".to_string(),
                iterations: 0,
            })
        }
    }

    let mut model = Model::new(common::survey_observations(), "logit").with_minimizer(Stalled);
    assert!(matches!(
        model.fit(),
        Err(RegressionError::OptimizationFailure { .. })
    ));

    // OLS never consults the minimizer
    model.set_regression_type("ols");
    assert!(model.fit().is_ok());
}

#[test]
fn test_options_propagate_to_results() {
    let options = FitOptions::builder().confidence_level(0.99).build().unwrap();
    let mut model = Model::with_options(common::survey_observations_continuous(), "ols", options);
    model.fit().unwrap();

    let result = model.fitted().unwrap().result();
    assert_relative_eq!(result.confidence_level, 0.99);
    for j in 0..result.n_parameters {
        assert!(result.conf_interval_lower[j] < result.coefficients[j]);
        assert!(result.conf_interval_upper[j] > result.coefficients[j]);
    }
}
