//! tests for the accelerated false-position family
use approx::assert_relative_eq;
use rhiza::bracketing::algorithms::BracketAlgorithm;
use rhiza::bracketing::config::BracketOptions;
use rhiza::bracketing::errors::BracketingError;
use rhiza::bracketing::false_position::false_position;
use rhiza::bracketing::reduction::ReductionFactor;
use rhiza::bracketing::report::Convergence;
use rhiza::bracketing::solve::solve_with_tracks;
use rhiza::bracketing::tracks::Tracks;

type TestResult = Result<(), BracketingError>;

fn opts_for(factor: ReductionFactor) -> BracketOptions {
    BracketOptions::for_algorithm(BracketAlgorithm::FalsePosition(factor))
}

#[test]
fn illinois_finds_quintic_root() -> TestResult {
    let f = |x: f64| x.powi(5) - x - 1.0;
    let factor = ReductionFactor::ILLINOIS;
    let res = false_position(factor, f, 1.0, 2.0, opts_for(factor))?;

    assert_relative_eq!(res.root, 1.1673039782614187, max_relative = 1e-12);
    assert_eq!(res.algorithm, "false_position");
    Ok(())
}

#[test]
fn every_reduction_factor_converges() -> TestResult {
    let f = |x: f64| x * x * x - 2.0 * x - 5.0;
    for id in 1..=12u8 {
        let factor = ReductionFactor::from_id(id).unwrap();
        let res = false_position(factor, f, 2.0, 3.0, opts_for(factor))?;
        assert!(
            (res.root - 2.0945514815423265).abs() < 1e-9,
            "factor {id} stalled at {} after {} steps",
            res.root,
            res.steps
        );
    }
    Ok(())
}

#[test]
fn anderson_bjorck_beats_stagnation_on_convex_function() -> TestResult {
    // convex across the bracket, the classical pathology for regula falsi
    let f = |x: f64| x * x - 2.0;
    let factor = ReductionFactor::ANDERSON_BJORCK;
    let res = false_position(factor, f, 0.0, 2.0, opts_for(factor).with_xatol(1e-12))?;

    assert_eq!(res.convergence, Convergence::XConverged);
    assert!((res.root - 2.0_f64.sqrt()).abs() < 1e-10);
    assert!(res.steps < 100);
    Ok(())
}

#[test]
fn named_factors_resolve_to_table_entries() {
    assert_eq!(ReductionFactor::PEGASUS.id(), 1);
    assert_eq!(ReductionFactor::ILLINOIS.id(), 8);
    assert_eq!(ReductionFactor::ANDERSON_BJORCK.id(), 12);
    assert_eq!(ReductionFactor::default(), ReductionFactor::ANDERSON_BJORCK);

    assert_eq!(ReductionFactor::from_id(8), Some(ReductionFactor::ILLINOIS));
    assert_eq!(ReductionFactor::from_id(0), None);
    assert_eq!(ReductionFactor::from_id(13), None);
}

#[test]
fn exact_zero_trial_is_accepted_immediately() -> TestResult {
    // first trial: lambda = 2/3, x = 2 - (2/3)*3 = 0
    let f = |x: f64| x;
    let factor = ReductionFactor::default();
    let res = false_position(factor, f, -1.0, 2.0, opts_for(factor))?;

    assert_eq!(res.convergence, Convergence::FConverged);
    assert_eq!(res.root, 0.0);
    assert_eq!(res.fnevals, 3);
    Ok(())
}

#[test]
fn endpoint_root_converges_without_iterating() -> TestResult {
    let f = |x: f64| x - 2.0;
    let factor = ReductionFactor::default();
    let res = false_position(factor, f, 2.0, 5.0, opts_for(factor))?;

    assert_eq!(res.convergence, Convergence::FConverged);
    assert_eq!(res.root, 2.0);
    assert_eq!(res.steps, 0);
    Ok(())
}

#[test]
fn sign_change_rotates_former_right_endpoint_into_left() -> TestResult {
    // first trial: lambda = 0.5, x = 1, f(1) = -1 flips sign, so the old
    // right endpoint (2) becomes the retained left endpoint
    let f = |x: f64| x * x - 2.0;
    let factor = ReductionFactor::ILLINOIS;
    let mut tracks = Tracks::new();
    let res = solve_with_tracks(
        BracketAlgorithm::FalsePosition(factor),
        f,
        0.0,
        2.0,
        opts_for(factor).with_maxevals(1),
        &mut tracks,
    )?;

    assert_eq!(res.convergence, Convergence::Stopped);
    assert_eq!(tracks.points()[1], (1.0, -1.0));
    assert_eq!(res.left, 2.0);
    Ok(())
}

#[test]
fn no_sign_change() {
    let f = |x: f64| x * x + 1.0;
    let factor = ReductionFactor::default();
    let err = false_position(factor, f, -1.0, 1.0, opts_for(factor)).unwrap_err();
    assert!(matches!(err, BracketingError::NoSignChange { a: -1.0, b: 1.0 }));
}

#[test]
fn nan_trial_degrades_gracefully() -> TestResult {
    let f = |x: f64| {
        if x < 0.4 {
            -1.0
        } else if x > 0.6 {
            1.0
        } else {
            f64::NAN
        }
    };
    let factor = ReductionFactor::default();
    let res = false_position(factor, f, 0.0, 1.0, opts_for(factor))?;

    assert_eq!(res.convergence, Convergence::Stopped);
    assert!(res.message.contains("NaN"));
    assert!(res.root >= 0.4 && res.root <= 0.6);
    Ok(())
}

#[test]
fn trace_records_trial_points() -> TestResult {
    let f = |x: f64| x.powi(5) - x - 1.0;
    let factor = ReductionFactor::ILLINOIS;
    let mut tracks = Tracks::new();
    solve_with_tracks(
        BracketAlgorithm::FalsePosition(factor),
        f,
        1.0,
        2.0,
        opts_for(factor),
        &mut tracks,
    )?;

    assert!(tracks.brackets().is_empty());
    assert!(tracks.points().len() > 1);
    for &(x, fx) in &tracks.points()[1..] {
        assert_eq!(f(x), fx);
    }
    Ok(())
}
