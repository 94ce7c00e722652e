use approx::assert_relative_eq;
use thiserror::Error;

use rootfind_core::Fallible;

use crate::Status;

use super::{Action, Config, Error, Event, Mode, solve, solve_unobserved};

#[derive(Debug, Error)]
#[error("undefined")]
struct Undefined;

/// Babylonian step for x² = 4.
fn babylonian(x: f64) -> f64 {
    (x + 4.0 / x) / 2.0
}

fn config(tol: f64, max_iters: usize, mode: Mode) -> Config {
    Config::new(tol, max_iters, mode).expect("valid config")
}

#[test]
fn standard_converges_to_square_root() {
    let solution =
        solve_unobserved(&babylonian, 3.0, &config(1e-8, 100, Mode::Standard)).expect("solves");

    assert_eq!(solution.trace.status(), Status::Converged);
    assert_eq!(solution.trace.len(), 5);
    assert_relative_eq!(solution.root().unwrap(), 2.0, epsilon = 1e-12);
    assert!(solution.trace.last().unwrap().error < 1e-8);
}

#[test]
fn standard_records_absolute_steps() {
    let solution =
        solve_unobserved(&babylonian, 3.0, &config(1e-8, 100, Mode::Standard)).expect("solves");
    let first = solution.trace.records()[0];

    assert_eq!(first.iter, 1);
    assert_relative_eq!(first.x, 13.0 / 6.0);
    assert_relative_eq!(first.error, 5.0 / 6.0, epsilon = 1e-12);
}

#[test]
fn standard_points_start_at_seed() {
    let solution =
        solve_unobserved(&babylonian, 3.0, &config(1e-8, 100, Mode::Standard)).expect("solves");

    assert_eq!(solution.points.len(), solution.trace.len() + 1);
    assert_relative_eq!(solution.points[0], 3.0);
    for (record, point) in solution.trace.iter().zip(&solution.points[1..]) {
        assert_relative_eq!(record.x, *point);
    }
}

#[test]
fn aitken_needs_no_more_iterations_than_standard() {
    for (g, x0, tol) in [
        (babylonian as fn(f64) -> f64, 3.0, 1e-8),
        (f64::cos as fn(f64) -> f64, 1.0, 1e-10),
    ] {
        let standard = solve_unobserved(&g, x0, &config(tol, 200, Mode::Standard)).unwrap();
        let aitken = solve_unobserved(&g, x0, &config(tol, 200, Mode::Aitken)).unwrap();

        assert!(!aitken.trace.is_empty());
        assert!(aitken.trace.len() <= standard.trace.len());
        assert_relative_eq!(
            aitken.root().unwrap(),
            standard.root().unwrap(),
            epsilon = 1e-8
        );
    }
}

#[test]
fn aitken_accelerates_linear_convergence() {
    let standard = solve_unobserved(&f64::cos, 1.0, &config(1e-10, 200, Mode::Standard)).unwrap();
    let aitken = solve_unobserved(&f64::cos, 1.0, &config(1e-10, 200, Mode::Aitken)).unwrap();

    assert_eq!(standard.trace.len(), 58);
    assert_eq!(aitken.trace.len(), 4);
    assert_eq!(aitken.trace.status(), Status::Converged);
    assert_relative_eq!(aitken.root().unwrap(), 0.739_085_133_215_160_7, epsilon = 1e-12);
}

#[test]
fn aitken_keeps_both_intermediate_points() {
    let solution = solve_unobserved(&f64::cos, 1.0, &config(1e-10, 200, Mode::Aitken)).unwrap();

    assert_eq!(solution.points.len(), 1 + 2 * solution.trace.len());
    assert_relative_eq!(solution.points[1], 1.0_f64.cos());
    assert_relative_eq!(solution.points[2], 1.0_f64.cos().cos());
}

#[test]
fn aitken_stops_on_collinear_iterates_with_partial_trace() {
    // Aitken is exact for an affine map, so the second outer step starts at
    // the fixed point and sees three equal iterates.
    let g = |x: f64| 0.5 * x + 1.0;

    let solution = solve_unobserved(&g, 0.0, &config(1e-8, 50, Mode::Aitken)).expect("no error");

    assert_eq!(solution.trace.status(), Status::Degenerate);
    assert_eq!(solution.trace.len(), 1);
    assert_relative_eq!(solution.root().unwrap(), 2.0);
    assert_eq!(solution.points, vec![0.0, 1.0, 1.5, 2.0, 2.0]);
}

#[test]
fn aitken_translation_is_degenerate_from_the_start() {
    let g = |x: f64| x + 1.0;

    let solution = solve_unobserved(&g, 0.0, &config(1e-8, 50, Mode::Aitken)).expect("no error");

    assert_eq!(solution.trace.status(), Status::Degenerate);
    assert!(solution.trace.is_empty());
    assert!(solution.root().is_none());
    assert_eq!(solution.points, vec![0.0, 1.0, 2.0]);
}

#[test]
fn divergent_map_exhausts_iterations() {
    let g = |x: f64| 2.0 * x + 1.0;

    let solution = solve_unobserved(&g, 1.0, &config(1e-8, 20, Mode::Standard)).unwrap();

    assert_eq!(solution.trace.status(), Status::MaxIters);
    assert_eq!(solution.trace.len(), 20);
    let errors: Vec<f64> = solution.trace.iter().map(|r| r.error).collect();
    assert!(errors.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn overflowing_iterate_is_flagged_as_diverged() {
    let g = |x: f64| x * x;

    let solution = solve_unobserved(&g, 10.0, &config(1e-8, 100, Mode::Standard)).unwrap();

    assert_eq!(solution.trace.status(), Status::Diverged);
    assert!(solution.trace.len() < 100);
    assert!(solution.root().unwrap().is_infinite());
}

#[test]
fn observer_sees_step_points_and_can_stop() {
    let mut seen = Vec::new();
    let observer = |event: &Event<'_>| {
        seen.push(event.points.to_vec());
        (event.record.iter == 2).then_some(Action::StopEarly)
    };

    let solution = solve(&f64::cos, 1.0, &config(1e-12, 100, Mode::Aitken), observer).unwrap();

    assert_eq!(solution.trace.status(), Status::StoppedByObserver);
    assert_eq!(solution.trace.len(), 2);
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|points| points.len() == 2));
}

#[test]
fn residual_checks_original_equation() {
    let f = |x: f64| x * x - 4.0;

    let solution =
        solve_unobserved(&babylonian, 3.0, &config(1e-8, 100, Mode::Standard)).unwrap();

    let residual = solution.residual(&f).expect("has root").expect("f defined");
    assert!(residual.abs() < 1e-10);
}

#[test]
fn evaluation_failure_is_reported() {
    let g = Fallible(|x: f64| if x > 0.0 { Ok(x.ln()) } else { Err(Undefined) });

    // ln(0.5) < 0, so the second step leaves the domain.
    let result = solve_unobserved(&g, 0.5, &config(1e-8, 10, Mode::Standard));

    assert!(matches!(result, Err(Error::Function { .. })));
}
