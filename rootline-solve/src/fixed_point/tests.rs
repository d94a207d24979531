use approx::assert_relative_eq;

use rootline_core::{Differentiable, FunctionPair};

use crate::{Action, Bracket, Convergence, Status, Step, observers::Recorder, scan};

use super::{Config, Error, Event, refine, refine_unobserved, solve, solve_observed};

fn square_minus_two() -> impl Differentiable {
    FunctionPair::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x)
}

fn sine_line() -> impl Differentiable {
    FunctionPair::new(
        |x: f64| 5.67 * (4.794 * x).sin() - 4.55 * x,
        |x: f64| 27.18198 * (4.794 * x).cos() - 4.55,
    )
}

/// `f(x) = x` paired with a constant "derivative" that sets the multiplier.
fn identity_with_slope(slope: f64) -> impl Differentiable {
    FunctionPair::new(|x: f64| x, move |_: f64| slope)
}

fn bracket(left: f64, right: f64) -> Bracket {
    Bracket::new(left, right).expect("valid bracket")
}

fn config(eps: f64) -> Config {
    Config::new(Convergence::new(eps).expect("valid tolerance"), 0, Step::BOUND_SCAN)
        .expect("valid config")
}

fn capped(max_iters: usize) -> Config {
    Config::new(Convergence::default().with_max_iters(max_iters), 0, Step::BOUND_SCAN)
        .expect("valid config")
}

#[test]
fn finds_square_root() {
    let estimate =
        refine_unobserved(&square_minus_two(), bracket(1.0, 2.0), &config(1e-12)).expect("converges");

    assert_eq!(estimate.status, Status::Converged);
    assert_eq!(estimate.iters, 22);
    assert_relative_eq!(estimate.x, 2.0_f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(estimate.root, 1.0);
}

#[test]
fn narrower_bracket_gives_better_multiplier() {
    let estimate =
        refine_unobserved(&square_minus_two(), bracket(1.4, 1.5), &config(1e-12)).expect("converges");

    assert_eq!(estimate.iters, 10);
    assert_relative_eq!(estimate.x, 2.0_f64.sqrt(), epsilon = 1e-14);
}

#[test]
fn multiplier_uses_slope_at_right_bound_only() {
    // The derivative is largest at the left bound of this bracket, but the
    // bound scan runs right-to-left and never leaves the right bound.
    let pair = sine_line();
    let bracket = bracket(0.558, 0.559);
    let mut recorder = Recorder::<Event>::new();

    refine(&pair, bracket, &Config::default(), &mut recorder).expect("converges");

    let expected = 1.0 / pair.derivative(bracket.right());
    assert!(!recorder.events().is_empty());
    for event in recorder.events() {
        assert_eq!(event.mul, expected);
    }
    assert!(pair.derivative(bracket.left()) > pair.derivative(bracket.right()));
}

#[test]
fn reproduces_reference_results() {
    let brackets = [
        bracket(-0.559, -0.558),
        bracket(-0.0, 0.001),
        bracket(0.558, 0.559),
    ];

    let results = solve(&sine_line(), &brackets, &Config::default());

    let summary: Vec<(String, usize)> = results
        .iter()
        .map(|result| {
            let estimate = result.as_ref().expect("converges");
            (estimate.rounded().to_string(), estimate.iters)
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("-1".to_string(), 5),
            ("0".to_string(), 4),
            ("1".to_string(), 5)
        ]
    );
    assert_relative_eq!(
        results[0].as_ref().expect("converges").x,
        -0.558_397_461_076_928_7,
        epsilon = 1e-15
    );
}

#[test]
fn diverging_map_hits_cap() {
    // mul = 2.5 gives g(x) = -1.5x, which moves away from the root at 0.
    let result = refine_unobserved(&identity_with_slope(0.4), bracket(-0.3, 0.5), &capped(100));

    assert!(matches!(result, Err(Error::MaxIters { iters: 100, .. })));
}

#[test]
fn cycling_map_hits_cap() {
    // mul = 2 gives g(x) = -x: the iterates flip sign forever.
    let result = refine_unobserved(&identity_with_slope(0.5), bracket(-0.3, 0.5), &capped(25));

    match result {
        Err(Error::MaxIters { iters, x }) => {
            assert_eq!(iters, 25);
            assert_relative_eq!(x.abs(), 0.1, epsilon = 1e-15);
        }
        other => panic!("expected MaxIters, got {other:?}"),
    }
}

#[test]
fn diverging_map_without_cap_overflows() {
    let result = refine_unobserved(&identity_with_slope(0.4), bracket(-0.3, 0.5), &Config::default());

    assert!(matches!(result, Err(Error::NonFiniteIterate { .. })));
}

#[test]
fn zero_bound_is_an_error() {
    let bracket = bracket(-1.0, 0.0);
    let result = refine_unobserved(&square_minus_two(), bracket, &Config::default());

    assert_eq!(result, Err(Error::ZeroDerivativeBound { bracket }));
}

#[test]
fn nan_derivative_bound_is_an_error() {
    let pair = FunctionPair::new(|x: f64| x - 0.5, |_: f64| f64::NAN);
    let result = refine_unobserved(&pair, bracket(0.0, 1.0), &Config::default());

    assert_eq!(result, Err(Error::Scan(scan::Error::NanSample { x: 1.0 })));
}

#[test]
fn observer_can_stop_iteration() {
    let mut observer = |event: &Event| (event.iter == 2).then_some(Action::StopEarly);

    let estimate = refine(&square_minus_two(), bracket(1.0, 2.0), &config(1e-12), &mut observer)
        .expect("stops cleanly");

    assert_eq!(estimate.status, Status::StoppedByObserver);
    assert_eq!(estimate.iters, 2);
    assert_relative_eq!(estimate.x, 1.416_160_345_077_514_6);
}

#[test]
fn solve_isolates_failures() {
    let brackets = [bracket(-1.0, 0.0), bracket(1.0, 2.0)];
    let mut recorder = Recorder::<Event>::new();

    let results = solve_observed(&square_minus_two(), &brackets, &config(1e-12), &mut recorder);

    assert!(matches!(results[0], Err(Error::ZeroDerivativeBound { .. })));
    assert_eq!(results[1].as_ref().expect("converges").iters, 22);
    assert!(recorder.events().iter().all(|event| event.bracket == brackets[1]));
}
