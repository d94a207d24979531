use approx::assert_relative_eq;

use crate::{Action, Bracket, Convergence, Status, observers::Recorder};

use super::{Config, Error, Event, refine, refine_unobserved, solve, solve_observed};

fn square_minus_two(x: f64) -> f64 {
    x * x - 2.0
}

fn atan_line(x: f64) -> f64 {
    2.0 * x.atan() - 3.0 * x + 2.0
}

fn sine_line(x: f64) -> f64 {
    5.67 * (4.794 * x).sin() - 4.55 * x
}

fn bracket(left: f64, right: f64) -> Bracket {
    Bracket::new(left, right).expect("valid bracket")
}

fn config(eps: f64) -> Config {
    Config::new(Convergence::new(eps).expect("valid tolerance"), 0).expect("valid config")
}

#[test]
fn finds_square_root() {
    let estimate =
        refine_unobserved(&square_minus_two, bracket(1.0, 2.0), &config(1e-12)).expect("converges");

    assert_eq!(estimate.status, Status::Converged);
    assert_eq!(estimate.iters, 40);
    assert_relative_eq!(estimate.x, 2.0_f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(estimate.root, 1.0);
}

#[test]
fn reports_integer_root_by_default() {
    let estimate =
        refine_unobserved(&atan_line, bracket(1.268, 1.269), &Config::default()).expect("converges");

    assert_eq!(estimate.iters, 40);
    assert_relative_eq!(estimate.x, 1.268_912_074_651_667_3, epsilon = 1e-15);
    assert_eq!(estimate.rounded().to_string(), "1");
}

#[test]
fn iteration_count_follows_halving() {
    let width: f64 = 0.001;
    let eps = 1e-15;
    let expected = (width / eps).log2().ceil() as usize;

    let estimate =
        refine_unobserved(&sine_line, bracket(0.558, 0.559), &Config::default()).expect("converges");

    assert!(
        (expected - 1..=expected + 1).contains(&estimate.iters),
        "{} iterations, expected about {expected}",
        estimate.iters
    );
}

#[test]
fn custom_digits() {
    let config = Config::new(Convergence::new(1e-3).expect("valid tolerance"), 3).expect("valid");
    let estimate = refine_unobserved(&|x: f64| x - 0.3, bracket(0.0, 1.0), &config).expect("converges");

    assert_eq!(estimate.iters, 10);
    assert_relative_eq!(estimate.x, 0.300_292_968_75);
    assert_relative_eq!(estimate.root, 0.3);
}

#[test]
fn zero_at_left_bound_moves_left_every_time() {
    // sine_line(-0.0) is exactly zero, so every product is zero and the left
    // bound walks all the way to the right bound.
    let estimate =
        refine_unobserved(&sine_line, bracket(-0.0, 0.001), &Config::default()).expect("converges");

    assert_eq!(estimate.iters, 40);
    assert_relative_eq!(estimate.x, 0.001, epsilon = 1e-15);
    assert_eq!(estimate.rounded().to_string(), "0");
}

#[test]
fn bracket_contains_root_at_every_step() {
    let root = 2.0_f64.sqrt();
    let mut recorder = Recorder::<Event>::new();

    let estimate = refine(&square_minus_two, bracket(1.0, 2.0), &config(1e-12), &mut recorder)
        .expect("converges");

    let events = recorder.events();
    assert_eq!(events.len(), estimate.iters);

    let mut width = 1.0;
    for (index, event) in events.iter().enumerate() {
        assert_eq!(event.iter, index + 1);
        assert!(event.left <= root && root <= event.right, "lost root at {event:?}");
        assert!(event.right - event.left < width);
        width = event.right - event.left;
    }
}

#[test]
fn observer_can_stop_iteration() {
    let mut calls = 0;
    let mut observer = |event: &Event| {
        calls += 1;
        (event.iter >= 3).then_some(Action::StopEarly)
    };

    let estimate = refine(&square_minus_two, bracket(1.0, 2.0), &config(1e-12), &mut observer)
        .expect("stops cleanly");

    assert_eq!(estimate.status, Status::StoppedByObserver);
    assert_eq!(estimate.iters, 3);
    assert_eq!(calls, 3);
    // Brackets after three steps: [1, 1.5], [1.25, 1.5], [1.375, 1.5].
    assert_relative_eq!(estimate.x, 1.4375);
}

#[test]
fn zero_width_bracket_needs_no_iterations() {
    let estimate =
        refine_unobserved(&square_minus_two, bracket(1.5, 1.5), &Config::default()).expect("no loop");

    assert_eq!(estimate.iters, 0);
    assert_relative_eq!(estimate.x, 1.5);
}

#[test]
fn errors_when_cap_reached() {
    let convergence = Convergence::new(1e-12).expect("valid tolerance").with_max_iters(10);
    let config = Config::new(convergence, 0).expect("valid config");

    let result = refine_unobserved(&square_minus_two, bracket(1.0, 2.0), &config);

    assert!(matches!(result, Err(Error::MaxIters { iters: 10, .. })));
}

#[test]
fn cap_equal_to_needed_iterations_converges() {
    let convergence = Convergence::new(1e-12).expect("valid tolerance").with_max_iters(40);
    let config = Config::new(convergence, 0).expect("valid config");

    let estimate = refine_unobserved(&square_minus_two, bracket(1.0, 2.0), &config).expect("converges");

    assert_eq!(estimate.iters, 40);
}

#[test]
fn is_deterministic() {
    let first = refine_unobserved(&atan_line, bracket(1.268, 1.269), &Config::default());
    let second = refine_unobserved(&atan_line, bracket(1.268, 1.269), &Config::default());
    assert_eq!(first, second);
}

#[test]
fn solve_keeps_bracket_order() {
    let brackets = [bracket(1.0, 2.0), bracket(-2.0, -1.0)];

    let results = solve(&square_minus_two, &brackets, &config(1e-12));

    assert_eq!(results.len(), 2);
    for (result, bracket) in results.iter().zip(brackets) {
        let estimate = result.as_ref().expect("converges");
        assert_eq!(estimate.bracket, bracket);
    }
    assert_relative_eq!(results[0].as_ref().expect("converges").root, 1.0);
    assert_relative_eq!(results[1].as_ref().expect("converges").root, -1.0);
}

#[test]
fn solve_isolates_failures() {
    let convergence = Convergence::new(1e-3).expect("valid tolerance").with_max_iters(5);
    let config = Config::new(convergence, 2).expect("valid config");
    let brackets = [bracket(1.0, 2.0), bracket(1.41, 1.42)];

    let results = solve(&square_minus_two, &brackets, &config);

    assert!(matches!(results[0], Err(Error::MaxIters { iters: 5, .. })));
    let estimate = results[1].as_ref().expect("narrow bracket converges");
    assert_eq!(estimate.iters, 4);
    assert_relative_eq!(estimate.root, 1.41);
}

#[test]
fn solve_observed_sees_every_bracket() {
    let brackets = [bracket(1.0, 2.0), bracket(-2.0, -1.0)];
    let mut recorder = Recorder::<Event>::new();

    let results = solve_observed(&square_minus_two, &brackets, &config(1e-3), &mut recorder);

    assert!(results.iter().all(Result::is_ok));
    let first = recorder.events().iter().filter(|e| e.bracket == brackets[0]).count();
    let second = recorder.events().iter().filter(|e| e.bracket == brackets[1]).count();
    assert_eq!(first, 10);
    assert_eq!(second, 10);
}

#[test]
fn empty_input_gives_empty_output() {
    assert!(solve(&square_minus_two, &[], &Config::default()).is_empty());
}
