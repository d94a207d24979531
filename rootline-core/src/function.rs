/// A real-valued function of one real variable.
///
/// Solvers only ever call [`Function::call`], so any `Fn(f64) -> f64`
/// closure or function item works out of the box.
pub trait Function {
    /// Evaluates the function at `x`.
    fn call(&self, x: f64) -> f64;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn call(&self, x: f64) -> f64 {
        self(x)
    }
}

/// A [`Function`] with a known analytic derivative.
///
/// Required by solvers that step along the slope (Newton) or size their step
/// from it (fixed-point iteration).
pub trait Differentiable: Function {
    /// Evaluates the derivative at `x`.
    fn derivative(&self, x: f64) -> f64;
}

/// A function paired with its hand-written derivative.
///
/// Nothing checks that `derivative_fn` really is the derivative of
/// `value_fn`; a mismatched pair simply steers the solvers wrong.
#[derive(Debug, Clone, Copy)]
pub struct FunctionPair<F, D> {
    pub value_fn: F,
    pub derivative_fn: D,
}

impl<F, D> FunctionPair<F, D>
where
    F: Function,
    D: Function,
{
    /// Pairs a function with its derivative.
    pub fn new(value_fn: F, derivative_fn: D) -> Self {
        Self {
            value_fn,
            derivative_fn,
        }
    }
}

impl<F, D> Function for FunctionPair<F, D>
where
    F: Function,
    D: Function,
{
    fn call(&self, x: f64) -> f64 {
        self.value_fn.call(x)
    }
}

impl<F, D> Differentiable for FunctionPair<F, D>
where
    F: Function,
    D: Function,
{
    fn derivative(&self, x: f64) -> f64 {
        self.derivative_fn.call(x)
    }
}
