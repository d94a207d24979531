/// Control actions an observer can return to a refiner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop refining and report the current iterate.
    ///
    /// The estimate is finalized exactly as on convergence, but carries
    /// [`Status::StoppedByObserver`](crate::Status::StoppedByObserver).
    StopEarly,
}
