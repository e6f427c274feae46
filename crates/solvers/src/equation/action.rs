/// Control actions an observer can return to any of the root finders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the iterate computed in this step.
    StopEarly,
}
