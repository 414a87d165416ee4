//! First-class invariants for game history.
//!
//! Invariants are logical properties that must hold after every operation.
//! They are testable independently and back the postconditions in
//! [`contracts`](crate::contracts).

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Joins violation descriptions into one message.
pub fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not only the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 4-tuples
impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod closed_line;
pub mod cursor_in_bounds;
pub mod root_is_empty;
pub mod single_step;

pub use closed_line::ClosedLineInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use root_is_empty::RootIsEmptyInvariant;
pub use single_step::SingleStepInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    RootIsEmptyInvariant,
    CursorInBoundsInvariant,
    SingleStepInvariant,
    ClosedLineInvariant,
);
