#[cfg(test)]
use mockall::automock;

use super::assignment::PartialAssignment;

/// Chooses where the model search branches next.
#[cfg_attr(test, automock)]
pub trait DecideHeuristic {
    /// Variable to branch on, or `None` once every variable is fixed.
    fn next_variable(&self, assignment: &PartialAssignment) -> Option<usize>;
    /// Order in which both polarities of `variable` are tried.
    fn polarity_order(&self, _variable: usize) -> [bool; 2] {
        [true, false]
    }
}

/// Lowest unassigned variable, `true` before `false`. This fixes the enumeration order.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowestIndexDecideHeuristic;

impl DecideHeuristic for LowestIndexDecideHeuristic {
    fn next_variable(&self, assignment: &PartialAssignment) -> Option<usize> {
        assignment.first_unassigned()
    }
}
