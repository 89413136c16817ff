//! 2-SAT decision, model enumeration and filtering of spurious models.

pub mod assignment;
pub mod decide_heuristics;
pub mod engine;
pub mod enumerate;
pub mod filter;
pub mod graph;
pub mod literal;

use log::debug;

pub use assignment::PartialAssignment;
pub use decide_heuristics::{DecideHeuristic, LowestIndexDecideHeuristic};
pub use engine::Components;
pub use enumerate::ModelEnumerator;
pub use filter::{filter_and_project, ExclusionCondition};
pub use graph::ImplicationGraph;
pub use literal::Literal;

use crate::error::TwoSatError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub satisfiable: bool,
    /// Distinct models over the original variables, in enumeration order.
    pub models: Vec<Vec<bool>>,
}

/// Full pipeline: `solve` as a gate, then enumerate (bounded by `max_models`), drop models
/// matching an exclusion and project onto the first `num_original_vars` variables.
pub fn solve_and_filter(
    graph: &ImplicationGraph,
    exclusions: &[ExclusionCondition],
    num_original_vars: usize,
    max_models: Option<usize>,
) -> FilterOutcome {
    if let Err(TwoSatError::Unsat) = graph.solve() {
        debug!("implication graph is unsatisfiable, skipping enumeration");
        return FilterOutcome {
            satisfiable: false,
            models: Vec::new(),
        };
    }
    let mut models = graph.models(max_models);
    let (satisfiable, projected) =
        filter_and_project(models.by_ref(), exclusions, num_original_vars);
    debug!(
        "{} models enumerated, {} distinct after filtering",
        models.yielded(),
        projected.len()
    );
    FilterOutcome {
        satisfiable,
        models: projected,
    }
}
