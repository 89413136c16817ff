use std::iter::{once, FusedIterator};
use std::mem;

use log::trace;

use super::assignment::PartialAssignment;
use super::decide_heuristics::{DecideHeuristic, LowestIndexDecideHeuristic};
use super::graph::ImplicationGraph;
use super::literal::Literal;

/// Every literal reachable from `start`, in visiting order, or `None` as soon as a literal
/// and its negation are both reached.
pub fn propagate(
    graph: &ImplicationGraph,
    start: impl IntoIterator<Item = usize>,
) -> Option<Vec<usize>> {
    let mut reached = vec![false; graph.num_literals()];
    let mut order = Vec::new();
    let mut stack: Vec<usize> = start.into_iter().collect();
    while let Some(lit) = stack.pop() {
        if reached[lit] {
            continue;
        }
        if reached[lit ^ 1] {
            return None;
        }
        reached[lit] = true;
        order.push(lit);
        stack.extend(graph.successors(lit).iter().filter(|&&next| !reached[next]));
    }
    Some(order)
}

/// What a committed branch changed, so it can be put back exactly.
#[derive(Debug)]
struct Undo {
    newly_set: Vec<usize>,
    forced: Vec<usize>,
}

#[derive(Debug)]
struct Frame {
    variable: usize,
    polarities: [bool; 2],
    tried: usize,
    undo: Option<Undo>,
}

fn restore(assignment: &mut PartialAssignment, forced: &mut Vec<usize>, undo: Undo) {
    for variable in undo.newly_set {
        assignment.unset(variable);
    }
    *forced = undo.forced;
}

/// Lazy backtracking enumeration of the models of an implication graph.
///
/// Each branch fixes one more literal, closes the forced-literal set under the graph's
/// implications and prunes on contradiction. The recursion is kept on an explicit stack so
/// the search can stop at every model and resume where it left off.
pub struct ModelEnumerator<'g, H = LowestIndexDecideHeuristic> {
    graph: &'g ImplicationGraph,
    heuristic: H,
    assignment: PartialAssignment,
    forced: Vec<usize>,
    stack: Vec<Frame>,
    expand: bool,
    done: bool,
    yielded: usize,
    max_models: Option<usize>,
}

impl<'g> ModelEnumerator<'g> {
    pub fn new(graph: &'g ImplicationGraph, max_models: Option<usize>) -> Self {
        Self::with_heuristic(graph, LowestIndexDecideHeuristic, max_models)
    }
}

impl<'g, H: DecideHeuristic> ModelEnumerator<'g, H> {
    pub fn with_heuristic(
        graph: &'g ImplicationGraph,
        heuristic: H,
        max_models: Option<usize>,
    ) -> Self {
        ModelEnumerator {
            graph,
            heuristic,
            assignment: PartialAssignment::new(graph.num_vars()),
            forced: Vec::new(),
            stack: Vec::new(),
            expand: true,
            done: false,
            yielded: 0,
            max_models,
        }
    }

    pub fn yielded(&self) -> usize {
        self.yielded
    }

    /// Commits `variable = polarity` on top of the current state, or returns `None` if that
    /// contradicts what is already forced.
    fn try_branch(&mut self, variable: usize, polarity: bool) -> Option<Undo> {
        let lit = Literal::new(variable, polarity);
        let reached = propagate(
            self.graph,
            self.forced.iter().copied().chain(once(lit.index())),
        )?;

        // A consistent reached set holds at most one literal per variable.
        let implied: Vec<Literal> = reached.iter().map(|&l| Literal::from_index(l)).collect();
        if implied
            .iter()
            .any(|l| self.assignment.get(l.variable) == Some(!l.polarity))
        {
            trace!("{lit}: conflicts with outer assignment");
            return None;
        }

        let mut newly_set = Vec::new();
        for l in implied {
            if self.assignment.get(l.variable).is_none() {
                self.assignment.set(l.variable, l.polarity);
                newly_set.push(l.variable);
            }
        }
        trace!("{lit}: fixed {} variables", newly_set.len());
        Some(Undo {
            newly_set,
            forced: mem::replace(&mut self.forced, reached),
        })
    }

    fn emit(&mut self) -> Vec<bool> {
        let model = self.assignment.to_model();
        self.yielded += 1;
        if self.max_models.is_some_and(|max| self.yielded >= max) {
            trace!("reached {} models, stopping", self.yielded);
            self.done = true;
            self.unwind();
        }
        model
    }

    /// Pops every pending frame, undoing its branch, without touching the graph.
    fn unwind(&mut self) {
        while let Some(mut frame) = self.stack.pop() {
            if let Some(undo) = frame.undo.take() {
                restore(&mut self.assignment, &mut self.forced, undo);
            }
        }
    }
}

impl<H: DecideHeuristic> Iterator for ModelEnumerator<'_, H> {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Vec<bool>> {
        loop {
            if self.done {
                return None;
            }
            if self.expand {
                self.expand = false;
                match self.heuristic.next_variable(&self.assignment) {
                    Some(variable) => self.stack.push(Frame {
                        variable,
                        polarities: self.heuristic.polarity_order(variable),
                        tried: 0,
                        undo: None,
                    }),
                    None => return Some(self.emit()),
                }
            }

            let Some(frame) = self.stack.last_mut() else {
                self.done = true;
                return None;
            };
            if let Some(undo) = frame.undo.take() {
                restore(&mut self.assignment, &mut self.forced, undo);
            }
            let variable = frame.variable;
            let polarity = frame.polarities.get(frame.tried).copied();
            frame.tried += 1;

            match polarity {
                None => {
                    self.stack.pop();
                }
                Some(polarity) => {
                    if let Some(undo) = self.try_branch(variable, polarity) {
                        if let Some(frame) = self.stack.last_mut() {
                            frame.undo = Some(undo);
                        }
                        self.expand = true;
                    }
                }
            }
        }
    }
}

impl<H: DecideHeuristic> FusedIterator for ModelEnumerator<'_, H> {}

impl ImplicationGraph {
    /// Lazily enumerates models, stopping after `max_models` if given. The bound is checked
    /// after each model, so even a bound of 0 lets the first one through.
    ///
    /// Meant to run after [`ImplicationGraph::solve`] reported a model; on an unsatisfiable
    /// graph it yields nothing, but only after exploring the search space.
    pub fn models(&self, max_models: Option<usize>) -> ModelEnumerator<'_> {
        ModelEnumerator::new(self, max_models)
    }
}
