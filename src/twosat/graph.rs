use log::trace;

use super::literal::Literal;
use crate::error::TwoSatError;

/// Implication graph over the `2 * n` literals of a 2-CNF formula.
///
/// A clause `(a ∨ b)` becomes the edges `¬a → b` and `¬b → a`. Parallel edges from
/// repeated clauses are kept as they are.
#[derive(Clone, Debug)]
pub struct ImplicationGraph {
    num_vars: usize,
    forward: Vec<Vec<usize>>,
    reverse: Vec<Vec<usize>>,
    clauses: Vec<(Literal, Literal)>,
}

impl ImplicationGraph {
    pub fn new(num_vars: usize) -> Result<ImplicationGraph, TwoSatError> {
        if num_vars == 0 {
            return Err(TwoSatError::InvalidSize);
        }
        Ok(ImplicationGraph {
            num_vars,
            forward: vec![Vec::new(); 2 * num_vars],
            reverse: vec![Vec::new(); 2 * num_vars],
            clauses: Vec::new(),
        })
    }

    /// Adds the clause `(lit_i ∨ lit_j)`. Nothing is touched if either variable is out of range.
    pub fn add_clause(
        &mut self,
        i: usize,
        pos_i: bool,
        j: usize,
        pos_j: bool,
    ) -> Result<(), TwoSatError> {
        for variable in [i, j] {
            if variable >= self.num_vars {
                return Err(TwoSatError::OutOfRange {
                    variable,
                    num_vars: self.num_vars,
                });
            }
        }
        let a = Literal::new(i, pos_i);
        let b = Literal::new(j, pos_j);
        trace!("clause ({a} ∨ {b})");
        self.add_implication(a.index() ^ 1, b.index());
        self.add_implication(b.index() ^ 1, a.index());
        self.clauses.push((a, b));
        Ok(())
    }

    fn add_implication(&mut self, from: usize, to: usize) {
        self.forward[from].push(to);
        self.reverse[to].push(from);
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn num_literals(&self) -> usize {
        2 * self.num_vars
    }

    pub fn successors(&self, lit: usize) -> &[usize] {
        &self.forward[lit]
    }

    pub fn predecessors(&self, lit: usize) -> &[usize] {
        &self.reverse[lit]
    }

    pub fn clauses(&self) -> &[(Literal, Literal)] {
        &self.clauses
    }

    /// Re-evaluates every stored clause against a full model.
    pub fn is_satisfied_by(&self, model: &[bool]) -> bool {
        model.len() == self.num_vars
            && self
                .clauses
                .iter()
                .all(|&(a, b)| a.eval(model) || b.eval(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_variables_is_invalid() {
        assert_eq!(ImplicationGraph::new(0).unwrap_err(), TwoSatError::InvalidSize);
    }

    #[test]
    fn clause_adds_two_implications() {
        let mut graph = ImplicationGraph::new(2).unwrap();
        graph.add_clause(0, true, 1, false).unwrap();
        // (x0 ∨ ¬x1): ¬x0 → ¬x1 and x1 → x0
        assert_eq!(graph.successors(1), &[3]);
        assert_eq!(graph.successors(2), &[0]);
        assert_eq!(graph.predecessors(3), &[1]);
        assert_eq!(graph.predecessors(0), &[2]);
        assert_eq!(
            graph.clauses(),
            &[(Literal::new(0, true), Literal::new(1, false))]
        );
    }

    #[test]
    fn out_of_range_leaves_graph_untouched() {
        let mut graph = ImplicationGraph::new(2).unwrap();
        graph.add_clause(0, true, 1, true).unwrap();
        let err = graph.add_clause(0, true, 2, true).unwrap_err();
        assert_eq!(
            err,
            TwoSatError::OutOfRange {
                variable: 2,
                num_vars: 2
            }
        );
        assert_eq!(graph.clauses().len(), 1);
        assert_eq!(graph.successors(1), &[2]);
        assert!(graph.successors(0).is_empty());
    }

    #[test]
    fn repeated_clauses_keep_parallel_edges() {
        let mut graph = ImplicationGraph::new(2).unwrap();
        graph.add_clause(0, true, 1, true).unwrap();
        graph.add_clause(0, true, 1, true).unwrap();
        assert_eq!(graph.successors(1), &[2, 2]);
        assert_eq!(graph.clauses().len(), 2);
    }

    #[test]
    fn satisfaction_check() {
        let mut graph = ImplicationGraph::new(2).unwrap();
        graph.add_clause(0, true, 1, true).unwrap();
        graph.add_clause(0, false, 1, false).unwrap();
        assert!(graph.is_satisfied_by(&[true, false]));
        assert!(!graph.is_satisfied_by(&[true, true]));
        assert!(!graph.is_satisfied_by(&[true]));
    }
}
