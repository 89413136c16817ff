use log::debug;

use super::graph::ImplicationGraph;
use super::literal::Literal;
use crate::error::TwoSatError;

/// Strongly connected component id of every literal node.
///
/// Ids come out of Kosaraju's algorithm in topological order of the condensation, so an
/// edge `u → v` between different components always has `id(u) < id(v)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Components {
    ids: Vec<usize>,
    count: usize,
}

impl Components {
    pub fn of(&self, lit: Literal) -> usize {
        self.ids[lit.index()]
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Kosaraju: forward DFS for the finishing order, then DFS over the reverse edges in
    /// reverse finishing order. Both passes use an explicit stack.
    pub fn compute(graph: &ImplicationGraph) -> Components {
        let n = graph.num_literals();

        let mut order = Vec::with_capacity(n);
        let mut visited = vec![false; n];
        let mut stack: Vec<(usize, usize)> = Vec::new();
        for root in 0..n {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            stack.push((root, 0));
            while let Some(top) = stack.last_mut() {
                let (node, edge) = *top;
                if let Some(&next) = graph.successors(node).get(edge) {
                    top.1 += 1;
                    if !visited[next] {
                        visited[next] = true;
                        stack.push((next, 0));
                    }
                } else {
                    order.push(node);
                    stack.pop();
                }
            }
        }

        const UNSET: usize = usize::MAX;
        let mut ids = vec![UNSET; n];
        let mut count = 0;
        let mut pending = Vec::new();
        for &root in order.iter().rev() {
            if ids[root] != UNSET {
                continue;
            }
            ids[root] = count;
            pending.push(root);
            while let Some(node) = pending.pop() {
                for &prev in graph.predecessors(node) {
                    if ids[prev] == UNSET {
                        ids[prev] = count;
                        pending.push(prev);
                    }
                }
            }
            count += 1;
        }

        Components { ids, count }
    }
}

impl ImplicationGraph {
    /// Decides satisfiability and returns one witness model.
    ///
    /// Pure over the current edge set: calling it twice gives the same answer.
    pub fn solve(&self) -> Result<Vec<bool>, TwoSatError> {
        let components = Components::compute(self);
        debug!(
            "{} components over {} literals",
            components.count(),
            self.num_literals()
        );
        (0..self.num_vars())
            .map(|v| {
                let pos = components.of(Literal::new(v, true));
                let neg = components.of(Literal::new(v, false));
                match pos.cmp(&neg) {
                    std::cmp::Ordering::Equal => Err(TwoSatError::Unsat),
                    ord => Ok(ord.is_gt()),
                }
            })
            .collect()
    }
}
