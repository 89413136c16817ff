//! 3-CNF to 2-CNF through one auxiliary variable per clause.
//!
//! A clause `(l1 ∨ l2 ∨ l3)` with auxiliary `a` becomes `(¬l1 ∨ a) ∧ (¬l2 ∨ a) ∧ (a ∨ l3)`.
//! The gadget also accepts `l1 = l2 = false, a = true` with `l3` false, so that combination
//! is handed back as an [`ExclusionCondition`].

use log::debug;

use crate::error::TwoSatError;
use crate::twosat::{ExclusionCondition, ImplicationGraph, Literal};

#[derive(Debug, Clone)]
pub struct Transformed {
    pub graph: ImplicationGraph,
    /// `aux_map[i]` is the auxiliary variable of clause `i`.
    pub aux_map: Vec<usize>,
    pub exclusions: Vec<ExclusionCondition>,
    pub num_original_vars: usize,
}

/// Signed, 1-based literal to a 0-based [`Literal`].
fn to_literal(lit: i64, num_original_vars: usize) -> Result<Literal, TwoSatError> {
    if lit == 0 {
        return Err(TwoSatError::ZeroLiteral);
    }
    let variable = (lit.unsigned_abs() - 1) as usize;
    if variable >= num_original_vars {
        return Err(TwoSatError::OutOfRange {
            variable,
            num_vars: num_original_vars,
        });
    }
    Ok(Literal::new(variable, lit > 0))
}

/// The gadget clauses as plain literal pairs, before any graph is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GadgetClauses {
    pub clauses: Vec<(Literal, Literal)>,
    pub aux_map: Vec<usize>,
    pub exclusions: Vec<ExclusionCondition>,
    pub num_vars: usize,
}

pub fn transform_to_clause_list(
    clauses: &[[i64; 3]],
    num_original_vars: usize,
) -> Result<GadgetClauses, TwoSatError> {
    let mut binary = Vec::with_capacity(3 * clauses.len());
    let mut aux_map = Vec::with_capacity(clauses.len());
    let mut exclusions = Vec::with_capacity(clauses.len());

    for (i, clause) in clauses.iter().enumerate() {
        let aux = Literal::new(num_original_vars + i, true);
        let [l1, l2, l3] = clause.map(|lit| to_literal(lit, num_original_vars));
        let (l1, l2, l3) = (l1?, l2?, l3?);

        binary.push((l1.negate(), aux));
        binary.push((l2.negate(), aux));
        binary.push((aux, l3));

        exclusions.push(
            ExclusionCondition::new()
                .require(l1.variable, !l1.polarity)
                .require(l2.variable, !l2.polarity)
                .require(aux.variable, true),
        );
        aux_map.push(aux.variable);
    }

    Ok(GadgetClauses {
        clauses: binary,
        aux_map,
        exclusions,
        num_vars: num_original_vars + clauses.len(),
    })
}

pub fn transform_3sat_to_2sat(
    clauses: &[[i64; 3]],
    num_original_vars: usize,
) -> Result<Transformed, TwoSatError> {
    let gadgets = transform_to_clause_list(clauses, num_original_vars)?;
    let mut graph = ImplicationGraph::new(gadgets.num_vars)?;
    for (a, b) in &gadgets.clauses {
        graph.add_clause(a.variable, a.polarity, b.variable, b.polarity)?;
    }
    debug!(
        "{} clauses over {} variables -> {} binary clauses over {} variables",
        clauses.len(),
        num_original_vars,
        graph.clauses().len(),
        graph.num_vars()
    );

    Ok(Transformed {
        graph,
        aux_map: gadgets.aux_map,
        exclusions: gadgets.exclusions,
        num_original_vars,
    })
}
