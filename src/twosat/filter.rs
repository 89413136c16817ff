use std::collections::BTreeMap;

use indexmap::IndexSet;

/// A partial assignment that marks a model as spurious.
///
/// Conjunctive: it matches a model only if every listed variable has the listed value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExclusionCondition {
    required: BTreeMap<usize, bool>,
    // Some variable was required at both values; nothing can match.
    contradictory: bool,
}

impl ExclusionCondition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requiring both values of one variable leaves a condition that never matches.
    pub fn require(mut self, variable: usize, value: bool) -> Self {
        if let Some(previous) = self.required.insert(variable, value) {
            self.contradictory |= previous != value;
        }
        self
    }

    pub fn get(&self, variable: usize) -> Option<bool> {
        self.required.get(&variable).copied()
    }

    pub fn len(&self) -> usize {
        self.required.len()
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }

    /// A variable the model doesn't cover never matches.
    pub fn matches(&self, model: &[bool]) -> bool {
        !self.contradictory
            && self
                .required
                .iter()
                .all(|(&variable, &value)| model.get(variable) == Some(&value))
    }
}

impl FromIterator<(usize, bool)> for ExclusionCondition {
    fn from_iter<T: IntoIterator<Item = (usize, bool)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |cond, (variable, value)| cond.require(variable, value))
    }
}

/// Drops models matching any condition, truncates the rest to `num_original_vars` and keeps
/// the distinct prefixes in first-seen order. The flag says whether anything survived.
pub fn filter_and_project(
    models: impl IntoIterator<Item = Vec<bool>>,
    exclusions: &[ExclusionCondition],
    num_original_vars: usize,
) -> (bool, Vec<Vec<bool>>) {
    let mut projected: IndexSet<Vec<bool>> = IndexSet::new();
    for mut model in models {
        if exclusions.iter().any(|cond| cond.matches(&model)) {
            continue;
        }
        model.truncate(num_original_vars);
        projected.insert(model);
    }
    (!projected.is_empty(), projected.into_iter().collect())
}
