/// Per-variable values built up during the model search. `None` means not fixed yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartialAssignment {
    values: Vec<Option<bool>>,
}

impl PartialAssignment {
    pub fn new(num_vars: usize) -> PartialAssignment {
        PartialAssignment {
            values: vec![None; num_vars],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, variable: usize) -> Option<bool> {
        self.values[variable]
    }

    pub fn set(&mut self, variable: usize, value: bool) {
        self.values[variable] = Some(value);
    }

    pub fn unset(&mut self, variable: usize) {
        self.values[variable] = None;
    }

    pub fn first_unassigned(&self) -> Option<usize> {
        self.values.iter().position(Option::is_none)
    }

    /// Full model; anything never fixed defaults to `false`.
    pub fn to_model(&self) -> Vec<bool> {
        self.values.iter().map(|v| v.unwrap_or(false)).collect()
    }
}
