use std::fmt;

/// A variable (0-based) together with a polarity.
///
/// Inside the implication graph a literal is the node `2 * variable + (0 | 1)`, so
/// `index() ^ 1` is always the index of the negation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    pub variable: usize,
    pub polarity: bool,
}

impl Literal {
    pub fn new(variable: usize, polarity: bool) -> Self {
        Literal { variable, polarity }
    }

    pub fn from_index(index: usize) -> Self {
        Literal {
            variable: index / 2,
            polarity: index % 2 == 0,
        }
    }

    pub fn index(self) -> usize {
        2 * self.variable + if self.polarity { 0 } else { 1 }
    }

    pub fn negate(self) -> Self {
        Literal {
            variable: self.variable,
            polarity: !self.polarity,
        }
    }

    /// Truth value of the literal under a full model.
    pub fn eval(self, model: &[bool]) -> bool {
        model[self.variable] == self.polarity
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.polarity {
            write!(f, "{}", self.variable)
        } else {
            write!(f, "¬{}", self.variable)
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
