use std::io;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TwoSatError {
    #[error("variable count must be positive")]
    InvalidSize,
    #[error("variable {variable} out of range (instance has {num_vars} variables)")]
    OutOfRange { variable: usize, num_vars: usize },
    #[error("formula is unsatisfiable")]
    Unsat,
    #[error("0 cannot be a literal")]
    ZeroLiteral,
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("couldn't read input: {0}")]
    Io(#[from] io::Error),
    #[error("invalid DIMACS input: {0}")]
    Dimacs(String),
    #[error("received (valid) SAT input, not CNF")]
    NotCnf,
    #[error("only 3-literal clauses supported, found {found} in clause {clause}")]
    ClauseWidth { clause: usize, found: usize },
    #[error("expected 3 ints per line, got: {0}")]
    BadLine(String),
    #[error("empty or invalid input")]
    Empty,
}
