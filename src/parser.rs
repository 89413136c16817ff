use dimacs::{parse_dimacs, Instance, Sign};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::error::ParseError;

/// A 3-CNF instance with signed, 1-based literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cnf3 {
    pub clauses: Vec<[i64; 3]>,
    pub num_vars: usize,
}

/// Input without a `p cnf` line gets one, with the largest variable and the number of `0`
/// terminators. Comment lines are dropped from the rebuilt text.
fn with_dimacs_header(contents: &str) -> Cow<'_, str> {
    let body: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('c'))
        .collect();
    if body.iter().any(|line| line.starts_with('p')) {
        return Cow::Borrowed(contents);
    }
    let (mut num_vars, mut num_clauses) = (0, 0);
    for lit in body
        .iter()
        .flat_map(|line| line.split_whitespace())
        .filter_map(|tok| tok.parse::<i64>().ok())
    {
        if lit == 0 {
            num_clauses += 1;
        } else {
            num_vars = num_vars.max(lit.unsigned_abs());
        }
    }
    Cow::Owned(format!("p cnf {num_vars} {num_clauses}\n{}\n", body.join("\n")))
}

pub fn parse_dimacs_3cnf(contents: &str) -> Result<Cnf3, ParseError> {
    let contents = with_dimacs_header(contents);
    let (num_vars, clauses) =
        match parse_dimacs(&contents).map_err(|e| ParseError::Dimacs(format!("{e:?}")))? {
            Instance::Cnf { num_vars, clauses } => (num_vars, clauses),
            Instance::Sat { .. } => return Err(ParseError::NotCnf),
        };
    let mut cnf_vec = Vec::with_capacity(clauses.len());
    for (i, clause) in clauses.iter().enumerate() {
        let lits: Vec<i64> = clause
            .lits()
            .iter()
            .map(|l| {
                let val = l.var().to_u64() as i64;
                match l.sign() {
                    Sign::Pos => val,
                    Sign::Neg => -val,
                }
            })
            .collect();
        let lits: [i64; 3] = lits.as_slice().try_into().map_err(|_| ParseError::ClauseWidth {
            clause: i + 1,
            found: lits.len(),
        })?;
        cnf_vec.push(lits);
    }
    Ok(Cnf3 {
        clauses: cnf_vec,
        num_vars: num_vars as usize,
    })
}

/// Three signed ints per line, `#` starts a comment line.
pub fn parse_simple_3cnf(contents: &str) -> Result<Cnf3, ParseError> {
    let mut clauses = Vec::new();
    let mut num_vars = 0;
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let lits: Vec<i64> = line
            .split_whitespace()
            .map(str::parse::<i64>)
            .collect::<Result<_, _>>()
            .map_err(|_| ParseError::BadLine(line.to_string()))?;
        let lits: [i64; 3] = lits
            .as_slice()
            .try_into()
            .map_err(|_| ParseError::BadLine(line.to_string()))?;
        for lit in lits {
            num_vars = num_vars.max(lit.unsigned_abs() as usize);
        }
        clauses.push(lits);
    }
    Ok(Cnf3 { clauses, num_vars })
}

/// DIMACS if the first meaningful line is a `p` header or has a ` 0` terminator,
/// the simple format otherwise.
pub fn parse_3cnf(contents: &str) -> Result<Cnf3, ParseError> {
    let first = contents
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('c'))
        .ok_or(ParseError::Empty)?;
    if first.starts_with('p') || first.contains(" 0") {
        parse_dimacs_3cnf(contents)
    } else {
        parse_simple_3cnf(contents)
    }
}

pub fn read_3cnf(path: impl AsRef<Path>) -> Result<Cnf3, ParseError> {
    let contents = fs::read_to_string(path)?;
    parse_3cnf(&contents)
}
