use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use twocnf::parser::read_3cnf;
use twocnf::transformer::transform_3sat_to_2sat;
use twocnf::twosat::solve_and_filter;

fn satisfies(model: &[bool], clauses: &[[i64; 3]]) -> bool {
    clauses.iter().all(|clause| {
        clause
            .iter()
            .any(|&lit| model[(lit.unsigned_abs() - 1) as usize] == (lit > 0))
    })
}

fn all_models(num_vars: usize) -> impl Iterator<Item = Vec<bool>> {
    (0..1u32 << num_vars).map(move |bits| (0..num_vars).map(|v| bits & (1 << v) != 0).collect())
}

#[test]
fn single_clause_excludes_all_false() {
    let clauses = [[1, 2, 3]];
    let t = transform_3sat_to_2sat(&clauses, 3).unwrap();
    assert_eq!(t.graph.num_vars(), 4);

    let outcome = solve_and_filter(&t.graph, &t.exclusions, 3, None);
    assert!(outcome.satisfiable);
    assert!(!outcome.models.contains(&vec![false, false, false]));
    assert_eq!(outcome.models.len(), 7);
    assert!(outcome.models.iter().all(|m| satisfies(m, &clauses)));
}

#[test]
fn two_clause_smoke() {
    let clauses = [[1, 2, 3], [-1, 2, -3]];
    let t = transform_3sat_to_2sat(&clauses, 3).unwrap();
    let outcome = solve_and_filter(&t.graph, &t.exclusions, 3, Some(1000));
    assert!(outcome.satisfiable);
    let mut expected: Vec<_> = all_models(3).filter(|m| satisfies(m, &clauses)).collect();
    let mut found = outcome.models.clone();
    expected.sort();
    found.sort();
    assert_eq!(found, expected);
}

#[test]
fn unsatisfiable_original_has_no_survivors() {
    // All eight sign patterns over three variables.
    let clauses: Vec<[i64; 3]> = (0..8)
        .map(|bits| {
            [1, 2, 3].map(|v: i64| if bits & (1 << (v - 1)) != 0 { -v } else { v })
        })
        .collect();
    let t = transform_3sat_to_2sat(&clauses, 3).unwrap();
    let outcome = solve_and_filter(&t.graph, &t.exclusions, 3, None);
    assert!(!outcome.satisfiable);
    assert!(outcome.models.is_empty());
}

#[test]
fn surviving_projections_are_exactly_the_original_models() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..150 {
        let num_vars = rng.gen_range(1..=5);
        let num_clauses = rng.gen_range(1..=5);
        let clauses: Vec<[i64; 3]> = (0..num_clauses)
            .map(|_| {
                [(); 3].map(|_| {
                    let v = rng.gen_range(1..=num_vars as i64);
                    if rng.gen::<bool>() {
                        v
                    } else {
                        -v
                    }
                })
            })
            .collect();

        let t = transform_3sat_to_2sat(&clauses, num_vars).unwrap();
        let outcome = solve_and_filter(&t.graph, &t.exclusions, num_vars, None);

        let mut expected: Vec<_> = all_models(num_vars)
            .filter(|m| satisfies(m, &clauses))
            .collect();
        let mut found = outcome.models.clone();
        expected.sort();
        found.sort();
        assert_eq!(outcome.satisfiable, !expected.is_empty(), "{clauses:?}");
        assert_eq!(found, expected, "{clauses:?}");
    }
}

#[test]
fn reads_dimacs_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "c two clauses\np cnf 3 2\n1 2 3 0\n-1 2 -3 0\n").unwrap();
    let cnf = read_3cnf(file.path()).unwrap();
    assert_eq!(cnf.num_vars, 3);
    assert_eq!(cnf.clauses, vec![[1, 2, 3], [-1, 2, -3]]);
}

#[test]
fn reads_simple_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "# one clause\n1 -2 4\n").unwrap();
    let cnf = read_3cnf(file.path()).unwrap();
    assert_eq!(cnf.num_vars, 4);
    assert_eq!(cnf.clauses, vec![[1, -2, 4]]);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_3cnf(dir.path().join("nope.cnf")).unwrap_err();
    assert!(matches!(err, twocnf::ParseError::Io(_)));
}

#[test]
fn zero_bound_still_reports_a_model() {
    let t = transform_3sat_to_2sat(&[[1, 2, 3]], 3).unwrap();
    let outcome = solve_and_filter(&t.graph, &t.exclusions, 3, Some(0));
    assert!(outcome.satisfiable);
    assert_eq!(outcome.models, vec![vec![true, true, true]]);
}
