//! Reference validation for primops.
//!
//! Reads every `*.json` case file in the input directory, evaluates each case
//! with the library, and writes the annotated cases to the output directory.
//! Exits with an error if the input directory is missing or any case
//! disagrees with its expected value.
//!
//! Run with: `cargo run --bin validate -- [input_dir] [output_dir]`

use primops::prelude::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Absolute tolerance for comparing against reference values.
const TOLERANCE: f64 = 1e-12;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    cases: Vec<Case>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Case {
    op: String,
    #[serde(default)]
    args: Vec<f64>,
    #[serde(default)]
    xs: Vec<f64>,
    #[serde(default)]
    ys: Vec<f64>,
    expected: Expected,
    #[serde(skip_deserializing)]
    result: Option<Outcome>,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
enum Expected {
    Scalar(f64),
    Flag(bool),
    Sequence(Vec<f64>),
    Failure { error: String },
}

#[derive(Debug, Serialize)]
struct Outcome {
    actual: Expected,
    passed: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let input_dir = Path::new(args.get(1).map(String::as_str).unwrap_or("data"));
    let output_dir = Path::new(args.get(2).map(String::as_str).unwrap_or("output"));

    check_input_dir(input_dir)?;

    fs::create_dir_all(output_dir)?;

    let mut failures = 0;
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            println!("Processing {:?}", path.file_name().unwrap_or_default());
            failures += process_file(&path, output_dir)?;
        }
    }

    if failures > 0 {
        return Err(format!("{} case(s) failed validation", failures).into());
    }
    println!("All cases passed");
    Ok(())
}

fn check_input_dir(input_dir: &Path) -> Result<(), Box<dyn Error>> {
    if !input_dir.is_dir() {
        return Err(format!("Input directory {:?} does not exist", input_dir).into());
    }
    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<usize, Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    let mut failures = 0;
    for case in &mut data.cases {
        let actual = evaluate(case)?;
        let passed = matches(&case.expected, &actual);
        if !passed {
            failures += 1;
            eprintln!(
                "  FAIL {}: {}({:?}{:?}{:?}) expected {:?}, got {:?}",
                data.name, case.op, case.args, case.xs, case.ys, case.expected, actual
            );
        }
        case.result = Some(Outcome { actual, passed });
    }

    let file_name = input_path.file_name().ok_or("input path has no file name")?;
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_dir.join(file_name), output_json)?;

    Ok(failures)
}

fn evaluate(case: &Case) -> Result<Expected, Box<dyn Error>> {
    let arg = |i: usize| -> Result<f64, Box<dyn Error>> {
        case.args
            .get(i)
            .copied()
            .ok_or_else(|| format!("`{}` needs argument {}", case.op, i).into())
    };
    let fallible = |r: Result<f64, OpsError>| match r {
        Ok(v) => Expected::Scalar(v),
        Err(e) => Expected::Failure {
            error: e.to_string(),
        },
    };
    let fallible_seq = |r: Result<Vec<f64>, OpsError>| match r {
        Ok(v) => Expected::Sequence(v),
        Err(e) => Expected::Failure {
            error: e.to_string(),
        },
    };

    let actual = match case.op.as_str() {
        "mul" => Expected::Scalar(mul(arg(0)?, arg(1)?)),
        "id" => Expected::Scalar(id(arg(0)?)),
        "add" => Expected::Scalar(add(arg(0)?, arg(1)?)),
        "neg" => Expected::Scalar(neg(arg(0)?)),
        "lt" => Expected::Scalar(lt(arg(0)?, arg(1)?)),
        "eq" => Expected::Scalar(eq(arg(0)?, arg(1)?)),
        "max" => Expected::Scalar(max(arg(0)?, arg(1)?)),
        "is_close" => Expected::Flag(is_close(arg(0)?, arg(1)?)),
        "sigmoid" => Expected::Scalar(sigmoid(arg(0)?)),
        "relu" => Expected::Scalar(relu(arg(0)?)),
        "log" => Expected::Scalar(log(arg(0)?)),
        "exp" => Expected::Scalar(exp(arg(0)?)),
        "inv" => fallible(inv(arg(0)?)),
        "log_back" => fallible(log_back(arg(0)?, arg(1)?)),
        "inv_back" => fallible(inv_back(arg(0)?, arg(1)?)),
        "relu_back" => Expected::Scalar(relu_back(arg(0)?, arg(1)?)),
        "neg_list" => Expected::Sequence(neg_list(&case.xs)),
        "add_lists" => Expected::Sequence(add_lists(&case.xs, &case.ys)),
        "sum" => Expected::Scalar(sum(&case.xs)),
        "prod" => Expected::Scalar(prod(&case.xs)),
        "inv_list" => fallible_seq(inv_list(&case.xs)),
        "inv_back_lists" => {
            fallible_seq(combine(inv_back::<f64>).try_apply(&case.xs, &case.ys))
        }
        "inv_sum" => {
            let harmonic = fold(|acc: f64, x: f64| inv(x).map(|r| acc + r), 0.0);
            fallible(harmonic.try_apply(&case.xs))
        }
        other => return Err(format!("Unsupported operator: {}", other).into()),
    };
    Ok(actual)
}

fn matches(expected: &Expected, actual: &Expected) -> bool {
    match (expected, actual) {
        (Expected::Scalar(e), Expected::Scalar(a)) => (e - a).abs() <= TOLERANCE,
        (Expected::Sequence(e), Expected::Sequence(a)) => {
            e.len() == a.len() && e.iter().zip(a).all(|(e, a)| (e - a).abs() <= TOLERANCE)
        }
        _ => expected == actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = include_str!("../data/reference.json");

    #[test]
    fn test_missing_input_dir_is_an_error() {
        let missing = Path::new("definitely/not/a/validation/dir");
        let err = check_input_dir(missing).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_existing_input_dir_is_accepted() {
        assert!(check_input_dir(Path::new(env!("CARGO_MANIFEST_DIR"))).is_ok());
    }

    #[test]
    fn test_reference_cases_pass() {
        let data: ValidationData = serde_json::from_str(REFERENCE).unwrap();
        for case in &data.cases {
            let actual = evaluate(case).unwrap();
            assert!(
                matches(&case.expected, &actual),
                "{}({:?}{:?}{:?}): expected {:?}, got {:?}",
                case.op,
                case.args,
                case.xs,
                case.ys,
                case.expected,
                actual
            );
        }
    }

    #[test]
    fn test_reference_covers_fallible_combinators() {
        let data: ValidationData = serde_json::from_str(REFERENCE).unwrap();
        for op in ["inv_list", "inv_back_lists", "inv_sum"] {
            let cases: Vec<&Case> = data.cases.iter().filter(|c| c.op == op).collect();
            assert!(
                cases.iter().any(|c| matches!(c.expected, Expected::Failure { .. })),
                "{} has no failing case",
                op
            );
            assert!(
                cases.iter().any(|c| !matches!(c.expected, Expected::Failure { .. })),
                "{} has no passing case",
                op
            );
        }
    }
}
