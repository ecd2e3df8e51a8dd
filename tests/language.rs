use std::fs;

use waju::{
    Error, Options, interpreter::value::core::Number, parse, run, run_with_options, tokenize,
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "waju"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let (header, body) = content.split_once('\n').unwrap_or((content.as_str(), ""));
        let name = path.display().to_string();

        count += 1;
        match (header.strip_prefix("# expect: "), header.strip_prefix("# error: ")) {
            (Some(expected), _) => match run(&name, body) {
                Ok(value) => assert_eq!(value.to_string(), expected.trim(), "case {path:?}"),
                Err(e) => panic!("case {path:?} failed:\n{}", e.render()),
            },
            (None, Some(kind)) => match run(&name, body) {
                Ok(value) => panic!("case {path:?} succeeded with {value} but should fail"),
                Err(e) => assert_eq!(e.kind(), kind.trim(), "case {path:?}"),
            },
            (None, None) => panic!("case {path:?} has no `# expect:` or `# error:` header"),
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn assert_result(src: &str, expected: &str) {
    match run("<stdin>", src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "evaluating {src:?}"),
        Err(e) => panic!("Script failed:\n{}", e.render()),
    }
}

fn assert_failure(src: &str) -> Error {
    match run("<stdin>", src) {
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_and_associativity() {
    assert_result("1+2*3", "7");
    assert_result("(1+2)*3", "9");
    assert_result("2^3^2", "512");
    assert_result("2-3-4", "-5");
    assert_result("8/4/2", "1.0");
}

#[test]
fn unary_signs() {
    assert_result("--3", "3");
    assert_result("-3+4", "1");
    assert_result("+5", "5");
    assert_result("-(2+3)*2", "-10");
    assert_result("2^-2", "0.25");
}

#[test]
fn integer_and_real_arithmetic() {
    assert_result("7/2", "3.5");
    assert_result("6/3", "2.0");
    assert_result("1.5 + 1.5", "3.0");
    assert_result("3 * 0.5", "1.5");
    assert_result("10 - 2.5", "7.5");
    assert_result("2.", "2.0");
}

#[test]
fn whitespace_and_line_breaks_are_ignored() {
    assert_result("  1 +\t2 ", "3");
    assert_result("1 +\n2\n* 3", "7");
}

#[test]
fn evaluation_is_repeatable() {
    for src in ["1+2*3", "2^0.5", "(4 - 6) / 8"] {
        let first = run("<stdin>", src).unwrap().number;
        let second = run("<stdin>", src).unwrap().number;
        assert_eq!(first, second);
    }
}

#[test]
fn result_spans_cover_the_whole_expression() {
    let value = run("<stdin>", "  (1 + 2) * 3  ").unwrap();
    assert_eq!(value.number, Number::Integer(9));
    assert_eq!(value.span.unwrap().slice(), "1 + 2) * 3");

    let value = run("<stdin>", "-4 ^ 2").unwrap();
    assert_eq!(value.span.unwrap().slice(), "-4 ^ 2");
}

/// Operands that start and end on a literal or sign, so the expression text
/// is exactly what its tree covers.
const OPERANDS: [&str; 8] = ["7", "2.5", "-3", "+-4", "2^-1", "-2^3^-1", "-(8 / 4)^3", "10."];
const OPERATORS: [&str; 5] = ["+", "-", "*", "/", "^"];

#[test]
fn spans_cover_generated_expressions() {
    for left in OPERANDS {
        for op in OPERATORS {
            for right in OPERANDS {
                let text = format!("{left} {op} {right}");
                let padded = format!(" \t{text}\n ");
                let expr = parse(&tokenize("<stdin>", &padded).unwrap()).unwrap();
                assert_eq!(expr.span().slice(), text);

                let value = run("<stdin>", &padded).unwrap();
                assert_eq!(value.span.unwrap().slice(), text);
            }
        }
    }
}

#[test]
fn spans_cover_generated_chains() {
    for length in [2, 17, 64, 500] {
        for shift in 0..OPERATORS.len() {
            let mut text = OPERANDS[shift].to_string();
            for i in 1..length {
                let op = OPERATORS[(i + shift) % OPERATORS.len()];
                let operand = OPERANDS[(i * 3 + shift) % OPERANDS.len()];
                text = format!("{text} {op} {operand}");
            }

            let value = run("<stdin>", &text).unwrap_or_else(|e| panic!("{text}:\n{}", e.render()));
            assert_eq!(value.span.unwrap().slice(), text);
        }
    }
}

#[test]
fn long_flat_chains_run() {
    let sum = vec!["1"; 150_000].join(" + ");
    let value = run("<stdin>", &sum).unwrap();
    assert_eq!(value.number, Number::Integer(150_000));
    assert_eq!(value.span.unwrap().slice(), sum);

    assert_result(&vec!["1"; 150_000].join("*"), "1");
    assert_result(&vec!["1"; 150_000].join("-"), "-149998");
}

#[test]
fn long_flat_chain_with_a_failing_tail() {
    let text = format!("{} / 0", vec!["1"; 100_000].join(" + "));
    let err = assert_failure(&text);
    assert_eq!(err.kind(), "Runtime Error");
    assert_eq!(err.span().start.index, text.len() - 1);

    let text = format!("{} @", vec!["2"; 100_000].join(" * "));
    assert_eq!(assert_failure(&text).kind(), "Illegal Character");

    let text = format!("{} +", vec!["2"; 100_000].join(" - "));
    assert_eq!(assert_failure(&text).kind(), "Invalid Syntax");
}

#[test]
fn division_by_zero() {
    let err = assert_failure("1/0");
    assert_eq!(err.kind(), "Runtime Error");
    assert_eq!(err.span().start.index, 2);
    assert_eq!(err.span().slice(), "0");

    assert_eq!(assert_failure("1/0.0").kind(), "Runtime Error");
    assert_eq!(assert_failure("3 / (1 - 1)").span().slice(), "1 - 1");
}

#[test]
fn unclosed_parenthesis() {
    let err = assert_failure("(1+2");
    let Error::Parse(parse) = &err else {
        panic!("expected a syntax error, got {err:?}");
    };
    assert_eq!(parse.to_string(), "Invalid Syntax: expected ')', found end of input");
    assert_eq!(err.span().start.index, 4);
}

#[test]
fn syntax_errors() {
    for src in ["", "1 +", "* 2", "()", "1 2", "(1))", "2 ^"] {
        assert_eq!(assert_failure(src).kind(), "Invalid Syntax", "parsing {src:?}");
    }
}

#[test]
fn illegal_characters() {
    let err = assert_failure("1+@");
    assert_eq!(err.kind(), "Illegal Character");
    assert_eq!(err.span().start.index, 2);
    assert_eq!(err.to_string(), "Illegal Character: '@'");

    assert_eq!(assert_failure("1.2.3").span().start.index, 3);
    assert_eq!(assert_failure("x").kind(), "Illegal Character");
}

#[test]
fn oversized_literal() {
    let err = assert_failure("18446744073709551616");
    assert_eq!(err.kind(), "Literal Too Large");
}

#[test]
fn nesting_limit_is_configurable() {
    let deep = format!("{}1{}", "(".repeat(50), ")".repeat(50));
    assert_result(&deep, "1");

    let options = Options { max_depth: 10,
                            ..Options::default() };
    let err = run_with_options(&options, "<stdin>", &deep).unwrap_err();
    assert_eq!(err.kind(), "Nesting Too Deep");
    assert!(run_with_options(&options, "<stdin>", "((2))").is_ok());
}

#[test]
fn very_deep_input_fails_cleanly() {
    let deep = format!("{}1", "-".repeat(100_000));
    assert_eq!(assert_failure(&deep).kind(), "Nesting Too Deep");

    let deep = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    assert_eq!(assert_failure(&deep).kind(), "Nesting Too Deep");
}

#[test]
fn render_illegal_character() {
    let err = assert_failure("1 + @");
    assert_eq!(err.render(),
               "Illegal Character: '@'\nFile <stdin>, line 1, column 5\n\n1 + @\n    ^");
}

#[test]
fn render_invalid_syntax_at_end_of_input() {
    let err = assert_failure("(1+2");
    assert_eq!(err.render(),
               "Invalid Syntax: expected ')', found end of input\nFile <stdin>, line 1, column \
                5\n\n(1+2\n    ^");
}

#[test]
fn render_division_by_zero_with_traceback() {
    let err = assert_failure("10 / (5 - 5)");
    assert_eq!(err.render(),
               "Traceback (most recent call last):\n  File <stdin>, line 1, in <program>\nRuntime \
                Error: Division by zero\nFile <stdin>, line 1, column 7\n\n10 / (5 - 5)\n      \
                ^^^^^");
}

#[test]
fn render_on_a_later_line() {
    let err = run("calc.waju", "1 +\n2 / 0").unwrap_err();
    assert_eq!(err.render(),
               "Traceback (most recent call last):\n  File calc.waju, line 2, in <program>\nRuntime \
                Error: Division by zero\nFile calc.waju, line 2, column 5\n\n2 / 0\n    ^");
}

#[test]
fn custom_context_name_appears_in_traceback() {
    let options = Options { context_name: "<repl>".to_string(),
                            ..Options::default() };
    let err = run_with_options(&options, "<stdin>", "1/0").unwrap_err();
    assert!(err.render().contains("in <repl>\n"));
}
