use std::fs;

use pretty_assertions::assert_eq;
use simplang::{
    error::{Error, ParseError, RuntimeError},
    get_output, get_result,
};
use walkdir::WalkDir;

/// Expected behaviour of a sample program, read from its header comments.
struct Expectation {
    args:   Vec<String>,
    result: Option<i64>,
    output: String,
}

impl Expectation {
    fn parse(content: &str) -> Self {
        let mut args = Vec::new();
        let mut result = None;
        let mut output = String::new();

        for line in content.lines() {
            if let Some(rest) = line.strip_prefix("// args:") {
                args = rest.split_whitespace().map(str::to_string).collect();
            } else if let Some(rest) = line.strip_prefix("// result:") {
                result = match rest.trim() {
                    "none" => None,
                    value => Some(value.parse().expect("result must be an integer or 'none'")),
                };
            } else if let Some(rest) = line.strip_prefix("// output:") {
                output = rest.strip_prefix(' ').unwrap_or(rest).replace("\\n", "\n");
            }
        }

        Self { args, result, output }
    }
}

#[test]
fn sample_programs_work() {
    let mut count = 0;

    let entries = WalkDir::new("tests/programs").into_iter()
                                                .filter_map(Result::ok)
                                                .filter(|e| {
                                                    e.path().extension().is_some_and(|ext| ext == "sl")
                                                });

    for entry in entries {
        count += 1;
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = Expectation::parse(&content);

        let (result, output) =
            get_output(&content, &expected.args).unwrap_or_else(|e| panic!("{path:?} failed: {e}"));

        assert_eq!(result, expected.result, "result of {path:?}");
        assert_eq!(output, expected.output, "output of {path:?}");
    }

    assert!(count > 0, "No sample programs found in tests/programs");
}

fn assert_result(src: &str, args: &[&str], expected: Option<i64>) {
    match get_result(src, args) {
        Ok(result) => assert_eq!(result, expected, "program:\n{src}"),
        Err(e) => panic!("Program failed: {e}\n{src}"),
    }
}

fn assert_value(src: &str, args: &[&str], expected: i64) {
    assert_result(src, args, Some(expected));
}

fn assert_runtime_error(src: &str, args: &[&str], expected: &RuntimeError) {
    match get_result(src, args) {
        Err(Error::Runtime(e)) => assert_eq!(&e, expected, "program:\n{src}"),
        Err(Error::Parse(e)) => panic!("Program did not parse: {e}\n{src}"),
        Ok(v) => panic!("Program succeeded with {v:?} but was expected to fail\n{src}"),
    }
}

fn assert_output(src: &str, args: &[&str], expected: &str) {
    let (_, output) =
        get_output(src, args).unwrap_or_else(|e| panic!("Program failed: {e}\n{src}"));
    assert_eq!(output, expected);
}

fn expr_main(expr: &str) -> String {
    format!("int main() {{ {expr} }}")
}

#[test]
fn arithmetic() {
    assert_value(&expr_main("(1 + 2)"), &[], 3);
    assert_value(&expr_main("(8 - 13)"), &[], -5);
    assert_value(&expr_main("(7 * 9)"), &[], 63);
    assert_value(&expr_main("((2 + 3) * (4 - 1))"), &[], 15);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value(&expr_main("(7 / 2)"), &[], 3);
    assert_value(&expr_main("(-7 / 2)"), &[], -3);
    assert_value(&expr_main("(7 / -2)"), &[], -3);
}

#[test]
fn division_by_zero_is_error() {
    assert_runtime_error(&expr_main("(5 / 0)"), &[], &RuntimeError::DivisionByZero);
}

#[test]
fn arithmetic_wraps_on_overflow() {
    assert_value(&expr_main("(9223372036854775807 + 1)"), &[], i64::MIN);
    assert_value(&expr_main("(-9223372036854775807 - 2)"), &[], i64::MAX);
}

#[test]
fn comparisons() {
    assert_value(&expr_main("(3 == 3)"), &[], 1);
    assert_value(&expr_main("(3 == 4)"), &[], 0);
    assert_value(&expr_main("(3 < 4)"), &[], 1);
    assert_value(&expr_main("(4 < 4)"), &[], 0);
    assert_value(&expr_main("(4 <= 4)"), &[], 1);
    assert_value(&expr_main("(5 > 4)"), &[], 1);
    assert_value(&expr_main("(4 >= 5)"), &[], 0);
}

#[test]
fn logical_operators_treat_nonzero_as_true() {
    assert_value(&expr_main("(2 & 1)"), &[], 1);
    assert_value(&expr_main("(2 & 0)"), &[], 0);
    assert_value(&expr_main("(0 | -3)"), &[], 1);
    assert_value(&expr_main("(0 | 0)"), &[], 0);
    assert_value(&expr_main("(2 ^ 3)"), &[], 0);
    assert_value(&expr_main("(0 ^ -1)"), &[], 1);
    assert_value(&expr_main("(true ^ false)"), &[], 1);
}

#[test]
fn logical_operators_evaluate_both_operands() {
    let src = "int main() { int x; (false & x := 5); (true | x := (x + 1)); x }";
    assert_value(src, &[], 6);
}

#[test]
fn literals() {
    assert_value(&expr_main("true"), &[], 1);
    assert_value(&expr_main("false"), &[], 0);
    assert_value(&expr_main("-42"), &[], -42);
    assert_value(&expr_main("skip"), &[], 0);
}

#[test]
fn if_takes_then_branch_only_for_positive_conditions() {
    let src = "int main(int c) { if c then { 1 } else { 2 } }";
    assert_value(src, &["1"], 1);
    assert_value(src, &["7"], 1);
    assert_value(src, &["0"], 2);
    assert_value(src, &["-1"], 2);
    assert_value(src, &["-100"], 2);
}

#[test]
fn while_loop_never_runs_for_negative_condition() {
    let src = "int main() { int n; while -1 do { n := (n + 1) }; n }";
    assert_value(src, &[], 0);
}

#[test]
fn while_loop_counts() {
    let src = "int main(int n) { int sum; while (n > 0) do { sum := (sum + n); n := (n - 1) }; sum }";
    assert_value(src, &["4"], 10);
}

#[test]
fn repeat_runs_at_least_once_and_stops_on_nonzero() {
    let src = "int main() { int n; repeat { n := (n + 1) } until -1; n }";
    assert_value(src, &[], 1);

    let src = "int main() { int n; repeat { n := (n + 1) } until (n == 3); n }";
    assert_value(src, &[], 3);
}

#[test]
fn loops_yield_no_value() {
    assert_result("int main() { while false do { skip } }", &[], None);
    assert_result("int main() { repeat { skip } until true }", &[], None);
}

#[test]
fn factorial_via_recursion() {
    let src = "
        int fact(int n) {
            if (n <= 1) then { 1 } else { (n * fact((n - 1))) }
        }
        int main(int n) { fact(n) }
    ";
    assert_value(src, &["5"], 120);
    assert_value(src, &["1"], 1);
}

#[test]
fn uninitialized_locals_default_to_zero() {
    assert_value("int main() { int x; x }", &[], 0);
    assert_value("int main() { bool b; b }", &[], 0);
}

#[test]
fn initializers_see_parameters_and_earlier_locals() {
    let src = "int main(int a) { int b := (a + 1); int c := (b * 2); c }";
    assert_value(src, &["4"], 10);
}

#[test]
fn assignment_yields_the_assigned_value() {
    assert_value("int main() { int x; int y; y := x := 7; (x + y) }", &[], 14);
    assert_value("int main() { int x; (1 + x := 4) }", &[], 5);
}

#[test]
fn assignment_creates_unbound_names() {
    assert_value("int main() { fresh := 3; fresh }", &[], 3);
}

#[test]
fn blocks_yield_their_last_value() {
    assert_value(&expr_main("{ 1; 2; 3 }"), &[], 3);
    assert_result(&expr_main("{ 1; print 2 }"), &[], None);
}

#[test]
fn empty_body_yields_no_value() {
    assert_result("unit main() { }", &[], None);
    assert_result("unit main() { int x; }", &[], None);
}

#[test]
fn arguments_are_converted() {
    let src = "int main(int a, bool b, bool c) { ((a * 10) + (b + c)) }";
    assert_value(src, &["-3", "true", "false"], -29);
}

#[test]
fn callee_does_not_see_caller_variables() {
    let src = "int f() { x } int main() { int x := 1; f() }";
    assert_runtime_error(src, &[], &RuntimeError::UndefinedVariable("x".to_string()));
}

#[test]
fn callee_assignments_do_not_leak_into_caller() {
    let src = "int f(int x) { x := 100 } int main() { int x := 1; f(x); x }";
    assert_value(src, &[], 1);
}

#[test]
fn arguments_are_evaluated_left_to_right_in_caller_frame() {
    let src = "
        int pair(int a, int b) { ((a * 10) + b) }
        int main() { int x := 1; pair(x := (x + 1), x := (x * 3)) }
    ";
    assert_value(src, &[], 26);
}

#[test]
fn later_declaration_wins() {
    let src = "int f() { 1 } int f() { 2 } int main() { f() }";
    assert_value(src, &[], 2);
}

#[test]
fn unknown_variable_is_error() {
    assert_runtime_error(&expr_main("foo"),
                         &[],
                         &RuntimeError::UndefinedVariable("foo".to_string()));
}

#[test]
fn unknown_function_is_error() {
    assert_runtime_error(&expr_main("bar(1)"),
                         &[],
                         &RuntimeError::UndefinedFunction("bar".to_string()));
}

#[test]
fn missing_main_is_error() {
    assert_runtime_error("int helper() { 1 }", &[], &RuntimeError::MissingEntryPoint);
}

#[test]
fn wrong_call_arity_is_error() {
    let src = "int f(int a) { a } int main() { f(1, 2) }";
    assert_runtime_error(src,
                         &[],
                         &RuntimeError::ArityMismatch { expected: 1,
                                                        got:      2, });
}

#[test]
fn wrong_entry_arity_is_error() {
    let src = "int main(int a) { a }";
    assert_runtime_error(src,
                         &[],
                         &RuntimeError::ArityMismatch { expected: 1,
                                                        got:      0, });
    assert_runtime_error(src,
                         &["1", "2"],
                         &RuntimeError::ArityMismatch { expected: 1,
                                                        got:      2, });
}

#[test]
fn invalid_argument_is_error() {
    assert_runtime_error("int main(int a) { a }",
                         &["ten"],
                         &RuntimeError::InvalidArgument("ten".to_string()));
    assert_runtime_error("int main(int a) { a }",
                         &["1.5"],
                         &RuntimeError::InvalidArgument("1.5".to_string()));
}

#[test]
fn bool_local_must_be_zero_or_one() {
    assert_value("int main() { bool b := (3 > 2); b }", &[], 1);
    assert_runtime_error("int main() { bool b := 2; b }",
                         &[],
                         &RuntimeError::TypeMismatch { name:     "b".to_string(),
                                                       declared: simplang::ast::Type::Bool, });
}

#[test]
fn valueless_operand_is_error() {
    assert_runtime_error(&expr_main("(1 + while false do { skip })"),
                         &[],
                         &RuntimeError::MissingValue("the right operand"));
    assert_runtime_error("unit nothing() { newline } int main() { (nothing() * 2) }",
                         &[],
                         &RuntimeError::MissingValue("the left operand"));
    assert_runtime_error(&expr_main("if print 1 then { 1 } else { 2 }"),
                         &[],
                         &RuntimeError::MissingValue("the if condition"));
}

#[test]
fn valueless_expression_in_value_position_is_error() {
    assert_runtime_error("int id(int a) { a } int main() { id(while false do { skip }) }",
                         &[],
                         &RuntimeError::MissingValue("a call argument"));
    assert_runtime_error("int main() { int x := print 1; x }",
                         &[],
                         &RuntimeError::MissingValue("a local initializer"));
    assert_runtime_error("int main() { int x; x := newline; x }",
                         &[],
                         &RuntimeError::MissingValue("the assigned value"));
    assert_runtime_error("int main() { while space do { skip } }",
                         &[],
                         &RuntimeError::MissingValue("the while condition"));
    assert_runtime_error("int main() { repeat { skip } until print 0 }",
                         &[],
                         &RuntimeError::MissingValue("the repeat condition"));
    assert_runtime_error(&expr_main("print { }"),
                         &[],
                         &RuntimeError::MissingValue("the print operand"));
}

#[test]
fn print_primitives() {
    assert_output(&expr_main("print 12; space; print -3; newline"), &[], "12 -3\n");
    assert_output(&expr_main("print space; print newline; print (2 * 21)"), &[], " \n42");
}

#[test]
fn output_keeps_evaluation_order() {
    let src = "
        int noisy(int x) { print x; x }
        int main() { (noisy(1) + noisy(2)); newline; noisy(3) }
    ";
    assert_output(src, &[], "12\n3");
}

#[test]
fn runtime_error_aborts_program() {
    let src = "int main() { print 7; (1 / 0) }";
    match get_output(src, &[] as &[&str]) {
        Err(Error::Runtime(RuntimeError::DivisionByZero)) => {},
        other => panic!("expected division by zero, got {other:?}"),
    }
}

#[test]
fn comments_are_ignored() {
    let src = "
        // entry point
        int main() {
            /* a block
               comment */
            (1 + 1) // trailing
        }
    ";
    assert_value(src, &[], 2);

    assert_value("int main() { /* note **/ 1 }", &[], 1);
    assert_value("int main() { /* ** */ /** doc */ 2 }", &[], 2);
    assert_value("int main() {\n/* a *\n * b **/\n 3 }", &[], 3);
}

#[test]
fn syntax_errors_are_reported() {
    assert!(matches!(get_result(&expr_main("(1 + )"), &[] as &[&str]),
                     Err(Error::Parse(ParseError::UnexpectedToken { .. }))));
    assert!(matches!(get_result("int main() { (1 + 2 }", &[] as &[&str]),
                     Err(Error::Parse(ParseError::UnexpectedToken { .. }))));
    assert!(matches!(get_result("int main() { 1", &[] as &[&str]),
                     Err(Error::Parse(ParseError::UnexpectedEndOfInput { line: 1 }))));
    assert!(matches!(get_result("", &[] as &[&str]),
                     Err(Error::Parse(ParseError::EmptyProgram))));
    assert!(matches!(get_result("int main() { 1 # 2 }", &[] as &[&str]),
                     Err(Error::Parse(ParseError::UnexpectedToken { .. }))));
}

#[test]
fn oversized_literal_is_parse_error() {
    assert!(matches!(get_result(&expr_main("99999999999999999999"), &[] as &[&str]),
                     Err(Error::Parse(ParseError::LiteralTooLarge { line: 1 }))));
    assert!(matches!(get_result("int main() {\n  9223372036854775808\n}", &[] as &[&str]),
                     Err(Error::Parse(ParseError::LiteralTooLarge { line: 2 }))));
}

#[test]
fn most_negative_literal_matches_argument() {
    assert_value(&expr_main("-9223372036854775808"), &[], i64::MIN);
    assert_value(&expr_main("9223372036854775807"), &[], i64::MAX);
    assert_value("int main(int a) { (a == -9223372036854775808) }",
                 &["-9223372036854775808"],
                 1);
}

#[test]
fn parse_errors_carry_line_numbers() {
    let src = "int main() {\n  1;\n  )\n}";
    assert!(matches!(get_result(src, &[] as &[&str]),
                     Err(Error::Parse(ParseError::UnexpectedToken { line: 3, .. }))));
}

#[test]
fn end_of_input_is_reported_on_last_line() {
    assert_eq!(simplang::parse_program("int main() {\n  1;\n  2"),
               Err(ParseError::UnexpectedEndOfInput { line: 3 }));
    assert_eq!(simplang::parse_program("int main() {\n  (1 +\n\n"),
               Err(ParseError::UnexpectedEndOfInput { line: 2 }));
    assert_eq!(simplang::parse_program("int f(int a,"),
               Err(ParseError::UnexpectedEndOfInput { line: 1 }));
}
