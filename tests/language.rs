use pylite::{
    error::{DiagnosticKind, ParseError, RuntimeErrorKind},
    interpret, interpreter::evaluator::core::Context, interpreter::printer,
    interpreter::value::Value, parse, run_with_context, InterpreterError,
};

fn assert_output(src: &str, expected: &str) {
    match interpret(src) {
        Ok(output) => assert_eq!(output, expected, "wrong output for script: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_parse_failure(src: &str, kind: DiagnosticKind, line: usize) {
    match interpret(src) {
        Ok(_) => panic!("Script parsed but was expected to fail: {src}"),
        Err(InterpreterError::Parse(e)) => {
            assert_eq!(e.kind(), kind, "wrong diagnostic kind: {e}");
            assert_eq!(e.line(), line, "wrong line number: {e}");
        },
        Err(InterpreterError::Runtime(e)) => {
            panic!("Script failed at runtime instead of parse time: {e}")
        },
    }
}

fn assert_runtime_failure(src: &str, kind: RuntimeErrorKind) {
    match interpret(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail: {src}"),
        Err(InterpreterError::Runtime(e)) => {
            assert_eq!(e.kind(), kind, "wrong runtime kind: {e}");
        },
        Err(InterpreterError::Parse(e)) => {
            panic!("Script failed at parse time instead of runtime: {e}")
        },
    }
}

#[test]
fn integer_arithmetic_stays_exact() {
    assert_output("print(2 + 3)", "5\n");
    assert_output("print(7 - 10)", "-3\n");
    assert_output("print(6 * 7)", "42\n");
}

#[test]
fn integer_overflow_wraps_instead_of_panicking() {
    assert_output("print(9223372036854775807 + 1)", "-9223372036854775808\n");
    assert_output("print(4611686018427387904 * 2)", "-9223372036854775808\n");
}

#[test]
fn division_always_yields_a_float() {
    assert_output("print(7 / 2)", "3.5\n");
    assert_output("print(10 / 2)", "5.0\n");
    assert_output("print(1.0 / 4)", "0.25\n");
}

#[test]
fn precedence_and_parentheses() {
    assert_output("print(3 + 5 * 2)", "13\n");
    assert_output("print((3 + 5) * 2)", "16\n");
    assert_output("print(10 - 4 - 3)", "3\n");
}

#[test]
fn float_literals_keep_their_tag() {
    assert_output("x = 3.0; print(x)", "3.0\n");
    assert_output("print(2.5 + 2.5)", "5.0\n");
    assert_output("print(2 + 3.5)", "5.5\n");
}

#[test]
fn division_by_zero_is_error() {
    assert_runtime_failure("print(1 / 0)", RuntimeErrorKind::ZeroDivisionError);
    assert_runtime_failure("x = 5; print(x / 0.0)", RuntimeErrorKind::ZeroDivisionError);
}

#[test]
fn division_by_zero_discards_no_earlier_output() {
    // Output produced before the failing statement is lost with `interpret`,
    // but stays in a shared context.
    let ast = parse("print(1); print(1 / 0)").unwrap();
    let mut context = Context::new();

    assert!(run_with_context(&ast, &mut context).is_err());
    assert_eq!(context.take_output(), "1\n");
}

#[test]
fn drained_error_output_does_not_leak_into_the_next_run() {
    let mut context = Context::new();

    let failing = parse("print(1); print(1 / 0)").unwrap();
    assert!(run_with_context(&failing, &mut context).is_err());

    // A session over a shared context drains the buffer after a failed run.
    assert_eq!(context.take_output(), "1\n");

    let ok = parse("x = 5; print(x)").unwrap();
    run_with_context(&ok, &mut context).unwrap();

    assert_eq!(context.take_output(), "5\n");
}

#[test]
fn for_loop_over_half_open_range() {
    assert_output("for i in range(2, 5): print(i)", "2\n3\n4\n");
    assert_output("for i in range(0, 3): print(i * i)", "0\n1\n4\n");
}

#[test]
fn empty_range_runs_zero_iterations() {
    assert_output("for i in range(3, 3): print(i)", "");
    assert_output("for i in range(5, 2): print(i)", "");
}

#[test]
fn loop_iterator_stays_bound_after_the_loop() {
    let ast = parse("for i in range(2, 5): x = i").unwrap();
    let mut context = Context::new();

    run_with_context(&ast, &mut context).unwrap();

    assert_eq!(context.get_variable("i"), Some(&Value::Integer(4)));
    assert_eq!(context.get_variable("x"), Some(&Value::Integer(4)));
}

#[test]
fn range_bounds_must_be_integers() {
    assert_runtime_failure("for i in range(1.5, 3): print(i)", RuntimeErrorKind::TypeError);
    assert_runtime_failure("for i in range(0, \"3\"): print(i)", RuntimeErrorKind::TypeError);
}

#[test]
fn assignments_persist_across_statements() {
    assert_output("x = 42; print(x)", "42\n");
    assert_output("x = 1; x = x + 1; x = x + 1; print(x)", "3\n");
    assert_output("flag = True; print(flag)", "True\n");
    assert_output("s = \"hello\"; print(s)", "hello\n");
}

#[test]
fn lists_hold_mixed_values() {
    assert_output("x = [1, True, \"a\"]; print(x)", "[1, True, a]\n");
    assert_output("x = []; print(x)", "[]\n");
    assert_output("x = [1 + 1, 2 * 2]; print(x)", "[2, 4]\n");
}

#[test]
fn list_concatenation() {
    assert_output("x = [1, 2]; y = x + x; print(y)", "[1, 2, 1, 2]\n");
    assert_output("a = [1]; b = []; c = a + b; print(c)", "[1]\n");
}

#[test]
fn string_concatenation() {
    assert_output("print(\"foo\" + \"bar\")", "foobar\n");
    assert_runtime_failure("print(\"a\" + 1)", RuntimeErrorKind::TypeError);
}

#[test]
fn if_branches_on_the_condition() {
    assert_output(
        "x = 10; if x > 5: print(\"big\") else: print(\"small\")",
        "big\n",
    );
    assert_output(
        "x = 2; if x > 5: print(\"big\") else: print(\"small\")",
        "small\n",
    );
    assert_output("x = 1; if x == 1: print(\"yes\")", "yes\n");
    assert_output("x = 1; if x == 2: print(\"yes\")", "");
}

#[test]
fn bodies_absorb_following_statements() {
    // Everything after the colon, joined by `;`, belongs to the body.
    assert_output(
        "x = 10; while x > 8: print(str(x)); x = x - 1",
        "10\n9\n",
    );
    assert_output("if 1 < 2: x = 1; print(x); print(x + 1)", "1\n2\n");
}

#[test]
fn while_loop_counts_down() {
    let ast = parse("x = 10; while x > 8: print(str(x)); x = x - 1").unwrap();
    let mut context = Context::new();

    run_with_context(&ast, &mut context).unwrap();

    assert_eq!(context.get_variable("x"), Some(&Value::Integer(8)));
}

#[test]
fn mixed_numeric_comparison() {
    assert_output("if 1 == 1.0: print(1)", "1\n");
    assert_output("if 0.5 < 1: print(1)", "1\n");
    assert_output("if 2 != 2.0: print(1) else: print(2)", "2\n");
}

#[test]
fn string_comparison_is_lexicographic() {
    assert_output("if \"abc\" < \"abd\": print(1)", "1\n");
    assert_output("if \"a\" == \"a\": print(1)", "1\n");
}

#[test]
fn unrelated_types_only_support_equality() {
    assert_output("if 1 == \"1\": print(1) else: print(2)", "2\n");
    assert_runtime_failure("if True < False: print(1)", RuntimeErrorKind::TypeError);
    assert_runtime_failure("x = [1]; y = [2]; if x < y: print(1)", RuntimeErrorKind::TypeError);
}

#[test]
fn str_builtin_formats_any_value() {
    assert_output("print(str(42))", "42\n");
    assert_output("print(str(3.5) + \"!\")", "3.5!\n");
    assert_output("x = [1, 2]; print(str(x))", "[1, 2]\n");
    assert_output("print(str(True))", "True\n");
}

#[test]
fn str_builtin_requires_one_argument() {
    assert_runtime_failure("print(str())", RuntimeErrorKind::TypeError);
    assert_runtime_failure("print(str(1, 2))", RuntimeErrorKind::TypeError);
}

#[test]
fn unknown_function_is_a_name_error() {
    assert_runtime_failure("print(len([1]))", RuntimeErrorKind::NameError);
}

#[test]
fn undefined_variable_is_a_name_error() {
    assert_runtime_failure("print(missing)", RuntimeErrorKind::NameError);
    assert_runtime_failure("x = y + 1", RuntimeErrorKind::NameError);
}

#[test]
fn illegal_character_reports_its_line() {
    assert_parse_failure("x = 1 @ 2", DiagnosticKind::LexError, 1);
    assert_parse_failure("x = 1\ny = 2 $ 3", DiagnosticKind::LexError, 2);
}

#[test]
fn missing_colon_is_a_syntax_error() {
    assert_parse_failure("if x > 5 print(1)", DiagnosticKind::SyntaxError, 1);
    assert_parse_failure("while x < 5 x = 1", DiagnosticKind::SyntaxError, 1);
}

#[test]
fn missing_colon_names_the_offending_token() {
    match interpret("if x > 5 print(1)") {
        Err(InterpreterError::Parse(ParseError::ExpectedToken {
            expected,
            found,
            line,
        })) => {
            assert_eq!(expected, "':'");
            assert_eq!(found, "Print");
            assert_eq!(line, 1);
        },
        other => panic!("expected a missing-colon diagnostic, got {other:?}"),
    }
}

#[test]
fn malformed_constructs_are_syntax_errors() {
    assert_parse_failure("x =", DiagnosticKind::SyntaxError, 0);
    assert_parse_failure("print(1", DiagnosticKind::SyntaxError, 1);
    assert_parse_failure("for i in range(1): print(i)", DiagnosticKind::SyntaxError, 1);
    assert_parse_failure("x = 1 2", DiagnosticKind::SyntaxError, 1);
}

#[test]
fn condition_requires_a_comparison_operator() {
    assert_parse_failure("if x: print(1)", DiagnosticKind::SyntaxError, 1);
    assert_parse_failure("while 1 + 1: print(1)", DiagnosticKind::SyntaxError, 1);
}

#[test]
fn parse_errors_carry_their_line_number() {
    assert_parse_failure("x = 1;\ny = 2;\nif y > 1 print(y)", DiagnosticKind::SyntaxError, 3);
}

#[test]
fn ast_rendering_matches_the_tree_shape() {
    let ast = parse("x = 1 + 2").unwrap();

    assert_eq!(
        printer::render(&ast),
        "Block:\n  \
           Assignment:\n    \
             Variable(x)\n    \
             BinOp(op='+')\n      \
               Number(1)\n      \
               Number(2)\n"
    );
}

#[test]
fn ast_rendering_of_control_flow() {
    let ast = parse("for i in range(1, 5): x = 10").unwrap();

    assert_eq!(
        printer::render(&ast),
        "Block:\n  \
           For:\n    \
             Iterator: i\n    \
             Range Start:\n      \
               Number(1)\n    \
             Range End:\n      \
               Number(5)\n    \
             Body:\n      \
               Assignment:\n        \
                 Variable(x)\n        \
                 Number(10)\n"
    );
}

#[test]
fn context_is_shared_across_runs() {
    let mut context = Context::new();

    let assign = parse("total = 0").unwrap();
    run_with_context(&assign, &mut context).unwrap();

    let accumulate = parse("for i in range(1, 5): total = total + i").unwrap();
    run_with_context(&accumulate, &mut context).unwrap();

    let report = parse("print(total)").unwrap();
    run_with_context(&report, &mut context).unwrap();

    assert_eq!(context.take_output(), "10\n");
}

#[test]
fn truthiness_follows_the_value() {
    assert!(Value::Integer(1).truthy());
    assert!(!Value::Integer(0).truthy());
    assert!(!Value::Float(0.0).truthy());
    assert!(!Value::Str(String::new()).truthy());
    assert!(Value::Str("x".to_owned()).truthy());
    assert!(!Value::from(Vec::new()).truthy());
    assert!(Value::from(vec![Value::Integer(0)]).truthy());
}
