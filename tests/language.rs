use listfunc::{
    error::{Error, ErrorKind},
    evaluate_line,
    get_result,
    interpreter::{
        evaluator::scope::GlobalScope,
        lexer::{TokenKind, tokenize},
        value::core::Value,
    },
    session::Outcome,
};

fn assert_success(src: &str) {
    if let Err(e) = get_result(src) {
        panic!("Script failed: {e}\n{src}");
    }
}

fn assert_failure(src: &str) -> Error {
    match get_result(src) {
        Ok(values) => panic!("Script succeeded with {values:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_kind(src: &str, kind: ErrorKind) {
    let error = assert_failure(src);
    assert_eq!(error.kind(), kind, "{src}: {error}");
}

/// Runs `src` and checks the rendering of the last value it produced.
fn assert_value(src: &str, expected: &str) {
    let values = get_result(src).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"));
    let last = values.last().unwrap_or_else(|| panic!("Script produced no value\n{src}"));
    assert_eq!(last.to_string(), expected, "{src}");
}

#[test]
fn lexing_an_application() {
    let kinds: Vec<_> = tokenize("add(1, 2)").unwrap().iter().map(|t| t.kind).collect();

    assert_eq!(kinds,
               [TokenKind::Identifier,
                TokenKind::OpenParen,
                TokenKind::IntLiteral,
                TokenKind::Comma,
                TokenKind::IntLiteral,
                TokenKind::CloseParen,
                TokenKind::EndOfInput]);
}

#[test]
fn mixed_numeric_equality() {
    assert_value("eq(1, 1.0)", "1");
    assert_value("eq(1, 1.0000000001)", "1");
    assert_value("eq(1, 1.0001)", "0");
}

#[test]
fn singleton_lists_are_transparent() {
    assert_value("eq([1], 1)", "1");
    assert_value("eq(1, [1])", "1");
    assert_value("eq([[[2.0]]], 2)", "1");
    assert_value("eq([1 1], 1)", "0");
}

#[test]
fn division_by_zero_produces_no_value() {
    assert_kind("div(10, 0)", ErrorKind::Range);
    assert_kind("div(1.5, 0.0)", ErrorKind::Range);
    assert_value("div(10, 4)", "2");
    assert_value("div(10, 4.0)", "2.500000");
}

#[test]
fn definition_and_redefinition() {
    assert_value("double<-add(#0,#0)\ndouble(21)", "42");
    assert_value("double <- add(#0, #0)\ndouble <- mul(#0, 3)\ndouble(21)", "63");
}

#[test]
fn head_and_tail() {
    assert_kind("head([])", ErrorKind::Range);
    assert_kind("tail(list())", ErrorKind::Range);
    assert_value("head(list(1,2,3))", "1");
    assert_value("tail(list(1,2,3))", "[2, 3]");
    assert_value("eq(tail(list(1,2,3)), [2 3])", "1");
}

#[test]
fn literal_values_round_trip() {
    let globals = GlobalScope::with_default_library();
    let values = [Value::Integer(0),
                  Value::Integer(-9_000_000_000),
                  Value::Real(0.1),
                  Value::Real(-123.456_789_012_345),
                  Value::Real(1e-9),
                  Value::Real(4.0),
                  Value::from(vec![]),
                  Value::from(vec![Value::Integer(1),
                                   Value::from(vec![Value::Real(2.5), Value::from(vec![])]),
                                   Value::Integer(-3)])];

    for original in values {
        let literal = original.to_literal();
        let parsed = match evaluate_line(&literal, &globals) {
            Ok(Outcome::Value(value)) => value,
            other => panic!("{literal} did not evaluate to a value: {other:?}"),
        };

        assert!(parsed.equals(&original), "{literal} gave {parsed}");

        let check = format!("eq({literal}, {literal})");
        assert_eq!(evaluate_line(&check, &globals).unwrap(), Outcome::Value(Value::Integer(1)));
    }
}

#[test]
fn argument_references_are_resolved_per_call() {
    assert_value("first <- #0\nsecond <- #1\nswap <- [second(#0, #1) first(#0, #1)]\nswap(1, 2)",
                 "[2, 1]");
    assert_value("k <- [#0 #0]\nk(add(1, 1))", "[2, 2]");
}

#[test]
fn dispatch_by_arity() {
    assert_value("f <- #0\nf <- [#0 #1]\nf(1)", "1");
    assert_value("f <- #0\nf <- [#0 #1]\nf(1, 2)", "[1, 2]");
    assert_kind("f <- #0\nf(1, 2)", ErrorKind::Dispatch);
    assert_kind("undefined(1)", ErrorKind::Dispatch);
    assert_kind("add(1)", ErrorKind::Dispatch);
}

#[test]
fn zero_arity_functions() {
    assert_value("five <- 5\nfive()", "5");
    assert_value("nums <- [1 2 3]\nlength(nums())", "3");
}

#[test]
fn recursion_through_if() {
    assert_value("fib <- if(le(#0, 3), 1, add(fib(sub(#0, 1)), fib(sub(#0, 2))))\nfib(15)",
                 "610");
    assert_value("len <- if(eq(#0, []), 0, add(1, len(tail(#0))))\nlen([5 6 7 8])", "4");
}

#[test]
fn logic_built_from_nand() {
    let not = "not <- nand(#0, #0)";
    let and = "and <- not(nand(#0, #1))";
    let or = "or <- nand(not(#0), not(#1))";

    assert_value(&format!("{not}\nnot(0)"), "1");
    assert_value(&format!("{not}\n{and}\nand(1, [])"), "0");
    assert_value(&format!("{not}\n{and}\nand(2, [1])"), "1");
    assert_value(&format!("{not}\n{or}\nor(0, 0.5)"), "1");
}

#[test]
fn real_functions() {
    assert_value("pow(2, 0.5)", "1.414214");
    assert_value("eq(sqrt(2), pow(2, 0.5))", "1");
    assert_value("eq(add(pow(sin(1), 2), pow(cos(1), 2)), 1)", "1");
}

#[test]
fn le_is_strict_and_typed() {
    assert_value("le(1, 2)", "1");
    assert_value("le(2, 2)", "0");
    assert_kind("le(1, 2.0)", ErrorKind::Type);
    assert_kind("le([1], [2])", ErrorKind::Type);
}

#[test]
fn comments_blank_lines_and_exit() {
    assert_value("# a comment\n\n   \n7\nexit\ndiv(1, 0)", "7");
    assert_success("exit\nthis is not parsed");
}

#[test]
fn lexical_errors() {
    assert_kind("add(1; 2)", ErrorKind::Lex);
    assert_kind("add(-, 2)", ErrorKind::Lex);
    assert_kind("f < 1", ErrorKind::Lex);
}

#[test]
fn syntax_errors() {
    for src in ["add(", "(1)", ")", "]", ",", "<- 1", "[1 2", "add(1, 2", "add 1", "add(1,)",
                "1 2", "f(#)", "list[1]"]
    {
        assert_kind(src, ErrorKind::Parse);
    }
}

#[test]
fn type_errors() {
    assert_kind("add([1], 2)", ErrorKind::Type);
    assert_kind("head(3)", ErrorKind::Type);
    assert_kind("map(0, 3)", ErrorKind::Type);
    assert_kind("add(f <- 1, 2)", ErrorKind::Type);
}

#[test]
fn range_errors() {
    assert_kind("#0", ErrorKind::Range);
    assert_kind("third <- #2\nthird(1, 2, #5)", ErrorKind::Range);
    assert_kind("mul(9223372036854775807, 2)", ErrorKind::Range);
    assert_kind("99999999999999999999", ErrorKind::Range);
}

#[test]
fn list_keyword_is_not_a_prefix() {
    assert_value("lists <- [#0]\nlists(4)", "[4]");
    assert_value("list()", "[]");
    assert_kind("list <- 1", ErrorKind::Parse);
}

#[test]
fn map_and_filter_leave_the_list_alone() {
    assert_value("inc <- add(#0, 1)\nmap(inc(0), [1 2 3])", "[1, 2, 3]");
    assert_value("filter(1, list(4, 5))", "[4, 5]");
}

#[test]
fn length_sentinel() {
    assert_value("length(3.5)", "-1");
    assert_value("length([[] []])", "2");
}

#[test]
fn real_functions_accept_large_integers() {
    assert_value("sqrt(10000000000000000)", "100000000.000000");
    assert_value("pow(10000000000000000, 1)", "10000000000000000.000000");
    assert_value("add(9007199254740993, 0.5)", "9007199254740992.000000");
    assert_value("eq(9007199254740993, 9007199254740992.0)", "1");
}

#[test]
fn runaway_recursion_is_a_range_error() {
    std::thread::Builder::new().stack_size(8 * 1024 * 1024)
                               .spawn(|| {
                                   assert_kind("loop <- loop(#0)\nloop(1)", ErrorKind::Range);

                                   let globals = GlobalScope::with_default_library();
                                   evaluate_line("count <- if(eq(#0, 0), 0, add(1, count(sub(#0, 1))))",
                                                 &globals).unwrap();
                                   assert!(evaluate_line("count(2000)", &globals).is_err());
                                   assert_eq!(evaluate_line("count(10)", &globals).unwrap(),
                                              Outcome::Value(Value::Integer(10)));
                               })
                               .unwrap()
                               .join()
                               .unwrap();
}

#[test]
fn deep_nesting_is_a_parse_error() {
    assert_kind(&"[".repeat(200_000), ErrorKind::Parse);
    assert_kind(&format!("{}{}", "head(".repeat(1000), ")".repeat(1000)), ErrorKind::Parse);
    assert_value(&format!("{}7{}", "[".repeat(100), "]".repeat(100)),
                 &format!("{}7{}", "[".repeat(100), "]".repeat(100)));
}
