use lrstack::{ParseError, ParserStatus};
use lrstack_samples::calc::CalcParser;
use lrstack_samples::calc::parser_data::TokenID as CalcToken;
use lrstack_samples::recovery::ListParser;
use lrstack_samples::recovery::parser_data::TokenID as ListToken;
use lrstack_samples::recovery::{ERROR_ITEM, ListBuilder, ListValue};
use lrstack_samples::{AstBuilder, Evaluator, SampleError, build_ast, evaluate, greet, parse_list};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn number_plus_number_evaluates() {
    init_logger();
    let mut parser = CalcParser::new(Evaluator::default());
    assert!(!parser.post(CalcToken::Number, 3));
    assert!(!parser.post(CalcToken::Add, 0));
    assert!(!parser.post(CalcToken::Number, 4));
    assert!(parser.post(CalcToken::End, 0));
    assert!(parser.accepted());
    assert_eq!(parser.accept(), Some(7));
}

#[test]
fn doubled_operator_is_a_syntax_error() {
    init_logger();
    let mut parser = CalcParser::new(Evaluator::default());
    assert!(!parser.post(CalcToken::Number, 3));
    assert!(!parser.post(CalcToken::Add, 0));
    assert!(parser.post(CalcToken::Add, 0));
    assert!(parser.error());
    assert_eq!(parser.accept(), None);

    assert!(parser.post(CalcToken::End, 0));
    assert!(parser.error());
    assert_eq!(parser.actions().syntax_errors, 1);
    assert_eq!(
        parser.status(),
        &ParserStatus::Errored(ParseError::Syntax {
            token: "add",
            state: 3
        })
    );
}

#[test]
fn end_of_input_alone_fails_immediately() {
    init_logger();
    let mut parser = CalcParser::new(Evaluator::default());
    assert!(parser.post(CalcToken::End, 0));
    assert!(parser.error());
    assert_eq!(parser.stats().shifts, 0);
    assert_eq!(parser.accept(), None);
}

#[test]
fn recovery_production_embeds_error_value() {
    init_logger();
    let mut parser = ListParser::new(ListBuilder::default());
    let tokens = [
        (ListToken::LParen, ListValue::None),
        (ListToken::Number, ListValue::Number(1)),
        (ListToken::Comma, ListValue::None),
        (ListToken::Star, ListValue::None),
        (ListToken::Comma, ListValue::None),
        (ListToken::Number, ListValue::Number(3)),
        (ListToken::RParen, ListValue::None),
    ];
    for (token_id, value) in tokens {
        assert!(!parser.post(token_id, value));
    }
    assert!(parser.post(ListToken::End, ListValue::None));
    assert!(!parser.error());
    assert_eq!(
        parser.accept(),
        Some(ListValue::List(vec![1, ERROR_ITEM, 3]))
    );
    assert_eq!(parser.actions().errors_caught, 1);
}

#[test]
fn overflow_inside_a_reduction_rolls_back() {
    init_logger();
    let mut parser = CalcParser::with_capacity(Evaluator::default(), 4);
    assert!(!parser.post(CalcToken::Number, 1));
    assert!(!parser.post(CalcToken::Mul, 0));
    assert!(!parser.post(CalcToken::Number, 2));
    assert_eq!(parser.depth(), 4);
    assert_eq!(parser.actions().stack_overflows, 0);

    // reducing `1 * 2` pops three frames, but they stay reserved until the
    // step commits, so the goto push finds no free slot
    assert!(parser.post(CalcToken::End, 0));
    assert!(parser.error());
    assert_eq!(parser.actions().stack_overflows, 1);
    assert_eq!(parser.depth(), 4);
    assert_eq!(
        parser.last_error(),
        Some(&ParseError::StackOverflow { capacity: 4 })
    );

    assert!(parser.post(CalcToken::End, 0));
    assert_eq!(parser.actions().stack_overflows, 1);
    assert_eq!(parser.accept(), None);
}

#[test]
fn both_actions_share_the_calculator_tables() {
    init_logger();
    let source = "7 - 2 * 3 + 12 / 4";
    let value = evaluate(source).unwrap();
    let tree = build_ast(source).unwrap();
    assert_eq!(value, 4);
    assert_eq!(tree.eval(), Some(value));

    let mut parser = CalcParser::new(AstBuilder::default());
    parser.post(CalcToken::End, Default::default());
    assert!(parser.error());
    assert_eq!(parser.actions().syntax_errors, 1);
}

#[test]
fn sample_entry_points() {
    init_logger();
    assert_eq!(evaluate("3 + 4"), Ok(7));
    assert!(matches!(
        evaluate("3 + + 4"),
        Err(SampleError::Parse(ParseError::Syntax { token: "add", .. }))
    ));
    assert!(matches!(
        evaluate("3 & 4"),
        Err(SampleError::Scan { offset: 2, .. })
    ));
    assert_eq!(parse_list("(1, *, 3)"), Ok(vec![1, -1, 3]));
    let greeting = greet("Guten Tag, ", "Welt").unwrap();
    assert_eq!(greeting.as_str(), "Guten Tag, Welt");
}
