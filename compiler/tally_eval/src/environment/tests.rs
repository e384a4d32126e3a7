#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::print_handler::buffer_handler;
use pretty_assertions::assert_eq;

fn quiet_env() -> Environment {
    Environment::builder().print_handler(buffer_handler()).build()
}

#[test]
fn test_scalar_set_get() {
    let mut env = quiet_env();
    env.set_scalar("x", 42.5);
    assert_eq!(env.get_scalar("x"), 42.5);

    env.set_scalar("x", -3.0);
    assert_eq!(env.get_scalar("x"), -3.0);

    env.set_scalar("x", 0.0);
    assert_eq!(env.get_scalar("x"), 0.0);
}

#[test]
fn test_unbound_reads_default_to_zero() {
    let env = quiet_env();
    assert_eq!(env.get_scalar("missing"), 0.0);
    assert_eq!(env.get_array_1d("missing", 7).unwrap(), 0.0);
    assert_eq!(env.get_array_2d("missing", 1, 2).unwrap(), 0.0);
    assert_eq!(env.cell_1d("missing", 0).unwrap(), None);
}

#[test]
fn test_declare_initializes_cells() {
    let mut env = quiet_env();
    env.declare_array_1d("a", 3, 0.0, 10.0).unwrap();

    for i in 0..3 {
        let cell = env.cell_1d("a", i).unwrap().unwrap();
        assert_eq!(cell.value(), 0.0);
        assert_eq!(cell.tag(), "");
    }
    assert_eq!(env.bounds("a"), Some(Bounds::new(0.0, 10.0)));
    assert_eq!(env.shape("a"), Some(ArrayShape::OneD { len: 3 }));
}

#[test]
fn test_write_in_range_stores_value_and_tag() {
    let mut env = quiet_env();
    env.declare_array_1d("a", 2, 0.0, 10.0).unwrap();

    let outcome = env.set_array_1d("a", 1, 7.5, "hot").unwrap();
    assert_eq!(outcome, WriteOutcome::Stored);
    let cell = env.cell_1d("a", 1).unwrap().unwrap();
    assert_eq!(cell.value(), 7.5);
    assert_eq!(cell.tag(), "hot");
}

#[test]
fn test_write_out_of_range_keeps_value_but_retags() {
    let handler = buffer_handler();
    let mut env = Environment::builder()
        .print_handler(handler.clone())
        .build();
    env.declare_array_1d("a", 1, 0.0, 10.0).unwrap();
    env.set_array_1d("a", 0, 4.0, "old").unwrap();

    let outcome = env.set_array_1d("a", 0, 11.0, "new").unwrap();
    assert_eq!(
        outcome.violation().map(ToString::to_string).as_deref(),
        Some("a range is MIN=0.00 and MAX=10.00. You have assigned=11.00.")
    );
    assert_eq!(env.get_array_1d("a", 0).unwrap(), 4.0);
    assert_eq!(env.cell_1d("a", 0).unwrap().unwrap().tag(), "new");
    assert_eq!(
        handler.output(),
        "a range is MIN=0.00 and MAX=10.00. You have assigned=11.00.\n"
    );
}

#[test]
fn test_nan_write_is_rejected_with_c_style_message() {
    let handler = buffer_handler();
    let mut env = Environment::builder()
        .print_handler(handler.clone())
        .build();
    env.declare_array_1d("a", 1, 0.0, 1.0).unwrap();

    let outcome = env
        .set_array_1d("a", 0, crate::apply(0.0, 0.0, '/').abs(), "t")
        .unwrap();
    assert!(outcome.violation().is_some());
    assert_eq!(env.get_array_1d("a", 0).unwrap(), 0.0);
    assert_eq!(env.cell_1d("a", 0).unwrap().unwrap().tag(), "t");
    assert_eq!(
        handler.output(),
        "a range is MIN=0.00 and MAX=1.00. You have assigned=nan.\n"
    );
}

#[test]
fn test_legacy_zero_write_only_retags() {
    let mut env = quiet_env();
    env.declare_array_1d("a", 1, -5.0, 5.0).unwrap();
    env.set_array_1d("a", 0, 3.0, "first").unwrap();

    let outcome = env.set_array_1d("a", 0, 0.0, "second").unwrap();
    assert_eq!(outcome, WriteOutcome::Unchanged);
    assert_eq!(env.get_array_1d("a", 0).unwrap(), 3.0);
    assert_eq!(env.cell_1d("a", 0).unwrap().unwrap().tag(), "second");
}

#[test]
fn test_explicit_zero_write_stores_zero() {
    let mut env = Environment::builder()
        .write_mode(WriteMode::Explicit)
        .print_handler(buffer_handler())
        .build();
    env.declare_array_1d("a", 1, -5.0, 5.0).unwrap();
    env.set_array_1d("a", 0, 3.0, "first").unwrap();

    assert_eq!(
        env.set_array_1d("a", 0, 0.0, "zeroed").unwrap(),
        WriteOutcome::Stored
    );
    assert_eq!(env.get_array_1d("a", 0).unwrap(), 0.0);

    // An absent payload still only retags.
    env.set_array_1d("a", 0, 2.0, "x").unwrap();
    assert_eq!(
        env.set_array_1d("a", 0, None, "y").unwrap(),
        WriteOutcome::Unchanged
    );
    assert_eq!(env.get_array_1d("a", 0).unwrap(), 2.0);
    assert_eq!(env.cell_1d("a", 0).unwrap().unwrap().tag(), "y");
}

#[test]
fn test_write_to_undeclared_array_is_noop() {
    let handler = buffer_handler();
    let mut env = Environment::builder()
        .print_handler(handler.clone())
        .build();

    assert_eq!(
        env.set_array_1d("ghost", 99, 1000.0, "t").unwrap(),
        WriteOutcome::Unbound
    );
    assert_eq!(env.get_array_1d("ghost", 99).unwrap(), 0.0);
    assert_eq!(handler.output(), "");
}

#[test]
fn test_index_out_of_range_fails() {
    let mut env = quiet_env();
    env.declare_array_1d("a", 2, 0.0, 10.0).unwrap();

    let expected = StoreError::IndexOutOfRange {
        name: "a".to_owned(),
        index: vec![2],
        shape: ArrayShape::OneD { len: 2 },
    };
    assert_eq!(env.get_array_1d("a", 2), Err(expected.clone()));
    assert_eq!(env.set_array_1d("a", 2, 1.0, "t"), Err(expected));
}

#[test]
fn test_out_of_range_index_does_not_print_violation() {
    let handler = buffer_handler();
    let mut env = Environment::builder()
        .print_handler(handler.clone())
        .build();
    env.declare_array_1d("a", 1, 0.0, 1.0).unwrap();

    assert!(env.set_array_1d("a", 5, 50.0, "t").is_err());
    assert_eq!(handler.output(), "");
}

#[test]
fn test_redeclare_replaces_binding() {
    let mut env = quiet_env();
    env.declare_array_1d("a", 3, 0.0, 10.0).unwrap();
    env.set_array_1d("a", 2, 9.0, "t").unwrap();

    env.declare_array_1d("a", 1, 0.0, 100.0).unwrap();
    assert_eq!(env.shape("a"), Some(ArrayShape::OneD { len: 1 }));
    assert_eq!(env.get_array_1d("a", 0).unwrap(), 0.0);
    assert!(env.get_array_1d("a", 2).is_err());
    assert_eq!(
        env.set_array_1d("a", 0, 50.0, "t").unwrap(),
        WriteOutcome::Stored
    );
}

#[test]
fn test_empty_array_is_valid() {
    let mut env = quiet_env();
    env.declare_array_1d("empty", 0, 0.0, 1.0).unwrap();
    assert_eq!(env.shape("empty"), Some(ArrayShape::OneD { len: 0 }));
    assert!(env.get_array_1d("empty", 0).is_err());
    assert_eq!(env.filter_by_tag("empty", "").unwrap().count(), 0);
}

#[test]
fn test_namespaces_are_independent() {
    let mut env = quiet_env();
    env.set_scalar("n", 5.0);
    env.declare_array_1d("n", 1, 0.0, 10.0).unwrap();
    env.declare_array_2d("n", 1, 1, 0.0, 10.0).unwrap();

    env.set_array_1d("n", 0, 1.0, "one").unwrap();
    env.set_array_2d("n", 0, 0, 2.0, "two").unwrap();

    assert_eq!(env.get_scalar("n"), 5.0);
    assert_eq!(env.get_array_1d("n", 0).unwrap(), 1.0);
    assert_eq!(env.get_array_2d("n", 0, 0).unwrap(), 2.0);
    // Metadata lookups prefer the 1-D namespace.
    assert_eq!(env.shape("n"), Some(ArrayShape::OneD { len: 1 }));
}

#[test]
fn test_permissive_accepts_unordered_bounds() {
    let mut env = quiet_env();
    env.declare_array_1d("a", 1, 10.0, 1.0).unwrap();

    // Nothing non-zero fits in an empty range.
    let outcome = env.set_array_1d("a", 0, 5.0, "t").unwrap();
    assert!(outcome.violation().is_some());
    assert_eq!(env.get_array_1d("a", 0).unwrap(), 0.0);
}

#[test]
fn test_strict_rejects_unordered_bounds() {
    let mut env = Environment::builder()
        .declare_policy(DeclarePolicy::Strict)
        .print_handler(buffer_handler())
        .build();
    env.declare_array_1d("a", 2, 0.0, 1.0).unwrap();

    let err = env.declare_array_1d("a", 5, 10.0, 1.0).unwrap_err();
    assert_eq!(
        err,
        StoreError::InvalidBounds {
            name: "a".to_owned(),
            bounds: Bounds::new(10.0, 1.0),
        }
    );
    // The previous binding survives.
    assert_eq!(env.shape("a"), Some(ArrayShape::OneD { len: 2 }));

    assert!(env.declare_array_2d("b", 1, 1, f64::NAN, 1.0).is_err());
    assert_eq!(env.shape("b"), None);
}

#[test]
fn test_oversized_declaration_fails() {
    let mut env = quiet_env();
    let err = env
        .declare_array_2d("huge", usize::MAX, 2, 0.0, 1.0)
        .unwrap_err();
    assert!(matches!(err, StoreError::TooLarge { .. }));
    assert_eq!(env.shape("huge"), None);
}

#[test]
fn test_report_by_tag_prints_values() {
    let handler = buffer_handler();
    let mut env = Environment::builder()
        .print_handler(handler.clone())
        .build();
    env.declare_array_1d("a", 3, 0.0, 100.0).unwrap();
    env.set_array_1d("a", 0, 12.5, "k").unwrap();
    env.set_array_1d("a", 2, 99.0, "k").unwrap();

    assert_eq!(env.report_by_tag("a", "k").unwrap(), 2);
    assert_eq!(handler.output(), "12.50\n99.00\n");
}

#[test]
fn test_report_by_tag_unknown_array() {
    let handler = buffer_handler();
    let env = Environment::builder()
        .print_handler(handler.clone())
        .build();

    assert_eq!(
        env.report_by_tag("nope", "k"),
        Err(StoreError::NameNotFound {
            name: "nope".to_owned()
        })
    );
    assert_eq!(handler.output(), "Array 'nope' not found.\n");
}

#[test]
fn test_builder_defaults() {
    let env = Environment::new();
    assert_eq!(env.write_mode(), WriteMode::Legacy);
    assert_eq!(env.declare_policy(), DeclarePolicy::Permissive);
    assert!(matches!(
        **env.print_handler(),
        crate::print_handler::PrintHandler::Stdout(_)
    ));
}
