use array_range::{compact, Array, ArrayLikeExt, Object, Value};
use pretty_assertions::assert_eq;

fn mixed() -> Array {
    [
        Value::from(0),
        Value::from(1),
        Value::from(false),
        Value::from(2),
        Value::from(""),
        Value::from(3),
    ]
    .into_iter()
    .collect()
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn drops_falsy_values() {
    assert_eq!(
        compact(Some(mixed())),
        vec![Value::from(1), Value::from(2), Value::from(3)]
    );
}

#[test]
fn drops_every_kind_of_falsy_value() {
    let values: Array = [
        Value::Null,
        Value::Undefined,
        Value::Number(f64::NAN),
        Value::Number(-0.0),
        Value::from("0"),
        Value::Array(Array::new()),
        Value::Object(Object::new()),
        Value::function(0),
        Value::from(true),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        compact(Some(&values)),
        vec![
            &Value::from("0"),
            &Value::Array(Array::new()),
            &Value::Object(Object::new()),
            &Value::function(0),
            &Value::from(true),
        ]
    );
}

#[test]
fn holes_are_dropped() {
    let mut sparse = Array::with_len(4);
    sparse.set(1, "b");
    sparse.set(3, 4);
    assert_eq!(compact(Some(&sparse)), vec![&Value::from("b"), &Value::from(4)]);
}

#[test]
fn native_sequences() {
    assert_eq!(compact(Some(vec![0, 1, 0, 2, 3])), vec![1, 2, 3]);
    assert_eq!(compact(Some(vec![0.0, f64::NAN, 1.5])), vec![1.5]);
    assert_eq!(compact(Some([None, Some(0), Some(7)])), vec![Some(7)]);
    assert_eq!(["", "a", ""].compact_ext(), vec![&"a"]);
    assert_eq!(
        compact(Some(vec![String::new(), String::from("s")])),
        vec![String::from("s")]
    );
}

// =============================================================================
// Degenerate inputs and properties
// =============================================================================

#[test]
fn absent_or_empty_source() {
    assert_eq!(compact(None::<Array>), Vec::<Value>::new());
    assert_eq!(compact(Some(Array::new())), Vec::<Value>::new());
    assert_eq!(compact(Some(Vec::<i32>::new())), Vec::<i32>::new());
}

#[test]
fn idempotent() {
    let once = compact(Some(mixed()));
    let twice = compact(Some(once.clone()));
    assert_eq!(once, twice);
}

#[test]
fn idempotent_over_native_sequences() {
    let ints: [&[i64]; 4] = [&[], &[0, 0], &[0, -1, 2, 0, i64::MIN], &[7]];
    for a in ints {
        let once = compact(Some(a.iter().copied()));
        assert_eq!(compact(Some(once.clone())), once, "{a:?}");
        assert!(once.iter().all(|&n| n != 0));
    }

    let floats = [
        vec![],
        vec![f64::NAN, -0.0, 0.0],
        vec![1.5, f64::NAN, -0.0, f64::INFINITY, -2.0],
    ];
    for a in floats {
        let once = compact(Some(a.clone()));
        // NaN never survives, so `==` comparison is sound here.
        assert_eq!(compact(Some(once.clone())), once, "{a:?}");
        assert!(once.iter().all(|n| *n != 0.0 && !n.is_nan()));
    }

    let options = [
        vec![None, Some(0u8), Some(3)],
        vec![Some(1), Some(2)],
        vec![None, None],
    ];
    for a in options {
        let once = compact(Some(a.clone()));
        assert_eq!(compact(Some(once.clone())), once, "{a:?}");
        assert!(once.iter().all(|o| matches!(o, Some(n) if *n != 0)));
    }
}

#[test]
fn idempotent_over_sparse_arrays() {
    let mut with_holes = Array::with_len(6);
    with_holes.set(1, 0);
    with_holes.set(2, "z");
    with_holes.set(4, Value::Null);
    with_holes.set(5, f64::NAN);

    let mut all_holes = Array::with_len(3);
    all_holes.set(1, false);

    for array in [with_holes, all_holes, mixed(), Array::new()] {
        let once = compact(Some(array.clone()));
        let twice = compact(Some(once.clone()));
        assert_eq!(twice, once, "{array:?}");
        assert!(once.iter().all(|v| !v.is_nullish()));
    }
}

#[test]
fn source_is_not_consumed_when_borrowed() {
    let source = mixed();
    let kept = compact(Some(&source));
    assert_eq!(kept.len(), 3);
    assert_eq!(source.len(), 6);
}
