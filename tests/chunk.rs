use array_range::{chunk, chunk_array, Array, ArrayLikeExt, End, Object, Value};
use pretty_assertions::assert_eq;

// =============================================================================
// Partitioning
// =============================================================================

#[test]
fn even_split() {
    let a = ['a', 'b', 'c', 'd'];
    assert_eq!(a.chunk_ext(2), vec![vec!['a', 'b'], vec!['c', 'd']]);
}

#[test]
fn remainder_goes_in_the_last_chunk() {
    let a = ['a', 'b', 'c', 'd'];
    assert_eq!(a.chunk_ext(3), vec![vec!['a', 'b', 'c'], vec!['d']]);
}

#[test]
fn size_larger_than_the_source() {
    let a = [1, 2, 3];
    assert_eq!(a.chunk_ext(10), vec![vec![1, 2, 3]]);
    assert_eq!(a.chunk_ext(i64::MAX), vec![vec![1, 2, 3]]);
}

#[test]
fn absent_size_is_one() {
    let a = [1, 2, 3];
    assert_eq!(chunk(Some(&a), None), vec![vec![1], vec![2], vec![3]]);
}

#[test]
fn flattening_reproduces_the_source() {
    let a: Vec<u32> = (0..17).collect();
    for size in 1..20 {
        let chunks = a.chunk_ext(size);
        let expected_count = (a.len() + size as usize - 1) / size as usize;
        assert_eq!(chunks.len(), expected_count, "size={size}");
        assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= size as usize));
        let flat: Vec<u32> = chunks.into_iter().flatten().collect();
        assert_eq!(flat, a, "size={size}");
    }
}

#[test]
fn chunks_match_windowed_slices() {
    let a: Vec<i64> = (0..10).collect();
    let size = 4;
    for (k, c) in a.chunk_ext(size).into_iter().enumerate() {
        let k = k as i64;
        assert_eq!(c, a.slice_ext(k * size, (k + 1) * size));
    }
}

// =============================================================================
// Degenerate inputs
// =============================================================================

#[test]
fn zero_or_negative_size_gives_no_chunks() {
    let a = [1, 2, 3];
    assert_eq!(a.chunk_ext(0), Vec::<Vec<i32>>::new());
    assert_eq!(a.chunk_ext(-3), Vec::<Vec<i32>>::new());
    assert_eq!(chunk(Some(&a), Some(i64::MIN)), Vec::<Vec<i32>>::new());
}

#[test]
fn absent_or_empty_source_gives_no_chunks() {
    assert_eq!(chunk(None::<&[i32]>, Some(2)), Vec::<Vec<i32>>::new());
    assert_eq!(chunk(Some(&Vec::<i32>::new()), Some(2)), Vec::<Vec<i32>>::new());
    assert_eq!(chunk(Some(&Value::Undefined), Some(2)), Vec::<Vec<Value>>::new());
}

#[test]
fn callables_are_not_chunked() {
    let f = Value::function(2);
    assert_eq!(f.chunk_ext(1), Vec::<Vec<Value>>::new());
    // Slicing only looks at the length, which for a callable is its arity.
    assert_eq!(f.slice_ext(0, End::Absent), vec![Value::Undefined, Value::Undefined]);
}

// =============================================================================
// Sparse and dynamic sources
// =============================================================================

#[test]
fn sparse_chunks_are_dense() {
    let sparse: Array = [Some(Value::from(1)), None, None, Some(Value::from(4)), None]
        .into_iter()
        .collect();
    assert_eq!(
        sparse.chunk_ext(2),
        vec![
            vec![Value::from(1), Value::Undefined],
            vec![Value::Undefined, Value::from(4)],
            vec![Value::Undefined],
        ]
    );
}

#[test]
fn array_like_object_chunks() {
    let object: Object = [
        ("0", Value::from("a")),
        ("1", Value::from("b")),
        ("2", Value::from("c")),
        ("length", Value::from(3)),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        object.chunk_ext(2),
        vec![vec![Value::from("a"), Value::from("b")], vec![Value::from("c")]]
    );
}

#[test]
fn sparse_sources_flatten_back_to_their_dense_reading() {
    let mut sparse = Array::with_len(9);
    sparse.set(0, "a");
    sparse.set(4, 4);
    sparse.set(8, true);
    let dense: Vec<Value> = sparse.iter().cloned().collect();

    let mut object = Object::new();
    object.insert("length", 7);
    object.insert("1", "b");
    object.insert("6", 6);
    let object_dense = object.slice_ext(0, End::Absent);
    assert_eq!(object_dense.len(), 7);

    for size in 1..12 {
        let flat: Vec<Value> = sparse.chunk_ext(size).into_iter().flatten().collect();
        assert_eq!(flat, dense, "size={size}");

        let flat: Vec<Value> = object.chunk_ext(size).into_iter().flatten().collect();
        assert_eq!(flat, object_dense, "size={size}");
    }
}

#[test]
fn long_strings_chunk_by_character() {
    let text: String = "añb€".repeat(20_000);
    let value = Value::from(text.as_str());

    let chunks = value.chunk_ext(1);
    assert_eq!(chunks.len(), 80_000);
    assert_eq!(chunks[1], vec![Value::from("ñ")]);
    assert_eq!(chunks[79_999], vec![Value::from("€")]);

    let flat: String = value
        .chunk_ext(7)
        .into_iter()
        .flatten()
        .map(|c| match c {
            Value::String(s) => s,
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(flat, text);

    let inline = value.chunk_array_ext::<3>();
    assert_eq!(inline.len(), 26_667);
    assert_eq!(inline[26_666].as_slice(), &[Value::from("b"), Value::from("€")]);
}

#[test]
fn long_string_slices_from_the_end() {
    let value = Value::from("x".repeat(100_000).as_str());
    assert_eq!(value.slice_ext(-2, End::Absent), vec![Value::from("x"), Value::from("x")]);
    assert_eq!(value.slice_ext(99_999, 200_000), vec![Value::from("x")]);
}

// =============================================================================
// Fixed-capacity chunks
// =============================================================================

#[test]
fn chunk_array_matches_chunk() {
    let a: Vec<u8> = (0..11).collect();
    let inline: Vec<Vec<u8>> = chunk_array::<_, 4>(Some(&a))
        .into_iter()
        .map(|c| c.into_iter().collect())
        .collect();
    assert_eq!(inline, a.chunk_ext(4));
}

#[test]
fn chunk_array_last_chunk_is_partial() {
    let chunks = ['l', 'o', 'r', 'e', 'm'].chunk_array_ext::<3>();
    assert_eq!(chunks.len(), 2);
    assert!(chunks[0].is_full());
    assert_eq!(chunks[1].as_slice(), &['e', 'm']);
    assert_eq!(chunks[1].remaining_capacity(), 1);
}

#[test]
fn chunk_array_degenerate_inputs() {
    assert!(chunk_array::<[u8], 4>(None).is_empty());
    assert!([1, 2].chunk_array_ext::<0>().is_empty());
    assert!(Value::function(4).chunk_array_ext::<2>().is_empty());
}
