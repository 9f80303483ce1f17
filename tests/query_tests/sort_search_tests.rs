//! Tests for sort_by and search
//!
//! These tests verify:
//! - Ascending order for every field selector
//! - Equal keys keep their input order
//! - Length preservation and idempotence
//! - Input is never modified
//! - Binary search hits, misses, duplicates and empty input

use studentdb::query::{search, sort_by, Field, FieldValue};
use studentdb::StudentRecord;

// =============================================================================
// Helper Functions
// =============================================================================

fn class() -> Vec<StudentRecord> {
    vec![
        StudentRecord::new(1, "Ann", 20, 3.5),
        StudentRecord::new(2, "Bo", 22, 3.9),
        StudentRecord::new(3, "Cy", 21, 3.2),
    ]
}

fn ids(records: &[StudentRecord]) -> Vec<i64> {
    records.iter().map(|r| r.id).collect()
}

/// Deterministic pseudo-random sequence (LCG)
fn scrambled(n: usize, seed: u64) -> Vec<i64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((state >> 33) % 50) as i64
        })
        .collect()
}

// =============================================================================
// sort_by Tests
// =============================================================================

#[test]
fn test_sort_by_age_scenario() {
    let sorted = sort_by(&class(), |r| r.age);

    let pairs: Vec<_> = sorted.iter().map(|r| (r.id, r.age)).collect();
    assert_eq!(pairs, vec![(1, 20), (3, 21), (2, 22)]);
}

#[test]
fn test_sort_by_each_field() {
    let mut records = class();
    records.push(StudentRecord::new(4, "Al", 23, 3.0));

    assert_eq!(ids(&sort_by(&records, |r| Field::Id.key(r))), vec![1, 2, 3, 4]);
    assert_eq!(ids(&sort_by(&records, |r| Field::Name.key(r))), vec![4, 1, 2, 3]);
    assert_eq!(ids(&sort_by(&records, |r| Field::Age.key(r))), vec![1, 3, 2, 4]);
    assert_eq!(ids(&sort_by(&records, |r| Field::Grade.key(r))), vec![4, 3, 1, 2]);
}

#[test]
fn test_sort_empty_and_single() {
    let empty: Vec<StudentRecord> = Vec::new();
    assert!(sort_by(&empty, |r| r.id).is_empty());

    let one = vec![StudentRecord::new(9, "Solo", 30, 2.0)];
    assert_eq!(sort_by(&one, |r| r.id), one);
}

#[test]
fn test_sort_leaves_input_untouched() {
    let input = vec![
        StudentRecord::new(3, "C", 20, 1.0),
        StudentRecord::new(1, "A", 20, 1.0),
        StudentRecord::new(2, "B", 20, 1.0),
    ];
    let before = input.clone();

    let sorted = sort_by(&input, |r| r.id);

    assert_eq!(input, before);
    assert_eq!(ids(&sorted), vec![1, 2, 3]);
}

#[test]
fn test_equal_keys_keep_input_order() {
    let input = vec![
        StudentRecord::new(10, "x", 21, 1.0),
        StudentRecord::new(11, "y", 20, 1.0),
        StudentRecord::new(12, "z", 21, 1.0),
        StudentRecord::new(13, "w", 20, 1.0),
        StudentRecord::new(14, "v", 21, 1.0),
    ];

    let sorted = sort_by(&input, |r| r.age);

    assert_eq!(ids(&sorted), vec![11, 13, 10, 12, 14]);
}

#[test]
fn test_sort_is_idempotent() {
    let input: Vec<_> = scrambled(200, 7)
        .into_iter()
        .enumerate()
        .map(|(i, age)| StudentRecord::new(i as i64 + 1, format!("s{}", i), age + 1, 2.0))
        .collect();

    let once = sort_by(&input, |r| r.age);
    let twice = sort_by(&once, |r| r.age);

    assert_eq!(once, twice);
}

#[test]
fn test_sort_matches_std_stable_sort() {
    for seed in 1..20 {
        let input = scrambled(seed as usize * 13, seed);

        let ours = sort_by(&input, |v| *v);
        let mut expected = input.clone();
        expected.sort();

        assert_eq!(ours.len(), input.len());
        assert_eq!(ours, expected);
    }
}

#[test]
fn test_sort_already_sorted_and_reversed() {
    let ascending: Vec<i64> = (0..500).collect();
    let descending: Vec<i64> = (0..500).rev().collect();

    assert_eq!(sort_by(&ascending, |v| *v), ascending);
    assert_eq!(sort_by(&descending, |v| *v), ascending);
}

#[test]
fn test_sort_all_equal_keys() {
    let input: Vec<_> = (1..=6).map(|id| StudentRecord::new(id, "same", 20, 3.0)).collect();

    assert_eq!(sort_by(&input, |r| r.age), input);
}

// =============================================================================
// search Tests
// =============================================================================

#[test]
fn test_search_scenario() {
    let sorted = sort_by(&class(), |r| r.age);

    let (position, found) = search(&sorted, &21, |r| r.age).unwrap();
    assert_eq!(position, 1);
    assert_eq!(found.name, "Cy");

    assert!(search(&sorted, &99, |r| r.age).is_none());
}

#[test]
fn test_search_empty() {
    let empty: Vec<StudentRecord> = Vec::new();

    assert!(search(&empty, &1, |r| r.id).is_none());
}

#[test]
fn test_search_finds_every_present_key() {
    let values: Vec<i64> = (0..100).map(|v| v * 2).collect();

    for (i, v) in values.iter().enumerate() {
        assert_eq!(search(&values, v, |x| *x), Some((i, v)));
    }
}

#[test]
fn test_search_misses_absent_keys() {
    let values: Vec<i64> = (0..100).map(|v| v * 2).collect();

    for v in [-1, 1, 99, 199, 1000] {
        assert!(search(&values, &v, |x| *x).is_none());
    }
}

#[test]
fn test_search_duplicates_returns_some_match() {
    let input = scrambled(300, 42);
    let sorted = sort_by(&input, |v| *v);

    for target in 0..50 {
        let present = sorted.contains(&target);
        match search(&sorted, &target, |v| *v) {
            Some((i, v)) => {
                assert!(present);
                assert_eq!(*v, target);
                assert_eq!(sorted[i], target);
            }
            None => assert!(!present),
        }
    }
}

#[test]
fn test_search_probes_lower_middle_first() {
    // Two equal keys: the first probe is index 0
    let sorted = vec![(5, 'a'), (5, 'b')];

    let (position, hit) = search(&sorted, &5, |p| p.0).unwrap();

    assert_eq!(position, 0);
    assert_eq!(hit.1, 'a');
}

#[test]
fn test_search_by_name_and_grade() {
    let by_name = sort_by(&class(), |r| Field::Name.key(r));
    let target = FieldValue::Text("Bo".to_string());
    let (_, hit) = search(&by_name, &target, |r| Field::Name.key(r)).unwrap();
    assert_eq!(hit.id, 2);

    let by_grade = sort_by(&class(), |r| Field::Grade.key(r));
    let target = Field::Grade.parse_value("3.2").unwrap();
    let (position, hit) = search(&by_grade, &target, |r| Field::Grade.key(r)).unwrap();
    assert_eq!((position, hit.id), (0, 3));
}

// =============================================================================
// Field Tests
// =============================================================================

#[test]
fn test_field_from_str() {
    assert_eq!("age".parse::<Field>().unwrap(), Field::Age);
    assert_eq!("GRADE".parse::<Field>().unwrap(), Field::Grade);
    assert_eq!(" Name ".parse::<Field>().unwrap(), Field::Name);
    assert!("height".parse::<Field>().is_err());
}

#[test]
fn test_parse_value_integers() {
    assert_eq!(Field::Age.parse_value("21").unwrap(), FieldValue::Int(21));
    assert_eq!(Field::Id.parse_value(" 7 ").unwrap(), FieldValue::Int(7));

    for bad in ["", "-3", "2.5", "abc", "1e3", "99999999999999999999"] {
        assert!(Field::Id.parse_value(bad).is_err(), "{:?}", bad);
    }
}

#[test]
fn test_parse_value_grade() {
    assert_eq!(Field::Grade.parse_value("3.9").unwrap(), FieldValue::Real(3.9));
    assert_eq!(Field::Grade.parse_value("4").unwrap(), FieldValue::Real(4.0));
    assert_eq!(Field::Grade.parse_value(".5").unwrap(), FieldValue::Real(0.5));

    for bad in ["", ".", "1.2.3", "-1.0", "abc", "inf", "NaN"] {
        assert!(Field::Grade.parse_value(bad).is_err(), "{:?}", bad);
    }
}

#[test]
fn test_parse_value_name_verbatim() {
    assert_eq!(
        Field::Name.parse_value(" Ann ").unwrap(),
        FieldValue::Text(" Ann ".to_string())
    );
}

#[test]
fn test_field_value_ordering() {
    assert!(FieldValue::Int(1) < FieldValue::Int(2));
    assert!(FieldValue::Text("a".into()) < FieldValue::Text("b".into()));
    assert!(FieldValue::Real(0.5) < FieldValue::Real(1.5));
    assert_eq!(FieldValue::Real(2.0), FieldValue::Real(2.0));
    assert_eq!(FieldValue::Int(3).to_string(), "3");
}

#[test]
fn test_signed_zero_grades_are_one_key() {
    assert_eq!(FieldValue::Real(-0.0), FieldValue::Real(0.0));

    // Bypass the constructor so a raw -0.0 reaches the key selector
    let mut negative = StudentRecord::new(1, "Neg", 20, 0.0);
    negative.grade = -0.0;
    let records = vec![StudentRecord::new(2, "Pos", 20, 0.0), negative];

    let sorted = sort_by(&records, |r| Field::Grade.key(r));
    assert_eq!(ids(&sorted), vec![2, 1]);

    let target = FieldValue::Real(0.0);
    assert!(search(&sorted, &target, |r| Field::Grade.key(r)).is_some());
}
