//! Tests covering the collection utilities.

use std::cell::Cell;
use std::collections::HashSet;

use super::*;

fn as_set<T: Eq + Hash>(items: Vec<T>) -> HashSet<T> {
    items.into_iter().collect()
}

// =============================================================================
// EMPTINESS
// =============================================================================

#[test]
fn empty_or_absent_true_for_absent_sequence() {
    assert!(is_empty_or_absent(None::<Vec<i32>>));
    assert!(!is_present_and_nonempty(None::<Vec<i32>>));
}

#[test]
fn empty_or_absent_true_for_empty_sequence() {
    let empty: Vec<i32> = Vec::new();
    assert!(is_empty_or_absent(Some(&empty)));
    assert!(!is_present_and_nonempty(Some(&empty)));
}

#[test]
fn empty_or_absent_false_for_single_element() {
    assert!(!is_empty_or_absent(Some(vec![1])));
    assert!(is_present_and_nonempty(Some(vec![1, 2])));
}

#[test]
fn empty_check_pulls_at_most_one_element() {
    let pulled = Cell::new(0);
    let counting = (0..100).inspect(|_| pulled.set(pulled.get() + 1));
    assert!(!is_empty_or_absent(Some(counting)));
    assert_eq!(pulled.get(), 1);
}

#[test]
fn optional_sequence_methods_match_free_functions() {
    let missing: Option<&[u8]> = None;
    assert!(missing.is_empty_or_absent());
    assert!(Some(Vec::<u8>::new()).is_empty_or_absent());
    assert!(Some([1u8, 2]).is_present_and_nonempty());
}

// =============================================================================
// DUPLICATES
// =============================================================================

#[test]
fn duplicates_empty_when_all_unique() {
    let dups = duplicates(Some(vec![1, 2, 3, 4, 5])).unwrap();
    assert!(dups.is_empty());
}

#[test]
fn duplicates_reports_each_repeated_value_once() {
    let dups = duplicates(Some(vec![1, 2, 3, 4, 3, 5, 1])).unwrap();
    assert_eq!(as_set(dups), HashSet::from([1, 3]));
}

#[test]
fn duplicates_reports_triples_once() {
    let dups = duplicates(Some(vec![7, 7, 7, 8])).unwrap();
    assert_eq!(dups, vec![7]);
}

#[test]
fn duplicates_of_empty_sequence_is_empty() {
    let dups = duplicates(Some(Vec::<String>::new())).unwrap();
    assert!(dups.is_empty());
}

#[test]
fn duplicates_every_result_occurs_twice_and_every_repeat_is_reported() {
    let input = vec!["a", "b", "c", "a", "d", "c", "c", "e", "b", "f"];
    let dups = duplicates(Some(input.iter().copied())).unwrap();

    for value in &dups {
        assert!(input.iter().filter(|v| *v == value).count() >= 2);
    }
    for value in &input {
        let count = input.iter().filter(|v| *v == value).count();
        let reported = dups.iter().filter(|d| *d == value).count();
        assert_eq!(reported, usize::from(count > 1), "value {value}");
    }
}

#[test]
fn duplicates_keeps_first_occurrence_order() {
    let dups = duplicates(Some(vec![3, 1, 3, 2, 1, 2])).unwrap();
    assert_eq!(dups, vec![3, 1, 2]);
}

#[test]
fn duplicates_rejects_absent_sequence() {
    let err = duplicates(None::<Vec<i32>>).unwrap_err();
    assert_eq!(err, ExtError::InvalidArgument("sequence".to_string()));
}

#[test]
fn duplicates_with_threshold_drops_pairs() {
    let config = DuplicateConfig::new(3).unwrap();
    let dups = duplicates_with(Some(vec![1, 1, 2, 2, 2, 3]), &config).unwrap();
    assert_eq!(dups, vec![2]);
}

#[test]
fn duplicates_at_least_rejects_invalid_threshold() {
    let err = duplicates_at_least(Some(vec![1, 1]), 1).unwrap_err();
    assert_eq!(
        err,
        ExtError::Config(config::constants::ConfigError::InvalidMinOccurrences(1))
    );
}

// =============================================================================
// DUPLICATES BY KEY
// =============================================================================

#[test]
fn duplicates_by_maps_groups_through_result_fn() {
    let items = vec!["apple", "banana", "apple", "cherry", "banana"];
    let upper = duplicates_by(Some(items), |s| *s, |group| group.key().to_uppercase()).unwrap();
    assert_eq!(
        as_set(upper),
        HashSet::from(["APPLE".to_string(), "BANANA".to_string()])
    );
}

#[test]
fn duplicates_by_groups_by_key_not_identity() {
    let words = vec!["one", "two", "six", "three", "seven"];
    let by_len = duplicates_by(Some(words), |w| w.len(), |group| group.into_parts()).unwrap();
    assert_eq!(
        by_len,
        vec![(3, vec!["one", "two", "six"]), (5, vec!["three", "seven"])]
    );
}

#[test]
fn duplicates_by_result_fn_sees_every_member() {
    let readings = vec![(1, 10), (2, 5), (1, 30), (1, 20)];
    let totals = duplicates_by(
        Some(readings),
        |(sensor, _)| *sensor,
        |group| group.members().iter().map(|(_, v)| v).sum::<i32>(),
    )
    .unwrap();
    assert_eq!(totals, vec![60]);
}

#[test]
fn duplicates_by_rejects_absent_sequence() {
    let result = duplicates_by(None::<Vec<u8>>, |b| *b, |g| g.len());
    assert!(matches!(result, Err(ExtError::InvalidArgument(_))));
}

#[test]
fn group_accessors() {
    let groups = duplicates_by(Some(vec!['x', 'x']), |c| *c, |g| g).unwrap();
    let group = &groups[0];
    assert_eq!(*group.key(), 'x');
    assert_eq!(group.len(), 2);
    assert!(!group.is_empty());
    assert_eq!(group.clone().into_iter().collect::<String>(), "xx");
    assert_eq!(group.clone().into_key(), 'x');
}

// =============================================================================
// ABSENT ITEMS
// =============================================================================

#[test]
fn count_absent_items_counts_none_elements() {
    let values = vec![Some(1), None, Some(3), None, None];
    assert_eq!(count_absent_items(Some(&values)).unwrap(), 3);
    assert_eq!(count_absent_items(Some(values)).unwrap(), 3);
}

#[test]
fn count_absent_items_zero_for_all_present() {
    assert_eq!(count_absent_items(Some([Some('a'), Some('b')])).unwrap(), 0);
}

#[test]
fn count_absent_items_rejects_absent_sequence() {
    let result = count_absent_items(None::<Vec<Option<u8>>>);
    assert!(matches!(result, Err(ExtError::InvalidArgument(_))));
}

// =============================================================================
// EXTENSION METHODS
// =============================================================================

#[test]
fn sequence_ext_methods() {
    let values = vec![4, 4, 5];
    assert_eq!(values.iter().duplicates(), vec![&4]);
    assert_eq!(values.iter().duplicates_by(|v| **v % 2, |g| *g.key()), vec![0]);
    assert_eq!(vec![None, Some(1)].into_iter().count_absent(), 1);

    let strict = DuplicateConfig::new(3).unwrap();
    assert!(values.into_iter().duplicates_with(&strict).is_empty());
}

#[test]
fn optional_sequence_rejects_absent_instead_of_empty() {
    let missing: Option<Vec<i32>> = None;
    assert_eq!(
        missing.clone().duplicates(),
        Err(ExtError::InvalidArgument("sequence".to_string()))
    );
    assert!(matches!(
        missing.duplicates_by(|v| *v, |g| g.len()),
        Err(ExtError::InvalidArgument(_))
    ));
    assert!(matches!(
        None::<Vec<Option<u8>>>.count_absent_items(),
        Err(ExtError::InvalidArgument(_))
    ));
}

#[test]
fn optional_sequence_groups_inner_elements() {
    assert_eq!(Some(vec![1, 1, 2]).duplicates().unwrap(), vec![1]);
    assert_eq!(
        Some(vec!["ab", "ac", "b"])
            .duplicates_by(|s| s.as_bytes()[0], |g| g.len())
            .unwrap(),
        vec![2]
    );
    assert_eq!(
        Some(vec![None, Some(3), None]).count_absent_items().unwrap(),
        2
    );
}
