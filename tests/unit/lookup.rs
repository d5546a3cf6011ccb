//! Tests for length, get and set.

use super::common::{list_of, sample_list};
use linkchain::{LinkedList, ListError};

#[test]
fn test_length_counts_nodes() {
    assert_eq!(LinkedList::new().length(), 0);
    assert_eq!(sample_list().length(), 4);
}

#[test]
fn test_get_each_index() {
    let list = sample_list();
    let values: Vec<i32> = (0..4).map(|i| list.get(i).unwrap().value).collect();
    assert_eq!(values, vec![5, 10, 15, 20]);
}

#[test]
fn test_get_empty_list_is_not_found() {
    assert_eq!(LinkedList::new().get(0).unwrap_err(), ListError::Empty);
}

#[test]
fn test_get_upper_bound_is_exclusive() {
    let list = sample_list();
    assert_eq!(
        list.get(4).unwrap_err(),
        ListError::IndexOutOfRange {
            index: 4,
            length: 4
        }
    );
}

/// Regression: the lower and upper bound checks are independent, so an
/// index that would be negative as a signed number is still rejected.
#[test]
fn test_get_wrapped_negative_index_is_rejected() {
    let list = sample_list();
    let wrapped = (-1i64) as usize;
    assert_eq!(
        list.get(wrapped).unwrap_err(),
        ListError::IndexOutOfRange {
            index: usize::MAX,
            length: 4
        }
    );
}

#[test]
fn test_get_mut_allows_in_place_edit() {
    let mut list = sample_list();
    list.get_mut(2).unwrap().value += 1;
    assert_eq!(list.to_vec(), vec![5, 10, 16, 20]);
}

#[test]
fn test_set_overwrites_value() {
    let mut list = list_of(&[4, 5, 10, 15]);
    let node = list.set(2, 0).unwrap();
    assert_eq!(node.value, 2);
    assert_eq!(list.to_vec(), vec![2, 5, 10, 15]);
}

#[test]
fn test_set_missing_index_is_an_error() {
    let mut list = sample_list();
    assert!(matches!(
        list.set(1, 9),
        Err(ListError::IndexOutOfRange { index: 9, .. })
    ));
    assert_eq!(LinkedList::new().set(1, 0).unwrap_err(), ListError::Empty);
}
