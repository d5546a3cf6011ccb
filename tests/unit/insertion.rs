//! Tests for insert_end, insert_beginning and insert_at.

use super::common::{assert_list_well_formed, list_of, sample_list};
use linkchain::{LinkedList, ListError};

#[test]
fn test_insert_end_appends_in_order() {
    let mut list = LinkedList::new();
    for value in [10, 15, 20] {
        list.insert_end(value);
        assert_list_well_formed(&list);
    }
    assert_eq!(list.to_vec(), vec![10, 15, 20]);
    assert_eq!(list.head().map(|n| n.value), Some(10));
}

#[test]
fn test_insert_beginning_prepends() {
    let mut list = sample_list();
    list.insert_beginning(4);
    list.insert_beginning(3);
    assert_eq!(list.to_vec(), vec![3, 4, 5, 10, 15, 20]);
    assert_list_well_formed(&list);
}

#[test]
fn test_insert_at_zero_matches_insert_beginning() {
    let mut a = sample_list();
    let mut b = sample_list();
    a.insert_at(1, 0).unwrap();
    b.insert_beginning(1);
    assert_eq!(a, b);
}

#[test]
fn test_insert_at_length_appends() {
    let mut list = sample_list();
    let length = list.length();
    list.insert_at(25, length).unwrap();
    assert_eq!(list.to_vec(), vec![5, 10, 15, 20, 25]);
    assert_list_well_formed(&list);
}

#[test]
fn test_insert_at_middle_splices() {
    let mut list = list_of(&[3, 4, 5, 10, 15, 20]);
    list.insert_at(8, 3).unwrap();
    assert_eq!(list.to_vec(), vec![3, 4, 5, 8, 10, 15, 20]);
    assert_list_well_formed(&list);
}

/// `length - 1` lands before the current last node, not after it.
#[test]
fn test_insert_at_last_index_keeps_value_at_index() {
    let mut list = list_of(&[1, 3, 4, 5, 8, 10, 15, 20]);
    list.insert_at(25, 7).unwrap();
    assert_eq!(list.get(7).unwrap().value, 25);
    assert_eq!(list.tail().unwrap().value, 20);
}

#[test]
fn test_insert_at_beyond_length_fails_without_mutating() {
    let mut list = sample_list();
    let err = list.insert_at(99, 10).unwrap_err();
    assert_eq!(
        err,
        ListError::IndexOutOfRange {
            index: 10,
            length: 4
        }
    );
    assert_eq!(list, sample_list());
}

#[test]
fn test_insert_returns_reference_to_new_node() {
    let mut list = sample_list();
    let node = list.insert_at(7, 2).unwrap();
    assert_eq!(node.value, 7);
    assert_eq!(node.next().map(|n| n.value), Some(15));
}
