//! Tests for reverse and rendering.

use super::common::{assert_list_well_formed, list_of, sample_list};
use linkchain::LinkedList;

#[test]
fn test_reverse_flips_order() {
    let mut list = list_of(&[5, 10, 15]);
    let head = list.reverse().map(|n| n.value);
    assert_eq!(head, Some(15));
    assert_eq!(list.to_vec(), vec![15, 10, 5]);
    assert_list_well_formed(&list);
}

#[test]
fn test_reverse_empty_and_single() {
    let mut empty = LinkedList::new();
    assert!(empty.reverse().is_none());
    assert!(empty.is_empty());

    let mut single = list_of(&[1]);
    assert_eq!(single.reverse().map(|n| n.value), Some(1));
    assert_list_well_formed(&single);
}

#[test]
fn test_reverse_twice_restores_list() {
    let mut list = sample_list();
    list.reverse();
    list.reverse();
    assert_eq!(list, sample_list());
}

#[test]
fn test_display_rendering() {
    let mut list = sample_list();
    assert_eq!(list.to_string(), "5->10->15->20->END");
    list.reverse();
    assert_eq!(list.to_string(), "20->15->10->5->END");
    assert_eq!(LinkedList::new().to_string(), "END");
}
