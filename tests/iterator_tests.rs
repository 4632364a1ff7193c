use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use growvec::GrowVec;

struct DropTally(Arc<AtomicUsize>);

impl Drop for DropTally {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_forward_iteration_round_trips_the_source() {
    let source = [3, 1, 4, 1, 5];
    let v = GrowVec::from_slice(&source).unwrap();

    let collected: Vec<i32> = v.iter().copied().collect();

    assert_eq!(collected, source);
}

#[test]
fn test_reverse_iteration_yields_the_source_reversed() {
    let v = GrowVec::from_slice(&[1, 2, 3]).unwrap();

    let reversed: Vec<i32> = v.iter_rev().copied().collect();
    assert_eq!(reversed, [3, 2, 1]);

    // `iter().rev()` is the same cursor
    let reversed: Vec<i32> = v.iter().rev().copied().collect();
    assert_eq!(reversed, [3, 2, 1]);
}

#[test]
fn test_empty_vector_yields_nothing() {
    let v: GrowVec<i32> = GrowVec::new();

    assert_eq!(v.iter().next(), None);
    assert_eq!(v.iter_rev().next(), None);
    assert_eq!(v.into_iter().next(), None);
}

#[test]
fn test_iter_mut_writes_through() {
    let mut v = GrowVec::from_slice(&[1, 2, 3]).unwrap();

    for item in v.iter_mut() {
        *item *= 2;
    }

    assert_eq!(v, [2, 4, 6]);
}

#[test]
fn test_for_loops_over_references() {
    let mut v = GrowVec::from_slice(&[1, 2, 3, 4]).unwrap();

    let mut sum = 0;
    for item in &v {
        sum += item;
    }
    assert_eq!(sum, 10);

    for item in &mut v {
        *item += 1;
    }
    assert_eq!(v, [2, 3, 4, 5]);
}

#[test]
fn test_into_iter_yields_owned_values_in_order() {
    let v = GrowVec::from_slice(&[String::from("a"), String::from("b")]).unwrap();

    let collected: Vec<String> = v.into_iter().collect();

    assert_eq!(collected, ["a", "b"]);
}

#[test]
fn test_into_iter_is_double_ended() {
    let v = GrowVec::from_slice(&[10, 20, 30, 40]).unwrap();
    let mut it = v.into_iter();

    assert_eq!(it.next(), Some(10));
    assert_eq!(it.next_back(), Some(40));
    assert_eq!(it.next(), Some(20));
    assert_eq!(it.next_back(), Some(30));
    assert_eq!(it.next(), None);
    assert_eq!(it.next_back(), None);
}

#[test]
fn test_size_hint_tracks_consumption() {
    let v = GrowVec::from_slice(&[10, 20, 30, 40]).unwrap();
    let mut it = v.into_iter();

    assert_eq!(it.size_hint(), (4, Some(4)));
    assert_eq!(it.next(), Some(10));
    assert_eq!(it.size_hint(), (3, Some(3)));
    assert_eq!(it.next_back(), Some(40));
    assert_eq!(it.size_hint(), (2, Some(2)));
    assert_eq!(it.len(), 2);
}

#[test]
fn test_dropping_into_iter_releases_the_unyielded_tail() {
    let drops = Arc::new(AtomicUsize::new(0));
    let mut v = GrowVec::new();
    for _ in 0..3 {
        v.push(DropTally(Arc::clone(&drops))).unwrap();
    }

    let mut it = v.into_iter();
    drop(it.next());
    assert_eq!(drops.load(Ordering::SeqCst), 1);

    drop(it);
    assert_eq!(drops.load(Ordering::SeqCst), 3);
}

#[test]
fn test_slice_iterators_are_random_access() {
    let v = GrowVec::from_slice(&[0, 1, 2, 3, 4, 5]).unwrap();
    let mut it = v.iter();

    assert_eq!(it.nth(2), Some(&2));
    assert_eq!(it.next(), Some(&3));
    assert_eq!(it.len(), 2);
}
