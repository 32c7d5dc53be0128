use super::*;
use std::cell::RefCell;

#[test]
fn test_visible_skeleton_loads_once() {
    let mut tracker = SkeletonTracker::new();
    tracker.observe("card-1");
    tracker.observe("card-2");

    let loaded = RefCell::new(Vec::new());
    let loader = |s: &&'static str| loaded.borrow_mut().push(*s);

    let revealed = tracker.reveal([("card-1", true), ("card-2", false)], &loader);
    assert_eq!(revealed, vec!["card-1"]);
    assert!(!tracker.is_pending(&"card-1"));
    assert!(tracker.is_pending(&"card-2"));

    // Observer reports the same element again (e.g. scrolled out and back).
    let revealed = tracker.reveal([("card-1", true)], &loader);
    assert!(revealed.is_empty());
    assert_eq!(*loaded.borrow(), vec!["card-1"]);
}

#[test]
fn test_duplicate_entries_in_one_batch() {
    let mut tracker = SkeletonTracker::new();
    tracker.observe(1);

    let calls = RefCell::new(0);
    let loader = |_: &i32| *calls.borrow_mut() += 1;
    let revealed = tracker.reveal([(1, true), (1, true)], &loader);

    assert_eq!(revealed, vec![1]);
    assert_eq!(*calls.borrow(), 1);
    assert!(tracker.is_empty());
}

#[test]
fn test_observe_ignores_duplicates() {
    let mut tracker = SkeletonTracker::new();
    assert!(tracker.observe(7));
    assert!(!tracker.observe(7));
    assert_eq!(tracker.pending(), 1);
}

#[test]
fn test_unknown_elements_ignored() {
    let mut tracker = SkeletonTracker::new();
    tracker.observe(1);
    let revealed = tracker.reveal([(2, true)], &NoopContentLoader);
    assert!(revealed.is_empty());
    assert_eq!(tracker.pending(), 1);
}

#[test]
fn test_membership_only_shrinks() {
    let mut tracker = SkeletonTracker::new();
    for id in 0..5 {
        tracker.observe(id);
    }
    let mut previous = tracker.pending();
    for id in [3, 0, 3, 4, 1, 2, 2] {
        tracker.reveal([(id, true)], &NoopContentLoader);
        assert!(tracker.pending() <= previous);
        previous = tracker.pending();
    }
    assert!(tracker.is_empty());
}

#[test]
fn test_clear_returns_remaining() {
    let mut tracker = SkeletonTracker::new();
    tracker.observe('a');
    tracker.observe('b');
    tracker.reveal([('a', true)], &NoopContentLoader);

    assert_eq!(tracker.clear(), vec!['b']);
    assert!(tracker.is_empty());
}

#[test]
fn test_card_markup_structure() {
    let html = card_skeleton_markup();

    assert_eq!(html.matches("class=\"skeleton-card\"").count(), 1);
    assert_eq!(html.matches("skeleton-image").count(), 1);
    assert_eq!(html.matches("skeleton-title").count(), 1);
    assert_eq!(html.matches("skeleton-text").count(), 2);
    assert_eq!(html.matches("skeleton-button").count(), 1);
    assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
    assert!(html.contains("skeleton skeleton-text short"));
    assert!(html.contains("style=\"margin-top: 1rem;\""));
}

#[test]
fn test_card_parts_order() {
    let classes: Vec<&str> = SkeletonPart::CARD.iter().map(|p| p.class()).collect();
    assert_eq!(classes[0], "skeleton skeleton-image");
    assert_eq!(classes[4], "skeleton skeleton-button");
    assert_eq!(SkeletonPart::Title.style(), None);
}
