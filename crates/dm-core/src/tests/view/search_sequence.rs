use crate::SearchSequence;

#[test]
fn test_issue_is_monotonic() {
    let mut sequence = SearchSequence::new();

    assert_eq!(sequence.issue(), 1);
    assert_eq!(sequence.issue(), 2);
    assert_eq!(sequence.issue(), 3);
}

#[test]
fn test_in_order_responses_apply() {
    let mut sequence = SearchSequence::new();
    let first = sequence.issue();
    let second = sequence.issue();

    assert!(sequence.try_apply(first));
    assert!(sequence.try_apply(second));
    assert_eq!(sequence.last_applied(), Some(second));
}

#[test]
fn test_stale_response_is_discarded() {
    let mut sequence = SearchSequence::new();
    let slow = sequence.issue();
    let fast = sequence.issue();

    // The later request completes first; the earlier one must not
    // overwrite it when it finally arrives.
    assert!(sequence.try_apply(fast));
    assert!(!sequence.try_apply(slow));
    assert_eq!(sequence.last_applied(), Some(fast));
}

#[test]
fn test_duplicate_response_is_discarded() {
    let mut sequence = SearchSequence::new();
    let seq = sequence.issue();

    assert!(sequence.try_apply(seq));
    assert!(!sequence.try_apply(seq));
}

#[test]
fn test_unknown_counter_is_discarded() {
    let mut sequence = SearchSequence::new();

    assert!(!sequence.try_apply(0));
    assert!(!sequence.try_apply(7));
    assert_eq!(sequence.last_applied(), None);
}
