//! Tests for BoundedStack
//!
//! These tests verify:
//! - LIFO ordering of push / pop / top
//! - Capacity limit and overflow policy
//! - Empty-stack reporting (no sentinel values)
//! - Top-to-bottom printing

use slotdb::stack::{BoundedStack, DEFAULT_STACK_CAPACITY};
use slotdb::SlotDbError;

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_stack_is_empty() {
    let stack = BoundedStack::new();

    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.capacity(), DEFAULT_STACK_CAPACITY);
    assert_eq!(DEFAULT_STACK_CAPACITY, 25);
}

#[test]
fn test_push_then_top() {
    let mut stack = BoundedStack::new();

    stack.push(13).unwrap();
    stack.push(1).unwrap();

    assert_eq!(stack.top().unwrap(), 1);
    assert_eq!(stack.peek().unwrap(), 1);
    assert_eq!(stack.len(), 2);
}

#[test]
fn test_pop_is_lifo() {
    let mut stack = BoundedStack::new();
    stack.push_multiple([1, 2, 3]);

    assert_eq!(stack.pop().unwrap(), 3);
    assert_eq!(stack.pop().unwrap(), 2);
    assert_eq!(stack.pop().unwrap(), 1);
    assert!(stack.is_empty());
}

#[test]
fn test_push_multiple_keeps_order() {
    let mut stack = BoundedStack::new();

    let pushed = stack.push_multiple([13, 1, 114, 58]);

    assert_eq!(pushed, 4);
    assert_eq!(stack.print(), vec![58, 114, 1, 13]);
}

#[test]
fn test_negative_one_is_an_ordinary_value() {
    let mut stack = BoundedStack::new();

    stack.push(-1).unwrap();

    assert_eq!(stack.top().unwrap(), -1);
    assert_eq!(stack.pop().unwrap(), -1);
    assert!(matches!(stack.top(), Err(SlotDbError::StackEmpty)));
}

// =============================================================================
// Capacity Tests
// =============================================================================

#[test]
fn test_overflow_keeps_capacity_elements() {
    let mut stack = BoundedStack::new();

    for i in 0..25 {
        stack.push(i).unwrap();
    }
    let result = stack.push(25);

    assert!(matches!(result, Err(SlotDbError::StackFull { capacity: 25 })));
    assert_eq!(stack.len(), 25);
    assert!(stack.is_full());
    assert_eq!(stack.top().unwrap(), 24);
}

#[test]
fn test_push_multiple_drops_overflow_and_continues() {
    let mut stack = BoundedStack::with_capacity(3);

    let pushed = stack.push_multiple([1, 2, 3, 4, 5]);

    assert_eq!(pushed, 3);
    assert_eq!(stack.print(), vec![3, 2, 1]);
}

#[test]
fn test_push_after_pop_reuses_space() {
    let mut stack = BoundedStack::with_capacity(2);
    stack.push_multiple([1, 2]);

    stack.pop().unwrap();
    stack.push(9).unwrap();

    assert_eq!(stack.print(), vec![9, 1]);
}

#[test]
fn test_zero_capacity_stack_is_always_full() {
    let mut stack = BoundedStack::with_capacity(0);

    assert!(matches!(stack.push(1), Err(SlotDbError::StackFull { capacity: 0 })));
    assert!(stack.is_empty());
}

// =============================================================================
// Empty Stack Tests
// =============================================================================

#[test]
fn test_pop_then_top_on_emptied_stack() {
    let mut stack = BoundedStack::new();
    stack.push(5).unwrap();

    assert_eq!(stack.pop().unwrap(), 5);
    assert!(matches!(stack.pop(), Err(SlotDbError::StackEmpty)));
    assert!(matches!(stack.top(), Err(SlotDbError::StackEmpty)));
    assert!(stack.is_empty());
}

// =============================================================================
// Printing Tests
// =============================================================================

#[test]
fn test_print_does_not_mutate() {
    let mut stack = BoundedStack::new();
    stack.push_multiple([4, 5, 6]);

    let first = stack.print();
    let second = stack.print();

    assert_eq!(first, second);
    assert_eq!(stack.len(), 3);
}

#[test]
fn test_display_top_to_bottom() {
    let mut stack = BoundedStack::new();
    assert_eq!(stack.to_string(), "");

    stack.push_multiple([13, 1, 114, 58]);
    assert_eq!(stack.to_string(), "58 114 1 13");
}

#[test]
fn test_reference_walkthrough() {
    let mut stack = BoundedStack::new();

    stack.push_multiple([13, 1, 114, 58]);
    assert_eq!(stack.top().unwrap(), 58);

    stack.pop().unwrap();
    assert_eq!(stack.top().unwrap(), 114);

    stack.push(1415).unwrap();
    stack.push(48).unwrap();
    assert_eq!(stack.top().unwrap(), 48);
    assert_eq!(stack.to_string(), "48 1415 114 1 13");

    stack.pop().unwrap();
    assert_eq!(stack.top().unwrap(), 1415);
}
