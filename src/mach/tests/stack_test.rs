use super::*;

#[test]
fn test_push_pop() {
    let mut s = Stack::new();
    s.push(1);
    s.push(2);
    assert_eq!(s.len(), 2);
    assert_eq!(s.pop(), Ok(2));
    assert_eq!(s.pop(), Ok(1));
    assert_eq!(s.pop(), Err(Underflow));
    assert!(s.is_empty());
}

#[test]
fn test_peek() {
    let mut s: Stack<i64> = Stack::new();
    assert_eq!(s.peek(), Err(Underflow));
    s.push(7);
    assert_eq!(s.peek(), Ok(&7));
    assert_eq!(s.len(), 1);
}

#[test]
fn test_pop_2_order() {
    let mut s: Stack<i64> = vec![1, 2, 3].into_iter().collect();
    assert_eq!(s.pop_2(), Ok((3, 2)));
    assert_eq!(s.as_slice(), &[1]);
}

#[test]
fn test_pop_2_underflow_keeps_stack() {
    let mut s: Stack<i64> = vec![1].into_iter().collect();
    assert_eq!(s.pop_2(), Err(Underflow));
    assert_eq!(s.len(), 1);
}
