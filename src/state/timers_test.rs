use super::*;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn new_queue_is_empty() {
    let queue = TimerQueue::<u8>::new();
    assert!(queue.is_empty());
    assert_eq!(queue.next_deadline(), None);
}

#[test]
fn take_due_returns_only_expired_timers() {
    let mut queue = TimerQueue::new();
    queue.schedule('a', ms(1000));
    queue.schedule('b', ms(3000));

    assert!(queue.take_due(ms(999)).is_empty());
    assert_eq!(queue.take_due(ms(1000)), vec!['a']);
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.take_due(ms(10_000)), vec!['b']);
    assert!(queue.is_empty());
}

#[test]
fn take_due_orders_by_deadline() {
    let mut queue = TimerQueue::new();
    queue.schedule("late", ms(5000));
    queue.schedule("early", ms(1000));
    queue.schedule("mid", ms(3000));
    assert_eq!(queue.take_due(ms(6000)), vec!["early", "mid", "late"]);
}

#[test]
fn equal_deadlines_fire_in_scheduling_order() {
    let mut queue = TimerQueue::new();
    queue.schedule(1, ms(100));
    queue.schedule(2, ms(100));
    assert_eq!(queue.take_due(ms(100)), vec![1, 2]);
}

#[test]
fn schedule_replaces_existing_key() {
    let mut queue = TimerQueue::new();
    queue.schedule('a', ms(1000));
    queue.schedule('a', ms(4000));

    assert_eq!(queue.len(), 1);
    assert_eq!(queue.next_deadline(), Some(ms(4000)));
    assert!(queue.take_due(ms(1000)).is_empty());
}

#[test]
fn cancel_removes_pending_timer() {
    let mut queue = TimerQueue::new();
    queue.schedule('a', ms(1000));
    assert!(queue.is_pending('a'));
    assert!(queue.cancel('a'));
    assert!(!queue.is_pending('a'));
    assert!(!queue.cancel('a'));
    assert!(queue.take_due(ms(5000)).is_empty());
}

#[test]
fn next_deadline_is_earliest() {
    let mut queue = TimerQueue::new();
    queue.schedule('a', ms(3000));
    queue.schedule('b', ms(1000));
    assert_eq!(queue.next_deadline(), Some(ms(1000)));
}
