use crate::queue::TaskQueue;

#[test]
fn pops_in_fifo_order() {
    let mut queue: TaskQueue<u8, 4> = TaskQueue::new();
    queue.push(1).unwrap();
    queue.push(2).unwrap();
    queue.push(3).unwrap();

    assert_eq!(queue.pop(), Some(1));
    assert_eq!(queue.pop(), Some(2));
    assert_eq!(queue.pop(), Some(3));
    assert_eq!(queue.pop(), None);
}

#[test]
fn rejects_push_when_full() {
    let mut queue: TaskQueue<u8, 2> = TaskQueue::new();
    queue.push(10).unwrap();
    queue.push(11).unwrap();

    // The rejected value comes back and nothing changes.
    assert_eq!(queue.push(12), Err(12));
    assert_eq!(queue.len(), 2);
    assert!(queue.is_full());

    assert_eq!(queue.pop(), Some(10));
    queue.push(12).unwrap();
    assert_eq!(queue.pop(), Some(11));
    assert_eq!(queue.pop(), Some(12));
}

#[test]
fn indices_wrap_around_the_ring() {
    let mut queue: TaskQueue<u32, 3> = TaskQueue::new();
    // Push/pop enough times to lap the backing array repeatedly.
    for i in 0..20 {
        queue.push(i).unwrap();
        queue.push(i + 100).unwrap();
        assert_eq!(queue.pop(), Some(i));
        assert_eq!(queue.pop(), Some(i + 100));
    }
    assert!(queue.is_empty());
}

#[test]
fn zero_capacity_queue_is_inert() {
    let mut queue: TaskQueue<u8, 0> = TaskQueue::new();
    assert_eq!(queue.capacity(), 0);
    assert!(queue.is_empty());
    assert!(queue.is_full());
    assert_eq!(queue.push(1), Err(1));
    assert_eq!(queue.pop(), None);
}

#[test]
fn clear_empties_the_queue() {
    let mut queue: TaskQueue<u8, 4> = TaskQueue::new();
    queue.push(1).unwrap();
    queue.push(2).unwrap();
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.pop(), None);
    // Still usable afterwards.
    queue.push(3).unwrap();
    assert_eq!(queue.pop(), Some(3));
}
