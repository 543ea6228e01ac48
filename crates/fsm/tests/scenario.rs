//! End-to-end scenario: a timed transition with deferred tasks
//! interleaved while the delay is still pending.

use std::sync::{Arc, Mutex};

use fsm::{callable, Fsm, FsmError, ManualClock, Step};

#[test]
fn timed_transition_with_interleaved_tasks() {
    let clock = Arc::new(ManualClock::new());
    let machine: Arc<Fsm> = Arc::new(Fsm::new(clock.clone()));
    let ran: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

    let state_b = {
        let ran = Arc::clone(&ran);
        callable(move || ran.lock().unwrap().push("B"))
    };
    let state_a = {
        let machine = Arc::clone(&machine);
        let ran = Arc::clone(&ran);
        callable(move || {
            ran.lock().unwrap().push("A");
            machine.transition(state_b.clone(), 500);
        })
    };

    machine.init(state_a);
    assert_eq!(machine.poll(), Step::State); // A runs and arms B in 500 ms

    // Polls spaced 1 ms apart do nothing while the delay is pending.
    for _ in 0..490 {
        clock.advance(1);
        assert_eq!(machine.poll(), Step::Idle);
    }

    // Two tasks posted before the delay elapses run on the next two polls
    // without touching B's clock.
    for name in ["T1", "T2"] {
        let ran = Arc::clone(&ran);
        machine
            .post(callable(move || ran.lock().unwrap().push(name)))
            .unwrap();
    }
    assert_eq!(machine.poll(), Step::Task);
    assert_eq!(machine.poll(), Step::Task);
    assert_eq!(machine.elapsed(), 490);

    clock.advance(10);
    assert_eq!(machine.poll(), Step::State); // B fires exactly once at 500 ms
    assert_eq!(*ran.lock().unwrap(), ["A", "T1", "T2", "B"]);
}

#[test]
fn default_capacity_backpressure() {
    let clock = Arc::new(ManualClock::new());
    let machine: Arc<Fsm> = Arc::new(Fsm::new(clock));

    machine.init(callable(|| ()));
    for _ in 0..machine.capacity() {
        machine.post(callable(|| ())).unwrap();
    }
    assert_eq!(machine.post(callable(|| ())), Err(FsmError::QueueFull));
    assert_eq!(machine.pending(), machine.capacity());
}
