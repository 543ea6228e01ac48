//! Blinky on a host loop: two states toggling an LED with non-blocking
//! 300 ms delays, plus a couple of deferred tasks draining ahead of them.
//!
//! Shows the static-machine pattern: one global instance, states as plain
//! `fn` items that reach it to arm their successor.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use fsm::{callable, Fsm, SystemClock};
use once_cell::sync::Lazy;

static MACHINE: Lazy<Arc<Fsm>> =
    Lazy::new(|| Arc::new(Fsm::with_name("blinky", Arc::new(SystemClock::new()))));

fn led_on() {
    println!("LED on");
    MACHINE.transition(callable(led_off), 300);
}

fn led_off() {
    println!("LED off");
    MACHINE.transition(callable(led_on), 300);
}

fn main() {
    MACHINE.init(callable(led_on));
    MACHINE
        .post(callable(|| println!("task: self-test")))
        .unwrap();
    MACHINE
        .post(callable(|| println!("task: report version 1.0.0")))
        .unwrap();

    let start = Instant::now();
    while start.elapsed() < Duration::from_secs(2) {
        MACHINE.poll();
        thread::sleep(Duration::from_millis(1));
    }
}
