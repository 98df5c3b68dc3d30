// Host-side tests for the selection listener slot.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod callback {
    include!("../src/callback.rs");
}

use callback::CallbackSlot;
use std::cell::Cell;
use std::rc::Rc;

type Listener = Rc<dyn Fn(&str, &str)>;

thread_local! {
    static SLOT: CallbackSlot<Listener> = const { CallbackSlot::new() };
}

fn fire(title: &str, description: &str) {
    if let Some(f) = SLOT.with(|s| s.get()) {
        f(title, description);
    }
}

#[test]
fn listener_can_clear_itself_while_running() {
    let calls = Rc::new(Cell::new(0));
    let seen = calls.clone();
    let once: Listener = Rc::new(move |_, _| {
        seen.set(seen.get() + 1);
        SLOT.with(|s| s.set(None));
    });
    SLOT.with(|s| s.set(Some(once)));

    fire("Project Alpha", "compiler");
    fire("Project Alpha", "compiler");

    assert_eq!(calls.get(), 1);
    assert!(SLOT.with(|s| s.get()).is_none());
}

#[test]
fn listener_can_replace_itself_while_running() {
    let titles = Rc::new(std::cell::RefCell::new(Vec::new()));
    let first_log = titles.clone();
    let second_log = titles.clone();
    let second: Listener = Rc::new(move |title, _| {
        second_log.borrow_mut().push(format!("second:{title}"));
    });
    let first: Listener = Rc::new(move |title, _| {
        first_log.borrow_mut().push(format!("first:{title}"));
        SLOT.with(|s| s.set(Some(second.clone())));
    });
    SLOT.with(|s| s.set(Some(first)));

    fire("Deep Mind", "");
    fire("System Zero", "");

    assert_eq!(
        *titles.borrow(),
        vec!["first:Deep Mind".to_string(), "second:System Zero".to_string()]
    );
}

#[test]
fn empty_slot_does_nothing() {
    let slot: CallbackSlot<Listener> = CallbackSlot::default();
    assert!(slot.get().is_none());
}
