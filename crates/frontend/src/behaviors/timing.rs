//! Generic timing wrappers for handlers that fire too often.

use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Run `f` with the latest argument once calls stop for `wait_ms`.
pub fn debounce<A, F>(f: F, wait_ms: u32) -> impl Fn(A)
where
    A: 'static,
    F: Fn(A) + 'static,
{
    let f = Rc::new(f);
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    move |arg: A| {
        let f = Rc::clone(&f);
        let timeout = Timeout::new(wait_ms, move || (*f)(arg));
        // Replacing drops the previous Timeout, which cancels it
        pending.borrow_mut().replace(timeout);
    }
}

/// Run `f` at most once per `limit_ms`; calls inside the window are dropped.
pub fn throttle<A, F>(f: F, limit_ms: u32) -> impl Fn(A)
where
    A: 'static,
    F: Fn(A) + 'static,
{
    let open = Rc::new(Cell::new(true));

    move |arg: A| {
        if !open.get() {
            return;
        }
        open.set(false);
        f(arg);

        let reopen = Rc::clone(&open);
        let _ = Timeout::new(limit_ms, move || reopen.set(true)).forget();
    }
}
