//! Request scopes tie in-flight fetches to the component that started them.
//!
//! Each new request bumps the scope generation. A response is applied only if
//! it belongs to the latest request and the owning component is still mounted,
//! so a slow earlier response never overwrites a newer one and nothing writes
//! into disposed signals after the tab closes.

use leptos::prelude::on_cleanup;
use leptos::task::spawn_local;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct RequestScope {
    generation: Arc<AtomicU64>,
    alive: Arc<AtomicBool>,
}

impl Default for RequestScope {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestScope {
    pub fn new() -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Scope closed automatically when the current reactive owner is disposed.
    pub fn for_component() -> Self {
        let scope = Self::new();
        let on_drop = scope.clone();
        on_cleanup(move || on_drop.close());
        scope
    }

    pub fn begin(&self) -> RequestTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            generation: Some(generation),
            scope: self.clone(),
        }
    }

    /// Ticket that only checks liveness. Used for writes, which must not
    /// supersede an in-flight load and are not superseded by one either.
    pub fn watch(&self) -> RequestTicket {
        RequestTicket {
            generation: None,
            scope: self.clone(),
        }
    }

    /// Invalidates every outstanding ticket.
    pub fn close(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Runs `fut` and hands its output to `apply` only while the ticket is current.
    pub fn spawn<T, F, A>(&self, fut: F, apply: A)
    where
        T: 'static,
        F: Future<Output = T> + 'static,
        A: FnOnce(T) + 'static,
    {
        let pending = scoped(self.begin(), fut, apply);
        spawn_local(async move {
            pending.await;
        });
    }

    /// Runs a write. `apply` is skipped once the owning component is gone.
    pub fn run<T, F, A>(&self, fut: F, apply: A)
    where
        T: 'static,
        F: Future<Output = T> + 'static,
        A: FnOnce(T) + 'static,
    {
        let pending = scoped(self.watch(), fut, apply);
        spawn_local(async move {
            pending.await;
        });
    }
}

/// Awaits `fut`, then applies the output if `ticket` is still current.
/// Resolves to whether `apply` ran.
async fn scoped<T, F, A>(ticket: RequestTicket, fut: F, apply: A) -> bool
where
    F: Future<Output = T>,
    A: FnOnce(T),
{
    let output = fut.await;
    ticket.deliver(output, apply)
}

#[derive(Clone, Debug)]
pub struct RequestTicket {
    /// `None` for liveness-only tickets.
    generation: Option<u64>,
    scope: RequestScope,
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        self.scope.is_alive()
            && self
                .generation
                .map_or(true, |g| self.scope.generation.load(Ordering::SeqCst) == g)
    }

    /// Calls `apply(output)` if the ticket is still current.
    pub fn deliver<T>(&self, output: T, apply: impl FnOnce(T)) -> bool {
        if self.is_current() {
            apply(output);
            true
        } else {
            log::debug!("Dropping stale response (request {:?})", self.generation);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let scope = RequestScope::new();
        let first = scope.begin();
        assert!(first.is_current());
        let second = scope.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_closed_scope_rejects_everything() {
        let scope = RequestScope::new();
        let ticket = scope.begin();
        scope.clone().close();
        assert!(!scope.is_alive());
        assert!(!ticket.is_current());
        assert!(!scope.begin().is_current());
    }

    /// Polls a future that never waits on I/O to completion.
    fn resolve<F: Future>(fut: F) -> F::Output {
        use std::pin::pin;
        use std::task::{Context, RawWaker, RawWakerVTable, Waker};

        fn raw() -> RawWaker {
            RawWaker::new(std::ptr::null(), &VTABLE)
        }
        fn clone(_: *const ()) -> RawWaker {
            raw()
        }
        fn noop(_: *const ()) {}
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);

        // SAFETY: every vtable entry ignores the null data pointer.
        let waker = unsafe { Waker::from_raw(raw()) };
        let mut cx = Context::from_waker(&waker);
        let mut fut = pin!(fut);
        loop {
            if let std::task::Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
                return out;
            }
        }
    }

    #[test]
    fn test_response_after_close_is_dropped() {
        let scope = RequestScope::new();
        let applied = std::cell::Cell::new(None);
        let pending = scoped(scope.begin(), std::future::ready(7), |v| applied.set(Some(v)));
        scope.close();
        assert!(!resolve(pending));
        assert_eq!(applied.get(), None);
    }

    #[test]
    fn test_superseded_response_is_dropped() {
        let scope = RequestScope::new();
        let applied = std::cell::RefCell::new(Vec::new());
        let first = scoped(scope.begin(), std::future::ready("old"), |v| applied.borrow_mut().push(v));
        let second = scoped(scope.begin(), std::future::ready("new"), |v| applied.borrow_mut().push(v));
        assert!(resolve(second));
        assert!(!resolve(first));
        assert_eq!(*applied.borrow(), vec!["new"]);
    }

    #[test]
    fn test_write_survives_newer_load_but_not_close() {
        let scope = RequestScope::new();
        let write = scope.watch();
        let load = scope.begin();
        assert!(write.deliver((), |_| {}));
        assert!(load.is_current());

        let mut ran = false;
        scope.close();
        assert!(!write.deliver((), |_| ran = true));
        assert!(!ran);
    }
}
