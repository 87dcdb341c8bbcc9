use std::{cell::RefCell, rc::Rc, time::Duration};

pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Identifies one shown message. Tickets only grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    message: Option<String>,
    ticket: ToastTicket,
}

impl ToastState {
    pub fn show(&mut self, message: impl Into<String>) -> ToastTicket {
        self.ticket = ToastTicket(self.ticket.0 + 1);
        self.message = Some(message.into());
        self.ticket
    }

    /// Clears the message only if `ticket` is still the current one.
    pub fn expire(&mut self, ticket: ToastTicket) -> bool {
        if ticket == self.ticket && self.message.is_some() {
            self.message = None;
            true
        } else {
            false
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn ticket(&self) -> ToastTicket {
        self.ticket
    }
}

struct PendingClear {
    ticket: ToastTicket,
    #[cfg(target_arch = "wasm32")]
    timeout: gloo_timers::callback::Timeout,
    #[cfg(not(target_arch = "wasm32"))]
    task: tokio::task::AbortHandle,
}

impl PendingClear {
    fn cancel(self) {
        #[cfg(target_arch = "wasm32")]
        {
            let _ = self.timeout.cancel();
        }
        #[cfg(not(target_arch = "wasm32"))]
        self.task.abort();
    }
}

/// Single-slot auto-clear timer. Scheduling replaces and cancels whatever
/// was pending.
#[derive(Clone, Default)]
pub struct ToastTimer {
    slot: Rc<RefCell<Option<PendingClear>>>,
}

impl ToastTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<F>(&self, ticket: ToastTicket, on_expire: F)
    where
        F: FnOnce(ToastTicket) + 'static,
    {
        #[cfg(target_arch = "wasm32")]
        let pending = PendingClear {
            ticket,
            timeout: gloo_timers::callback::Timeout::new(
                TOAST_DURATION.as_millis() as u32,
                move || on_expire(ticket),
            ),
        };
        // Host builds run on a tokio `LocalSet`, same as `leptos::spawn_local`.
        #[cfg(not(target_arch = "wasm32"))]
        let pending = PendingClear {
            ticket,
            task: tokio::task::spawn_local(async move {
                tokio::time::sleep(TOAST_DURATION).await;
                on_expire(ticket);
            })
            .abort_handle(),
        };

        let previous = self.slot.borrow_mut().replace(pending);
        if let Some(previous) = previous {
            previous.cancel();
        }
    }

    pub fn cancel(&self) {
        let previous = self.slot.borrow_mut().take();
        if let Some(previous) = previous {
            previous.cancel();
        }
    }

    /// Ticket of the most recently scheduled clear that was not canceled.
    pub fn pending(&self) -> Option<ToastTicket> {
        self.slot.borrow().as_ref().map(|pending| pending.ticket)
    }
}
