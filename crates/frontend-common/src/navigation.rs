//! Client-triggered navigation
//!
//! The HTTP client only navigates right after it cleared the session, so
//! besides pushing onto the router history this tells the mounted
//! [`crate::AuthProvider`] to re-read the session.

use payflow_core::Navigator;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use yew_router::history::{BrowserHistory, History};

thread_local! {
    /// Called before every client-triggered navigation
    static SESSION_LISTENER: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

/// Set the session change listener
pub fn set_session_listener(listener: Rc<dyn Fn()>) {
    SESSION_LISTENER.with(|l| {
        *l.borrow_mut() = Some(listener);
    });
}

/// Clear the session change listener
pub fn clear_session_listener() {
    SESSION_LISTENER.with(|l| {
        *l.borrow_mut() = None;
    });
}

fn notify_session_changed() {
    let listener = SESSION_LISTENER.with(|l| l.borrow().clone());
    if let Some(listener) = listener {
        listener();
    }
}

/// [`Navigator`] pushing onto the browser history shared with the router
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        debug!(path, "Client navigation");
        notify_session_changed();
        BrowserHistory::new().push(path);
    }
}
