//! Fragment routing from literal `#fragment` strings to top-level tabs.
//!
//! This is an external input channel, independent of keyboard tab switching and
//! of every view's selection stack. The shell subscribes once at start-up,
//! drains the listener each frame and drops it on shutdown.
//!
//! The listener tracks the current location fragment and only reports a change
//! when a fragment differs from it. Re-sending the current fragment after the
//! user switched tabs by keyboard therefore does nothing, the same as setting
//! an unchanged location hash.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::tabs::Tab;

/// The five recognized fragments.
pub const ROUTES: [(&str, Tab); 5] = [
    ("#integrated-testing", Tab::IntegratedTesting),
    ("#skill-related-performance", Tab::SkillPerformance),
    ("#equipment", Tab::Equipment),
    ("#schedule", Tab::Schedule),
    ("#periodization", Tab::Periodization),
];

/// Static fragment → tab table.
pub struct HashRouter;

impl HashRouter {
    /// Map a literal fragment to its tab. Matching is exact.
    pub fn resolve(fragment: &str) -> Option<Tab> {
        ROUTES
            .iter()
            .find(|(literal, _)| *literal == fragment)
            .map(|(_, tab)| *tab)
    }

    /// Fragment that routes to `tab`, if any.
    pub fn fragment_for(tab: Tab) -> Option<&'static str> {
        ROUTES
            .iter()
            .find(|(_, t)| *t == tab)
            .map(|(literal, _)| *literal)
    }

    /// Open a fragment channel.
    pub fn subscribe() -> (FragmentSender, FragmentListener) {
        let (tx, rx) = mpsc::channel();
        (
            FragmentSender { tx },
            FragmentListener {
                rx,
                current: None,
                closed: false,
            },
        )
    }
}

/// Write side: sets the location fragment.
#[derive(Debug, Clone)]
pub struct FragmentSender {
    tx: Sender<String>,
}

impl FragmentSender {
    /// Returns false once the listener has been torn down.
    pub fn navigate(&self, fragment: impl Into<String>) -> bool {
        self.tx.send(fragment.into()).is_ok()
    }
}

/// Read side: observes fragment changes.
#[derive(Debug)]
pub struct FragmentListener {
    rx: Receiver<String>,
    current: Option<String>,
    closed: bool,
}

impl FragmentListener {
    /// The last fragment seen, recognized or not.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// All senders have been dropped.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Drain pending fragments, returning the tab for each recognized change in order.
    pub fn poll(&mut self) -> Vec<Tab> {
        let mut tabs = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(fragment) => {
                    if self.current.as_deref() == Some(fragment.as_str()) {
                        continue;
                    }
                    match HashRouter::resolve(&fragment) {
                        Some(tab) => {
                            tracing::debug!(fragment = %fragment, tab = tab.label(), "fragment route");
                            tabs.push(tab);
                        }
                        None => tracing::debug!(fragment = %fragment, "unrouted fragment"),
                    }
                    self.current = Some(fragment);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.closed = true;
                    break;
                }
            }
        }
        tabs
    }
}
