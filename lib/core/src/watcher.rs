use std::rc::Rc;

use serde::{Deserialize, Serialize};

use scrollwatch_utils::constants::DEFAULT_BOTTOM_THRESHOLD;
use scrollwatch_utils::errors::ScrollError;

use crate::source::{ScrollHandler, ScrollSource};

/// Options of a [`ScrollWatcher`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollWatcherOptions {
    /// Check whether the bottom is already reached right after activation.
    pub check_on_mount: bool,
    /// Additional gate for the activation check, e.g. "more content can be loaded".
    pub on_mount_condition: bool,
    /// Distance in pixels from the document's lower edge at which the bottom counts as reached.
    ///
    /// Extension on top of the two mount flags and the callback. The default of `0.0` keeps the plain
    /// `window_bottom >= document_height` rule, so the watcher only behaves differently when a host
    /// sets it explicitly.
    pub threshold: f64,
}

impl Default for ScrollWatcherOptions {
    fn default() -> Self {
        Self {
            check_on_mount: false,
            on_mount_condition: false,
            threshold: DEFAULT_BOTTOM_THRESHOLD,
        }
    }
}

impl ScrollWatcherOptions {
    pub fn check_on_mount(mut self, check_on_mount: bool) -> Self {
        self.check_on_mount = check_on_mount;
        self
    }

    pub fn on_mount_condition(mut self, on_mount_condition: bool) -> Self {
        self.on_mount_condition = on_mount_condition;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    fn should_check_on_activation(&self) -> bool {
        self.check_on_mount && self.on_mount_condition
    }
}

/// Listens to the scroll signals of a [`ScrollSource`] and invokes a callback each time the bottom
/// of the document is reached.
///
/// The watcher holds exactly one listener slot of its source between [`ScrollWatcher::activate`]
/// and [`ScrollWatcher::deactivate`]. Dropping the watcher deactivates it.
pub struct ScrollWatcher<S: ScrollSource> {
    source: S,
    subscription: Option<S::Subscription>,
}

impl<S: ScrollSource + Clone + 'static> ScrollWatcher<S> {
    /// Subscribes to `source` and, when requested by `options`, checks the bottom once before
    /// returning. `callback` runs synchronously on the thread delivering the signal.
    pub fn activate<F>(
        source: S,
        options: ScrollWatcherOptions,
        callback: F,
    ) -> Result<Self, ScrollError>
    where
        F: Fn() + 'static,
    {
        let callback: Rc<dyn Fn()> = Rc::new(callback);
        let handler: ScrollHandler = {
            let source = source.clone();
            let callback = callback.clone();
            Rc::new(move || {
                notify_if_bottom_reached(&source, options.threshold, callback.as_ref());
            })
        };

        let subscription = source.subscribe(handler)?;
        log::debug!("Scroll watcher activated with {options:?}");
        let watcher = Self {
            source,
            subscription: Some(subscription),
        };

        if options.should_check_on_activation() {
            notify_if_bottom_reached(&watcher.source, options.threshold, callback.as_ref());
        }

        Ok(watcher)
    }
}

impl<S: ScrollSource> ScrollWatcher<S> {
    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Releases the listener slot. Does nothing if the watcher is already deactivated.
    pub fn deactivate(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.source.unsubscribe(subscription);
            log::debug!("Scroll watcher deactivated");
        }
    }
}

impl<S: ScrollSource> Drop for ScrollWatcher<S> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// Measures `source` and invokes `callback` if the bottom is reached. Returns whether it was invoked.
pub fn notify_if_bottom_reached<S: ScrollSource>(
    source: &S,
    threshold: f64,
    callback: &dyn Fn(),
) -> bool {
    match source.measure() {
        Ok(geometry) if geometry.is_bottom_reached(threshold) => {
            callback();
            true
        },
        Ok(_) => false,
        Err(e) => {
            log::warn!("Skipping bottom check: {e}");
            false
        },
    }
}
