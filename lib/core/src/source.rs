use std::cell::RefCell;
use std::rc::Rc;

use leptos::wasm_bindgen::closure::Closure;
use leptos::wasm_bindgen::JsCast;
use web_sys::Window;

use scrollwatch_utils::constants::SCROLL_EVENT;
use scrollwatch_utils::errors::ScrollError;
use scrollwatch_utils::geometry::ScrollGeometry;
use scrollwatch_utils::node_utils::{get_window, measure_window_geometry};

pub type ScrollHandler = Rc<dyn Fn()>;

/// Source of scroll signals and of the geometry needed to interpret them.
///
/// A subscription is the slot held in the source's listener registry, it must be handed back to
/// [`ScrollSource::unsubscribe`] to release it.
pub trait ScrollSource {
    type Subscription;

    fn subscribe(&self, handler: ScrollHandler) -> Result<Self::Subscription, ScrollError>;

    fn unsubscribe(&self, subscription: Self::Subscription);

    fn measure(&self) -> Result<ScrollGeometry, ScrollError>;
}

/// Scroll signals of the browser window.
#[derive(Clone, Debug)]
pub struct WindowScrollSource {
    window: Window,
}

pub struct WindowScrollSubscription {
    closure: Closure<dyn Fn()>,
}

impl WindowScrollSource {
    pub fn new() -> Result<Self, ScrollError> {
        Ok(Self::from(get_window()?))
    }
}

impl From<Window> for WindowScrollSource {
    fn from(window: Window) -> Self {
        Self { window }
    }
}

impl ScrollSource for WindowScrollSource {
    type Subscription = WindowScrollSubscription;

    fn subscribe(&self, handler: ScrollHandler) -> Result<Self::Subscription, ScrollError> {
        let closure = Closure::<dyn Fn()>::new(move || handler());
        self.window.add_event_listener_with_callback(SCROLL_EVENT, closure.as_ref().unchecked_ref())?;
        Ok(WindowScrollSubscription { closure })
    }

    fn unsubscribe(&self, subscription: Self::Subscription) {
        if let Err(e) = self.window.remove_event_listener_with_callback(
            SCROLL_EVENT,
            subscription.closure.as_ref().unchecked_ref(),
        ) {
            log::warn!("Failed to remove scroll listener: {e:?}");
        }
    }

    fn measure(&self) -> Result<ScrollGeometry, ScrollError> {
        measure_window_geometry(&self.window)
    }
}

/// In-memory scroll source whose geometry is set by hand and whose signals are dispatched
/// explicitly. Stands in for the window outside of a browser.
#[derive(Clone, Default)]
pub struct ManualScrollSource {
    state: Rc<RefCell<ManualScrollState>>,
}

#[derive(Default)]
struct ManualScrollState {
    geometry: ScrollGeometry,
    failure: Option<ScrollError>,
    listeners: Vec<(usize, ScrollHandler)>,
    next_listener_id: usize,
    subscribe_count: usize,
    unsubscribe_count: usize,
}

#[derive(Debug)]
pub struct ManualScrollSubscription {
    listener_id: usize,
}

impl ManualScrollSource {
    pub fn new(geometry: ScrollGeometry) -> Self {
        let source = Self::default();
        source.set_geometry(geometry);
        source
    }

    pub fn geometry(&self) -> ScrollGeometry {
        self.state.borrow().geometry
    }

    pub fn set_geometry(&self, geometry: ScrollGeometry) {
        self.state.borrow_mut().geometry = geometry;
    }

    pub fn set_document_height(&self, document_height: f64) {
        self.state.borrow_mut().geometry.document_height = document_height;
    }

    /// Makes both subscriptions and measurements fail with `failure` until it is reset to `None`.
    pub fn set_failure(&self, failure: Option<ScrollError>) {
        self.state.borrow_mut().failure = failure;
    }

    /// Moves the scroll offset and dispatches a scroll signal, like a user scrolling.
    pub fn scroll_to(&self, scroll_offset: f64) {
        self.state.borrow_mut().geometry.scroll_offset = scroll_offset;
        self.dispatch();
    }

    /// Delivers one scroll signal to every registered listener, in registration order.
    pub fn dispatch(&self) {
        // handlers may subscribe or unsubscribe while running
        let handlers: Vec<ScrollHandler> = self.state.borrow().listeners.iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    pub fn subscribe_count(&self) -> usize {
        self.state.borrow().subscribe_count
    }

    pub fn unsubscribe_count(&self) -> usize {
        self.state.borrow().unsubscribe_count
    }
}

impl ScrollSource for ManualScrollSource {
    type Subscription = ManualScrollSubscription;

    fn subscribe(&self, handler: ScrollHandler) -> Result<Self::Subscription, ScrollError> {
        let mut state = self.state.borrow_mut();
        if let Some(failure) = &state.failure {
            return Err(failure.clone());
        }
        let listener_id = state.next_listener_id;
        state.next_listener_id += 1;
        state.subscribe_count += 1;
        state.listeners.push((listener_id, handler));
        Ok(ManualScrollSubscription { listener_id })
    }

    fn unsubscribe(&self, subscription: Self::Subscription) {
        let mut state = self.state.borrow_mut();
        let listener_count = state.listeners.len();
        state.listeners.retain(|(listener_id, _)| *listener_id != subscription.listener_id);
        if state.listeners.len() < listener_count {
            state.unsubscribe_count += 1;
        }
    }

    fn measure(&self) -> Result<ScrollGeometry, ScrollError> {
        let state = self.state.borrow();
        match &state.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(state.geometry),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use scrollwatch_utils::errors::ScrollError;
    use scrollwatch_utils::geometry::ScrollGeometry;

    use crate::source::{ManualScrollSource, ScrollSource};

    #[test]
    fn test_manual_source_dispatch() {
        let source = ManualScrollSource::new(ScrollGeometry::new(800.0, 1000.0, 0.0));
        let first_count = Rc::new(Cell::new(0));
        let second_count = Rc::new(Cell::new(0));

        let first_subscription = {
            let first_count = first_count.clone();
            source.subscribe(Rc::new(move || first_count.set(first_count.get() + 1))).expect("subscribe")
        };
        let second_subscription = {
            let second_count = second_count.clone();
            source.subscribe(Rc::new(move || second_count.set(second_count.get() + 1))).expect("subscribe")
        };
        assert_eq!(source.listener_count(), 2);

        source.dispatch();
        source.scroll_to(150.0);
        assert_eq!(first_count.get(), 2);
        assert_eq!(second_count.get(), 2);
        assert_eq!(source.geometry().scroll_offset, 150.0);

        source.unsubscribe(first_subscription);
        source.dispatch();
        assert_eq!(first_count.get(), 2);
        assert_eq!(second_count.get(), 3);

        source.unsubscribe(second_subscription);
        assert_eq!(source.listener_count(), 0);
        assert_eq!(source.subscribe_count(), 2);
        assert_eq!(source.unsubscribe_count(), 2);
    }

    #[test]
    fn test_manual_source_failure() {
        let source = ManualScrollSource::new(ScrollGeometry::new(800.0, 1000.0, 0.0));
        source.set_failure(Some(ScrollError::MissingBody));
        assert_eq!(source.measure(), Err(ScrollError::MissingBody));
        assert!(source.subscribe(Rc::new(|| ())).is_err());
        assert_eq!(source.subscribe_count(), 0);

        source.set_failure(None);
        assert_eq!(source.measure(), Ok(ScrollGeometry::new(800.0, 1000.0, 0.0)));
        source.set_document_height(1200.0);
        assert_eq!(source.measure().map(|geometry| geometry.document_height), Ok(1200.0));
    }
}
