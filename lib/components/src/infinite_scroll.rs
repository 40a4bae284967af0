use leptos::prelude::*;
use send_wrapper::SendWrapper;

use scrollwatch_core::source::{ScrollSource, WindowScrollSource};
use scrollwatch_core::watcher::{ScrollWatcher, ScrollWatcherOptions};
use scrollwatch_utils::errors::ScrollError;

/// Watches the scroll position of the window and calls `callback` whenever its bottom is reached,
/// until the current reactive owner is cleaned up.
pub fn use_infinite_scroll<F>(
    options: ScrollWatcherOptions,
    callback: F,
) -> Result<(), ScrollError>
where
    F: Fn() + 'static,
{
    use_infinite_scroll_with_source(WindowScrollSource::new()?, options, callback)
}

/// Same as [`use_infinite_scroll`] with signals and geometry coming from `source`.
///
/// Without a current owner, the watcher is released right away.
pub fn use_infinite_scroll_with_source<S, F>(
    source: S,
    options: ScrollWatcherOptions,
    callback: F,
) -> Result<(), ScrollError>
where
    S: ScrollSource + Clone + 'static,
    F: Fn() + 'static,
{
    let watcher = SendWrapper::new(ScrollWatcher::activate(source, options, callback)?);
    on_cleanup(move || drop(watcher));
    Ok(())
}

/// Options of the watcher backing an [`InfiniteScroll`] component, from its props.
pub fn infinite_scroll_options(
    check_on_mount: bool,
    on_mount_condition: bool,
    threshold: f64,
) -> ScrollWatcherOptions {
    ScrollWatcherOptions::default()
        .check_on_mount(check_on_mount)
        .on_mount_condition(on_mount_condition)
        .threshold(threshold)
}

pub fn run_scroll_callback(scroll_callback: Option<Callback<()>>) -> impl Fn() + Clone + 'static {
    move || if let Some(scroll_callback) = scroll_callback {
        scroll_callback.run(());
    }
}

/// Invisible component calling `scroll_callback` each time the user scrolls to the bottom of the page
#[component]
pub fn InfiniteScroll(
    /// check once after mounting whether the page is already at its bottom, e.g. content shorter than the window
    #[prop(optional)]
    check_on_mount: bool,
    /// additional condition for the check after mounting, e.g. more content can be loaded
    #[prop(into, default = false.into())]
    on_mount_condition: Signal<bool>,
    /// distance in pixels from the bottom of the page at which the callback already fires
    #[prop(optional)]
    threshold: f64,
    /// called each time the bottom of the page is reached
    #[prop(optional, into)]
    scroll_callback: Option<Callback<()>>,
) -> impl IntoView {
    // effects only run once mounted in the browser, the listener is released when the component is dropped
    Effect::new(move |_| {
        let options = infinite_scroll_options(check_on_mount, on_mount_condition.get_untracked(), threshold);
        if let Err(e) = use_infinite_scroll(options, run_scroll_callback(scroll_callback)) {
            log::error!("Cannot watch the scroll position: {e}");
        }
    });

    view! { <div/> }
}
