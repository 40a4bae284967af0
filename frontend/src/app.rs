use std::ops::Range;

use leptos::prelude::*;
use leptos_use::{signal_throttled_with_options, ThrottleOptions};

use scrollwatch_components::infinite_scroll::InfiniteScroll;
use scrollwatch_utils::constants::{DEMO_BATCH_SIZE, DEMO_MAX_ITEMS, SCROLL_LOAD_THROTTLE_DELAY};

/// Demo feed loading additional items each time the bottom of the page is reached
#[component]
pub fn App() -> impl IntoView {
    let item_vec = RwSignal::new(next_batch_range(0, DEMO_BATCH_SIZE, DEMO_MAX_ITEMS).collect::<Vec<usize>>());
    let additional_load_count = RwSignal::new(0);
    let has_more_items = Signal::derive(move || item_vec.read().len() < DEMO_MAX_ITEMS);

    let additional_load_count_throttled: Signal<i32> = signal_throttled_with_options(
        additional_load_count,
        SCROLL_LOAD_THROTTLE_DELAY,
        ThrottleOptions::default().leading(true).trailing(false)
    );

    Effect::new(move |_| if additional_load_count_throttled.get() > 0 {
        load_next_batch(item_vec);
    });

    view! {
        <main class="flex flex-col items-center w-full">
            <ul class="flex flex-col w-full max-w-2xl divide-y">
                <For
                    each=move || item_vec.get()
                    key=|index| *index
                    children=move |index| view! {
                        <li class="p-4">{format!("Item {}", index + 1)}</li>
                    }
                />
            </ul>
            <Show when=move || !has_more_items.get()>
                <div class="p-4 text-sm">"You've reached the end."</div>
            </Show>
            <InfiniteScroll
                check_on_mount=true
                on_mount_condition=has_more_items
                scroll_callback=move |_| additional_load_count.update(|value| *value += 1)
            />
        </main>
    }
}

/// Indexes of the next batch of at most `batch_size` items, given `loaded` items out of `max_items`.
pub fn next_batch_range(loaded: usize, batch_size: usize, max_items: usize) -> Range<usize> {
    loaded.min(max_items)..loaded.saturating_add(batch_size).min(max_items)
}

pub fn load_next_batch(item_vec: RwSignal<Vec<usize>>) {
    let range = next_batch_range(item_vec.read_untracked().len(), DEMO_BATCH_SIZE, DEMO_MAX_ITEMS);
    if !range.is_empty() {
        log::info!("Loading items {range:?}");
        item_vec.update(|item_vec| item_vec.extend(range));
    }
}
