//! 一括選択の入力欄とボタン

use leptos::prelude::*;

#[component]
pub fn BulkSelectBar<FI, FS>(
    input: Signal<String>,
    busy: Signal<bool>,
    on_input: FI,
    on_submit: FS,
) -> impl IntoView
where
    FI: Fn(String) + 'static + Clone + Send,
    FS: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="bulk-select-bar">
            <input
                type="number"
                min="1"
                class="bulk-select-input"
                placeholder="Number of rows to select"
                prop:value=move || input.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
            <button
                class="btn btn-primary select-rows-button"
                on:click=move |_| on_submit(())
            >
                {move || if busy.get() { "Selecting..." } else { "Select Rows" }}
            </button>
        </div>
    }
}
