//! 選択中の作品一覧パネル

use artwork_picker_common::NO_SELECTION_MESSAGE;
use leptos::prelude::*;

#[component]
pub fn SelectedPanel(
    heading: Signal<String>,
    titles: Signal<Vec<(u64, String)>>,
) -> impl IntoView {
    view! {
        <div class="custom-panel">
            <h4>{move || heading.get()}</h4>
            <Show
                when=move || !titles.get().is_empty()
                fallback=|| view! { <p class="text-muted">{NO_SELECTION_MESSAGE}</p> }
            >
                <ul class="selected-list">
                    <For
                        each=move || titles.get()
                        key=|(id, _)| *id
                        children=|(_, title)| view! { <li>{title}</li> }
                    />
                </ul>
            </Show>
        </div>
    }
}
