//! 作品テーブルコンポーネント
//!
//! チェック列付き、各列ヘッダーのクリックでソート。

use artwork_picker_common::{Artwork, SortField, SortState};
use leptos::prelude::*;
use std::collections::HashSet;

#[component]
pub fn ArtworkTable<FR, FP, FS>(
    rows: Signal<Vec<Artwork>>,
    selected_ids: Signal<HashSet<u64>>,
    page_selected: Signal<bool>,
    sort: Signal<SortState>,
    loading: Signal<bool>,
    on_toggle_row: FR,
    on_toggle_page: FP,
    on_sort: FS,
) -> impl IntoView
where
    FR: Fn(u64) + 'static + Clone + Send + Sync,
    FP: Fn(()) + 'static + Clone + Send,
    FS: Fn(SortField) + 'static + Clone + Send,
{
    let headers = SortField::ALL
        .into_iter()
        .map(|field| {
            let on_sort = on_sort.clone();
            let arrow = move || sort.get().order_for(field).map(|o| o.arrow()).unwrap_or("");
            view! {
                <th class="sortable" on:click=move |_| on_sort(field)>
                    {field.header()}
                    <span class="sort-icon">{arrow}</span>
                </th>
            }
        })
        .collect_view();

    view! {
        <div class="table-wrapper" class:loading=move || loading.get()>
            <Show when=move || loading.get()>
                <div class="table-loading">"Loading..."</div>
            </Show>
            <table class="artwork-table">
                <thead>
                    <tr>
                        <th class="checkbox-column">
                            <input
                                type="checkbox"
                                prop:checked=move || page_selected.get()
                                on:change=move |_| on_toggle_page(())
                            />
                        </th>
                        {headers}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|artwork| artwork.id
                        children=move |artwork| {
                            let on_toggle_row = on_toggle_row.clone();
                            view! {
                                <ArtworkRow
                                    artwork=artwork
                                    selected_ids=selected_ids
                                    on_toggle_row=on_toggle_row
                                />
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || rows.get().is_empty() && !loading.get()>
                <p class="text-muted">"No artworks found"</p>
            </Show>
        </div>
    }
}

#[component]
fn ArtworkRow<FR>(
    artwork: Artwork,
    selected_ids: Signal<HashSet<u64>>,
    on_toggle_row: FR,
) -> impl IntoView
where
    FR: Fn(u64) + 'static + Clone + Send + Sync,
{
    let id = artwork.id;
    let is_selected = move || selected_ids.get().contains(&id);

    let cells = SortField::ALL
        .into_iter()
        .map(|field| view! { <td class=field.as_str()>{field.cell(&artwork)}</td> })
        .collect_view();

    view! {
        <tr class:selected=is_selected>
            <td class="checkbox-column">
                <input
                    type="checkbox"
                    prop:checked=is_selected
                    on:change=move |_| on_toggle_row(id)
                />
            </td>
            {cells}
        </tr>
    }
}
