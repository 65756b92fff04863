//! ページャーコンポーネント
//!
//! 最初/前/番号/次/最後 のボタンと「11-20 of 23」の表示。
//! ページ変更は行オフセット（first）で通知する。

use artwork_picker_common::{offset_for_page, PageState};
use leptos::prelude::*;

/// 現在ページを中心に最大 `width` 個のページ番号を並べる
pub fn page_window(current: u32, total_pages: u32, width: u32) -> Vec<u32> {
    if total_pages == 0 || width == 0 {
        return Vec::new();
    }

    let width = width.min(total_pages);
    let half = width / 2;
    let start = current
        .saturating_sub(half)
        .max(1)
        .min(total_pages - width + 1);
    (start..start + width).collect()
}

#[component]
pub fn Paginator<FP>(
    state: Signal<PageState>,
    rows_on_page: Signal<usize>,
    on_page: FP,
) -> impl IntoView
where
    FP: Fn(u64) + 'static + Clone + Send + Sync,
{
    let last_page = move || state.get().total_pages().max(1);

    let go = {
        let on_page = on_page.clone();
        move |page: u32| on_page(offset_for_page(page))
    };

    let report = move || {
        let s = state.get();
        let (from, to) = s.visible_range(rows_on_page.get());
        format!("{}-{} of {}", from, to, s.total_records)
    };

    view! {
        <div class="paginator">
            <button
                class="btn btn-small btn-tertiary"
                disabled=move || !state.get().has_previous()
                on:click={
                    let go = go.clone();
                    move |_| go(1)
                }
            >
                "«"
            </button>
            <button
                class="btn btn-small btn-tertiary"
                disabled=move || !state.get().has_previous()
                on:click={
                    let go = go.clone();
                    move |_| go(state.get_untracked().page.saturating_sub(1).max(1))
                }
            >
                "‹"
            </button>

            <For
                each=move || {
                    let s = state.get();
                    page_window(s.page, s.total_pages(), 5)
                }
                key=|page| *page
                children={
                    let go = go.clone();
                    move |page| {
                        let go = go.clone();
                        view! {
                            <button
                                class="btn btn-small page-number"
                                class:active=move || state.get().page == page
                                on:click=move |_| go(page)
                            >
                                {page}
                            </button>
                        }
                    }
                }
            />

            <button
                class="btn btn-small btn-tertiary"
                disabled=move || !state.get().has_next()
                on:click={
                    let go = go.clone();
                    move |_| go(state.get_untracked().page + 1)
                }
            >
                "›"
            </button>
            <button
                class="btn btn-small btn-tertiary"
                disabled=move || !state.get().has_next()
                on:click={
                    let go = go.clone();
                    move |_| go(last_page())
                }
            >
                "»"
            </button>

            <span class="paginator-report">{report}</span>
        </div>
    }
}
