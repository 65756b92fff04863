//! メインアプリケーションコンポーネント
//!
//! 状態は `ArtworkView` 1つを `RwSignal` で持ち、イベントハンドラは
//! そのメソッドを呼ぶだけにする。取得は `spawn_local` で非同期に行う。

use crate::api::artic::{report_error, WebArtworkSource};
use crate::components::{
    artwork_table::ArtworkTable,
    bulk_select_bar::BulkSelectBar,
    header::Header,
    paginator::Paginator,
    progress_bar::ProgressBar,
    selected_panel::SelectedPanel,
};
use artwork_picker_common::{collect_first, ArtworkView, BulkOutcome, Error, PageSource, SortField};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

/// 一括選択の進捗（ページ番号, 取得済み件数, 目標件数）
type BulkProgress = Option<(u32, usize, usize)>;

/// ルートシェル
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="container">
            <Header />
            <ArtworksView />
        </div>
    }
}

/// 表示用ページを取得して反映
fn load_page(state: RwSignal<ArtworkView>, source: WebArtworkSource, page: u32) {
    let Some(ticket) = state.try_update(|v| v.begin_fetch(page)) else {
        return;
    };

    spawn_local(async move {
        let result = source.fetch_page(page).await;
        let message = result.as_ref().err().map(|e| e.to_string());
        let applied = state
            .try_update(|v| v.finish_fetch(ticket, result))
            .unwrap_or(false);

        if let (true, Some(message)) = (applied, message) {
            report_error(&format!("Error fetching artworks (page {}): {}", page, message));
        }
    });
}

/// 作品一覧ビュー
#[component]
pub fn ArtworksView() -> impl IntoView {
    let state = RwSignal::new(ArtworkView::new());
    let source = StoredValue::new(WebArtworkSource::default());
    let (bulk_progress, set_bulk_progress) = signal::<BulkProgress>(None);

    // 初回表示
    load_page(state, source.get_value(), 1);

    // ページ変更ハンドラ
    let on_page = move |first: u64| {
        if let Some(page) = state.try_update(|v| v.on_page_change(first)) {
            load_page(state, source.get_value(), page);
        }
    };

    // チェックボックスハンドラ
    let on_toggle_row = move |id: u64| {
        state.update(|v| {
            v.toggle_row(id);
        });
    };
    let on_toggle_page = move |_: ()| state.update(|v| v.toggle_page());

    // ソートハンドラ
    let on_sort = move |field: SortField| state.update(|v| v.sort_by(field));

    // 一括選択ハンドラ
    let on_input = move |value: String| state.update(|v| v.set_select_input(value));
    let on_select_rows = move |_: ()| {
        let input = state.with_untracked(|v| v.select_input().to_string());
        let Some(request) = state.try_update(|v| v.begin_bulk_select(&input)).flatten() else {
            return;
        };

        let source = source.get_value();
        spawn_local(async move {
            set_bulk_progress.set(Some((0, 0, request.count)));
            let result = collect_first(&source, &request, |page, collected, wanted| {
                // 後続の一括選択に打ち切られた側は進捗を上書きしない
                if !request.cancel.is_cancelled() {
                    set_bulk_progress.set(Some((page, collected, wanted)));
                }
            })
            .await;

            let message = match &result {
                Err(Error::Cancelled) | Ok(_) => None,
                Err(e) => Some(e.to_string()),
            };
            let outcome = state.try_update(|v| v.finish_bulk_select(&request, result));

            if !state.with_untracked(|v| v.is_bulk_running()) {
                set_bulk_progress.set(None);
            }

            match (outcome, message) {
                (Some(BulkOutcome::Selected(_)), _) => load_page(state, source, 1),
                (Some(BulkOutcome::Failed), Some(message)) => {
                    report_error(&format!("Error selecting rows: {}", message));
                }
                _ => {}
            }
        });
    };

    // 子コンポーネント向けの派生シグナル
    let rows = Signal::derive(move || state.with(|v| v.records().to_vec()));
    let selected_ids = Signal::derive(move || {
        state.with(|v| v.selection().ids().into_iter().collect::<HashSet<u64>>())
    });
    let page_selected = Signal::derive(move || state.with(|v| v.is_page_selected()));
    let sort = Signal::derive(move || state.with(|v| v.sort()));
    let loading = Signal::derive(move || state.with(|v| v.is_loading()));
    let page_state = Signal::derive(move || state.with(|v| v.page_state()));
    let rows_on_page = Signal::derive(move || state.with(|v| v.records().len()));
    let select_input = Signal::derive(move || state.with(|v| v.select_input().to_string()));
    let busy = Signal::derive(move || state.with(|v| v.is_bulk_running()));
    let heading = Signal::derive(move || state.with(|v| v.summary_heading()));
    let titles = Signal::derive(move || state.with(|v| v.selected_titles()));

    let progress = Signal::derive(move || match bulk_progress.get() {
        Some((_, collected, wanted)) if wanted > 0 => collected as f32 / wanted as f32,
        _ => 0.0,
    });
    let progress_label = Signal::derive(move || match bulk_progress.get() {
        Some((page, collected, wanted)) => {
            format!("Selecting rows... page {} ({}/{})", page, collected, wanted)
        }
        None => String::new(),
    });

    view! {
        <div class="artworks-view">
            <BulkSelectBar
                input=select_input
                busy=busy
                on_input=on_input
                on_submit=on_select_rows
            />

            <Show when=move || bulk_progress.get().is_some()>
                <ProgressBar progress=progress label=progress_label />
            </Show>

            <ArtworkTable
                rows=rows
                selected_ids=selected_ids
                page_selected=page_selected
                sort=sort
                loading=loading
                on_toggle_row=on_toggle_row
                on_toggle_page=on_toggle_page
                on_sort=on_sort
            />

            <Paginator
                state=page_state
                rows_on_page=rows_on_page
                on_page=on_page
            />

            <SelectedPanel heading=heading titles=titles />
        </div>
    }
}
