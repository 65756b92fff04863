//! 作品一覧ビューのコントローラ
//!
//! 表示中のレコード、ページ状態、選択状態、ローディング、診断ログを
//! 1つの構造体にまとめ、イベントごとのメソッドでのみ更新する。
//!
//! 非同期の取得は `begin_*` / `finish_*` に分かれている。
//! awaitをまたいで可変借用を保持できないUI（Leptosのシグナル等）は
//! 分割版を、排他的に持てる呼び出し側（CLI・テスト）は
//! `load_page` / `bulk_select` を使う。

use crate::bulk::{collect_first, BulkRequest, CancelToken};
use crate::count::parse_select_count;
use crate::error::{Error, Result};
use crate::paging::PageState;
use crate::selection::Selection;
use crate::sort::{SortField, SortState};
use crate::source::PageSource;
use crate::types::{Artwork, ArtworkPage};
use tracing::{debug, error, info};

/// 選択が空のときの表示
pub const NO_SELECTION_MESSAGE: &str = "No artwork selected";

/// 表示用ページ取得の受付番号
///
/// 最後に発行した番号以外の完了は破棄される。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    id: u64,
    page: u32,
}

impl FetchTicket {
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// 保持する診断ログの上限（古いものから捨てる）
pub const MAX_DIAGNOSTICS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    PageFetch,
    BulkSelect,
}

/// 診断ログ1件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub page: Option<u32>,
    pub message: String,
}

/// 一括選択の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkOutcome {
    /// 入力が正の整数でなかった（何も変えていない）
    Ignored,
    /// 選択を置き換えた（件数）
    Selected(usize),
    /// 後から始まった一括選択に打ち切られた
    Cancelled,
    /// ページ取得に失敗した
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct ArtworkView {
    records: Vec<Artwork>,
    page: PageState,
    selection: Selection,
    loading: bool,
    sort: SortState,
    select_input: String,
    diagnostics: Vec<Diagnostic>,
    latest_ticket: u64,
    bulk_cancel: Option<CancelToken>,
}

impl ArtworkView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    pub fn current_page(&self) -> u32 {
        self.page.page
    }

    pub fn total_records(&self) -> u64 {
        self.page.total_records
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn select_input(&self) -> &str {
        &self.select_input
    }

    pub fn set_select_input(&mut self, input: impl Into<String>) {
        self.select_input = input.into();
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// 溜まった診断ログを取り出して空にする
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn is_bulk_running(&self) -> bool {
        self.bulk_cancel.is_some()
    }

    // ---- ページ取得 ----

    /// 表示用ページの取得開始
    pub fn begin_fetch(&mut self, page: u32) -> FetchTicket {
        self.latest_ticket += 1;
        self.loading = true;
        debug!(page, ticket = self.latest_ticket, "fetching artworks page");
        FetchTicket {
            id: self.latest_ticket,
            page,
        }
    }

    /// 表示用ページの取得完了
    ///
    /// 成功時は表示レコードと総件数を置き換える。失敗時は診断ログに
    /// 1件記録し、表示内容はそのまま残す。古い受付番号の完了は無視する。
    ///
    /// # Returns
    /// 結果を反映したら `true`
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<ArtworkPage>) -> bool {
        if ticket.id != self.latest_ticket {
            debug!(page = ticket.page, ticket = ticket.id, "discarding superseded page fetch");
            return false;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.records = page.data;
                self.sort.apply(&mut self.records);
                self.page.total_records = page.pagination.total;
                debug!(page = ticket.page, rows = self.records.len(), total = self.page.total_records, "artworks page loaded");
            }
            Err(e) => {
                self.record_error(DiagnosticKind::PageFetch, Some(ticket.page), &e);
            }
        }
        true
    }

    /// ページ取得を最後まで行う
    pub async fn load_page<S>(&mut self, source: &S, page: u32) -> bool
    where
        S: PageSource + ?Sized,
    {
        let ticket = self.begin_fetch(page);
        let result = source.fetch_page(page).await;
        self.finish_fetch(ticket, result)
    }

    // ---- ページ移動 ----

    /// ページャーからのページ変更（行オフセット指定）
    ///
    /// # Returns
    /// 取得すべきページ番号
    pub fn on_page_change(&mut self, first: u64) -> u32 {
        // ページ位置は取得前に動く。取得に失敗しても前の行のまま位置だけ進んだ状態になる
        self.page.move_to_offset(first)
    }

    /// ページ番号で移動（範囲外は丸める）
    pub fn go_to_page(&mut self, page: u32) -> u32 {
        self.page.move_to_page(page)
    }

    pub fn next_page(&mut self) -> Option<u32> {
        self.page
            .has_next()
            .then(|| self.page.move_to_page(self.page.page + 1))
    }

    pub fn previous_page(&mut self) -> Option<u32> {
        self.page
            .has_previous()
            .then(|| self.page.move_to_page(self.page.page - 1))
    }

    // ---- 選択 ----

    /// テーブルから通知された選択内容でそのまま置き換える
    pub fn on_selection_change(&mut self, selected: Vec<Artwork>) {
        self.selection.replace(selected);
    }

    /// 表示中の1行のチェックを切り替える
    ///
    /// # Returns
    /// 表示中のページにその行がなければ `false`（何も変えない）
    pub fn toggle_row(&mut self, id: u64) -> bool {
        let Some(artwork) = self.records.iter().find(|a| a.id == id) else {
            return false;
        };
        let next = self.selection.toggled(artwork);
        self.on_selection_change(next);
        true
    }

    /// ヘッダーのチェック（表示中ページ全体）を切り替える
    pub fn toggle_page(&mut self) {
        let next = self.selection.page_toggled(&self.records);
        self.on_selection_change(next);
    }

    pub fn is_page_selected(&self) -> bool {
        self.selection.covers(&self.records)
    }

    // ---- ソート ----

    pub fn sort_by(&mut self, field: SortField) {
        self.sort.toggle(field);
        self.sort.apply(&mut self.records);
    }

    // ---- 一括選択 ----

    /// 一括選択の開始
    ///
    /// 入力が正の整数でなければ `None`（状態は一切変えない）。
    /// 実行中の一括選択があれば打ち切る。総件数はこの時点の値で固定。
    pub fn begin_bulk_select(&mut self, input: &str) -> Option<BulkRequest> {
        let count = parse_select_count(input)?;

        if let Some(previous) = self.bulk_cancel.take() {
            debug!("superseding running bulk selection");
            previous.cancel();
        }

        let request = BulkRequest::new(count, self.page.total_records);
        self.bulk_cancel = Some(request.cancel.clone());
        info!(count, total = request.total_snapshot, "bulk selection started");
        Some(request)
    }

    /// 一括選択の完了
    ///
    /// 成功時は選択を丸ごと置き換え、入力欄を空にして1ページ目に戻す。
    /// `BulkOutcome::Selected` が返ったら呼び出し側で1ページ目を取得し直すこと。
    pub fn finish_bulk_select(
        &mut self,
        request: &BulkRequest,
        result: Result<Vec<Artwork>>,
    ) -> BulkOutcome {
        let is_current = self
            .bulk_cancel
            .as_ref()
            .is_some_and(|t| t.same_as(&request.cancel));
        if is_current {
            self.bulk_cancel = None;
        }

        match result {
            Ok(selected) => {
                let count = selected.len();
                self.selection.replace(selected);
                self.select_input.clear();
                self.page.move_to_offset(0);
                info!(requested = request.count, selected = count, "bulk selection finished");
                BulkOutcome::Selected(count)
            }
            Err(Error::Cancelled) => {
                debug!(requested = request.count, "bulk selection cancelled");
                BulkOutcome::Cancelled
            }
            Err(e) => {
                self.record_error(DiagnosticKind::BulkSelect, None, &e);
                BulkOutcome::Failed
            }
        }
    }

    /// 一括選択を最後まで行い、成功したら1ページ目を再表示する
    pub async fn bulk_select<S, F>(&mut self, source: &S, input: &str, on_page: F) -> BulkOutcome
    where
        S: PageSource + ?Sized,
        F: FnMut(u32, usize, usize),
    {
        let Some(request) = self.begin_bulk_select(input) else {
            return BulkOutcome::Ignored;
        };

        let result = collect_first(source, &request, on_page).await;
        let outcome = self.finish_bulk_select(&request, result);
        if matches!(outcome, BulkOutcome::Selected(_)) {
            self.load_page(source, 1).await;
        }
        outcome
    }

    // ---- 選択サマリー ----

    pub fn summary_heading(&self) -> String {
        format!("Selected Artworks ({})", self.selection.len())
    }

    /// 選択中の (ID, タイトル) 一覧
    pub fn selected_titles(&self) -> Vec<(u64, String)> {
        self.selection
            .iter()
            .map(|a| (a.id, a.display_title().to_string()))
            .collect()
    }

    fn record_error(&mut self, kind: DiagnosticKind, page: Option<u32>, err: &Error) {
        error!(?kind, ?page, error = %err, "error fetching artworks");
        if self.diagnostics.len() >= MAX_DIAGNOSTICS {
            let excess = self.diagnostics.len() + 1 - MAX_DIAGNOSTICS;
            self.diagnostics.drain(..excess);
        }
        self.diagnostics.push(Diagnostic {
            kind,
            page,
            message: err.to_string(),
        });
    }
}
