//! ページ横断の一括選択
//!
//! 「先頭からN件を選択」を、1ページずつ順番に取得して実現する。
//! 終了判定の総ページ数は開始時点の総件数（スナップショット）で固定し、
//! ループ中に取り直さない。

use crate::error::{Error, Result};
use crate::paging::total_pages;
use crate::source::PageSource;
use crate::types::Artwork;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// 一括選択の中断フラグ
///
/// 後から始まった一括選択が前のものを打ち切るために使う。
/// チェックはページ取得の合間にだけ行う。
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// 同じ一括選択のトークンか
    pub fn same_as(&self, other: &CancelToken) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// 一括選択1回分のパラメータ
#[derive(Debug, Clone)]
pub struct BulkRequest {
    /// 選択したい件数（1以上）
    pub count: usize,
    /// 開始時点の総件数
    pub total_snapshot: u64,
    pub cancel: CancelToken,
}

impl BulkRequest {
    pub fn new(count: usize, total_snapshot: u64) -> Self {
        Self {
            count,
            total_snapshot,
            cancel: CancelToken::new(),
        }
    }
}

/// データセット順で先頭 `count` 件を集める
///
/// 1ページ目は必ず取得する。以降は件数が揃うか、次のページ番号が
/// スナップショットから求めた総ページ数を超えた時点で止める。
/// `on_page(page, collected, wanted)` はページを取り込むたびに呼ばれる。
///
/// # Returns
/// * `Ok(Vec<Artwork>)` - 最大 `count` 件（データが少なければそれ以下）
/// * `Err(Error::Cancelled)` - 途中で中断された
/// * `Err(_)` - いずれかのページ取得に失敗
pub async fn collect_first<S, F>(
    source: &S,
    request: &BulkRequest,
    mut on_page: F,
) -> Result<Vec<Artwork>>
where
    S: PageSource + ?Sized,
    F: FnMut(u32, usize, usize),
{
    let last_page = total_pages(request.total_snapshot);
    let mut selected: Vec<Artwork> = Vec::new();
    let mut page = 1u32;

    loop {
        if request.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let fetched = source.fetch_page(page).await?;
        let remaining = request.count.saturating_sub(selected.len());
        selected.extend(fetched.data.into_iter().take(remaining));

        debug!(page, collected = selected.len(), wanted = request.count, "bulk selection page fetched");
        on_page(page, selected.len(), request.count);

        if selected.len() >= request.count {
            break;
        }

        page = page.saturating_add(1);
        if page > last_page {
            break;
        }
    }

    if request.cancel.is_cancelled() {
        return Err(Error::Cancelled);
    }

    selected.truncate(request.count);
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ArtworkPage, Pagination};
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// 固定データを10件ずつ返す取得元
    struct FixedSource {
        records: Vec<Artwork>,
        fetched: RefCell<Vec<u32>>,
        fail_on: Option<u32>,
    }

    impl FixedSource {
        fn new(total: u64) -> Self {
            let records = (1..=total)
                .map(|id| Artwork { id, title: Some(format!("#{}", id)), ..Default::default() })
                .collect();
            Self { records, fetched: RefCell::new(Vec::new()), fail_on: None }
        }
    }

    impl PageSource for FixedSource {
        async fn fetch_page(&self, page: u32) -> Result<ArtworkPage> {
            self.fetched.borrow_mut().push(page);
            if self.fail_on == Some(page) {
                return Err(Error::Status(500));
            }
            let start = ((page - 1) * 10) as usize;
            let data = self.records.iter().skip(start).take(10).cloned().collect();
            Ok(ArtworkPage {
                data,
                pagination: Pagination { total: self.records.len() as u64, ..Default::default() },
            })
        }
    }

    fn ids(rows: &[Artwork]) -> Vec<u64> {
        rows.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_collect_across_pages() {
        let source = FixedSource::new(23);
        let request = BulkRequest::new(15, 23);
        let selected = block_on(collect_first(&source, &request, |_, _, _| {})).expect("一括選択失敗");

        assert_eq!(ids(&selected), (1..=15).collect::<Vec<u64>>());
        assert_eq!(*source.fetched.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_collect_exact_page_boundary() {
        let source = FixedSource::new(23);
        let request = BulkRequest::new(10, 23);
        let selected = block_on(collect_first(&source, &request, |_, _, _| {})).expect("一括選択失敗");

        assert_eq!(selected.len(), 10);
        assert_eq!(*source.fetched.borrow(), vec![1]);
    }

    #[test]
    fn test_collect_more_than_dataset() {
        let source = FixedSource::new(23);
        let request = BulkRequest::new(100, 23);
        let selected = block_on(collect_first(&source, &request, |_, _, _| {})).expect("一括選択失敗");

        assert_eq!(ids(&selected), (1..=23).collect::<Vec<u64>>());
        assert_eq!(*source.fetched.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_snapshot_bounds_pages() {
        // データは23件あるが、開始時点では11件と見えていた
        let source = FixedSource::new(23);
        let request = BulkRequest::new(100, 11);
        let selected = block_on(collect_first(&source, &request, |_, _, _| {})).expect("一括選択失敗");

        assert_eq!(selected.len(), 20);
        assert_eq!(*source.fetched.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_zero_snapshot_fetches_first_page_only() {
        let source = FixedSource::new(23);
        let request = BulkRequest::new(15, 0);
        let selected = block_on(collect_first(&source, &request, |_, _, _| {})).expect("一括選択失敗");

        assert_eq!(selected.len(), 10);
        assert_eq!(*source.fetched.borrow(), vec![1]);
    }

    #[test]
    fn test_progress_callback() {
        let source = FixedSource::new(23);
        let request = BulkRequest::new(25, 23);
        let mut progress = Vec::new();
        block_on(collect_first(&source, &request, |page, collected, wanted| {
            progress.push((page, collected, wanted));
        }))
        .expect("一括選択失敗");

        assert_eq!(progress, vec![(1, 10, 25), (2, 20, 25), (3, 23, 25)]);
    }

    #[test]
    fn test_fetch_error_aborts() {
        let mut source = FixedSource::new(23);
        source.fail_on = Some(2);
        let request = BulkRequest::new(15, 23);
        let err = block_on(collect_first(&source, &request, |_, _, _| {})).unwrap_err();

        assert!(matches!(err, Error::Status(500)));
    }

    #[test]
    fn test_cancelled_between_pages() {
        let source = FixedSource::new(23);
        let request = BulkRequest::new(20, 23);
        let cancel = request.cancel.clone();
        let err = block_on(collect_first(&source, &request, |page, _, _| {
            if page == 1 {
                cancel.cancel();
            }
        }))
        .unwrap_err();

        assert!(matches!(err, Error::Cancelled));
        assert_eq!(*source.fetched.borrow(), vec![1]);
    }
}
