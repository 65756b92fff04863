//! ページ計算
//!
//! ページ番号は1始まり、オフセット（first）は0始まり。

/// 1ページあたりの件数（APIの `limit`）
pub const PAGE_SIZE: u32 = 10;

/// 総件数から総ページ数を計算（切り上げ）
pub fn total_pages(total_records: u64) -> u32 {
    let pages = total_records.div_ceil(PAGE_SIZE as u64);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// 行オフセットからページ番号を計算
pub fn page_for_offset(first: u64) -> u32 {
    let page = first / PAGE_SIZE as u64 + 1;
    u32::try_from(page).unwrap_or(u32::MAX)
}

/// ページ番号から行オフセットを計算
pub fn offset_for_page(page: u32) -> u64 {
    page.saturating_sub(1) as u64 * PAGE_SIZE as u64
}

/// 表示中のページ状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 現在ページ（1始まり）
    pub page: u32,
    /// ページ先頭の行オフセット
    pub first: u64,
    /// 最後に成功した取得が返した総件数
    pub total_records: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 1,
            first: 0,
            total_records: 0,
        }
    }
}

impl PageState {
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_records)
    }

    /// 行オフセットでページを移動し、新しいページ番号を返す
    pub fn move_to_offset(&mut self, first: u64) -> u32 {
        self.first = first;
        self.page = page_for_offset(first);
        self.page
    }

    /// ページ番号で移動（1..=総ページ数に丸める）
    pub fn move_to_page(&mut self, page: u32) -> u32 {
        let last = self.total_pages().max(1);
        let page = page.clamp(1, last);
        self.move_to_offset(offset_for_page(page))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// 「11-20 of 23」形式の表示範囲（1始まり、両端含む）
    pub fn visible_range(&self, rows_on_page: usize) -> (u64, u64) {
        if rows_on_page == 0 {
            return (0, 0);
        }
        (self.first + 1, self.first + rows_on_page as u64)
    }
}
