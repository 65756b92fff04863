//! 選択状態
//!
//! 選択順を保持したまま、IDで所属判定できる。
//! ページ移動では変化せず、置き換え（replace）でのみ丸ごと入れ替わる。

use crate::types::Artwork;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<Artwork>,
    ids: HashSet<u64>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 選択を丸ごと置き換える（同じIDが複数あれば先頭のみ残す）
    pub fn replace(&mut self, artworks: Vec<Artwork>) {
        self.items.clear();
        self.ids.clear();
        for artwork in artworks {
            if self.ids.insert(artwork.id) {
                self.items.push(artwork);
            }
        }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Artwork] {
        &self.items
    }

    pub fn ids(&self) -> Vec<u64> {
        self.items.iter().map(|a| a.id).collect()
    }

    /// 1行のチェックを切り替えた後の選択内容
    ///
    /// 未選択なら末尾に追加、選択済みなら取り除く。他の行はそのまま。
    pub fn toggled(&self, artwork: &Artwork) -> Vec<Artwork> {
        if self.contains(artwork.id) {
            self.items
                .iter()
                .filter(|a| a.id != artwork.id)
                .cloned()
                .collect()
        } else {
            let mut next = self.items.clone();
            next.push(artwork.clone());
            next
        }
    }

    /// ヘッダーのチェックを切り替えた後の選択内容
    ///
    /// 表示中の行がすべて選択済みなら外し、そうでなければ未選択分を追加する。
    pub fn page_toggled(&self, rows: &[Artwork]) -> Vec<Artwork> {
        if rows.is_empty() {
            return self.items.clone();
        }

        if rows.iter().all(|r| self.contains(r.id)) {
            let page_ids: HashSet<u64> = rows.iter().map(|r| r.id).collect();
            self.items
                .iter()
                .filter(|a| !page_ids.contains(&a.id))
                .cloned()
                .collect()
        } else {
            let mut next = self.items.clone();
            next.extend(rows.iter().filter(|r| !self.contains(r.id)).cloned());
            next
        }
    }

    /// 表示中の行がすべて選択済みか
    pub fn covers(&self, rows: &[Artwork]) -> bool {
        !rows.is_empty() && rows.iter().all(|r| self.contains(r.id))
    }
}
