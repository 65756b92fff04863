//! 表示中ページの列ソート
//!
//! APIにはソートを依頼せず、取得済みの1ページ分だけを並べ替える。

use crate::types::Artwork;
use std::cmp::Ordering;

/// ソート可能な列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Title,
    PlaceOfOrigin,
    ArtistDisplay,
    Inscriptions,
    DateStart,
    DateEnd,
}

impl SortField {
    /// 表示順の全列
    pub const ALL: [SortField; 7] = [
        SortField::Id,
        SortField::Title,
        SortField::PlaceOfOrigin,
        SortField::ArtistDisplay,
        SortField::Inscriptions,
        SortField::DateStart,
        SortField::DateEnd,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            SortField::Id => "ID",
            SortField::Title => "Title",
            SortField::PlaceOfOrigin => "Place of Origin",
            SortField::ArtistDisplay => "Artist Display",
            SortField::Inscriptions => "Inscriptions",
            SortField::DateStart => "Start Date",
            SortField::DateEnd => "End Date",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::PlaceOfOrigin => "place_of_origin",
            SortField::ArtistDisplay => "artist_display",
            SortField::Inscriptions => "inscriptions",
            SortField::DateStart => "date_start",
            SortField::DateEnd => "date_end",
        }
    }

    /// セルの表示文字列（値なしは空文字）
    pub fn cell(&self, artwork: &Artwork) -> String {
        match self {
            SortField::Id => artwork.id.to_string(),
            SortField::Title => artwork.title.clone().unwrap_or_default(),
            SortField::PlaceOfOrigin => artwork.place_of_origin.clone().unwrap_or_default(),
            SortField::ArtistDisplay => artwork.artist_display.clone().unwrap_or_default(),
            SortField::Inscriptions => artwork.inscriptions.clone().unwrap_or_default(),
            SortField::DateStart => artwork.date_start.map(|y| y.to_string()).unwrap_or_default(),
            SortField::DateEnd => artwork.date_end.map(|y| y.to_string()).unwrap_or_default(),
        }
    }

    fn compare(&self, a: &Artwork, b: &Artwork) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Title => compare_text(&a.title, &b.title),
            SortField::PlaceOfOrigin => compare_text(&a.place_of_origin, &b.place_of_origin),
            SortField::ArtistDisplay => compare_text(&a.artist_display, &b.artist_display),
            SortField::Inscriptions => compare_text(&a.inscriptions, &b.inscriptions),
            SortField::DateStart => compare_present_first(&a.date_start, &b.date_start),
            SortField::DateEnd => compare_present_first(&a.date_end, &b.date_end),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn flipped(&self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "▲",
            SortOrder::Descending => "▼",
        }
    }
}

/// 現在のソート指定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: Option<SortField>,
    pub order: SortOrder,
}

impl SortState {
    /// 列ヘッダーのクリック
    ///
    /// 同じ列なら昇順/降順を反転、別の列なら昇順から始める。
    pub fn toggle(&mut self, field: SortField) {
        if self.field == Some(field) {
            self.order = self.order.flipped();
        } else {
            self.field = Some(field);
            self.order = SortOrder::Ascending;
        }
    }

    /// 指定列のソート方向（ソート対象でなければNone）
    pub fn order_for(&self, field: SortField) -> Option<SortOrder> {
        (self.field == Some(field)).then_some(self.order)
    }

    /// 行を並べ替える（安定ソート）
    pub fn apply(&self, rows: &mut [Artwork]) {
        let Some(field) = self.field else {
            return;
        };
        rows.sort_by(|a, b| {
            let ord = field.compare(a, b);
            match self.order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
    }
}

fn compare_text(a: &Option<String>, b: &Option<String>) -> Ordering {
    let a = a.as_ref().map(|s| s.to_lowercase());
    let b = b.as_ref().map(|s| s.to_lowercase());
    compare_present_first(&a, &b)
}

// 値なしは昇順で末尾
fn compare_present_first<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
