//! ターミナル表示
//!
//! 作品テーブル（チェック列付き）と選択サマリーを文字列にする。

use artwork_picker_common::{ArtworkView, SortField, NO_SELECTION_MESSAGE};

/// 列ごとの表示幅（文字数）
fn column_width(field: SortField) -> usize {
    match field {
        SortField::Id => 7,
        SortField::Title => 32,
        SortField::PlaceOfOrigin => 16,
        SortField::ArtistDisplay => 28,
        SortField::Inscriptions => 20,
        SortField::DateStart | SortField::DateEnd => 10,
    }
}

/// 1行に収めて幅を超えたら「…」で切る
pub fn fit(text: &str, width: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let len = flat.chars().count();

    if len <= width {
        format!("{}{}", flat, " ".repeat(width - len))
    } else if width == 0 {
        String::new()
    } else {
        let mut cut: String = flat.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}

/// 表示中ページをテーブル形式で描画
pub fn render_page(view: &ArtworkView) -> String {
    let mut out = String::new();
    let sort = view.sort();

    let header_check = if view.is_page_selected() { "[x]" } else { "[ ]" };
    out.push_str(header_check);
    for field in SortField::ALL {
        let label = match sort.order_for(field) {
            Some(order) => format!("{} {}", field.header(), order.arrow()),
            None => field.header().to_string(),
        };
        out.push(' ');
        out.push_str(&fit(&label, column_width(field)));
    }
    out.push('\n');

    let total_width: usize = 3 + SortField::ALL.iter().map(|f| column_width(*f) + 1).sum::<usize>();
    out.push_str(&"-".repeat(total_width));
    out.push('\n');

    if view.records().is_empty() {
        out.push_str(if view.is_loading() { "Loading...\n" } else { "No artworks found\n" });
    }

    for artwork in view.records() {
        let check = if view.selection().contains(artwork.id) { "[x]" } else { "[ ]" };
        out.push_str(check);
        for field in SortField::ALL {
            out.push(' ');
            out.push_str(&fit(&field.cell(artwork), column_width(field)));
        }
        out.push('\n');
    }

    out.push_str(&render_page_report(view));
    out.push('\n');
    out
}

/// 「Page 2 / 3 (11-20 of 23)」形式
pub fn render_page_report(view: &ArtworkView) -> String {
    let state = view.page_state();
    let (from, to) = state.visible_range(view.records().len());
    format!(
        "Page {} / {} ({}-{} of {})",
        state.page,
        state.total_pages().max(1),
        from,
        to,
        state.total_records
    )
}

/// 選択サマリー
pub fn render_summary(view: &ArtworkView) -> String {
    let mut out = view.summary_heading();
    out.push('\n');

    let titles = view.selected_titles();
    if titles.is_empty() {
        out.push_str(NO_SELECTION_MESSAGE);
        out.push('\n');
    } else {
        for (id, title) in titles {
            out.push_str(&format!("  - [{}] {}\n", id, title));
        }
    }
    out
}
