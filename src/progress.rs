//! 一括選択の進捗表示（indicatif）

use artwork_picker_common::{parse_select_count, ArtworkView, BulkOutcome, PageSource};
use indicatif::{ProgressBar, ProgressStyle};

/// 一括選択をプログレスバー付きで実行
pub async fn bulk_select_with_progress<S>(view: &mut ArtworkView, source: &S, input: &str) -> BulkOutcome
where
    S: PageSource + ?Sized,
{
    // 見込み件数は開始時点の総件数で頭打ち
    let expected = parse_select_count(input)
        .map(|n| (n as u64).min(view.total_records().max(1)))
        .unwrap_or(0);

    let bar = ProgressBar::new(expected);
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg} [{bar:30}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    let outcome = view
        .bulk_select(source, input, |page, collected, _wanted| {
            bar.set_message(format!("page {}", page));
            bar.set_position(collected as u64);
        })
        .await;

    bar.finish_and_clear();
    outcome
}
