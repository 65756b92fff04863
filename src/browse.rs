//! 対話モード
//!
//! 1ページ表示 → コマンド入力 → 反映、を繰り返す。
//! 状態はすべて `ArtworkView` が持ち、ここは入力を各メソッドに振り分けるだけ。

use crate::error::{PickerError, Result};
use crate::progress::bulk_select_with_progress;
use crate::render::{render_page, render_summary};
use artwork_picker_common::{ArtworkView, BulkOutcome, PageSource, SortField};
use dialoguer::{Input, MultiSelect};

/// 対話アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    /// 次のページ
    Next,
    /// 前のページ
    Previous,
    /// 指定ページへ移動
    Jump(u32),
    /// 指定IDの行のチェックを切り替え
    Toggle(Vec<u64>),
    /// チェックボックスで行を選び直す
    Pick,
    /// 表示中ページ全体のチェックを切り替え
    TogglePage,
    /// 先頭からN件を一括選択（入力文字列そのまま）
    Bulk(String),
    /// 列でソート
    Sort(SortField),
    /// 選択サマリーを表示
    Summary,
    /// 再表示
    Refresh,
    /// 終了
    Quit,
}

const HELP: &str = "操作: [n]次 [p]前 [g N]ページ移動 [t ID..]切替 [c]チェック選択 [a]ページ全体 [s N]先頭N件選択 [o 列]ソート [v]選択一覧 [q]終了";

/// 入力行をアクションに変換
///
/// 解釈できない入力は `Refresh`（何もしない）。
pub fn parse_action(input: &str) -> BrowseAction {
    let trimmed = input.trim();
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (trimmed, ""),
    };

    match command {
        "n" | "next" => BrowseAction::Next,
        "p" | "prev" => BrowseAction::Previous,
        "g" | "go" => match rest.parse::<u32>() {
            Ok(page) => BrowseAction::Jump(page),
            Err(_) => BrowseAction::Refresh,
        },
        "t" | "toggle" => {
            let ids: Vec<u64> = rest
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter_map(|s| s.parse().ok())
                .collect();
            if ids.is_empty() {
                BrowseAction::Refresh
            } else {
                BrowseAction::Toggle(ids)
            }
        }
        "c" | "check" => BrowseAction::Pick,
        "a" | "all" => BrowseAction::TogglePage,
        "s" | "select" => BrowseAction::Bulk(rest.to_string()),
        "o" | "sort" => match parse_sort_field(rest) {
            Some(field) => BrowseAction::Sort(field),
            None => BrowseAction::Refresh,
        },
        "v" | "view" => BrowseAction::Summary,
        "q" | "Q" | "quit" => BrowseAction::Quit,
        _ => BrowseAction::Refresh,
    }
}

/// 列番号（1始まり）または列名からソート列を決める
fn parse_sort_field(input: &str) -> Option<SortField> {
    if let Ok(n) = input.parse::<usize>() {
        return SortField::ALL.get(n.checked_sub(1)?).copied();
    }
    let needle = input.to_lowercase().replace(' ', "_");
    SortField::ALL.into_iter().find(|f| {
        f.as_str() == needle || f.header().to_lowercase().replace(' ', "_") == needle
    })
}

/// 対話モードを実行
pub async fn run_browse<S>(source: &S) -> Result<()>
where
    S: PageSource + ?Sized,
{
    let mut view = ArtworkView::new();
    view.load_page(source, 1).await;

    println!("{}", HELP);
    loop {
        println!();
        print!("{}", render_page(&view));

        let input: String = Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()?;

        match parse_action(&input) {
            BrowseAction::Next => match view.next_page() {
                Some(page) => {
                    view.load_page(source, page).await;
                }
                None => println!("最後のページです"),
            },
            BrowseAction::Previous => match view.previous_page() {
                Some(page) => {
                    view.load_page(source, page).await;
                }
                None => println!("最初のページです"),
            },
            BrowseAction::Jump(page) => {
                let page = view.go_to_page(page);
                view.load_page(source, page).await;
            }
            BrowseAction::Toggle(ids) => {
                for id in ids {
                    if !view.toggle_row(id) {
                        println!("ID {} はこのページにありません", id);
                    }
                }
            }
            BrowseAction::Pick => pick_rows(&mut view)?,
            BrowseAction::TogglePage => view.toggle_page(),
            BrowseAction::Bulk(count) => {
                view.set_select_input(count.clone());
                if let BulkOutcome::Selected(n) = bulk_select_with_progress(&mut view, source, &count).await {
                    println!("✔ {}件を選択しました", n);
                }
            }
            BrowseAction::Sort(field) => view.sort_by(field),
            BrowseAction::Summary => print!("{}", render_summary(&view)),
            BrowseAction::Refresh => {}
            BrowseAction::Quit => break,
        }
    }

    print!("{}", render_summary(&view));
    Ok(())
}

/// チェックボックスで表示中ページの行を選び直す
///
/// 変化した行だけ1行ずつ切り替えるので、他ページの選択は残る。
fn pick_rows(view: &mut ArtworkView) -> Result<()> {
    let rows = view.records().to_vec();
    if rows.is_empty() {
        return Ok(());
    }

    let items: Vec<String> = rows
        .iter()
        .map(|a| format!("[{}] {}", a.id, a.display_title()))
        .collect();
    let defaults: Vec<bool> = rows.iter().map(|a| view.selection().contains(a.id)).collect();

    let chosen = MultiSelect::new()
        .with_prompt("スペースで切替、Enterで確定")
        .items(&items)
        .defaults(&defaults)
        .interact()
        .map_err(PickerError::Prompt)?;

    for (i, artwork) in rows.iter().enumerate() {
        if chosen.contains(&i) != defaults[i] {
            view.toggle_row(artwork.id);
        }
    }
    Ok(())
}
