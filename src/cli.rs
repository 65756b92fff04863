use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "artwork-picker")]
#[command(about = "Art Institute of Chicago 作品一覧・ページ横断選択ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 1ページ分（10件）の作品を表示
    List {
        /// ページ番号（1始まり）
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// 先頭からN件をページ横断で選択
    Select {
        /// 選択する件数
        #[arg(required = true)]
        count: String,

        /// 選択結果のJSON出力先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 対話モードで一覧・選択
    Browse,

    /// 設定の表示・変更
    Config {
        /// APIのベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
