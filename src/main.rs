use artwork_picker::{browse, cli, client, config, error, export, logging, progress, render};
use artwork_picker_common::{offset_for_page, parse_select_count, ArtworkView, BulkOutcome};
use clap::Parser;
use cli::{Cli, Commands};
use client::ArticClient;
use config::Config;
use error::{PickerError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::List { page } => {
            let client = ArticClient::from_config(&config)?;
            let mut view = ArtworkView::new();

            // 総件数がまだ分からないので、丸めずにオフセットで移動する
            let page = view.on_page_change(offset_for_page(page.max(1)));
            view.load_page(&client, page).await;
            if !view.diagnostics().is_empty() {
                return Err(fetch_failure(&view));
            }

            print!("{}", render::render_page(&view));
        }

        Commands::Select { count, output } => {
            if parse_select_count(&count).is_none() {
                return Err(PickerError::InvalidCount(count));
            }

            println!("🖼  artwork-picker - 一括選択\n");
            let client = ArticClient::from_config(&config)?;
            let mut view = ArtworkView::new();

            println!("[1/2] 総件数を取得中...");
            view.load_page(&client, 1).await;
            if !view.diagnostics().is_empty() {
                return Err(fetch_failure(&view));
            }
            println!("✔ 総件数: {}\n", view.total_records());

            println!("[2/2] 先頭{}件を選択中...", count.trim());
            view.set_select_input(count.clone());
            match progress::bulk_select_with_progress(&mut view, &client, &count).await {
                BulkOutcome::Selected(n) => println!("✔ {}件を選択\n", n),
                BulkOutcome::Ignored => return Err(PickerError::InvalidCount(count)),
                BulkOutcome::Cancelled | BulkOutcome::Failed => return Err(fetch_failure(&view)),
            }

            print!("{}", render::render_summary(&view));

            if let Some(path) = output {
                export::write_selection(&path, view.selection().as_slice())?;
                println!("\n✔ 選択結果を保存: {}", path.display());
            }
        }

        Commands::Browse => {
            let client = ArticClient::from_config(&config)?;
            browse::run_browse(&client).await?;
        }

        Commands::Config { set_base_url, set_timeout, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                changed = true;
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  ベースURL: {}", config.base_url);
                if config.effective_base_url() != config.base_url {
                    println!("  （{} により {} を使用中）", config::BASE_URL_ENV, config.effective_base_url());
                }
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  User-Agent: {}", config.user_agent);
            }
        }
    }

    Ok(())
}

/// 最後の診断ログをエラーとして返す
fn fetch_failure(view: &ArtworkView) -> PickerError {
    let message = view
        .diagnostics()
        .last()
        .map(|d| d.message.clone())
        .unwrap_or_else(|| "作品の取得に失敗しました".to_string());
    PickerError::Common(artwork_picker_common::Error::Http(message))
}
