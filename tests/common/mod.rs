//! テスト用のループバックHTTPサーバー

#![allow(dead_code)]

use artwork_picker::client::ArticClient;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

pub type Handler = Arc<dyn Fn(u32) -> (u16, String) + Send + Sync>;

/// 起動したサーバーと、受け付けたページ番号の記録
pub struct TestServer {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<u32>>>,
}

impl TestServer {
    pub fn client(&self) -> ArticClient {
        let http = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("クライアント作成失敗");
        ArticClient::with_client(http, &self.base_url)
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.requests.lock().expect("lock失敗").clone()
    }
}

/// リクエストごとに `handler(page)` の (ステータス, 本文) を返すサーバーを起動
pub async fn serve(handler: Handler) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let addr = listener.local_addr().expect("アドレス取得失敗");
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let handler = handler.clone();
            let recorded = recorded.clone();
            tokio::spawn(async move {
                let mut reader = BufReader::new(stream);
                let request = read_request_head(&mut reader).await;
                let mut stream = reader.into_inner();
                let page = page_from_request(&request);
                recorded.lock().expect("lock失敗").push(page);

                let (status, body) = handler(page);
                let reason = if status < 400 { "OK" } else { "Error" };
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    TestServer {
        base_url: format!("http://{}/api/v1", addr),
        requests,
    }
}

/// "GET /api/v1/artworks?page=2&limit=10 HTTP/1.1" からページ番号を取り出す
/// 空行（`\r\n\r\n`）までのリクエストヘッダーを読む
async fn read_request_head<R>(reader: &mut R) -> String
where
    R: AsyncBufReadExt + Unpin,
{
    let mut head = String::new();
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line).await {
            Ok(0) | Err(_) => break,
            Ok(_) => {
                let end_of_head = line == "\r\n" || line == "\n";
                head.push_str(&line);
                if end_of_head {
                    break;
                }
            }
        }
    }
    head
}

fn page_from_request(request: &str) -> u32 {
    request
        .split_whitespace()
        .nth(1)
        .and_then(|path| path.split('?').nth(1))
        .and_then(|query| {
            query
                .split('&')
                .find_map(|kv| kv.strip_prefix("page="))
                .and_then(|p| p.parse().ok())
        })
        .unwrap_or(0)
}

/// `total` 件のデータセットから1ページ分のレスポンス本文を作る
pub fn page_body(total: u64, page: u32) -> String {
    let start = (page.max(1) as u64 - 1) * 10 + 1;
    let end = (start + 9).min(total);
    let data: Vec<serde_json::Value> = (start..=end)
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Artwork {}", id),
                "place_of_origin": "France",
                "artist_display": format!("Artist {}", id),
                "inscriptions": null,
                "date_start": 1800 + id,
                "date_end": 1810 + id,
            })
        })
        .collect();

    json!({
        "pagination": {
            "total": total,
            "limit": 10,
            "offset": start - 1,
            "total_pages": total.div_ceil(10),
            "current_page": page,
        },
        "data": data,
    })
    .to_string()
}

/// 23件のデータセットを返すハンドラ
pub fn dataset(total: u64) -> Handler {
    Arc::new(move |page| (200, page_body(total, page)))
}
