//! 作品ページの取得元
//!
//! HTTPクライアントはCLI（reqwest）とWeb（fetch）で異なるため、
//! 1ページ取得だけをトレイトとして切り出している。

use crate::error::Result;
use crate::paging::PAGE_SIZE;
use crate::types::ArtworkPage;

/// Art Institute of Chicago API
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// 1ページ分（最大 `PAGE_SIZE` 件）を取得する
///
/// 通信エラー・2xx以外・不正なJSONはいずれも `Err` を返す。
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch_page(&self, page: u32) -> Result<ArtworkPage>;
}

impl<T: PageSource + ?Sized> PageSource for &T {
    async fn fetch_page(&self, page: u32) -> Result<ArtworkPage> {
        (**self).fetch_page(page).await
    }
}

/// `GET <base>/artworks?page=<p>&limit=10` のURLを組み立てる
pub fn page_url(base_url: &str, page: u32) -> String {
    format!(
        "{}/artworks?page={}&limit={}",
        base_url.trim_end_matches('/'),
        page.max(1),
        PAGE_SIZE
    )
}

/// レスポンス本文をパース
pub fn parse_page_response(body: &str) -> Result<ArtworkPage> {
    let page: ArtworkPage = serde_json::from_str(body)?;
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_page_url() {
        assert_eq!(
            page_url(DEFAULT_BASE_URL, 2),
            "https://api.artic.edu/api/v1/artworks?page=2&limit=10"
        );
    }

    #[test]
    fn test_page_url_trailing_slash_and_zero_page() {
        assert_eq!(
            page_url("http://localhost:8080/api/", 0),
            "http://localhost:8080/api/artworks?page=1&limit=10"
        );
    }

    #[test]
    fn test_parse_page_response() {
        let body = r#"{"pagination": {"total": 2}, "data": [{"id": 1}, {"id": 2}]}"#;
        let page = parse_page_response(body).expect("パース失敗");
        assert_eq!(page.pagination.total, 2);
        assert_eq!(page.data.len(), 2);
    }

    #[test]
    fn test_parse_page_response_malformed() {
        let err = parse_page_response("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Json(_)));

        let err = parse_page_response(r#"{"data": []}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
