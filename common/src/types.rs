//! 作品データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Artwork: 作品1件（APIのフィールドを1:1で保持）
//! - Pagination: ページ情報（totalのみ必須）
//! - ArtworkPage: 1ページ分のAPIレスポンス

use serde::{Deserialize, Serialize};

/// 作品レコード
///
/// APIは多くのフィールドで `null` を返すため、文字列と年はOptionで持つ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: u64,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub place_of_origin: Option<String>,

    #[serde(default)]
    pub artist_display: Option<String>,

    #[serde(default)]
    pub inscriptions: Option<String>,

    #[serde(default)]
    pub date_start: Option<i32>,  // 制作開始年

    #[serde(default)]
    pub date_end: Option<i32>,    // 制作終了年
}

impl Artwork {
    /// 一覧表示用のタイトル（未設定なら "Untitled"）
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => "Untitled",
        }
    }
}

/// ページ情報
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,

    #[serde(default)]
    pub limit: Option<u32>,

    #[serde(default)]
    pub offset: Option<u64>,

    #[serde(default)]
    pub total_pages: Option<u32>,

    #[serde(default)]
    pub current_page: Option<u32>,
}

/// `GET /artworks` の1ページ分
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkPage {
    pub data: Vec<Artwork>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_deserialize_with_nulls() {
        let json = r#"{
            "id": 27992,
            "title": "A Sunday on La Grande Jatte",
            "place_of_origin": "France",
            "artist_display": "Georges Seurat\nFrench, 1859-1891",
            "inscriptions": null,
            "date_start": 1884,
            "date_end": 1886,
            "image_id": "2d484387-2509-5e8e-2c43-22f9981972eb"
        }"#;

        let artwork: Artwork = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(artwork.id, 27992);
        assert_eq!(artwork.place_of_origin.as_deref(), Some("France"));
        assert_eq!(artwork.inscriptions, None);
        assert_eq!(artwork.date_start, Some(1884));
        assert_eq!(artwork.date_end, Some(1886));
    }

    #[test]
    fn test_artwork_missing_fields_default() {
        let artwork: Artwork = serde_json::from_str(r#"{"id": 1}"#).expect("デシリアライズ失敗");
        assert_eq!(artwork.id, 1);
        assert!(artwork.title.is_none());
        assert!(artwork.date_end.is_none());
    }

    #[test]
    fn test_display_title_fallback() {
        let untitled = Artwork { id: 1, ..Default::default() };
        assert_eq!(untitled.display_title(), "Untitled");

        let blank = Artwork { id: 2, title: Some("  ".to_string()), ..Default::default() };
        assert_eq!(blank.display_title(), "Untitled");

        let named = Artwork { id: 3, title: Some("Nighthawks".to_string()), ..Default::default() };
        assert_eq!(named.display_title(), "Nighthawks");
    }

    #[test]
    fn test_page_deserialize() {
        let json = r#"{
            "pagination": {"total": 23, "limit": 10, "offset": 10, "total_pages": 3, "current_page": 2, "next_url": "x"},
            "data": [{"id": 11, "title": "eleven"}],
            "config": {"iiif_url": "https://www.artic.edu/iiif/2"}
        }"#;

        let page: ArtworkPage = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(page.pagination.total, 23);
        assert_eq!(page.pagination.current_page, Some(2));
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].display_title(), "eleven");
    }

    #[test]
    fn test_page_requires_total() {
        let json = r#"{"pagination": {"limit": 10}, "data": []}"#;
        assert!(serde_json::from_str::<ArtworkPage>(json).is_err());
    }
}
