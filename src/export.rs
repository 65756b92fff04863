//! 選択結果のJSON出力

use crate::error::Result;
use artwork_picker_common::Artwork;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionExport {
    pub exported_at: DateTime<Utc>,
    pub count: usize,
    pub artworks: Vec<Artwork>,
}

impl SelectionExport {
    pub fn new(artworks: &[Artwork]) -> Self {
        Self {
            exported_at: Utc::now(),
            count: artworks.len(),
            artworks: artworks.to_vec(),
        }
    }
}

/// 選択中の作品をJSONファイルに書き出す
pub fn write_selection(path: &Path, artworks: &[Artwork]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(&SelectionExport::new(artworks))?;
    std::fs::write(path, json)?;
    Ok(())
}
