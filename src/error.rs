use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("件数は1以上の整数で指定してください: {0}")]
    InvalidCount(String),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Common(#[from] artwork_picker_common::Error),
}

pub type Result<T> = std::result::Result<T, PickerError>;
