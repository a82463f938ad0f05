use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProductFormError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("設定値が不正: {0}")]
    InvalidSetting(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, ProductFormError>;
