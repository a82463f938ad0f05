//! エラー型定義

use thiserror::Error;

use crate::labels;
use crate::types::Field;

/// フォーム検証エラー
///
/// 表示文字列はそのままユーザーへの通知として使う。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{notice}", notice = labels::VALIDATION_NOTICE)]
    MissingField(Field),

    #[error("{notice}: {0}", notice = labels::INVALID_PRICE_NOTICE)]
    InvalidPrice(String),
}

impl ValidationError {
    /// エラーの原因となった入力欄
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingField(field) => *field,
            ValidationError::InvalidPrice(_) => Field::Price,
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, ValidationError>;
