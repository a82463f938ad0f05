//! 商品の型定義
//!
//! 全フロントエンド（CLI / デスクトップ / Web）で共有される型:
//! - NewProduct: フォーム送信で検証済みの候補（IDなし）
//! - Product: リストに登録済みの商品（IDあり）

use serde::{Deserialize, Serialize};

/// 商品ID
pub type ProductId = u32;

/// 検証済みの商品候補（リスト追加前）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
}

/// 登録済みの商品
///
/// 作成後に変更されることはない。削除確定でのみ破棄される。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    pub fn from_candidate(id: ProductId, candidate: NewProduct) -> Self {
        Self {
            id,
            name: candidate.name,
            price: candidate.price,
            image: candidate.image,
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// 下書きフォームの入力欄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Price,
    Image,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Price => "price",
            Field::Image => "image",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
