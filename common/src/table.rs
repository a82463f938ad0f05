//! 商品テーブルの表示用データ

use crate::labels;
use crate::price::format_price;
use crate::types::{Product, ProductId};

/// 画像セル
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageCell {
    Url(String),
    Missing,
}

impl ImageCell {
    /// 画像URL、なければ「画像なし」の文言
    pub fn text(&self) -> &str {
        match self {
            ImageCell::Url(url) => url,
            ImageCell::Missing => labels::NO_IMAGE,
        }
    }
}

/// テーブルの1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// 表示番号（1始まり、現在の並び順から算出）
    pub position: usize,
    /// 削除操作に使うID
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub image: ImageCell,
}

impl TableRow {
    pub fn from_product(position: usize, product: &Product) -> Self {
        Self {
            position,
            id: product.id,
            name: product.name.clone(),
            price: format_price(product.price),
            image: match &product.image {
                Some(url) => ImageCell::Url(url.clone()),
                None => ImageCell::Missing,
            },
        }
    }

    /// 各列の表示文字列（操作列を除く）
    pub fn cells(&self) -> [String; 4] {
        [
            self.position.to_string(),
            self.name.clone(),
            self.price.clone(),
            self.image.text().to_string(),
        ]
    }
}

pub fn build_rows(products: &[Product]) -> Vec<TableRow> {
    products
        .iter()
        .enumerate()
        .map(|(index, product)| TableRow::from_product(index + 1, product))
        .collect()
}
