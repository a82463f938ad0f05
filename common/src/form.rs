//! 下書きフォーム（入力中の値を保持）

use crate::error::{Result, ValidationError};
use crate::price::{parse_price, PriceParsing};
use crate::types::{Field, NewProduct};

/// 未検証の入力値
///
/// 保存が試みられるまで検証しない。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftForm {
    name: String,
    price: String,
    image: String,
}

impl DraftForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn set_name(&mut self, text: impl Into<String>) {
        self.name = text.into();
    }

    pub fn set_price(&mut self, text: impl Into<String>) {
        self.price = text.into();
    }

    pub fn set_image(&mut self, text: impl Into<String>) {
        self.image = text.into();
    }

    /// 入力欄を指定して値を置き換える
    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        match field {
            Field::Name => self.set_name(text),
            Field::Price => self.set_price(text),
            Field::Image => self.set_image(text),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Price => &self.price,
            Field::Image => &self.image,
        }
    }

    /// 3つの入力欄をすべて空にする
    pub fn clear(&mut self) {
        self.name.clear();
        self.price.clear();
        self.image.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.price.is_empty() && self.image.is_empty()
    }

    /// 入力値を検証して商品候補を作る
    ///
    /// 入力値は変更しない。クリアは呼び出し側が行う。
    pub fn try_submit(&self, parsing: PriceParsing) -> Result<NewProduct> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingField(Field::Name));
        }
        if self.price.is_empty() {
            return Err(ValidationError::MissingField(Field::Price));
        }

        let price = parse_price(&self.price, parsing)?;
        let image = if self.image.is_empty() {
            None
        } else {
            Some(self.image.clone())
        };

        Ok(NewProduct {
            name: self.name.clone(),
            price,
            image,
        })
    }
}
