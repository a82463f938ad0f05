//! 商品管理フォーム（ターミナル版）
//!
//! 状態そのものは `product_form_common` にあり、ここでは端末での入出力と設定を扱う。

pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
