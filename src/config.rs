use crate::error::{ProductFormError, Result};
use product_form_common::{FormSettings, IdStrategy, PriceParsing};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ID_STRATEGY_ENV: &str = "PRODUCT_FORM_ID_STRATEGY";
pub const PRICE_PARSING_ENV: &str = "PRODUCT_FORM_PRICE_PARSING";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub id_strategy: IdStrategy,
    pub price_parsing: PriceParsing,
    /// tracing の既定フィルタ（RUST_LOG が優先）
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::Monotonic,
            price_parsing: PriceParsing::Lenient,
            log_level: "warn".into(),
        }
    }
}

/// `config` サブコマンドで指定された変更
#[derive(Debug, Default, Clone)]
pub struct ConfigUpdate {
    pub reset: bool,
    pub id_strategy: Option<IdStrategy>,
    pub price_parsing: Option<PriceParsing>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        !self.reset && self.id_strategy.is_none() && self.price_parsing.is_none()
    }
}

impl Config {
    /// 設定ファイルを読み、環境変数で上書きする
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// `config` サブコマンド用：ファイルだけを読み書きする（環境変数は見ない）
    ///
    /// `reset` のときは既存ファイルを読まないので、壊れたファイルも既定値で上書きできる。
    pub fn update_file(path: &Path, update: &ConfigUpdate) -> Result<Self> {
        let mut config = if update.reset {
            Self::default()
        } else {
            Self::load_from(path)?
        };

        if let Some(strategy) = update.id_strategy {
            config.id_strategy = strategy;
        }
        if let Some(parsing) = update.price_parsing {
            config.price_parsing = parsing;
        }

        if !update.is_empty() {
            config.save_to(path)?;
            tracing::info!(path = %path.display(), "config saved");
        }
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ProductFormError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("product-form").join("config.json"))
    }

    /// 環境変数の値で上書き
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ID_STRATEGY_ENV) {
            self.id_strategy = value
                .parse()
                .map_err(|e: String| ProductFormError::InvalidSetting(format!("{ID_STRATEGY_ENV}: {e}")))?;
        }
        if let Some(value) = lookup(PRICE_PARSING_ENV) {
            self.price_parsing = value
                .parse()
                .map_err(|e: String| ProductFormError::InvalidSetting(format!("{PRICE_PARSING_ENV}: {e}")))?;
        }
        Ok(())
    }

    pub fn settings(&self) -> FormSettings {
        FormSettings {
            id_strategy: self.id_strategy,
            price_parsing: self.price_parsing,
        }
    }
}
