use clap::{Parser, Subcommand};
use product_form_common::{IdStrategy, PriceParsing};

#[derive(Parser)]
#[command(name = "product-form")]
#[command(about = "商品管理フォーム（メモリ上のみ）", long_about = None)]
pub struct Cli {
    /// 省略時は run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 対話的に商品を登録・削除
    Run {
        /// ID採番方式 (monotonic/size-plus-one)
        #[arg(long)]
        id_strategy: Option<IdStrategy>,

        /// 価格の解析モード (lenient/strict)
        #[arg(long)]
        price_parsing: Option<PriceParsing>,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// ID採番方式を保存
        #[arg(long)]
        set_id_strategy: Option<IdStrategy>,

        /// 価格の解析モードを保存
        #[arg(long)]
        set_price_parsing: Option<PriceParsing>,

        /// 既定値に戻す
        #[arg(long)]
        reset: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run {
            id_strategy: None,
            price_parsing: None,
        }
    }
}
