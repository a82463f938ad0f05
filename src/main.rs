use clap::Parser;
use product_form::{cli, config, error, interactive};
use product_form_common::ProductFormState;
use cli::{Cli, Commands};
use config::{Config, ConfigUpdate};
use error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Commands::Run { id_strategy, price_parsing } => {
            // 環境変数の上書きはセッションにだけ効く
            let config = Config::load()?;
            init_tracing(&config.log_level, cli.verbose);

            let mut settings = config.settings();
            if let Some(strategy) = id_strategy {
                settings.id_strategy = strategy;
            }
            if let Some(parsing) = price_parsing {
                settings.price_parsing = parsing;
            }
            tracing::debug!(?settings, "session started");

            let mut state = ProductFormState::new(settings);
            interactive::run_interactive(&mut state)?;
        }

        Commands::Config { show, set_id_strategy, set_price_parsing, reset } => {
            init_tracing(&Config::default().log_level, cli.verbose);

            let path = Config::config_path()?;
            let update = ConfigUpdate {
                reset,
                id_strategy: set_id_strategy,
                price_parsing: set_price_parsing,
            };
            let config = Config::update_file(&path, &update)?;

            if reset {
                println!("✔ 設定を既定値に戻しました");
            }
            if let Some(strategy) = set_id_strategy {
                println!("✔ ID採番方式を設定しました: {}", strategy);
            }
            if let Some(parsing) = set_price_parsing {
                println!("✔ 価格の解析モードを設定しました: {}", parsing);
            }

            if show {
                println!("設定:");
                println!("  ファイル: {}", path.display());
                println!("  ID採番方式: {}", config.id_strategy);
                println!("  価格の解析: {}", config.price_parsing);
                println!("  ログレベル: {}", config.log_level);
            }
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
