use clap::Parser;
use consola_site::utils::{logger, validation::Validate};
use consola_site::{
    CliConfig, ContentProvider, GeminiSource, LocalStorage, SiteBuilder, StaticSource,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting consola-site");

    let config = match cli.load_site_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let source: Box<dyn consola_site::core::ContentSource> = if config.content.offline {
        tracing::info!("🔌 Offline build, content service skipped");
        Box::new(StaticSource::default())
    } else {
        // 憑證只在這裡讀取環境變數，之後明確傳入
        let api_key = cli
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok());
        Box::new(GeminiSource::new(config.gemini_settings(api_key)))
    };

    let provider = ContentProvider::new(source).with_timeout(config.timeout());
    let storage = LocalStorage::new(config.output.path.clone());
    let builder = SiteBuilder::new(provider, storage, config.page_options())
        .with_profile_snapshot(config.output.write_profile);

    match builder.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Site build completed");
            println!("✅ Site build completed!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Site build failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    }

    Ok(())
}
