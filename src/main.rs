use anyhow::Context;
use clap::Parser;
use small_storefront::utils::{logger, validation::Validate};
use small_storefront::{
    CliConfig, ConfigProvider, FileProductSource, HttpProductSource, OutputFormat,
    ProductSource, Storefront, StorefrontError, TomlConfig,
};
use small_storefront::app::render;

#[tokio::main]
async fn main() {
    let args = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(args.verbose, args.log_json);

    tracing::info!("🚀 Starting small-storefront CLI");
    tracing::debug!("CLI config: {:?}", args);

    let result = match &args.config {
        Some(path) => match load_toml_config(path) {
            Ok(config) => run(&config, &args).await,
            Err(e) => Err(e),
        },
        None => match args.validate() {
            Ok(()) => run(&args, &args).await,
            Err(e) => Err(e.into()),
        },
    };

    if let Err(e) = result {
        let exit_code = match e.downcast_ref::<StorefrontError>() {
            Some(err) => {
                tracing::error!(
                    "❌ Storefront failed: {} (Category: {:?}, Severity: {:?})",
                    err,
                    err.category(),
                    err.severity()
                );
                tracing::error!("💡 Recovery suggestion: {}", err.recovery_suggestion());
                eprintln!("❌ {}", err.user_friendly_message());
                eprintln!("💡 {}", err.recovery_suggestion());

                err.severity().exit_code()
            }
            None => {
                tracing::error!("❌ Storefront failed: {:#}", e);
                eprintln!("❌ {:#}", e);
                1
            }
        };

        std::process::exit(exit_code);
    }
}

fn load_toml_config(path: &str) -> anyhow::Result<TomlConfig> {
    tracing::info!("📁 Loading configuration from: {}", path);
    let config = TomlConfig::from_file(path)
        .with_context(|| format!("Failed to load config file '{}'", path))?;
    config.validate()?;
    tracing::info!("✅ Configuration '{}' loaded and validated", config.storefront.name);
    Ok(config)
}

async fn run<C: ConfigProvider>(config: &C, args: &CliConfig) -> anyhow::Result<()> {
    let format = OutputFormat::parse("format", config.output_format())?;

    let source: Box<dyn ProductSource> = match config.products_file() {
        Some(path) => Box::new(FileProductSource::new(path)),
        None => Box::new(HttpProductSource::from_config(config)?),
    };

    let mut storefront = Storefront::new();
    if let Err(e) = storefront.load(source.as_ref()).await {
        if let Some(message) = storefront.products().error_message() {
            println!("{}", message);
        }
        return Err(e.into());
    }

    if let Some(term) = &args.search {
        storefront.type_search(term);
        storefront.submit_search();
    }

    let visible = storefront.products().visible();
    let label = storefront.products().quantity_label();
    println!("{}", render::render_products(&visible, &label, format)?);

    if args.add.is_empty() && args.remove.is_empty() {
        return Ok(());
    }

    for id in &args.add {
        if storefront.add_to_cart(id).is_none() {
            eprintln!("⚠️  Product {} not found, skipping", id);
        }
    }
    for id in &args.remove {
        storefront.remove_from_cart(id);
    }

    println!("{}", render::render_cart(&storefront.cart_view(), format)?);
    Ok(())
}
