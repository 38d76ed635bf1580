use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    let directive = if verbose {
        "small_storefront=debug,info"
    } else {
        "small_storefront=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// 初始化全域日誌；`json` 為 true 時輸出給日誌收集器用的結構化格式
pub fn init_logger(verbose: bool, json: bool) {
    fn fmt<S>() -> tracing_subscriber::fmt::Layer<S> {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
    }

    // Option<Layer> 本身也是 Layer，兩者只會啟用一個
    let (json_layer, compact_layer) = if json {
        (Some(fmt().json()), None)
    } else {
        (None, Some(fmt().compact()))
    };

    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(json_layer)
        .with(compact_layer)
        .init();
}
