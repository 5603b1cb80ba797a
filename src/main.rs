use clap::Parser;
use module_framework::config::cli::load_wire_request;
use module_framework::core::request::assemble_request;
use module_framework::core::response::decode_response;
use module_framework::utils::{logger, validation::Validate};
use module_framework::{AdapterConfig, CliConfig, EchoModule, ModuleAdapter, YamlCodec};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

fn render<T: Serialize>(value: &T, format: &str) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        "json" => serde_json::to_string_pretty(value)?,
        _ => serde_yaml::to_string(value)?,
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 驗證參數與載入配置
    if let Err(e) = cli.validate() {
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let config = match &cli.config {
        Some(path) => match AdapterConfig::from_file(path).and_then(|c| c.validate().map(|_| c)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(2);
            }
        },
        None => AdapterConfig::default(),
    };

    // 初始化日誌
    let verbose = cli.verbose || matches!(config.logging.level.as_str(), "debug" | "trace");
    if cli.json_logs || config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let wire = match load_wire_request(&cli.request, &YamlCodec) {
        Ok(wire) => wire,
        Err(e) => {
            tracing::error!("❌ Failed to load request document: {}", e);
            std::process::exit(2);
        }
    };

    if !cli.generate {
        match assemble_request(&YamlCodec, &config, Some(&wire)) {
            Ok(request) => println!("{}", render(&request, &cli.output)?),
            Err(e) => {
                tracing::error!("❌ Request assembly failed: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let ctx = CancellationToken::new();
    let signal_ctx = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_ctx.cancel();
        }
    });

    let adapter = ModuleAdapter::new(EchoModule).with_config(config);
    let response = match adapter.generate(&ctx, Some(&wire)).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("❌ Generation failed ({:?}): {}", e.phase(), e);
            std::process::exit(1);
        }
    };

    if response.is_empty() {
        tracing::info!("Module generated no resources");
    }
    let decoded = decode_response(&YamlCodec, &response)?;
    println!("{}", render(&decoded, &cli.output)?);

    Ok(())
}
