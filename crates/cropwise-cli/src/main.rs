//! Cropwise command-line interface.
//!
//! ```text
//! cropwise recommend --region Vidarbha --season Kharif --soil-type "Black Soil" \
//!     --temperature 35 --moisture 20 --soil-ph 7.8
//! cropwise explain ... --crop-name Soybean --seed-size Medium --sowing-depth 4 --spacing 45
//! cropwise fallback ...
//! ```
//!
//! The API key is read from the config file's `provider.api_key` or from
//! `GEMINI_API_KEY`. Without a key, `recommend` and `explain` answer from
//! local data. `fallback` never touches the network.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use cropwise_core::{resolve_fallback, PredictionParams, PredictionResults};
use cropwise_runtime::{CropAdvisor, RuntimeConfig};

#[derive(Parser)]
#[command(name = "cropwise")]
#[command(about = "Crop recommendations and seed explanations", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend crops for the given conditions
    Recommend {
        #[command(flatten)]
        conditions: Conditions,
    },

    /// Explain a seed prediction in farmer-facing language
    Explain {
        #[command(flatten)]
        conditions: Conditions,

        /// Crop the prediction was made for
        #[arg(long)]
        crop_name: String,

        /// Predicted seed size category
        #[arg(long)]
        seed_size: String,

        /// Predicted sowing depth in cm
        #[arg(long)]
        sowing_depth: f64,

        /// Predicted spacing in cm
        #[arg(long)]
        spacing: f64,
    },

    /// Resolve crops from the offline table only
    Fallback {
        #[command(flatten)]
        conditions: Conditions,

        /// Season variant index; defaults to clock-based selection
        #[arg(long)]
        variant: Option<usize>,
    },
}

/// Field conditions shared by every command.
#[derive(Args, Debug, Clone)]
struct Conditions {
    /// Region name, e.g. Vidarbha
    #[arg(long)]
    region: String,

    /// Season name: Kharif, Rabi or Summer
    #[arg(long)]
    season: String,

    /// Soil type, e.g. "Black Soil"
    #[arg(long)]
    soil_type: String,

    /// Temperature in °C
    #[arg(long, allow_hyphen_values = true)]
    temperature: f64,

    /// Soil moisture in %
    #[arg(long)]
    moisture: f64,

    /// Soil pH
    #[arg(long)]
    soil_ph: f64,

    /// Relative humidity in % (default 60)
    #[arg(long)]
    humidity: Option<f64>,
}

impl Conditions {
    fn into_params(self) -> PredictionParams {
        let params = PredictionParams::new(
            self.region,
            self.season,
            self.soil_type,
            self.temperature,
            self.moisture,
            self.soil_ph,
        );
        match self.humidity {
            Some(humidity) => params.with_humidity(humidity),
            None => params,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Recommend { conditions } => {
            let advisor = build_advisor(load_config(cli.config.as_deref())?).await?;
            let recommendation = advisor
                .recommend_crops_traced(&conditions.into_params())
                .await;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&recommendation)?);
            } else {
                for crop in &recommendation.crops {
                    println!("{crop}");
                }
                eprintln!("source: {}", describe_origin(&recommendation.origin));
            }
        }

        Commands::Explain {
            conditions,
            crop_name,
            seed_size,
            sowing_depth,
            spacing,
        } => {
            let advisor = build_advisor(load_config(cli.config.as_deref())?).await?;
            let params = conditions.into_params().with_crop_name(crop_name);
            let results = PredictionResults {
                seed_size,
                sowing_depth,
                spacing,
            };
            let explanation = advisor.explain_prediction(&params, &results).await;

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({ "explanation": explanation }))?
                );
            } else {
                println!("{explanation}");
            }
        }

        Commands::Fallback {
            conditions,
            variant,
        } => {
            let selector = match variant {
                Some(index) => cropwise_core::VariantSelector::Fixed(index),
                None => load_config(cli.config.as_deref())?.recommendations.variant,
            };
            let resolution = resolve_fallback(&conditions.into_params(), selector);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&resolution)?);
            } else {
                for crop in &resolution.crops {
                    println!("{crop}");
                }
                eprintln!("tier: {}", resolution.tier);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<RuntimeConfig> {
    let config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("Invalid config: {}", path.display()))?
        }
        None => RuntimeConfig::default(),
    };
    Ok(config)
}

fn parse_config(content: &str) -> Result<RuntimeConfig> {
    let config: RuntimeConfig = if content.trim().is_empty() {
        RuntimeConfig::default()
    } else {
        serde_yaml::from_str(content).context("Failed to parse YAML")?
    };
    config.validate()?;
    Ok(config)
}

async fn build_advisor(config: RuntimeConfig) -> Result<CropAdvisor> {
    let advisor =
        CropAdvisor::from_config(config).context("Failed to configure the Gemini provider")?;
    advisor.health_check().await;
    Ok(advisor)
}

fn describe_origin(origin: &cropwise_runtime::Origin) -> String {
    use cropwise_runtime::Origin;

    match origin {
        Origin::Live => "live".to_string(),
        Origin::Retry { candidate } => format!("retry prompt {}", candidate + 1),
        Origin::Fallback { tier } => format!("fallback ({tier})"),
    }
}
