//! Sticker Pack Validator CLI

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use pack2wa::{load_bundle, Limits, PackSummary, Validator};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "pack2wa")]
#[command(about = "Validate sticker pack bundles against WhatsApp's content rules", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a pack bundle (directory or ZIP)
    Validate {
        /// Path to the bundle (directory with pack.json, or ZIP)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Show a pack bundle's metadata without judging the assets
    Inspect {
        /// Path to the bundle
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { input } => {
            println!("{}", "Sticker Pack Validator".bold().blue());
            println!("{}", "=".repeat(50).blue());
            println!();

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .expect("static template is well-formed"),
            );
            spinner.enable_steady_tick(Duration::from_millis(80));
            spinner.set_message(format!("Loading {}", input.display()));

            let bundle = match load_bundle(&input) {
                Ok(bundle) => bundle,
                Err(e) => {
                    spinner.finish_and_clear();
                    eprintln!("{}", "❌ Failed to load bundle!".red().bold());
                    eprintln!("{}", format!("Error: {:#}", e).red());
                    std::process::exit(1);
                }
            };

            spinner.set_message(format!(
                "Validating {} ({} stickers)",
                bundle.pack.identifier,
                bundle.pack.stickers.len()
            ));

            let validator = Validator::with_limits(Limits::default());
            let result = validator.validate_pack(&bundle.pack, bundle.loader.as_ref());
            spinner.finish_and_clear();

            match result {
                Ok(()) => {
                    println!("{}", "✅ Pack is valid!".green().bold());
                    println!();
                    print_summary(&PackSummary::of(&bundle.pack));
                }
                Err(e) => {
                    eprintln!("{}", "❌ Validation failed!".red().bold());
                    eprintln!("{}", format!("[{}] {}", e.code(), e).red());
                    if e.fatal() {
                        eprintln!("{}", "This failure is not retryable.".yellow());
                    }
                    std::process::exit(1);
                }
            }
        }

        Commands::Inspect { input } => {
            println!("{}", "Inspecting pack bundle...".bold());
            println!();

            match load_bundle(&input) {
                Ok(bundle) => {
                    println!("{}", "📊 Pack Metadata".bold().blue());
                    println!("{}", "=".repeat(50).blue());
                    println!();
                    print_summary(&PackSummary::of(&bundle.pack));

                    if input.is_dir() {
                        let total = pack2wa::loader::extractor::bundle_asset_bytes(&input);
                        println!("Asset bytes on disk: {}", total);
                    }
                    println!();

                    for sticker in &bundle.pack.stickers {
                        let status = match bundle
                            .loader
                            .fetch(&bundle.pack.identifier, &sticker.image_file)
                        {
                            Ok(bytes) => format!("{} KB", bytes.len() / 1024).normal(),
                            Err(_) => "missing".red(),
                        };
                        println!(
                            "  - {} [{}] {}",
                            sticker.image_file,
                            status,
                            sticker.emojis.join(" ")
                        );
                    }
                }
                Err(e) => {
                    eprintln!("{}", "❌ Failed to load bundle!".red().bold());
                    eprintln!("{}", format!("Error: {:#}", e).red());
                    std::process::exit(1);
                }
            }
        }
    }
}

fn print_summary(summary: &PackSummary) {
    println!("Pack: {} (identifier: {})", summary.name, summary.identifier);
    println!("Publisher: {}", summary.publisher);
    println!("Version: {}", summary.image_data_version);
    println!(
        "Stickers: {}{}",
        summary.sticker_count,
        if summary.animated { " (animated)" } else { "" }
    );
}
