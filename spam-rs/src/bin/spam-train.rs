//! CLI tool for training and trying out spam models
//!
//! # Usage
//!
//! ```bash
//! # Train on a labelled CSV and write the model artifact
//! spam-train train spam.csv --output public/model.json --seed 42
//!
//! # Classify a message with a trained model (or the built-in table)
//! spam-train classify "WINNER! Claim your free prize now" --model public/model.json
//! ```

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use spam_rs::classifier::{default_model, serializer, Explainer, Model, Predictor, Trainer};
use spam_rs::config::LoggingConfig;
use spam_rs::dataset;
use spam_rs::logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spam-train")]
#[command(about = "Train and inspect spam classification models", long_about = None)]
struct Cli {
    /// Log level for spam_rs targets
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a model from a labelled CSV file
    Train {
        /// CSV with a header row and `label,text` rows (label: spam|ham)
        corpus: PathBuf,
        /// Where to write the model artifact
        #[arg(short, long, default_value = "public/model.json")]
        output: PathBuf,
        /// Seed for the initial weights (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Classify a message and explain the verdict
    Classify {
        /// Message text
        text: String,
        /// Model artifact (defaults to the built-in weight table)
        #[arg(short, long)]
        model: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(&LoggingConfig {
        level: cli.log_level.clone(),
        ..LoggingConfig::default()
    });

    match cli.command {
        Commands::Train { corpus, output, seed } => {
            let corpus = dataset::load_corpus(&corpus)
                .with_context(|| format!("Failed to read corpus '{}'", corpus.display()))?;
            if corpus.is_empty() {
                bail!("Corpus contains no usable rows ({} skipped)", corpus.skipped);
            }
            println!("Loaded {} samples ({} rows skipped)", corpus.len(), corpus.skipped);

            let mut trainer = match seed {
                Some(seed) => Trainer::with_seed(seed),
                None => Trainer::new(),
            };
            let outcome = trainer.fit(&corpus.examples)?;

            // Evaluated on the training corpus itself
            println!("Training complete!");
            println!("Accuracy:  {:.2}%", outcome.metrics.accuracy * 100.0);
            println!("Precision: {:.2}%", outcome.metrics.precision * 100.0);
            println!("Recall:    {:.2}%", outcome.metrics.recall * 100.0);
            println!("F1-Score:  {:.2}%", outcome.metrics.f1 * 100.0);

            serializer::save(&outcome.model, &output)
                .with_context(|| format!("Failed to write model to '{}'", output.display()))?;
            println!("✓ Model saved to {}", output.display());
        }
        Commands::Classify { text, model } => {
            let loaded: Model;
            let model = match model {
                Some(path) => {
                    loaded = serializer::load(&path)
                        .with_context(|| format!("Failed to load model '{}'", path.display()))?;
                    &loaded
                }
                None => default_model(),
            };

            let prediction = Predictor::new(model).predict(&text);
            println!(
                "{} (spam score {:.4}, confidence {:.2}%)",
                prediction.label,
                prediction.probability,
                prediction.confidence * 100.0
            );

            for entry in Explainer::new(model).explain(&text) {
                println!("  {:<20} {:>+8.4}  {:?}", entry.word, entry.shap, entry.contribution);
            }
        }
    }

    Ok(())
}
