use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_EVAL: i32 = 3;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a single entity from --factor pairs
    Score {
        /// Model to score with
        #[arg(short, long, default_value = "simple")]
        model: String,

        /// Entity identifier used for log correlation
        #[arg(short, long, default_value = "entity")]
        entity: String,

        /// Factor as name=value; repeat for each factor
        #[arg(short = 'f', long = "factor")]
        factors: Vec<String>,
    },
    /// Score every entity in a YAML or JSON batch file
    Batch {
        /// Path to a file mapping entity ids to factor sets
        file: PathBuf,

        /// Model to score with
        #[arg(short, long, default_value = "simple")]
        model: String,
    },
    /// List registered model names
    Models,
}

#[derive(Parser, Debug)]
#[command(name = "riskcast")]
#[command(about = "Entity risk scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/riskcast/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match riskcast::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        if let Some(ref weights) = config.default_weights {
            eprintln!("Loaded {} weight overrides from config", weights.len());
        }
    }

    let evaluator = riskcast::engine::RiskEvaluator::new(config.default_weights);
    let use_colors = riskcast::output::should_use_colors();

    match cli.command {
        Commands::Score {
            model,
            entity,
            factors,
        } => {
            let factors = match riskcast::input::parse_factor_args(&factors) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Input error: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            match evaluator.evaluate(&entity, &model, &factors) {
                Ok(score) => println!("{}", riskcast::output::format_score(score)),
                Err(e) => {
                    eprintln!("Evaluation failed for '{}': {}", entity, e);
                    std::process::exit(EXIT_EVAL);
                }
            }
        }
        Commands::Batch { file, model } => {
            let entities = match riskcast::input::load_entities(&file) {
                Ok(entities) => entities,
                Err(e) => {
                    eprintln!("Input error: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            if cli.verbose {
                eprintln!("Scoring {} entities with model '{}'", entities.len(), model);
            }

            // Per-entity failures land in the table; the batch itself never fails
            let results = evaluator.evaluate_batch(&entities, &model);
            println!(
                "{}",
                riskcast::output::format_batch_table(&results, use_colors)
            );
        }
        Commands::Models => {
            for name in evaluator.registry().model_names() {
                println!("{}", name);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "riskcast=debug" } else { "riskcast=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
