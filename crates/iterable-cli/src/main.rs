//! iterable CLI: evaluate series and time sequence pipelines.

mod timing;

use clap::{Parser, Subcommand};
use iterable_algo::{count, sum};
use iterable_core::{IterConfig, Iterable};
use iterable_numeric::{epsilon, exp, factorial, power};
use iterable_ops::{fold, iota, take, IterableExt};

use crate::timing::time;

#[derive(Parser)]
#[command(name = "iterable")]
#[command(about = "Lazy sequences: series evaluation and pipeline timing", long_about = None)]
struct Cli {
    /// Series truncation threshold (overrides ITERABLE_SERIES_TOLERANCE)
    #[arg(long, global = true)]
    tolerance: Option<f64>,

    /// Series term budget (overrides ITERABLE_SERIES_MAX_TERMS)
    #[arg(long, global = true)]
    max_terms: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate e^x by its truncated Taylor series
    Exp {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
    },

    /// Print the first partial sums of the e^x series
    Terms {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,

        /// Number of series terms to accumulate
        #[arg(long, default_value = "10")]
        count: usize,
    },

    /// Time a filter/map/sum pipeline
    Time {
        /// Repetitions
        #[arg(long, default_value = "1000")]
        n: usize,

        /// Elements pulled per repetition
        #[arg(long, default_value = "10000")]
        len: usize,
    },
}

fn main() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match build_config(cli.tolerance, cli.max_terms) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Exp { x } => run_exp(x, &config),
        Commands::Terms { x, count } => run_terms(x, count),
        Commands::Time { n, len } => run_time(n, len),
    }
}

fn build_config(
    tolerance: Option<f64>,
    max_terms: Option<usize>,
) -> Result<IterConfig, Box<dyn std::error::Error>> {
    let mut config = IterConfig::from_env();
    if let Some(t) = tolerance {
        config.series_tolerance = t;
    }
    if let Some(m) = max_terms {
        config.series_max_terms = m;
    }
    config.validate()?;
    tracing::debug!(?config, "effective config");
    Ok(config)
}

fn run_exp(x: f64, config: &IterConfig) {
    let value = exp(x, config);
    let terms = count(epsilon(power(x) / factorial::<f64>(), config));
    println!("exp({x}) ~ {value:.17}");
    println!("std      = {:.17}", x.exp());
    println!("terms    = {terms}");
    println!("error    = {:e}", (value - x.exp()).abs());
}

fn run_terms(x: f64, n: usize) {
    let partial = fold(|t, u| t + u, take(n, power(x) / factorial::<f64>()), 0.0);
    for (k, s) in partial.iter().enumerate() {
        println!("{k:>4}  {s:.17}");
    }
}

fn run_time(n: usize, len: usize) {
    let elapsed = time(
        || {
            let s = iota(0u64)
                .filter(|i| i % 3 != 0)
                .apply(|i| i * i)
                .take(len);
            let total: u64 = sum(s);
            std::hint::black_box(total);
        },
        n,
    );
    let per = elapsed.as_secs_f64() / n.max(1) as f64;
    println!(
        "{n} x {len} elements: {:.3} ms total, {:.3} us per run",
        elapsed.as_secs_f64() * 1e3,
        per * 1e6
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_exp_with_negative_x() {
        let cli = Cli::try_parse_from(["iterable", "exp", "--x", "-1.5"]).unwrap();
        match cli.command {
            Commands::Exp { x } => assert_eq!(x, -1.5),
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn test_cli_global_overrides() {
        let cli = Cli::try_parse_from([
            "iterable",
            "terms",
            "--x",
            "1",
            "--tolerance",
            "1e-12",
            "--max-terms",
            "8",
        ])
        .unwrap();
        assert_eq!(cli.tolerance, Some(1e-12));
        assert_eq!(cli.max_terms, Some(8));
        match cli.command {
            Commands::Terms { count, .. } => assert_eq!(count, 10),
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn test_build_config_applies_and_validates_overrides() {
        let cfg = build_config(Some(1e-9), Some(16)).unwrap();
        assert_eq!(cfg.series_tolerance, 1e-9);
        assert_eq!(cfg.series_max_terms, 16);

        assert!(build_config(Some(-1.0), None).is_err());
        assert!(build_config(None, Some(0)).is_err());
    }

    #[test]
    fn test_term_budget_caps_series() {
        let cfg = build_config(None, Some(5)).unwrap();
        let terms = count(epsilon(power(1.0) / factorial::<f64>(), &cfg));
        assert_eq!(terms, 5);
    }
}
