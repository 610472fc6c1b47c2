use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::PathBuf;

use ipv6planner::input::{self, PlanRequest};
use ipv6planner::plan::build_plan;
use ipv6planner::prefix::NetworkPrefix;
use ipv6planner::render::{self, OutputFormat};

/// Hierarchical IPv6 address plan generator for multi-POP deployments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base IPv6 subnet in CIDR notation (e.g. 3fff::/20)
    #[arg(short, long, default_value = input::DEFAULT_SUBNET)]
    subnet: String,

    /// Number of POPs to allocate
    #[arg(short = 'n', long, default_value_t = input::DEFAULT_POP_COUNT)]
    pops: u32,

    /// Preferred subnet size per POP
    #[arg(short, long, default_value_t = input::DEFAULT_PREFERRED_SIZE)]
    preferred_size: u8,

    /// Comma-separated list of subnet levels (e.g. 44,48,64)
    #[arg(short, long, default_value = input::DEFAULT_LEVELS)]
    levels: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Prompt for all parameters interactively instead of using flags
    #[arg(short, long)]
    interactive: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let request = if args.interactive {
        let stdin = io::stdin();
        input::interactive_input(stdin.lock(), io::stdout())?
    } else {
        let base: NetworkPrefix = args
            .subnet
            .parse()
            .wrap_err_with(|| format!("Failed to parse base subnet '{}'", args.subnet))?;
        PlanRequest {
            base,
            pop_count: args.pops,
            preferred_size: args.preferred_size,
            levels: input::parse_levels(&args.levels)?,
        }
    };

    info!(
        "Generating plan for {} with {} POPs at /{}",
        request.base, request.pop_count, request.preferred_size
    );

    let (plan, warnings) = build_plan(
        request.base,
        request.pop_count,
        request.preferred_size,
        &request.levels,
    )?;

    for warning in &warnings {
        warn!("{}", warning);
    }

    let report = render::render(&plan, args.format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &report)
                .wrap_err_with(|| format!("Failed to write report to '{}'", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => print!("{}", report),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let args = Args::parse_from(["ipv6planner"]);

        assert_eq!(args.subnet, "3fff::/20");
        assert_eq!(args.pops, 5);
        assert_eq!(args.preferred_size, 36);
        assert_eq!(args.levels, "44,48,64");
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.interactive);
        assert_eq!(args.output, None);
    }

    #[test]
    fn test_cli_custom_flags() {
        let args = Args::parse_from([
            "ipv6planner",
            "--subnet",
            "2001:db8::/32",
            "--pops",
            "10",
            "--preferred-size",
            "40",
            "--levels",
            "48,52,56,64",
            "--format",
            "json",
        ]);

        assert_eq!(args.subnet, "2001:db8::/32");
        assert_eq!(args.pops, 10);
        assert_eq!(args.preferred_size, 40);
        assert_eq!(args.levels, "48,52,56,64");
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_short_flags() {
        let args = Args::parse_from([
            "ipv6planner", "-s", "3fff::/20", "-n", "3", "-p", "36", "-l", "44,64", "-f", "html",
            "-i",
        ]);

        assert_eq!(args.pops, 3);
        assert_eq!(args.format, OutputFormat::Html);
        assert!(args.interactive);
    }
}
