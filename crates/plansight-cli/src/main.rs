mod config;
mod input;
mod plan_cmds;
mod render;
#[cfg(test)]
mod test_util;

use clap::{Parser, Subcommand};

use plansight_core::{Dialect, Domain};

use config::{CliOverrides, OutputFormat, PlansightConfig};

#[derive(Parser)]
#[command(name = "plansight", about = "Parse and analyze AI planner output")]
struct Cli {
    /// Planning dialect: classical, temporal, numerical or pddl_plus
    /// (overrides PLANSIGHT_DIALECT env var)
    #[arg(long, global = true)]
    dialect: Option<Dialect>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default plansight config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Parse a plan into actions, entities, metrics and a domain
    Parse {
        /// Plan file to read (`-` for stdin)
        file: String,
        /// Fixed domain: robot, elevator, logistics (skips detection)
        #[arg(long)]
        domain: Option<Domain>,
        /// Output format: json or summary
        #[arg(long)]
        format: Option<OutputFormat>,
        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
        /// Output file path (defaults to stdout)
        #[arg(long)]
        output: Option<String>,
    },
    /// Report duration, cost and parallelism of a plan
    Analyze {
        /// Plan file to read (`-` for stdin)
        file: String,
    },
    /// Re-express a plan's actions under another dialect
    Convert {
        /// Plan file to read (`-` for stdin)
        file: String,
        /// Target dialect
        #[arg(long)]
        to: Dialect,
        /// Source dialect (defaults to the resolved dialect)
        #[arg(long)]
        from: Option<Dialect>,
        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Print the detected domain of a plan
    Domain {
        /// Plan file to read (`-` for stdin)
        file: String,
    },
}

/// Execute the `plansight init` command: write config file.
fn cmd_init(force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::default_config_file();
    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    if let Some(dialect) = &cfg.parse.dialect {
        println!("  parse.dialect = {dialect}");
    }
    if let Some(format) = &cfg.output.format {
        println!("  output.format = {format}");
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut overrides = CliOverrides {
        dialect: cli.dialect,
        ..CliOverrides::default()
    };

    match cli.command {
        Commands::Init { force } => {
            cmd_init(force)?;
        }
        Commands::Parse {
            file,
            domain,
            format,
            compact,
            output,
        } => {
            overrides.domain = domain;
            overrides.format = format;
            overrides.compact = compact;
            let resolved = PlansightConfig::resolve(&overrides)?;
            plan_cmds::run_parse(&file, &resolved, output.as_deref())?;
        }
        Commands::Analyze { file } => {
            let resolved = PlansightConfig::resolve(&overrides)?;
            plan_cmds::run_analyze(&file, &resolved)?;
        }
        Commands::Convert {
            file,
            to,
            from,
            compact,
        } => {
            overrides.compact = compact;
            let resolved = PlansightConfig::resolve(&overrides)?;
            plan_cmds::run_convert(&file, &resolved, from, to)?;
        }
        Commands::Domain { file } => {
            let resolved = PlansightConfig::resolve(&overrides)?;
            plan_cmds::run_domain(&file, &resolved)?;
        }
    }

    Ok(())
}
