//! The plan-reading commands: `parse`, `analyze`, `convert` and `domain`.

use std::io::Write;

use anyhow::{Context, Result, bail};
use tracing::debug;

use plansight_core::{Dialect, ParseOptions, PlanParseResult, convert_actions, parse_plan};

use crate::config::{OutputFormat, PlansightConfig};
use crate::input::read_plan;
use crate::render;

fn options(config: &PlansightConfig) -> ParseOptions {
    ParseOptions {
        dialect: config.dialect,
        domain: config.domain,
    }
}

/// A result that carries an error becomes a command failure.
fn ensure_parsed(result: &PlanParseResult) -> Result<()> {
    match &result.error {
        Some(error) => bail!("plan could not be parsed: {error}"),
        None => Ok(()),
    }
}

/// Render a parse result in the configured output format.
pub fn render_parse(result: &PlanParseResult, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = render::to_json(result, pretty)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Summary => {
            let mut text = render::summary(result);
            if result.is_ok() {
                text.push('\n');
                text.push_str(&render::analysis(&result.analysis()));
            }
            Ok(text)
        }
    }
}

/// Execute `plansight parse`.
///
/// The result is written even when it carries an error, so JSON consumers
/// see the `error` field; the command still fails afterwards.
pub fn run_parse(source: &str, config: &PlansightConfig, output: Option<&str>) -> Result<()> {
    let content = read_plan(source)?;
    let result = parse_plan(&content, &options(config));
    let rendered = render_parse(&result, config.format, config.pretty)?;

    let mut writer: Box<dyn Write> = if let Some(path) = output {
        Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("cannot create output file: {path}"))?,
        )
    } else {
        Box::new(std::io::stdout().lock())
    };
    writer
        .write_all(rendered.as_bytes())
        .context("failed to write parse result")?;
    drop(writer);

    if let Some(path) = output {
        println!("Wrote {} actions to {path}", result.actions.len());
    }

    ensure_parsed(&result)
}

/// Execute `plansight analyze`.
pub fn run_analyze(source: &str, config: &PlansightConfig) -> Result<()> {
    let content = read_plan(source)?;
    let result = parse_plan(&content, &options(config));
    ensure_parsed(&result)?;

    print!("{}", render::analysis(&result.analysis()));
    Ok(())
}

/// Execute `plansight convert`: parse under `from` and print the actions
/// re-expressed under `to`.
pub fn run_convert(
    source: &str,
    config: &PlansightConfig,
    from: Option<Dialect>,
    to: Dialect,
) -> Result<()> {
    let from = from.unwrap_or(config.dialect);
    let content = read_plan(source)?;
    let result = parse_plan(
        &content,
        &ParseOptions {
            dialect: from,
            domain: config.domain,
        },
    );
    ensure_parsed(&result)?;

    let converted = convert_actions(&result.actions, from, to);
    debug!(%from, %to, actions = converted.len(), "converted plan");
    println!("{}", render::to_json(&converted, config.pretty)?);
    Ok(())
}

/// Execute `plansight domain`. Detection always runs, whatever domain is
/// configured.
pub fn run_domain(source: &str, config: &PlansightConfig) -> Result<()> {
    let content = read_plan(source)?;
    let result = parse_plan(&content, &ParseOptions::new(config.dialect));
    ensure_parsed(&result)?;

    println!("{}", result.domain);
    Ok(())
}
