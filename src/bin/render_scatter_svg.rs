use std::fs;
use std::io::Write as _;
use std::path::PathBuf;

use census_scatter::core::Axis;
use census_scatter::render::SvgRenderer;
use census_scatter::telemetry::init_default_tracing;
use census_scatter::{ScatterChart, ScatterConfig};

const USAGE: &str = "usage: render_scatter_svg --data <csv> [--x <poverty|age|income>] [--y <healthcare|smokes|obesity>] [--output <svg>] [--config <json>]";

#[derive(Debug)]
struct CliArgs {
    data: PathBuf,
    x: Option<String>,
    y: Option<String>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ScatterConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ScatterConfig::default(),
    };
    let settle = config.transition_duration();

    let mut chart =
        ScatterChart::new(SvgRenderer::new(), config).map_err(|err| err.to_string())?;
    let source = chart.csv_source(&args.data);
    chart.mount(&source).map_err(|err| err.to_string())?;
    if let Some(key) = &args.x {
        chart
            .click_label(Axis::X, key)
            .map_err(|err| err.to_string())?;
    }
    if let Some(key) = &args.y {
        chart
            .click_label(Axis::Y, key)
            .map_err(|err| err.to_string())?;
    }
    chart.advance(settle).map_err(|err| err.to_string())?;

    let renderer = chart.into_renderer();
    let document = renderer
        .document()
        .ok_or_else(|| "chart produced no document".to_owned())?;
    match &args.output {
        Some(path) => fs::write(path, document)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => std::io::stdout()
            .write_all(document.as_bytes())
            .map_err(|err| format!("failed to write stdout: {err}")),
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut data = None::<PathBuf>;
    let mut x = None::<String>;
    let mut y = None::<String>;
    let mut output = None::<PathBuf>;
    let mut config = None::<PathBuf>;

    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match flag.as_str() {
            "--data" => data = Some(PathBuf::from(value()?)),
            "--x" => x = Some(value()?),
            "--y" => y = Some(value()?),
            "--output" => output = Some(PathBuf::from(value()?)),
            "--config" => config = Some(PathBuf::from(value()?)),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let data = data.ok_or_else(|| format!("missing --data\n{USAGE}"))?;
    Ok(CliArgs {
        data,
        x,
        y,
        output,
        config,
    })
}
