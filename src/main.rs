use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use camo_detect::error::CamoError;
use camo_detect::input::manifest::{BatchManifest, ManifestEntry};
use camo_detect::input::{FrameSource, PngPairSource, save_buffer};
use camo_detect::logging::init_logging;
use camo_detect::model::config::{RatingConfig, RatingMode, Sensitivity};
use camo_detect::observe::TracingObserver;
use camo_detect::pipeline::stage1_viewport::ViewportPoint;
use camo_detect::pipeline::stage5_preview::averaged_preview;
use camo_detect::pipeline::{FrameEvaluation, FrameOutcome, evaluate_frame};
use camo_detect::report::json::{render_batch_json, render_report_json};
use camo_detect::report::text::{render_batch_text, render_report_text};
use camo_detect::report::{BatchReport, RatingReport};

#[derive(Debug, Parser)]
#[command(name = "camo-detect", version, about = "Rate how well a target blends into its background")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rate one general/target render pair.
    Rate(RateArgs),
    /// Rate every pair listed in a JSON manifest.
    Batch(BatchArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Luminance,
    Hsv,
}

impl From<ModeArg> for RatingMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Luminance => RatingMode::Luminance,
            ModeArg::Hsv => RatingMode::Hsv,
        }
    }
}

#[derive(Debug, Clone, Args)]
struct RatingArgs {
    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// Detection threshold in [0.01, 0.9].
    #[arg(long)]
    sensitivity: Option<f32>,
    /// Crop half extent as a fraction of render width, [0.01, 0.5].
    #[arg(long)]
    bounds: Option<f32>,
    /// Extra crop margin, [0.01, 0.05].
    #[arg(long)]
    margin: Option<f32>,
    /// Rate the whole render instead of a crop around the target.
    #[arg(long)]
    complete_view: bool,
}

#[derive(Debug, Clone, Args)]
struct RateArgs {
    #[arg(long)]
    general: PathBuf,
    #[arg(long)]
    target: PathBuf,
    /// Projected target position as "x,y" in viewport coordinates.
    #[arg(long, value_parser = parse_viewport)]
    viewport: Option<ViewportPoint>,
    /// Write the averaged-vision image here.
    #[arg(long)]
    preview: Option<PathBuf>,
    /// Write the JSON report here.
    #[arg(long)]
    json: Option<PathBuf>,
    #[command(flatten)]
    rating: RatingArgs,
}

#[derive(Debug, Clone, Args)]
struct BatchArgs {
    #[arg(long)]
    manifest: PathBuf,
    #[arg(long)]
    workers: Option<NonZeroUsize>,
    #[arg(long)]
    json: Option<PathBuf>,
    #[command(flatten)]
    rating: RatingArgs,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(cli) {
        tracing::error!("{err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CamoError> {
    match cli.command {
        Command::Rate(args) => run_rate(&args),
        Command::Batch(args) => run_batch(&args),
    }
}

fn run_rate(args: &RateArgs) -> Result<(), CamoError> {
    let config = resolve_config(&args.rating)?;
    tracing::info!(
        mode = config.mode.as_str(),
        sensitivity = config.sensitivity.value(),
        "rating render pair"
    );

    let mut source = PngPairSource::new(args.general.clone(), args.target.clone())
        .with_viewport(args.viewport);
    let pair = source.frames()?;
    let eval = evaluate_frame(&pair, &config, &TracingObserver)?;
    log_outcome(None, &eval);

    if let Some(path) = &args.preview {
        write_preview(&eval, path)?;
    }

    let report = RatingReport::from_evaluation(None, &eval, &config);
    print!("{}", render_report_text(&report));
    if let Some(path) = &args.json {
        write_text(path, &render_report_json(&report)?)?;
    }
    Ok(())
}

fn run_batch(args: &BatchArgs) -> Result<(), CamoError> {
    let config = resolve_config(&args.rating)?;
    let manifest = BatchManifest::load(&args.manifest)?;
    let workers = args
        .workers
        .or_else(|| std::thread::available_parallelism().ok())
        .map_or(1, NonZeroUsize::get);
    tracing::info!(
        frames = manifest.frames.len(),
        workers,
        mode = config.mode.as_str(),
        "rating batch"
    );

    let reports = rate_entries(&manifest.frames, &config, workers);
    let batch = BatchReport::new(reports);
    print!("{}", render_batch_text(&batch));
    if let Some(path) = &args.json {
        write_text(path, &render_batch_json(&batch)?)?;
    }
    Ok(())
}

/// Each worker rates a contiguous slice; output keeps manifest order.
fn rate_entries(entries: &[ManifestEntry], config: &RatingConfig, workers: usize) -> Vec<RatingReport> {
    if entries.is_empty() {
        return Vec::new();
    }
    let chunk_size = entries.len().div_ceil(workers.max(1));
    std::thread::scope(|scope| {
        let handles = entries
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|entry| rate_entry(entry, config))
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();

        let mut out = Vec::with_capacity(entries.len());
        for (handle, chunk) in handles.into_iter().zip(entries.chunks(chunk_size)) {
            match handle.join() {
                Ok(reports) => out.extend(reports),
                Err(_) => {
                    for entry in chunk {
                        out.push(RatingReport::failed(
                            Some(entry.name.clone()),
                            config,
                            "worker panicked".to_string(),
                        ));
                    }
                }
            }
        }
        out
    })
}

fn rate_entry(entry: &ManifestEntry, config: &RatingConfig) -> RatingReport {
    let name = Some(entry.name.clone());
    let result = entry
        .source()
        .frames()
        .and_then(|pair| evaluate_frame(&pair, config, &TracingObserver));
    match result {
        Ok(eval) => {
            log_outcome(Some(&entry.name), &eval);
            RatingReport::from_evaluation(name, &eval, config)
        }
        Err(err) => {
            tracing::warn!(frame = %entry.name, "skipping frame: {err}");
            RatingReport::failed(name, config, err.to_string())
        }
    }
}

fn resolve_config(args: &RatingArgs) -> Result<RatingConfig, CamoError> {
    let mut config = match &args.config {
        Some(path) => RatingConfig::load(path)?,
        None => RatingConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }
    if let Some(value) = args.sensitivity {
        config.sensitivity = Sensitivity::new(value)?;
    }
    if let Some(bounds) = args.bounds {
        config.crop.bounds = bounds;
    }
    if let Some(margin) = args.margin {
        config.crop.margin = margin;
    }
    if args.complete_view {
        config.crop.complete_view = true;
    }
    config.validate()?;
    Ok(config)
}

fn parse_viewport(raw: &str) -> Result<ViewportPoint, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| "expected \"x,y\"".to_string())?;
    let x = x
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("invalid x: {e}"))?;
    let y = y
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("invalid y: {e}"))?;
    Ok(ViewportPoint::new(x, y))
}

fn write_preview(eval: &FrameEvaluation, path: &Path) -> Result<(), CamoError> {
    match (&eval.outcome, &eval.sampled) {
        (FrameOutcome::Rated { rating, .. }, Some((general, target))) => {
            let preview = averaged_preview(general, target, rating)?;
            save_buffer(&preview, path)?;
            tracing::info!(path = %path.display(), "wrote averaged preview");
        }
        _ => tracing::warn!("no rating available, preview not written"),
    }
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> Result<(), CamoError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CamoError::io(parent, e))?;
        }
    }
    std::fs::write(path, contents).map_err(|e| CamoError::io(path, e))
}

fn log_outcome(name: Option<&str>, eval: &FrameEvaluation) {
    let frame = name.unwrap_or("-");
    match &eval.outcome {
        FrameOutcome::OutOfView => tracing::info!(frame, "target out of view"),
        FrameOutcome::Undetermined { group } => {
            tracing::warn!(frame, %group, "rating undetermined")
        }
        FrameOutcome::Rated { rating, detected } => {
            tracing::info!(
                frame,
                rating = rating.rating,
                label = rating.label.as_str(),
                detected,
                "frame rated"
            );
            if *detected {
                tracing::info!(frame, "target detected");
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
