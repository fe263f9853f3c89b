
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use shapetrace::catalog::{Catalog, CatalogError, ShapeEntry};
use shapetrace::config::{ConfigError, TraceConfig};
use shapetrace::geometry::Point;
use shapetrace::layout::{self, CanvasSize};
use shapetrace::raster::{RasterError, Stroke, StrokeLayer};
use shapetrace::session::{SessionStats, TraceSession};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("stroke {0} has no points")]
    EmptyStroke(usize),
    #[error("stroke {index}: {source}")]
    InvalidStroke { index: usize, source: RasterError },
}

#[derive(Parser, Debug)]
#[command(name = "shapetrace", about = "Trace-the-outline exercise engine")]
struct Cli {
    /// Shape catalog JSON file.
    #[arg(long, env = "SHAPETRACE_CATALOG", default_value = "demos/shapes.json")]
    catalog: PathBuf,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog shapes with their bounds.
    Shapes,
    /// Classify one canvas point against a shape.
    Classify(ClassifyArgs),
    /// Fit the canvas to a container and show the rescaled shape.
    Scale(ScaleArgs),
    /// Replay recorded strokes and report session stats.
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
struct ShapeSelect {
    /// Shape id; defaults to the first catalog entry.
    #[arg(long, conflicts_with = "random")]
    shape: Option<String>,

    /// Pick a random catalog shape.
    #[arg(long)]
    random: bool,
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    #[command(flatten)]
    select: ShapeSelect,

    /// Container width in pixels; omit for the reference canvas.
    #[arg(long)]
    container_width: Option<f64>,

    #[arg(allow_negative_numbers = true)]
    x: f64,

    #[arg(allow_negative_numbers = true)]
    y: f64,
}

#[derive(Args, Debug)]
struct ScaleArgs {
    #[command(flatten)]
    select: ShapeSelect,

    #[arg(long)]
    container_width: f64,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[command(flatten)]
    select: ShapeSelect,

    /// Container width in pixels; omit for the reference canvas.
    #[arg(long)]
    container_width: Option<f64>,

    /// Recording file, or `-` for stdin.
    #[arg(long, default_value = "-")]
    input: String,
}

/// Replay input: `{"strokes": [{"brush_size": 12, "points": [[x, y], ...]}]}`
/// in canvas pixels.
#[derive(Debug, Deserialize)]
struct Recording {
    strokes: Vec<RecordedStroke>,
}

#[derive(Debug, Deserialize)]
struct RecordedStroke {
    brush_size: f64,
    points: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize)]
struct StrokeReport {
    index: usize,
    points: usize,
    coverage_percent: f64,
}

#[derive(Debug, Serialize)]
struct ReplayReport {
    shape: String,
    canvas: CanvasSize,
    strokes: Vec<StrokeReport>,
    coverage_percent: f64,
    stats: SessionStats,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = TraceConfig::from_env()?;
    let mut catalog = Catalog::load(&cli.catalog)?;

    match cli.command {
        Command::Shapes => run_shapes(&catalog),
        Command::Classify(args) => run_classify(&mut catalog, &config, args),
        Command::Scale(args) => run_scale(&mut catalog, &config, args),
        Command::Replay(args) => run_replay(&mut catalog, &config, args),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn run_shapes(catalog: &Catalog) -> Result<(), CliError> {
    let rows: Vec<Value> = catalog
        .entries()
        .iter()
        .map(|entry| {
            let b = entry.shape.bounds();
            json!({
                "id": entry.id,
                "name": entry.name,
                "type": entry.shape.kind(),
                "bounds": { "left": b.left, "top": b.top, "right": b.right, "bottom": b.bottom },
            })
        })
        .collect();
    print_json(&rows)
}

fn run_classify(catalog: &mut Catalog, config: &TraceConfig, args: ClassifyArgs) -> Result<(), CliError> {
    let entry = select_shape(catalog, &args.select)?;
    let canvas = canvas_for(args.container_width, config);
    let session = TraceSession::new(entry.shape, canvas, *config);

    let p = Point::new(args.x, args.y);
    let distance_px = session.shape().distance_to_outline(p);
    print_json(&json!({
        "shape": entry.id,
        "canvas": canvas,
        "point": p,
        "zone": session.classify(p),
        "inside": session.shape().contains(p),
        "distance_px": distance_px,
        "distance_mm": config.zone.px_to_mm(distance_px),
    }))
}

fn run_scale(catalog: &mut Catalog, config: &TraceConfig, args: ScaleArgs) -> Result<(), CliError> {
    let entry = select_shape(catalog, &args.select)?;
    let canvas = layout::fit_canvas(args.container_width, &config.canvas);
    let (sx, sy) = layout::scale_factors(canvas, &config.canvas);
    let scaled = entry.shape.scaled(sx, sy);
    print_json(&json!({
        "shape": entry.id,
        "canvas": canvas,
        "scale": [sx, sy],
        "base": entry.shape,
        "scaled": scaled,
    }))
}

fn run_replay(catalog: &mut Catalog, config: &TraceConfig, args: ReplayArgs) -> Result<(), CliError> {
    let entry = select_shape(catalog, &args.select)?;
    let recording: Recording = serde_json::from_str(&read_input(&args.input)?)?;
    let canvas = canvas_for(args.container_width, config);

    let mut session = TraceSession::new(entry.shape, canvas, *config);
    let mut layer = StrokeLayer::new(canvas.width, canvas.height);
    let mut reports = Vec::with_capacity(recording.strokes.len());

    for (index, recorded) in recording.strokes.into_iter().enumerate() {
        let mut points = recorded.points.into_iter().map(|[x, y]| Point::new(x, y));
        let Some(first) = points.next() else {
            return Err(CliError::EmptyStroke(index));
        };
        let mut stroke =
            Stroke::new(recorded.brush_size).map_err(|source| CliError::InvalidStroke { index, source })?;
        stroke.push(first);
        session.pointer_down(first);
        for p in points {
            stroke.push(p);
            session.pointer_move(p);
        }
        let count = stroke.points().len();
        layer.push(stroke);
        let coverage = session.pointer_up(&layer).unwrap_or_default();
        reports.push(StrokeReport { index, points: count, coverage_percent: coverage.percent_tenths() });
    }

    tracing::info!(shape = %entry.id, strokes = reports.len(), "replay finished");
    print_json(&ReplayReport {
        shape: entry.id,
        canvas,
        strokes: reports,
        coverage_percent: session.coverage().percent_tenths(),
        stats: session.stats(),
    })
}

fn select_shape(catalog: &mut Catalog, select: &ShapeSelect) -> Result<ShapeEntry, CliError> {
    let entry = if select.random {
        catalog.select_random(&mut rand::rng())
    } else if let Some(id) = &select.shape {
        catalog.select_id(id)?
    } else {
        catalog.current()
    };
    Ok(entry.clone())
}

fn canvas_for(container_width: Option<f64>, config: &TraceConfig) -> CanvasSize {
    match container_width {
        Some(width) => layout::fit_canvas(width, &config.canvas),
        None => config.canvas.reference(),
    }
}

fn read_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read_to_string(input)?)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
