use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

use rtxloop::{
    Algorithm, ConfigField, Dims, FrameGenerator, FrameSink as _, GpuConfig, SessionMode,
};

#[derive(Parser, Debug)]
#[command(name = "rtxloop", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a looping video (requires `ffmpeg` on PATH).
    Render(OutputArgs),
    /// Write alternating colour/grayscale frames to a single `<out>.temp.png`.
    Preview(OutputArgs),
    /// Print the configuration fields, their descriptions and constraints.
    Fields,
    /// Normalize a warp location list against the given dimensions and print it.
    Warp(WarpArgs),
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Source image.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output path without extension.
    #[arg(long)]
    out: Option<String>,

    /// JSON configuration; command-line options override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output width in pixels.
    #[arg(long, allow_negative_numbers = true)]
    width: Option<i32>,

    /// Output height in pixels.
    #[arg(long, allow_negative_numbers = true)]
    height: Option<i32>,

    /// Frames per second.
    #[arg(long, allow_negative_numbers = true)]
    fps: Option<i32>,

    /// Seconds per loop.
    #[arg(long, allow_negative_numbers = true)]
    length: Option<f64>,

    /// Number of loops.
    #[arg(long, allow_negative_numbers = true)]
    loops: Option<i32>,

    /// Per-frame transform.
    #[arg(long, value_enum)]
    algorithm: Option<AlgorithmChoice>,

    /// Warp locations as `x,y;x,y;...`.
    #[arg(long, allow_hyphen_values = true)]
    warp: Option<String>,
}

#[derive(Args, Debug)]
struct WarpArgs {
    /// Frame width in pixels.
    #[arg(long, default_value_t = 480)]
    width: i32,

    /// Frame height in pixels.
    #[arg(long, default_value_t = 480)]
    height: i32,

    /// Warp locations as `x,y;x,y;...`. Omit to print the default anchors.
    #[arg(long, allow_hyphen_values = true)]
    warp: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgorithmChoice {
    CorgiLegacy,
    BrightnessCompensate,
    CorgiHsv,
    BlendS,
}

impl From<AlgorithmChoice> for Algorithm {
    fn from(c: AlgorithmChoice) -> Self {
        match c {
            AlgorithmChoice::CorgiLegacy => Algorithm::CorgiLegacy,
            AlgorithmChoice::BrightnessCompensate => Algorithm::BrightnessCompensate,
            AlgorithmChoice::CorgiHsv => Algorithm::CorgiHsv,
            AlgorithmChoice::BlendS => Algorithm::BlendS,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args, SessionMode::Video),
        Command::Preview(args) => cmd_render(args, SessionMode::Snapshot),
        Command::Fields => cmd_fields(),
        Command::Warp(args) => cmd_warp(args),
    }
}

fn build_config(args: &OutputArgs) -> anyhow::Result<GpuConfig> {
    let mut cfg = match &args.config {
        Some(path) => GpuConfig::from_json_path(path)?,
        None => GpuConfig::new(),
    };

    if let Some(p) = &args.in_path {
        cfg.input_path = p.to_string_lossy().into_owned();
    }
    if let Some(out) = &args.out {
        cfg.output.path = out.clone();
    }
    if args.width.is_some() || args.height.is_some() {
        let dims = Dims::new(
            args.width.unwrap_or(cfg.output.dims.width),
            args.height.unwrap_or(cfg.output.dims.height),
        );
        if !cfg.set_output_dims(dims) {
            anyhow::bail!(
                "{}: {}",
                ConfigField::Dims.name(),
                ConfigField::Dims.constraint().unwrap_or("invalid value")
            );
        }
    }
    if let Some(fps) = args.fps {
        cfg.output.fps = fps;
    }
    if let Some(length) = args.length {
        cfg.output.length = length;
    }
    if let Some(loops) = args.loops {
        cfg.output.loops = loops;
    }
    if let Some(algorithm) = args.algorithm {
        cfg.output.algorithm = algorithm.into();
    }
    if let Some(text) = &args.warp
        && !cfg.set_warp_locations_str(text)
    {
        anyhow::bail!("invalid warp locations \"{text}\" (expected x,y;x,y;...)");
    }

    cfg.output.validate()?;
    if cfg.validate_warp_locations() {
        tracing::info!(warp = %cfg.warp_locations_as_str(), "adjusted warp locations");
    }
    Ok(cfg)
}

fn cmd_render(args: OutputArgs, mode: SessionMode) -> anyhow::Result<()> {
    let cfg = build_config(&args)?;
    if cfg.input_path.trim().is_empty() {
        anyhow::bail!("no source image given (use --in or set input_path in --config)");
    }

    let source = rtxloop::load_source_image(Path::new(&cfg.input_path))?;
    let mut session = FrameGenerator::open(&source, &cfg, mode)
        .with_context(|| format!("open render session for '{}'", cfg.output.path))?;

    let report_every = u64::try_from(cfg.output.fps).unwrap_or(1).max(1);
    let done = session.render_all(|p| {
        if p.rendered % report_every == 0 || p.is_complete() {
            tracing::info!(rendered = p.rendered, total = p.total, "progress");
        }
    })?;

    let target = session
        .sink()
        .target()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    eprintln!(
        "wrote {target} ({} frames, warp {})",
        done.rendered + 1,
        cfg.warp_locations_as_str()
    );
    Ok(())
}

fn cmd_fields() -> anyhow::Result<()> {
    for field in ConfigField::ALL {
        println!("{}", field.name());
        println!("    {}", field.description());
        if let Some(hint) = field.constraint() {
            println!("    constraint: {hint}");
        }
    }
    println!("Algorithms");
    for a in Algorithm::ALL {
        println!("    {:<24}{}", a.key(), a.display_name());
    }
    Ok(())
}

fn cmd_warp(args: WarpArgs) -> anyhow::Result<()> {
    let mut cfg = GpuConfig::new();
    if !cfg.set_output_dims(Dims::new(args.width, args.height)) {
        anyhow::bail!("warp dimensions must be positive");
    }
    cfg.reset_warp_locations();
    if let Some(text) = &args.warp
        && !cfg.set_warp_locations_str(text)
    {
        anyhow::bail!("invalid warp locations \"{text}\" (expected x,y;x,y;...)");
    }
    cfg.validate_warp_locations();
    println!("{}", cfg.warp_locations_as_str());
    Ok(())
}
