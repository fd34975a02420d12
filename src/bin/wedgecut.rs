use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "wedgecut", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single still as a PNG.
    Frame(FrameArgs),
    /// Record a demo script as MP4 (requires `ffmpeg` on PATH) or a PNG sequence.
    Render(RenderArgs),
    /// Record the default run: one press of the cut button.
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// pizza, galette or tart.
    #[arg(long, default_value = "pizza")]
    style: wedgecut::Style,

    /// Number of slices (1-24).
    #[arg(long, default_value_t = 8)]
    slices: u32,

    /// Canvas edge in logical pixels.
    #[arg(long, default_value_t = 600.0)]
    size: f64,

    /// Device pixel ratio.
    #[arg(long, default_value_t = 1.0)]
    dpr: f64,

    /// Seed for textures and crumbs (random when omitted).
    #[arg(long)]
    seed: Option<u64>,
}

impl SceneArgs {
    fn config(&self) -> anyhow::Result<wedgecut::DemoConfig> {
        let cfg = wedgecut::DemoConfig {
            size: self.size,
            dpr: self.dpr,
            style: self.style,
            slices: wedgecut::SliceCount::new(self.slices)?,
            seed: self.seed,
            ..wedgecut::DemoConfig::default()
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output MP4 path.
    #[arg(long, conflicts_with = "png_dir", required_unless_present = "png_dir")]
    out: Option<PathBuf>,

    /// Write numbered PNG frames into this directory instead of a video.
    #[arg(long)]
    png_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Show the dish after a completed cut.
    #[arg(long)]
    cut: bool,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Input demo script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct DemoArgs {
    #[command(flatten)]
    scene: SceneArgs,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = args.scene.config()?;
    let frame = wedgecut::render_still(&cfg, args.cut)?;
    wedgecut::write_png(&args.out, &frame)
        .with_context(|| format!("write frame '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let script = wedgecut::DemoScript::from_path(&args.in_path)
        .with_context(|| format!("load script '{}'", args.in_path.display()))?;
    record_to(&script, &args.output)
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let script = wedgecut::DemoScript::cut_once(args.scene.config()?);
    record_to(&script, &args.output)
}

fn record_to(script: &wedgecut::DemoScript, output: &OutputArgs) -> anyhow::Result<()> {
    let (stats, target) = match (&output.png_dir, &output.out) {
        (Some(dir), _) => {
            let mut sink = wedgecut::PngSequenceSink::new(dir);
            (wedgecut::record(script, &mut sink)?, dir)
        }
        (None, Some(out)) => {
            let opts = wedgecut::FfmpegSinkOpts::new(out, script.config.background);
            let mut sink = wedgecut::FfmpegSink::new(opts);
            (wedgecut::record(script, &mut sink)?, out)
        }
        (None, None) => anyhow::bail!("either --out or --png-dir is required"),
    };
    eprintln!(
        "wrote {} ({} frames, {} ms, {} crumbs)",
        target.display(),
        stats.frames,
        stats.duration_ms,
        stats.crumbs_spawned
    );
    Ok(())
}
