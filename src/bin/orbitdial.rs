use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "orbitdial", version)]
struct Cli {
    /// Log at debug level regardless of `RUST_LOG`.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a single frame and print it as JSON.
    Frame(FrameArgs),
    /// Run the hub for a number of ticks and print one JSON line per tick.
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input launcher config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1080.0)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 1920.0)]
    height: f64,

    /// Directory layer paths are relative to; enables natural-size probing.
    #[arg(long)]
    assets_root: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Virtual time in milliseconds since the Unix epoch.
    #[arg(long, default_value_t = 0.0)]
    now_ms: f64,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Number of ticks to run.
    #[arg(long, default_value_t = 60)]
    ticks: u32,

    /// Real-time step between ticks, subject to the frame-time clamp.
    #[arg(long, default_value_t = 1000.0 / 60.0)]
    step_ms: f64,

    /// Virtual time of the first tick.
    #[arg(long, default_value_t = 0.0)]
    start_ms: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

struct Loaded {
    cfg: orbitdial::LauncherConfig,
    origin: orbitdial::Origin,
    natural: orbitdial::NaturalSizes,
}

fn load(input: &InputArgs) -> anyhow::Result<Loaded> {
    let cfg = read_config(&input.in_path)?;
    let natural = match &input.assets_root {
        Some(root) => orbitdial::probe_natural_sizes(&cfg, root),
        None => orbitdial::NaturalSizes::new(),
    };
    Ok(Loaded {
        cfg,
        origin: orbitdial::Origin::from_size(input.width, input.height),
        natural,
    })
}

fn read_config(path: &Path) -> anyhow::Result<orbitdial::LauncherConfig> {
    orbitdial::LauncherConfig::from_json_file(path)
        .with_context(|| format!("load launcher config '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let loaded = load(&args.input)?;
    let mut hub = orbitdial::Hub::new();
    let frame = hub.tick(&loaded.cfg, loaded.origin, args.now_ms, &loaded.natural);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &frame).context("write frame JSON")?;
    writeln!(out).context("write frame JSON")?;
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let loaded = load(&args.input)?;
    let mut hub = orbitdial::Hub::new();
    let mut time = orbitdial::FrameTime::starting_at(args.start_ms);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for i in 0..args.ticks {
        if i > 0 {
            time = time.advance(args.step_ms);
        }
        let frame = hub.tick(&loaded.cfg, loaded.origin, time.now_ms, &loaded.natural);
        serde_json::to_writer(&mut out, &frame)
            .with_context(|| format!("write tick {i} JSON"))?;
        writeln!(out).with_context(|| format!("write tick {i} JSON"))?;
    }
    Ok(())
}
