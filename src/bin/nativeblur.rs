use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "nativeblur", version)]
struct Cli {
    /// Log verbosity written to stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Blur a single image and write it as a PNG.
    Blur(BlurArgs),
    /// Run a blur job described by a JSON file.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct BlurArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Blur radius in pixels (0..=25).
    #[arg(long, default_value_t = nativeblur::DEFAULT_RADIUS)]
    radius: u32,

    /// Bitmap layout used for the blur.
    #[arg(long, value_enum, default_value_t = FormatChoice::Auto)]
    format: FormatChoice,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Job JSON file.
    #[arg(long)]
    job: PathBuf,

    /// Override the job's radius.
    #[arg(long)]
    radius: Option<u32>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Auto,
    A8,
    Rgba8888,
}

impl From<FormatChoice> for nativeblur::ImportFormat {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Auto => Self::Auto,
            FormatChoice::A8 => Self::A8,
            FormatChoice::Rgba8888 => Self::Rgba8888,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Blur(args) => cmd_blur(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn cmd_blur(args: BlurArgs) -> anyhow::Result<()> {
    let mut job = nativeblur::BlurJob::new(args.in_path, args.out);
    job.radius = args.radius;
    job.format = args.format.into();
    execute(&job)
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let mut job = nativeblur::BlurJob::load(&args.job)?;
    if let Some(radius) = args.radius {
        job.radius = radius;
    }
    execute(&job)
}

fn execute(job: &nativeblur::BlurJob) -> anyhow::Result<()> {
    job.validate()?;

    let img = image::open(&job.input)
        .with_context(|| format!("read image '{}'", job.input.display()))?;
    let blurred = nativeblur::blur_image(&img, job.radius, job.format)?;

    ensure_parent_dir(&job.output)?;
    blurred
        .save_with_format(&job.output, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", job.output.display()))?;

    eprintln!("wrote {}", job.output.display());
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
