use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "signscale", version)]
struct Cli {
    /// Log pipeline stages to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute pixels per inch from two reference points.
    Calibrate(CalibrateArgs),
    /// Run a design job: render the sign and composite it onto the photo.
    Run(RunArgs),
    /// List the configured sign fonts.
    Fonts(FontArgs),
}

#[derive(Args, Debug)]
struct FontArgs {
    /// Directory holding the Liberation font files.
    #[arg(long, env = signscale::FONT_DIR_ENV, default_value = signscale::DEFAULT_FONT_DIR)]
    font_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct CalibrateArgs {
    /// First reference point as `X,Y` pixels.
    #[arg(long, value_parser = parse_point)]
    p1: signscale::Point,

    /// Second reference point as `X,Y` pixels.
    #[arg(long, value_parser = parse_point)]
    p2: signscale::Point,

    /// Real-world distance between the points, in inches.
    #[arg(long, default_value_t = 80.0)]
    length: f64,

    /// Width of the displayed image the points were picked on (drawn-line mode).
    #[arg(long, requires = "original_width")]
    displayed_width: Option<f64>,

    /// Width of the original photo in pixels (drawn-line mode).
    #[arg(long, requires = "displayed_width")]
    original_width: Option<f64>,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Input design job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path for the composited photo.
    #[arg(long)]
    out: PathBuf,

    /// Output PNG path for the standalone sign graphic.
    #[arg(long)]
    sign_out: Option<PathBuf>,

    #[command(flatten)]
    fonts: FontArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        let _ = tracing_subscriber::fmt()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    }
    match cli.cmd {
        Command::Calibrate(args) => cmd_calibrate(args),
        Command::Run(args) => cmd_run(args),
        Command::Fonts(args) => cmd_fonts(args),
    }
}

fn parse_point(s: &str) -> Result<signscale::Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok(signscale::Point::new(x, y))
}

fn cmd_calibrate(args: CalibrateArgs) -> anyhow::Result<()> {
    let mut session = signscale::DesignSession::default();
    let ratio = match (args.displayed_width, args.original_width) {
        (Some(displayed_width), Some(original_width)) => session.calibrate_drawn_line(
            signscale::DrawnLine {
                start: args.p1,
                end: args.p2,
                displayed_width,
                original_width,
            },
            args.length,
        )?,
        _ => session.calibrate(signscale::ReferenceMeasurement::new(
            args.p1,
            args.p2,
            args.length,
        ))?,
    };
    println!("{}", signscale::calibration_message(ratio));
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let job = signscale::DesignJob::from_path(&args.in_path)?;
    let base_dir = args.in_path.parent().unwrap_or_else(|| Path::new("."));
    let fonts = signscale::FontTable::from_dir(&args.fonts.font_dir);

    let out = job.run(fonts, base_dir)?;
    eprintln!("{}", signscale::calibration_message(out.ratio));
    eprintln!("{}", out.sign.caption);

    if let Some(sign_out) = &args.sign_out {
        write_png(sign_out, &out.sign.to_png()?)?;
    }
    write_png(&args.out, &out.composite.to_png()?)?;
    Ok(())
}

fn cmd_fonts(args: FontArgs) -> anyhow::Result<()> {
    let table = signscale::FontTable::from_dir(&args.font_dir);
    for choice in signscale::FontChoice::ALL {
        let path = table.path(choice);
        let status = if path.is_file() { "ok" } else { "missing" };
        println!(
            "{:<6} {:<32} {} ({status})",
            choice.name(),
            choice.label(),
            path.display()
        );
    }
    Ok(())
}

fn write_png(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
