use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "choyen", version, about = "Render a two-line gradient banner")]
struct Cli {
    /// Upper (gold) line.
    line1: String,

    /// Lower (silver) line.
    line2: String,

    /// Draw the upper line with the rainbow recipe.
    #[arg(long)]
    rupper: bool,

    /// Draw the lower line with the rainbow recipe.
    #[arg(long)]
    rlower: bool,

    /// Treat a leading `$` on either line as a rainbow marker.
    #[arg(long)]
    markers: bool,

    /// Background color (`#rrggbb` or a color name).
    #[arg(long)]
    bg: Option<choyen::Rgb8>,

    /// Output image format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Jpeg)]
    format: FormatChoice,

    /// Output path; the image goes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Directory holding the two banner fonts.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Font file for the upper line.
    #[arg(long)]
    upper_font: Option<PathBuf>,

    /// Font file for the lower line.
    #[arg(long)]
    lower_font: Option<PathBuf>,

    /// JSON file with banner settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the resolved font files to stderr.
    #[arg(long)]
    dump_fonts: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Jpeg,
    Png,
}

impl From<FormatChoice> for choyen::OutputFormat {
    fn from(f: FormatChoice) -> Self {
        match f {
            FormatChoice::Jpeg => Self::Jpeg,
            FormatChoice::Png => Self::Png,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "choyen=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = match &cli.config {
        Some(path) => choyen::BannerSettings::from_json_path(path)?,
        None => choyen::BannerSettings::default(),
    };

    let fonts = load_fonts(&cli)?;
    if cli.dump_fonts {
        dump_fonts(&fonts)?;
    }

    let request = build_request(&cli)?;
    let output_scale = settings.output_scale;
    let renderer = choyen::BannerRenderer::new(fonts, settings)?;
    let banner = renderer.render(&request)?;

    match &cli.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            choyen::encode_banner(&banner, output_scale, cli.format.into(), &mut w)?;
            w.flush()
                .with_context(|| format!("write output '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = BufWriter::new(stdout.lock());
            choyen::encode_banner(&banner, output_scale, cli.format.into(), &mut w)?;
            w.flush().context("write image to stdout")?;
        }
    }
    Ok(())
}

fn build_request(cli: &Cli) -> anyhow::Result<choyen::BannerRequest> {
    let line = |raw: &str, flag: bool| -> anyhow::Result<choyen::BannerLine> {
        let mut line = if cli.markers {
            choyen::BannerLine::parse_marked(raw)?
        } else {
            choyen::BannerLine::plain(raw)
        };
        line.rainbow |= flag;
        Ok(line)
    };

    Ok(choyen::BannerRequest {
        upper: line(&cli.line1, cli.rupper)?,
        lower: line(&cli.line2, cli.rlower)?,
        background: cli.bg,
    })
}

fn load_fonts(cli: &Cli) -> anyhow::Result<choyen::FontSet> {
    let (upper, lower) = match (&cli.upper_font, &cli.lower_font) {
        (Some(u), Some(l)) => (u.clone(), l.clone()),
        (u, l) => {
            let dir = choyen::resolve_assets_dir(cli.assets.clone())?;
            let (du, dl) = choyen::FontSet::default_paths(&dir);
            (u.clone().unwrap_or(du), l.clone().unwrap_or(dl))
        }
    };
    choyen::FontSet::from_paths(&upper, &lower).with_context(|| {
        format!(
            "load banner fonts (set --assets or {})",
            choyen::ASSETS_DIR_ENV
        )
    })
}

fn dump_fonts(fonts: &choyen::FontSet) -> anyhow::Result<()> {
    let mut engine = choyen::TextLayoutEngine::new();
    eprintln!("font diagnostics:");
    for (role, font) in [("upper", &fonts.upper), ("lower", &fonts.lower)] {
        let family = engine
            .family_name(font)
            .with_context(|| format!("resolve family of '{}'", font.name()))?;
        eprintln!(
            "  {role}: file='{}' family='{family}' bytes={}",
            font.name(),
            font.bytes().len()
        );
    }
    Ok(())
}
