//! infostep CLI - process description to infographic tool

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;

use infostep::style::{ACCENT_COLORS, BACKGROUND_COLORS};
use infostep::{
    export, BorderVariant, Color, CornerStyle, ExportFormat, ExportOptions, JsonFormat, Layout,
    ParsedDocument, RenderOptions, StyleOptions,
};

#[derive(Parser)]
#[command(name = "infostep")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Turn process descriptions into step infographics", long_about = None)]
struct Cli {
    /// Input text file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    style: StyleArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every format (SVG, Markdown, text, JSON) into a directory
    Convert {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Render an SVG infographic
    Svg {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Render a Markdown outline
    #[command(alias = "md")]
    Markdown {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include YAML frontmatter
        #[arg(short, long)]
        frontmatter: bool,
    },

    /// Render a plain text outline
    Text {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the parsed structure as JSON
    Json {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Export a single artifact file
    Export {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Artifact format
        #[arg(short, long, value_enum, default_value = "svg")]
        format: FormatArg,

        /// Output file or directory (current directory if not specified)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Background color for this export only
        #[arg(long, value_name = "COLOR")]
        export_background: Option<String>,

        /// Scale factor for PNG and JPEG output
        #[arg(long, default_value_t = infostep::export::DEFAULT_PIXEL_RATIO)]
        pixel_ratio: f32,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Show a summary of the parsed document
    Info {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// List layouts, color presets and style tokens
    Layouts,

    /// Show version information
    Version,
}

/// Layout and style flags shared by the rendering commands.
#[derive(Args, Clone)]
struct StyleArgs {
    /// Infographic layout
    #[arg(long, value_enum, env = "INFOSTEP_LAYOUT", default_value = "vertical-cards")]
    layout: LayoutArg,

    /// Accent color (hex like "#034F80" or a preset id)
    #[arg(long, env = "INFOSTEP_ACCENT", default_value = "earth")]
    accent: String,

    /// Background color (hex or a preset id)
    #[arg(long, env = "INFOSTEP_BACKGROUND", default_value = "offwhite")]
    background: String,

    /// Card corner style
    #[arg(long, value_enum, env = "INFOSTEP_CORNERS", default_value = "soft")]
    corners: CornerArg,

    /// Card border style
    #[arg(long, value_enum, env = "INFOSTEP_BORDER", default_value = "solid")]
    border: BorderArg,

    /// Canvas width in pixels
    #[arg(long, default_value = "1200")]
    width: u32,
}

impl StyleArgs {
    fn render_options(&self) -> Result<RenderOptions, Box<dyn std::error::Error>> {
        let style = StyleOptions::new()
            .with_accent(Color::resolve(&self.accent)?)
            .with_background(Color::resolve(&self.background)?)
            .with_corner(self.corners.into())
            .with_border(self.border.into());

        Ok(RenderOptions::new()
            .with_layout(self.layout.into())
            .with_style(style)
            .with_canvas_width(self.width))
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LayoutArg {
    /// Stacked full-width cards
    VerticalCards,
    /// Left-to-right row of steps
    HorizontalSteps,
    /// Steps around a central title
    RadialProcess,
    /// Alternating steps along a spine
    TimelineFlow,
    /// Steps on a progress ring
    CircularProgress,
    /// Grid of cards
    MultiColumn,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::VerticalCards => Layout::VerticalCards,
            LayoutArg::HorizontalSteps => Layout::HorizontalSteps,
            LayoutArg::RadialProcess => Layout::RadialProcess,
            LayoutArg::TimelineFlow => Layout::TimelineFlow,
            LayoutArg::CircularProgress => Layout::CircularProgress,
            LayoutArg::MultiColumn => Layout::MultiColumn,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CornerArg {
    /// Square corners
    Sharp,
    /// Rounded corners (12px)
    Soft,
    /// Pill-like corners (40px)
    ExtraSoft,
}

impl From<CornerArg> for CornerStyle {
    fn from(arg: CornerArg) -> Self {
        match arg {
            CornerArg::Sharp => CornerStyle::Sharp,
            CornerArg::Soft => CornerStyle::Soft,
            CornerArg::ExtraSoft => CornerStyle::ExtraSoft,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum BorderArg {
    Solid,
    Dashed,
    None,
}

impl From<BorderArg> for BorderVariant {
    fn from(arg: BorderArg) -> Self {
        match arg {
            BorderArg::Solid => BorderVariant::Solid,
            BorderArg::Dashed => BorderVariant::Dashed,
            BorderArg::None => BorderVariant::None,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Svg,
    Png,
    #[value(alias = "jpg")]
    Jpeg,
    Json,
    Markdown,
    Text,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Svg => ExportFormat::Svg,
            FormatArg::Png => ExportFormat::Png,
            FormatArg::Jpeg => ExportFormat::Jpeg,
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Markdown => ExportFormat::Markdown,
            FormatArg::Text => ExportFormat::Text,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            style,
        }) => cmd_convert(&input, output.as_deref(), &style),
        Some(Commands::Svg {
            input,
            output,
            style,
        }) => cmd_svg(&input, output.as_deref(), &style),
        Some(Commands::Markdown {
            input,
            output,
            frontmatter,
        }) => cmd_markdown(&input, output.as_deref(), frontmatter),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Export {
            input,
            format,
            output,
            export_background,
            pixel_ratio,
            style,
        }) => cmd_export(
            &input,
            format,
            output.as_deref(),
            export_background.as_deref(),
            pixel_ratio,
            &style,
        ),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Layouts) => {
            cmd_layouts();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), &cli.style)
            } else {
                println!("{}", "Usage: infostep <FILE> [OUTPUT]".yellow());
                println!("       infostep --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        let parse_failed = e
            .downcast_ref::<infostep::Error>()
            .is_some_and(infostep::Error::is_parse_error);
        if parse_failed {
            eprintln!(
                "{}",
                "Try one step per line (\"1. Plan: Define scope\") or \"Start -> Process -> End\"."
                    .dimmed()
            );
        }
        std::process::exit(1);
    }
}

/// Read input text from a file, or stdin when the path is "-".
fn read_input(input: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(fs::read_to_string(input)?)
}

fn load_document(input: &Path) -> Result<ParsedDocument, Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let doc = infostep::parse(&text)?;
    log::info!("Parsed {} steps from {}", doc.step_count(), input.display());
    Ok(doc)
}

fn write_or_print(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn default_output_dir(input: &Path) -> PathBuf {
    if input == Path::new("-") {
        return PathBuf::from("infostep_output");
    }
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    PathBuf::from(format!("{}_output", stem))
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    style: &StyleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| default_output_dir(input));
    fs::create_dir_all(&output_dir)?;

    let doc = load_document(input)?;
    let render_options = style.render_options()?.with_frontmatter(true);

    let svg = infostep::render::to_svg(&doc, &render_options)?;
    fs::write(output_dir.join("infographic.svg"), &svg)?;

    let markdown = infostep::render::to_markdown(&doc, &render_options)?;
    fs::write(output_dir.join("outline.md"), &markdown)?;

    let text = infostep::render::to_text(&doc, &render_options)?;
    fs::write(output_dir.join("outline.txt"), &text)?;

    let json = infostep::render::to_json(&doc, JsonFormat::Pretty)?;
    fs::write(output_dir.join("document.json"), &json)?;

    println!("\n{}", "Output files:".green().bold());
    println!("  {} infographic.svg", "├─".dimmed());
    println!("  {} outline.md", "├─".dimmed());
    println!("  {} outline.txt", "├─".dimmed());
    println!("  {} document.json", "└─".dimmed());

    Ok(())
}

fn cmd_svg(
    input: &Path,
    output: Option<&Path>,
    style: &StyleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let svg = infostep::render::to_svg(&doc, &style.render_options()?)?;
    write_or_print(&svg, output)
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    frontmatter: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let options = RenderOptions::new().with_frontmatter(frontmatter);
    let markdown = infostep::render::to_markdown(&doc, &options)?;
    write_or_print(&markdown, output)
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let text = infostep::render::to_text(&doc, &RenderOptions::default())?;
    write_or_print(&text, output)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = infostep::render::to_json(&doc, format)?;
    write_or_print(&json, output)
}

fn cmd_export(
    input: &Path,
    format: FormatArg,
    output: Option<&Path>,
    background: Option<&str>,
    pixel_ratio: f32,
    style: &StyleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;

    let mut options = ExportOptions::new()
        .with_format(format.into())
        .with_render_options(style.render_options()?)
        .with_pixel_ratio(pixel_ratio);
    if let Some(color) = background {
        options = options.with_background(Color::resolve(color)?);
    }

    let artifact = export(&doc, &options)?;

    let path = match output {
        Some(p) if p.is_dir() => p.join(&artifact.file_name),
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(&artifact.file_name),
    };
    artifact.write_to(&path)?;

    println!(
        "{} {} ({}, {} bytes)",
        "Exported".green(),
        path.display(),
        artifact.mime_type(),
        artifact.len()
    );

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), doc.title);
    if let Some(ref subtitle) = doc.subtitle {
        println!("{}: {}", "Subtitle".bold(), subtitle);
    }
    if let Some(mode) = doc.mode() {
        println!("{}: {}", "Mode".bold(), mode);
    }

    println!();
    println!("{}", "Steps".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for step in &doc.steps {
        println!(
            "{} {} {}",
            format!("{:>3}.", step.number).bold(),
            infostep::render::text_glyph(step.icon),
            step.title
        );
        println!("      {}", step.description.dimmed());
    }

    println!();
    println!("{}: {}", "Steps".bold(), doc.step_count());
    println!("{}: {}", "Words".bold(), doc.word_count());

    Ok(())
}

fn cmd_layouts() {
    println!("{}", "Layouts".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for layout in Layout::ALL {
        println!(
            "  {:<18} {} {}",
            layout.id().bold(),
            layout.label(),
            format!("({})", layout.description()).dimmed()
        );
    }

    println!();
    println!("{}", "Accent colors".cyan().bold());
    for preset in &ACCENT_COLORS {
        println!("  {:<18} {} {}", preset.id.bold(), preset.color, preset.label);
    }

    println!();
    println!("{}", "Background colors".cyan().bold());
    for preset in &BACKGROUND_COLORS {
        println!("  {:<18} {} {}", preset.id.bold(), preset.color, preset.label);
    }

    println!();
    println!("{}", "Corners".cyan().bold());
    for corner in CornerStyle::ALL {
        println!(
            "  {:<18} {}px {}",
            corner.id().bold(),
            corner.radius(),
            corner.label()
        );
    }

    println!();
    println!("{}", "Borders".cyan().bold());
    for border in BorderVariant::ALL {
        println!("  {:<18} {}", border.id().bold(), border.label());
    }
}

fn cmd_version() {
    println!("{} {}", "infostep".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Process description to infographic tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/infostep".dimmed());
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_args() -> StyleArgs {
        StyleArgs {
            layout: LayoutArg::RadialProcess,
            accent: "earth".to_string(),
            background: "#1A2633".to_string(),
            corners: CornerArg::ExtraSoft,
            border: BorderArg::Dashed,
            width: 900,
        }
    }

    #[test]
    fn test_style_args_to_render_options() {
        let options = style_args().render_options().unwrap();
        assert_eq!(options.layout, Layout::RadialProcess);
        assert_eq!(options.style.corner, CornerStyle::ExtraSoft);
        assert_eq!(options.style.border, BorderVariant::Dashed);
        assert_eq!(options.style.background.to_string(), "#1A2633");
        assert_eq!(options.canvas_width, 900);
    }

    #[test]
    fn test_style_args_reject_bad_color() {
        let mut args = style_args();
        args.accent = "chartreuse".to_string();
        assert!(args.render_options().is_err());
    }

    #[test]
    fn test_cli_parses_style_flags() {
        let cli = Cli::try_parse_from([
            "infostep",
            "svg",
            "steps.txt",
            "--layout",
            "timeline-flow",
            "--corners",
            "extra-soft",
            "--border",
            "none",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Svg { input, style, .. }) => {
                assert_eq!(input, PathBuf::from("steps.txt"));
                assert!(style.layout == LayoutArg::TimelineFlow);
                assert!(style.corners == CornerArg::ExtraSoft);
                assert!(style.border == BorderArg::None);
            }
            _ => panic!("Expected svg command"),
        }
    }

    #[test]
    fn test_convert_writes_all_formats() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("steps.txt");
        fs::write(&input, "Release\n1. Plan: Scope\n2. Ship: Deliver").unwrap();
        let out = dir.path().join("out");

        cmd_convert(&input, Some(&out), &style_args()).unwrap();

        for name in ["infographic.svg", "outline.md", "outline.txt", "document.json"] {
            assert!(out.join(name).exists(), "missing {}", name);
        }
        let md = fs::read_to_string(out.join("outline.md")).unwrap();
        assert!(md.contains("# Release"));
    }

    #[test]
    fn test_style_defaults_match_library() {
        let cli = Cli::try_parse_from(["infostep", "svg", "steps.txt"]).unwrap();
        match cli.command {
            Some(Commands::Svg { style, .. }) => {
                let options = style.render_options().unwrap();
                assert_eq!(options.style, StyleOptions::default());
            }
            _ => panic!("Expected svg command"),
        }
    }

    #[test]
    fn test_export_png_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("steps.txt");
        fs::write(&input, "Plan -> Build -> Ship").unwrap();
        let out = dir.path().join("flow.png");

        cmd_export(&input, FormatArg::Png, Some(&out), Some("white"), 1.0, &style_args())
            .unwrap();

        let data = fs::read(&out).unwrap();
        assert!(data.starts_with(b"\x89PNG"));
    }

    #[test]
    fn test_cli_accepts_jpg_alias() {
        let cli =
            Cli::try_parse_from(["infostep", "export", "steps.txt", "--format", "jpg"]).unwrap();
        match cli.command {
            Some(Commands::Export { format, .. }) => assert!(format == FormatArg::Jpeg),
            _ => panic!("Expected export command"),
        }
    }

    #[test]
    fn test_default_output_dir() {
        assert_eq!(
            default_output_dir(Path::new("flows/release.txt")),
            PathBuf::from("release_output")
        );
        assert_eq!(
            default_output_dir(Path::new("-")),
            PathBuf::from("infostep_output")
        );
    }
}
