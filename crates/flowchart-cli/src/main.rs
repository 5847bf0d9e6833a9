mod logger;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dot_render::{EXAMPLE_FLOWCHART, GraphvizRenderer, RenderOptions};
use pdf_paginate::{
    Orientation, PageElement, PaperSize, PlannedLayout, PrintOptions, PrintRequest, ScalingPolicy,
    SourceImage,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "flowpdf", about = "Render DOT flowcharts to paginated PDF", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a DOT file and write a paginated PDF
    Generate {
        /// Input DOT file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        page: PageArgs,

        /// Graphviz dot executable
        #[arg(long, default_value = "dot")]
        dot: PathBuf,

        /// Seconds to wait for Graphviz before giving up
        #[arg(long, default_value = "60")]
        timeout: u64,

        /// Write the effective options to a JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,

        /// Show the pagination plan only, don't write the PDF
        #[arg(long)]
        plan_only: bool,
    },

    /// Show the pagination plan for an image of the given size
    Plan {
        /// Image width in pixels
        #[arg(long)]
        width: u32,

        /// Image height in pixels
        #[arg(long)]
        height: u32,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Print an example DOT flowchart
    Example,

    /// Check that Graphviz is installed
    Check {
        /// Graphviz dot executable
        #[arg(long, default_value = "dot")]
        dot: PathBuf,
    },
}

/// Page and scaling flags; any flag given overrides the config file
#[derive(Args)]
struct PageArgs {
    /// JSON options file to start from
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output paper size (a0-a4, letter, legal, tabloid)
    #[arg(long)]
    paper: Option<PaperSize>,

    /// Output orientation (portrait, landscape)
    #[arg(long)]
    orientation: Option<Orientation>,

    /// Page margin in mm (5 to 50, uniform on all sides)
    #[arg(long)]
    margin: Option<f32>,

    /// Scaling method (fit, multi-page, original)
    #[arg(long)]
    scaling: Option<ScalingPolicy>,

    /// Rendering quality
    #[arg(long, value_enum)]
    quality: Option<QualityArg>,

    /// Heading printed above the diagram
    #[arg(long, conflicts_with = "no_title")]
    title: Option<String>,

    /// Omit the heading
    #[arg(long)]
    no_title: bool,
}

impl PageArgs {
    async fn resolve(&self) -> Result<PrintOptions> {
        let mut options = match &self.config {
            Some(path) => PrintOptions::load(path)
                .await
                .with_context(|| format!("loading {}", path.display()))?,
            None => PrintOptions::default(),
        };

        if let Some(paper) = self.paper {
            options.paper_size = paper;
        }
        if let Some(orientation) = self.orientation {
            options.orientation = orientation;
        }
        if let Some(margin) = self.margin {
            options.margin_mm = margin;
        }
        if let Some(scaling) = self.scaling {
            options.scaling = scaling;
        }
        if let Some(quality) = self.quality {
            options.quality = quality.into();
        }
        if let Some(title) = &self.title {
            options.title = Some(title.clone());
        }
        if self.no_title {
            options.title = None;
        }

        options.validate()?;
        Ok(options)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum QualityArg {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl From<QualityArg> for pdf_paginate::Quality {
    fn from(arg: QualityArg) -> Self {
        match arg {
            QualityArg::Low => Self::Low,
            QualityArg::Medium => Self::Medium,
            QualityArg::High => Self::High,
            QualityArg::VeryHigh => Self::VeryHigh,
        }
    }
}

/// Fail before rendering when the Graphviz program cannot be started
async fn require_graphviz(renderer: &GraphvizRenderer) -> Result<()> {
    if !renderer.check_installed().await {
        bail!(
            "Graphviz '{}' could not be started; install Graphviz or pass --dot",
            renderer.program().display()
        );
    }
    Ok(())
}

fn print_layout(options: &PrintOptions, layout: &PlannedLayout) {
    let stats = layout.statistics();
    println!("Pagination Plan:");
    println!(
        "  Page: {} {:?}, {:.1} x {:.1} pt",
        options.paper_size,
        options.orientation,
        layout.geometry.physical_width,
        layout.geometry.physical_height
    );
    println!(
        "  Content area: {:.1} x {:.1} pt",
        layout.geometry.content_width, layout.content_height
    );
    println!("  Scaling: {}", options.scaling.label());
    println!("  Scale: {:.4}", stats.scale);
    println!("  Pages: {}", stats.pages);

    let mut page = 1;
    for element in &layout.plan.elements {
        match element {
            PageElement::ImagePlacement {
                source_rect,
                rendered_width,
                rendered_height,
            } => println!(
                "  [{}] rows {:.1}..{:.1} -> {:.1} x {:.1} pt",
                page, source_rect.y0, source_rect.y1, rendered_width, rendered_height
            ),
            PageElement::PageBreak => page += 1,
        }
    }

    if stats.overflows_page {
        println!("  Warning: content exceeds the page's content area");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::from_verbosity(cli.verbose).init()?;

    match cli.command {
        Commands::Generate {
            input,
            output,
            page,
            dot,
            timeout,
            save_config,
            plan_only,
        } => {
            // Configuration errors surface before any rendering work
            let options = page.resolve().await?;
            if let Some(path) = &save_config {
                options.save(path).await?;
                log::info!("Saved options to {}", path.display());
            }

            let source = tokio::fs::read_to_string(&input)
                .await
                .with_context(|| format!("reading {}", input.display()))?;

            let renderer = GraphvizRenderer::new(dot).with_timeout(Duration::from_secs(timeout));
            require_graphviz(&renderer).await?;
            let render_options = RenderOptions {
                dpi: options.quality.dpi(),
                ..Default::default()
            };
            let rendered = renderer.render(&source, &render_options).await?;
            log::info!(
                "Rendered {} at {} DPI: {}x{} px",
                input.display(),
                render_options.dpi,
                rendered.width,
                rendered.height
            );

            let image = SourceImage::from_bytes(&rendered.bytes)?;
            let request = PrintRequest::new(options, image);

            if plan_only {
                let layout = request.layout()?;
                print_layout(&request.options, &layout);
                return Ok(());
            }

            let layout = request.generate_pdf(&output).await?;
            println!(
                "Generated {} page(s) → {}",
                layout.plan.page_count(),
                output.display()
            );
        }

        Commands::Plan {
            width,
            height,
            page,
        } => {
            let options = page.resolve().await?;
            let layout = pdf_paginate::plan_layout(&options, width, height)?;
            print_layout(&options, &layout);
        }

        Commands::Example => {
            print!("{}", EXAMPLE_FLOWCHART);
        }

        Commands::Check { dot } => {
            let renderer = GraphvizRenderer::new(dot);
            require_graphviz(&renderer).await?;
            let version = renderer
                .version()
                .await
                .with_context(|| format!("querying {}", renderer.program().display()))?;
            println!("{}", version);
        }
    }

    Ok(())
}
