use clap::{Parser, Subcommand};
use pagebake::types::{ImageStore, PageRoster, ProductCatalog};
use pagebake::{compile, config, output};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Inputs shared by `build` and `check`.
#[derive(clap::Args, Clone)]
struct InputArgs {
    /// Page document (JSON)
    #[arg(long)]
    document: PathBuf,

    /// Image store: key → data URI or URL (JSON object)
    #[arg(long)]
    images: Option<PathBuf>,

    /// Page roster: page id → slug (JSON object)
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Product catalog: product id → record (JSON object)
    #[arg(long)]
    products: Option<PathBuf>,
}

#[derive(Parser)]
#[command(name = "pagebake")]
#[command(about = "Compile page documents into static HTML bundles")]
#[command(long_about = "\
Compile page documents into static HTML bundles

A page document describes the theme, SEO metadata, navigation and an ordered
list of content sections. pagebake renders it into one standalone index.html,
extracts inline images into files, and inlines a small client script for
theme persistence, menus, FAQ accordions and embeds.

Inputs:

  page.json      {\"theme\": {...}, \"seo\": {...}, \"nav\": {...},
                  \"sectionOrder\": [\"hero\", \"pricing\"], \"hero\": {...}, ...}
  images.json    {\"hero\": \"data:image/png;base64,...\", \"logo\": \"https://...\"}
  roster.json    {\"p1\": \"about-us\"}          page:p1 → about-us.html
  products.json  {\"mug\": {\"id\": \"mug\", \"name\": \"Mug\", \"price\": \"$12\"}}

Output:

  dist/
  ├── index.html
  └── assets/images/hero.png

Content problems never fail a build; they are listed as diagnostics.

Run 'pagebake gen-config' to generate a documented pagebake.toml.")]
#[command(version = env!("PAGEBAKE_VERSION"))]
struct Cli {
    /// Config file (default: ./pagebake.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a page and write the bundle
    Build {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
    /// Compile a page and report sections, files and diagnostics
    Check {
        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Print a stock pagebake.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build { inputs, output: output_dir } => {
            let config = load_config(cli.config.as_deref())?;
            init_thread_pool(&config.processing);
            let compilation = compile_inputs(&inputs, &config)?;
            output::print_compile_output(&compilation);
            compilation.bundle.write_to(&output_dir)?;
            output::print_write_output(&compilation, &output_dir);
        }
        Command::Check { inputs } => {
            let config = load_config(cli.config.as_deref())?;
            init_thread_pool(&config.processing);
            let compilation = compile_inputs(&inputs, &config)?;
            output::print_compile_output(&compilation);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn compile_inputs(
    inputs: &InputArgs,
    config: &config::CompilerConfig,
) -> Result<compile::Compilation, Box<dyn std::error::Error>> {
    let document = std::fs::read_to_string(&inputs.document)?;
    let images: ImageStore = read_optional_json(inputs.images.as_deref())?;
    let roster: PageRoster = read_optional_json(inputs.roster.as_deref())?;
    let catalog: ProductCatalog = read_optional_json(inputs.products.as_deref())?;
    tracing::info!(
        document = %inputs.document.display(),
        images = images.len(),
        pages = roster.len(),
        products = catalog.len(),
        "compiling"
    );
    Ok(compile::compile_json(
        &document, &images, &roster, &catalog, config,
    )?)
}

/// Read a JSON map, or an empty one when no path was given.
fn read_optional_json<T: DeserializeOwned + Default>(
    path: Option<&Path>,
) -> Result<T, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        None => Ok(T::default()),
    }
}

/// An explicit `--config` must exist; otherwise `./pagebake.toml` is optional.
fn load_config(path: Option<&Path>) -> Result<config::CompilerConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) if !path.exists() => {
            Err(format!("config file not found: {}", path.display()).into())
        }
        Some(path) => Ok(config::load_config_file(path)?),
        None => Ok(config::load_config(Path::new("."))?),
    }
}

/// Install the stderr log subscriber. `RUST_LOG` directives are combined
/// with the level chosen by `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; the user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
