//! `skyview` binary: open the viewer window, or render one frame off-screen.

use std::path::{Path, PathBuf};

use clap::Parser;
use skyview::{Options, SkyviewError, Viewer, ViewerEngine};

#[derive(Parser, Debug)]
#[command(name = "skyview")]
#[command(about = "Interactive rigid-body frame viewer", long_about = None)]
struct Cli {
    /// TOML options file
    #[arg(long)]
    options: Option<PathBuf>,

    /// Window width in pixels (overrides the options file)
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels (overrides the options file)
    #[arg(long)]
    height: Option<u32>,

    /// Window title (overrides the options file)
    #[arg(long)]
    title: Option<String>,

    /// Write the options JSON Schema to this path and exit
    #[arg(long, value_name = "PATH")]
    write_schema: Option<PathBuf>,

    /// Render the initial scene off-screen to this PPM file and exit
    #[arg(long, value_name = "PATH")]
    render_to: Option<PathBuf>,
}

impl Cli {
    fn load_options(&self) -> Result<Options, SkyviewError> {
        let mut options = match &self.options {
            Some(path) => Options::load(path)?,
            None => Options::default(),
        };
        if let Some(width) = self.width {
            options.display.width = width.max(1);
        }
        if let Some(height) = self.height {
            options.display.height = height.max(1);
        }
        if let Some(title) = &self.title {
            options.display.title.clone_from(title);
        }
        Ok(options)
    }
}

fn render_to(options: &Options, path: &Path) -> Result<(), SkyviewError> {
    let engine = pollster::block_on(ViewerEngine::headless(options))?;
    engine.save_screenshot(path)?;
    log::info!("Frame written to {}", path.display());
    Ok(())
}

fn run(cli: &Cli) -> Result<(), SkyviewError> {
    if let Some(path) = &cli.write_schema {
        Options::write_schema(path)?;
        log::info!("Options schema written to {}", path.display());
        return Ok(());
    }

    let options = cli.load_options()?;
    if let Some(path) = &cli.render_to {
        return render_to(&options, path);
    }

    Viewer::builder().with_options(options).build().run()
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
