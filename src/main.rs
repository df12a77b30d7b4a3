use icon_assets::{IcoConverter, PngSizeGenerator, SourceImage};
use std::env;
use std::error::Error;
use std::io;
use std::path::PathBuf;

/// Overrides the directory the fixed input and output paths are resolved against.
const PROJECT_DIR_VAR: &str = "ICON_ASSETS_PROJECT_DIR";
const SOURCE_ICON: &str = "图标.png";
const BUILD_DIR: &str = "build";
const ICO_FILE: &str = "icon.ico";

struct Paths {
    source: PathBuf,
    build_dir: PathBuf,
    ico: PathBuf,
}

impl Paths {
    /// Resolves against `ICON_ASSETS_PROJECT_DIR`, or the working directory when unset.
    fn resolve() -> io::Result<Paths> {
        let project_dir = match env::var_os(PROJECT_DIR_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => env::current_dir()?,
        };
        let build_dir = project_dir.join(BUILD_DIR);
        Ok(Paths {
            source: project_dir.join(SOURCE_ICON),
            ico: build_dir.join(ICO_FILE),
            build_dir,
        })
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    std::process::exit(match run() {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    })
}

fn run() -> Result<(), Box<dyn Error>> {
    let paths = Paths::resolve()?;
    tracing::debug!(source = %paths.source.display(), "resolved source icon");

    // Decode once up front so a bad source leaves nothing behind.
    let source = SourceImage::open(&paths.source)?;
    tracing::debug!(
        width = source.width(),
        height = source.height(),
        "converting {}",
        source.path().display()
    );

    let ico = IcoConverter::default().write(&source, &paths.ico)?;
    println!("Created ICO: {}", ico.display());

    for png in PngSizeGenerator::default().write(&source, &paths.build_dir)? {
        println!("Created PNG: {}", png.display());
    }

    println!("\nIcon conversion complete!");
    println!("ICO file: {}", ico.display());
    Ok(())
}
