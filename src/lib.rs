//! A crate for turning a single PNG icon into the icon assets an application
//! package needs: a multi-size Windows ICO file and a set of resized PNG files.
//! Every size is resampled from the source with a Lanczos3 filter and stored as 8-bit RGBA.
//!
//! ## Examples
//! ### ICO file
//! Writes 256, 128, 64, 48, 32 and 16px frames, largest first.
//!
//! ```no_run
//! # use icon_assets::IcoConverter;
//! IcoConverter::default()
//!     .convert_file("app-icon.png", "build/icon.ico")?;
//! # Ok::<(), icon_assets::Error>(())
//! ```
//!
//! ### PNG assets
//! Writes `512x512.png` down to `16x16.png` plus a 256px `icon.png`.
//!
//! ```no_run
//! # use icon_assets::PngSizeGenerator;
//! PngSizeGenerator::default()
//!     .generate_files("app-icon.png", "build")?;
//! # Ok::<(), icon_assets::Error>(())
//! ```
//!
//! ### Sharing one decode
//! ```no_run
//! # use icon_assets::{IcoConverter, PngSizeGenerator, SourceImage};
//! let source = SourceImage::open("app-icon.png")?;
//! IcoConverter::default().sizes(&[48, 32, 16]).write(&source, "build/icon.ico")?;
//! PngSizeGenerator::default().write(&source, "build")?;
//! # Ok::<(), icon_assets::Error>(())
//! ```

mod converter;
mod error;
mod generator;
mod sizes;
mod source;

pub use converter::{IcoConverter, MAX_ICO_SIZE};
pub use error::{Error, Result};
pub use generator::PngSizeGenerator;
pub use sizes::{png_file_name, IconSizes};
pub use source::SourceImage;
