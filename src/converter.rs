use crate::{Error, IconSizes, Result, SourceImage};
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::ExtendedColorType;
use std::env;
use std::ffi::OsStr;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::info;

/// Largest edge length an ICO directory entry can describe.
pub const MAX_ICO_SIZE: u32 = 256;

/// Writes a multi-resolution ICO file from a single source icon.
/// Each size becomes one PNG-compressed RGBA frame, in the order the sizes are listed.
#[derive(Debug)]
pub struct IcoConverter {
    sizes: IconSizes,
}

impl Default for IcoConverter {
    fn default() -> Self {
        IcoConverter {
            sizes: IconSizes::ICO,
        }
    }
}

impl IcoConverter {
    /// Customizes the frames included in the ICO file. Defaults to [`IconSizes::ICO`].
    pub fn sizes(&mut self, sizes: impl Into<IconSizes>) -> &mut IcoConverter {
        self.sizes = sizes.into();
        self
    }

    /// Decodes `source_path` and writes the ICO file to `output_path`.
    pub fn convert_file(
        &self,
        source_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        self.validate()?;
        let source = SourceImage::open(source_path)?;
        self.write(&source, output_path)
    }

    /// Writes the ICO file for an already decoded source to `output_path`,
    /// replacing any existing file. Missing parent directories are created.
    pub fn write(&self, source: &SourceImage, output_path: impl AsRef<Path>) -> Result<PathBuf> {
        self.validate()?;
        let output_path = output_path.as_ref();

        let frames: Vec<_> = self
            .sizes
            .iter()
            .map(|size| create_ico_frame(source, size, output_path))
            .collect::<Result<_>>()?;

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(Error::io(parent))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(output_path)
            .map_err(Error::io(output_path))?;
        IcoEncoder::new(file)
            .encode_images(&frames)
            .map_err(Error::encode(output_path))?;

        info!(
            path = %output_path.display(),
            frames = frames.len(),
            "wrote ICO file"
        );
        Ok(output_path.to_owned())
    }

    /// Converts `source_path` and writes the ICO file to `OUT_DIR`.
    /// Tells Cargo to re-run the build script when the source changes.
    pub fn convert_file_cargo(
        &self,
        source_path: impl AsRef<Path>,
        file_name: impl AsRef<OsStr>,
    ) -> Result<PathBuf> {
        let out_dir = env::var("OUT_DIR").map_err(Error::MissingOutDir)?;
        let mut output_path = PathBuf::from(out_dir);
        output_path.push(file_name.as_ref());

        let source_path = source_path.as_ref();
        println!("cargo:rerun-if-changed={}", source_path.display());
        self.convert_file(source_path, &output_path)
    }

    fn validate(&self) -> Result<()> {
        self.sizes.validate()?;
        match self.sizes.iter().find(|&size| size > MAX_ICO_SIZE) {
            Some(size) => Err(Error::InvalidIcoSize(size)),
            None => Ok(()),
        }
    }
}

fn create_ico_frame(
    source: &SourceImage,
    size: u32,
    output_path: &Path,
) -> Result<IcoFrame<'static>> {
    let resized = source.resized(size);
    IcoFrame::as_png(resized.as_raw(), size, size, ExtendedColorType::Rgba8)
        .map_err(Error::encode(output_path))
}
