use crate::sizes::png_file_name;
use crate::{Error, IconSizes, Result, SourceImage};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes one standalone PNG per size into an output directory, named `{size}x{size}.png`,
/// followed by a canonical icon (`icon.png` at 256×256 by default).
#[derive(Debug)]
pub struct PngSizeGenerator {
    sizes: IconSizes,
    canonical_size: u32,
    canonical_name: Cow<'static, str>,
}

impl Default for PngSizeGenerator {
    fn default() -> Self {
        PngSizeGenerator {
            sizes: IconSizes::PNG,
            canonical_size: 256,
            canonical_name: Cow::Borrowed("icon.png"),
        }
    }
}

impl PngSizeGenerator {
    /// Customizes the sizes written. Defaults to [`IconSizes::PNG`].
    pub fn sizes(&mut self, sizes: impl Into<IconSizes>) -> &mut PngSizeGenerator {
        self.sizes = sizes.into();
        self
    }

    /// Customizes the extra, fixed-name icon written after the sized files.
    pub fn canonical(
        &mut self,
        size: u32,
        file_name: impl Into<Cow<'static, str>>,
    ) -> &mut PngSizeGenerator {
        self.canonical_size = size;
        self.canonical_name = file_name.into();
        self
    }

    /// Decodes `source_path` and writes all PNG files into `output_dir`.
    pub fn generate_files(
        &self,
        source_path: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
    ) -> Result<Vec<PathBuf>> {
        self.validate()?;
        let source = SourceImage::open(source_path)?;
        self.write(&source, output_dir)
    }

    /// Writes all PNG files for an already decoded source into `output_dir`,
    /// creating it if needed. Returns the written paths in the order they were written.
    pub fn write(&self, source: &SourceImage, output_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        self.validate()?;
        let output_dir = output_dir.as_ref();
        fs::create_dir_all(output_dir).map_err(Error::io(output_dir))?;

        let mut written = Vec::with_capacity(self.sizes.len() + 1);
        for size in self.sizes.iter() {
            let path = output_dir.join(png_file_name(size));
            write_png(&source.resized(size), &path)?;
            written.push(path);
        }

        let path = output_dir.join(&*self.canonical_name);
        write_png(&source.resized(self.canonical_size), &path)?;
        written.push(path);

        Ok(written)
    }

    fn validate(&self) -> Result<()> {
        self.sizes.validate()?;
        if self.canonical_size == 0 {
            return Err(Error::ZeroSize);
        }
        Ok(())
    }
}

fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(Error::io(path))?;
    let mut writer = BufWriter::new(file);
    PngEncoder::new(&mut writer)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(Error::encode(path))?;
    writer.flush().map_err(Error::io(path))?;

    info!(
        path = %path.display(),
        size = image.width(),
        "wrote PNG file"
    );
    Ok(())
}
