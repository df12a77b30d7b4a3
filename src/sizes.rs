use crate::{Error, Result};
use std::borrow::Cow;

/// An ordered list of square icon sizes, in pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSizes(Cow<'static, [u32]>);

impl IconSizes {
    /// Frames embedded in the ICO file, largest first: 256, 128, 64, 48, 32 and 16.
    pub const ICO: Self = Self::new(&[256, 128, 64, 48, 32, 16]);

    /// Standalone PNG assets: 512, 256, 128, 64, 48, 32 and 16.
    pub const PNG: Self = Self::new(&[512, 256, 128, 64, 48, 32, 16]);

    pub const fn new(sizes: &'static [u32]) -> IconSizes {
        Self(Cow::Borrowed(sizes))
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::NoSizes);
        }
        if self.iter().any(|size| size == 0) {
            return Err(Error::ZeroSize);
        }
        Ok(())
    }
}

impl<'a, I> From<I> for IconSizes
where
    I: IntoIterator<Item = &'a u32>,
{
    fn from(value: I) -> Self {
        IconSizes(value.into_iter().copied().collect::<Vec<_>>().into())
    }
}

/// The file name a resized PNG is written under, e.g. `48x48.png`.
pub fn png_file_name(size: u32) -> String {
    format!("{size}x{size}.png")
}
