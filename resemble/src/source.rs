//! Image sources and pair loading

use crate::error::{LoadError, Side};
use resemble_core::Pix;
use resemble_io::IoResult;
use std::path::{Path, PathBuf};

/// Where a raster comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// An image file on disk
    Path(PathBuf),
    /// An encoded image held in memory
    Memory(Vec<u8>),
}

impl ImageSource {
    /// Decode the source into a raster.
    pub fn load(&self) -> IoResult<Pix> {
        match self {
            ImageSource::Path(path) => resemble_io::read_image(path),
            ImageSource::Memory(bytes) => resemble_io::read_image_mem(bytes),
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        ImageSource::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        ImageSource::Memory(bytes)
    }
}

impl From<&[u8]> for ImageSource {
    fn from(bytes: &[u8]) -> Self {
        ImageSource::Memory(bytes.to_vec())
    }
}

fn load_side(source: &ImageSource, side: Side) -> Result<Pix, LoadError> {
    source.load().map_err(|err| {
        log::warn!("failed to load {side} image: {err}");
        LoadError { side, source: err }
    })
}

/// Load both inputs of a comparison.
///
/// Both rasters must be available before analysis starts. The first
/// source that fails ends the load and its error is returned.
///
/// # Errors
///
/// Returns a [`LoadError`] naming the side that failed.
pub fn load_pair(a: &ImageSource, b: &ImageSource) -> Result<(Pix, Pix), LoadError> {
    let first = load_side(a, Side::First)?;
    let second = load_side(b, Side::Second)?;
    Ok((first, second))
}
