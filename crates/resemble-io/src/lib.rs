//! resemble-io - Raster sources and sinks
//!
//! Decodes image containers into 32-bit RGBA [`Pix`] rasters and encodes
//! diff output back to disk or memory.
//!
//! | Format | Read | Write | Feature |
//! |--------|------|-------|---------|
//! | PNG    | yes  | yes   | `png-format` (default) |
//! | JPEG   | yes  | no    | `jpeg` (default) |
//!
//! The format of an input is always sniffed from its magic bytes, never
//! from its file name.

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use resemble_core::ImageFormat;

use resemble_core::Pix;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file path.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be opened and a decode or
/// format error if its contents are not a supported image.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let file = File::open(path)?;
    let pix = read_image_format(BufReader::new(file), format)?;
    log::debug!(
        "decoded {} as {:?} ({}x{})",
        path.display(),
        format,
        pix.width(),
        pix.height()
    );
    Ok(pix)
}

/// Read an image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;
    let pix = read_image_format(Cursor::new(data), format)?;
    log::debug!(
        "decoded {} bytes as {:?} ({}x{})",
        data.len(),
        format,
        pix.width(),
        pix.height()
    );
    Ok(pix)
}

/// Read an image in a known format from a buffered, seekable reader.
#[allow(unused_variables)]
pub fn read_image_format<R>(reader: R, format: ImageFormat) -> IoResult<Pix>
where
    R: std::io::BufRead + std::io::Seek,
{
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        _ => Err(IoError::UnsupportedFormat(format!(
            "reading {:?} is not supported or not enabled",
            format
        ))),
    }
}

/// Write an image to a file path.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_image_format(pix, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into a byte vector.
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_format(pix, &mut buffer, format)?;
    Ok(buffer)
}

#[allow(unused_variables)]
fn write_image_format<W: Write>(pix: &Pix, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, writer),
        _ => Err(IoError::UnsupportedFormat(format!(
            "writing {:?} is not supported or not enabled",
            format
        ))),
    }
}
