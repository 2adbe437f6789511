//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Grayscale, RGB and
//! CMYK inputs all decode to an opaque 32-bit RGBA `Pix`.
//!
//! JPEG *writing* is not supported: the diff output carries alpha, which
//! JPEG cannot store.

use crate::{IoError, IoResult};
use jpeg_decoder::Decoder;
use resemble_core::{ImageFormat, Pix, color};
use std::io::Read;

/// Read a JPEG image from a reader.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG has no frame header".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    // 1: L8, 2: L16 (big-endian), 3: RGB24, 4: CMYK32
    let samples = info.pixel_format.pixel_bytes();

    let expected = width as usize * height as usize * samples;
    if data.len() < expected {
        return Err(IoError::InvalidData(format!(
            "JPEG data too short: expected {} bytes, got {}",
            expected,
            data.len()
        )));
    }

    let mut pix_mut = Pix::new(width, height)?.to_mut();
    pix_mut.set_spp(3);
    pix_mut.set_informat(ImageFormat::Jpeg);

    for (dst, px) in pix_mut.data_mut().iter_mut().zip(data.chunks_exact(samples)) {
        *dst = match samples {
            1 | 2 => color::compose_rgb(px[0], px[0], px[0]),
            3 => color::compose_rgb(px[0], px[1], px[2]),
            _ => {
                let k = px[3] as u32;
                let channel = |c: u8| (255 - (c as u32 + k).min(255)) as u8;
                color::compose_rgb(channel(px[0]), channel(px[1]), channel(px[2]))
            }
        };
    }

    Ok(pix_mut.into())
}
