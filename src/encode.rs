//! Writing pixel buffers back to the on-disk layout.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::bitmap::Bitmap;
use crate::error::{Error, Result};
use crate::header::{
    row_padding, FileHeader, InfoHeader, BIT_DEPTH_24, COMPRESSION_NONE, FILE_HEADER_LEN,
    INFO_HEADER_LEN, PIXEL_DATA_OFFSET,
};

/// Encode `bitmap` to a file, replacing any existing contents.
///
/// Fails with [`Error::FileNotFound`] when the destination cannot be
/// created. The handle closes on every exit path when it falls out of
/// scope.
pub fn encode_file<P: AsRef<Path>>(bitmap: &Bitmap, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    encode(bitmap, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Encode `bitmap` into a fresh byte vector.
pub fn encode_vec(bitmap: &Bitmap) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(bitmap));
    encode(bitmap, &mut out).expect("writing to a vec cannot fail");
    out
}

/// Encode `bitmap` to any writer.
///
/// Encoding trusts the `Bitmap` length invariant and does not re-validate
/// it; every constructor establishes it and every transform preserves it.
pub fn encode<W: Write>(bitmap: &Bitmap, writer: &mut W) -> Result<()> {
    let width = bitmap.width();
    let height = bitmap.height();
    let padding = row_padding(width) as usize;
    let payload = (width as usize * 3 + padding) * height as usize;

    let file_header = FileHeader {
        file_size: PIXEL_DATA_OFFSET + payload as u32,
        pixel_offset: PIXEL_DATA_OFFSET,
    };
    let info = InfoHeader {
        header_size: INFO_HEADER_LEN as u32,
        // Always written bottom-up, hence the positive height.
        width: width as i32,
        height: height as i32,
        planes: 1,
        bit_depth: BIT_DEPTH_24,
        compression: COMPRESSION_NONE,
        image_size: payload as u32,
    };
    writer.write_all(&file_header.to_bytes())?;
    writer.write_all(&info.to_bytes())?;

    if width > 0 {
        // One scratch row, BGR triplets followed by zero padding.
        let mut row_bytes = vec![0u8; width as usize * 3 + padding];
        for row in bitmap.pixels().chunks_exact(width as usize) {
            for (bgr, px) in row_bytes.chunks_exact_mut(3).zip(row) {
                bgr[0] = px.blue;
                bgr[1] = px.green;
                bgr[2] = px.red;
            }
            writer.write_all(&row_bytes)?;
        }
    }

    log::debug!("encoded {width}x{height} bitmap, {payload} payload bytes");
    Ok(())
}

fn encoded_len(bitmap: &Bitmap) -> usize {
    let row = bitmap.width() as usize * 3 + row_padding(bitmap.width()) as usize;
    FILE_HEADER_LEN + INFO_HEADER_LEN + row * bitmap.height() as usize
}
