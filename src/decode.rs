//! Reading bitmap files into pixel buffers.

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

use crate::bitmap::Bitmap;
use crate::error::{Error, Result};
use crate::header::{
    row_padding, FileHeader, InfoHeader, BIT_DEPTH_24, COMPRESSION_NONE, FILE_HEADER_LEN,
    INFO_HEADER_LEN,
};
use crate::pixel::Pixel;

/// Decode a bitmap file from disk.
///
/// Fails with [`Error::FileNotFound`] when the file cannot be opened. The
/// handle closes on every exit path when it falls out of scope.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Bitmap> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&mut BufReader::new(file))
}

/// Decode a bitmap already held in memory.
pub fn decode_bytes(bytes: &[u8]) -> Result<Bitmap> {
    decode(&mut Cursor::new(bytes))
}

/// Decode a bitmap from any seekable byte source.
pub fn decode<R: Read + Seek>(reader: &mut R) -> Result<Bitmap> {
    let mut file_bytes = [0u8; FILE_HEADER_LEN];
    read_into(reader, &mut file_bytes, "file header")?;
    let file_header = FileHeader::parse(&file_bytes)?;

    let mut info_bytes = [0u8; INFO_HEADER_LEN];
    read_into(reader, &mut info_bytes, "info header")?;
    let info = InfoHeader::parse(&info_bytes);
    validate(&info)?;

    let width = info.width as u32;
    // Negative height marks a top-down file; the magnitude is the height.
    let height = info.height.unsigned_abs();
    let top_down = info.height < 0;

    let pixel_count = usize::try_from(u64::from(width) * u64::from(height))
        .map_err(|_| Error::OutOfMemory)?;
    let mut data: Vec<Pixel> = Vec::new();
    data.try_reserve_exact(pixel_count)
        .map_err(|_| Error::OutOfMemory)?;
    data.resize(pixel_count, Pixel::BLACK);

    let padding = row_padding(width);
    reader.seek(SeekFrom::Start(u64::from(file_header.pixel_offset)))?;

    let mut row_bytes = vec![0u8; width as usize * 3];
    for i in 0..height as usize {
        read_into(reader, &mut row_bytes, "pixel data")?;

        // Stored rows run bottom-up unless the file is top-down; either way
        // row 0 of the buffer is the bottom-most scanline.
        let row = if top_down { height as usize - 1 - i } else { i };
        let dest = &mut data[row * width as usize..][..width as usize];
        for (px, bgr) in dest.iter_mut().zip(row_bytes.chunks_exact(3)) {
            *px = Pixel {
                blue: bgr[0],
                green: bgr[1],
                red: bgr[2],
            };
        }

        if padding != 0 {
            reader.seek(SeekFrom::Current(i64::from(padding)))?;
        }
    }

    log::debug!("decoded {width}x{height} bitmap, {padding} pad bytes/row, top_down={top_down}");

    Ok(Bitmap {
        width,
        height,
        data,
    })
}

fn validate(info: &InfoHeader) -> Result<()> {
    if info.header_size < INFO_HEADER_LEN as u32 {
        return Err(invalid(format!(
            "unsupported header size {}",
            info.header_size
        )));
    }
    if info.bit_depth != BIT_DEPTH_24 {
        return Err(invalid(format!(
            "unsupported bit depth {}, only 24-bit images are handled",
            info.bit_depth
        )));
    }
    if info.compression != COMPRESSION_NONE {
        return Err(invalid(format!(
            "compressed pixel data (method {}) is not supported",
            info.compression
        )));
    }
    if info.width <= 0 {
        return Err(invalid(format!("nonpositive width {}", info.width)));
    }
    if info.height == 0 {
        return Err(invalid("zero height".to_string()));
    }
    if info.planes != 1 {
        // sloppy writers get this wrong; not a hard failure
        log::warn!("ignoring planes field {} (expected 1)", info.planes);
    }
    Ok(())
}

fn invalid(reason: String) -> Error {
    Error::InvalidFormat { reason }
}

fn read_into<R: Read>(reader: &mut R, buf: &mut [u8], context: &'static str) -> Result<()> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Error::TruncatedFile { context }
        } else {
            Error::Io(e)
        }
    })
}
