//! Codec and pixel transforms for uncompressed 24-bit BMP images.
//!
//! The crate decodes the 24-bit uncompressed variant of the format into a
//! flat [`Bitmap`] buffer, offers bounds-checked pixel access and a handful
//! of whole-image transforms, and re-encodes the buffer byte-exactly,
//! row padding included. Other bit depths and compressed variants are
//! rejected with [`Error::InvalidFormat`] rather than guessed at.
//!
//! ```no_run
//! use bmp24::{decode_file, encode_file};
//!
//! fn main() -> bmp24::Result<()> {
//!     let mut img = decode_file("photo.bmp")?;
//!     img.grayscale();
//!     img.rotate_clockwise();
//!     encode_file(&img, "photo_rotated.bmp")?;
//!     Ok(())
//! }
//! ```
//!
//! Buffers are released by `Drop`; there is nothing to free manually.

pub mod bitmap;
pub mod decode;
pub mod encode;
pub mod error;
pub mod pixel;

mod header;
mod transform;

// Re-export the everyday surface
pub use bitmap::Bitmap;
pub use decode::{decode, decode_bytes, decode_file};
pub use encode::{encode, encode_file, encode_vec};
pub use error::{Error, Result};
pub use pixel::Pixel;
