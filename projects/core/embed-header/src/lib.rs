//! Turns arbitrary binary files into C++ headers holding a `constexpr` byte array.
//!
//! The output is meant for embedding assets (shaders, fonts, small binaries) directly into
//! a compiled program. Given some bytes, a namespace and a variable name, this crate emits:
//!
//! ```text
//! #pragma once
//! #include <cstddef>
//!
//! namespace shaders {
//!     constexpr unsigned char vertex_src[] = {
//!         0x41, 0x42, 0x00
//!     };
//!
//!     constexpr size_t vertex_src_len = sizeof(vertex_src) - 1;
//! }
//! ```
//!
//! A zero byte is always appended after the real data, so the array is never empty and can
//! be consumed as a null-terminated string. `<variable>_len` excludes that terminator.
//!
//! # Features
//!
//! - `std`: [`std::path::Path`] based helpers such as [`identifier::identifier_from_path`].
//! - `file-io`: [`embed_file`], which reads the input through a read-only memory mapping and
//!   atomically replaces the output file.
//!
//! # Example
//!
//! ```
//! use embed_header::{embed_slice, EmbedTarget, HeaderLayout};
//!
//! let header = embed_slice(b"AB", &EmbedTarget::new("shaders", "vertex_src"), &HeaderLayout::new());
//! assert!(header.contains("        0x41, 0x42, 0x00\n"));
//! assert!(header.contains("constexpr size_t vertex_src_len = sizeof(vertex_src) - 1;"));
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod api;
pub mod encode;
pub mod error;
pub mod format;
pub mod header;
pub mod identifier;
pub mod layout;

#[cfg(feature = "file-io")]
pub mod file_io;

#[cfg(test)]
pub(crate) mod test_prelude;

// Re-export key types
pub use encode::{HexToken, SENTINEL};
pub use error::{EmbedError, EmbedResult};
pub use header::EmbedTarget;
pub use layout::HeaderLayout;

// Re-export convenience functions
pub use api::{embed_slice, EmbedReport};
pub use header::render_header;

#[cfg(feature = "file-io")]
pub use api::embed_file;
