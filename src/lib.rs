//! # vtpool
//!
//! A pure Rust decoder for ISO 11783-6 virtual terminal object pools.
//!
//! Pools are accepted in three encodings: the raw binary records of an
//! `.iop` file, the keyword-tagged `.sav` text form, and a C header holding
//! the pool as a byte array with `#define` names for the object ids. Every
//! object is decoded into a typed [`VtObject`], given a unique name and
//! rendered into an XML document; picture graphics are decoded to PNG.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vtpool::PoolImporter;
//!
//! let pool = PoolImporter::from_file("pool.iop")?.import()?;
//! for object in &pool.objects {
//!     println!("{} {}", object.id, object.name);
//! }
//! pool.write_to("out/pool.xml")?;
//! # Ok::<(), vtpool::PoolError>(())
//! ```
//!
//! ## Architecture
//!
//! - `ByteReader` / `ByteWriter` - typed primitives over each encoding
//! - `decode_object` / `encode_object` - one layout per object kind
//! - `NameTable` - the id to name mapping built before rendering
//! - `PoolDocument` - the XML tree

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod error;
pub mod io;
pub mod naming;
pub mod notification;
pub mod objects;
pub mod raster;
pub mod render;
pub mod types;

pub use document::{Element, PoolDocument};
pub use error::{Location, PoolError, Result};
pub use io::{ImportConfiguration, ImportedPool, InputFormat, PictureImage, PoolImporter};
pub use naming::{create_unique_name, NameTable};
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use objects::{Command, CommandType, Macro, ObjectType, PoolObject, VtObject};
pub use raster::{decode_picture, decode_raster, RasterImage};
pub use render::get_line_art;
pub use types::{Color, MacroRef, ObjectId, PlacedRef, Point, Rgb};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_configuration() {
        let config = ImportConfiguration::default();
        assert_eq!(config.dimension, 200);
        assert_eq!(config.std_bitmap_path, "std_bitmaps");
        assert!(!config.skip_unsupported_pictures);
    }
}
