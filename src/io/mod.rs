//! I/O module for reading object pools and writing them back out

pub mod reader;
pub mod writer;

pub use reader::{
    ImportConfiguration, ImportedPool, InputFormat, PictureImage, PoolImporter,
};
pub use writer::{BinaryWriter, TextWriter};
