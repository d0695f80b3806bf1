//! Pool import
//!
//! Import runs in two phases. Every record is decoded and named first,
//! in file order; only then is each object rendered, so references to
//! objects later in the file resolve like any other.

pub mod array_reader;
pub mod binary_reader;
pub mod byte_reader;
pub mod command_reader;
pub mod object_reader;
pub mod source;
pub mod text_reader;

pub use array_reader::ArrayReader;
pub use binary_reader::BinaryReader;
pub use byte_reader::ByteReader;
pub use command_reader::{decode_command, decode_macro};
pub use object_reader::{decode_object, read_record, RawRecord};
pub use text_reader::TextReader;

use crate::document::PoolDocument;
use crate::error::{PoolError, Result};
use crate::io::writer::{encode_record, BinaryWriter, TextWriter};
use crate::naming::NameTable;
use crate::notification::{NotificationCollection, NotificationType};
use crate::objects::{PoolObject, VtObject};
use crate::raster::{decode_picture, RasterImage};
use crate::render::Renderer;
use source::{decode_text, split_sav, HeaderSource};
use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Encoding of a pool source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFormat {
    /// Raw binary records (`.iop`)
    Binary,
    /// Name and desc lines (`.sav`)
    Text,
    /// C array literal with `#define` names (`.h`)
    Header,
}

impl InputFormat {
    /// Select the format by file extension, ignoring case
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("iop") => Ok(Self::Binary),
            Some("sav") => Ok(Self::Text),
            Some("h") => Ok(Self::Header),
            _ => Err(PoolError::UnsupportedInput(format!(
                "unknown pool file type: {}",
                path.display()
            ))),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Binary => "iop",
            Self::Text => "sav",
            Self::Header => "h",
        }
    }
}

/// Configuration for a pool import.
#[derive(Debug, Clone)]
pub struct ImportConfiguration {
    /// Root `dimension` attribute
    pub dimension: u16,
    pub sk_width: u16,
    pub sk_height: u16,
    pub fix_bitmap_path: String,
    /// Directory pictures are written to, relative to the XML output
    pub std_bitmap_path: String,
    /// When `true`, pictures in an unsupported format are rendered without
    /// a file and reported as notifications instead of failing the import.
    ///
    /// Default: `false`
    pub skip_unsupported_pictures: bool,
}

impl Default for ImportConfiguration {
    fn default() -> Self {
        Self {
            dimension: 200,
            sk_width: 60,
            sk_height: 32,
            fix_bitmap_path: "fix_bitmaps".to_string(),
            std_bitmap_path: "std_bitmaps".to_string(),
            skip_unsupported_pictures: false,
        }
    }
}

/// A decoded picture, written next to the document
#[derive(Debug, Clone)]
pub struct PictureImage {
    /// Assigned name of the picture object
    pub name: String,
    pub image: RasterImage,
}

/// Result of a successful import
#[derive(Debug, Clone)]
pub struct ImportedPool {
    /// Objects in file order
    pub objects: Vec<PoolObject>,
    pub names: NameTable,
    pub document: PoolDocument,
    pub images: Vec<PictureImage>,
    pub notifications: NotificationCollection,
    pub config: ImportConfiguration,
}

impl ImportedPool {
    /// Write every picture under the bitmap path next to `xml_path`, then the document.
    ///
    /// The document is written last, through a temporary file renamed into
    /// place, so it only appears once all of its pictures exist.
    pub fn write_to<P: AsRef<Path>>(&self, xml_path: P) -> Result<()> {
        let xml_path = xml_path.as_ref();
        let directory = xml_path.parent().unwrap_or_else(|| Path::new(""));
        if !directory.as_os_str().is_empty() {
            fs::create_dir_all(directory)?;
        }

        if !self.images.is_empty() {
            let bitmaps = directory.join(&self.config.std_bitmap_path);
            fs::create_dir_all(&bitmaps)?;
            for picture in &self.images {
                let path = bitmaps.join(format!("{}.png", picture.name));
                picture.image.save_with_format(&path, image::ImageFormat::Png)?;
                debug!(path = %path.display(), "wrote picture");
            }
        }

        let xml = self.document.to_xml_string()?;
        let mut partial = xml_path.as_os_str().to_os_string();
        partial.push(".part");
        let partial = PathBuf::from(partial);
        fs::write(&partial, xml)?;
        if let Err(e) = fs::rename(&partial, xml_path) {
            let _ = fs::remove_file(&partial);
            return Err(e.into());
        }

        info!(
            path = %xml_path.display(),
            pictures = self.images.len(),
            "wrote object pool"
        );
        Ok(())
    }

    /// Re-encode the pool as binary records
    pub fn write_iop<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = BinaryWriter::new(BufWriter::new(writer));
        for object in &self.objects {
            encode_record(object.id, &object.body, &mut writer)?;
        }
        writer.into_inner().flush()?;
        Ok(())
    }

    /// Re-encode the pool as name and desc lines
    pub fn write_sav<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = TextWriter::new(BufWriter::new(writer));
        for object in &self.objects {
            encode_record(object.id, &object.body, &mut writer)?;
            writer.end_record(&object.name)?;
        }
        writer.into_inner().flush()?;
        Ok(())
    }

    /// Write the pool re-encoded in `format` to `path`
    pub fn write_pool<P: AsRef<Path>>(&self, path: P, format: InputFormat) -> Result<()> {
        let file = File::create(path)?;
        match format {
            InputFormat::Binary => self.write_iop(file),
            InputFormat::Text => self.write_sav(file),
            InputFormat::Header => Err(PoolError::UnsupportedInput(
                "header output is not supported".to_string(),
            )),
        }
    }
}

/// A decoded record with the name its source declares, if any
struct DeclaredRecord {
    record: RawRecord,
    declared: Option<String>,
}

/// Object pool importer
pub struct PoolImporter {
    format: InputFormat,
    bytes: Vec<u8>,
    config: ImportConfiguration,
}

impl PoolImporter {
    /// Read a pool file; the format follows the extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = InputFormat::from_path(path)?;
        let bytes = fs::read(path)?;
        Ok(Self::from_bytes(format, bytes))
    }

    /// Import from an in-memory source
    pub fn from_bytes(format: InputFormat, bytes: Vec<u8>) -> Self {
        Self {
            format,
            bytes,
            config: ImportConfiguration::default(),
        }
    }

    /// Set the import configuration.
    pub fn with_configuration(mut self, config: ImportConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Decode, name and render the whole pool.
    pub fn import(self) -> Result<ImportedPool> {
        let records = self.decode_records()?;

        let mut names = NameTable::new();
        let mut objects = Vec::with_capacity(records.len());
        let mut locations = Vec::with_capacity(records.len());
        for DeclaredRecord { record, declared } in records {
            let kind = record.body.object_type().name();
            let declared = declared.as_deref().unwrap_or("");
            let name = names.assign(record.id, declared, kind, record.location)?;
            debug!(id = record.id.value(), kind, %name, "decoded object");
            objects.push(PoolObject::new(record.id, name, record.body));
            locations.push(record.location);
        }

        let mut notifications = NotificationCollection::new();
        let mut document = PoolDocument::new(&self.config);
        let mut images = Vec::new();
        let renderer = Renderer::new(&names);

        for (object, &location) in objects.iter().zip(&locations) {
            for id in object.body.references() {
                if !names.contains(id) {
                    warn!(object = %object.name, id = id.value(), "reference to missing object");
                    notifications.notify(
                        NotificationType::Warning,
                        &object.name,
                        format!("refers to missing object {id}"),
                    );
                }
            }

            let mut element = renderer.render_object(object);
            if let VtObject::PictureGraphic(picture) = &object.body {
                match decode_picture(picture) {
                    Ok(image) => {
                        element.set_attribute(
                            "file",
                            format!("{}/{}.png", self.config.std_bitmap_path, object.name),
                        );
                        images.push(PictureImage {
                            name: object.name.clone(),
                            image,
                        });
                    }
                    Err(PoolError::UnsupportedPictureFormat(reason))
                        if self.config.skip_unsupported_pictures =>
                    {
                        warn!(picture = %object.name, %reason, "skipping picture");
                        notifications.notify(
                            NotificationType::NotSupported,
                            &object.name,
                            format!("picture not decoded: {reason}"),
                        );
                    }
                    Err(e) => {
                        return Err(PoolError::InvalidPicture {
                            name: object.name.clone(),
                            location,
                            source: Box::new(e),
                        })
                    }
                }
            }
            document.push_object(element);
        }

        info!(
            format = self.format.extension(),
            objects = objects.len(),
            pictures = images.len(),
            "imported object pool"
        );

        Ok(ImportedPool {
            objects,
            names,
            document,
            images,
            notifications,
            config: self.config,
        })
    }

    fn decode_records(&self) -> Result<Vec<DeclaredRecord>> {
        let mut records = Vec::new();
        match self.format {
            InputFormat::Binary => {
                let mut reader = BinaryReader::new(Cursor::new(self.bytes.as_slice()));
                while !reader.is_at_end()? {
                    records.push(DeclaredRecord {
                        record: read_record(&mut reader)?,
                        declared: None,
                    });
                }
            }
            InputFormat::Header => {
                let source = HeaderSource::parse(&decode_text(&self.bytes))?;
                let mut reader = ArrayReader::from_source(&source);
                while !reader.is_at_end()? {
                    let record = read_record(&mut reader)?;
                    let declared = source.names.get(&record.id.value()).cloned();
                    records.push(DeclaredRecord { record, declared });
                }
            }
            InputFormat::Text => {
                for sav in split_sav(&decode_text(&self.bytes))? {
                    let mut reader = TextReader::from_line(&sav.desc, sav.line)?;
                    let record = read_record(&mut reader)?;
                    reader.finish()?;
                    records.push(DeclaredRecord {
                        record,
                        declared: Some(sav.name),
                    });
                }
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_path("pool.IOP").unwrap(), InputFormat::Binary);
        assert_eq!(InputFormat::from_path("a/b/pool.sav").unwrap(), InputFormat::Text);
        assert_eq!(InputFormat::from_path("pool.h").unwrap(), InputFormat::Header);
        assert!(matches!(
            InputFormat::from_path("pool.xml"),
            Err(PoolError::UnsupportedInput(_))
        ));
    }

    #[test]
    fn test_empty_binary_pool() {
        let pool = PoolImporter::from_bytes(InputFormat::Binary, Vec::new())
            .import()
            .unwrap();
        assert!(pool.objects.is_empty());
        assert!(pool.document.objects().is_empty());
    }

    #[test]
    fn test_truncated_binary_pool() {
        let err = PoolImporter::from_bytes(InputFormat::Binary, vec![0x01, 0x00, 21, 0x00])
            .import()
            .unwrap_err();
        assert!(matches!(err, PoolError::UnexpectedEndOfStream { offset: 3 }));
    }

    #[test]
    fn test_binary_names_by_kind() {
        let bytes = vec![
            0x01, 0x00, 21, 1, 0, 0, 0, // numbervariable
            0x02, 0x00, 21, 2, 0, 0, 0, // numbervariable
        ];
        let pool = PoolImporter::from_bytes(InputFormat::Binary, bytes)
            .import()
            .unwrap();
        let names: Vec<&str> = pool.objects.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["numbervariable0", "numbervariable1"]);
    }

    #[test]
    fn test_duplicate_id_fails() {
        let bytes = vec![0x01, 0x00, 21, 1, 0, 0, 0, 0x01, 0x00, 21, 2, 0, 0, 0];
        let err = PoolImporter::from_bytes(InputFormat::Binary, bytes)
            .import()
            .unwrap_err();
        assert!(matches!(
            err,
            PoolError::DuplicateObjectId { id: 1, location: crate::error::Location::Offset(7) }
        ));
    }
}
