//! Error types for label generation.
//!
//! Every error here is fatal: the generator either writes the whole
//! batch or aborts before producing partial nonsense. There is no retry
//! or recovery path anywhere in the pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for label and sheet generation.
#[derive(Error, Debug)]
pub enum Error {
    /// The device identifier list can't be read.
    #[error("can't read device list {path:?}: {source}")]
    InputUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The label font file is missing or unreadable.
    #[error("can't read font file {path:?}: {source}")]
    FontUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The font file was read but is not a usable TrueType font.
    #[error("font file {path:?} is not a valid TrueType font")]
    FontInvalid { path: PathBuf },

    /// A constant resource bitmap (icon or sheet template) failed to load.
    #[error("can't load resource image {path:?}: {source}")]
    ResourceImage {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The device URL doesn't fit into any QR symbol version.
    ///
    /// Identifiers are never validated, so a pathologically long one
    /// surfaces here at encode time rather than being rejected earlier.
    #[error("device URL doesn't fit in a QR symbol")]
    QrEncode(#[from] qrcode::types::QrError),

    /// A finished sheet could not be written out.
    ///
    /// Also covers a missing or unwritable output directory, which is
    /// only detected at save time.
    #[error("can't write sheet {path:?}: {source}")]
    SheetWrite {
        path: PathBuf,
        source: image::ImageError,
    },
}
