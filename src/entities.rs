pub mod download;
pub mod format;
pub mod media;

pub use download::Download;
pub use format::MediaFormat;
pub use media::{ExtractedMedia, LookupMedia};
