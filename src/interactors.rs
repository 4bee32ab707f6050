pub mod base;
pub mod get_lookup_media;
pub mod prepare_download;

pub use base::Interactor;
pub use get_lookup_media::{GetLookupMedia, GetLookupMediaErrorKind, GetLookupMediaInput};
pub use prepare_download::{PrepareDownload, PrepareDownloadInput};
