pub mod converter;
pub mod lookup;

pub use converter::{convert_to_audio, ConvertErrorKind, Converted};
pub use lookup::{lookup, LookupErrorKind};
