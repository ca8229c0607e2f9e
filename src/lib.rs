// Public library interface for name-mosaic.
// The binaries (main CLI and debug-fill) build on these modules.

pub mod error;
pub mod fill;
pub mod layout;
pub mod names;
pub mod render;
pub mod source;

pub use error::MosaicError;
