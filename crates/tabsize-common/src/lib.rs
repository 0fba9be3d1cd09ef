pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, PlatformError};
pub use id::TabIdAllocator;
pub use types::{Rect, Size, TabId};
