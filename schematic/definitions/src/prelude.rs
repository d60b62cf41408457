//! Convenient re-exports for calling Dropbox routes.
//!
//! ## Examples
//!
//! ```
//! use schematic_definitions::prelude::*;
//!
//! assert_eq!(paper::ROUTES.len(), 17);
//! assert!(all_routes().any(|r| r.name == "GetSharedLinkMetadata"));
//! ```

pub use crate::dropbox::all_routes;
pub use crate::dropbox::{async_job, file_properties, paper, sharing};

pub use schematic::route::Route;
pub use schematic::{ApiError, Client, ClientConfig, Download};
