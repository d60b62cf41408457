//! Schematic route definitions.
//!
//! This crate contains the route tables and record shapes for the Dropbox
//! `paper`, `sharing` and `file_properties` namespaces, declared with
//! [`schematic::routes!`] and called through [`schematic::Client`].
//!
//! ## Examples
//!
//! ```
//! use schematic::route::Route;
//! use schematic_definitions::dropbox::sharing::{self, ListFolders};
//!
//! assert_eq!(ListFolders::DESCRIPTOR.endpoint(), "sharing/list_folders");
//! assert_eq!(sharing::ROUTES.len(), 42);
//! ```

pub mod dropbox;
pub mod prelude;

pub use dropbox::all_routes;
