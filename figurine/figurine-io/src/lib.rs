//! STL import/export for keepsake solids.
//!
//! The composed solid leaves the pipeline as STL: either a file on disk
//! (debugging, local slicing) or an in-memory binary payload uploaded to
//! the slicing service. Figurine meshes from the generation service are
//! imported through the same module.
//!
//! # Quick Start
//!
//! ```
//! use figurine_io::{save_stl, load_stl, stl_bytes};
//! use figurine_types::{unit_cube, MeshTopology};
//!
//! let cube = unit_cube();
//!
//! // In-memory payload for upload
//! let payload = stl_bytes(&cube).unwrap();
//! assert!(!payload.is_empty());
//!
//! // File round-trip
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("cube.stl");
//! save_stl(&cube, &path, true).unwrap();
//! let loaded = load_stl(&path).unwrap();
//! assert_eq!(loaded.face_count(), cube.face_count());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod stl;

pub use error::{IoError, IoResult};
pub use stl::{load_stl, save_stl, stl_bytes};
