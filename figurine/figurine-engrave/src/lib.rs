//! Conformal text engraving for pedestal walls.
//!
//! Turns up to two lines of user text into closed solids bent around the
//! pedestal cylinder, ready to be subtracted by the compositor:
//!
//! 1. **Typeset**: `rusttype` lays out the glyphs and emits their outlines,
//!    which are flattened to polygonal contours.
//! 2. **Solidify**: contours are grouped into outer rings and holes, caps
//!    are triangulated with `earcutr`, and walls are extruded to a thin
//!    prism.
//! 3. **Wrap**: the flat block is bent around the cylinder so the text
//!    conforms to the curved wall, recessed to sink below the surface.
//!
//! # Quick Start
//!
//! ```no_run
//! use figurine_engrave::{engrave_lines, EngravingSpec, Typeface};
//!
//! let typeface = Typeface::load("fonts/Roboto-Regular.ttf")?;
//! let spec = EngravingSpec::new("For Mom", "Love, Alex")?;
//!
//! let lines = engrave_lines(&spec, &typeface, 1.6, 0.4)?;
//! assert_eq!(lines.len(), 2);
//! # Ok::<(), figurine_engrave::EngraveError>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod block;
mod error;
mod lines;
mod outline;
mod spec;
mod typeface;
mod wrap;

pub use error::{EngraveError, EngraveResult};
pub use lines::{engrave_lines, EngravedLine, TEXT_DEPTH, TEXT_RECESS};
pub use spec::{EngravingSpec, MAX_LINE_CHARS};
pub use typeface::Typeface;
pub use wrap::wrap_to_cylinder;
