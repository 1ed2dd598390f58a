//! Core mesh types for FigurineForge.
//!
//! This crate provides the foundational types shared by every stage of the
//! figurine pipeline:
//!
//! - [`Vertex`] - A point in 3D space with optional attributes
//! - [`IndexedMesh`] - A triangle mesh with indexed vertices
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Units
//!
//! All coordinates are `f64` in **millimeters**. The material estimator
//! depends on this (PLA density is expressed per mm³).
//!
//! # Coordinate System
//!
//! Uses a **right-handed, Y-up coordinate system**:
//! - X: width (left/right)
//! - Y: height (up/down) — the build-plate normal
//! - Z: depth (front/back)
//!
//! Face winding is **counter-clockwise (CCW) when viewed from outside**.
//! Normals point outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use figurine_types::{Vertex, IndexedMesh, Point3, MeshTopology};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Vertex::new(Point3::new(0.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(1.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(0.5, 1.0, 0.0)));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod mesh;
mod primitives;
mod traits;
mod triangle;
mod vertex;

pub use bounds::Aabb;
pub use mesh::IndexedMesh;
pub use primitives::{cuboid, unit_cube, uv_sphere};
pub use traits::{MeshBounds, MeshTopology};
pub use triangle::Triangle;
pub use vertex::{Vertex, VertexAttributes, VertexColor};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
