//! A deterministic engine that covers a simple polygon (a room outline) with
//! fixed-size rectangular planks, cutting boundary-crossing planks to fit and
//! tracking the leftover cut-offs for reuse.
//!
//! The engine is a pure, one-shot batch computation over a fixed input
//! snapshot: same [`entities::Instance`] in, same [`entities::Solution`] out.

/// Cutting strategies to trim an oversized plank to the room boundary
pub mod cutting;

/// Entities to model a plank tessellation problem and its solution
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Row-based placement scheduler and the spare ledger
pub mod placement;

/// Helper functions which do not belong to any specific module
pub mod util;
