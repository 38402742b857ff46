//! Representation of graphs as well as
//! functionalities to build them from
//! simple building blocks and switch
//! to the packed representation nauty reads.
use std::os::raw::c_int;

mod internal_graph;
pub use internal_graph::{Graph, Vertex};

mod nauty_graph;
pub use nauty_graph::{CanonicalForm, NautyGraph, Partition};

mod packing;
pub use packing::{has_packed_arc, pack_arc, unpack_arcs};

pub type Colour = c_int;
pub type VertexIndex = c_int;

pub const DEFAULT_COLOR: Colour = c_int::MAX;

/// A vertex index outside of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphError(pub VertexIndex);
