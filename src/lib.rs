#![warn(rust_2018_idioms)]

//! Canonical labelling of dense graphs through nauty
//! with a fixed set of baked options.
//!
//! [`raw`] mirrors nauty's calling convention and trusts
//! the caller with every buffer. [`canon`] offers the same three
//! entry points over slices and checks their sizes before
//! calling into nauty. [`graph`] builds the packed buffers
//! from a plain vertex list and returns owned results.

mod debug;
pub use debug::Error;

pub mod canon;
pub mod graph;
pub mod options;
pub mod raw;
pub mod statistics;

pub use canon::{canonical_form, canonical_form_coloured, canonical_labelling};
pub use graph::{CanonicalForm, Colour, Graph, GraphError, NautyGraph, Partition, VertexIndex};
pub use options::{default_options_digraph, default_options_graph, word_size, Settings};
pub use statistics::CanonStatistics;
