//! Debug facilities.
use nauty_Traces_sys::{setword, WORDSIZE};
use std::{fmt, os::raw::c_int};

use crate::graph::GraphError;

// Error types and From<...> implementations

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Graph construction error")]
    Graph(GraphError),
    #[error("nauty needs at least one vertex")]
    NoVertices,
    #[error("{0} vertices do not fit into a C int")]
    TooManyVertices(usize),
    #[error("Expected {expected} setwords per row, found {found}")]
    SetwordsMismatch { expected: usize, found: usize },
    #[error("Buffer `{buffer}` has length {found}, expected {expected}")]
    BufferSize {
        buffer: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Labelling is not a permutation of the vertices")]
    InvalidLabelling,
    #[error("Partition does not close its last cell")]
    UnterminatedPartition,
    #[error("nauty reported error status {0}")]
    Nauty(c_int),
}

impl From<GraphError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(ge: GraphError) -> Self {
        Self::Graph(ge)
    }
}

// Custom formatter for debug printing

#[allow(clippy::ptr_arg)]
#[cfg(not(tarpaulin_include))]
pub fn bin_fmt(vec: &Vec<setword>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let width = WORDSIZE as usize + 2;
    write!(f, "{{")?;
    for word in vec {
        write!(f, "{:#0width$b}", word, width = width)?;
    }
    write!(f, "}}")?;

    Ok(())
}

// Debug macros that allow to time single expressions

#[macro_export]
macro_rules! time {
    ($i:ident, $ret:ident, $exp:expr) => {
        let before = std::time::Instant::now();
        let $ret = $exp;
        let $i = before.elapsed();
    };
}
