//! Option records handed to nauty.
//!
//! The two default constructors hand out the bindings' counterparts
//! of nauty's `DEFAULTOPTIONS_GRAPH` and `DEFAULTOPTIONS_DIGRAPH`.
//! [`Settings`] then bakes the handful of overrides every
//! canonicalization call in this crate uses.
use nauty_Traces_sys::{optionblk, FALSE, TRUE, WORDSIZE};

pub use nauty_Traces_sys::CONSOLWIDTH;

/// nauty's default options for undirected graphs.
pub fn default_options_graph() -> optionblk {
    optionblk::default()
}

/// nauty's default options for directed graphs. Differs from the
/// undirected defaults in the digraph flag and the vertex invariant,
/// which is needed to separate vertices of a digraph reliably.
pub fn default_options_digraph() -> optionblk {
    optionblk::default_digraph()
}

/// Number of bits nauty packs into one `setword`.
pub fn word_size() -> usize {
    WORDSIZE as usize
}

/// Configures the option overrides of a canonicalization call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Graph is colored and colors should be
    /// included in the nauty computation, i.e.
    /// the given labelling and partition are
    /// kept as the starting colouring.
    pub colored_graph: bool,
}

impl Settings {
    /// Settings of the coloured entry points.
    pub fn coloured() -> Self {
        Settings {
            colored_graph: true,
        }
    }

    /// Undirected defaults with the canonical form requested and the
    /// graph treated as directed, so asymmetric rows are respected.
    pub fn options(&self) -> optionblk {
        let mut options = default_options_graph();
        options.getcanon = TRUE;
        options.digraph = TRUE;

        if self.colored_graph {
            options.defaultptn = FALSE;
        }

        options
    }
}
