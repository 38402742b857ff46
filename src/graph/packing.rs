//! Bit layout of nauty's dense graphs.
//!
//! Row `v` occupies words `v * m .. (v + 1) * m`. Vertex `w` of a row
//! lives in word `w / WORDSIZE`, counted from the most significant bit.
use nauty_Traces_sys::setword;

use crate::options::word_size;

fn bit(position: usize) -> setword {
    let one: setword = 1;
    one << (word_size() - 1 - position % word_size())
}

/// Set the arc `v -> w` in a packed graph with `m` setwords per row.
///
/// # Panics
/// If the addressed setword `v * m + w / WORDSIZE` lies outside `g`.
pub fn pack_arc(g: &mut [setword], m: usize, v: usize, w: usize) {
    g[v * m + w / word_size()] |= bit(w);
}

/// Whether the arc `v -> w` is set in a packed graph with `m` setwords per row.
///
/// # Panics
/// Under the same conditions as [`pack_arc`].
pub fn has_packed_arc(g: &[setword], m: usize, v: usize, w: usize) -> bool {
    g[v * m + w / word_size()] & bit(w) != 0
}

/// All arcs of a packed graph on `n` vertices in row order.
pub fn unpack_arcs(g: &[setword], m: usize, n: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
    itertools::iproduct!(0..n, 0..n).filter(move |&(v, w)| has_packed_arc(g, m, v, w))
}
