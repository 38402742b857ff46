//! Unchecked entry points.
//!
//! These forward straight to `densenauty` with the baked option records
//! and perform no validation at all. nauty assumes correctly sized memory,
//! so every function here is `unsafe`; see [`crate::canon`] for the
//! checked counterparts.
use nauty_Traces_sys::{densenauty, graph, statsblk};
use std::os::raw::c_int;

use crate::options::Settings;

/// Canonical form of `g` with nauty's default partition.
///
/// # Safety
/// `g` and `canonical_graph` must point to `num_setwords * num_vertices`
/// setwords, `labelling`, `partition` and `orbits` to `num_vertices` ints,
/// and `stats` to a valid `statsblk`. nauty may not be entered concurrently
/// unless it was built thread-safe.
#[allow(clippy::too_many_arguments)]
pub unsafe fn baked_options(
    g: *mut graph,
    labelling: *mut c_int,
    partition: *mut c_int,
    orbits: *mut c_int,
    stats: *mut statsblk,
    num_setwords: c_int,
    num_vertices: c_int,
    canonical_graph: *mut graph,
) {
    call_densenauty(
        Settings::default(),
        g,
        labelling,
        partition,
        orbits,
        stats,
        num_setwords,
        num_vertices,
        canonical_graph,
    )
}

/// Canonical form of `g` respecting the labelling and partition passed in.
///
/// # Safety
/// As for [`baked_options`]. Additionally `labelling` must hold a
/// permutation of the vertices and `partition` must end with 0.
#[allow(clippy::too_many_arguments)]
pub unsafe fn baked_options_color(
    g: *mut graph,
    labelling: *mut c_int,
    partition: *mut c_int,
    orbits: *mut c_int,
    stats: *mut statsblk,
    num_setwords: c_int,
    num_vertices: c_int,
    canonical_graph: *mut graph,
) {
    call_densenauty(
        Settings::coloured(),
        g,
        labelling,
        partition,
        orbits,
        stats,
        num_setwords,
        num_vertices,
        canonical_graph,
    )
}

/// Like [`baked_options`], but nauty's statistics stay local to the call.
///
/// # Safety
/// As for [`baked_options`].
pub unsafe fn baked_options_and_stats(
    g: *mut graph,
    labelling: *mut c_int,
    partition: *mut c_int,
    orbits: *mut c_int,
    num_setwords: c_int,
    num_vertices: c_int,
    canonical_graph: *mut graph,
) {
    let mut stats = statsblk::default();
    call_densenauty(
        Settings::default(),
        g,
        labelling,
        partition,
        orbits,
        &mut stats,
        num_setwords,
        num_vertices,
        canonical_graph,
    )
}

#[allow(clippy::too_many_arguments)]
pub(crate) unsafe fn call_densenauty(
    settings: Settings,
    g: *mut graph,
    labelling: *mut c_int,
    partition: *mut c_int,
    orbits: *mut c_int,
    stats: *mut statsblk,
    num_setwords: c_int,
    num_vertices: c_int,
    canonical_graph: *mut graph,
) {
    let mut options = settings.options();

    densenauty(
        g,
        labelling,
        partition,
        orbits,
        &mut options,
        stats,
        num_setwords,
        num_vertices,
        canonical_graph,
    );
}
