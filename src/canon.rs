//! Checked entry points over borrowed buffers.
//!
//! Every function validates the buffer shapes against `num_setwords` and
//! `num_vertices` and only then enters nauty. No lock is taken: the
//! bundled nauty keeps its work areas thread-local, so calls on
//! independent buffers may run concurrently.
use nauty_Traces_sys::{setword, statsblk, SETWORDSNEEDED};
use std::{convert::TryFrom, os::raw::c_int, time::Duration};
use tracing::{debug, trace};

use crate::{options::Settings, raw::call_densenauty, statistics::CanonStatistics, time, Error};

/// Safe counterpart of [`crate::raw::baked_options`].
#[allow(clippy::too_many_arguments)]
pub fn canonical_form(
    g: &[setword],
    labelling: &mut [c_int],
    partition: &mut [c_int],
    orbits: &mut [c_int],
    stats: &mut statsblk,
    num_setwords: usize,
    num_vertices: usize,
    canonical_graph: &mut [setword],
) -> Result<(), Error> {
    invoke(
        Settings::default(),
        g,
        labelling,
        partition,
        orbits,
        stats,
        num_setwords,
        num_vertices,
        canonical_graph,
    )?;
    Ok(())
}

/// Safe counterpart of [`crate::raw::baked_options_color`]. The labelling
/// must be a permutation of the vertices and the partition must close
/// its last cell, as nauty keeps them as the starting colouring.
#[allow(clippy::too_many_arguments)]
pub fn canonical_form_coloured(
    g: &[setword],
    labelling: &mut [c_int],
    partition: &mut [c_int],
    orbits: &mut [c_int],
    stats: &mut statsblk,
    num_setwords: usize,
    num_vertices: usize,
    canonical_graph: &mut [setword],
) -> Result<(), Error> {
    invoke(
        Settings::coloured(),
        g,
        labelling,
        partition,
        orbits,
        stats,
        num_setwords,
        num_vertices,
        canonical_graph,
    )?;
    Ok(())
}

/// Safe counterpart of [`crate::raw::baked_options_and_stats`]. nauty's
/// statistics are only traced, never returned.
pub fn canonical_labelling(
    g: &[setword],
    labelling: &mut [c_int],
    partition: &mut [c_int],
    orbits: &mut [c_int],
    num_setwords: usize,
    num_vertices: usize,
    canonical_graph: &mut [setword],
) -> Result<(), Error> {
    let mut stats = statsblk::default();
    let nauty_time = invoke(
        Settings::default(),
        g,
        labelling,
        partition,
        orbits,
        &mut stats,
        num_setwords,
        num_vertices,
        canonical_graph,
    )?;

    let statistics = CanonStatistics::from_stats(&stats, nauty_time);
    trace!(?statistics, "discarding nauty statistics");
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn invoke(
    settings: Settings,
    g: &[setword],
    labelling: &mut [c_int],
    partition: &mut [c_int],
    orbits: &mut [c_int],
    stats: &mut statsblk,
    num_setwords: usize,
    num_vertices: usize,
    canonical_graph: &mut [setword],
) -> Result<Duration, Error> {
    let (m, n) = check_sizes(num_setwords, num_vertices)?;
    let graph_len = num_setwords * num_vertices;
    check_len("graph", g.len(), graph_len)?;
    check_len("canonical_graph", canonical_graph.len(), graph_len)?;
    check_len("labelling", labelling.len(), num_vertices)?;
    check_len("partition", partition.len(), num_vertices)?;
    check_len("orbits", orbits.len(), num_vertices)?;

    if settings.colored_graph {
        check_colouring(labelling, partition)?;
    }

    debug!(
        vertices = num_vertices,
        setwords = num_setwords,
        colored_graph = settings.colored_graph,
        "calling densenauty"
    );

    // Safety: all buffers were checked against m and n above,
    // and nauty does not write to the input graph.
    time!(nauty_time, _done, unsafe {
        call_densenauty(
            settings,
            g.as_ptr() as *mut setword,
            labelling.as_mut_ptr(),
            partition.as_mut_ptr(),
            orbits.as_mut_ptr(),
            &mut *stats,
            m,
            n,
            canonical_graph.as_mut_ptr(),
        )
    });

    debug!(?nauty_time, errstatus = stats.errstatus, "densenauty returned");
    Ok(nauty_time)
}

fn check_sizes(num_setwords: usize, num_vertices: usize) -> Result<(c_int, c_int), Error> {
    if num_vertices == 0 {
        return Err(Error::NoVertices);
    }
    let n = c_int::try_from(num_vertices).map_err(|_| Error::TooManyVertices(num_vertices))?;

    let expected = SETWORDSNEEDED(num_vertices);
    if num_setwords != expected {
        return Err(Error::SetwordsMismatch {
            expected,
            found: num_setwords,
        });
    }
    num_setwords
        .checked_mul(num_vertices)
        .ok_or(Error::TooManyVertices(num_vertices))?;

    // m <= n holds for every n > 0, so this cannot truncate.
    Ok((num_setwords as c_int, n))
}

fn check_len(buffer: &'static str, found: usize, expected: usize) -> Result<(), Error> {
    if found == expected {
        Ok(())
    } else {
        Err(Error::BufferSize {
            buffer,
            expected,
            found,
        })
    }
}

fn check_colouring(labelling: &[c_int], partition: &[c_int]) -> Result<(), Error> {
    let mut seen = vec![false; labelling.len()];
    for vertex in labelling {
        let slot = usize::try_from(*vertex)
            .ok()
            .and_then(|index| seen.get_mut(index))
            .ok_or(Error::InvalidLabelling)?;
        if *slot {
            return Err(Error::InvalidLabelling);
        }
        *slot = true;
    }

    match partition.last() {
        Some(0) => Ok(()),
        _ => Err(Error::UnterminatedPartition),
    }
}

#[cfg(test)]
mod test {
    use nauty_Traces_sys::{empty_graph, ADDONEARC};

    use super::*;

    fn path(n: usize) -> (Vec<setword>, usize) {
        let m = SETWORDSNEEDED(n);
        let mut g = empty_graph(m, n);
        for v in 1..n {
            ADDONEARC(&mut g, v - 1, v, m);
            ADDONEARC(&mut g, v, v - 1, m);
        }
        (g, m)
    }

    #[test]
    fn rejects_zero_vertices() {
        let mut stats = statsblk::default();
        let result = canonical_form(&[], &mut [], &mut [], &mut [], &mut stats, 0, 0, &mut []);
        assert_eq!(result, Err(Error::NoVertices));
    }

    #[test]
    fn rejects_wrong_setword_count() {
        let (g, m) = path(3);
        let mut canonical = g.clone();
        let result = canonical_labelling(
            &g,
            &mut [0; 3],
            &mut [0; 3],
            &mut [0; 3],
            m + 1,
            3,
            &mut canonical,
        );
        assert_eq!(
            result,
            Err(Error::SetwordsMismatch {
                expected: m,
                found: m + 1
            })
        );
    }

    #[test]
    fn rejects_short_buffers() {
        let (g, m) = path(4);
        let mut canonical = g.clone();
        let mut stats = statsblk::default();

        let result = canonical_form(
            &g,
            &mut [0; 4],
            &mut [0; 4],
            &mut [0; 3],
            &mut stats,
            m,
            4,
            &mut canonical,
        );
        assert_eq!(
            result,
            Err(Error::BufferSize {
                buffer: "orbits",
                expected: 4,
                found: 3
            })
        );

        let result = canonical_form(
            &g[..g.len() - 1],
            &mut [0; 4],
            &mut [0; 4],
            &mut [0; 4],
            &mut stats,
            m,
            4,
            &mut canonical,
        );
        assert!(matches!(
            result,
            Err(Error::BufferSize {
                buffer: "graph",
                ..
            })
        ));
    }

    #[test]
    fn rejects_each_wrong_length() {
        let (g, m) = path(4);
        let mut stats = statsblk::default();

        let result = canonical_form(
            &g,
            &mut [0; 4],
            &mut [0; 4],
            &mut [0; 4],
            &mut stats,
            m,
            4,
            &mut empty_graph(m, 5),
        );
        assert_eq!(
            result,
            Err(Error::BufferSize {
                buffer: "canonical_graph",
                expected: 4 * m,
                found: 5 * m
            })
        );

        let mut canonical = empty_graph(m, 4);
        let result = canonical_form(
            &g,
            &mut [0; 5],
            &mut [0; 4],
            &mut [0; 4],
            &mut stats,
            m,
            4,
            &mut canonical,
        );
        assert_eq!(
            result,
            Err(Error::BufferSize {
                buffer: "labelling",
                expected: 4,
                found: 5
            })
        );

        let result = canonical_form_coloured(
            &g,
            &mut [0, 1, 2, 3],
            &mut [1, 0],
            &mut [0; 4],
            &mut stats,
            m,
            4,
            &mut canonical,
        );
        assert_eq!(
            result,
            Err(Error::BufferSize {
                buffer: "partition",
                expected: 4,
                found: 2
            })
        );
    }

    #[test]
    fn rejects_too_many_vertices() {
        let too_many = c_int::MAX as usize + 1;
        let result = canonical_labelling(&[], &mut [], &mut [], &mut [], 1, too_many, &mut []);
        assert_eq!(result, Err(Error::TooManyVertices(too_many)));
    }

    #[test]
    fn rejects_bad_colouring() {
        let (g, m) = path(3);
        let mut canonical = g.clone();
        let mut stats = statsblk::default();

        let result = canonical_form_coloured(
            &g,
            &mut [0, 0, 2],
            &mut [1, 1, 0],
            &mut [0; 3],
            &mut stats,
            m,
            3,
            &mut canonical,
        );
        assert_eq!(result, Err(Error::InvalidLabelling));

        let result = canonical_form_coloured(
            &g,
            &mut [0, 1, 3],
            &mut [1, 1, 0],
            &mut [0; 3],
            &mut stats,
            m,
            3,
            &mut canonical,
        );
        assert_eq!(result, Err(Error::InvalidLabelling));

        let result = canonical_form_coloured(
            &g,
            &mut [2, 1, 0],
            &mut [1, 0, 1],
            &mut [0; 3],
            &mut stats,
            m,
            3,
            &mut canonical,
        );
        assert_eq!(result, Err(Error::UnterminatedPartition));
    }

    #[test]
    fn path_orbits() {
        let (g, m) = path(3);
        let mut labelling = [0; 3];
        let mut partition = [0; 3];
        let mut orbits = [0; 3];
        let mut stats = statsblk::default();
        let mut canonical = empty_graph(m, 3);

        canonical_form(
            &g,
            &mut labelling,
            &mut partition,
            &mut orbits,
            &mut stats,
            m,
            3,
            &mut canonical,
        )
        .unwrap();

        assert_eq!(orbits, [0, 1, 0]);
        assert_eq!(stats.numorbits, 2);
        assert_eq!(stats.grpsize1 as i64, 2);
        let mut sorted_labelling = labelling.to_vec();
        sorted_labelling.sort_unstable();
        assert_eq!(sorted_labelling, [0, 1, 2]);
    }

    #[test]
    fn coloured_endpoint_splits_orbit() {
        let (g, m) = path(3);
        // Vertex 0 alone in the first cell, 1 and 2 in the second.
        let mut labelling = [0, 1, 2];
        let mut partition = [0, 1, 0];
        let mut orbits = [0; 3];
        let mut stats = statsblk::default();
        let mut canonical = empty_graph(m, 3);

        canonical_form_coloured(
            &g,
            &mut labelling,
            &mut partition,
            &mut orbits,
            &mut stats,
            m,
            3,
            &mut canonical,
        )
        .unwrap();

        assert_eq!(orbits, [0, 1, 2]);
        assert_eq!(labelling[0], 0);
    }

    #[test]
    fn labelling_without_stats() {
        let (g, m) = path(5);
        let mut orbits = [0; 5];
        let mut canonical = empty_graph(m, 5);

        canonical_labelling(
            &g,
            &mut [0; 5],
            &mut [0; 5],
            &mut orbits,
            m,
            5,
            &mut canonical,
        )
        .unwrap();

        assert_eq!(orbits, [0, 1, 2, 1, 0]);
    }
}
