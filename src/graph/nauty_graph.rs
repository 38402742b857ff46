use custom_debug_derive::Debug;
use itertools::Itertools;
use nauty_Traces_sys::{empty_graph, setword, statsblk, ADDONEARC, SETWORDSNEEDED};
use std::os::raw::c_int;

use super::{unpack_arcs, Colour, Graph, VertexIndex};
use crate::{canon::invoke, debug::bin_fmt, options::Settings, statistics::CanonStatistics, Error};

/// Turn a colour list that is already grouped by colour into
/// nauty's partition encoding: 0 closes a cell, 1 continues it.
fn encode_colours(partition: &mut [Colour]) {
    let mut last_colour = None;
    for colour in partition.iter_mut().rev() {
        if last_colour != Some(*colour) {
            last_colour = Some(*colour);
            *colour = 0;
        } else {
            *colour = 1;
        }
    }
}

/// A starting colouring in nauty's lab/ptn form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// lab
    pub labelling: Vec<VertexIndex>,
    /// ptn
    pub partition: Vec<VertexIndex>,
}

impl Partition {
    /// Cells ordered by colour, vertices of a cell by index.
    pub fn from_colours(colours: &[Colour]) -> Self {
        let labelling: Vec<VertexIndex> = (0..colours.len())
            .sorted_by_key(|&vertex| colours[vertex])
            .map(|vertex| vertex as VertexIndex)
            .collect();

        let mut partition: Vec<Colour> = labelling
            .iter()
            .map(|&vertex| colours[vertex as usize])
            .collect();
        encode_colours(&mut partition);

        Partition {
            labelling,
            partition,
        }
    }

    /// Cells given explicitly, in order.
    pub fn from_cells(cells: &[Vec<usize>]) -> Self {
        let count = cells.iter().map(Vec::len).sum();
        let mut labelling = Vec::with_capacity(count);
        let mut partition = Vec::with_capacity(count);

        for cell in cells {
            for vertex in cell {
                labelling.push(*vertex as VertexIndex);
                partition.push(1);
            }

            if let Some(last) = partition.last_mut() {
                *last = 0;
            }
        }

        Partition {
            labelling,
            partition,
        }
    }
}

/// nauty signals rejected calls through `errstatus` only.
fn check_status(stats: &statsblk) -> Result<(), Error> {
    match stats.errstatus {
        0 => Ok(()),
        status => Err(Error::Nauty(status)),
    }
}

#[derive(Debug, Clone)]
pub struct NautyGraph {
    /// actual graph
    #[debug(with = "bin_fmt")]
    pub adjacency_matrix: Vec<setword>,
    /// lab
    pub vertex_order: Vec<VertexIndex>,
    /// ptn aka the colouring
    pub partition: Vec<VertexIndex>,
}

/// Owned result of a canonicalization.
#[derive(Debug, Clone)]
pub struct CanonicalForm {
    /// canonically relabelled graph
    #[debug(with = "bin_fmt")]
    pub graph: Vec<setword>,
    /// vertex `labelling[i]` of the input became vertex `i`
    pub labelling: Vec<VertexIndex>,
    pub orbits: Vec<VertexIndex>,
    pub statistics: CanonStatistics,
    #[debug(skip)]
    setwords: usize,
}

impl NautyGraph {
    pub fn from_graph(graph: &Graph) -> NautyGraph {
        let n = graph.size();
        let m = SETWORDSNEEDED(n);
        let mut adjacency_matrix = empty_graph(m, n);

        for (start, end) in graph.iterate_arcs() {
            ADDONEARC(&mut adjacency_matrix, start as usize, end as usize, m);
        }

        let colours = graph
            .vertices()
            .iter()
            .map(|vertex| vertex.colour)
            .collect_vec();
        let Partition {
            labelling,
            partition,
        } = Partition::from_colours(&colours);

        NautyGraph {
            adjacency_matrix,
            vertex_order: labelling,
            partition,
        }
    }

    pub fn check_valid(&self) -> bool {
        let n = self.partition.len();
        let m = SETWORDSNEEDED(n);

        self.adjacency_matrix.len() == n * m && self.vertex_order.len() == n
    }

    /// Number of vertices and setwords per row.
    pub fn graph_repr_sizes(&self) -> (usize, usize) {
        let n = self.partition.len();
        (n, SETWORDSNEEDED(n))
    }

    /// Canonical form ignoring vertex colours.
    pub fn canonical_form(&self) -> Result<CanonicalForm, Error> {
        self.canonicalize(Settings::default())
    }

    /// Canonical form respecting the colouring in `vertex_order`/`partition`.
    pub fn canonical_form_coloured(&self) -> Result<CanonicalForm, Error> {
        self.canonicalize(Settings::coloured())
    }

    fn canonicalize(&self, settings: Settings) -> Result<CanonicalForm, Error> {
        let (n, m) = self.graph_repr_sizes();
        let mut labelling = self.vertex_order.clone();
        let mut partition = self.partition.clone();
        let mut orbits = vec![0 as c_int; n];
        let mut stats = statsblk::default();
        let mut canonical_graph = empty_graph(m, n);

        let nauty_time = invoke(
            settings,
            &self.adjacency_matrix,
            &mut labelling,
            &mut partition,
            &mut orbits,
            &mut stats,
            m,
            n,
            &mut canonical_graph,
        )?;

        check_status(&stats)?;

        Ok(CanonicalForm {
            graph: canonical_graph,
            labelling,
            orbits,
            statistics: CanonStatistics::from_stats(&stats, nauty_time),
            setwords: m,
        })
    }
}

impl CanonicalForm {
    pub fn size(&self) -> usize {
        self.labelling.len()
    }

    /// Arcs of the canonical graph in row order.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        unpack_arcs(&self.graph, self.setwords, self.size())
    }
}
