use custom_debug_derive::Debug;
use itertools::Itertools;

use super::{Colour, GraphError, VertexIndex, DEFAULT_COLOR};

/// Fixed size graph with vertices stored by index.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    #[debug(skip)]
    arc_number: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub index: VertexIndex,
    pub arcs_to: Vec<VertexIndex>,
    pub colour: Colour,
}

impl Graph {
    pub fn new_ordered(n: usize) -> Self {
        let vertices = (0..n)
            .map(|index| Vertex::new(index as VertexIndex, DEFAULT_COLOR))
            .collect();
        Graph {
            vertices,
            arc_number: 0,
        }
    }

    /// Build a graph with one vertex per colour entry.
    pub fn from_colour_list(coloured_vertices: &[Colour]) -> Self {
        let vertices = coloured_vertices
            .iter()
            .enumerate()
            .map(|(index, colour)| Vertex::new(index as VertexIndex, *colour))
            .collect();
        Graph {
            vertices,
            arc_number: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn number_arcs(&self) -> usize {
        self.arc_number
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn get_vertex(&self, index: VertexIndex) -> Result<&Vertex, GraphError> {
        if index < 0 {
            return Err(GraphError(index));
        }
        self.vertices.get(index as usize).ok_or(GraphError(index))
    }

    fn get_vertex_mut(&mut self, index: VertexIndex) -> Result<&mut Vertex, GraphError> {
        if index < 0 {
            return Err(GraphError(index));
        }
        self.vertices
            .get_mut(index as usize)
            .ok_or(GraphError(index))
    }

    /// Add the arc `start -> end`. Adding an arc twice has no effect.
    pub fn add_arc(&mut self, start: VertexIndex, end: VertexIndex) -> Result<(), GraphError> {
        self.get_vertex(end)?;
        let vertex = self.get_vertex_mut(start)?;
        if !vertex.arcs_to.contains(&end) {
            vertex.add_arc(end);
            self.arc_number += 1;
        }
        Ok(())
    }

    /// Add both arcs between `start` and `end`.
    pub fn add_edge(&mut self, start: VertexIndex, end: VertexIndex) -> Result<(), GraphError> {
        self.add_arc(start, end)?;
        self.add_arc(end, start)
    }

    pub fn has_arc(&self, start: VertexIndex, end: VertexIndex) -> Result<bool, GraphError> {
        self.get_vertex(end)?;
        Ok(self.get_vertex(start)?.arcs_to.contains(&end))
    }

    pub fn iterate_arcs(&self) -> impl Iterator<Item = (VertexIndex, VertexIndex)> + '_ {
        self.vertices
            .iter()
            .flat_map(|vertex| vertex.arcs_to.iter().map(move |end| (vertex.index, *end)))
    }

    pub fn set_colours(&mut self, colours: &[Colour]) -> Result<(), GraphError> {
        for (index, colour) in colours.iter().enumerate() {
            self.get_vertex_mut(index as VertexIndex)?.colour = *colour;
        }

        Ok(())
    }

    /// Vertices grouped by colour. Vertices of
    /// the same colour keep their index order.
    pub fn group_colours(&self) -> Vec<&Vertex> {
        self.vertices
            .iter()
            .sorted_by(|a, b| a.colour.cmp(&b.colour))
            .collect()
    }

    /// Graph with the arcs mapped through `permutation`,
    /// i.e. vertex `v` becomes `permutation[v]`.
    pub fn relabel(&self, permutation: &[VertexIndex]) -> Result<Graph, GraphError> {
        let mut relabelled = Graph::new_ordered(self.size());
        for (start, end) in self.iterate_arcs() {
            let new_start = *permutation.get(start as usize).ok_or(GraphError(start))?;
            let new_end = *permutation.get(end as usize).ok_or(GraphError(end))?;
            relabelled.add_arc(new_start, new_end)?;
        }
        for vertex in self.vertices.iter() {
            let new_index = *permutation
                .get(vertex.index as usize)
                .ok_or(GraphError(vertex.index))?;
            relabelled.get_vertex_mut(new_index)?.colour = vertex.colour;
        }
        Ok(relabelled)
    }
}

impl Vertex {
    pub fn new(index: VertexIndex, colour: Colour) -> Self {
        Vertex {
            index,
            arcs_to: Vec::new(),
            colour,
        }
    }

    pub fn add_arc(&mut self, end: VertexIndex) {
        self.arcs_to.push(end);
    }
}
