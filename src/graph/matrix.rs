//! Dense graph store: fixed-size adjacency matrix with an explicit "no edge" cell.

use std::collections::BTreeMap;

use crate::types::{validate_weight, GraphError, GraphMode, GraphResult, Vertex, UNIT_WEIGHT};

use super::Graph;

/// Adjacency matrix over a vertex set fixed at construction.
///
/// Cells hold `None` where there is no edge, so a large finite weight is never
/// confused with a missing one. Used by the spanning-tree and shortest-path
/// algorithms for O(1) pair lookups.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix<V: Vertex> {
    /// Vertex at each row/column index.
    vertices: Vec<V>,
    /// Reverse lookup: vertex -> index.
    index: BTreeMap<V, usize>,
    /// Row-major cells, `size * size`.
    cells: Vec<Option<f64>>,
    directed: bool,
}

impl<V: Vertex> AdjacencyMatrix<V> {
    /// Create an empty matrix over the given vertices, in the given order.
    pub fn new(vertices: Vec<V>, directed: bool) -> GraphResult<Self> {
        let mut index = BTreeMap::new();
        for (i, v) in vertices.iter().enumerate() {
            if index.insert(v.clone(), i).is_some() {
                return Err(GraphError::InvalidInput(format!(
                    "vertex {:?} declared twice",
                    v
                )));
            }
        }
        let size = vertices.len();
        Ok(Self {
            vertices,
            index,
            cells: vec![None; size * size],
            directed,
        })
    }

    /// Build over vertices already known to be distinct.
    pub(crate) fn from_sorted(vertices: Vec<V>, directed: bool) -> Self {
        let index = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        let size = vertices.len();
        Self {
            vertices,
            index,
            cells: vec![None; size * size],
            directed,
        }
    }

    /// Number of vertices (rows).
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Whether edges are mirrored on insertion.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Vertices in index order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Index of a vertex, if it belongs to the matrix.
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// Index of a vertex, or `UnknownVertex`.
    pub fn require_index(&self, vertex: &V) -> GraphResult<usize> {
        self.index_of(vertex).ok_or_else(|| GraphError::unknown(vertex))
    }

    /// Vertex at an index.
    pub fn vertex_at(&self, index: usize) -> GraphResult<&V> {
        self.vertices.get(index).ok_or(GraphError::IndexOutOfBounds {
            index,
            size: self.size(),
        })
    }

    /// Weight of the edge `i -> j`, `None` if absent.
    pub fn weight_at(&self, i: usize, j: usize) -> GraphResult<Option<f64>> {
        self.check(i)?;
        self.check(j)?;
        Ok(self.cell(i, j))
    }

    /// Set the edge `i -> j` (and `j -> i` when undirected), replacing any weight.
    pub fn set_weight_at(&mut self, i: usize, j: usize, weight: f64) -> GraphResult<()> {
        self.check(i)?;
        self.check(j)?;
        let weight = validate_weight(weight)?;
        self.store(i, j, weight);
        Ok(())
    }

    /// Add an edge by vertex label. Returns false if the pair already had an edge.
    pub fn add_edge(&mut self, source: &V, target: &V, weight: f64) -> GraphResult<bool> {
        let i = self.require_index(source)?;
        let j = self.require_index(target)?;
        let weight = validate_weight(weight)?;
        if self.cell(i, j).is_some() {
            return Ok(false);
        }
        self.store(i, j, weight);
        Ok(true)
    }

    /// Outgoing edges of row `i` as `(column, weight)`, ascending by column.
    pub fn row(&self, i: usize) -> GraphResult<impl Iterator<Item = (usize, f64)> + '_> {
        self.check(i)?;
        Ok(self.edges_from(i))
    }

    /// Sparse copy of this matrix. Unweighted conversion drops the stored weights.
    pub fn to_graph(&self, weighted: bool) -> GraphResult<Graph<V>> {
        let mut graph = Graph::new(GraphMode::new(self.directed, weighted));
        for v in &self.vertices {
            graph.add_vertex(v.clone());
        }
        for i in 0..self.size() {
            for (j, weight) in self.edges_from(i) {
                graph.add_edge(
                    self.vertices[i].clone(),
                    self.vertices[j].clone(),
                    weighted.then_some(weight),
                )?;
            }
        }
        Ok(graph)
    }

    /// Row `i` without the bounds check; `i` must be below `size()`.
    pub(crate) fn edges_from(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let size = self.size();
        self.cells[i * size..(i + 1) * size]
            .iter()
            .enumerate()
            .filter_map(|(j, cell)| cell.map(|w| (j, w)))
    }

    pub(crate) fn cell(&self, i: usize, j: usize) -> Option<f64> {
        self.cells[i * self.size() + j]
    }

    pub(crate) fn store(&mut self, i: usize, j: usize, weight: f64) {
        let size = self.size();
        self.cells[i * size + j] = Some(weight);
        if !self.directed {
            self.cells[j * size + i] = Some(weight);
        }
    }

    fn check(&self, index: usize) -> GraphResult<()> {
        if index < self.size() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfBounds {
                index,
                size: self.size(),
            })
        }
    }
}

impl AdjacencyMatrix<usize> {
    /// Create an empty matrix over the indices `0..size`.
    pub fn with_size(size: usize, directed: bool) -> Self {
        Self::from_sorted((0..size).collect(), directed)
    }

    /// Build from square rows where `None` marks a missing edge.
    ///
    /// An undirected matrix must be symmetric; the first mismatched pair is
    /// `InvalidInput`.
    pub fn from_rows(rows: &[Vec<Option<f64>>], directed: bool) -> GraphResult<Self> {
        let size = rows.len();
        let mut matrix = Self::with_size(size, directed);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(GraphError::InvalidInput(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            for (j, cell) in row.iter().enumerate() {
                if let Some(w) = cell {
                    matrix.cells[i * size + j] = Some(validate_weight(*w)?);
                }
            }
        }
        if !directed {
            for i in 0..size {
                for j in i + 1..size {
                    if matrix.cell(i, j) != matrix.cell(j, i) {
                        return Err(GraphError::InvalidInput(format!(
                            "undirected matrix is not symmetric at ({}, {})",
                            i, j
                        )));
                    }
                }
            }
        }
        Ok(matrix)
    }

    /// Build from square 0/1 rows; any non-zero entry is a unit-weight edge.
    pub fn from_binary_rows(rows: &[Vec<u8>], directed: bool) -> GraphResult<Self> {
        let rows: Vec<Vec<Option<f64>>> = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&cell| (cell != 0).then_some(UNIT_WEIGHT))
                    .collect()
            })
            .collect();
        Self::from_rows(&rows, directed)
    }
}
