use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Maximal 4-connected set of cells sharing one color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clump {
    pub color: Color,
    pub cells: Vec<CellIndex>,
}

impl Clump {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Union-find over cell indices, with path compression and union by size.
#[derive(Clone, Debug)]
struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl DisjointSets {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: alloc::vec![1; len],
            sets: len,
        }
    }

    fn find(&mut self, item: usize) -> usize {
        let mut root = item;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = item;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let a = self.find(a);
        let b = self.find(b);
        if a == b {
            return;
        }

        let (big, small) = if self.size[a] >= self.size[b] { (a, b) } else { (b, a) };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.sets -= 1;
    }
}

/// Joins every pair of orthogonally adjacent cells holding equal values.
fn connect<T: PartialEq>(cells: &Array2<T>) -> DisjointSets {
    let (rows, cols) = cells.dim();
    let mut sets = DisjointSets::new(rows * cols);

    for ((row, col), value) in cells.indexed_iter() {
        let here = row * cols + col;
        // right and down cover every adjacent pair once
        if col + 1 < cols && cells[[row, col + 1]] == *value {
            sets.union(here, here + 1);
        }
        if row + 1 < rows && cells[[row + 1, col]] == *value {
            sets.union(here, here + cols);
        }
    }

    sets
}

/// Number of connected same-value components over the whole grid, all colors together.
///
/// Values are compared with `==` only, so this also works on partially assigned grids where
/// unassigned cells form components of their own.
pub fn count_clumps<T: PartialEq>(cells: &Array2<T>) -> CellCount {
    connect(cells).sets.try_into().unwrap_or(CellCount::MAX)
}

/// All clumps of the grid, ordered by their lowest cell index.
pub fn find_clumps(grid: &ColorGrid) -> Vec<Clump> {
    let mut sets = connect(grid.cells());
    let mut by_root: BTreeMap<usize, usize> = BTreeMap::new();
    let mut clumps: Vec<Clump> = Vec::new();

    for (index, color) in (0..).zip(grid.iter()) {
        let root = sets.find(usize::from(index));
        let slot = *by_root.entry(root).or_insert_with(|| {
            clumps.push(Clump {
                color,
                cells: Vec::new(),
            });
            clumps.len() - 1
        });
        clumps[slot].cells.push(index);
    }

    clumps
}

impl ColorGrid {
    pub fn clump_count(&self) -> CellCount {
        count_clumps(self.cells())
    }
}
