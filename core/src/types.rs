use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid width, height, rows and columns.
pub type Coord = u8;

/// Count type used for region sizes and total-cell counts.
pub type CellCount = u16;

/// Row-major cell index, `row * width + col`.
pub type CellIndex = u16;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Dimensions of a grid, `width` columns by `height` rows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: Coord,
    pub height: Coord,
}

impl GridSize {
    pub const fn new(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }

    pub const fn total_cells(self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn contains(self, index: CellIndex) -> bool {
        index < self.total_cells()
    }

    pub const fn row(self, index: CellIndex) -> Coord {
        (index / self.width as CellIndex) as Coord
    }

    pub const fn col(self, index: CellIndex) -> Coord {
        (index % self.width as CellIndex) as Coord
    }

    pub const fn index_of(self, row: Coord, col: Coord) -> CellIndex {
        row as CellIndex * self.width as CellIndex + col as CellIndex
    }

    /// Shape usable with `ndarray`, rows first.
    pub const fn dim(self) -> [usize; 2] {
        [self.height as usize, self.width as usize]
    }

    pub fn cell_to_nd_index(self, index: CellIndex) -> [usize; 2] {
        (self.row(index), self.col(index)).to_nd_index()
    }

    pub const fn is_border(self, index: CellIndex) -> bool {
        let row = self.row(index);
        let col = self.col(index);
        row == 0 || col == 0 || row + 1 == self.height || col + 1 == self.width
    }

    /// Cells on the outer ring, in index order.
    pub fn border_cells(self) -> impl Iterator<Item = CellIndex> {
        (0..self.total_cells()).filter(move |&index| self.is_border(index))
    }

    pub fn neighbors(self, index: CellIndex) -> NeighborIter {
        NeighborIter::new(index, self)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(8, 5)
    }
}

/// `(row, col)`
impl ToNdIndex for (Coord, Coord) {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

#[derive(Copy, Clone, Debug)]
enum Direction {
    Left,
    Right,
    Up,
    Down,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

/// Steps one cell in `direction`, returning a value only when it remains in bounds.
fn step(index: CellIndex, direction: Direction, size: GridSize) -> Option<CellIndex> {
    let width = CellIndex::from(size.width);
    let row = size.row(index);
    let col = size.col(index);

    match direction {
        Direction::Left if col > 0 => Some(index - 1),
        Direction::Right if col + 1 < size.width => Some(index + 1),
        Direction::Up if row > 0 => Some(index - width),
        Direction::Down if row + 1 < size.height => Some(index + width),
        _ => None,
    }
}

/// Orthogonal neighbors of a cell, yielded as left, right, up, down.
#[derive(Debug)]
pub struct NeighborIter {
    center: CellIndex,
    size: GridSize,
    index: u8,
}

impl NeighborIter {
    fn new(center: CellIndex, size: GridSize) -> Self {
        Self {
            center,
            size,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = CellIndex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DIRECTIONS.len() {
                return None;
            }

            let next_item = step(self.center, DIRECTIONS[self.index as usize], self.size);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
