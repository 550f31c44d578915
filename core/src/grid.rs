use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::str::FromStr;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cell count of each color, indexed by [`Color::index`].
pub type ColorCounts = [CellCount; Color::COUNT];

/// Working buffer of a single generation attempt, cells may still be unassigned.
#[derive(Clone, Debug, PartialEq)]
pub struct PartialGrid {
    size: GridSize,
    cells: Array2<Option<Color>>,
    assigned: CellCount,
}

impl PartialGrid {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: Array2::from_elem(size.dim(), None),
            assigned: 0,
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn get(&self, index: CellIndex) -> Option<Color> {
        self.cells[self.size.cell_to_nd_index(index)]
    }

    /// Assigns `color` to an unassigned cell. Returns `false` if it was already assigned.
    pub fn assign(&mut self, index: CellIndex, color: Color) -> bool {
        let cell = &mut self.cells[self.size.cell_to_nd_index(index)];
        if cell.is_some() {
            return false;
        }
        *cell = Some(color);
        self.assigned += 1;
        true
    }

    pub fn is_complete(&self) -> bool {
        self.assigned == self.size.total_cells()
    }

    pub fn unassigned_neighbors(&self, index: CellIndex) -> impl Iterator<Item = CellIndex> + '_ {
        self.size
            .neighbors(index)
            .filter(|&neighbor| self.get(neighbor).is_none())
    }

    pub fn cells(&self) -> &Array2<Option<Color>> {
        &self.cells
    }

    /// Freezes the grid, or `None` while any cell is unassigned.
    pub fn finish(self) -> Option<ColorGrid> {
        let cells: Vec<Color> = self.cells.iter().copied().collect::<Option<_>>()?;
        ColorGrid::from_cells(self.size, cells).ok()
    }
}

/// A fully colored grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct ColorGrid {
    size: GridSize,
    cells: Array2<Color>,
}

/// Serialized form, checked against its declared size before becoming a [`ColorGrid`].
#[derive(Deserialize)]
struct GridRepr {
    size: GridSize,
    cells: Array2<Color>,
}

impl TryFrom<GridRepr> for ColorGrid {
    type Error = GameError;

    fn try_from(repr: GridRepr) -> Result<Self> {
        Self::from_array(repr.size, repr.cells)
    }
}

impl ColorGrid {
    /// Builds a grid from row-major colors.
    pub fn from_cells(size: GridSize, cells: Vec<Color>) -> Result<Self> {
        let cells =
            Array2::from_shape_vec(size.dim(), cells).map_err(|_| GameError::InvalidGridShape)?;
        Ok(Self { size, cells })
    }

    /// Wraps a `[height, width]` array, which must match `size`.
    pub fn from_array(size: GridSize, cells: Array2<Color>) -> Result<Self> {
        let [rows, cols] = size.dim();
        if cells.dim() != (rows, cols) {
            return Err(GameError::InvalidGridShape);
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn get(&self, index: CellIndex) -> Option<Color> {
        self.size.contains(index).then(|| self[index])
    }

    pub fn cells(&self) -> &Array2<Color> {
        &self.cells
    }

    /// Colors in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.cells.iter().copied()
    }

    pub fn color_counts(&self) -> ColorCounts {
        let mut counts = [0; Color::COUNT];
        for color in self.iter() {
            counts[color.index()] += 1;
        }
        counts
    }

    pub fn first_cell_of(&self, color: Color) -> Option<CellIndex> {
        self.iter()
            .position(|cell| cell == color)
            .and_then(|pos| pos.try_into().ok())
    }
}

impl Index<CellIndex> for ColorGrid {
    type Output = Color;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[self.size.cell_to_nd_index(index)]
    }
}

/// One row per line, one letter per cell.
impl fmt::Display for ColorGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.rows().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for color in row {
                write!(f, "{}", color.letter())?;
            }
        }
        Ok(())
    }
}

/// Parses the [`fmt::Display`] form. Blank lines and surrounding whitespace are ignored, all
/// rows must have the same width.
impl FromStr for ColorGrid {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height: Coord = 0;

        for line in s.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let row_start = cells.len();
            for letter in line.chars() {
                cells.push(Color::from_letter(letter).ok_or(GameError::UnknownColor)?);
            }
            let row_width = cells.len() - row_start;
            if *width.get_or_insert(row_width) != row_width {
                return Err(GameError::InvalidGridShape);
            }
            height = height.checked_add(1).ok_or(GameError::InvalidGridShape)?;
        }

        let width = width
            .and_then(|width| Coord::try_from(width).ok())
            .ok_or(GameError::InvalidGridShape)?;
        Self::from_cells(GridSize::new(width, height), cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    const SAMPLE: &str = "RRRRYYYY
RRRRYYYY
RRGGGYYB
GGGGBBBB
GGGBBBBB";

    #[test]
    fn parse_and_display_agree() {
        let grid: ColorGrid = SAMPLE.parse().unwrap();

        assert_eq!(grid.size(), GridSize::default());
        assert_eq!(grid.to_string(), SAMPLE);
    }

    #[test]
    fn index_is_row_major() {
        let grid: ColorGrid = SAMPLE.parse().unwrap();

        assert_eq!(grid[0], Color::Red);
        assert_eq!(grid[4], Color::Yellow);
        assert_eq!(grid[23], Color::Blue);
        assert_eq!(grid[24], Color::Green);
        assert_eq!(grid.get(40), None);
    }

    #[test]
    fn counts_and_first_cells() {
        let grid: ColorGrid = SAMPLE.parse().unwrap();

        assert_eq!(grid.color_counts(), [10, 10, 10, 10]);
        assert_eq!(grid.first_cell_of(Color::Green), Some(18));
        assert_eq!(grid.first_cell_of(Color::Blue), Some(23));
    }

    #[test]
    fn parse_rejects_ragged_rows_and_unknown_letters() {
        assert_eq!("RRY\nRY".parse::<ColorGrid>(), Err(GameError::InvalidGridShape));
        assert_eq!("RXY".parse::<ColorGrid>(), Err(GameError::UnknownColor));
        assert_eq!("".parse::<ColorGrid>(), Err(GameError::InvalidGridShape));
    }

    #[test]
    fn from_cells_checks_length() {
        let cells = alloc::vec![Color::Red; 39];
        assert_eq!(
            ColorGrid::from_cells(GridSize::default(), cells),
            Err(GameError::InvalidGridShape)
        );
    }

    #[test]
    fn from_array_checks_declared_size() {
        let cells = Array2::from_elem([5, 8], Color::Red);

        assert!(ColorGrid::from_array(GridSize::default(), cells.clone()).is_ok());
        assert_eq!(
            ColorGrid::from_array(GridSize::new(2, 20), cells),
            Err(GameError::InvalidGridShape)
        );
    }

    #[test]
    fn deserialize_rejects_mismatched_size() {
        let grid: ColorGrid = SAMPLE.parse().unwrap();
        let mut value = serde_json::to_value(&grid).unwrap();
        value["size"] = serde_json::json!({ "width": 2, "height": 20 });

        assert!(serde_json::from_value::<ColorGrid>(value).is_err());
        let restored: ColorGrid =
            serde_json::from_value(serde_json::to_value(&grid).unwrap()).unwrap();
        assert_eq!(restored, grid);
    }

    #[test]
    fn partial_grid_finishes_only_when_complete() {
        let size = GridSize::new(2, 1);
        let mut grid = PartialGrid::new(size);

        assert!(grid.assign(0, Color::Blue));
        assert!(!grid.assign(0, Color::Red));
        assert_eq!(grid.unassigned_neighbors(0).collect::<Vec<_>>(), [1]);
        assert_eq!(grid.clone().finish(), None);

        assert!(grid.assign(1, Color::Green));
        let grid = grid.finish().unwrap();
        assert_eq!(grid.iter().collect::<Vec<_>>(), [Color::Blue, Color::Green]);
    }
}
