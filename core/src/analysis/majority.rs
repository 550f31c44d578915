use crate::*;

/// Color with the largest cell count, ties go to the lowest color index.
pub fn majority_color(grid: &ColorGrid) -> Color {
    majority_of(&grid.color_counts())
}

pub fn majority_of(counts: &ColorCounts) -> Color {
    let mut best = Color::Red;
    for color in Color::ALL {
        if counts[color.index()] > counts[best.index()] {
            best = color;
        }
    }
    best
}
