use std::fmt::Display;
use std::io::{self, Write};

/// Row-major grid of per-pixel values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<T>,
}

pub type GlyphGrid = Grid<char>;

impl<T> Grid<T> {
    pub fn new(width: usize, height: usize, cells: Vec<T>) -> Self {
        assert_eq!(width * height, cells.len());
        Self { width, height, cells }
    }

    /// Build a grid by visiting `(row, col)` in row-major order.
    pub fn from_fn<F>(width: usize, height: usize, mut cell: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                cells.push(cell(row, col));
            }
        }
        Self { width, height, cells }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col)
    }

    /// One slice per row; a zero-width grid still yields `height` empty rows.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        let width = self.width;
        (0..self.height).map(move |row| &self.cells[row * width..(row + 1) * width])
    }

    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid { width: self.width, height: self.height, cells: self.cells.iter().map(f).collect() }
    }

    /// Write every cell on its own line after `header`, in row-major order.
    pub fn dump<W, F, D>(&self, out: &mut W, header: &str, mut project: F) -> io::Result<()>
    where
        W: Write,
        F: FnMut(&T) -> D,
        D: Display,
    {
        writeln!(out, "{header}")?;
        for cell in &self.cells {
            writeln!(out, "{}", project(cell))?;
        }
        Ok(())
    }
}

impl GlyphGrid {
    /// Lines of the rendering, each glyph repeated `repeat` times.
    pub fn lines(&self, repeat: usize) -> impl Iterator<Item = String> + '_ {
        self.rows().map(move |row| {
            let mut line = String::with_capacity(row.len() * repeat);
            for &ch in row {
                line.extend(std::iter::repeat(ch).take(repeat));
            }
            line
        })
    }

    pub fn write_to<W: Write>(&self, out: &mut W, repeat: usize) -> io::Result<()> {
        for line in self.lines(repeat) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_is_row_major() {
        let grid = Grid::from_fn(3, 2, |row, col| row * 10 + col);
        assert_eq!(grid.cells, vec![0, 1, 2, 10, 11, 12]);
        assert_eq!(grid.get(1, 2), Some(&12));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn lines_repeat_each_glyph() {
        let grid = GlyphGrid::new(2, 2, vec!['a', 'b', 'c', 'd']);
        let lines: Vec<String> = grid.lines(3).collect();
        assert_eq!(lines, vec!["aaabbb", "cccddd"]);
    }

    #[test]
    fn write_to_ends_each_row_with_newline() {
        let grid = GlyphGrid::new(1, 2, vec!['x', 'y']);
        let mut out = Vec::new();
        grid.write_to(&mut out, 1).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "x\ny\n");
    }

    #[test]
    fn dump_uses_projection() {
        let grid = Grid::new(2, 1, vec![3u8, 250]);
        let mut out = Vec::new();
        grid.dump(&mut out, "Iterating through: ", |value| value + 1).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Iterating through: \n4\n251\n");
    }

    #[test]
    fn empty_grid_has_no_lines() {
        let grid: GlyphGrid = Grid::new(0, 0, Vec::new());
        assert_eq!(grid.lines(3).count(), 0);
    }

    #[test]
    fn zero_width_grid_keeps_its_rows() {
        let grid: GlyphGrid = Grid::new(0, 3, Vec::new());
        let lines: Vec<String> = grid.lines(3).collect();
        assert_eq!(lines, vec![String::new(); 3]);
    }

    #[test]
    #[should_panic]
    fn new_rejects_mismatched_cells() {
        Grid::new(2, 2, vec!['a']);
    }
}
