//! Concentration grid storage.

/// Which chemical species to read from a [`Cell`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Species {
    /// Substrate.
    A,
    /// Reagent.
    B,
}

/// Concentrations of both species at one grid cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Substrate concentration, 0.0-1.0.
    pub a: f64,
    /// Reagent concentration, 0.0-1.0.
    pub b: f64,
}

impl Cell {
    /// All substrate, no reagent.
    pub const INITIAL: Cell = Cell { a: 1.0, b: 0.0 };

    /// Concentration of the given species.
    #[inline]
    pub fn get(&self, species: Species) -> f64 {
        match species {
            Species::A => self.a,
            Species::B => self.b,
        }
    }
}

/// A `width x height` grid of [`Cell`]s.
///
/// Cell `(x, y)` lives at index `x * height + y`, so iterating the backing
/// slice visits columns in order.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a grid with every cell at [`Cell::INITIAL`].
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::INITIAL; width as usize * height as usize],
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `(x, y)` lies inside the grid.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        x as usize * self.height as usize + y as usize
    }

    /// Cell at `(x, y)`, or `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Mutable cell at `(x, y)`, or `None` if out of bounds.
    pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let i = self.index(x, y);
            Some(&mut self.cells[i])
        } else {
            None
        }
    }

    /// All cells in storage order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Whether `(x, y)` touches the grid border, meaning its 3x3 stencil
    /// leaves the grid.
    #[inline]
    pub fn on_border(&self, x: u32, y: u32) -> bool {
        x == 0 || y == 0 || x + 1 >= self.width || y + 1 >= self.height
    }

    /// Discrete Laplacian of `species` at `(x, y)`.
    ///
    /// Uses a 3x3 stencil: center -1, orthogonal neighbours 0.2, diagonal
    /// neighbours 0.05. Returns exactly 0.0 for border cells.
    pub fn laplacian(&self, x: u32, y: u32, species: Species) -> f64 {
        if self.on_border(x, y) {
            return 0.0;
        }

        let h = self.height as usize;
        let c = self.index(x, y);
        let at = |i: usize| self.cells[i].get(species);

        let center = at(c);
        let orthogonal = at(c - h) + at(c + h) + at(c - 1) + at(c + 1);
        let diagonal = at(c - h - 1) + at(c - h + 1) + at(c + h - 1) + at(c + h + 1);

        -center + 0.2 * orthogonal + 0.05 * diagonal
    }

    /// Set `b = 1` on every in-bounds cell strictly within `radius` of
    /// `(px, py)`. Returns the number of cells touched.
    pub fn seed_blob(&mut self, px: u32, py: u32, radius: u32) -> usize {
        let r = radius as i64;
        let (px, py) = (px as i64, py as i64);
        let mut seeded = 0;

        for i in (px - r)..(px + r) {
            for j in (py - r)..(py + r) {
                let (dx, dy) = (px - i, py - j);
                if self.contains(i, j) && dx * dx + dy * dy < r * r {
                    let idx = self.index(i as u32, j as u32);
                    self.cells[idx].b = 1.0;
                    seeded += 1;
                }
            }
        }

        seeded
    }

    /// Grayscale RGB bytes, three per cell, in storage order.
    ///
    /// Each channel is `floor((a - b) * 255)` clamped to 0-255.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.cells.len() * 3);
        for cell in &self.cells {
            let c = ((cell.a - cell.b) * 255.0).floor().clamp(0.0, 255.0) as u8;
            data.extend_from_slice(&[c, c, c]);
        }
        data
    }
}
