use std::ops::{Add, Sub};

/// Position or size on the board.
///
/// `.0` is the column (x), `.1` is the row (y). Sizes follow the same order, so a
/// grid with 3 rows and 5 columns has size `Dims(5, 3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    pub fn new(row: i32, column: i32) -> Self {
        Dims(column, row)
    }

    pub fn row(self) -> i32 {
        self.1
    }

    pub fn column(self) -> i32 {
        self.0
    }

    /// Iterates all positions in `from..to`, row by row.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}
