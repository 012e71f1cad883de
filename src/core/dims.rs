use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Grid coordinate, `.0` is the row and `.1` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    /// Manhattan distance to `other`
    pub fn manhattan(self, other: Dims) -> usize {
        (self - other).abs_sum() as usize
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

impl AddAssign for Dims {
    fn add_assign(&mut self, other: Dims) {
        self.0 += other.0;
        self.1 += other.1;
    }
}

impl SubAssign for Dims {
    fn sub_assign(&mut self, other: Dims) {
        self.0 -= other.0;
        self.1 -= other.1;
    }
}

impl From<(i32, i32)> for Dims {
    fn from((x, y): (i32, i32)) -> Self {
        Dims(x, y)
    }
}

impl From<Dims> for (i32, i32) {
    fn from(dims: Dims) -> Self {
        (dims.0, dims.1)
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
