use std::ops;

use crate::core::Dims;

/// Row-major 2D buffer addressed by [`Dims`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    rows: usize,
    columns: usize,
}

impl<T> Array2D<T> {
    pub fn from_fn(rows: usize, columns: usize, mut f: impl FnMut(Dims) -> T) -> Self {
        let buf = (0..rows * columns)
            .map(|i| f(Dims((i / columns) as i32, (i % columns) as i32)))
            .collect();

        Self { buf, rows, columns }
    }

    pub fn size(&self) -> Dims {
        Dims(self.rows as i32, self.columns as i32)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        let Dims(x, y) = pos;
        if x < 0 || y < 0 {
            return None;
        }

        let (x, y) = (x as usize, y as usize);
        if x >= self.rows || y >= self.columns {
            return None;
        }

        Some(x * self.columns + y)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Dims((idx / self.columns) as i32, (idx % self.columns) as i32))
    }

    pub fn contains(&self, pos: Dims) -> bool {
        self.dim_to_idx(pos).is_some()
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    pub fn row(&self, x: usize) -> Option<&[T]> {
        if x >= self.rows {
            return None;
        }

        let start = x * self.columns;
        Some(&self.buf[start..start + self.columns])
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, rows: usize, columns: usize) -> Self {
        Self {
            buf: vec![item; rows * columns],
            rows,
            columns,
        }
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {}", index))
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {}", index))
    }
}
