//! Matrix collection type.

use std::fmt;

use super::Value;

/// N-dimensional matrix with row-major element storage.
///
/// `Matrix` and `Array` are distinct dispatch tags that share the
/// "matrix-like" collection behavior: elementwise operations map over
/// the flat data and keep the shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<Value>,
    shape: Vec<usize>,
}

impl Matrix {
    /// Create a matrix from row-major data and a shape.
    ///
    /// The data length must equal the product of the shape dimensions.
    pub fn new(data: Vec<Value>, shape: Vec<usize>) -> Matrix {
        debug_assert_eq!(
            data.len(),
            shape.iter().product::<usize>(),
            "matrix data length must match shape"
        );
        Matrix { data, shape }
    }

    /// Create a 2-D matrix from rows of equal length.
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Matrix {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        debug_assert!(
            rows.iter().all(|r| r.len() == ncols),
            "matrix rows must have equal length"
        );
        let data = rows.into_iter().flatten().collect();
        Matrix::new(data, vec![nrows, ncols])
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Row-major element storage.
    pub fn data(&self) -> &[Value] {
        &self.data
    }

    /// Total number of elements.
    pub fn element_count(&self) -> usize {
        self.data.len()
    }

    /// Element at a multi-dimensional index (row-major).
    pub fn get(&self, index: &[usize]) -> Option<&Value> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut linear = 0;
        for (i, &dim_idx) in index.iter().enumerate() {
            if dim_idx >= self.shape[i] {
                return None;
            }
            linear = linear * self.shape[i] + dim_idx;
        }
        self.data.get(linear)
    }

    /// A new matrix of identical shape with the given row-major data.
    pub fn with_data(&self, data: Vec<Value>) -> Matrix {
        Matrix::new(data, self.shape.clone())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_level(f, &self.data, &self.shape)
    }
}

/// Print one nesting level of a row-major block as `[a, b, ...]`.
fn fmt_level(f: &mut fmt::Formatter<'_>, data: &[Value], shape: &[usize]) -> fmt::Result {
    match shape {
        [] => match data.first() {
            Some(v) => write!(f, "{}", v),
            None => Ok(()),
        },
        [_, rest @ ..] => {
            let stride: usize = rest.iter().product();
            write!(f, "[")?;
            for (i, chunk) in data.chunks(stride.max(1)).enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                fmt_level(f, chunk, rest)?;
            }
            write!(f, "]")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(vec![vec![num(1.0), num(2.0)], vec![num(3.0), num(4.0)]]);
        assert_eq!(m.shape(), &[2, 2]);
        assert_eq!(m.element_count(), 4);
        assert_eq!(m.get(&[1, 0]), Some(&num(3.0)));
        assert_eq!(m.get(&[2, 0]), None);
        assert_eq!(m.get(&[0]), None);
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_rows(vec![vec![num(1.0), num(2.0)], vec![num(3.0), num(4.0)]]);
        assert_eq!(m.to_string(), "[[1, 2], [3, 4]]");
    }

    #[test]
    fn test_with_data_keeps_shape() {
        let m = Matrix::new(vec![num(1.0), num(2.0)], vec![1, 2]);
        let n = m.with_data(vec![num(5.0), num(6.0)]);
        assert_eq!(n.shape(), m.shape());
        assert_eq!(n.get(&[0, 1]), Some(&num(6.0)));
    }
}
