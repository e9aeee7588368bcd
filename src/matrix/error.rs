use derive_more::{Display, Error};

/// Structural errors raised by the matrix and range layers.
///
/// These indicate misuse of the kernel rather than a numerical condition and
/// are never recovered locally; callers propagate them to the top level.
#[derive(Debug, Clone, Display, Error, PartialEq, Eq)]
pub enum MatrixError {
    #[display("cannot construct matrix with zero row/col count ({rows}x{cols})")]
    InvalidShape { rows: usize, cols: usize },

    #[display("cannot access ({row}, {col}) of a {rows}x{cols} matrix")]
    InvalidIndex {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[display("expected a {expected_rows}x{expected_cols} matrix, got {rows}x{cols}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[display("scalar division by zero")]
    DivisionByZero,

    #[display("reduction over a matrix with no elements")]
    Empty,

    #[display("invalid range: empty")]
    EmptyRange,

    #[display("invalid range: start {start} > end {end}")]
    InvalidRange { start: usize, end: usize },
}
