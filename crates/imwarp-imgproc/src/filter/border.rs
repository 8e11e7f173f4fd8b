/// How kernel taps that fall outside the image are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderMode {
    /// Taps outside the image contribute zero. `...0 0 | a b c d | 0 0...`
    Constant,
    /// Taps outside the image read the nearest border pixel. `...a a | a b c d | d d...`
    Replicate,
}

impl BorderMode {
    /// Map a possibly out-of-range index onto an axis of length `len`.
    ///
    /// Returns `None` when the tap contributes nothing.
    pub fn map_index(&self, i: isize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        match self {
            BorderMode::Constant => (i >= 0 && (i as usize) < len).then_some(i as usize),
            BorderMode::Replicate => Some(i.clamp(0, len as isize - 1) as usize),
        }
    }

    /// Resolve the pixel read for the tap at (`row`, `col`) on a `rows` x `cols` image.
    pub(crate) fn resolve(
        &self,
        row: isize,
        col: isize,
        rows: usize,
        cols: usize,
    ) -> Option<(usize, usize)> {
        if rows == 0 || cols == 0 {
            return None;
        }
        match self {
            BorderMode::Constant => Some((self.map_index(row, rows)?, self.map_index(col, cols)?)),
            BorderMode::Replicate => Some(clamp_to_border(row, col, rows, cols)),
        }
    }
}

/// Position of an index relative to an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Before,
    Inside(usize),
    After,
}

fn side(i: isize, len: usize) -> Side {
    if i < 0 {
        Side::Before
    } else if i as usize >= len {
        Side::After
    } else {
        Side::Inside(i as usize)
    }
}

/// Map (`row`, `col`) to the nearest pixel of a `rows` x `cols` image.
///
/// Corners are resolved first, then edges, then the interior.
///
/// PRECONDITION: `rows > 0` and `cols > 0`.
pub(crate) fn clamp_to_border(row: isize, col: isize, rows: usize, cols: usize) -> (usize, usize) {
    let (last_row, last_col) = (rows - 1, cols - 1);
    match (side(row, rows), side(col, cols)) {
        // corners
        (Side::After, Side::After) => (last_row, last_col),
        (Side::After, Side::Before) => (last_row, 0),
        (Side::Before, Side::After) => (0, last_col),
        (Side::Before, Side::Before) => (0, 0),
        // edges
        (Side::After, Side::Inside(c)) => (last_row, c),
        (Side::Inside(r), Side::After) => (r, last_col),
        (Side::Before, Side::Inside(c)) => (0, c),
        (Side::Inside(r), Side::Before) => (r, 0),
        (Side::Inside(r), Side::Inside(c)) => (r, c),
    }
}
