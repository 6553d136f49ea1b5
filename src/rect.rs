//! Rectangle candidates, the running best, and the reported result.

/// Best rectangle found on a single histogram row.
///
/// `row` is the bottom row of the rectangle and `column_end` its rightmost
/// column; together with `width` and `area` that pins the whole rectangle
/// down, because the area is always `width * limiting height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangleCandidate {
    pub area: usize,
    pub row: usize,
    pub column_end: usize,
    pub width: usize,
}

impl RectangleCandidate {
    /// Height of the rectangle. Exact: `area` is a multiple of `width`.
    #[inline]
    pub fn height(&self) -> usize {
        self.area / self.width
    }

    /// Translate bottom-right anchoring into a top-left [`UniformRectangle`].
    pub fn to_rectangle(&self) -> UniformRectangle {
        let height = self.height();
        UniformRectangle {
            row: self.row + 1 - height,
            column: self.column_end + 1 - self.width,
            width: self.width,
            height,
            area: self.area,
        }
    }
}

/// Running maximum over candidates.
///
/// A candidate only replaces the current best when its area is strictly
/// larger, so among equal areas the first one offered wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestCandidate(Option<RectangleCandidate>);

impl BestCandidate {
    /// Nothing seen yet.
    pub const NONE: BestCandidate = BestCandidate(None);

    /// Area of the current best, 0 when empty.
    #[inline]
    pub fn area(&self) -> usize {
        self.0.map_or(0, |c| c.area)
    }

    #[inline]
    pub fn candidate(&self) -> Option<&RectangleCandidate> {
        self.0.as_ref()
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Offer a candidate; keeps the incumbent on ties.
    #[inline]
    pub fn offer(&mut self, candidate: RectangleCandidate) {
        if candidate.area > self.area() {
            self.0 = Some(candidate);
        }
    }

    /// Combine the best of an earlier range with the best of a later one.
    ///
    /// Associative, and biased towards `self` on ties.
    pub fn merge(self, later: BestCandidate) -> BestCandidate {
        match later.0 {
            Some(c) if c.area > self.area() => later,
            _ => self,
        }
    }

    /// Final result; `None` when no target cell exists.
    pub fn to_rectangle(&self) -> Option<UniformRectangle> {
        self.0.map(|c| c.to_rectangle())
    }
}

impl From<Option<RectangleCandidate>> for BestCandidate {
    fn from(value: Option<RectangleCandidate>) -> Self {
        match value {
            Some(c) if c.area > 0 => BestCandidate(Some(c)),
            _ => BestCandidate::NONE,
        }
    }
}

/// Largest uniform rectangle, anchored at its top-left cell.
///
/// Rows and columns are 0-indexed into the caller's matrix; the rectangle
/// covers `[row, row + height) x [column, column + width)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformRectangle {
    pub row: usize,
    pub column: usize,
    pub width: usize,
    pub height: usize,
    pub area: usize,
}

impl UniformRectangle {
    /// Whether `(row, column)` lies inside the rectangle.
    pub fn contains(&self, row: usize, column: usize) -> bool {
        (self.row..self.row + self.height).contains(&row)
            && (self.column..self.column + self.width).contains(&column)
    }

    /// All covered cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.row..self.row + self.height)
            .flat_map(move |r| (self.column..self.column + self.width).map(move |c| (r, c)))
    }
}
