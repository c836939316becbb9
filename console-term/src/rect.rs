#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn left(&self) -> u16 {
        self.x
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn top(&self) -> u16 {
        self.y
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn shrink(self, top: u16, right: u16, bottom: u16, left: u16) -> Self {
        let x = self.x.saturating_add(left);
        let y = self.y.saturating_add(top);
        let width = self.width.saturating_sub(left + right);
        let height = self.height.saturating_sub(top + bottom);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrink by one cell on every side (the area inside a border).
    pub fn inner(self) -> Self {
        self.shrink(1, 1, 1, 1)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn intersect(self, other: Rect) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Self {
            x,
            y,
            width: right.saturating_sub(x),
            height: bottom.saturating_sub(y),
        }
    }

    /// Split off `height` rows from the top. Returns (top, rest).
    pub fn split_top(self, height: u16) -> (Self, Self) {
        let h = height.min(self.height);
        (
            Self::new(self.x, self.y, self.width, h),
            Self::new(self.x, self.y + h, self.width, self.height - h),
        )
    }

    /// Split off `height` rows from the bottom. Returns (rest, bottom).
    pub fn split_bottom(self, height: u16) -> (Self, Self) {
        let h = height.min(self.height);
        (
            Self::new(self.x, self.y, self.width, self.height - h),
            Self::new(self.x, self.bottom() - h, self.width, h),
        )
    }

    /// Split off `width` columns from the left. Returns (left, rest).
    pub fn split_left(self, width: u16) -> (Self, Self) {
        let w = width.min(self.width);
        (
            Self::new(self.x, self.y, w, self.height),
            Self::new(self.x + w, self.y, self.width - w, self.height),
        )
    }

    /// Divide horizontally into `count` equal columns separated by `gap`.
    ///
    /// Leftover columns go to the last cell.
    pub fn columns(self, count: u16, gap: u16) -> Vec<Self> {
        if count == 0 {
            return Vec::new();
        }
        let gaps = gap.saturating_mul(count - 1);
        let each = self.width.saturating_sub(gaps) / count;
        let mut out = Vec::with_capacity(count as usize);
        let mut x = self.x;
        for i in 0..count {
            let width = if i == count - 1 {
                self.right().saturating_sub(x)
            } else {
                each
            };
            out.push(Self::new(x, self.y, width, self.height));
            x = x.saturating_add(each + gap);
        }
        out
    }
}
