/// A point with the layout of `D2D_POINT_2F`.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from(src: (f32, f32)) -> Self {
        Self::new(src.0, src.1)
    }
}

impl From<[f32; 2]> for Point {
    #[inline]
    fn from(src: [f32; 2]) -> Self {
        Self::new(src[0], src[1])
    }
}

impl From<Point> for (f32, f32) {
    #[inline]
    fn from(src: Point) -> Self {
        (src.x, src.y)
    }
}

#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// A size with the layout of `D2D_SIZE_F`.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[repr(C)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<(f32, f32)> for Size {
    #[inline]
    fn from(src: (f32, f32)) -> Self {
        Self::new(src.0, src.1)
    }
}

impl From<[f32; 2]> for Size {
    #[inline]
    fn from(src: [f32; 2]) -> Self {
        Self::new(src[0], src[1])
    }
}

#[inline]
pub fn size(width: f32, height: f32) -> Size {
    Size::new(width, height)
}

/// A rectangle with the layout of `D2D_RECT_F`.
///
/// The edges are stored as given; a rectangle whose `right` is less than its
/// `left` is kept as is, the same way Direct2D accepts it.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[repr(C)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn from_origin_size(origin: impl Into<Point>, size: impl Into<Size>) -> Self {
        let origin = origin.into();
        let size = size.into();
        Self::new(
            origin.x,
            origin.y,
            origin.x + size.width,
            origin.y + size.height,
        )
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Left and top edges are inside, right and bottom edges are not.
    #[inline]
    pub fn contains(&self, pt: impl Into<Point>) -> bool {
        let pt = pt.into();
        pt.x >= self.left && pt.x < self.right && pt.y >= self.top && pt.y < self.bottom
    }
}

#[inline]
pub fn rect(origin: impl Into<Point>, size: impl Into<Size>) -> Rect {
    Rect::from_origin_size(origin, size)
}

/// An ellipse with the layout of `D2D1_ELLIPSE`.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[repr(C)]
pub struct Ellipse {
    pub center: Point,
    pub radius_x: f32,
    pub radius_y: f32,
}

impl Ellipse {
    #[inline]
    pub fn new(center: impl Into<Point>, radius_x: f32, radius_y: f32) -> Self {
        Self {
            center: center.into(),
            radius_x,
            radius_y,
        }
    }

    #[inline]
    pub fn circle(center: impl Into<Point>, radius: f32) -> Self {
        Self::new(center, radius, radius)
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius_x,
            self.center.y - self.radius_y,
            self.center.x + self.radius_x,
            self.center.y + self.radius_y,
        )
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Line(pub Point, pub Point);

impl Line {
    #[inline]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Self {
        Self(p0.into(), p1.into())
    }
}

#[inline]
pub fn line(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
    Line::new(p0, p1)
}
