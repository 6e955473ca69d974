use crate::geometry::*;
use std::ops::Mul;

/// A 3x2 affine transform with the layout of `D2D1_MATRIX_3X2_F`.
///
/// ```text
/// | m11 m12 0 |
/// | m21 m22 0 |
/// | m31 m32 1 |
/// ```
///
/// Points are row vectors, so `p * a * b` applies `a` first and `b` second.
/// Angles are in degrees and a positive angle turns clockwise on a y-down
/// surface.
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Matrix3x2 {
    pub m11: f32,
    pub m12: f32,
    pub m21: f32,
    pub m22: f32,
    pub m31: f32,
    pub m32: f32,
}

impl Matrix3x2 {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    #[inline]
    pub const fn new(m11: f32, m12: f32, m21: f32, m22: f32, m31: f32, m32: f32) -> Self {
        Self {
            m11,
            m12,
            m21,
            m22,
            m31,
            m32,
        }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub const fn from_array(a: [f32; 6]) -> Self {
        Self::new(a[0], a[1], a[2], a[3], a[4], a[5])
    }

    #[inline]
    pub const fn to_array(&self) -> [f32; 6] {
        [self.m11, self.m12, self.m21, self.m22, self.m31, self.m32]
    }

    #[inline]
    pub const fn translation(dx: f32, dy: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    #[inline]
    pub fn translation_by(offset: impl Into<Size>) -> Self {
        let offset = offset.into();
        Self::translation(offset.width, offset.height)
    }

    #[inline]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Scales about `center`, which stays where it is.
    #[inline]
    pub fn scale_at(sx: f32, sy: f32, center: impl Into<Point>) -> Self {
        let c = center.into();
        Self::new(sx, 0.0, 0.0, sy, c.x - sx * c.x, c.y - sy * c.y)
    }

    #[inline]
    pub fn scale_by(factor: impl Into<Size>, center: impl Into<Point>) -> Self {
        let factor = factor.into();
        Self::scale_at(factor.width, factor.height, center)
    }

    #[inline]
    pub fn rotation(angle: f32) -> Self {
        Self::rotation_at(angle, Point::origin())
    }

    pub fn rotation_at(angle: f32, center: impl Into<Point>) -> Self {
        let c = center.into();
        let (sin, cos) = angle.to_radians().sin_cos();
        Self::new(
            cos,
            sin,
            -sin,
            cos,
            c.x - c.x * cos + c.y * sin,
            c.y - c.x * sin - c.y * cos,
        )
    }

    /// `angle_x` leans the y axis toward x, counterclockwise from the y axis.
    /// `angle_y` leans the x axis toward y, clockwise from the x axis.
    #[inline]
    pub fn skew(angle_x: f32, angle_y: f32) -> Self {
        Self::skew_at(angle_x, angle_y, Point::origin())
    }

    pub fn skew_at(angle_x: f32, angle_y: f32, center: impl Into<Point>) -> Self {
        let c = center.into();
        let tan_x = angle_x.to_radians().tan();
        let tan_y = angle_y.to_radians().tan();
        Self::new(1.0, tan_y, tan_x, 1.0, -c.y * tan_x, -c.x * tan_y)
    }

    /// Returns the transform that applies `a` and then `b`.
    #[inline]
    pub fn multiply(a: &Self, b: &Self) -> Self {
        Self {
            m11: a.m11 * b.m11 + a.m12 * b.m21,
            m12: a.m11 * b.m12 + a.m12 * b.m22,
            m21: a.m21 * b.m11 + a.m22 * b.m21,
            m22: a.m21 * b.m12 + a.m22 * b.m22,
            m31: a.m31 * b.m11 + a.m32 * b.m21 + b.m31,
            m32: a.m31 * b.m12 + a.m32 * b.m22 + b.m32,
        }
    }

    #[inline]
    pub fn then(&self, next: &Self) -> Self {
        Self::multiply(self, next)
    }

    #[inline]
    pub fn transform_point(&self, pt: impl Into<Point>) -> Point {
        let pt = pt.into();
        Point::new(
            pt.x * self.m11 + pt.y * self.m21 + self.m31,
            pt.x * self.m12 + pt.y * self.m22 + self.m32,
        )
    }

    /// Axis-aligned bounds of the transformed corners of `rect`.
    pub fn transform_rect(&self, rect: &Rect) -> Rect {
        let corners = [
            self.transform_point((rect.left, rect.top)),
            self.transform_point((rect.right, rect.top)),
            self.transform_point((rect.left, rect.bottom)),
            self.transform_point((rect.right, rect.bottom)),
        ];
        if corners.iter().any(|p| p.x.is_nan() || p.y.is_nan()) {
            return Rect::new(f32::NAN, f32::NAN, f32::NAN, f32::NAN);
        }
        let first = corners[0];
        corners[1..].iter().fold(
            Rect::new(first.x, first.y, first.x, first.y),
            |r, p| Rect::new(r.left.min(p.x), r.top.min(p.y), r.right.max(p.x), r.bottom.max(p.y)),
        )
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        self.m11 * self.m22 - self.m12 * self.m21
    }

    #[inline]
    pub fn is_invertible(&self) -> bool {
        self.determinant() != 0.0
    }

    /// Exact comparison with the identity, no tolerance.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }
        let m11 = self.m22 / det;
        let m12 = -self.m12 / det;
        let m21 = -self.m21 / det;
        let m22 = self.m11 / det;
        Some(Self {
            m11,
            m12,
            m21,
            m22,
            m31: -(self.m31 * m11 + self.m32 * m21),
            m32: -(self.m31 * m12 + self.m32 * m22),
        })
    }

    /// Leaves `self` untouched and returns `false` when the matrix is singular.
    #[inline]
    pub fn invert_in_place(&mut self) -> bool {
        match self.invert() {
            Some(m) => {
                *self = m;
                true
            }
            None => false,
        }
    }
}

impl Default for Matrix3x2 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix3x2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::multiply(&self, &rhs)
    }
}

impl Mul<Matrix3x2> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: Matrix3x2) -> Point {
        rhs.transform_point(self)
    }
}

impl From<[f32; 6]> for Matrix3x2 {
    #[inline]
    fn from(src: [f32; 6]) -> Self {
        Self::from_array(src)
    }
}

impl From<Matrix3x2> for [f32; 6] {
    #[inline]
    fn from(src: Matrix3x2) -> Self {
        src.to_array()
    }
}

impl std::fmt::Display for Matrix3x2 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}, {}, {}]",
            self.m11, self.m12, self.m21, self.m22, self.m31, self.m32
        )
    }
}
