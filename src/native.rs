//! Conversions to the `windows` crate types and the matrix helpers exported by `d2d1.dll`.
//!
//! The helpers here call into Direct2D itself, so their results match what a
//! device context computes bit for bit. The methods of [`Matrix3x2`] compute
//! the same values in Rust.

use crate::*;
use windows::Foundation::Numerics::Matrix3x2 as NativeMatrix;
use windows::Win32::Graphics::{Direct2D::Common::*, Direct2D::*, Dxgi::Common::*};

impl From<Matrix3x2> for NativeMatrix {
    #[inline]
    fn from(src: Matrix3x2) -> Self {
        Self {
            M11: src.m11,
            M12: src.m12,
            M21: src.m21,
            M22: src.m22,
            M31: src.m31,
            M32: src.m32,
        }
    }
}

impl From<NativeMatrix> for Matrix3x2 {
    #[inline]
    fn from(src: NativeMatrix) -> Self {
        Self::new(src.M11, src.M12, src.M21, src.M22, src.M31, src.M32)
    }
}

impl From<Point> for D2D_POINT_2F {
    #[inline]
    fn from(src: Point) -> Self {
        Self { x: src.x, y: src.y }
    }
}

impl From<D2D_POINT_2F> for Point {
    #[inline]
    fn from(src: D2D_POINT_2F) -> Self {
        Self::new(src.x, src.y)
    }
}

impl From<Size> for D2D_SIZE_F {
    #[inline]
    fn from(src: Size) -> Self {
        Self {
            width: src.width,
            height: src.height,
        }
    }
}

impl From<D2D_SIZE_F> for Size {
    #[inline]
    fn from(src: D2D_SIZE_F) -> Self {
        Self::new(src.width, src.height)
    }
}

impl From<Rect> for D2D_RECT_F {
    #[inline]
    fn from(src: Rect) -> Self {
        Self {
            left: src.left,
            top: src.top,
            right: src.right,
            bottom: src.bottom,
        }
    }
}

impl From<D2D_RECT_F> for Rect {
    #[inline]
    fn from(src: D2D_RECT_F) -> Self {
        Self::new(src.left, src.top, src.right, src.bottom)
    }
}

impl From<Rgba> for D2D1_COLOR_F {
    #[inline]
    fn from(src: Rgba) -> Self {
        Self {
            r: src.r,
            g: src.g,
            b: src.b,
            a: src.a,
        }
    }
}

impl From<D2D1_COLOR_F> for Rgba {
    #[inline]
    fn from(src: D2D1_COLOR_F) -> Self {
        Self::new(src.r, src.g, src.b, src.a)
    }
}

impl From<FillMode> for D2D1_FILL_MODE {
    #[inline]
    fn from(src: FillMode) -> Self {
        Self(src as u32)
    }
}

impl From<AntialiasMode> for D2D1_ANTIALIAS_MODE {
    #[inline]
    fn from(src: AntialiasMode) -> Self {
        Self(src as u32)
    }
}

impl From<AlphaMode> for D2D1_ALPHA_MODE {
    #[inline]
    fn from(src: AlphaMode) -> Self {
        Self(src as u32)
    }
}

impl From<CapStyle> for D2D1_CAP_STYLE {
    #[inline]
    fn from(src: CapStyle) -> Self {
        Self(src as u32)
    }
}

impl From<DebugLevel> for D2D1_DEBUG_LEVEL {
    #[inline]
    fn from(src: DebugLevel) -> Self {
        Self(src as u32)
    }
}

impl From<Format> for DXGI_FORMAT {
    #[inline]
    fn from(src: Format) -> Self {
        Self(src as u32)
    }
}

impl TryFrom<DXGI_FORMAT> for Format {
    type Error = Error;

    #[inline]
    fn try_from(src: DXGI_FORMAT) -> Result<Self> {
        Self::try_from(src.0)
    }
}

pub fn rotation(angle: f32, center: impl Into<Point>) -> Matrix3x2 {
    let mut m = NativeMatrix::default();
    unsafe {
        D2D1MakeRotateMatrix(angle, center.into().into(), &mut m);
    }
    m.into()
}

pub fn skew(angle_x: f32, angle_y: f32, center: impl Into<Point>) -> Matrix3x2 {
    let mut m = NativeMatrix::default();
    unsafe {
        D2D1MakeSkewMatrix(angle_x, angle_y, center.into().into(), &mut m);
    }
    m.into()
}

pub fn is_invertible(m: &Matrix3x2) -> bool {
    let m: NativeMatrix = (*m).into();
    unsafe { D2D1IsMatrixInvertible(&m).as_bool() }
}

pub fn invert(m: &Matrix3x2) -> Option<Matrix3x2> {
    let mut m: NativeMatrix = (*m).into();
    unsafe { D2D1InvertMatrix(&mut m).as_bool().then(|| m.into()) }
}
