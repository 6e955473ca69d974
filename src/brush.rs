use crate::*;
use windows::core::ComInterface;
use windows::Foundation::Numerics::Matrix3x2 as NativeMatrix;
use windows::Win32::Graphics::{Direct2D::Common::*, Direct2D::*};

/// A solid color brush.
///
/// The brush transform maps brush space onto the space of whatever is drawn
/// with it, after the device context transform.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Brush {
    brush: ID2D1SolidColorBrush,
    handle: ID2D1Brush,
}

impl Brush {
    pub(crate) fn solid_color(dc: &ID2D1DeviceContext, color: impl Into<Rgba>) -> Result<Self> {
        let color: D2D1_COLOR_F = color.into().into();
        let brush = unsafe { dc.CreateSolidColorBrush(&color, None)? };
        let handle = brush.cast()?;
        Ok(Self { brush, handle })
    }

    #[inline]
    pub fn color(&self) -> Rgba {
        unsafe { self.brush.GetColor().into() }
    }

    #[inline]
    pub fn set_color(&self, color: impl Into<Rgba>) {
        let color: D2D1_COLOR_F = color.into().into();
        unsafe {
            self.brush.SetColor(&color);
        }
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        unsafe { self.brush.GetOpacity() }
    }

    #[inline]
    pub fn set_opacity(&self, opacity: f32) {
        unsafe {
            self.brush.SetOpacity(opacity);
        }
    }

    #[inline]
    pub fn transform(&self) -> Matrix3x2 {
        let mut m = NativeMatrix::default();
        unsafe {
            self.brush.GetTransform(&mut m);
        }
        m.into()
    }

    #[inline]
    pub fn set_transform(&self, m: &Matrix3x2) {
        let m: NativeMatrix = (*m).into();
        unsafe {
            self.brush.SetTransform(&m);
        }
    }

    #[inline]
    pub(crate) fn handle(&self) -> &ID2D1Brush {
        &self.handle
    }
}
