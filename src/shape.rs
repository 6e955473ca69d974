use crate::*;
use windows::Win32::Graphics::{Direct2D::Common::*, Direct2D::*};

pub trait Fill {
    fn fill(&self, dc: &ID2D1DeviceContext, brush: &ID2D1Brush);
}

pub trait Stroke {
    fn stroke(&self, dc: &ID2D1DeviceContext, brush: &ID2D1Brush, width: f32);
}

impl From<Ellipse> for D2D1_ELLIPSE {
    #[inline]
    fn from(src: Ellipse) -> Self {
        Self {
            point: src.center.into(),
            radiusX: src.radius_x,
            radiusY: src.radius_y,
        }
    }
}

impl Fill for Rect {
    #[inline]
    fn fill(&self, dc: &ID2D1DeviceContext, brush: &ID2D1Brush) {
        let rect: D2D_RECT_F = (*self).into();
        unsafe {
            dc.FillRectangle(&rect, brush);
        }
    }
}

impl Stroke for Rect {
    #[inline]
    fn stroke(&self, dc: &ID2D1DeviceContext, brush: &ID2D1Brush, width: f32) {
        let rect: D2D_RECT_F = (*self).into();
        unsafe {
            dc.DrawRectangle(&rect, brush, width, None::<&ID2D1StrokeStyle>);
        }
    }
}

impl Fill for Ellipse {
    #[inline]
    fn fill(&self, dc: &ID2D1DeviceContext, brush: &ID2D1Brush) {
        let ellipse: D2D1_ELLIPSE = (*self).into();
        unsafe {
            dc.FillEllipse(&ellipse, brush);
        }
    }
}

impl Stroke for Ellipse {
    #[inline]
    fn stroke(&self, dc: &ID2D1DeviceContext, brush: &ID2D1Brush, width: f32) {
        let ellipse: D2D1_ELLIPSE = (*self).into();
        unsafe {
            dc.DrawEllipse(&ellipse, brush, width, None::<&ID2D1StrokeStyle>);
        }
    }
}

impl Stroke for Line {
    #[inline]
    fn stroke(&self, dc: &ID2D1DeviceContext, brush: &ID2D1Brush, width: f32) {
        unsafe {
            dc.DrawLine(
                self.0.into(),
                self.1.into(),
                brush,
                width,
                None::<&ID2D1StrokeStyle>,
            );
        }
    }
}
