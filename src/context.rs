use crate::*;
use windows::Foundation::Numerics::Matrix3x2 as NativeMatrix;
use windows::Win32::Graphics::{Direct2D::Common::*, Direct2D::*};

pub type RenderTarget<T> = <T as Backend>::RenderTarget;

pub trait Target {
    fn bitmap(&self) -> &ID2D1Bitmap1;
    fn size(&self) -> Size;
    fn physical_size(&self) -> (u32, u32);
}

pub trait Backend {
    type RenderTarget: Target;

    fn device_context(&self) -> &ID2D1DeviceContext;
    fn begin_draw(&self, target: &Self::RenderTarget);
    fn end_draw(&self, target: &Self::RenderTarget) -> Result<()>;
}

#[derive(Clone)]
pub struct DrawCommand {
    device_context: ID2D1DeviceContext,
}

impl DrawCommand {
    pub(crate) fn new(device_context: &ID2D1DeviceContext) -> Self {
        Self {
            device_context: device_context.clone(),
        }
    }

    #[inline]
    pub fn clear(&self, color: impl Into<Rgba>) {
        let color: D2D1_COLOR_F = color.into().into();
        unsafe {
            self.device_context.Clear(Some(&color));
        }
    }

    #[inline]
    pub fn fill(&self, object: &impl Fill, brush: &Brush) {
        object.fill(&self.device_context, brush.handle());
    }

    #[inline]
    pub fn stroke(&self, object: &impl Stroke, brush: &Brush, width: f32) {
        object.stroke(&self.device_context, brush.handle(), width);
    }

    #[inline]
    pub fn transform(&self) -> Matrix3x2 {
        let mut m = NativeMatrix::default();
        unsafe {
            self.device_context.GetTransform(&mut m);
        }
        m.into()
    }

    #[inline]
    pub fn set_transform(&self, m: &Matrix3x2) {
        let m: NativeMatrix = (*m).into();
        unsafe {
            self.device_context.SetTransform(&m);
        }
    }

    /// Runs `f` with `m` applied before the current transform, then restores it.
    pub fn with_transform<R>(&self, m: &Matrix3x2, f: impl FnOnce(&DrawCommand) -> R) -> R {
        let prev = self.transform();
        self.set_transform(&(*m * prev));
        let ret = f(self);
        self.set_transform(&prev);
        ret
    }

    #[inline]
    pub fn set_offset(&self, pt: impl Into<Point>) {
        let pt = pt.into();
        self.set_transform(&Matrix3x2::translation(pt.x, pt.y));
    }

    #[inline]
    pub fn antialias_mode(&self) -> Result<AntialiasMode> {
        let mode = unsafe { self.device_context.GetAntialiasMode() };
        AntialiasMode::try_from(mode.0)
    }

    #[inline]
    pub fn set_antialias_mode(&self, mode: AntialiasMode) {
        unsafe {
            self.device_context.SetAntialiasMode(mode.into());
        }
    }

    pub fn clip<R>(&self, rect: impl Into<Rect>, f: impl FnOnce(&DrawCommand) -> R) -> R {
        let rect: D2D_RECT_F = rect.into().into();
        unsafe {
            self.device_context
                .PushAxisAlignedClip(&rect, D2D1_ANTIALIAS_MODE_PER_PRIMITIVE);
            let ret = f(self);
            self.device_context.PopAxisAlignedClip();
            ret
        }
    }
}

#[derive(Clone)]
pub struct Factory {
    device_context: ID2D1DeviceContext,
}

impl Factory {
    #[inline]
    pub fn create_solid_color_brush(&self, color: impl Into<Rgba>) -> Result<Brush> {
        Brush::solid_color(&self.device_context, color)
    }
}

unsafe impl Send for Factory {}
unsafe impl Sync for Factory {}

pub struct Context<T> {
    pub(crate) backend: T,
}

impl<T> Context<T>
where
    T: Backend,
{
    #[inline]
    pub fn new(backend: T) -> Self {
        Self { backend }
    }

    #[inline]
    pub fn backend(&self) -> &T {
        &self.backend
    }

    #[inline]
    pub fn create_factory(&self) -> Factory {
        Factory {
            device_context: self.backend.device_context().clone(),
        }
    }

    #[inline]
    pub fn set_dpi(&self, dpi: f32) {
        unsafe {
            self.backend.device_context().SetDpi(dpi, dpi);
        }
    }

    /// Draws into `target` and presents it.
    ///
    /// `ErrorKind::RecreateTarget` means the device was lost; every resource
    /// created from this context has to be created again.
    pub fn draw<R>(
        &self,
        target: &RenderTarget<T>,
        f: impl FnOnce(&DrawCommand) -> R,
    ) -> Result<R> {
        let device_context = self.backend.device_context();
        self.backend.begin_draw(target);
        let (ret, end) = unsafe {
            device_context.SetTarget(target.bitmap());
            device_context.BeginDraw();
            let ret = f(&DrawCommand::new(device_context));
            let end = device_context.EndDraw(None, None);
            device_context.SetTarget(None::<&ID2D1Image>);
            (ret, end)
        };
        if let Err(e) = end {
            let e = Error::from(e);
            if e == ErrorKind::RecreateTarget {
                log::warn!("render target must be recreated");
            }
            return Err(e);
        }
        self.backend.end_draw(target)?;
        Ok(ret)
    }
}
