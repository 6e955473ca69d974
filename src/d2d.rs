use crate::*;
use windows::core::ComInterface;
use windows::Win32::{
    Foundation::*,
    Graphics::{
        Direct2D::Common::*, Direct2D::*, Direct3D::*, Direct3D11::*, Dxgi::Common::*, Dxgi::*,
    },
};

/// A swap chain back buffer wrapped as a Direct2D bitmap.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RenderTarget(pub(crate) ID2D1Bitmap1);

impl Target for RenderTarget {
    #[inline]
    fn bitmap(&self) -> &ID2D1Bitmap1 {
        &self.0
    }

    #[inline]
    fn size(&self) -> Size {
        unsafe { self.0.GetSize().into() }
    }

    #[inline]
    fn physical_size(&self) -> (u32, u32) {
        let size = unsafe { self.0.GetPixelSize() };
        (size.width, size.height)
    }
}

unsafe impl Send for RenderTarget {}
unsafe impl Sync for RenderTarget {}

/// Direct2D drawing into a flip model DXGI swap chain of a window.
#[derive(Clone)]
pub struct Direct2D {
    _d3d11_device: ID3D11Device,
    swap_chain: IDXGISwapChain1,
    device_context: ID2D1DeviceContext,
    config: SwapChainConfig,
}

impl Direct2D {
    pub fn new(
        window: impl WindowHandle,
        size: (u32, u32),
        config: &SwapChainConfig,
    ) -> Result<Self> {
        let hwnd = window.hwnd().ok_or(ErrorKind::InvalidArg)?;
        unsafe {
            let d3d11_device: ID3D11Device = {
                const FEATURE_LEVELS: [D3D_FEATURE_LEVEL; 1] = [D3D_FEATURE_LEVEL_11_0];
                let mut p = None;
                D3D11CreateDevice(
                    None::<&IDXGIAdapter>,
                    D3D_DRIVER_TYPE_HARDWARE,
                    HMODULE::default(),
                    D3D11_CREATE_DEVICE_BGRA_SUPPORT,
                    Some(&FEATURE_LEVELS),
                    D3D11_SDK_VERSION,
                    Some(&mut p),
                    None,
                    None,
                )?;
                p.ok_or(ErrorKind::NoHardwareDevice)?
            };
            let dxgi_factory: IDXGIFactory2 = CreateDXGIFactory1()?;
            let swap_chain = dxgi_factory.CreateSwapChainForHwnd(
                &d3d11_device,
                hwnd,
                &DXGI_SWAP_CHAIN_DESC1 {
                    Width: size.0,
                    Height: size.1,
                    Format: config.format.into(),
                    BufferCount: config.buffer_count,
                    BufferUsage: DXGI_USAGE_RENDER_TARGET_OUTPUT,
                    SwapEffect: DXGI_SWAP_EFFECT_FLIP_SEQUENTIAL,
                    Scaling: DXGI_SCALING_NONE,
                    SampleDesc: DXGI_SAMPLE_DESC {
                        Count: 1,
                        Quality: 0,
                    },
                    ..Default::default()
                },
                None,
                None::<&IDXGIOutput>,
            )?;
            let d2d1_factory: ID2D1Factory1 = D2D1CreateFactory(
                D2D1_FACTORY_TYPE_MULTI_THREADED,
                Some(&D2D1_FACTORY_OPTIONS {
                    debugLevel: config.debug_level.into(),
                }),
            )?;
            let dxgi_device: IDXGIDevice = d3d11_device.cast()?;
            let d2d1_device = d2d1_factory.CreateDevice(&dxgi_device)?;
            let device_context =
                d2d1_device.CreateDeviceContext(D2D1_DEVICE_CONTEXT_OPTIONS_NONE)?;
            device_context.SetDpi(config.dpi, config.dpi);
            log::debug!(
                "swap chain created: {}x{} {:?} x{}",
                size.0,
                size.1,
                config.format,
                config.buffer_count
            );
            Ok(Self {
                _d3d11_device: d3d11_device,
                swap_chain,
                device_context,
                config: *config,
            })
        }
    }

    #[inline]
    pub fn config(&self) -> &SwapChainConfig {
        &self.config
    }

    #[inline]
    pub fn swap_chain(&self) -> &IDXGISwapChain1 {
        &self.swap_chain
    }

    /// Every `RenderTarget` of the previous size must be dropped before calling this.
    pub fn resize(&self, size: (u32, u32)) -> Result<()> {
        log::debug!("resize swap chain: {}x{}", size.0, size.1);
        unsafe {
            self.swap_chain
                .ResizeBuffers(0, size.0, size.1, DXGI_FORMAT_UNKNOWN, 0)?;
        }
        Ok(())
    }

    pub fn back_buffer(&self) -> Result<RenderTarget> {
        unsafe {
            let mut desc = DXGI_SWAP_CHAIN_DESC1::default();
            self.swap_chain.GetDesc1(&mut desc)?;
            let surface: IDXGISurface = self.swap_chain.GetBuffer(0)?;
            let bitmap = self.device_context.CreateBitmapFromDxgiSurface(
                &surface,
                Some(&D2D1_BITMAP_PROPERTIES1 {
                    pixelFormat: D2D1_PIXEL_FORMAT {
                        format: desc.Format,
                        alphaMode: self.config.alpha_mode.into(),
                    },
                    bitmapOptions: D2D1_BITMAP_OPTIONS_TARGET | D2D1_BITMAP_OPTIONS_CANNOT_DRAW,
                    dpiX: self.config.dpi,
                    dpiY: self.config.dpi,
                    ..Default::default()
                }),
            )?;
            Ok(RenderTarget(bitmap))
        }
    }

    fn present(&self) -> Result<()> {
        let interval = self.config.present_interval as u32;
        let hr = unsafe { self.swap_chain.Present(interval, 0) };
        if hr == DXGI_STATUS_OCCLUDED {
            return Ok(());
        }
        hr.ok()?;
        Ok(())
    }
}

unsafe impl Send for Direct2D {}
unsafe impl Sync for Direct2D {}

impl Backend for Direct2D {
    type RenderTarget = RenderTarget;

    #[inline]
    fn device_context(&self) -> &ID2D1DeviceContext {
        &self.device_context
    }

    #[inline]
    fn begin_draw(&self, _target: &RenderTarget) {}

    #[inline]
    fn end_draw(&self, _target: &RenderTarget) -> Result<()> {
        self.present()
    }
}

impl Context<Direct2D> {
    #[inline]
    pub fn back_buffer(&self) -> Result<RenderTarget> {
        self.backend.back_buffer()
    }

    #[inline]
    pub fn resize(&self, size: (u32, u32)) -> Result<()> {
        self.backend.resize(size)
    }

    #[inline]
    pub fn swap_chain(&self) -> &IDXGISwapChain1 {
        self.backend.swap_chain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_window_test() {
        let ret = Direct2D::new(HWND(0), (640, 480), &SwapChainConfig::default());
        assert!(matches!(ret, Err(e) if e == ErrorKind::InvalidArg));
    }
}
