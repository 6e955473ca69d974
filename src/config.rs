use crate::*;

/// Settings of the swap chain and device context created by `Direct2D`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SwapChainConfig {
    pub buffer_count: u32,
    pub format: Format,
    pub alpha_mode: AlphaMode,
    pub present_interval: PresentInterval,
    pub dpi: f32,
    pub debug_level: DebugLevel,
}

impl Default for SwapChainConfig {
    #[inline]
    fn default() -> Self {
        Self {
            buffer_count: 2,
            format: Format::B8G8R8A8Unorm,
            alpha_mode: AlphaMode::Ignore,
            present_interval: PresentInterval::VSync,
            dpi: 96.0,
            debug_level: if cfg!(debug_assertions) {
                DebugLevel::Errors
            } else {
                DebugLevel::None
            },
        }
    }
}

impl SwapChainConfig {
    /// Flip model swap chains need at least two buffers.
    pub const MIN_BUFFER_COUNT: u32 = 2;
    pub const MAX_BUFFER_COUNT: u32 = 16;

    #[inline]
    pub fn with_buffer_count(mut self, count: u32) -> Self {
        self.buffer_count = count.clamp(Self::MIN_BUFFER_COUNT, Self::MAX_BUFFER_COUNT);
        self
    }

    #[inline]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    #[inline]
    pub fn with_alpha_mode(mut self, alpha_mode: AlphaMode) -> Self {
        self.alpha_mode = alpha_mode;
        self
    }

    #[inline]
    pub fn with_present_interval(mut self, interval: PresentInterval) -> Self {
        self.present_interval = interval;
        self
    }

    #[inline]
    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    #[inline]
    pub fn with_debug_level(mut self, level: DebugLevel) -> Self {
        self.debug_level = level;
        self
    }

    /// Scale from device independent pixels to physical pixels.
    #[inline]
    pub fn scale_factor(&self) -> f32 {
        self.dpi / 96.0
    }

    /// Maps device independent pixels onto physical pixels.
    #[inline]
    pub fn dpi_transform(&self) -> Matrix3x2 {
        let s = self.scale_factor();
        Matrix3x2::scale(s, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_test() {
        let config = SwapChainConfig::default();
        assert_eq!(config.buffer_count, 2);
        assert_eq!(config.format, Format::B8G8R8A8Unorm);
        assert_eq!(config.alpha_mode, AlphaMode::Ignore);
        assert_eq!(config.present_interval, PresentInterval::VSync);
        assert!(config.dpi_transform().is_identity());
    }

    #[test]
    fn builder_test() {
        let config = SwapChainConfig::default()
            .with_buffer_count(1)
            .with_format(Format::R8G8B8A8Unorm)
            .with_present_interval(PresentInterval::Immediate)
            .with_dpi(144.0)
            .with_debug_level(DebugLevel::Information);
        assert_eq!(config.buffer_count, SwapChainConfig::MIN_BUFFER_COUNT);
        assert_eq!(config.format, Format::R8G8B8A8Unorm);
        assert_eq!(config.present_interval, PresentInterval::Immediate);
        assert_eq!(config.debug_level, DebugLevel::Information);
        assert_eq!(config.scale_factor(), 1.5);
        assert_eq!(
            config.dpi_transform().transform_point((10.0, 20.0)),
            point(15.0, 30.0)
        );
        assert_eq!(
            SwapChainConfig::default().with_buffer_count(64).buffer_count,
            SwapChainConfig::MAX_BUFFER_COUNT
        );
    }
}
