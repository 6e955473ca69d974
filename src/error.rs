// HRESULT codes returned by Direct2D and DXGI, with their native values.
macro_rules! error_kinds {
    ($($name:ident = $code:expr,)*) => {
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        #[repr(i32)]
        pub enum ErrorKind {
            $($name = $code,)*
        }

        impl ErrorKind {
            pub fn from_code(code: i32) -> Option<Self> {
                $(
                    if code == Self::$name as i32 {
                        return Some(Self::$name);
                    }
                )*
                None
            }
        }
    };
}

error_kinds! {
    Ok = 0x00000000,
    False = 0x00000001,
    Fail = 0x80004005_u32 as i32,
    Abort = 0x80004004_u32 as i32,
    AccessDenied = 0x80070005_u32 as i32,
    InvalidArg = 0x80070057_u32 as i32,
    NoInterface = 0x80004002_u32 as i32,
    NotImpl = 0x80004001_u32 as i32,
    OutOfMemory = 0x8007000E_u32 as i32,
    Pointer = 0x80004003_u32 as i32,
    DeviceRemoved = 0x887A0005_u32 as i32,
    DeviceHung = 0x887A0006_u32 as i32,
    DeviceReset = 0x887A0007_u32 as i32,
    WrongState = 0x88990001_u32 as i32,
    NotInitialized = 0x88990002_u32 as i32,
    UnsupportedOperation = 0x88990003_u32 as i32,
    ScannerFailed = 0x88990004_u32 as i32,
    ScreenAccessDenied = 0x88990005_u32 as i32,
    DisplayStateInvalid = 0x88990006_u32 as i32,
    ZeroVector = 0x88990007_u32 as i32,
    InternalError = 0x88990008_u32 as i32,
    DisplayFormatNotSupported = 0x88990009_u32 as i32,
    InvalidCall = 0x8899000A_u32 as i32,
    NoHardwareDevice = 0x8899000B_u32 as i32,
    RecreateTarget = 0x8899000C_u32 as i32,
    TooManyShaderElements = 0x8899000D_u32 as i32,
    ShaderCompileFailed = 0x8899000E_u32 as i32,
    MaxTextureSizeExceeded = 0x8899000F_u32 as i32,
    UnsupportedVersion = 0x88990010_u32 as i32,
    BadNumber = 0x88990011_u32 as i32,
    WrongFactory = 0x88990012_u32 as i32,
    LayerAlreadyInUse = 0x88990013_u32 as i32,
    PopCallDidNotMatchPush = 0x88990014_u32 as i32,
    WrongResourceDomain = 0x88990015_u32 as i32,
    PushPopUnbalanced = 0x88990016_u32 as i32,
    RenderTargetHasLayerOrClipRect = 0x88990017_u32 as i32,
    IncompatibleBrushTypes = 0x88990018_u32 as i32,
    TargetNotGdiCompatible = 0x8899001A_u32 as i32,
    TextEffectIsWrongType = 0x8899001B_u32 as i32,
    TextRendererNotReleased = 0x8899001C_u32 as i32,
    ExceedsMaxBitmapSize = 0x8899001D_u32 as i32,
    InvalidGraphConfiguration = 0x8899001E_u32 as i32,
    InvalidInternalGraphConfiguration = 0x8899001F_u32 as i32,
    CyclicGraph = 0x88990020_u32 as i32,
    BitmapCannotDraw = 0x88990021_u32 as i32,
    OutstandingBitmapReferences = 0x88990022_u32 as i32,
    OriginalTargetNotBound = 0x88990023_u32 as i32,
    InvalidTarget = 0x88990024_u32 as i32,
    BitmapBoundAsTarget = 0x88990025_u32 as i32,
    InsufficientDeviceCapabilities = 0x88990026_u32 as i32,
    IntermediateTooLarge = 0x88990027_u32 as i32,
    EffectIsNotRegistered = 0x88990028_u32 as i32,
    InvalidProperty = 0x88990029_u32 as i32,
    NoSubproperties = 0x8899002A_u32 as i32,
    PrintJobClosed = 0x8899002B_u32 as i32,
    PrintFormatNotSupported = 0x8899002C_u32 as i32,
    TooManyTransformInputs = 0x8899002D_u32 as i32,
    InvalidGlyphImage = 0x8899002E_u32 as i32,
}

impl ErrorKind {
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// The top bit of an HRESULT marks failure.
    #[inline]
    pub fn is_failure(self) -> bool {
        self.code() < 0
    }
}

#[derive(Clone, PartialEq, Debug, thiserror::Error)]
pub enum Error {
    #[error("{message} (0x{code:08X})")]
    Native { code: i32, message: String },
    #[error("{value} is not a valid {name} value")]
    InvalidValue { name: &'static str, value: u32 },
}

impl Error {
    #[inline]
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Native { code, .. } => Some(*code),
            Self::InvalidValue { .. } => None,
        }
    }

    #[inline]
    pub fn kind(&self) -> Option<ErrorKind> {
        self.code().and_then(ErrorKind::from_code)
    }
}

#[cfg(windows)]
impl From<::windows::core::Error> for Error {
    fn from(src: ::windows::core::Error) -> Self {
        Self::Native {
            code: src.code().0,
            message: src.message().to_string(),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(src: ErrorKind) -> Self {
        Self::Native {
            code: src.code(),
            message: format!("{:?}", src),
        }
    }
}

impl PartialEq<ErrorKind> for Error {
    fn eq(&self, rhs: &ErrorKind) -> bool {
        self.code() == Some(rhs.code())
    }
}

impl PartialEq<Error> for ErrorKind {
    fn eq(&self, rhs: &Error) -> bool {
        rhs == self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_test() {
        assert!(Error::from(ErrorKind::Ok) == ErrorKind::Ok);
        assert!(ErrorKind::Ok == Error::from(ErrorKind::Ok));
        assert!(Error::from(ErrorKind::Ok) != ErrorKind::Fail);
        let e = Error::InvalidValue {
            name: "FillMode",
            value: 7,
        };
        assert!(e != ErrorKind::Ok);
        assert_eq!(e.kind(), None);
    }

    #[test]
    fn code_test() {
        assert_eq!(ErrorKind::Fail.code(), 0x80004005_u32 as i32);
        assert_eq!(ErrorKind::RecreateTarget.code(), -2003238900);
        assert_eq!(ErrorKind::from_code(-2003238895), Some(ErrorKind::BadNumber));
        assert_eq!(ErrorKind::from_code(0x1234), None);
        assert!(ErrorKind::DeviceRemoved.is_failure());
        assert!(!ErrorKind::False.is_failure());
        assert_eq!(
            Error::from(ErrorKind::RecreateTarget).kind(),
            Some(ErrorKind::RecreateTarget)
        );
    }

    #[test]
    fn display_test() {
        assert_eq!(
            Error::from(ErrorKind::RecreateTarget).to_string(),
            "RecreateTarget (0x8899000C)"
        );
        let e = Error::InvalidValue {
            name: "FillMode",
            value: 7,
        };
        assert_eq!(e.to_string(), "7 is not a valid FillMode value");
    }

    #[cfg(windows)]
    #[test]
    fn from_windows_error_test() {
        use ::windows::Win32::Foundation::D2DERR_RECREATE_TARGET;
        let e: Error = ::windows::core::Error::from(D2DERR_RECREATE_TARGET).into();
        assert!(e == ErrorKind::RecreateTarget);
    }

    #[cfg(windows)]
    #[test]
    fn native_code_test() {
        use ::windows::core::HRESULT;
        use ::windows::Win32::{Foundation::*, Graphics::Dxgi::*};
        let table: [(ErrorKind, HRESULT); 58] = [
            (ErrorKind::Ok, S_OK),
            (ErrorKind::False, S_FALSE),
            (ErrorKind::Fail, E_FAIL),
            (ErrorKind::Abort, E_ABORT),
            (ErrorKind::AccessDenied, E_ACCESSDENIED),
            (ErrorKind::InvalidArg, E_INVALIDARG),
            (ErrorKind::NoInterface, E_NOINTERFACE),
            (ErrorKind::NotImpl, E_NOTIMPL),
            (ErrorKind::OutOfMemory, E_OUTOFMEMORY),
            (ErrorKind::Pointer, E_POINTER),
            (ErrorKind::DeviceRemoved, DXGI_ERROR_DEVICE_REMOVED),
            (ErrorKind::DeviceHung, DXGI_ERROR_DEVICE_HUNG),
            (ErrorKind::DeviceReset, DXGI_ERROR_DEVICE_RESET),
            (ErrorKind::WrongState, D2DERR_WRONG_STATE),
            (ErrorKind::NotInitialized, D2DERR_NOT_INITIALIZED),
            (ErrorKind::UnsupportedOperation, D2DERR_UNSUPPORTED_OPERATION),
            (ErrorKind::ScannerFailed, D2DERR_SCANNER_FAILED),
            (ErrorKind::ScreenAccessDenied, D2DERR_SCREEN_ACCESS_DENIED),
            (ErrorKind::DisplayStateInvalid, D2DERR_DISPLAY_STATE_INVALID),
            (ErrorKind::ZeroVector, D2DERR_ZERO_VECTOR),
            (ErrorKind::InternalError, D2DERR_INTERNAL_ERROR),
            (ErrorKind::DisplayFormatNotSupported, D2DERR_DISPLAY_FORMAT_NOT_SUPPORTED),
            (ErrorKind::InvalidCall, D2DERR_INVALID_CALL),
            (ErrorKind::NoHardwareDevice, D2DERR_NO_HARDWARE_DEVICE),
            (ErrorKind::RecreateTarget, D2DERR_RECREATE_TARGET),
            (ErrorKind::TooManyShaderElements, D2DERR_TOO_MANY_SHADER_ELEMENTS),
            (ErrorKind::ShaderCompileFailed, D2DERR_SHADER_COMPILE_FAILED),
            (ErrorKind::MaxTextureSizeExceeded, D2DERR_MAX_TEXTURE_SIZE_EXCEEDED),
            (ErrorKind::UnsupportedVersion, D2DERR_UNSUPPORTED_VERSION),
            (ErrorKind::BadNumber, D2DERR_BAD_NUMBER),
            (ErrorKind::WrongFactory, D2DERR_WRONG_FACTORY),
            (ErrorKind::LayerAlreadyInUse, D2DERR_LAYER_ALREADY_IN_USE),
            (ErrorKind::PopCallDidNotMatchPush, D2DERR_POP_CALL_DID_NOT_MATCH_PUSH),
            (ErrorKind::WrongResourceDomain, D2DERR_WRONG_RESOURCE_DOMAIN),
            (ErrorKind::PushPopUnbalanced, D2DERR_PUSH_POP_UNBALANCED),
            (
                ErrorKind::RenderTargetHasLayerOrClipRect,
                D2DERR_RENDER_TARGET_HAS_LAYER_OR_CLIPRECT,
            ),
            (ErrorKind::IncompatibleBrushTypes, D2DERR_INCOMPATIBLE_BRUSH_TYPES),
            (ErrorKind::TargetNotGdiCompatible, D2DERR_TARGET_NOT_GDI_COMPATIBLE),
            (ErrorKind::TextEffectIsWrongType, D2DERR_TEXT_EFFECT_IS_WRONG_TYPE),
            (ErrorKind::TextRendererNotReleased, D2DERR_TEXT_RENDERER_NOT_RELEASED),
            (ErrorKind::ExceedsMaxBitmapSize, D2DERR_EXCEEDS_MAX_BITMAP_SIZE),
            (ErrorKind::InvalidGraphConfiguration, D2DERR_INVALID_GRAPH_CONFIGURATION),
            (
                ErrorKind::InvalidInternalGraphConfiguration,
                D2DERR_INVALID_INTERNAL_GRAPH_CONFIGURATION,
            ),
            (ErrorKind::CyclicGraph, D2DERR_CYCLIC_GRAPH),
            (ErrorKind::BitmapCannotDraw, D2DERR_BITMAP_CANNOT_DRAW),
            (
                ErrorKind::OutstandingBitmapReferences,
                D2DERR_OUTSTANDING_BITMAP_REFERENCES,
            ),
            (ErrorKind::OriginalTargetNotBound, D2DERR_ORIGINAL_TARGET_NOT_BOUND),
            (ErrorKind::InvalidTarget, D2DERR_INVALID_TARGET),
            (ErrorKind::BitmapBoundAsTarget, D2DERR_BITMAP_BOUND_AS_TARGET),
            (
                ErrorKind::InsufficientDeviceCapabilities,
                D2DERR_INSUFFICIENT_DEVICE_CAPABILITIES,
            ),
            (ErrorKind::IntermediateTooLarge, D2DERR_INTERMEDIATE_TOO_LARGE),
            (ErrorKind::EffectIsNotRegistered, D2DERR_EFFECT_IS_NOT_REGISTERED),
            (ErrorKind::InvalidProperty, D2DERR_INVALID_PROPERTY),
            (ErrorKind::NoSubproperties, D2DERR_NO_SUBPROPERTIES),
            (ErrorKind::PrintJobClosed, D2DERR_PRINT_JOB_CLOSED),
            (ErrorKind::PrintFormatNotSupported, D2DERR_PRINT_FORMAT_NOT_SUPPORTED),
            (ErrorKind::TooManyTransformInputs, D2DERR_TOO_MANY_TRANSFORM_INPUTS),
            (ErrorKind::InvalidGlyphImage, D2DERR_INVALID_GLYPH_IMAGE),
        ];
        for (kind, hr) in table {
            assert_eq!(kind.code(), hr.0, "{:?}", kind);
            assert_eq!(ErrorKind::from_code(hr.0), Some(kind));
        }
    }
}
