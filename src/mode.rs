use crate::*;

macro_rules! native_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $value:expr,)* }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        #[repr(u32)]
        pub enum $name {
            $($variant = $value,)*
        }

        impl TryFrom<u32> for $name {
            type Error = Error;

            fn try_from(value: u32) -> Result<Self> {
                $(
                    if value == Self::$variant as u32 {
                        return Ok(Self::$variant);
                    }
                )*
                Err(Error::InvalidValue {
                    name: stringify!($name),
                    value,
                })
            }
        }

        impl From<$name> for u32 {
            #[inline]
            fn from(src: $name) -> u32 {
                src as u32
            }
        }
    };
}

native_enum! {
    /// `D2D1_FILL_MODE`
    FillMode {
        Alternate = 0,
        Winding = 1,
    }
}

native_enum! {
    /// `D2D1_ANTIALIAS_MODE`
    AntialiasMode {
        PerPrimitive = 0,
        Aliased = 1,
    }
}

native_enum! {
    /// `D2D1_ALPHA_MODE`
    AlphaMode {
        Unknown = 0,
        Premultiplied = 1,
        Straight = 2,
        Ignore = 3,
    }
}

native_enum! {
    /// `D2D1_CAP_STYLE`
    CapStyle {
        Flat = 0,
        Square = 1,
        Round = 2,
        Triangle = 3,
    }
}

native_enum! {
    /// `D2D1_DEBUG_LEVEL`
    DebugLevel {
        None = 0,
        Errors = 1,
        Warnings = 2,
        Information = 3,
    }
}

native_enum! {
    /// The formats of `DXGI_FORMAT` a Direct2D target can use.
    Format {
        Unknown = 0,
        R16G16B16A16Float = 10,
        R10G10B10A2Unorm = 24,
        R8G8B8A8Unorm = 28,
        R8G8B8A8UnormSrgb = 29,
        B8G8R8A8Unorm = 87,
        B8G8R8A8UnormSrgb = 91,
    }
}

impl Format {
    #[inline]
    pub fn bytes_per_pixel(self) -> Option<u32> {
        match self {
            Self::Unknown => None,
            Self::R16G16B16A16Float => Some(8),
            _ => Some(4),
        }
    }
}

native_enum! {
    /// Sync interval of `IDXGISwapChain::Present`.
    PresentInterval {
        Immediate = 0,
        VSync = 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_value_test() {
        assert_eq!(FillMode::Winding as u32, 1);
        assert_eq!(AntialiasMode::Aliased as u32, 1);
        assert_eq!(AlphaMode::Ignore as u32, 3);
        assert_eq!(CapStyle::Triangle as u32, 3);
        assert_eq!(u32::from(Format::B8G8R8A8Unorm), 87);
        assert_eq!(u32::from(Format::R8G8B8A8UnormSrgb), 29);
        assert_eq!(std::mem::size_of::<Format>(), 4);
    }

    #[test]
    fn try_from_test() {
        assert_eq!(FillMode::try_from(0).unwrap(), FillMode::Alternate);
        assert_eq!(Format::try_from(91).unwrap(), Format::B8G8R8A8UnormSrgb);
        assert_eq!(DebugLevel::try_from(2).unwrap(), DebugLevel::Warnings);
        let e = AlphaMode::try_from(4).unwrap_err();
        assert_eq!(
            e,
            Error::InvalidValue {
                name: "AlphaMode",
                value: 4
            }
        );
        assert!(Format::try_from(2).is_err());
    }

    #[test]
    fn bytes_per_pixel_test() {
        assert_eq!(Format::Unknown.bytes_per_pixel(), None);
        assert_eq!(Format::B8G8R8A8Unorm.bytes_per_pixel(), Some(4));
        assert_eq!(Format::R16G16B16A16Float.bytes_per_pixel(), Some(8));
    }
}
