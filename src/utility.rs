use raw_window_handle::RawWindowHandle;
use windows::Win32::Foundation::HWND;

/// Anything that can name the window a swap chain presents to.
pub trait WindowHandle {
    fn hwnd(&self) -> Option<HWND>;
}

#[inline]
fn non_null(hwnd: HWND) -> Option<HWND> {
    (hwnd.0 != 0).then_some(hwnd)
}

impl WindowHandle for HWND {
    #[inline]
    fn hwnd(&self) -> Option<HWND> {
        non_null(*self)
    }
}

impl WindowHandle for RawWindowHandle {
    #[inline]
    fn hwnd(&self) -> Option<HWND> {
        match self {
            RawWindowHandle::Win32(handle) => non_null(HWND(handle.hwnd as _)),
            _ => None,
        }
    }
}

impl WindowHandle for *const std::ffi::c_void {
    #[inline]
    fn hwnd(&self) -> Option<HWND> {
        non_null(HWND(*self as _))
    }
}

impl WindowHandle for *mut std::ffi::c_void {
    #[inline]
    fn hwnd(&self) -> Option<HWND> {
        non_null(HWND(*self as _))
    }
}

impl WindowHandle for isize {
    #[inline]
    fn hwnd(&self) -> Option<HWND> {
        non_null(HWND(*self))
    }
}
