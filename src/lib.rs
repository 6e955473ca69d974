//! 3x2 affine transforms laid out like `D2D1_MATRIX_3X2_F`, the value types
//! Direct2D passes around, and on Windows a thin Direct2D/DXGI drawing layer
//! that consumes them.
//!
//! ```
//! use d2affine::{point, Matrix3x2};
//!
//! let m = Matrix3x2::translation(10.0, 5.0) * Matrix3x2::scale(2.0, 2.0);
//! assert_eq!(m.transform_point((0.0, 0.0)), point(20.0, 10.0));
//! ```

mod color;
mod config;
pub mod error;
mod geometry;
mod matrix;
mod mode;

#[cfg(windows)]
mod brush;
#[cfg(windows)]
mod context;
#[cfg(windows)]
pub mod d2d;
#[cfg(windows)]
pub mod native;
#[cfg(windows)]
mod shape;
#[cfg(windows)]
mod utility;

pub use color::*;
pub use config::*;
pub use error::{Error, ErrorKind};
pub use geometry::*;
pub use matrix::*;
pub use mode::*;

#[cfg(windows)]
pub use brush::*;
#[cfg(windows)]
pub use context::*;
#[cfg(windows)]
pub use d2d::Direct2D;
#[cfg(windows)]
pub use shape::*;
#[cfg(windows)]
pub use utility::*;

pub type Result<T> = core::result::Result<T, Error>;
