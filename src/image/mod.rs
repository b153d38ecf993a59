pub mod f64;
pub mod io;
pub mod rgb;
pub mod traits;

pub use self::f64::{RgbF64, RgbImageF64};
pub use self::rgb::{Rgb, RgbImage};
pub use self::traits::{ImageView, ImageViewMut, Rows};
