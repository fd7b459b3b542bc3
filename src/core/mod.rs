pub mod attribute;
pub mod data_point;
pub mod scale;
pub mod ticks;
pub mod types;

pub use attribute::{Attribute, Axis, XAttribute, YAttribute};
pub use data_point::DataPoint;
pub use scale::{LinearScale, build_scale};
pub use ticks::{format_tick, nice_step, nice_ticks};
pub use types::{Margins, PlotArea, Viewport};
