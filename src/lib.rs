//! signscale previews building signage at true physical size.
//!
//! The pipeline has three pure stages driven by a [`DesignSession`]:
//!
//! 1. **Calibrate**: two reference points on the photo plus their real-world distance give a
//!    [`ScaleRatio`] in pixels per inch.
//! 2. **Render**: a [`SignSpec`] is laid out with `parley` at `height_in * ratio` pixels and
//!    rasterized with `vello_cpu` into a transparent [`RenderedSign`], with an optional stamped
//!    outline and a dimension caption.
//! 3. **Composite**: the sign is resampled by a scale percentage and pasted onto the photo at a
//!    percentage position, clipped to the photo bounds.
//!
//! Both the sign and the composite encode to PNG for download.
#![forbid(unsafe_code)]

mod assets;
mod calibrate;
mod composite;
mod foundation;
mod session;
mod sign;

pub use assets::decode::{decode_photo, encode_png, read_photo};
pub use assets::fonts::{DEFAULT_FONT_DIR, FONT_DIR_ENV, FontChoice, FontTable};
pub use calibrate::scale::{DrawnLine, ReferenceMeasurement, ScaleRatio, calibrate};
pub use composite::placement::{MAX_SCALE_PCT, MIN_SCALE_PCT, Placement};
pub use composite::{Composite, composite};
pub use foundation::core::{Point, Rgba8, Vec2};
pub use foundation::error::{SignscaleError, SignscaleResult};
pub use session::design::{DesignSession, calibration_message};
pub use session::job::{Calibration, DesignJob, JobOutput};
pub use sign::render::{
    CAPTION_GAP_PX, CAPTION_SIZE_PX, OUTLINE_RADIUS_PX, RenderedSign, SIGN_MARGIN_PX, SignRenderer,
    dimension_caption, outline_offsets,
};
pub use sign::spec::SignSpec;
