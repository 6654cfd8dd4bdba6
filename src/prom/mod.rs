mod model;
pub use self::model::GaugeFamily;
pub use self::model::GaugeSample;

mod encoder;
pub use self::encoder::encode;
