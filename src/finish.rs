pub(crate) mod banner;
pub(crate) mod tilt;
