//! The eight per-layer stages, in execution order.
pub(crate) mod bus;
pub(crate) mod produce;
pub(crate) mod screen;
pub(crate) mod image;
pub(crate) mod position;
pub(crate) mod angle;
pub(crate) mod spin;
pub(crate) mod orbit;
pub(crate) mod clock;
