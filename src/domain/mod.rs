// Domain layer: the sequence model and the transform/ordering ports.

pub mod model;
pub mod ports;
