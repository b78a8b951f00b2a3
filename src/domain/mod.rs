// Domain layer: wire payload models and the projection port implemented by the builders.

pub mod model;
pub mod ports;
