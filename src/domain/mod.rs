// Domain layer: models and ports. No I/O here.

pub mod contacts;
pub mod model;
pub mod ports;
