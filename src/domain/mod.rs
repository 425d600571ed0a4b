// Domain layer: book records, outcome values and the seed port.

pub mod model;
pub mod ports;
