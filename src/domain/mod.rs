// Domain layer: cart models and ports. No external dependencies beyond std/serde.

pub mod model;
pub mod ports;
