// Domain layer: fact models and the ports the coordinator talks through.

pub mod model;
pub mod ports;
