// Domain layer: the Person entity and the ports other layers depend on.

pub mod model;
pub mod ports;
