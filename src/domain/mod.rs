// Domain layer: core models and the ports (interfaces) collaborators implement.

pub mod model;
pub mod ports;
