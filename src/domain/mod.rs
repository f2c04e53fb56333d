// Domain layer: participants, exclusions, assignments and the ports the engine talks through.

pub mod exclusions;
pub mod model;
pub mod ports;
