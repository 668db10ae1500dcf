// Domain layer: content model, the fallback record and ports. No IO here.

pub mod fallback;
pub mod model;
pub mod ports;
