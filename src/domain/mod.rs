// Domain layer: data model and ports. Concrete HTTP and file implementations live in adapters.

pub mod model;
pub mod ports;
