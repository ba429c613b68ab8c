// Domain layer: request-scoped models only. No behavior beyond accessors.

pub mod model;
