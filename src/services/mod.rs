//! Collaborator glue around the rendering engine: the endpoint prober and
//! the embedded example payloads.

pub mod examples;
pub mod probe;
