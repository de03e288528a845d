//! Template pack feature: request models, the pack assembler, and the HTTP
//! handler that ties them together.

pub mod assembler;
pub mod handlers;
pub mod models;
