//! Deterministic wardrobe intelligence: a rule-driven outfit matching engine and
//! closet analytics over an in-memory item inventory. Persistence, identity, and
//! image analysis live behind external collaborators; this crate only consumes
//! their plain data records.

pub mod closet;
pub mod config;
pub mod error;
pub mod telemetry;
