//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events after
//! successful wallet or ledger mutations. A UI shell implements the sink to
//! refresh the snapshots it renders.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
