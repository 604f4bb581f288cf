//! Tariff inputs and the formulas shared across terminals.
//!
//! - **parameters** — total and sparse parameter records
//! - **resolver** — per-port resolution and the override store
//! - **formulas** — billing units, pilotage, free pratique, migrations

pub mod formulas;
pub mod parameters;
pub mod resolver;
