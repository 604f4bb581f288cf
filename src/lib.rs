//! # pda-engine
//!
//! Proforma disbursement account (PDA) tariff engine for river port terminals.
//!
//! Given a vessel's particulars and a terminal's tariff parameters, the
//! engine produces a deterministic, itemized estimate of the cost of a port
//! call. It performs no I/O and holds no mutable state.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: vessel particulars, cost items, exchange quotes
//! - **tariff** — Parameter records, per-port resolution, shared formulas
//! - **terminals** — One pricing rule per terminal
//! - **pricing** — Port-id dispatch and engine configuration

pub mod core;
pub mod pricing;
pub mod tariff;
pub mod terminals;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::bill::{CostItem, ItemizedBill};
    pub use crate::core::exchange::ExchangeQuote;
    pub use crate::core::vessel::{DraftCategory, ShipParticulars, VesselType};
    pub use crate::pricing::config::EngineConfig;
    pub use crate::pricing::engine::{calculate_pda, PdaEngine};
    pub use crate::tariff::parameters::{ParameterOverride, TariffParameters};
    pub use crate::tariff::resolver::ParameterStore;
    pub use crate::terminals::Terminal;
}
