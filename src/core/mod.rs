//! Foundational types: vessel particulars, cost items and exchange quotes.

pub mod bill;
pub mod exchange;
pub mod vessel;
