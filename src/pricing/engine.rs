use crate::core::bill::ItemizedBill;
use crate::core::exchange::{usable_rate, ExchangeQuote};
use crate::core::vessel::ShipParticulars;
use crate::pricing::config::EngineConfig;
use crate::tariff::parameters::ParameterOverride;
use crate::tariff::resolver::{effective_parameters, resolve, ParameterStore};
use crate::terminals::Terminal;
use rust_decimal::Decimal;

/// Dispatches a port call to its terminal's pricing rule.
///
/// The engine holds only its configuration; every call is independent and
/// deterministic, so one engine can be shared across threads.
///
/// # Examples
///
/// ```
/// use pda_engine::core::vessel::ShipParticulars;
/// use pda_engine::pricing::engine::PdaEngine;
/// use rust_decimal_macros::dec;
///
/// let engine = PdaEngine::default();
/// let ship = ShipParticulars::new(dec!(200), dec!(32), dec!(15), dec!(10000), dec!(18000), dec!(1));
///
/// let bill = engine.calculate("delta-dock", &ship, None, None);
/// assert!(!bill.is_empty());
///
/// let unknown = engine.calculate("puerto-madero", &ship, None, None);
/// assert!(unknown.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdaEngine {
    config: EngineConfig,
}

impl PdaEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Price a call at `port_id`.
    ///
    /// Without `parameters`, the terminal's stored defaults apply. A
    /// supplied record replaces them entirely; unset fields fall back to
    /// the terminal's own constants. Unknown ports yield an empty bill.
    pub fn calculate(
        &self,
        port_id: &str,
        ship: &ShipParticulars,
        exchange_rate: Option<Decimal>,
        parameters: Option<&ParameterOverride>,
    ) -> ItemizedBill {
        let Some(terminal) = Terminal::from_id(port_id) else {
            log::warn!("no tariff for port '{}', returning empty bill", port_id);
            return ItemizedBill::empty();
        };

        let resolved = resolve(port_id, parameters);
        let params = effective_parameters(terminal, &resolved);
        let rate = self.effective_exchange_rate(ship, exchange_rate);

        log::debug!(
            "pricing {} for {:?} at rate {} with {} parameter(s) set",
            terminal,
            ship.vessel_name,
            rate,
            resolved.set_fields().len()
        );

        let bill = terminal.price(ship, &params, rate);
        log::debug!("{}: {} items, total USD {}", terminal, bill.len(), bill.total_usd());
        bill
    }

    /// Price a call using a provider quote's sell rate.
    pub fn calculate_with_quote(
        &self,
        port_id: &str,
        ship: &ShipParticulars,
        quote: Option<&ExchangeQuote>,
        parameters: Option<&ParameterOverride>,
    ) -> ItemizedBill {
        self.calculate(port_id, ship, quote.map(ExchangeQuote::sell), parameters)
    }

    /// Price a call with the parameters currently held in `store`.
    pub fn calculate_with_store(
        &self,
        store: &ParameterStore,
        port_id: &str,
        ship: &ShipParticulars,
        exchange_rate: Option<Decimal>,
    ) -> ItemizedBill {
        self.calculate(port_id, ship, exchange_rate, store.override_for(port_id))
    }

    /// The rate rate-sensitive items divide by.
    ///
    /// A positive manual rate on the ship wins, then a positive supplied
    /// rate, then the configured default. Non-positive rates are skipped.
    pub fn effective_exchange_rate(
        &self,
        ship: &ShipParticulars,
        exchange_rate: Option<Decimal>,
    ) -> Decimal {
        for (source, rate) in [("manual", ship.manual_exchange_rate), ("supplied", exchange_rate)] {
            if let Some(rate) = rate.filter(|r| *r <= Decimal::ZERO) {
                log::warn!("ignoring non-positive {} exchange rate {}", source, rate);
            }
        }
        usable_rate(ship.manual_exchange_rate)
            .or_else(|| usable_rate(exchange_rate))
            .unwrap_or_else(|| self.config.default_exchange_rate())
    }
}

/// Price a call with the default engine configuration.
pub fn calculate_pda(
    port_id: &str,
    ship: &ShipParticulars,
    exchange_rate: Option<Decimal>,
    parameters: Option<&ParameterOverride>,
) -> ItemizedBill {
    PdaEngine::default().calculate(port_id, ship, exchange_rate, parameters)
}
