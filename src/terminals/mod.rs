//! Per-terminal pricing rules.
//!
//! Each terminal module owns its stored defaults, its per-field fallbacks,
//! the list of parameters it reads, and its `price` rule. [`Terminal`] ties
//! them together and is the only dispatch point.

pub mod carboclor;
pub mod del_guazu;
pub mod delta_dock;
pub mod euroamerica_maripasa;
pub mod las_palmas;
pub mod pan_american_energy;
pub mod san_pedro;
pub mod siderca;
pub mod vitco;

use crate::core::bill::ItemizedBill;
use crate::core::vessel::ShipParticulars;
use crate::tariff::parameters::{ParameterOverride, TariffParameters};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A port terminal with its own tariff.
///
/// # Examples
///
/// ```
/// use pda_engine::terminals::Terminal;
///
/// let terminal = Terminal::from_id("delta-dock").unwrap();
/// assert_eq!(terminal, Terminal::DeltaDock);
/// assert_eq!(terminal.name(), "Delta Dock");
/// assert!(Terminal::from_id("puerto-madero").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Terminal {
    Carboclor,
    DeltaDock,
    EuroamericaMaripasa,
    PanAmericanEnergy,
    Siderca,
    SanPedro,
    DelGuazu,
    LasPalmas,
    Vitco,
}

impl Terminal {
    pub const ALL: [Terminal; 9] = [
        Terminal::Carboclor,
        Terminal::DeltaDock,
        Terminal::EuroamericaMaripasa,
        Terminal::PanAmericanEnergy,
        Terminal::Siderca,
        Terminal::SanPedro,
        Terminal::DelGuazu,
        Terminal::LasPalmas,
        Terminal::Vitco,
    ];

    /// Port identifier used by callers and the parameter store.
    pub fn id(&self) -> &'static str {
        match self {
            Terminal::Carboclor => "carboclor",
            Terminal::DeltaDock => "delta-dock",
            Terminal::EuroamericaMaripasa => "euroamerica-maripasa",
            Terminal::PanAmericanEnergy => "pan-american-energy",
            Terminal::Siderca => "siderca",
            Terminal::SanPedro => "san-pedro",
            Terminal::DelGuazu => "del-guazu",
            Terminal::LasPalmas => "las-palmas",
            Terminal::Vitco => "vitco",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Terminal::Carboclor => "Carboclor",
            Terminal::DeltaDock => "Delta Dock",
            Terminal::EuroamericaMaripasa => "Euroamerica / Maripasa",
            Terminal::PanAmericanEnergy => "Pan American Energy",
            Terminal::Siderca => "Siderca",
            Terminal::SanPedro => "San Pedro",
            Terminal::DelGuazu => "Del Guazu",
            Terminal::LasPalmas => "Las Palmas",
            Terminal::Vitco => "Vitco",
        }
    }

    /// Exact, case-sensitive lookup by port identifier.
    pub fn from_id(port_id: &str) -> Option<Terminal> {
        Terminal::ALL.into_iter().find(|t| t.id() == port_id)
    }

    /// The terminal's stored default record.
    pub fn default_parameters(&self) -> ParameterOverride {
        match self {
            Terminal::Carboclor => carboclor::defaults(),
            Terminal::DeltaDock => delta_dock::defaults(),
            Terminal::EuroamericaMaripasa => euroamerica_maripasa::defaults(),
            Terminal::PanAmericanEnergy => pan_american_energy::defaults(),
            Terminal::Siderca => siderca::defaults(),
            Terminal::SanPedro => san_pedro::defaults(),
            Terminal::DelGuazu => del_guazu::defaults(),
            Terminal::LasPalmas => las_palmas::defaults(),
            Terminal::Vitco => vitco::defaults(),
        }
    }

    /// Per-field values used when a parameter record leaves a field unset.
    pub fn fallback_parameters(&self) -> TariffParameters {
        match self {
            Terminal::Carboclor => carboclor::fallback(),
            Terminal::DeltaDock => delta_dock::fallback(),
            Terminal::EuroamericaMaripasa => euroamerica_maripasa::fallback(),
            Terminal::PanAmericanEnergy => pan_american_energy::fallback(),
            Terminal::Siderca => siderca::fallback(),
            Terminal::SanPedro => san_pedro::fallback(),
            Terminal::DelGuazu => del_guazu::fallback(),
            Terminal::LasPalmas => las_palmas::fallback(),
            Terminal::Vitco => vitco::fallback(),
        }
    }

    /// Names of the parameters this terminal's tariff reads.
    pub fn parameter_fields(&self) -> &'static [&'static str] {
        match self {
            Terminal::Carboclor => carboclor::FIELDS,
            Terminal::DeltaDock => delta_dock::FIELDS,
            Terminal::EuroamericaMaripasa => euroamerica_maripasa::FIELDS,
            Terminal::PanAmericanEnergy => pan_american_energy::FIELDS,
            Terminal::Siderca => siderca::FIELDS,
            Terminal::SanPedro => san_pedro::FIELDS,
            Terminal::DelGuazu => del_guazu::FIELDS,
            Terminal::LasPalmas => las_palmas::FIELDS,
            Terminal::Vitco => vitco::FIELDS,
        }
    }

    /// Price a call at this terminal.
    ///
    /// Only rate-sensitive terminals read `exchange_rate`, which must be
    /// positive.
    pub fn price(
        &self,
        ship: &ShipParticulars,
        params: &TariffParameters,
        exchange_rate: Decimal,
    ) -> ItemizedBill {
        match self {
            Terminal::Carboclor => carboclor::price(ship, params),
            Terminal::DeltaDock => delta_dock::price(ship, params),
            Terminal::EuroamericaMaripasa => euroamerica_maripasa::price(ship, params),
            Terminal::PanAmericanEnergy => pan_american_energy::price(ship, params),
            Terminal::Siderca => siderca::price(ship, params),
            Terminal::SanPedro => san_pedro::price(ship, params, exchange_rate),
            Terminal::DelGuazu => del_guazu::price(ship, params),
            Terminal::LasPalmas => las_palmas::price(ship, params),
            Terminal::Vitco => vitco::price(ship, params),
        }
    }

    /// Whether any item of this terminal depends on the exchange rate.
    pub fn is_rate_sensitive(&self) -> bool {
        matches!(self, Terminal::SanPedro)
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tariff::resolver::effective_parameters;

    #[test]
    fn test_ids_round_trip() {
        for terminal in Terminal::ALL {
            assert_eq!(Terminal::from_id(terminal.id()), Some(terminal));
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(Terminal::from_id("Delta-Dock").is_none());
        assert!(Terminal::from_id(" vitco").is_none());
        assert!(Terminal::from_id("").is_none());
    }

    #[test]
    fn test_serde_id_matches_id() {
        for terminal in Terminal::ALL {
            let json = serde_json::to_string(&terminal).unwrap();
            assert_eq!(json, format!("\"{}\"", terminal.id()));
        }
    }

    #[test]
    fn test_defaults_only_set_fields_the_terminal_reads() {
        for terminal in Terminal::ALL {
            let fields = terminal.parameter_fields();
            for field in terminal.default_parameters().set_fields() {
                assert!(fields.contains(&field), "{} sets unused {}", terminal, field);
            }
            for field in fields {
                assert!(ParameterOverride::FIELDS.contains(field), "{}", field);
            }
        }
    }

    #[test]
    fn test_stored_defaults_agree_with_fallbacks() {
        // Only the ISPS-per-day flag differs between stored defaults and
        // fallbacks, at the two terminals that bill ISPS daily.
        for terminal in Terminal::ALL {
            let mut from_defaults = effective_parameters(terminal, &terminal.default_parameters());
            let fallback = terminal.fallback_parameters();
            if matches!(terminal, Terminal::DeltaDock | Terminal::DelGuazu) {
                assert!(from_defaults.isps_per_day);
                from_defaults.isps_per_day = false;
            }
            assert_eq!(from_defaults, fallback, "{}", terminal);
        }
    }
}
