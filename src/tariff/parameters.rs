use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors arising from parameter store operations.
#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("unknown port '{0}'")]
    UnknownPort(String),
    #[error("unknown tariff parameter '{0}'")]
    UnknownField(String),
    #[error("parameter '{field}' is not used by terminal '{port}'")]
    NotApplicable { port: String, field: String },
}

/// Declares the tariff inputs once and derives both parameter layers from
/// the list: the total `TariffParameters` and the sparse `ParameterOverride`.
macro_rules! tariff_parameters {
    ($( $(#[$doc:meta])* $field:ident : $ty:ty ),* $(,)?) => {
        /// Fully resolved tariff inputs handed to a terminal's pricing rule.
        ///
        /// Every field has a value; which ones a terminal actually reads is
        /// listed by `Terminal::parameter_fields`.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct TariffParameters {
            $( $(#[$doc])* pub $field: $ty, )*
        }

        /// Sparse tariff inputs: stored terminal defaults or a user override.
        ///
        /// An absent field falls back to the terminal's own constant when the
        /// override is layered onto `Terminal::fallback_parameters`.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct ParameterOverride {
            $(
                $(#[$doc])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl ParameterOverride {
            /// Names of every tariff input, in declaration order.
            pub const FIELDS: &'static [&'static str] = &[$( stringify!($field) ),*];

            pub fn new() -> Self {
                Self::default()
            }

            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }

            /// Names of the fields this record sets.
            pub fn set_fields(&self) -> Vec<&'static str> {
                let mut fields = Vec::new();
                $(
                    if self.$field.is_some() {
                        fields.push(stringify!($field));
                    }
                )*
                fields
            }

            /// Fill every absent field from `base`.
            pub fn layered_on(&self, base: &TariffParameters) -> TariffParameters {
                TariffParameters {
                    $( $field: self.$field.unwrap_or(base.$field), )*
                }
            }

            /// Copy a single field's value (possibly unset) from `source`.
            pub fn copy_field(&mut self, name: &str, source: &ParameterOverride) -> Result<(), ParameterError> {
                match name {
                    $( stringify!($field) => self.$field = source.$field, )*
                    _ => return Err(ParameterError::UnknownField(name.to_string())),
                }
                Ok(())
            }
        }
    };
}

tariff_parameters! {
    /// USD per NRT.
    light_dues_rate: Decimal,
    custom_house: Decimal,
    /// USD per day.
    head_clerk: Decimal,
    /// USD per day.
    watchmen: Decimal,
    /// USD per day.
    tally_clerk: Decimal,
    garbage_insp: Decimal,
    /// Charged when both legs of the voyage are foreign.
    migrations_in_out: Decimal,
    /// Charged when exactly one leg of the voyage is foreign.
    migrations_single: Decimal,
    /// Terminal constant added to the pilotage tariff.
    pilot_base: Decimal,
    mooring_unmooring: Decimal,
    isps_charge: Decimal,
    /// Bill the ISPS charge once per day alongside instead of once per call.
    isps_per_day: bool,
    port_dues_fixed: Decimal,
    /// USD per NRT per day.
    port_dues_rate: Decimal,
    /// Minimum port dues per day.
    port_dues_min: Decimal,
    /// USD per additional day beyond the first.
    port_dues_additional: Decimal,
    /// USD per NRT per weekend day.
    port_dues_rate_weekend: Decimal,
    /// Weekend minimum per full week alongside.
    port_dues_min_weekend: Decimal,
    /// LOA in meters above which the higher rate band applies.
    port_dues_loa_threshold: Decimal,
    port_dues_rate_above_threshold: Decimal,
    port_dues_rate_below_threshold: Decimal,
    port_dues_min_above_threshold: Decimal,
    port_dues_min_below_threshold: Decimal,
    custom_surveyor: Decimal,
    boat_for_mooring: Decimal,
    tugboat: Decimal,
    custom_house_ot: Decimal,
    /// USD per GRT.
    light_dues_grt_rate: Decimal,
    light_dues_multiplier: Decimal,
    /// GRT above which the light dues surcharge factor applies.
    light_dues_surcharge_threshold: Decimal,
    light_dues_surcharge_factor: Decimal,
    /// Local-currency unit of the security charge.
    isps_base_factor: Decimal,
    /// Local currency per NRT for the security charge.
    isps_nrt_rate: Decimal,
    /// Tanker dues per day, LOA below 150 m.
    tanker_dues_loa_150: Decimal,
    /// Tanker dues per day, LOA from 150 m to below 175 m.
    tanker_dues_loa_175: Decimal,
    /// Tanker dues per day, LOA of 175 m and above.
    tanker_dues_loa_175_plus: Decimal,
}

impl TariffParameters {
    /// Values shared by every terminal; terminal-specific inputs are zero
    /// until a terminal's fallback sets them.
    pub fn baseline() -> Self {
        Self {
            light_dues_rate: Decimal::ZERO,
            custom_house: dec!(600),
            head_clerk: dec!(1100),
            watchmen: dec!(1555),
            tally_clerk: dec!(800),
            garbage_insp: dec!(40),
            migrations_in_out: dec!(2500),
            migrations_single: dec!(1250),
            pilot_base: Decimal::ZERO,
            mooring_unmooring: Decimal::ZERO,
            isps_charge: Decimal::ZERO,
            isps_per_day: false,
            port_dues_fixed: Decimal::ZERO,
            port_dues_rate: Decimal::ZERO,
            port_dues_min: Decimal::ZERO,
            port_dues_additional: Decimal::ZERO,
            port_dues_rate_weekend: Decimal::ZERO,
            port_dues_min_weekend: Decimal::ZERO,
            port_dues_loa_threshold: Decimal::ZERO,
            port_dues_rate_above_threshold: Decimal::ZERO,
            port_dues_rate_below_threshold: Decimal::ZERO,
            port_dues_min_above_threshold: Decimal::ZERO,
            port_dues_min_below_threshold: Decimal::ZERO,
            custom_surveyor: Decimal::ZERO,
            boat_for_mooring: Decimal::ZERO,
            tugboat: Decimal::ZERO,
            custom_house_ot: Decimal::ZERO,
            light_dues_grt_rate: Decimal::ZERO,
            light_dues_multiplier: Decimal::ZERO,
            light_dues_surcharge_threshold: Decimal::ZERO,
            light_dues_surcharge_factor: Decimal::ONE,
            isps_base_factor: Decimal::ZERO,
            isps_nrt_rate: Decimal::ZERO,
            tanker_dues_loa_150: Decimal::ZERO,
            tanker_dues_loa_175: Decimal::ZERO,
            tanker_dues_loa_175_plus: Decimal::ZERO,
        }
    }

    /// The LOA-banded bulker tariff shared by the terminals that use it.
    pub fn with_loa_threshold_dues(self) -> Self {
        Self {
            port_dues_loa_threshold: dec!(225),
            port_dues_rate_above_threshold: dec!(0.45),
            port_dues_rate_below_threshold: dec!(0.43),
            port_dues_min_above_threshold: dec!(5200),
            port_dues_min_below_threshold: dec!(4800),
            ..self
        }
    }
}

impl Default for TariffParameters {
    fn default() -> Self {
        Self::baseline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_override_keeps_base() {
        let base = TariffParameters::baseline();
        let effective = ParameterOverride::new().layered_on(&base);
        assert_eq!(effective, base);
    }

    #[test]
    fn test_override_replaces_only_set_fields() {
        let base = TariffParameters::baseline();
        let over = ParameterOverride {
            watchmen: Some(dec!(1850)),
            isps_per_day: Some(true),
            ..Default::default()
        };
        let effective = over.layered_on(&base);
        assert_eq!(effective.watchmen, dec!(1850));
        assert!(effective.isps_per_day);
        assert_eq!(effective.custom_house, dec!(600));
    }

    #[test]
    fn test_set_fields_and_is_empty() {
        let mut over = ParameterOverride::new();
        assert!(over.is_empty());
        over.tugboat = Some(dec!(19000));
        assert!(!over.is_empty());
        assert_eq!(over.set_fields(), vec!["tugboat"]);
    }

    #[test]
    fn test_copy_field() {
        let defaults = ParameterOverride {
            pilot_base: Some(dec!(3020)),
            ..Default::default()
        };
        let mut edited = ParameterOverride {
            pilot_base: Some(dec!(9999)),
            tugboat: Some(dec!(1)),
            ..Default::default()
        };
        edited.copy_field("pilot_base", &defaults).unwrap();
        edited.copy_field("tugboat", &defaults).unwrap();
        assert_eq!(edited.pilot_base, Some(dec!(3020)));
        assert_eq!(edited.tugboat, None);

        let err = edited.copy_field("pilotBase", &defaults).unwrap_err();
        assert_eq!(err, ParameterError::UnknownField("pilotBase".into()));
    }

    #[test]
    fn test_override_rejects_unknown_json_fields() {
        let ok: ParameterOverride = serde_json::from_str(r#"{"isps_charge": 950}"#).unwrap();
        assert_eq!(ok.isps_charge, Some(dec!(950)));

        let bad = serde_json::from_str::<ParameterOverride>(r#"{"ispsCharge": 950}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_field_list_is_complete() {
        assert_eq!(ParameterOverride::FIELDS.len(), 36);
        assert!(ParameterOverride::FIELDS.contains(&"port_dues_min_weekend"));
    }
}
