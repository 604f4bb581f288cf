use crate::tariff::parameters::{ParameterError, ParameterOverride, TariffParameters};
use crate::terminals::Terminal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resolve the parameter record for a port.
///
/// A supplied override is returned as-is; it is not merged with the stored
/// defaults. Without one, the terminal's stored defaults are returned, and
/// an unknown port yields an empty record.
pub fn resolve(port_id: &str, override_params: Option<&ParameterOverride>) -> ParameterOverride {
    if let Some(params) = override_params {
        return params.clone();
    }
    Terminal::from_id(port_id)
        .map(|terminal| terminal.default_parameters())
        .unwrap_or_default()
}

/// Layer a resolved record onto the terminal's per-field fallbacks.
pub fn effective_parameters(terminal: Terminal, params: &ParameterOverride) -> TariffParameters {
    params.layered_on(&terminal.fallback_parameters())
}

/// In-memory store of per-terminal parameter overrides.
///
/// Terminals without an override resolve to their stored defaults.
/// Persisting the store is left to the caller; it serializes to JSON.
///
/// # Examples
///
/// ```
/// use pda_engine::tariff::parameters::ParameterOverride;
/// use pda_engine::tariff::resolver::ParameterStore;
/// use rust_decimal_macros::dec;
///
/// let mut store = ParameterStore::new();
/// let mut params = store.resolve("vitco");
/// params.watchmen = Some(dec!(1700));
/// store.set_override("vitco", params).unwrap();
/// assert_eq!(store.resolve("vitco").watchmen, Some(dec!(1700)));
///
/// store.reset("vitco");
/// assert_eq!(store.resolve("vitco").watchmen, Some(dec!(1555)));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterStore {
    overrides: BTreeMap<Terminal, ParameterOverride>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the override for a port.
    ///
    /// Rejects unknown ports and fields the terminal's tariff never reads.
    pub fn set_override(
        &mut self,
        port_id: &str,
        params: ParameterOverride,
    ) -> Result<(), ParameterError> {
        let terminal = lookup(port_id)?;
        let applicable = terminal.parameter_fields();
        if let Some(field) = params
            .set_fields()
            .into_iter()
            .find(|field| !applicable.contains(field))
        {
            return Err(ParameterError::NotApplicable {
                port: port_id.to_string(),
                field: field.to_string(),
            });
        }
        log::debug!("storing parameter override for {}", terminal);
        self.overrides.insert(terminal, params);
        Ok(())
    }

    pub fn override_for(&self, port_id: &str) -> Option<&ParameterOverride> {
        let terminal = Terminal::from_id(port_id)?;
        self.overrides.get(&terminal)
    }

    /// Effective record for a port: its override, else its stored defaults.
    pub fn resolve(&self, port_id: &str) -> ParameterOverride {
        resolve(port_id, self.override_for(port_id))
    }

    /// Drop a port's override so it resolves to its defaults again.
    /// Returns whether an override was present.
    pub fn reset(&mut self, port_id: &str) -> bool {
        match Terminal::from_id(port_id) {
            Some(terminal) => self.overrides.remove(&terminal).is_some(),
            None => false,
        }
    }

    pub fn reset_all(&mut self) {
        self.overrides.clear();
    }

    /// Restore a single field of a port's record to its stored default,
    /// which may leave the field unset.
    pub fn reset_field(&mut self, port_id: &str, field: &str) -> Result<(), ParameterError> {
        let terminal = lookup(port_id)?;
        let defaults = terminal.default_parameters();
        let mut current = self.resolve(port_id);
        current.copy_field(field, &defaults)?;
        self.overrides.insert(terminal, current);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

fn lookup(port_id: &str) -> Result<Terminal, ParameterError> {
    Terminal::from_id(port_id).ok_or_else(|| ParameterError::UnknownPort(port_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_resolve_without_override_returns_defaults() {
        for terminal in Terminal::ALL {
            assert_eq!(resolve(terminal.id(), None), terminal.default_parameters());
        }
    }

    #[test]
    fn test_resolve_unknown_port_is_empty() {
        assert!(resolve("puerto-madero", None).is_empty());
    }

    #[test]
    fn test_override_wins_entirely() {
        let over = ParameterOverride {
            pilot_base: Some(dec!(3000)),
            ..Default::default()
        };
        let resolved = resolve("delta-dock", Some(&over));
        assert_eq!(resolved, over);
        assert_eq!(resolved.isps_charge, None);
    }

    #[test]
    fn test_effective_parameters_fall_back_per_field() {
        let over = ParameterOverride {
            pilot_base: Some(dec!(3000)),
            ..Default::default()
        };
        let effective = effective_parameters(Terminal::DeltaDock, &over);
        assert_eq!(effective.pilot_base, dec!(3000));
        assert_eq!(effective.isps_charge, dec!(900));
        assert!(!effective.isps_per_day);
    }

    #[test]
    fn test_store_rejects_unknown_port() {
        let mut store = ParameterStore::new();
        let err = store
            .set_override("puerto-madero", ParameterOverride::new())
            .unwrap_err();
        assert_eq!(err, ParameterError::UnknownPort("puerto-madero".into()));
    }

    #[test]
    fn test_store_rejects_inapplicable_field() {
        let mut store = ParameterStore::new();
        let over = ParameterOverride {
            tugboat: Some(dec!(20000)),
            ..Default::default()
        };
        let err = store.set_override("siderca", over).unwrap_err();
        assert_eq!(
            err,
            ParameterError::NotApplicable {
                port: "siderca".into(),
                field: "tugboat".into()
            }
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_reset_restores_defaults_field_by_field() {
        let mut store = ParameterStore::new();
        let over = ParameterOverride {
            port_dues_rate: Some(dec!(0.5)),
            ..Default::default()
        };
        store.set_override("san-pedro", over).unwrap();
        assert!(store.reset("san-pedro"));
        assert!(!store.reset("san-pedro"));

        let defaults = Terminal::SanPedro.default_parameters();
        let resolved = store.resolve("san-pedro");
        let resolved_json = serde_json::to_value(&resolved).unwrap();
        let defaults_json = serde_json::to_value(&defaults).unwrap();
        for field in ParameterOverride::FIELDS {
            assert_eq!(resolved_json.get(field), defaults_json.get(field), "{}", field);
        }
    }

    #[test]
    fn test_reset_field() {
        let mut store = ParameterStore::new();
        let mut params = store.resolve("del-guazu");
        params.tugboat = Some(dec!(18000));
        params.watchmen = Some(dec!(1600));
        store.set_override("del-guazu", params).unwrap();

        store.reset_field("del-guazu", "tugboat").unwrap();
        let resolved = store.resolve("del-guazu");
        assert_eq!(resolved.tugboat, Some(dec!(21000)));
        assert_eq!(resolved.watchmen, Some(dec!(1600)));

        assert_eq!(
            store.reset_field("del-guazu", "no_such_field"),
            Err(ParameterError::UnknownField("no_such_field".into()))
        );
    }

    #[test]
    fn test_store_json_round_trip_keeps_port_ids() {
        let mut store = ParameterStore::new();
        let over = ParameterOverride {
            head_clerk: Some(dec!(1200)),
            ..Default::default()
        };
        store.set_override("las-palmas", over).unwrap();
        let json = serde_json::to_value(&store).unwrap();
        assert!(json["overrides"].get("las-palmas").is_some());
    }
}
