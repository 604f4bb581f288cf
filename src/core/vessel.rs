use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Banded classification of a vessel's draft at entry or exit.
///
/// Each band carries a fixed pilotage surcharge fraction. The bands are
/// ordered from shallowest to deepest.
///
/// # Examples
///
/// ```
/// use pda_engine::core::vessel::DraftCategory;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(DraftCategory::Over1036.surcharge(), dec!(0.30));
/// assert!(DraftCategory::UpTo853 < DraftCategory::Over853);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DraftCategory {
    #[default]
    #[serde(alias = "Igual o menor a 8.53m (0%)")]
    UpTo853,
    #[serde(alias = "Entre 8.53m y 9.14m (7.5%)")]
    Over853,
    #[serde(alias = "Entre 9.14m y 9.75m (15%)")]
    Over914,
    #[serde(alias = "Entre 9.75m y 10.36m (22.5%)")]
    Over975,
    #[serde(alias = "Mayor a 10.36m (30%)")]
    Over1036,
}

impl DraftCategory {
    /// All bands, shallowest first.
    pub const ALL: [DraftCategory; 5] = [
        DraftCategory::UpTo853,
        DraftCategory::Over853,
        DraftCategory::Over914,
        DraftCategory::Over975,
        DraftCategory::Over1036,
    ];

    /// Display label. The surcharge percentage is encoded in the text.
    pub fn label(&self) -> &'static str {
        match self {
            DraftCategory::UpTo853 => "Igual o menor a 8.53m (0%)",
            DraftCategory::Over853 => "Entre 8.53m y 9.14m (7.5%)",
            DraftCategory::Over914 => "Entre 9.14m y 9.75m (15%)",
            DraftCategory::Over975 => "Entre 9.75m y 10.36m (22.5%)",
            DraftCategory::Over1036 => "Mayor a 10.36m (30%)",
        }
    }

    /// Pilotage surcharge fraction for this band.
    pub fn surcharge(&self) -> Decimal {
        draft_surcharge(self.label())
    }
}

impl fmt::Display for DraftCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Map a draft label to its surcharge fraction.
///
/// Matches on the parenthesised percentage so that "(30%)" is never read
/// as "0%". Labels carrying none of the known percentages map to zero.
pub fn draft_surcharge(label: &str) -> Decimal {
    const BANDS: [(&str, Decimal); 5] = [
        ("(0%)", dec!(0)),
        ("(7.5%)", dec!(0.075)),
        ("(15%)", dec!(0.15)),
        ("(22.5%)", dec!(0.225)),
        ("(30%)", dec!(0.30)),
    ];

    BANDS
        .iter()
        .find(|(marker, _)| label.contains(marker))
        .map(|(_, fraction)| *fraction)
        .unwrap_or(Decimal::ZERO)
}

/// Hull class, consulted only by terminals whose tariff depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VesselType {
    Bulker,
    Tanker,
}

/// Vessel particulars for a single port call.
///
/// Dimensions are in meters, tonnages in registered tons. The engine does
/// not validate these values; a form or API layer in front of it does.
///
/// # Examples
///
/// ```
/// use pda_engine::core::vessel::{DraftCategory, ShipParticulars, VesselType};
/// use rust_decimal_macros::dec;
///
/// let ship = ShipParticulars::new(dec!(200), dec!(32), dec!(15), dec!(12000), dec!(20000), dec!(2))
///     .with_drafts(DraftCategory::UpTo853, DraftCategory::Over1036)
///     .with_route(false, true)
///     .with_vessel_type(VesselType::Bulker);
///
/// assert!(!ship.is_argentine_origin);
/// assert_eq!(ship.vessel_type, Some(VesselType::Bulker));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipParticulars {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vessel_name: Option<String>,
    pub loa: Decimal,
    pub beam: Decimal,
    pub depth_moulded: Decimal,
    pub nrt: Decimal,
    pub grt: Decimal,
    pub days_alongside: Decimal,
    #[serde(default)]
    pub draft_entry_category: DraftCategory,
    #[serde(default)]
    pub draft_exit_category: DraftCategory,
    #[serde(default)]
    pub is_argentine_origin: bool,
    #[serde(default)]
    pub is_argentine_destination: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vessel_type: Option<VesselType>,
    /// Overrides the quoted exchange rate for rate-sensitive items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_exchange_rate: Option<Decimal>,
}

impl ShipParticulars {
    /// Create particulars for a call arriving from and sailing to foreign ports,
    /// with shallow drafts on both legs. Use the `with_*` methods to adjust the rest.
    pub fn new(
        loa: Decimal,
        beam: Decimal,
        depth_moulded: Decimal,
        nrt: Decimal,
        grt: Decimal,
        days_alongside: Decimal,
    ) -> Self {
        Self {
            vessel_name: None,
            loa,
            beam,
            depth_moulded,
            nrt,
            grt,
            days_alongside,
            draft_entry_category: DraftCategory::UpTo853,
            draft_exit_category: DraftCategory::UpTo853,
            is_argentine_origin: false,
            is_argentine_destination: false,
            vessel_type: None,
            manual_exchange_rate: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.vessel_name = Some(name.into());
        self
    }

    pub fn with_drafts(mut self, entry: DraftCategory, exit: DraftCategory) -> Self {
        self.draft_entry_category = entry;
        self.draft_exit_category = exit;
        self
    }

    /// Set whether the previous and next ports are domestic.
    pub fn with_route(mut self, argentine_origin: bool, argentine_destination: bool) -> Self {
        self.is_argentine_origin = argentine_origin;
        self.is_argentine_destination = argentine_destination;
        self
    }

    pub fn with_vessel_type(mut self, vessel_type: VesselType) -> Self {
        self.vessel_type = Some(vessel_type);
        self
    }

    pub fn with_manual_exchange_rate(mut self, rate: Decimal) -> Self {
        self.manual_exchange_rate = Some(rate);
        self
    }

    pub fn entry_surcharge(&self) -> Decimal {
        self.draft_entry_category.surcharge()
    }

    pub fn exit_surcharge(&self) -> Decimal {
        self.draft_exit_category.surcharge()
    }
}
