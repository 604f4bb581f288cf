use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of a disbursement account.
///
/// `amount_usd` is already rounded by the rule that produced it. Lines that
/// carry no separate charge (included in another item, or not applicable at
/// the terminal) have a zero amount and a `custom_display_value` the
/// presentation layer shows instead of the number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostItem {
    pub name: String,
    pub amount_usd: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_display_value: Option<String>,
}

impl CostItem {
    pub fn new(name: impl Into<String>, amount_usd: Decimal) -> Self {
        Self {
            name: name.into(),
            amount_usd,
            description: None,
            custom_display_value: None,
        }
    }

    /// A zero-amount line that is folded into another charge.
    pub fn included(name: impl Into<String>, note: impl Into<String>) -> Self {
        let note = note.into();
        Self {
            name: name.into(),
            amount_usd: Decimal::ZERO,
            description: Some(note.clone()),
            custom_display_value: Some(note),
        }
    }

    /// A zero-amount line for a charge the terminal does not levy.
    pub fn not_applicable(name: impl Into<String>) -> Self {
        Self::included(name, "N/A")
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_display_value(mut self, value: impl Into<String>) -> Self {
        self.custom_display_value = Some(value.into());
        self
    }
}

/// Ordered list of cost items plus their total.
///
/// Item order is the presentation order. The total is the exact sum of the
/// item amounts and is never rounded again. A deserialized bill recomputes
/// its total from its items; any `total_usd` in the input is ignored.
///
/// # Examples
///
/// ```
/// use pda_engine::core::bill::{CostItem, ItemizedBill};
/// use rust_decimal_macros::dec;
///
/// let mut bill = ItemizedBill::new();
/// bill.push(CostItem::new("Port dues", dec!(4800)));
/// bill.push(CostItem::new("Light dues", dec!(349)));
///
/// assert_eq!(bill.total_usd(), dec!(5149));
/// assert_eq!(bill.items()[0].name, "Port dues");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BillItems")]
pub struct ItemizedBill {
    items: Vec<CostItem>,
    total_usd: Decimal,
}

#[derive(Deserialize)]
struct BillItems {
    items: Vec<CostItem>,
}

impl From<BillItems> for ItemizedBill {
    fn from(record: BillItems) -> Self {
        record.items.into_iter().collect()
    }
}

impl ItemizedBill {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bill returned for ports the engine does not price.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: CostItem) {
        self.total_usd = self.total_usd.saturating_add(item.amount_usd);
        self.items.push(item);
    }

    pub fn items(&self) -> &[CostItem] {
        &self.items
    }

    pub fn total_usd(&self) -> Decimal {
        self.total_usd
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find a line by its label.
    pub fn item(&self, name: &str) -> Option<&CostItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Amount of the named line, or zero when the bill has no such line.
    pub fn amount_of(&self, name: &str) -> Decimal {
        self.item(name)
            .map(|item| item.amount_usd)
            .unwrap_or(Decimal::ZERO)
    }
}

impl FromIterator<CostItem> for ItemizedBill {
    fn from_iter<T: IntoIterator<Item = CostItem>>(iter: T) -> Self {
        let mut bill = ItemizedBill::new();
        for item in iter {
            bill.push(item);
        }
        bill
    }
}

impl fmt::Display for ItemizedBill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Proforma Disbursement Account ===")?;
        for item in &self.items {
            let amount = match &item.custom_display_value {
                Some(value) => value.clone(),
                None => format!("USD {}", item.amount_usd),
            };
            match &item.description {
                Some(description) if item.custom_display_value.as_ref() != Some(description) => {
                    writeln!(f, "{:<28} {:>24}  ({})", item.name, amount, description)?
                }
                _ => writeln!(f, "{:<28} {:>24}", item.name, amount)?,
            }
        }
        writeln!(f, "{:<28} {:>24}", "TOTAL ESTIMATED", format!("USD {}", self.total_usd))
    }
}
