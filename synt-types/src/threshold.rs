//! Named movement thresholds (MOVM) and their ordered set.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SyntError;

/// A named minimum movement magnitude.
///
/// A threshold is enabled only when its value is positive; `Threshold::new`
/// with a zero or negative value yields a disabled threshold, matching the
/// "zero disables" input convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threshold {
    name: String,
    value: Decimal,
    #[serde(default = "enabled_by_default")]
    enabled: bool,
}

const fn enabled_by_default() -> bool {
    true
}

impl Threshold {
    /// Create a threshold, enabled when `value > 0`.
    pub fn new(name: impl Into<String>, value: Decimal) -> Self {
        Self {
            name: name.into(),
            value,
            enabled: value > Decimal::ZERO,
        }
    }

    /// Create a threshold that is excluded from analysis regardless of its value.
    pub fn disabled(name: impl Into<String>, value: Decimal) -> Self {
        Self {
            name: name.into(),
            value,
            enabled: false,
        }
    }

    /// Threshold name, e.g. `MOVM1`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minimum movement that triggers this threshold.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// True when the threshold takes part in the analysis.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled && self.value > Decimal::ZERO
    }

    /// True when `movement` meets or exceeds this enabled threshold.
    #[must_use]
    pub fn is_met_by(&self, movement: Decimal) -> bool {
        self.is_enabled() && movement >= self.value
    }
}

/// Thresholds in declaration order. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Threshold>", into = "Vec<Threshold>")]
pub struct ThresholdSet {
    items: Vec<Threshold>,
}

impl ThresholdSet {
    /// Empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The four default thresholds MOVM1..MOVM4 at 3.00, 4.00, 5.00 and 6.00.
    #[must_use]
    pub fn movm_defaults() -> Self {
        let items = (1..=4)
            .map(|i| Threshold::new(format!("MOVM{i}"), Decimal::new(200 + 100 * i, 2)))
            .collect();
        Self { items }
    }

    /// Append a threshold, keeping declaration order.
    ///
    /// # Errors
    /// Returns `Err(SyntError::InvalidArg)` if a threshold with the same name exists.
    pub fn push(&mut self, threshold: Threshold) -> Result<(), SyntError> {
        if self.get(threshold.name()).is_some() {
            return Err(SyntError::InvalidArg(format!(
                "duplicate threshold name: {}",
                threshold.name()
            )));
        }
        self.items.push(threshold);
        Ok(())
    }

    /// Builder-style append of `Threshold::new(name, value)`.
    ///
    /// # Errors
    /// Returns `Err(SyntError::InvalidArg)` if the name is already present.
    pub fn with(mut self, name: impl Into<String>, value: Decimal) -> Result<Self, SyntError> {
        self.push(Threshold::new(name, value))?;
        Ok(self)
    }

    /// Look up a threshold by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Threshold> {
        self.items.iter().find(|t| t.name == name)
    }

    /// All thresholds, enabled or not, in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Threshold> {
        self.items.iter()
    }

    /// Enabled thresholds in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = &Threshold> {
        self.items.iter().filter(|t| t.is_enabled())
    }

    /// Copy of this set where every threshold except `name` is disabled.
    #[must_use]
    pub fn only(&self, name: &str) -> Self {
        let items = self
            .items
            .iter()
            .map(|t| {
                if t.name == name {
                    t.clone()
                } else {
                    Threshold::disabled(t.name.clone(), t.value)
                }
            })
            .collect();
        Self { items }
    }

    /// Number of thresholds, enabled or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the set holds no thresholds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TryFrom<Vec<Threshold>> for ThresholdSet {
    type Error = SyntError;

    fn try_from(items: Vec<Threshold>) -> Result<Self, Self::Error> {
        let mut set = Self::new();
        for t in items {
            set.push(t)?;
        }
        Ok(set)
    }
}

impl From<ThresholdSet> for Vec<Threshold> {
    fn from(set: ThresholdSet) -> Self {
        set.items
    }
}

impl<'a> IntoIterator for &'a ThresholdSet {
    type Item = &'a Threshold;
    type IntoIter = std::slice::Iter<'a, Threshold>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
