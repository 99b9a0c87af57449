//! Interactive control definitions and their legal value domains.
//!
//! Two controls drive the dashboard: a single-select launch-site control and
//! a dual-handle payload-mass range control. Their domains come from the
//! loaded dataset (never hardcoded); out-of-domain range values clamp rather
//! than error, since these are UI controls.

use serde::{Deserialize, Serialize};

use crate::store::DatasetStore;

/// Sentinel value for the "all sites" selection.
pub const ALL_SITES: &str = "ALL";

/// Fixed upper bound of the payload slider, independent of the dataset's
/// true maximum.
pub const DEFAULT_PAYLOAD_CEILING: f64 = 10_000.0;

/// Identity of an interactive control, used as the key of the reactive
/// dependency map.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlId {
    SiteSelector,
    PayloadRange,
}

/// Current value of the site selector: the `"ALL"` sentinel or one site.
///
/// Serialized as a plain string so the frontend sends exactly what the
/// dropdown holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a raw control value, mapping the sentinel to [`SiteSelection::All`].
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        SiteSelection::parse(&value)
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        match selection {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

/// Closed real interval that bounds a range control.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeDomain {
    pub min: f64,
    pub max: f64,
}

/// Selected `[low, high]` window of the payload-range control, in kilograms.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Default selected window of the slider.
    pub fn default_selection() -> Self {
        Self::new(0.0, DEFAULT_PAYLOAD_CEILING)
    }

    /// Clamp both handles into `domain` and restore `low <= high`.
    /// Externally supplied values outside the domain clamp, never error.
    pub fn clamped(self, domain: RangeDomain) -> Self {
        let mut low = self.low.clamp(domain.min, domain.max);
        let mut high = self.high.clamp(domain.min, domain.max);
        if low > high {
            std::mem::swap(&mut low, &mut high);
        }
        Self { low, high }
    }

    /// Inclusive membership test used by the scatter aggregation.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

/// The set of controls exposed by the dashboard, with domains derived from
/// the loaded dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlRegistry {
    /// Site selector options: the `"ALL"` sentinel followed by every
    /// distinct site exactly once, in first-seen order.
    pub site_options: Vec<String>,
    /// Domain of the payload slider: dataset minimum up to the configured
    /// ceiling (the ceiling is fixed regardless of the true maximum).
    pub payload_domain: RangeDomain,
}

impl ControlRegistry {
    pub fn from_store(store: &DatasetStore, payload_ceiling: f64) -> Self {
        let mut site_options = Vec::with_capacity(store.sites().len() + 1);
        site_options.push(ALL_SITES.to_string());
        site_options.extend(store.sites().iter().cloned());

        Self {
            site_options,
            payload_domain: RangeDomain {
                min: store.payload_bounds().min,
                max: payload_ceiling,
            },
        }
    }

    /// Whether `site` is a legal selector value (sentinel included).
    pub fn is_known_site(&self, site: &str) -> bool {
        self.site_options.iter().any(|s| s == site)
    }

    /// Default control state: all sites, full default payload window
    /// clamped into this registry's domain.
    pub fn default_state(&self) -> ControlState {
        ControlState {
            site: SiteSelection::All,
            payload: PayloadRange::default_selection().clamped(self.payload_domain),
        }
    }
}

/// Current value of every control. Owned by the UI event loop and written
/// only in response to a user action; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}
