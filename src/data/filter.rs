use std::fmt;

use serde::Serialize;

use super::model::{LaunchDataset, LaunchRecord};

/// Dropdown value meaning "every site".
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// Site selection
// ---------------------------------------------------------------------------

/// The site dropdown's value: the `ALL` sentinel or one concrete site name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a raw dropdown value. Any string other than `ALL` names a site,
    /// whether or not the dataset knows it.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// The raw dropdown value.
    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(s) => s,
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(s) => record.launch_site == *s,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

// ---------------------------------------------------------------------------
// Payload range
// ---------------------------------------------------------------------------

/// Closed payload interval `[low, high]` in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    /// Returns `None` when `low > high` or either bound is NaN.
    pub fn new(low: f64, high: f64) -> Option<Self> {
        (low <= high).then_some(PayloadRange { low, high })
    }

    /// The range spanning every payload in the dataset.
    pub fn extent_of(dataset: &LaunchDataset) -> Self {
        PayloadRange {
            low: dataset.min_payload,
            high: dataset.max_payload,
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.low && payload_mass_kg <= self.high
    }
}

// ---------------------------------------------------------------------------
// Combined selection + index filters
// ---------------------------------------------------------------------------

/// Current state of both controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl FilterSelection {
    /// `ALL` over the dataset's whole payload extent.
    pub fn initial(dataset: &LaunchDataset) -> Self {
        FilterSelection {
            site: SiteSelection::All,
            payload: PayloadRange::extent_of(dataset),
        }
    }
}

/// Indices of records launched from the selected site (all records for `ALL`).
pub fn site_indices(dataset: &LaunchDataset, site: &SiteSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| site.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of records passing both the site and the payload predicates.
pub fn filtered_indices(dataset: &LaunchDataset, selection: &FilterSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            selection.payload.contains(rec.payload_mass_kg) && selection.site.matches(rec)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("A", 500.0, 1, "v1.0"),
            record("A", 1500.0, 0, "FT"),
            record("A", 3000.0, 1, "FT"),
            record("B", 1000.0, 0, "B4"),
        ])
    }

    #[test]
    fn sentinel_parses_to_all() {
        assert_eq!(SiteSelection::from_value("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::from_value("A"),
            SiteSelection::Site("A".to_string())
        );
        assert_eq!(SiteSelection::Site("A".into()).value(), "A");
    }

    #[test]
    fn reversed_or_nan_range_is_rejected() {
        assert!(PayloadRange::new(10.0, 5.0).is_none());
        assert!(PayloadRange::new(f64::NAN, 5.0).is_none());
        assert!(PayloadRange::new(5.0, 5.0).is_some());
    }

    #[test]
    fn bounds_are_inclusive() {
        let ds = dataset();
        let selection = FilterSelection {
            site: SiteSelection::All,
            payload: PayloadRange::new(1000.0, 3000.0).unwrap(),
        };
        assert_eq!(filtered_indices(&ds, &selection), vec![1, 2, 3]);
    }

    #[test]
    fn concrete_site_narrows_the_range_filter() {
        let ds = dataset();
        let selection = FilterSelection {
            site: SiteSelection::Site("A".into()),
            payload: PayloadRange::new(1000.0, 3000.0).unwrap(),
        };
        assert_eq!(filtered_indices(&ds, &selection), vec![1, 2]);
    }

    #[test]
    fn unknown_site_matches_nothing() {
        let ds = dataset();
        let site = SiteSelection::Site("nowhere".into());
        assert!(site_indices(&ds, &site).is_empty());
        assert_eq!(site_indices(&ds, &SiteSelection::All).len(), 4);
    }

    #[test]
    fn initial_selection_covers_everything() {
        let ds = dataset();
        let selection = FilterSelection::initial(&ds);
        assert_eq!(selection.payload, PayloadRange { low: 500.0, high: 3000.0 });
        assert_eq!(filtered_indices(&ds, &selection).len(), ds.len());
    }
}
