//! Static contract data for the Rocketlane workspace this dashboard reads.
//!
//! Field IDs and status filter values are fixed by the upstream workspace
//! configuration; they are not discovered from API metadata.

use serde::Serialize;

/// Custom field IDs in the upstream field bag.
pub mod field_ids {
    pub const REGION: u64 = 565384;
    pub const IMPLEMENTATION_MANAGER: u64 = 51409;
    pub const PROJECT_MANAGER: u64 = 625583;
    pub const CURRENT_STATUS: u64 = 26538;
    /// Comma-separated list of work items.
    pub const SCOPE_OF_WORK: u64 = 643919;
}

/// Fields requested on region listings. Includes IDs that are not displayed
/// yet but are kept in the request for forward compatibility.
pub const INCLUDE_FIELDS: [u64; 11] = [
    26526, 565384, 51409, 26472, 284254, 625583, 26538, 190414, 25821, 687147, 643919,
];

/// Query parameter that filters projects by the current-status field.
pub const STATUS_FILTER_PARAM: &str = "project.field.26538.value";

/// `includeFields` query value, e.g. `fields.26526,fields.565384,...`.
pub fn include_fields_param() -> String {
    INCLUDE_FIELDS
        .iter()
        .map(|id| format!("fields.{id}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StatusCategory {
    #[serde(rename = "Go-Live Ready")]
    GoLiveReady,
    #[serde(rename = "Testing")]
    Testing,
}

impl StatusCategory {
    /// Tracked categories in display order.
    pub const ALL: [StatusCategory; 2] = [StatusCategory::GoLiveReady, StatusCategory::Testing];

    pub fn label(self) -> &'static str {
        match self {
            StatusCategory::GoLiveReady => "Go-Live Ready",
            StatusCategory::Testing => "Testing",
        }
    }

    /// Upstream value of the current-status field for this category.
    pub fn filter_value(self) -> &'static str {
        match self {
            StatusCategory::GoLiveReady => "18",
            StatusCategory::Testing => "4",
        }
    }
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionDescriptor {
    pub code: &'static str,
    pub name: &'static str,
}

pub const REGIONS: [RegionDescriptor; 6] = [
    RegionDescriptor { code: "IN", name: "India" },
    RegionDescriptor { code: "MEA", name: "Middle East & Africa" },
    RegionDescriptor { code: "SEA", name: "South East Asia" },
    RegionDescriptor { code: "EU", name: "Europe" },
    RegionDescriptor { code: "LATAM", name: "Latin America" },
    RegionDescriptor { code: "US", name: "United States" },
];

/// Exact, case-sensitive lookup by region code.
pub fn find_region(code: &str) -> Option<&'static RegionDescriptor> {
    REGIONS.iter().find(|r| r.code == code)
}
