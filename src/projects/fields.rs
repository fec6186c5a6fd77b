use crate::catalog::field_ids;
use crate::models::{RawProject, SimplifiedProject};

/// Label of the first entry with `field_id`, or "" if the project has none.
pub fn field_value(project: &RawProject, field_id: u64) -> &str {
    project
        .fields
        .iter()
        .find(|f| f.field_id == field_id)
        .map(|f| f.field_value_label.as_str())
        .unwrap_or("")
}

pub fn simplify(project: &RawProject) -> SimplifiedProject {
    SimplifiedProject {
        project_id: project.project_id.clone(),
        project_name: project.project_name.clone(),
        implementation_manager: field_value(project, field_ids::IMPLEMENTATION_MANAGER)
            .to_string(),
        project_manager: field_value(project, field_ids::PROJECT_MANAGER).to_string(),
        current_status: field_value(project, field_ids::CURRENT_STATUS).to_string(),
        scope_of_work: field_value(project, field_ids::SCOPE_OF_WORK).to_string(),
    }
}

/// Whether any region entry of the project equals `region_code` exactly.
/// Unlike [`field_value`], a later duplicate entry can match.
pub fn in_region(project: &RawProject, region_code: &str) -> bool {
    project
        .fields
        .iter()
        .any(|f| f.field_id == field_ids::REGION && f.field_value_label == region_code)
}

pub fn filter_by_region<'a>(
    projects: &'a [RawProject],
    region_code: &'a str,
) -> impl Iterator<Item = &'a RawProject> {
    projects.iter().filter(move |p| in_region(p, region_code))
}

/// Split a scope-of-work string on commas and trim each item.
/// An empty input yields a single empty item.
pub fn split_scope(scope_of_work: &str) -> Vec<String> {
    scope_of_work
        .split(',')
        .map(|item| item.trim().to_string())
        .collect()
}

/// CSS class for a displayed status value.
pub fn status_class(current_status: &str) -> &'static str {
    match current_status {
        "Go-Live Ready" => "status-go-live-ready",
        "Testing" => "status-testing",
        _ => "",
    }
}
