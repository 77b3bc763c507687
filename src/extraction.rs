//! Rule-based skill extraction from posting free text.
//!
//! Upstream scrapers deliver raw descriptions; this pass reduces them to the
//! canonical skill keys the matcher compares against. Output is sorted so a
//! scoring run is deterministic regardless of table iteration order.

use std::collections::BTreeSet;

use crate::skill_normalizer::SYNONYM_TABLE;

/// Extract the canonical skills mentioned in a posting description.
///
/// A skill counts as mentioned when any of its surface forms appears as a
/// substring of the lowercased text. Empty text yields an empty vector.
pub fn extract_skills(description: &str) -> Vec<String> {
    if description.trim().is_empty() {
        return Vec::new();
    }

    let text = description.to_lowercase();
    let mut found = BTreeSet::new();

    for (canonical, surfaces) in SYNONYM_TABLE {
        if surfaces.iter().any(|surface| text.contains(surface)) {
            found.insert((*canonical).to_string());
        }
    }

    found.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_skills_via_surface_forms() {
        let skills = extract_skills(
            "Looking for an Anaplan model builder with strong demand planning and DAX knowledge.",
        );
        assert_eq!(skills, vec!["anaplan", "planning", "power bi"]);
    }

    #[test]
    fn empty_description_yields_no_skills() {
        assert!(extract_skills("").is_empty());
        assert!(extract_skills("   ").is_empty());
    }

    #[test]
    fn skills_are_deduped_across_surfaces() {
        // "pandas" and "numpy" both map to python; only one entry comes out.
        let skills = extract_skills("pandas, numpy, and jupyter notebooks");
        assert_eq!(skills, vec!["python"]);
    }

    #[test]
    fn output_is_sorted() {
        let skills = extract_skills("Tableau dashboards fed from SQL and Excel macros");
        let mut sorted = skills.clone();
        sorted.sort();
        assert_eq!(skills, sorted);
    }
}
