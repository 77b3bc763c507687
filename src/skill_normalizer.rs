use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Canonical skill key → interchangeable surface forms.
///
/// Static configuration shared by the normalizer, the description skill
/// extractor and (indirectly) the skill matcher. The vocabulary targets the
/// supply-chain / planning postings this tool was built around.
pub static SYNONYM_TABLE: &[(&str, &[&str])] = &[
    ("anaplan", &["anaplan", "adaptive insights", "hyperion", "epm"]),
    ("sap", &["sap", "sap apo", "sap ibp", "sap scm", "sap pp", "sap mm"]),
    (
        "planning",
        &[
            "planning",
            "demand planning",
            "supply planning",
            "production planning",
            "capacity planning",
        ],
    ),
    (
        "excel",
        &["excel", "microsoft excel", "vba", "pivot tables", "macros"],
    ),
    ("python", &["python", "pandas", "numpy", "jupyter"]),
    (
        "sql",
        &["sql", "mysql", "postgresql", "oracle", "sql server"],
    ),
    ("power bi", &["power bi", "powerbi", "dax", "power query"]),
    (
        "tableau",
        &["tableau", "tableau desktop", "tableau server"],
    ),
];

/// Surface form → canonical key, O(1) lookup.
static ALIAS_TO_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (canonical, surfaces) in SYNONYM_TABLE {
        map.insert(*canonical, *canonical);
        for surface in *surfaces {
            map.insert(*surface, *canonical);
        }
    }
    map
});

/// Separator-stripped surface form → canonical, to absorb light spelling
/// variation ("Power-BI", "sql_server") without a fuzzy pass.
static COMPACT_ALIAS_TO_CANONICAL: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (alias, canonical) in ALIAS_TO_CANONICAL.iter() {
        map.entry(compact_key(alias)).or_insert(*canonical);
    }
    map
});

static CANONICAL_TO_SURFACES: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        SYNONYM_TABLE
            .iter()
            .map(|(canonical, surfaces)| (*canonical, *surfaces))
            .collect()
    });

fn lower_trim(input: &str) -> String {
    input.trim().to_lowercase()
}

fn compact_key(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '_' | '/'))
        .collect()
}

/// Map a skill string to its canonical key; unknown tokens fall back to
/// their lowercased, trimmed form.
pub fn normalize_skill(skill: &str) -> String {
    let normalized = lower_trim(skill);
    if let Some(canonical) = ALIAS_TO_CANONICAL.get(normalized.as_str()) {
        return (*canonical).to_string();
    }
    if let Some(canonical) = COMPACT_ALIAS_TO_CANONICAL.get(&compact_key(&normalized)) {
        return (*canonical).to_string();
    }
    normalized
}

/// Expand a skill into its full synonym set. Tokens without a table entry
/// expand to the singleton of their lowercased form. Idempotent: expanding
/// any member of a synonym set yields the same set.
pub fn expand_skill(skill: &str) -> HashSet<String> {
    let canonical = normalize_skill(skill);
    match CANONICAL_TO_SURFACES.get(canonical.as_str()) {
        Some(surfaces) => surfaces.iter().map(|s| (*s).to_string()).collect(),
        None => HashSet::from([canonical]),
    }
}

/// Union of expansions over a skill list, blanks skipped.
pub fn normalize_skill_set(skills: &[String]) -> HashSet<String> {
    let mut set = HashSet::new();
    for skill in skills {
        if skill.trim().is_empty() {
            continue;
        }
        set.extend(expand_skill(skill));
    }
    set
}

/// Canonical forms only (no synonym expansion), deduplicated.
pub fn canonical_skill_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| normalize_skill(s))
        .collect()
}
