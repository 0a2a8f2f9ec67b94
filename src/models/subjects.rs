//! Static arXiv subject and subcategory tables.
//!
//! Reference data only; nothing in the request path validates against it.

/// Subject codes and their display names
pub const SUBJECTS: &[(&str, &str)] = &[
    ("physics", "Physics"),
    ("math", "Mathematics"),
    ("cs", "Computer Science"),
    ("q-bio", "Quantitative Biology"),
    ("q-fin", "Quantitative Finance"),
    ("stat", "Statistics"),
    ("eess", "Electrical Engineering and Systems Science"),
    ("econ", "Economics"),
];

/// Subcategory codes for each subject
pub const SUBCATEGORIES: &[(&str, &[&str])] = &[
    (
        "physics",
        &[
            "acc-ph", "ao-ph", "app-ph", "atm-clus", "atom-ph", "bio-ph", "chem-ph", "class-ph",
            "comp-ph", "data-an", "ed-ph", "flu-dyn", "gen-ph", "geo-ph", "hist-ph", "ins-det",
            "med-ph", "optics", "plasm-ph", "pop-ph", "soc-ph", "space-ph",
        ],
    ),
    (
        "math",
        &[
            "AC", "AG", "AP", "AT", "CA", "CO", "CT", "CV", "DG", "DS", "FA", "GM", "GN", "GR",
            "GT", "HO", "IT", "KT", "LO", "MG", "MP", "NA", "NT", "OA", "OC", "PR", "QA", "RA",
            "RT", "SG", "SP", "ST",
        ],
    ),
    (
        "cs",
        &[
            "AI", "AR", "CC", "CE", "CG", "CL", "CR", "CV", "CY", "DB", "DC", "DL", "DM", "DS",
            "ET", "FL", "GL", "GR", "GT", "HC", "IR", "IT", "LG", "LO", "MA", "MM", "MS", "NA",
            "NE", "NI", "OH", "OS", "PF", "PL", "RO", "SC", "SD", "SE", "SI", "SY",
        ],
    ),
    (
        "q-bio",
        &["BM", "CB", "GN", "MN", "NC", "OT", "PE", "QM", "SC", "TO"],
    ),
    (
        "q-fin",
        &["CP", "EC", "GN", "MF", "PM", "PR", "RM", "ST", "TR"],
    ),
    ("stat", &["AP", "CO", "ME", "ML", "OT", "TH"]),
    ("eess", &["AS", "IV", "SP"]),
    ("econ", &["EM"]),
];

/// Display name for a subject code, e.g. `"cs"` -> `"Computer Science"`
pub fn subject_name(code: &str) -> Option<&'static str> {
    SUBJECTS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Subcategory codes for a subject
pub fn subcategories(code: &str) -> Option<&'static [&'static str]> {
    SUBCATEGORIES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, subs)| *subs)
}

/// Whether `category` is a known `subject.SUB` pair, or a bare subject code
pub fn is_known_category(category: &str) -> bool {
    match category.split_once('.') {
        Some((subject, sub)) => subcategories(subject).is_some_and(|subs| subs.contains(&sub)),
        None => subject_name(category).is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_name() {
        assert_eq!(subject_name("cs"), Some("Computer Science"));
        assert_eq!(subject_name("q-fin"), Some("Quantitative Finance"));
        assert_eq!(subject_name("astro-ph"), None);
    }

    #[test]
    fn test_every_subject_has_subcategories() {
        for (code, _) in SUBJECTS {
            assert!(subcategories(code).is_some(), "missing subcategories for {}", code);
        }
        assert_eq!(SUBJECTS.len(), SUBCATEGORIES.len());
    }

    #[test]
    fn test_is_known_category() {
        assert!(is_known_category("cs.AI"));
        assert!(is_known_category("physics.optics"));
        assert!(is_known_category("math"));
        assert!(!is_known_category("cs.XX"));
        assert!(!is_known_category("bogus.AI"));
        assert!(!is_known_category(""));
    }
}
