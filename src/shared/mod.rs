pub mod geo;
pub mod time;

pub use geo::*;
pub use time::*;

use std::cmp::Ordering;

/// Anything that can be found by a name search.
pub trait Identifiable {
    /// Lowercased display name.
    fn normalized_name(&self) -> &str;
}

/// Case insensitive substring match against the normalized name.
/// An empty needle matches everything.
pub fn name_contains<T: Identifiable>(hay: &T, needle: &str) -> bool {
    hay.normalized_name().contains(&needle.to_lowercase())
}

/// Orders names ignoring case first, the way a collator would at primary
/// strength. On a case-only difference lowercase sorts first, which keeps the
/// ordering total and consistent with `Eq`.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

#[test]
fn locale_cmp_test() {
    assert_eq!(locale_cmp("a", "B"), Ordering::Less);
    assert_eq!(locale_cmp("b", "A"), Ordering::Greater);
    assert_eq!(locale_cmp("a", "A"), Ordering::Less);
    assert_eq!(locale_cmp("550", "550"), Ordering::Equal);
    assert_eq!(locale_cmp("10", "9"), Ordering::Less);
}
