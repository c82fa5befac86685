use crate::data::Database;

/// Recover the base type hidden inside a magic item's display name.
///
/// Magic affix wording is not positionally fixed ("Heated Leather Belt of
/// the Boar" has both a prefix and a suffix, "Leather Belt of the Boar"
/// only a suffix), so the name cannot be trimmed by position. Instead
/// every contiguous word window is looked up in the base-type table and
/// the longest hit wins.
pub fn magic_base_type(name: &str, db: &Database) -> Option<String> {
    let words: Vec<&str> = name.split(' ').collect();
    let mut best: Option<String> = None;

    for start in 0..words.len() {
        for len in 1..=(words.len() - start) {
            let candidate = words[start..start + len].join(" ");
            if db.base_type(&candidate).is_some()
                && best.as_ref().map_or(true, |b| candidate.len() > b.len())
            {
                best = Some(candidate);
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_suffix() {
        let db = Database::shared();
        assert_eq!(
            magic_base_type("Heated Leather Belt of the Boar", db).as_deref(),
            Some("Leather Belt")
        );
    }

    #[test]
    fn test_suffix_only() {
        let db = Database::shared();
        assert_eq!(
            magic_base_type("Coral Ring of the Penguin", db).as_deref(),
            Some("Coral Ring")
        );
    }

    #[test]
    fn test_bare_base_type() {
        let db = Database::shared();
        assert_eq!(
            magic_base_type("Leather Belt", db).as_deref(),
            Some("Leather Belt")
        );
    }

    #[test]
    fn test_longest_window_wins() {
        let db = Database::shared();
        // "Vaal Regalia" must win over any shorter embedded hit
        assert_eq!(
            magic_base_type("Shimmering Vaal Regalia of the Wrestler", db).as_deref(),
            Some("Vaal Regalia")
        );
    }

    #[test]
    fn test_no_base_type_found() {
        let db = Database::shared();
        assert_eq!(magic_base_type("Utterly Unknown Trinket", db), None);
    }
}
