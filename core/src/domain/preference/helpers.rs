/// Splits a comma-separated list the way profile forms submit it: items are
/// trimmed and empty segments dropped.
pub fn parse_name_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Trims every name and drops duplicates, keeping first-occurrence order.
/// Whitespace-only entries survive as empty strings so the resolver can
/// reject them explicitly.
pub fn normalize_names(names: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .into_iter()
        .map(|name| name.trim().to_owned())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_trims_and_drops_empties() {
        assert_eq!(
            parse_name_list(" vegan , gluten-free ,, "),
            vec!["vegan".to_owned(), "gluten-free".to_owned()]
        );
        assert_eq!(parse_name_list(""), Vec::<String>::new());
    }

    #[test]
    fn normalize_collapses_duplicates_after_trimming() {
        let names = vec![" peanut ".to_owned(), "peanut".to_owned(), "milk".to_owned()];
        assert_eq!(
            normalize_names(names),
            vec!["peanut".to_owned(), "milk".to_owned()]
        );
    }

    #[test]
    fn normalize_keeps_first_occurrence_order() {
        let names = vec!["b".to_owned(), "a".to_owned(), "b ".to_owned()];
        assert_eq!(normalize_names(names), vec!["b".to_owned(), "a".to_owned()]);
    }
}
