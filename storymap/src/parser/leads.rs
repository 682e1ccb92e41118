//! Parser de la colonne des porteurs de projet

/// Découpe une liste de noms séparés par des virgules
///
/// Chaque nom est trimé puis débarrassé des guillemets qui l'entourent.
/// Les entrées vides sont ignorées, l'ordre et les doublons sont conservés.
pub fn parse_leads(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(',')
        .map(|lead| lead.trim().trim_matches('"'))
        .filter(|lead| !lead.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leads() {
        assert_eq!(
            parse_leads(Some("Ana Ruiz, \"Ben Cole\" ,Chris Tso")),
            vec!["Ana Ruiz", "Ben Cole", "Chris Tso"]
        );
    }

    #[test]
    fn test_parse_leads_empty() {
        assert!(parse_leads(None).is_empty());
        assert!(parse_leads(Some("")).is_empty());
        assert!(parse_leads(Some(" , ,\"\"")).is_empty());
    }

    #[test]
    fn test_parse_leads_keeps_order_and_duplicates() {
        assert_eq!(
            parse_leads(Some("Zoe, Adam, Zoe")),
            vec!["Zoe", "Adam", "Zoe"]
        );
    }
}
