//! Normalisation des valeurs brutes

/// Nettoie une cellule: trim, et None si la valeur est vide
pub fn clean_value(raw: Option<&str>) -> Option<String> {
    let value = raw?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
