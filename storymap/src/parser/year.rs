//! Extraction de l'année depuis le libellé du cycle de subvention

use std::ops::RangeInclusive;

/// Années acceptées
pub const YEAR_RANGE: RangeInclusive<u16> = 2000..=2050;

/// Extrait l'année des 4 premiers caractères (ex: "2023-2024 Cycle" -> 2023)
///
/// Ce n'est pas un parsing de date: seul le préfixe est inspecté.
pub fn parse_year(raw: Option<&str>) -> Option<u16> {
    let value = raw?.trim();

    // Les 4 premiers caractères, pas les 4 premiers octets
    let end = value.char_indices().nth(4).map_or(value.len(), |(i, _)| i);
    if value[..end].chars().count() < 4 {
        return None;
    }

    let year: i32 = value[..end].parse().ok()?;
    u16::try_from(year).ok().filter(|y| YEAR_RANGE.contains(y))
}
