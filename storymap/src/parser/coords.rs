//! Parser des coordonnées (tout ou rien)

use crate::types::Coordinates;

/// Parse latitude et longitude ensemble
///
/// Si l'une des deux valeurs est absente ou non numérique, aucune
/// coordonnée n'est retournée: jamais de latitude sans longitude.
pub fn parse_coordinates(lat: Option<&str>, lon: Option<&str>) -> Option<Coordinates> {
    let latitude = parse_number(lat?)?;
    let longitude = parse_number(lon?)?;

    Some(Coordinates {
        latitude,
        longitude,
    })
}

/// Parse un nombre flottant fini
///
/// NaN et infini sont rejetés: ils ne se sérialisent pas en JSON.
fn parse_number(raw: &str) -> Option<f64> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    fast_float::parse::<f64, _>(value)
        .ok()
        .filter(|v| v.is_finite())
}
