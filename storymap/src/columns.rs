//! Correspondance entre champs des projets et en-têtes de la table

use serde::{Deserialize, Serialize};

/// Noms des colonnes sources (sensibles à la casse)
///
/// Chaque champ absent d'une configuration JSON reprend le nom par défaut
/// de la feuille StoryMap.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnMap {
    pub name: String,
    pub leads: String,
    pub affiliation: String,
    pub year: String,
    pub email: String,
    pub image_url: String,
    pub category: String,
    pub theme: String,
    pub product: String,
    pub location: String,
    pub latitude: String,
    pub longitude: String,
    pub bio: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            name: "Project Name".into(),
            leads: "Project Leads / Contributors".into(),
            affiliation: "Affiliation / Partner Organization".into(),
            year: "Year / Grant Cycle".into(),
            email: "Email".into(),
            image_url: "ImageUrl".into(),
            category: "Project Category/Type".into(),
            theme: "Subject / Theme".into(),
            product: "Product".into(),
            location: "By Project Location (need coordinates)".into(),
            latitude: "Latitude".into(),
            longitude: "Longitude".into(),
            bio: "Bio".into(),
        }
    }
}

impl ColumnMap {
    /// Liste des colonnes attendues, dans l'ordre de la feuille
    pub fn all(&self) -> [&str; 13] {
        [
            self.name.as_str(),
            self.leads.as_str(),
            self.affiliation.as_str(),
            self.year.as_str(),
            self.email.as_str(),
            self.image_url.as_str(),
            self.category.as_str(),
            self.theme.as_str(),
            self.product.as_str(),
            self.location.as_str(),
            self.latitude.as_str(),
            self.longitude.as_str(),
            self.bio.as_str(),
        ]
    }

    /// Colonnes attendues absentes de l'en-tête
    pub fn missing<'a>(&'a self, headers: &[String]) -> Vec<&'a str> {
        self.all()
            .into_iter()
            .filter(|column| !headers.iter().any(|h| h == column))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns() {
        let columns = ColumnMap::default();
        let headers = vec!["Project Name".to_string(), "Latitude".to_string()];
        let missing = columns.missing(&headers);

        assert_eq!(missing.len(), 11);
        assert!(!missing.contains(&"Project Name"));
        assert!(missing.contains(&"Longitude"));
    }

    #[test]
    fn test_all_columns_in_sheet_order() {
        let columns = ColumnMap::default();
        let all = columns.all();
        assert_eq!(all[0], "Project Name");
        assert_eq!(all[12], "Bio");
    }
}
