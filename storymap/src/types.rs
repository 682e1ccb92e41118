//! Types de données pour le crate storymap

use std::collections::HashMap;

use serde::Serialize;

use crate::StoryMapError;

/// Résultat de la lecture d'une table StoryMap
#[derive(Debug, Default)]
pub struct ParseResult {
    /// Projets construits, dans l'ordre du fichier
    pub projects: Vec<Project>,

    /// Nombre de lignes de données lues (hors en-tête)
    pub rows_read: usize,

    /// Lignes vides ignorées silencieusement
    pub blank_rows: usize,

    /// Positions (index + 2) des lignes ignorées faute de nom de projet
    pub skipped_rows: Vec<usize>,

    /// Erreurs non fatales rencontrées ligne par ligne
    pub errors: Vec<StoryMapError>,

    /// Checksum blake3 des octets lus, si la table vient d'un fichier
    pub source_checksum: Option<String>,
}

/// Une ligne brute de la table, indexée par nom de colonne
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: HashMap<String, String>,
}

impl RawRow {
    /// Construit une ligne à partir de couples (colonne, valeur)
    ///
    /// Si une colonne apparaît deux fois, la dernière valeur l'emporte.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cells: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Valeur brute d'une colonne (None si la colonne est absente)
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Vrai si toutes les cellules sont vides
    pub fn is_blank(&self) -> bool {
        self.cells.values().all(|v| v.is_empty())
    }
}

/// Coordonnées WGS84 d'un projet, toujours présentes par paire
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Un projet prêt pour le front-end cartographique
///
/// L'ordre des champs est celui du JSON produit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Project {
    #[serde(rename = "id")]
    pub id: String,
    pub project_name: String,
    pub project_leads: Vec<String>,
    pub affiliation: Option<String>,
    pub year: Option<u16>,
    pub email: Option<String>,
    pub image_url: Option<String>,
    pub project_category: Option<String>,
    pub theme: Option<String>,
    pub product: Option<String>,
    pub location: Option<String>,
    pub description_short: String,
    pub description_long: String,

    /// Latitude/Longitude, omises ensemble si absentes
    #[serde(flatten)]
    pub coordinates: Option<Coordinates>,

    pub bio: Option<String>,

    // Médias à enrichir plus tard
    pub artworks: Vec<String>,
    pub music: Vec<String>,
    pub research: Vec<String>,
    pub outcomes: Vec<String>,

    pub has_artwork: bool,
    pub has_music: bool,
    pub has_research: bool,
    pub has_poems: bool,

    pub tags: Vec<Tag>,
}

/// Étiquette dérivée de la catégorie ou du produit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Art,
    Research,
    Music,
    Community,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Art => "art",
            Tag::Research => "research",
            Tag::Music => "music",
            Tag::Community => "community",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
