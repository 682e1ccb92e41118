//! Lecture de la table source (CSV ou autre texte délimité)

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::types::RawRow;
use crate::StoryMapError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Lit le fichier source entièrement en mémoire
///
/// # Errors
///
/// `SourceNotFound` si le fichier n'existe pas, `Io` pour toute autre
/// erreur de lecture.
pub fn read_source(path: &Path) -> Result<Vec<u8>, StoryMapError> {
    std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => StoryMapError::SourceNotFound(path.to_path_buf()),
        _ => StoryMapError::Io(e),
    })
}

/// Décode le contenu lu par [`read_source`]
///
/// # Errors
///
/// `InvalidEncoding` avec la position du premier octet invalide. Aucun
/// repli vers un autre encodage: un seul octet fautif suffit à rejeter
/// le fichier.
pub fn decode_source<'a>(path: &Path, data: &'a [u8]) -> Result<&'a str, StoryMapError> {
    decode(data).map_err(|offset| StoryMapError::InvalidEncoding {
        path: path.to_path_buf(),
        offset,
    })
}

/// Valide le contenu en UTF-8 (BOM retiré)
///
/// En cas d'échec, renvoie la position du premier octet invalide dans
/// `data`, BOM compris.
pub fn decode(data: &[u8]) -> Result<&str, usize> {
    let body = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    simdutf8::compat::from_utf8(body).map_err(|e| data.len() - body.len() + e.valid_up_to())
}

/// Lecteur de lignes indexées par l'en-tête
pub struct RowReader<'a> {
    headers: Vec<String>,
    reader: csv::Reader<&'a [u8]>,
}

impl<'a> RowReader<'a> {
    /// Prépare la lecture et consomme la ligne d'en-tête
    ///
    /// Hors mode strict, les lignes plus courtes ou plus longues que
    /// l'en-tête sont acceptées.
    pub fn new(content: &'a str, delimiter: u8, strict: bool) -> Result<Self, StoryMapError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(Trim::None)
            .flexible(!strict)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect();

        Ok(Self { headers, reader })
    }

    /// Noms des colonnes, dans l'ordre du fichier
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Itère sur les lignes de données avec leur index brut (base 0)
    ///
    /// Consomme le lecteur: l'itérateur ne dépend plus que du contenu.
    /// Une ligne illisible produit une erreur sans interrompre la lecture.
    pub fn rows(self) -> impl Iterator<Item = (usize, Result<RawRow, csv::Error>)> + 'a {
        let headers = self.headers;
        self.reader
            .into_records()
            .enumerate()
            .map(move |(index, record)| (index, record.map(|r| to_row(&headers, &r))))
    }
}

/// Associe les cellules aux colonnes; cellules manquantes = colonne absente
fn to_row(headers: &[String], record: &StringRecord) -> RawRow {
    RawRow::from_pairs(
        headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.as_str(), v)),
    )
}
