//! # storymap
//!
//! Lecture des tables de projets StoryMap (une ligne par projet) et
//! construction des enregistrements consommés par le front-end cartographique.
//!
//! ## Features
//!
//! - Lecture CSV tolérante (lignes courtes/longues, BOM), UTF-8 strict
//! - Checksum blake3 des octets lus
//! - Nettoyage des cellules et parsers de champs (porteurs, coordonnées, année)
//! - Identifiants et étiquettes dérivés
//! - Erreurs par ligne non fatales
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storymap::{parse, ParseOptions};
//! use std::path::Path;
//!
//! let result = parse(Path::new("StoryMapData - Sheet1.csv"), &ParseOptions::default())?;
//! println!("Projets: {}", result.projects.len());
//!
//! for error in &result.errors {
//!     eprintln!("{}", error);
//! }
//! ```

pub mod build;
pub mod columns;
pub mod error;
pub mod parser;
pub mod reader;
pub mod types;

pub use build::build_project;
pub use columns::ColumnMap;
pub use error::StoryMapError;
pub use types::{Coordinates, ParseResult, Project, RawRow, Tag};

use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::build::display_row;
use crate::reader::RowReader;

/// Options de lecture d'une table
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Noms des colonnes sources
    pub columns: ColumnMap,

    /// Séparateur de champs
    pub delimiter: u8,

    /// Rejeter les lignes dont le nombre de cellules diffère de l'en-tête
    pub strict: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            columns: ColumnMap::default(),
            delimiter: b',',
            strict: false,
        }
    }
}

/// Lit une table StoryMap et construit les projets.
///
/// # Arguments
///
/// * `path` - Chemin vers le fichier source
/// * `options` - Colonnes et séparateur
///
/// # Returns
///
/// Un `ParseResult` avec les projets dans l'ordre du fichier, les compteurs
/// de lignes et les erreurs non fatales rencontrées.
///
/// # Errors
///
/// `SourceNotFound` si le fichier n'existe pas; `InvalidEncoding` si son
/// contenu n'est pas de l'UTF-8; `Io` ou `Csv` si le fichier ou son en-tête
/// est illisible.
pub fn parse(path: &Path, options: &ParseOptions) -> Result<ParseResult, StoryMapError> {
    info!(path = %path.display(), "Reading source table");
    let data = reader::read_source(path)?;
    let content = reader::decode_source(path, &data)?;

    let mut result = parse_str(content, options)?;
    result.source_checksum = Some(blake3::hash(&data).to_hex().to_string());
    Ok(result)
}

/// Construit les projets depuis un contenu déjà décodé
pub fn parse_str(content: &str, options: &ParseOptions) -> Result<ParseResult, StoryMapError> {
    let rows = RowReader::new(content, options.delimiter, options.strict)?;

    let missing = options.columns.missing(rows.headers());
    if !missing.is_empty() {
        warn!(columns = ?missing, "Missing columns, values treated as absent");
    }

    let mut result = ParseResult::default();

    for (index, row) in rows.rows() {
        result.rows_read += 1;

        let row = match row {
            Ok(row) => row,
            Err(e) => {
                let err = StoryMapError::row_build(display_row(index), e.to_string());
                error!("{}", err);
                result.errors.push(err);
                continue;
            }
        };

        // Lignes entièrement vides: ignorées sans message
        if row.is_blank() {
            debug!(row = display_row(index), "Blank row");
            result.blank_rows += 1;
            continue;
        }

        match build_project(&row, index, &options.columns) {
            Some(project) => result.projects.push(project),
            None => result.skipped_rows.push(display_row(index)),
        }
    }

    info!(
        projects = result.projects.len(),
        skipped = result.skipped_rows.len(),
        errors = result.errors.len(),
        "Table parsed"
    );

    Ok(result)
}
