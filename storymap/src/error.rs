//! Types d'erreurs pour le crate storymap

use std::path::PathBuf;

use thiserror::Error;

/// Erreurs pouvant survenir lors de la conversion d'une table StoryMap
#[derive(Debug, Error)]
pub enum StoryMapError {
    /// Fichier source introuvable
    #[error("CSV file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Erreur d'I/O lors de la lecture ou de l'écriture
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Fichier source qui n'est pas de l'UTF-8 valide
    #[error("{} is not valid UTF-8 (byte {offset})", .path.display())]
    InvalidEncoding { path: PathBuf, offset: usize },

    /// Erreur du lecteur CSV (en-tête ou ligne illisible)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Échec de construction d'un projet pour une ligne donnée
    #[error("Row {row}: {reason}")]
    RowBuild { row: usize, reason: String },

    /// Aucun projet valide dans la table
    #[error("No valid projects found in {}", .0.display())]
    NoValidRecords(PathBuf),
}

impl StoryMapError {
    /// Crée une erreur de construction de ligne avec contexte
    ///
    /// `row` est la position affichée (index + 2, en-tête compris).
    pub fn row_build(row: usize, reason: impl Into<String>) -> Self {
        Self::RowBuild {
            row,
            reason: reason.into(),
        }
    }

    /// Position de la ligne fautive, si l'erreur est rattachée à une ligne
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::RowBuild { row, .. } => Some(*row),
            _ => None,
        }
    }
}
