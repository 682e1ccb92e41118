//! Rapport de conversion avec graceful degradation
//!
//! Ce module collecte les compteurs et les erreurs de ligne d'une
//! conversion, puis les affiche ou les sauvegarde en JSON.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use storymap::{ParseResult, StoryMapError};

/// Statut global de la conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConversionStatus {
    /// Conversion réussie sans erreur
    Success,
    /// Conversion réussie avec des lignes en erreur
    PartialSuccess,
    /// Aucun projet valide, rien n'est écrit
    Failed,
}

/// Erreur de ligne avec contexte
#[derive(Debug, Clone, Serialize)]
pub struct RowError {
    /// Position de la ligne (index + 2)
    pub row: Option<usize>,
    /// Message d'erreur
    pub message: String,
}

impl From<&StoryMapError> for RowError {
    fn from(err: &StoryMapError) -> Self {
        Self {
            row: err.row(),
            message: err.to_string(),
        }
    }
}

/// Rapport complet de conversion
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    /// Fichier source
    pub source: PathBuf,
    /// Fichier JSON cible
    pub output: PathBuf,
    /// Checksum blake3 des octets convertis
    pub source_checksum: Option<String>,
    /// Durée de la conversion
    pub duration_secs: f64,
    /// Statut global
    pub status: ConversionStatus,
    /// Mode sans écriture
    pub dry_run: bool,

    // Compteurs
    /// Lignes de données lues
    pub rows_read: usize,
    /// Lignes entièrement vides
    pub blank_rows: usize,
    /// Lignes sans nom de projet (positions)
    pub skipped_rows: Vec<usize>,
    /// Projets construits
    pub projects: usize,
    /// Projets écrits dans le fichier cible
    pub projects_written: usize,

    /// Liste des erreurs
    pub errors: Vec<RowError>,
}

impl ConversionReport {
    /// Crée un rapport vide pour un couple source/cible
    pub fn new(source: &Path, output: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            output: output.to_path_buf(),
            source_checksum: None,
            duration_secs: 0.0,
            status: ConversionStatus::Success,
            dry_run: false,
            rows_read: 0,
            blank_rows: 0,
            skipped_rows: Vec::new(),
            projects: 0,
            projects_written: 0,
            errors: Vec::new(),
        }
    }

    /// Enregistre les compteurs issus de la lecture de la table
    pub fn record_parse(&mut self, result: &ParseResult) {
        self.rows_read = result.rows_read;
        self.blank_rows = result.blank_rows;
        self.skipped_rows = result.skipped_rows.clone();
        self.projects = result.projects.len();
        self.source_checksum = result.source_checksum.clone();
        self.errors.extend(result.errors.iter().map(RowError::from));
    }

    /// Enregistre l'écriture du fichier cible
    pub fn record_written(&mut self, count: usize) {
        self.projects_written = count;
    }

    /// Définit la durée de la conversion
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_secs = duration.as_secs_f64();
    }

    /// Détermine le statut final
    pub fn finalize(&mut self) {
        self.status = if self.projects == 0 {
            ConversionStatus::Failed
        } else if !self.errors.is_empty() {
            ConversionStatus::PartialSuccess
        } else {
            ConversionStatus::Success
        };
    }

    /// Nombre d'erreurs de ligne
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Affiche le rapport sur la console
    pub fn display(&self) {
        println!("\n{}", "=".repeat(60));
        println!("CONVERSION REPORT - {}", self.source.display());
        println!("{}", "=".repeat(60));

        println!("\nStatus: {:?}", self.status);
        println!("Duration: {:.2}s", self.duration_secs);
        if let Some(ref checksum) = self.source_checksum {
            println!("Source checksum: {}", checksum);
        }

        println!("\n--- SUMMARY ---");
        println!(
            "Rows: {} read, {} blank, {} without project name",
            self.rows_read,
            self.blank_rows,
            self.skipped_rows.len()
        );
        if self.dry_run {
            println!("Dry run: nothing written to {}", self.output.display());
        } else if self.projects_written > 0 {
            println!("Output: {}", self.output.display());
        }
        println!("   - Projects: {}", self.projects);
        println!("   - Errors: {}", self.errors.len());

        if !self.errors.is_empty() {
            println!("\n--- ERRORS ({}) ---", self.errors.len());
            for e in self.errors.iter().take(20) {
                match e.row {
                    Some(row) => println!("  [row {}] {}", row, e.message),
                    None => println!("  {}", e.message),
                }
            }
            if self.errors.len() > 20 {
                println!("  ... and {} more", self.errors.len() - 20);
            }
        }

        println!("\n{}", "=".repeat(60));
    }

    /// Sauvegarde le rapport en JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .context(format!("Failed to write report: {}", path.display()))?;
        Ok(())
    }

    /// Affichage compact pour le résumé
    pub fn summary(&self) -> String {
        format!(
            "{}: {} projects, {} skipped, {} errors",
            self.source.display(),
            self.projects,
            self.skipped_rows.len(),
            self.errors.len()
        )
    }
}
