//! # storymap-json
//!
//! Conversion des tables de projets StoryMap (CSV) vers le JSON consommé
//! par le front-end cartographique.
//!
//! ## Features
//!
//! - Nettoyage des champs, coordonnées tout-ou-rien, étiquettes dérivées
//! - Erreurs par ligne non fatales, sortie tout-ou-rien
//! - Correspondance des colonnes configurable (preset ou JSON)
//! - Rapport de conversion (console ou JSON)
//!
//! ## Usage CLI
//!
//! ```bash
//! # Fichiers par défaut à côté de l'exécutable
//! storymap-json
//!
//! # Source et cible explicites
//! storymap-json "StoryMapData - Sheet1.csv" storymapdata_v3.json
//!
//! # Table séparée par des points-virgules, rapport JSON
//! storymap-json data.csv out.json --delimiter ';' --report report.json
//! ```

pub mod cli;
pub mod config;
pub mod export;
pub mod report;

pub use cli::{cmd_convert, ConvertArgs};
pub use config::Config;
pub use report::{ConversionReport, ConversionStatus};
