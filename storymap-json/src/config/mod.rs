//! Configuration de la conversion

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use storymap::{ColumnMap, ParseOptions};

/// Nom du fichier source par défaut (à côté de l'exécutable)
pub const DEFAULT_SOURCE: &str = "StoryMapData - Sheet1.csv";

/// Nom du fichier JSON produit par défaut (à côté de l'exécutable)
pub const DEFAULT_OUTPUT: &str = "storymapdata_v3.json";

/// Variables d'environnement pour les chemins par défaut
pub const ENV_SOURCE: &str = "STORYMAP_SOURCE";
pub const ENV_OUTPUT: &str = "STORYMAP_OUTPUT";

/// Configuration résolue d'une conversion
#[derive(Debug, Clone)]
pub struct Config {
    /// Fichier CSV source
    pub source: PathBuf,

    /// Fichier JSON cible (écrasé s'il existe)
    pub output: PathBuf,

    /// Options de lecture de la table
    pub parse: ParseOptions,
}

impl Config {
    /// Résout les chemins: argument CLI, puis variable d'environnement,
    /// puis nom par défaut dans le répertoire de l'exécutable
    pub fn resolve(
        source: Option<PathBuf>,
        output: Option<PathBuf>,
        columns: Option<&str>,
        delimiter: Option<&str>,
        strict: bool,
    ) -> Result<Self> {
        let source = source
            .or_else(|| env_path(ENV_SOURCE))
            .unwrap_or_else(|| program_dir().join(DEFAULT_SOURCE));
        let output = output
            .or_else(|| env_path(ENV_OUTPUT))
            .unwrap_or_else(|| program_dir().join(DEFAULT_OUTPUT));

        let columns = match columns {
            Some(spec) => load_columns(spec)?,
            None => ColumnMap::default(),
        };
        let delimiter = match delimiter {
            Some(raw) => parse_delimiter(raw)?,
            None => b',',
        };

        Ok(Self {
            source,
            output,
            parse: ParseOptions {
                columns,
                delimiter,
                strict,
            },
        })
    }
}

/// Charge la correspondance des colonnes depuis un preset embarqué ou un fichier JSON
pub fn load_columns(spec: &str) -> Result<ColumnMap> {
    match spec {
        "storymap" => load_embedded(include_str!("presets/storymap.json")),
        path => {
            let path = Path::new(path);
            let content = std::fs::read_to_string(path)
                .context(format!("Failed to read columns file: {}", path.display()))?;
            serde_json::from_str(&content).context("Failed to parse columns JSON")
        }
    }
}

fn load_embedded(json: &str) -> Result<ColumnMap> {
    serde_json::from_str(json).context("Failed to parse embedded columns preset")
}

/// Séparateur: un caractère ASCII, ou "tab"
pub fn parse_delimiter(raw: &str) -> Result<u8> {
    match raw {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => anyhow::bail!(
                    "Invalid delimiter: '{}'. Expected a single ASCII character or 'tab'",
                    raw
                ),
            }
        }
    }
}

/// Charge `.env` depuis le répertoire courant puis depuis celui du binaire
///
/// Retourne les fichiers effectivement chargés.
pub fn load_dotenv() -> Vec<PathBuf> {
    load_env_files(&[PathBuf::from(".env"), program_dir().join(".env")])
}

/// Une variable déjà définie n'est jamais remplacée: le premier fichier
/// qui la fournit l'emporte.
fn load_env_files(candidates: &[PathBuf]) -> Vec<PathBuf> {
    candidates
        .iter()
        .filter(|path| path.is_file())
        .filter(|path| dotenvy::from_path(path).is_ok())
        .cloned()
        .collect()
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Répertoire de l'exécutable (répertoire courant à défaut)
fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
