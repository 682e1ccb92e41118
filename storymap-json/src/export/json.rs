//! Export des projets en tableau JSON

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use storymap::Project;

/// Exporte les projets en JSON indenté (2 espaces, non-ASCII conservé)
///
/// Le fichier est d'abord écrit à côté de la cible puis renommé: la cible
/// est soit l'ancienne version, soit la nouvelle complète.
pub fn export_to_json(projects: &[Project], output_path: &Path) -> Result<()> {
    let tmp_path = temp_path(output_path);

    if let Err(e) = write_json(projects, &tmp_path) {
        std::fs::remove_file(&tmp_path).ok();
        return Err(e);
    }

    if let Err(e) = std::fs::rename(&tmp_path, output_path) {
        std::fs::remove_file(&tmp_path).ok();
        return Err(e)
            .context(format!("Failed to replace file: {}", output_path.display()));
    }

    Ok(())
}

fn write_json(projects: &[Project], path: &Path) -> Result<()> {
    let file =
        File::create(path).context(format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, projects)
        .context(format!("Failed to write JSON: {}", path.display()))?;
    writer.flush()?;

    Ok(())
}

/// Chemin temporaire dans le même répertoire que la cible
fn temp_path(output_path: &Path) -> PathBuf {
    let mut name = output_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "storymap.json".into());
    name.push(".tmp");
    output_path.with_file_name(name)
}
