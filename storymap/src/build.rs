//! Construction d'un projet à partir d'une ligne de la table

use tracing::{debug, warn};

use crate::columns::ColumnMap;
use crate::parser::{clean_value, parse_coordinates, parse_leads, parse_year};
use crate::types::{Project, RawRow, Tag};

/// Préfixe des identifiants de projet
pub const ID_PREFIX: &str = "project";

/// Longueur maximale du slug (en caractères)
pub const SLUG_MAX_CHARS: usize = 30;

/// Position affichée d'une ligne: en-tête + numérotation à partir de 1
pub fn display_row(index: usize) -> usize {
    index + 2
}

/// Construit le slug d'un nom: espaces -> tirets, minuscules, 30 caractères
pub fn slugify(name: &str) -> String {
    name.replace(' ', "-")
        .to_lowercase()
        .chars()
        .take(SLUG_MAX_CHARS)
        .collect()
}

/// Identifiant d'un projet: `project-{index}-{slug}`
///
/// L'unicité n'est pas garantie au-delà de l'index.
pub fn project_id(index: usize, name: &str) -> String {
    format!("{}-{}-{}", ID_PREFIX, index, slugify(name))
}

/// Convertit une ligne en projet
///
/// `index` est la position brute de la ligne dans le fichier (lignes vides
/// comprises). Retourne None si la ligne n'a pas de nom de projet.
pub fn build_project(row: &RawRow, index: usize, columns: &ColumnMap) -> Option<Project> {
    let Some(project_name) = clean_value(row.get(&columns.name)) else {
        warn!(row = display_row(index), "Skipping row: no project name");
        return None;
    };

    let project_category = clean_value(row.get(&columns.category));
    let product = clean_value(row.get(&columns.product));
    let tags = derive_tags(project_category.as_deref(), product.as_deref());

    let project = Project {
        id: project_id(index, &project_name),
        project_leads: parse_leads(row.get(&columns.leads)),
        affiliation: clean_value(row.get(&columns.affiliation)),
        year: parse_year(row.get(&columns.year)),
        email: clean_value(row.get(&columns.email)),
        image_url: clean_value(row.get(&columns.image_url)),
        theme: clean_value(row.get(&columns.theme)),
        location: clean_value(row.get(&columns.location)),
        description_short: String::new(),
        description_long: String::new(),
        coordinates: parse_coordinates(row.get(&columns.latitude), row.get(&columns.longitude)),
        bio: clean_value(row.get(&columns.bio)),
        artworks: Vec::new(),
        music: Vec::new(),
        research: Vec::new(),
        outcomes: Vec::new(),
        has_artwork: tags.contains(&Tag::Art),
        has_music: tags.contains(&Tag::Music),
        has_research: tags.contains(&Tag::Research),
        has_poems: false,
        tags,
        project_name,
        project_category,
        product,
    };

    debug!(
        id = %project.id,
        tags = %tag_list(&project.tags),
        has_coordinates = project.coordinates.is_some(),
        "Built project"
    );

    Some(project)
}

/// Étiquettes par recherche de sous-chaîne insensible à la casse
///
/// Les tests sont indépendants et l'ordre de la liste est fixe:
/// art, research, music, community.
pub fn derive_tags(category: Option<&str>, product: Option<&str>) -> Vec<Tag> {
    let category = category.unwrap_or_default().to_lowercase();
    let product = product.unwrap_or_default().to_lowercase();

    let mut tags = Vec::new();
    if category.contains("art") {
        tags.push(Tag::Art);
    }
    if category.contains("research") {
        tags.push(Tag::Research);
    }
    if product.contains("music") {
        tags.push(Tag::Music);
    }
    if category.contains("community") || category.contains("outreach") {
        tags.push(Tag::Community);
    }
    tags
}

/// Étiquettes séparées par des virgules, pour les logs
fn tag_list(tags: &[Tag]) -> String {
    tags.iter().map(Tag::to_string).collect::<Vec<_>>().join(",")
}
