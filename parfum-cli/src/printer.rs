//! Rendering of command results as text or JSON

use parfum_olfactory::{
    note_label, Family, FamilyMatch, FamilySet, Note, NoteCollection, NoteId, OlfactoryError,
    Product, Tier,
};
use serde::Serialize;
use serde_json::json;

use crate::config::OutputConfig;
use crate::CliResult;

fn to_json<T: Serialize>(value: &T, config: &OutputConfig) -> CliResult<String> {
    let rendered = if config.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

/// Label of a note as shown to the user, with its id when configured
fn display_note(tier: Tier, id: &str, config: &OutputConfig) -> String {
    let label = note_label(tier, id);
    if config.show_ids {
        format!("{label} ({id})")
    } else {
        label.into_owned()
    }
}

fn display_notes<'a>(
    tier: Tier,
    ids: impl IntoIterator<Item = &'a NoteId>,
    config: &OutputConfig,
) -> String {
    ids.into_iter()
        .map(|id| display_note(tier, id.as_str(), config))
        .collect::<Vec<_>>()
        .join(config.separator.as_str())
}

/// Notes per tier followed by the computed families
pub fn render_classification(
    name: Option<&str>,
    notes: &NoteCollection,
    config: &OutputConfig,
) -> CliResult<String> {
    let families = notes.families();

    if config.is_json() {
        return to_json(
            &json!({
                "name": name,
                "notes": notes,
                "families": families,
            }),
            config,
        );
    }

    let mut lines = Vec::new();
    if let Some(name) = name {
        lines.push(name.to_string());
    }
    for tier in Tier::ALL {
        let ids = notes.tier(tier);
        if !ids.is_empty() {
            lines.push(format!("{}: {}", tier.catalog_name(), display_notes(tier, ids, config)));
        }
    }
    lines.push(format!("Familles: {}", families.labels().join(config.separator.as_str())));

    Ok(lines.join("\n"))
}

/// Each assigned family with the notes that triggered it
pub fn render_explanation(notes: &NoteCollection, config: &OutputConfig) -> CliResult<String> {
    let matches: Vec<FamilyMatch> = notes.explain();

    if config.is_json() {
        return to_json(&matches, config);
    }

    let lines: Vec<String> = matches
        .iter()
        .map(|m| {
            if m.is_fallback() {
                return format!("{}: (par défaut)", m.family);
            }
            let triggers: Vec<String> = m
                .notes
                .iter()
                .map(|note| format!("{} [{}]", display_note(note.tier, &note.id, config), note.tier))
                .collect();
            format!("{}: {}", m.family, triggers.join(config.separator.as_str()))
        })
        .collect();

    Ok(lines.join("\n"))
}

#[derive(Serialize)]
struct LabelRow<'a> {
    id: &'a str,
    label: String,
    known: bool,
}

/// Resolved labels for ids of one tier
pub fn render_labels(tier: Tier, ids: &[String], config: &OutputConfig) -> CliResult<String> {
    let rows: Vec<LabelRow<'_>> = ids
        .iter()
        .map(|id| LabelRow {
            id,
            label: note_label(tier, id).into_owned(),
            known: tier.contains(id),
        })
        .collect();

    if config.is_json() {
        return to_json(&rows, config);
    }

    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            if config.show_ids {
                format!("{} -> {}", row.id, row.label)
            } else {
                row.label.clone()
            }
        })
        .collect();

    Ok(lines.join("\n"))
}

/// Vocabulary entries, one per line
pub fn render_notes(notes: &[&Note], config: &OutputConfig) -> CliResult<String> {
    if config.is_json() {
        return to_json(&notes, config);
    }

    let lines: Vec<String> = notes
        .iter()
        .map(|note| {
            if config.show_ids {
                format!("{} ({})", note.label, note.id)
            } else {
                note.label.to_string()
            }
        })
        .collect();

    Ok(lines.join("\n"))
}

#[derive(Serialize)]
struct FamilyRow {
    family: Family,
    name: &'static str,
    notes: &'static [&'static str],
}

/// The seven families with their qualifying notes
pub fn render_families(config: &OutputConfig) -> CliResult<String> {
    let rows: Vec<FamilyRow> = Family::ALL
        .into_iter()
        .map(|family| FamilyRow {
            family,
            name: family.english_name(),
            notes: family.qualifying_notes(),
        })
        .collect();

    if config.is_json() {
        return to_json(&rows, config);
    }

    let lines: Vec<String> = rows
        .iter()
        .map(|row| format!("{}: {}", row.family, row.notes.join(config.separator.as_str())))
        .collect();

    Ok(lines.join("\n"))
}

#[derive(Serialize)]
struct ValidationRow<'a> {
    name: &'a str,
    valid: bool,
    errors: Vec<String>,
}

impl<'a> ValidationRow<'a> {
    fn new(name: &'a str, outcome: &Result<(), Vec<OlfactoryError>>) -> Self {
        let errors: Vec<String> = match outcome {
            Ok(()) => Vec::new(),
            Err(errors) => errors.iter().map(ToString::to_string).collect(),
        };
        Self {
            name,
            valid: errors.is_empty(),
            errors,
        }
    }

    fn to_text(&self) -> String {
        if self.valid {
            return format!("ok: {}", self.name);
        }

        let mut lines = vec![format!("invalid: {}", self.name)];
        lines.extend(self.errors.iter().map(|e| format!("  - {e}")));
        lines.join("\n")
    }
}

/// Outcome of validating one fragrance
pub fn render_validation(
    name: &str,
    outcome: &Result<(), Vec<OlfactoryError>>,
    config: &OutputConfig,
) -> CliResult<String> {
    let row = ValidationRow::new(name, outcome);

    if config.is_json() {
        return to_json(&row, config);
    }
    Ok(row.to_text())
}

/// Outcomes for a whole catalog: one JSON array, or one block per product
pub fn render_catalog_validation(
    entries: &[(String, Result<(), Vec<OlfactoryError>>)],
    config: &OutputConfig,
) -> CliResult<String> {
    let rows: Vec<ValidationRow<'_>> = entries
        .iter()
        .map(|(name, outcome)| ValidationRow::new(name, outcome))
        .collect();

    if config.is_json() {
        return to_json(&rows, config);
    }

    let lines: Vec<String> = rows.iter().map(ValidationRow::to_text).collect();
    Ok(lines.join("\n"))
}

#[derive(Serialize)]
struct ProductRow<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    brand: Option<&'a str>,
    families: FamilySet,
}

/// Products with their computed families
pub fn render_products(products: &[&Product], config: &OutputConfig) -> CliResult<String> {
    let rows: Vec<ProductRow<'_>> = products
        .iter()
        .map(|product| ProductRow {
            id: &product.id,
            name: &product.name,
            brand: product.brand.as_deref(),
            families: product.families(),
        })
        .collect();

    if config.is_json() {
        return to_json(&rows, config);
    }

    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            let title = match row.brand {
                Some(brand) => format!("{} ({brand})", row.name),
                None => row.name.to_string(),
            };
            format!(
                "{} | {} | {}",
                row.id,
                title,
                row.families.labels().join(config.separator.as_str())
            )
        })
        .collect();

    Ok(lines.join("\n"))
}

/// Number of products per family
pub fn render_family_counts(counts: &[(Family, usize)], config: &OutputConfig) -> CliResult<String> {
    if config.is_json() {
        let rows: Vec<serde_json::Value> = counts
            .iter()
            .map(|(family, count)| json!({ "family": family, "count": count }))
            .collect();
        return to_json(&rows, config);
    }

    let lines: Vec<String> = counts
        .iter()
        .map(|(family, count)| format!("{family}: {count}"))
        .collect();

    Ok(lines.join("\n"))
}
