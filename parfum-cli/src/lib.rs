//! Parfum CLI support library
//!
//! Input parsing and output rendering for the `parfum` command, kept in a
//! library so they can be tested without spawning the binary.

mod config;
mod printer;

pub use config::{OutputConfig, OutputFormat};
pub use printer::{
    render_catalog_validation, render_classification, render_explanation, render_families,
    render_family_counts, render_labels, render_notes, render_products, render_validation,
};

use std::fs;
use std::io::Read;
use std::path::Path;

use parfum_olfactory::{Catalog, NoteCollection, NoteId, OlfactoryError, Product};
use serde_json::Value;
use thiserror::Error;

/// Keys that mark an object as a product rather than a bare note collection
const PRODUCT_KEYS: [&str; 4] = ["id", "name", "brand", "notes"];

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Olfactory(#[from] OlfactoryError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;

/// A fragrance read from a file: a product or a bare note collection
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub name: Option<String>,
    pub notes: NoteCollection,
}

/// Contents of an input file
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Catalog(Catalog),
    Single(Composition),
}

/// Result of validating every fragrance of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Text lines, or a single JSON value
    pub rendered: String,
    pub checked: usize,
    pub failed: usize,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failed == 0
    }
}

/// Read a whole input file, `-` meaning stdin
pub fn read_source(path: &Path) -> CliResult<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    Ok(fs::read_to_string(path)?)
}

/// Split a comma-separated note list, dropping blanks
pub fn parse_note_list(raw: &str) -> Vec<NoteId> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(NoteId::from)
        .collect()
}

/// Parse a product object or a bare `{top, heart, base}` object
///
/// An object carrying any product key must be a well-formed product; its
/// deserialization error is reported as is.
pub fn parse_composition(json: &str) -> CliResult<Composition> {
    let value: Value = serde_json::from_str(json)?;
    composition_from_value(value)
}

fn composition_from_value(value: Value) -> CliResult<Composition> {
    let is_product = value
        .as_object()
        .is_some_and(|object| PRODUCT_KEYS.iter().any(|key| object.contains_key(*key)));

    if is_product {
        let product: Product = serde_json::from_value(value)?;
        return Ok(Composition {
            name: Some(product.name),
            notes: product.notes,
        });
    }

    let notes: NoteCollection = serde_json::from_value(value)?;
    Ok(Composition { name: None, notes })
}

/// Parse either a catalog (JSON array) or a single composition
pub fn parse_document(json: &str) -> CliResult<Document> {
    let value: Value = serde_json::from_str(json)?;

    if value.is_array() {
        let catalog: Catalog = serde_json::from_value(value)?;
        Ok(Document::Catalog(catalog))
    } else {
        composition_from_value(value).map(Document::Single)
    }
}

/// Validate a document and render the outcome
///
/// A catalog renders as one line per product in text mode and as a single
/// JSON array otherwise. `fallback_name` labels an unnamed composition.
pub fn validate_document(
    document: &Document,
    fallback_name: &str,
    config: &OutputConfig,
) -> CliResult<ValidationReport> {
    match document {
        Document::Catalog(catalog) => {
            let entries: Vec<(String, Result<(), Vec<OlfactoryError>>)> = catalog
                .products()
                .iter()
                .map(|product| {
                    (
                        format!("{} ({})", product.name, product.id),
                        product.notes.validate_all(),
                    )
                })
                .collect();
            let failed = entries.iter().filter(|(_, outcome)| outcome.is_err()).count();

            Ok(ValidationReport {
                rendered: render_catalog_validation(&entries, config)?,
                checked: entries.len(),
                failed,
            })
        }
        Document::Single(composition) => {
            let name = composition.name.as_deref().unwrap_or(fallback_name);
            let outcome = composition.notes.validate_all();

            Ok(ValidationReport {
                rendered: render_validation(name, &outcome, config)?,
                checked: 1,
                failed: usize::from(outcome.is_err()),
            })
        }
    }
}
