//! Catálogo de produtos e filtro por família
//!
//! O catálogo não guarda famílias: elas são derivadas das notas a cada
//! consulta, como na vitrine.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::collection::NoteCollection;
use crate::error::OlfactoryResult;
use crate::types::{Family, FamilySet};

/// Produto (perfume) do catálogo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default)]
    pub notes: NoteCollection,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, notes: NoteCollection) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: None,
            notes,
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn families(&self) -> FamilySet {
        self.notes.families()
    }

    pub fn validate(&self) -> OlfactoryResult<()> {
        self.notes.validate()
    }
}

/// Lista ordenada de produtos
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Lê catálogo de um array JSON de produtos
    pub fn from_json(json: &str) -> OlfactoryResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        tracing::debug!(products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> OlfactoryResult<Self> {
        let catalog: Catalog = serde_json::from_reader(reader)?;
        tracing::debug!(products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Produtos com alguma família em comum com `wanted`
    ///
    /// Conjunto vazio significa filtro desligado: retorna todos os produtos.
    pub fn filter_by_families(&self, wanted: &FamilySet) -> Vec<&Product> {
        if wanted.is_empty() {
            return self.products.iter().collect();
        }

        let selected: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| product.families().intersects(wanted))
            .collect();

        tracing::debug!(
            wanted = %wanted,
            selected = selected.len(),
            total = self.products.len(),
            "catalog filtered by family"
        );
        selected
    }

    /// Contagem de produtos por família, em ordem de regra
    pub fn family_counts(&self) -> Vec<(Family, usize)> {
        let mut counts = [0usize; Family::ALL.len()];
        for product in &self.products {
            for family in product.families() {
                counts[family.index() as usize] += 1;
            }
        }

        Family::ALL.into_iter().zip(counts).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        {
            "id": "p1",
            "name": "Santal Nocturne",
            "brand": "Maison Test",
            "notes": { "top": ["bergamote"], "base": ["bois_santal", "vanille"] }
        },
        {
            "id": "p2",
            "name": "Rose Épicée",
            "notes": { "top": ["poivre_rose"], "heart": ["rose_mai"] }
        },
        { "id": "p3", "name": "Sans notes" }
    ]"#;

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("p1").unwrap().brand.as_deref(), Some("Maison Test"));
        assert!(catalog.get("p3").unwrap().notes.is_empty());
        assert!(catalog.get("p9").is_none());
    }

    #[test]
    fn test_from_reader() {
        let catalog = Catalog::from_reader(CATALOG.as_bytes()).unwrap();
        assert_eq!(catalog, Catalog::from_json(CATALOG).unwrap());
    }

    #[test]
    fn test_product_validate() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert!(catalog.get("p1").unwrap().validate().is_ok());
        assert_eq!(
            catalog.get("p3").unwrap().validate(),
            Err(crate::error::OlfactoryError::EmptyComposition)
        );
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Catalog::from_json("{\"id\": 1}").is_err());
    }

    #[test]
    fn test_filter_by_families() {
        let catalog = Catalog::from_json(CATALOG).unwrap();

        let woody = catalog.filter_by_families(&FamilySet::only(Family::Woody));
        let ids: Vec<&str> = woody.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1"]);

        // p3 não tem notas e cai no fallback Floral
        let floral = catalog.filter_by_families(&FamilySet::only(Family::Floral));
        let ids: Vec<&str> = floral.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p3"]);

        assert_eq!(catalog.filter_by_families(&FamilySet::empty()).len(), 3);
    }

    #[test]
    fn test_family_counts() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let counts = catalog.family_counts();

        assert_eq!(counts.len(), 7);
        assert_eq!(counts[0], (Family::Floral, 2));
        assert_eq!(counts[1], (Family::Woody, 1));
        assert_eq!(counts[4], (Family::Spicy, 1));
        assert_eq!(counts[5], (Family::Leather, 0));
    }
}
