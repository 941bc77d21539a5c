// src/portfolio.rs
use serde::{Deserialize, Serialize};

const EMBEDDED_CATALOG: &str = include_str!("../static/portfolio.json");

pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.jpg";
pub const PLACEHOLDER_CAPTION: &str = "Imagem do Projeto";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioCategory {
    pub key: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioCatalog {
    pub categories: Vec<PortfolioCategory>,
}

impl GalleryImage {
    pub fn new(src: &str, caption: &str) -> Self {
        Self {
            src: src.to_string(),
            caption: caption.to_string(),
        }
    }

    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_IMAGE, PLACEHOLDER_CAPTION)
    }
}

impl PortfolioCatalog {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let catalog: Self = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse portfolio catalog: {}", e))?;
        Ok(catalog)
    }

    /// The catalog compiled into the page. A broken catalog leaves the
    /// portfolio grid empty rather than taking the page down.
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_CATALOG) {
            Ok(catalog) => {
                log::info!("Loaded {} portfolio categories", catalog.categories.len());
                catalog
            }
            Err(e) => {
                log::error!("{}", e);
                Self::default()
            }
        }
    }

    pub fn get_category(&self, key: &str) -> Option<&PortfolioCategory> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Images to show for `key`; unknown or empty categories get a single placeholder.
    pub fn gallery_for(&self, key: &str) -> Vec<GalleryImage> {
        match self.get_category(key) {
            Some(category) if !category.images.is_empty() => category.images.clone(),
            _ => {
                log::warn!("No gallery images for category '{}', using placeholder", key);
                vec![GalleryImage::placeholder()]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog() {
        let catalog = PortfolioCatalog::from_json(EMBEDDED_CATALOG).unwrap();
        let keys: Vec<&str> = catalog.categories.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["coroas", "facetas", "enceramento", "modelos", "guias", "placas"]
        );
    }

    #[test]
    fn test_category_sizes() {
        let catalog = PortfolioCatalog::from_json(EMBEDDED_CATALOG).unwrap();
        let sizes: Vec<usize> = ["coroas", "facetas", "enceramento", "modelos", "guias", "placas"]
            .iter()
            .map(|key| catalog.gallery_for(key).len())
            .collect();
        assert_eq!(sizes, vec![3, 4, 2, 5, 3, 2]);
    }

    #[test]
    fn test_facetas_order() {
        let catalog = PortfolioCatalog::from_json(EMBEDDED_CATALOG).unwrap();
        let images = catalog.gallery_for("facetas");
        assert_eq!(images[0].src, "images/facetas-laminadas.jpg");
        assert_eq!(images[0].caption, "Facetas Laminadas - Antes");
        assert_eq!(images[3].caption, "Facetas Laminadas - Detalhe");
    }

    #[test]
    fn test_unknown_category_falls_back() {
        let catalog = PortfolioCatalog::from_json(EMBEDDED_CATALOG).unwrap();
        assert_eq!(catalog.gallery_for("pontes"), vec![GalleryImage::placeholder()]);
    }

    #[test]
    fn test_empty_category_falls_back() {
        let json = r#"{ "categories": [
            { "key": "vazio", "title": "t", "description": "d", "thumbnail": "x.jpg", "images": [] }
        ] }"#;
        let catalog = PortfolioCatalog::from_json(json).unwrap();
        assert_eq!(catalog.gallery_for("vazio").len(), 1);
    }
}
