use crate::product::Product;

#[derive(Clone, Copy, Debug)]
pub struct ProductCatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub src: &'static str,
    pub price: f64,
}

pub const PRODUCT_CATALOG: &[ProductCatalogEntry] = &[
    ProductCatalogEntry {
        id: "ceramic-mug",
        name: "Ceramic Mug",
        src: "products/ceramic-mug.jpg",
        price: 14.50,
    },
    ProductCatalogEntry {
        id: "canvas-tote",
        name: "Canvas Tote",
        src: "products/canvas-tote.jpg",
        price: 19.00,
    },
    ProductCatalogEntry {
        id: "field-notebook",
        name: "Field Notebook",
        src: "products/field-notebook.jpg",
        price: 9.99,
    },
    ProductCatalogEntry {
        id: "enamel-pin",
        name: "Enamel Pin",
        src: "products/enamel-pin.jpg",
        price: 6.25,
    },
    ProductCatalogEntry {
        id: "desk-mat",
        name: "Desk Mat",
        src: "products/desk-mat.jpg",
        price: 28.00,
    },
    ProductCatalogEntry {
        id: "glass-tumbler",
        name: "Glass Tumbler",
        src: "products/glass-tumbler.jpg",
        price: 16.75,
    },
];

pub fn product_by_id(id: &str) -> Option<&'static ProductCatalogEntry> {
    let trimmed = id.trim();
    PRODUCT_CATALOG
        .iter()
        .find(|entry| entry.id.eq_ignore_ascii_case(trimmed))
}

impl ProductCatalogEntry {
    pub fn to_product(&self) -> Product {
        Product {
            id: self.id.to_string(),
            name: self.name.to_string(),
            price: self.price,
            image_src: self.src.to_string(),
        }
    }
}
