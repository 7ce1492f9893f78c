//! Product catalog records and the search filter of the catalog screen.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::Record;

/// A product as shown in the catalog table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub nombre: String,
    pub tipo_licor: String,
    pub precio_compra: f64,
    pub precio_venta: f64,
    /// Registration date, already formatted as `dd/mm/yyyy`.
    pub fecha: String,
}

impl Record for Product {
    fn field(&self, key: &str) -> Option<Value> {
        match key {
            "id" => Some(Value::from(self.id)),
            "nombre" => Some(Value::from(self.nombre.as_str())),
            "tipo_licor" => Some(Value::from(self.tipo_licor.as_str())),
            "precio_compra" => Some(Value::from(self.precio_compra)),
            "precio_venta" => Some(Value::from(self.precio_venta)),
            "fecha" => Some(Value::from(self.fecha.as_str())),
            _ => None,
        }
    }
}

/// Products whose name or liquor type contains `term`, ignoring case.
///
/// An empty term keeps everything. Order is preserved.
pub fn filter_products(products: &[Product], term: &str) -> Vec<Product> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|product| {
            product.nombre.to_lowercase().contains(&term)
                || product.tipo_licor.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

const SAMPLE: [(&str, &str, f64, f64, &str); 28] = [
    ("Ron Añejo 7 Años", "Ron", 14.5, 21.9, "02/01/2025"),
    ("Ron Blanco", "Ron", 8.2, 12.5, "02/01/2025"),
    ("Ron Especiado", "Ron", 10.0, 15.75, "05/01/2025"),
    ("Vodka Premium", "Vodka", 16.3, 24.0, "07/01/2025"),
    ("Vodka Clásico", "Vodka", 9.9, 14.9, "07/01/2025"),
    ("Whisky Escocés 12", "Whisky", 32.0, 45.5, "10/01/2025"),
    ("Whisky Bourbon", "Whisky", 24.75, 36.0, "10/01/2025"),
    ("Whisky de Malta", "Whisky", 41.2, 59.9, "12/01/2025"),
    ("Tequila Reposado", "Tequila", 19.5, 28.0, "14/01/2025"),
    ("Tequila Blanco", "Tequila", 15.0, 22.5, "14/01/2025"),
    ("Mezcal Artesanal", "Mezcal", 27.8, 39.9, "15/01/2025"),
    ("Pisco Quebranta", "Pisco", 11.4, 17.0, "18/01/2025"),
    ("Pisco Acholado", "Pisco", 13.1, 19.5, "18/01/2025"),
    ("Ginebra London Dry", "Ginebra", 17.6, 26.0, "20/01/2025"),
    ("Ginebra Rosa", "Ginebra", 18.2, 27.5, "20/01/2025"),
    ("Aguardiente Antioqueño", "Aguardiente", 7.5, 11.9, "22/01/2025"),
    ("Brandy Solera", "Brandy", 21.0, 30.5, "24/01/2025"),
    ("Coñac VSOP", "Coñac", 48.0, 69.0, "24/01/2025"),
    ("Vino Tinto Reserva", "Vino", 9.3, 14.0, "27/01/2025"),
    ("Vino Blanco Seco", "Vino", 8.1, 12.2, "27/01/2025"),
    ("Cava Brut", "Espumoso", 10.4, 16.0, "29/01/2025"),
    ("Champaña Rosé", "Espumoso", 38.5, 55.0, "29/01/2025"),
    ("Licor de Café", "Licor", 12.0, 18.0, "31/01/2025"),
    ("Licor de Hierbas", "Licor", 13.6, 19.9, "31/01/2025"),
    ("Crema de Whisky", "Licor", 14.2, 20.5, "03/02/2025"),
    ("Cerveza Artesanal IPA", "Cerveza", 2.1, 3.5, "04/02/2025"),
    ("Cerveza Negra", "Cerveza", 1.9, 3.2, "04/02/2025"),
    ("Sidra Natural", "Sidra", 4.4, 6.9, "06/02/2025"),
];

/// A fixed catalog used by the showcase app and tests.
pub fn sample_products() -> Vec<Product> {
    SAMPLE
        .iter()
        .zip(1..)
        .map(
            |(&(nombre, tipo_licor, precio_compra, precio_venta, fecha), id)| Product {
                id,
                nombre: nombre.to_owned(),
                tipo_licor: tipo_licor.to_owned(),
                precio_compra,
                precio_venta,
                fecha: fecha.to_owned(),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_fields() {
        let product = &sample_products()[0];

        assert_eq!(product.field("id"), Some(json!(1)));
        assert_eq!(product.field("nombre"), Some(json!("Ron Añejo 7 Años")));
        assert_eq!(product.field("precio_venta"), Some(json!(21.9)));
        assert_eq!(product.field("actions"), None);
    }

    #[test]
    fn test_sample_ids_are_sequential() {
        let products = sample_products();
        assert_eq!(products.len(), 28);
        assert!(
            products.iter().zip(1..).all(|(product, id)| product.id == id),
            "ids should start at 1 and follow catalog order"
        );
    }

    #[test]
    fn test_filter_matches_name_or_type_case_insensitively() {
        let products = sample_products();

        let whisky = filter_products(&products, "WHISKY");
        let names: Vec<&str> = whisky.iter().map(|p| p.nombre.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Whisky Escocés 12",
                "Whisky Bourbon",
                "Whisky de Malta",
                "Crema de Whisky"
            ]
        );

        let ron = filter_products(&products, "ron");
        assert!(ron.iter().all(|p| p.nombre.to_lowercase().contains("ron")
            || p.tipo_licor.to_lowercase().contains("ron")));
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let products = sample_products();
        assert_eq!(filter_products(&products, "  "), products);
    }

    #[test]
    fn test_filter_without_matches() {
        assert!(filter_products(&sample_products(), "sake").is_empty());
    }
}
