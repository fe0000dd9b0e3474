use super::domain::{Product, ProductId, ProductStatus};
use super::service::ProductValidationError;
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRow { line: u64, reason: String },
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read catalog seed: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
            CatalogImportError::InvalidRow { line, reason } => {
                write!(f, "catalog row on line {} rejected: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::InvalidRow { .. } => None,
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads catalog seed files exported from the hosted product table.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Product>, CatalogImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Product>, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut products = Vec::new();

        for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            let row = record?;
            // header occupies line 1
            products.push(row.into_product(index as u64 + 2)?);
        }

        Ok(products)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    name: String,
    image: String,
    price: u32,
    #[serde(alias = "discountPercentage", default)]
    discount_percentage: u8,
    category: String,
    subcategory: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    sizes: Option<String>,
    #[serde(default)]
    stock: u32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    rating: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
}

impl CatalogRow {
    fn into_product(self, line: u64) -> Result<Product, CatalogImportError> {
        let reject = |reason: String| CatalogImportError::InvalidRow { line, reason };

        if self.id.is_empty() {
            return Err(reject("missing product id".to_string()));
        }
        // same rules as products created through the catalog service
        if self.name.trim().is_empty() {
            return Err(reject(ProductValidationError::MissingName.to_string()));
        }
        if self.price == 0 {
            return Err(reject(ProductValidationError::MissingPrice.to_string()));
        }
        if self.discount_percentage > 100 {
            return Err(reject(
                ProductValidationError::DiscountOutOfRange(self.discount_percentage).to_string(),
            ));
        }

        let rating = match self.rating.as_deref() {
            Some(raw) => Some(
                raw.parse::<f32>()
                    .map_err(|_| reject(format!("rating '{raw}' is not a number")))?,
            ),
            None => None,
        };
        let status = match self.status.as_deref() {
            Some(raw) => parse_status(raw).ok_or_else(|| reject(format!("unknown status '{raw}'")))?,
            None => ProductStatus::Active,
        };
        let sizes = self
            .sizes
            .map(|raw| {
                raw.split('|')
                    .map(str::trim)
                    .filter(|size| !size.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Product {
            id: ProductId(self.id),
            name: self.name,
            image: self.image,
            price: self.price,
            discount_percentage: self.discount_percentage,
            category: self.category,
            subcategory: self.subcategory,
            description: self.description,
            sizes,
            stock: self.stock,
            rating,
            status,
        })
    }
}

fn parse_status(raw: &str) -> Option<ProductStatus> {
    let normalized: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    match normalized.as_str() {
        "active" => Some(ProductStatus::Active),
        "outofstock" => Some(ProductStatus::OutOfStock),
        _ => None,
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SEED: &str = "id,name,image,price,discount_percentage,category,subcategory,description,sizes,stock,rating,status\n\
prod10,Linen Kurta,https://example.test/kurta.jpg,1400,10,Men's,Ethnicwear,Breathable linen,S|M|L,12,4.4,Active\n\
prod11,Silk Scarf,https://example.test/scarf.jpg,600,0,Women's,Accessories,,,0,,Out of Stock\n";

    #[test]
    fn imports_rows_with_optional_columns() {
        let products = CatalogImporter::from_reader(Cursor::new(SEED)).expect("seed parses");
        assert_eq!(products.len(), 2);

        let kurta = &products[0];
        assert_eq!(kurta.id, ProductId::new("prod10"));
        assert_eq!(kurta.sizes, vec!["S", "M", "L"]);
        assert_eq!(kurta.rating, Some(4.4));
        assert_eq!(kurta.status, ProductStatus::Active);

        let scarf = &products[1];
        assert!(scarf.description.is_none());
        assert!(scarf.sizes.is_empty());
        assert!(scarf.rating.is_none());
        assert_eq!(scarf.status, ProductStatus::OutOfStock);
    }

    #[test]
    fn rejects_unknown_status() {
        let csv = "id,name,image,price,discount_percentage,category,subcategory,description,sizes,stock,rating,status\n\
prod12,Cap,https://example.test/cap.jpg,300,0,Men's,Accessories,,,3,,Archived\n";
        match CatalogImporter::from_reader(Cursor::new(csv)) {
            Err(CatalogImportError::InvalidRow { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("Archived"));
            }
            other => panic!("expected invalid row, got {other:?}"),
        }
    }

    #[test]
    fn rejects_rows_the_catalog_would_not_accept() {
        let header = "id,name,image,price,discount_percentage,category,subcategory,description,sizes,stock,rating,status\n";
        let valid = "prod14,Tote Bag,https://example.test/tote.jpg,800,5,Women's,Accessories,,,4,,Active\n";
        let cases = [
            (
                "prod15,Free Socks,https://example.test/socks.jpg,0,0,Men's,Accessories,,,4,,Active\n",
                "price must be greater than zero",
            ),
            (
                "prod16,   ,https://example.test/blank.jpg,500,0,Men's,Accessories,,,4,,Active\n",
                "name is required",
            ),
            (
                "prod17,Gift Card,https://example.test/gift.jpg,500,150,Men's,Accessories,,,4,,Active\n",
                "found 150",
            ),
        ];

        for (row, expected) in cases {
            let csv = format!("{header}{valid}{row}");
            match CatalogImporter::from_reader(Cursor::new(csv)) {
                Err(CatalogImportError::InvalidRow { line, reason }) => {
                    assert_eq!(line, 3);
                    assert!(reason.contains(expected), "{reason:?} should mention {expected:?}");
                }
                other => panic!("expected invalid row for {row:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn surfaces_malformed_numbers_as_csv_errors() {
        let csv = "id,name,image,price,discount_percentage,category,subcategory,description,sizes,stock,rating,status\n\
prod13,Belt,https://example.test/belt.jpg,cheap,0,Men's,Accessories,,,3,,Active\n";
        assert!(matches!(
            CatalogImporter::from_reader(Cursor::new(csv)),
            Err(CatalogImportError::Csv(_))
        ));
    }
}
