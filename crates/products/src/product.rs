use serde::{Deserialize, Serialize};

use catalog_core::{Entity, ProductId};

/// Catalog record.
///
/// Field names on the wire follow the catalog file format (`productId`,
/// `productName`, `quantityOnHand`, ...). Unknown fields are ignored and
/// missing ones take their default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    #[serde(alias = "productID")]
    pub product_id: ProductId,
    pub sku: String,
    pub product_name: String,
    pub manufacturer: String,
    /// Expected to be non-negative; not enforced.
    pub quantity_on_hand: i64,
}

impl Product {
    /// New, not-yet-identified record. The store assigns the id on insert.
    pub fn new(
        sku: impl Into<String>,
        product_name: impl Into<String>,
        manufacturer: impl Into<String>,
        quantity_on_hand: i64,
    ) -> Self {
        Self {
            product_id: ProductId::unassigned(),
            sku: sku.into(),
            product_name: product_name.into(),
            manufacturer: manufacturer.into(),
            quantity_on_hand,
        }
    }

    pub fn with_id(mut self, product_id: i64) -> Self {
        self.product_id = ProductId::new(product_id);
        self
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// A positive id means the record targets an existing entry (update).
    pub fn is_identified(&self) -> bool {
        self.product_id.is_assigned()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}
