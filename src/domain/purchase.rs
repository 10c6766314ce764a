use serde::{Deserialize, Serialize};

/// Path the ingestion API accepts purchases on.
pub const PURCHASE_PATH: &str = "/purchase";

/// JSON body of a single `POST /purchase`.
///
/// Field names follow the ingestion API's wire schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub categoria: i32,
    pub producto_id: String,
    pub precio: f64,
    pub cantidad_vendida: u32,
}
