mod amount;
mod impls;

use fastnum::D128;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct SellerId(String);

impl SellerId {
    #[allow(unused)]
    pub fn new(id: impl Into<String>) -> Self {
        SellerId(id.into())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    #[allow(unused)]
    pub fn new(sku: impl Into<String>) -> Self {
        Sku(sku.into())
    }
}

/// The four collections the report is computed from.
///
/// Every collection is required. Emptiness is checked by the analyzer,
/// not here, so that the error names the offending collection.
#[derive(Deserialize, Debug, Default)]
pub struct Dataset {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
    pub purchase_records: Vec<PurchaseRecord>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Seller {
    pub id: SellerId,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Product {
    pub sku: Sku,
    #[serde(default, deserialize_with = "amount::deserialize_optional")]
    pub purchase_price: Option<D128>,
}

/// Customers are only checked for presence, their other fields are ignored.
#[derive(Deserialize, Clone, Debug)]
pub struct Customer {
    #[allow(unused)]
    pub id: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct PurchaseRecord {
    pub seller_id: SellerId,
    pub items: Vec<LineItem>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct LineItem {
    pub sku: Sku,
    #[serde(default, deserialize_with = "amount::deserialize_optional")]
    pub sale_price: Option<D128>,
    pub quantity: Option<u32>,
    #[serde(default, deserialize_with = "amount::deserialize_optional")]
    pub discount: Option<D128>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TopProduct {
    pub sku: Sku,
    pub quantity: u64,
}

/// One line of the final report, ordered by descending profit.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub seller_id: SellerId,
    pub name: String,
    #[serde(serialize_with = "amount::serialize_number")]
    pub revenue: D128,
    #[serde(serialize_with = "amount::serialize_number")]
    pub profit: D128,
    pub sales_count: u32,
    pub top_products: Vec<TopProduct>,
    #[serde(serialize_with = "amount::serialize_number")]
    pub bonus: D128,
}

/// A helper struct to facilitate CSV serialization of report rows,
/// since CSV cannot hold the nested top products list.
#[derive(Serialize, Debug)]
pub struct ReportCsvRow {
    pub seller_id: SellerId,
    pub name: String,
    pub revenue: D128,
    pub profit: D128,
    pub sales_count: u32,
    pub top_products: String,
    pub bonus: D128,
}
