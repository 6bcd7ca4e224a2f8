use std::fmt;

use fastnum::D128;

use crate::domain::{LineItem, Product, ReportCsvRow, ReportRow, SellerId, Sku};

impl fmt::Display for SellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl LineItem {
    /// Sale price per unit, zero when absent.
    pub fn sale_price(&self) -> D128 {
        self.sale_price.unwrap_or(D128::ZERO)
    }

    /// Units sold, one when absent. An explicit zero stays zero.
    pub fn quantity(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }

    /// Discount in percent (0 to 100), zero when absent.
    pub fn discount(&self) -> D128 {
        self.discount.unwrap_or(D128::ZERO)
    }
}

impl Product {
    pub fn purchase_price(&self) -> D128 {
        self.purchase_price.unwrap_or(D128::ZERO)
    }
}

impl From<&ReportRow> for ReportCsvRow {
    fn from(row: &ReportRow) -> Self {
        let top_products = row
            .top_products
            .iter()
            .map(|top| format!("{}:{}", top.sku, top.quantity))
            .collect::<Vec<_>>()
            .join(";");

        ReportCsvRow {
            seller_id: row.seller_id.clone(),
            name: row.name.clone(),
            revenue: row.revenue,
            profit: row.profit,
            sales_count: row.sales_count,
            top_products,
            bonus: row.bonus,
        }
    }
}

#[cfg(test)]
mod tests {
    use fastnum::dec128;

    use super::*;
    use crate::domain::TopProduct;

    #[test]
    fn test_line_item_defaults() {
        let item = LineItem {
            sku: Sku::new("SKU_001"),
            sale_price: None,
            quantity: None,
            discount: None,
        };
        assert_eq!(item.sale_price(), D128::ZERO);
        assert_eq!(item.quantity(), 1);
        assert_eq!(item.discount(), D128::ZERO);
    }

    #[test]
    fn test_line_item_explicit_zero_quantity() {
        let item = LineItem {
            sku: Sku::new("SKU_001"),
            sale_price: Some(dec128!(10)),
            quantity: Some(0),
            discount: Some(dec128!(5)),
        };
        assert_eq!(item.quantity(), 0);
        assert_eq!(item.discount(), dec128!(5));
    }

    #[test]
    fn test_product_missing_purchase_price() {
        let product = Product {
            sku: Sku::new("SKU_001"),
            purchase_price: None,
        };
        assert_eq!(product.purchase_price(), D128::ZERO);
    }

    #[test]
    fn test_csv_row_flattens_top_products() {
        let row = ReportRow {
            seller_id: SellerId::new("seller_1"),
            name: "Alexey Petrov".to_string(),
            revenue: dec128!(60.00),
            profit: dec128!(30.00),
            sales_count: 1,
            top_products: vec![
                TopProduct {
                    sku: Sku::new("SKU_001"),
                    quantity: 3,
                },
                TopProduct {
                    sku: Sku::new("SKU_002"),
                    quantity: 1,
                },
            ],
            bonus: dec128!(4.50),
        };

        let csv_row = ReportCsvRow::from(&row);
        assert_eq!(csv_row.top_products, "SKU_001:3;SKU_002:1");
        assert_eq!(csv_row.seller_id, row.seller_id);
        assert_eq!(csv_row.bonus, dec128!(4.50));
    }

    #[test]
    fn test_csv_row_without_products() {
        let row = ReportRow {
            seller_id: SellerId::new("seller_2"),
            name: "Ivan Ivanov".to_string(),
            revenue: D128::ZERO,
            profit: D128::ZERO,
            sales_count: 0,
            top_products: Vec::new(),
            bonus: D128::ZERO,
        };
        assert_eq!(ReportCsvRow::from(&row).top_products, "");
    }
}
