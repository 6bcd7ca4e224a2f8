use std::{
    cmp::Ordering,
    collections::{HashMap, hash_map},
};

use fastnum::*;
use tracing::debug;

use crate::{
    domain::{Dataset, Product, ReportRow, SellerId, Sku, TopProduct},
    error::AnalysisError,
    strategy::{BonusCalculator, RevenueCalculator},
};

pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Running totals for one seller while receipts are walked.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStats {
    seller_id: SellerId,
    name: String,
    revenue: D128,
    profit: D128,
    sales_count: u32,
    products_sold: Vec<(Sku, u64)>,
    product_slots: HashMap<Sku, usize>,
}

impl SellerStats {
    pub fn new(seller_id: SellerId, name: String) -> Self {
        SellerStats {
            seller_id,
            name,
            revenue: D128::ZERO,
            profit: D128::ZERO,
            sales_count: 0,
            products_sold: Vec::new(),
            product_slots: HashMap::new(),
        }
    }

    #[allow(unused)]
    pub fn seller_id(&self) -> &SellerId {
        &self.seller_id
    }

    #[allow(unused)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[allow(unused)]
    pub fn revenue(&self) -> D128 {
        self.revenue
    }

    #[allow(unused)]
    pub fn profit(&self) -> D128 {
        self.profit
    }

    #[allow(unused)]
    pub fn sales_count(&self) -> u32 {
        self.sales_count
    }

    /// Cumulative quantity per sku, in the order the skus were first sold.
    #[allow(unused)]
    pub fn products_sold(&self) -> &[(Sku, u64)] {
        &self.products_sold
    }

    fn record_sold(&mut self, sku: &Sku, quantity: u32) {
        let quantity = u64::from(quantity);
        match self.product_slots.entry(sku.clone()) {
            hash_map::Entry::Occupied(slot) => {
                let sold = &mut self.products_sold[*slot.get()].1;
                *sold = sold.saturating_add(quantity);
            }
            hash_map::Entry::Vacant(slot) => {
                slot.insert(self.products_sold.len());
                self.products_sold.push((sku.clone(), quantity));
            }
        }
    }

    fn top_products(&self) -> Vec<TopProduct> {
        let mut sold = self.products_sold.clone();
        // `sort_by` is stable, equal quantities keep the order they were first sold in.
        sold.sort_by(|a, b| b.1.cmp(&a.1));
        sold.into_iter()
            .take(TOP_PRODUCTS_LIMIT)
            .map(|(sku, quantity)| TopProduct { sku, quantity })
            .collect()
    }
}

/// Computes the per-seller performance report.
///
/// Revenue and bonus policies are injected through [`SalesAnalyzerBuilder`].
pub struct SalesAnalyzer {
    revenue: Box<dyn RevenueCalculator>,
    bonus: Box<dyn BonusCalculator>,
}

#[derive(Default)]
pub struct SalesAnalyzerBuilder {
    revenue: Option<Box<dyn RevenueCalculator>>,
    bonus: Option<Box<dyn BonusCalculator>>,
}

impl SalesAnalyzerBuilder {
    pub fn revenue(mut self, revenue: impl RevenueCalculator + 'static) -> Self {
        self.revenue = Some(Box::new(revenue));
        self
    }

    pub fn bonus(mut self, bonus: impl BonusCalculator + 'static) -> Self {
        self.bonus = Some(Box::new(bonus));
        self
    }

    pub fn build(self) -> Result<SalesAnalyzer, AnalysisError> {
        let revenue = self
            .revenue
            .ok_or(AnalysisError::MissingStrategy("calculate_revenue"))?;
        let bonus = self
            .bonus
            .ok_or(AnalysisError::MissingStrategy("calculate_bonus"))?;
        Ok(SalesAnalyzer { revenue, bonus })
    }
}

impl SalesAnalyzer {
    pub fn builder() -> SalesAnalyzerBuilder {
        SalesAnalyzerBuilder::default()
    }

    /// Aggregates revenue and profit per seller, ranks sellers by profit and
    /// assigns bonuses and top products.
    ///
    /// Returns one row per distinct seller id, ordered by descending profit.
    /// Sellers with equal profit keep their input order.
    ///
    /// Receipts of unknown sellers and items of unknown products are skipped
    /// without error. An unknown product does not stop the rest of its
    /// receipt from being counted.
    pub fn analyze(&self, data: &Dataset) -> Result<Vec<ReportRow>, AnalysisError> {
        validate(data)?;

        let mut sellers: Vec<SellerStats> = Vec::with_capacity(data.sellers.len());
        let mut seller_index: HashMap<&SellerId, usize> = HashMap::new();
        for seller in &data.sellers {
            let name = format!("{} {}", seller.first_name, seller.last_name);
            match seller_index.entry(&seller.id) {
                hash_map::Entry::Occupied(entry) => {
                    sellers[*entry.get()].name = name;
                }
                hash_map::Entry::Vacant(entry) => {
                    entry.insert(sellers.len());
                    sellers.push(SellerStats::new(seller.id.clone(), name));
                }
            }
        }

        let product_index: HashMap<&Sku, &Product> = data
            .products
            .iter()
            .map(|product| (&product.sku, product))
            .collect();

        debug!(
            sellers = sellers.len(),
            products = product_index.len(),
            "indexes built"
        );

        for record in &data.purchase_records {
            let Some(&slot) = seller_index.get(&record.seller_id) else {
                continue;
            };
            let seller = &mut sellers[slot];
            seller.sales_count += 1;

            let mut receipt_revenue = D128::ZERO;
            for item in &record.items {
                let Some(product) = product_index.get(&item.sku) else {
                    continue;
                };

                let quantity = item.quantity();
                let revenue = self.revenue.revenue(item, product);
                let cost = product.purchase_price() * D128::from(quantity);

                seller.profit += revenue - cost;
                receipt_revenue += revenue;
                seller.record_sold(&item.sku, quantity);
            }
            seller.revenue += receipt_revenue;
        }

        // `sort_by` is stable, sellers with equal profit keep their input order.
        sellers.sort_by(|a, b| b.profit.partial_cmp(&a.profit).unwrap_or(Ordering::Equal));

        let total = sellers.len();
        let rows = sellers
            .iter()
            .enumerate()
            .map(|(rank, seller)| {
                let rate = self.bonus.rate(rank, total, seller);
                let bonus = (seller.profit * rate).round(2);

                ReportRow {
                    seller_id: seller.seller_id.clone(),
                    name: seller.name.clone(),
                    revenue: seller.revenue.round(2),
                    profit: seller.profit.round(2),
                    sales_count: seller.sales_count,
                    top_products: seller.top_products(),
                    bonus: (bonus / dec128!(1000)).round(2),
                }
            })
            .collect();

        Ok(rows)
    }
}

fn validate(data: &Dataset) -> Result<(), AnalysisError> {
    let collections = [
        ("sellers", data.sellers.is_empty()),
        ("products", data.products.is_empty()),
        ("customers", data.customers.is_empty()),
        ("purchase_records", data.purchase_records.is_empty()),
    ];

    match collections.into_iter().find(|&(_, empty)| empty) {
        Some((name, _)) => Err(AnalysisError::EmptyCollection(name)),
        None => Ok(()),
    }
}
