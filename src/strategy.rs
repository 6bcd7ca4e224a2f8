//! Pluggable pricing policies used by the analyzer.

use fastnum::{D128, dec128};

use crate::domain::{LineItem, Product};
use crate::engine::SellerStats;

/// Turns one purchased line item into a revenue figure.
pub trait RevenueCalculator {
    fn revenue(&self, item: &LineItem, product: &Product) -> D128;
}

/// Turns a seller's rank into a bonus rate, later multiplied by the seller's profit.
///
/// `rank` is zero-based in the profit-descending order and `total` is the
/// number of ranked sellers.
pub trait BonusCalculator {
    fn rate(&self, rank: usize, total: usize, seller: &SellerStats) -> D128;
}

impl<F> RevenueCalculator for F
where
    F: Fn(&LineItem, &Product) -> D128,
{
    fn revenue(&self, item: &LineItem, product: &Product) -> D128 {
        self(item, product)
    }
}

impl<F> BonusCalculator for F
where
    F: Fn(usize, usize, &SellerStats) -> D128,
{
    fn rate(&self, rank: usize, total: usize, seller: &SellerStats) -> D128 {
        self(rank, total, seller)
    }
}

/// `price * quantity * (1 - discount / 100)`, rounded to cents.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleRevenue;

impl RevenueCalculator for SimpleRevenue {
    fn revenue(&self, item: &LineItem, _product: &Product) -> D128 {
        let discount_factor = D128::ONE - item.discount() / dec128!(100);
        let revenue = item.sale_price() * D128::from(item.quantity()) * discount_factor;
        revenue.round(2)
    }
}

/// Fixed rate per rank: 150 for first, 100 for second and third,
/// 0 for last, 50 for everyone else.
///
/// The podium rules are checked before the last-place rule, so a seller who
/// is both (e.g. the only seller) gets the podium rate.
#[derive(Clone, Copy, Debug, Default)]
pub struct BonusByProfit;

impl BonusCalculator for BonusByProfit {
    fn rate(&self, rank: usize, total: usize, _seller: &SellerStats) -> D128 {
        match rank {
            0 => dec128!(150),
            1 | 2 => dec128!(100),
            _ if rank + 1 == total => D128::ZERO,
            _ => dec128!(50),
        }
    }
}
