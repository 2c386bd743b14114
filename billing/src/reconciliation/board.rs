//! 对账看板 - 带缓存的聚合结果
//!
//! Aggregation is pure, so the last report can be reused until either the
//! orders or the confirmation snapshot change.

use super::aggregator::reconcile;
use super::confirmations::ConfirmationSet;
use super::source::OrderSource;
use shared::billing::{BillingReport, OrderRecord};
use shared::error::AppResult;
use std::sync::Arc;

struct CachedReport {
    orders_version: u64,
    confirmations: ConfirmationSet,
    report: Arc<BillingReport>,
}

/// Orders plus a memoized [`BillingReport`]
pub struct BillingBoard {
    orders: Vec<OrderRecord>,
    orders_version: u64,
    cache: Option<CachedReport>,
    recomputations: u64,
}

impl BillingBoard {
    pub fn new(orders: Vec<OrderRecord>) -> Self {
        Self {
            orders,
            orders_version: 0,
            cache: None,
            recomputations: 0,
        }
    }

    pub fn from_source(source: &dyn OrderSource) -> AppResult<Self> {
        Ok(Self::new(source.load_orders()?))
    }

    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    /// Swap in a new order list; the next report is recomputed
    pub fn replace_orders(&mut self, orders: Vec<OrderRecord>) {
        self.orders = orders;
        self.orders_version += 1;
    }

    /// Reload orders from `source`
    pub fn reload(&mut self, source: &dyn OrderSource) -> AppResult<()> {
        let orders = source.load_orders()?;
        self.replace_orders(orders);
        Ok(())
    }

    /// Report for the current orders and `confirmations`
    pub fn report(&mut self, confirmations: &ConfirmationSet) -> Arc<BillingReport> {
        if let Some(cached) = &self.cache
            && cached.orders_version == self.orders_version
            && (cached.confirmations.same_snapshot(confirmations)
                || cached.confirmations == *confirmations)
        {
            return Arc::clone(&cached.report);
        }

        let report = Arc::new(reconcile(&self.orders, confirmations));
        self.recomputations += 1;
        tracing::debug!(
            orders_version = self.orders_version,
            confirmations_version = confirmations.version(),
            "Billing report recomputed"
        );
        self.cache = Some(CachedReport {
            orders_version: self.orders_version,
            confirmations: confirmations.clone(),
            report: Arc::clone(&report),
        });
        report
    }

    /// How many times the report was actually rebuilt
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
