/// Dashboard aggregates.
///
/// Everything here is computed from collections the pages already fetch; the
/// dashboard has no endpoints of its own.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::entity::{Consultation, ConsultationStatus, Order, OrderStatus, Product, User};

/// The five headline counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub users: usize,
    pub admins: usize,
    pub products: usize,
    pub orders: usize,
    pub consultations: usize,
}

impl DashboardStats {
    pub fn collect(
        users: &[User],
        admins: &[User],
        products: &[Product],
        orders: &[Order],
        consultations: &[Consultation],
    ) -> Self {
        DashboardStats {
            users: users.len(),
            admins: admins.len(),
            products: products.len(),
            orders: orders.len(),
            consultations: consultations.len(),
        }
    }
}

/// One bar of the orders-per-day chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyOrderCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Orders grouped by purchase day, ascending by date.
pub fn orders_per_day(orders: &[Order]) -> Vec<DailyOrderCount> {
    let mut by_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for order in orders {
        *by_day.entry(order.purchased_at.date_naive()).or_insert(0) += 1;
    }
    by_day
        .into_iter()
        .map(|(date, count)| DailyOrderCount { date, count })
        .collect()
}

/// Orders still waiting for payment, the "Jumlah pesanan menunggu" banner.
pub fn pending_orders(orders: &[Order]) -> usize {
    orders
        .iter()
        .filter(|o| o.status == OrderStatus::Pending)
        .count()
}

/// Consultations not yet picked up by a doctor.
pub fn pending_consultations(consultations: &[Consultation]) -> usize {
    consultations
        .iter()
        .filter(|c| c.status == ConsultationStatus::Pending)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: i64, status: OrderStatus, timestamp: &str) -> Order {
        Order {
            id,
            code: format!("PSN-{}", id),
            customer: None,
            purchased_at: timestamp.parse().unwrap(),
            status,
            payment_proof: None,
        }
    }

    #[test]
    fn test_orders_per_day_groups_and_sorts() {
        let orders = vec![
            order(1, OrderStatus::Pending, "2024-05-04T08:00:00Z"),
            order(2, OrderStatus::Paid, "2024-05-03T10:00:00Z"),
            order(3, OrderStatus::Completed, "2024-05-03T23:00:00Z"),
            order(4, OrderStatus::Pending, "2024-05-05T01:00:00Z"),
        ];
        let series = orders_per_day(&orders);
        let expected: Vec<(NaiveDate, usize)> = vec![
            (NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(), 2),
            (NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(), 1),
            (NaiveDate::from_ymd_opt(2024, 5, 5).unwrap(), 1),
        ];
        let got: Vec<(NaiveDate, usize)> = series.iter().map(|d| (d.date, d.count)).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_orders_per_day_empty() {
        assert!(orders_per_day(&[]).is_empty());
    }

    #[test]
    fn test_pending_orders() {
        let orders = vec![
            order(1, OrderStatus::Pending, "2024-05-04T08:00:00Z"),
            order(2, OrderStatus::Paid, "2024-05-04T09:00:00Z"),
            order(3, OrderStatus::Pending, "2024-05-04T10:00:00Z"),
        ];
        assert_eq!(pending_orders(&orders), 2);
    }

    #[test]
    fn test_stats_collect() {
        let stats = DashboardStats::collect(&[], &[], &[], &[], &[]);
        assert_eq!(
            stats,
            DashboardStats {
                users: 0,
                admins: 0,
                products: 0,
                orders: 0,
                consultations: 0
            }
        );
    }
}
