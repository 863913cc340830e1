//! Applying a normalized filter to an order collection.
//!
//! Absent predicates never constrain. Date bounds are strict: `before_date`
//! keeps orders placed strictly before the bound, `after_date` strictly
//! after. String comparisons (product, state, status) are case-insensitive.

use super::filters::OrderFilter;
use super::types::{Order, OrderStatus};

impl OrderFilter {
    /// Whether a single order satisfies every present predicate.
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(names) = &self.product_names {
            if !names.contains(&order.product_name.to_lowercase()) {
                return false;
            }
        }

        let ordered_on = order.ordered_at.date_naive();
        if let Some(before) = self.before_date {
            if ordered_on >= before {
                return false;
            }
        }
        if let Some(after) = self.after_date {
            if ordered_on <= after {
                return false;
            }
        }

        if let Some(min) = self.min_amount {
            if order.amount < min {
                return false;
            }
        }
        if let Some(max) = self.max_amount {
            if order.amount > max {
                return false;
            }
        }

        if let Some(state) = &self.state {
            if !order.address.state.eq_ignore_ascii_case(state) {
                return false;
            }
        }

        if let Some(has_discount) = self.discount {
            if order.discount.is_some() != has_discount {
                return false;
            }
        }
        if let Some(min_pct) = self.min_discount_percentage {
            if !order.discount.is_some_and(|pct| pct >= min_pct) {
                return false;
            }
        }

        if let Some(status) = &self.status {
            // Status is a free string in the filter; values outside the
            // closed set match no orders.
            match OrderStatus::try_from_str(status) {
                Some(status) => {
                    if order.status != status {
                        return false;
                    }
                }
                None => return false,
            }
        }

        true
    }

    /// Apply the filter over a collection, preserving input order.
    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders.iter().filter(|order| self.matches(order)).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::domain::orders::types::Address;

    fn order(product: &str, amount: f64, discount: Option<f64>, status: OrderStatus) -> Order {
        Order {
            id: Uuid::new_v4(),
            product_name: product.to_string(),
            amount,
            discount,
            address: Address {
                street: "123 Main St".into(),
                city: "San Francisco".into(),
                state: "California".into(),
                zip: "94105".into(),
            },
            status,
            ordered_at: Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
        }
    }

    fn dataset() -> Vec<Order> {
        vec![
            order("Desk Lamp", 42.5, None, OrderStatus::Pending),
            order("Office Chair", 250.0, Some(15.0), OrderStatus::Shipped),
            order("Notebook", 8.0, Some(50.0), OrderStatus::Delivered),
        ]
    }

    #[test]
    fn empty_filter_matches_everything() {
        let orders = dataset();
        assert_eq!(OrderFilter::default().apply(&orders).len(), orders.len());
    }

    #[test]
    fn product_names_narrow_case_insensitively() {
        let orders = dataset();
        let filter = OrderFilter {
            product_names: Some(vec!["desk lamp".into()]),
            ..Default::default()
        };
        let hits = filter.apply(&orders);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product_name, "Desk Lamp");
    }

    #[test]
    fn date_bounds_are_strict() {
        let orders = dataset();
        let on_the_day = OrderFilter {
            before_date: Some(chrono::NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()),
            ..Default::default()
        };
        assert!(on_the_day.apply(&orders).is_empty());

        let day_after = OrderFilter {
            before_date: Some(chrono::NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()),
            ..Default::default()
        };
        assert_eq!(day_after.apply(&orders).len(), orders.len());

        let after = OrderFilter {
            after_date: Some(chrono::NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()),
            ..Default::default()
        };
        assert_eq!(after.apply(&orders).len(), orders.len());
    }

    #[test]
    fn amount_bounds_are_inclusive() {
        let orders = dataset();
        let filter = OrderFilter {
            min_amount: Some(8.0),
            max_amount: Some(250.0),
            ..Default::default()
        };
        assert_eq!(filter.apply(&orders).len(), 3);

        let narrower = OrderFilter {
            min_amount: Some(10.0),
            max_amount: Some(100.0),
            ..Default::default()
        };
        let hits = narrower.apply(&orders);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product_name, "Desk Lamp");
    }

    #[test]
    fn discount_flag_splits_the_dataset() {
        let orders = dataset();
        let with = OrderFilter {
            discount: Some(true),
            ..Default::default()
        };
        assert_eq!(with.apply(&orders).len(), 2);

        let without = OrderFilter {
            discount: Some(false),
            ..Default::default()
        };
        assert_eq!(without.apply(&orders).len(), 1);
    }

    #[test]
    fn min_discount_percentage_excludes_undiscounted_orders() {
        let orders = dataset();
        let filter = OrderFilter {
            min_discount_percentage: Some(20.0),
            ..Default::default()
        };
        let hits = filter.apply(&orders);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product_name, "Notebook");
    }

    #[test]
    fn status_matches_case_insensitively_and_unknown_matches_nothing() {
        let orders = dataset();
        let shipped = OrderFilter {
            status: Some("Shipped".into()),
            ..Default::default()
        };
        assert_eq!(shipped.apply(&orders).len(), 1);

        let unknown = OrderFilter {
            status: Some("in transit".into()),
            ..Default::default()
        };
        assert!(unknown.apply(&orders).is_empty());
    }

    #[test]
    fn state_matches_case_insensitively() {
        let orders = dataset();
        let filter = OrderFilter {
            state: Some("california".into()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&orders).len(), 3);

        let other = OrderFilter {
            state: Some("Oregon".into()),
            ..Default::default()
        };
        assert!(other.apply(&orders).is_empty());
    }
}
