use serde::{Deserialize, Serialize};

use patternforge_core::{Entity, OrderId, Prototype};

use crate::discount::Discount;
use crate::line_item::LineItem;

/// Appended to the source id when an order is duplicated.
pub const DUPLICATE_SUFFIX: &str = "_copy";

/// Payment method of a freshly created order.
pub const DEFAULT_PAYMENT_METHOD: &str = "Cash";

/// Aggregate root: Order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    items: Vec<LineItem>,
    /// Decimal delivery cost; expected non-negative, not validated.
    delivery_cost: f64,
    discount: Option<Discount>,
    payment_method: String,
}

impl Order {
    /// Create an order with no items, free delivery, no discount and the
    /// default payment method.
    pub fn new(id: impl Into<OrderId>) -> Self {
        Self {
            id: id.into(),
            items: Vec::new(),
            delivery_cost: 0.0,
            discount: None,
            payment_method: DEFAULT_PAYMENT_METHOD.to_string(),
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn delivery_cost(&self) -> f64 {
        self.delivery_cost
    }

    pub fn discount(&self) -> Option<&Discount> {
        self.discount.as_ref()
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Remove every item named exactly `name`. Returns how many were removed.
    pub fn remove_items_named(&mut self, name: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.name != name);
        before - self.items.len()
    }

    pub fn set_delivery_cost(&mut self, delivery_cost: f64) {
        self.delivery_cost = delivery_cost;
    }

    pub fn set_discount(&mut self, discount: Discount) {
        self.discount = Some(discount);
    }

    pub fn clear_discount(&mut self) {
        self.discount = None;
    }

    pub fn set_payment_method(&mut self, payment_method: impl Into<String>) {
        self.payment_method = payment_method.into();
    }

    /// Sum of line-item totals, before delivery and discount.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::total).sum()
    }

    /// `(subtotal + delivery)`, then the discount if any.
    ///
    /// The discount applies to the post-delivery amount, so delivery is
    /// discounted too.
    pub fn compute_total(&self) -> f64 {
        let gross = self.subtotal() + self.delivery_cost;
        match &self.discount {
            Some(discount) => discount.apply(gross),
            None => gross,
        }
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Prototype for Order {
    /// New id is the source id plus [`DUPLICATE_SUFFIX`]; items and discount
    /// are duplicated one by one.
    fn duplicate(&self) -> Self {
        let copy = Self {
            id: self.id.with_suffix(DUPLICATE_SUFFIX),
            items: self.items.iter().map(Prototype::duplicate).collect(),
            delivery_cost: self.delivery_cost,
            discount: self.discount.as_ref().map(Prototype::duplicate),
            payment_method: self.payment_method.clone(),
        };
        tracing::debug!(source = %self.id, duplicate = %copy.id, items = copy.items.len(), "order duplicated");
        copy
    }
}

impl core::fmt::Display for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "=== ORDER: {} ===", self.id)?;
        writeln!(f, "Items:")?;
        for item in &self.items {
            writeln!(f, "  - {item}")?;
        }
        writeln!(f, "Delivery: {:.2}", self.delivery_cost)?;
        match &self.discount {
            Some(discount) => writeln!(f, "Discount: {discount}")?,
            None => writeln!(f, "Discount: none")?,
        }
        writeln!(f, "Payment method: {}", self.payment_method)?;
        writeln!(f, "TOTAL: {:.2}", self.compute_total())?;
        write!(f, "====================")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    fn sample_order() -> Order {
        let mut order = Order::new("ORD-001");
        order.add_item(LineItem::new("Laptop", 450_000.0, 1));
        order.add_item(LineItem::new("Mouse", 15_000.0, 2));
        order.add_item(LineItem::new("Keyboard", 25_000.0, 1));
        order.set_delivery_cost(5_000.0);
        order.set_discount(Discount::new("New Year", 10.0));
        order.set_payment_method("Bank transfer");
        order
    }

    #[test]
    fn new_order_has_defaults() {
        let order = Order::new("ORD-9");
        assert!(order.items().is_empty());
        assert_eq!(order.delivery_cost(), 0.0);
        assert!(order.discount().is_none());
        assert_eq!(order.payment_method(), DEFAULT_PAYMENT_METHOD);
        assert_close(order.compute_total(), 0.0);
    }

    #[test]
    fn total_applies_discount_after_delivery() {
        let order = sample_order();
        assert_close(order.subtotal(), 505_000.0);
        assert_close(order.compute_total(), 459_000.0);
    }

    #[test]
    fn total_without_discount_is_subtotal_plus_delivery() {
        let mut order = sample_order();
        order.clear_discount();
        assert_close(order.compute_total(), 510_000.0);
    }

    #[test]
    fn remove_items_named_removes_all_matches() {
        let mut order = Order::new("ORD-2");
        order.add_item(LineItem::new("Mouse", 15_000.0, 1));
        order.add_item(LineItem::new("Laptop", 450_000.0, 1));
        order.add_item(LineItem::new("Mouse", 18_000.0, 1));

        assert_eq!(order.remove_items_named("Mouse"), 2);
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.items()[0].name, "Laptop");
    }

    #[test]
    fn remove_items_named_without_match_is_noop() {
        let mut order = sample_order();
        assert_eq!(order.remove_items_named("mouse"), 0);
        assert_eq!(order.items().len(), 3);
    }

    #[test]
    fn extreme_amounts_do_not_panic() {
        let mut order = Order::new("ORD-BIG");
        order.add_item(LineItem::new("Bulk", u64::MAX as f64, 2));
        order.add_item(LineItem::new("Spare", u64::MAX as f64, 1));
        order.set_delivery_cost(1.0);

        let total = order.compute_total();
        assert!(total.is_finite());
        assert!(total >= 3.0 * u64::MAX as f64);
    }

    #[test]
    fn decimal_prices_and_delivery() {
        let mut order = Order::new("ORD-DEC");
        order.add_item(LineItem::new("Cable", 19.99, 2));
        order.set_delivery_cost(4.50);
        order.set_discount(Discount::new("Half", 50.0));

        assert_close(order.subtotal(), 39.98);
        assert_close(order.compute_total(), 22.24);
    }

    #[test]
    fn duplicate_derives_id_and_copies_fields() {
        let original = sample_order();
        let copy = original.duplicate();

        assert_eq!(copy.id().as_str(), "ORD-001_copy");
        assert_ne!(copy.id(), original.id());
        assert_eq!(copy.items(), original.items());
        assert_eq!(copy.discount(), original.discount());
        assert_eq!(copy.delivery_cost(), original.delivery_cost());
        assert_eq!(copy.payment_method(), original.payment_method());
    }

    #[test]
    fn duplicate_without_discount_stays_without_discount() {
        let mut original = sample_order();
        original.clear_discount();
        assert!(original.duplicate().discount().is_none());
    }

    #[test]
    fn mutating_duplicate_leaves_original_untouched() {
        let original = sample_order();
        let mut copy = original.duplicate();

        copy.remove_items_named("Mouse");
        copy.set_discount(Discount::new("Club", 5.0));
        copy.set_payment_method("Card");

        assert_close(copy.subtotal(), 475_000.0);
        assert_close(copy.compute_total(), 456_000.0);

        assert_eq!(original.items().len(), 3);
        assert_close(original.compute_total(), 459_000.0);
        assert_eq!(original.discount().map(|d| d.percentage), Some(10.0));
        assert_eq!(original.payment_method(), "Bank transfer");
    }

    #[test]
    fn mutating_original_leaves_duplicate_untouched() {
        let mut original = sample_order();
        let copy = original.duplicate();

        original.add_item(LineItem::new("Monitor", 120_000.0, 1));
        original.set_delivery_cost(0.0);
        original.clear_discount();

        assert_eq!(copy.items().len(), 3);
        assert_close(copy.compute_total(), 459_000.0);
    }

    #[test]
    fn display_summarizes_order() {
        let mut order = Order::new("ORD-7");
        order.add_item(LineItem::new("Cable", 1_000.0, 3));

        let text = order.to_string();
        assert!(text.starts_with("=== ORDER: ORD-7 ===\n"));
        assert!(text.contains("  - Cable (price: 1000.00, qty: 3, total: 3000.00)\n"));
        assert!(text.contains("Delivery: 0.00\n"));
        assert!(text.contains("Discount: none\n"));
        assert!(text.contains("Payment method: Cash\n"));
        assert!(text.contains("TOTAL: 3000.00\n"));
    }

    #[test]
    fn order_serializes_with_plain_id() {
        let json = serde_json::to_value(sample_order()).unwrap();
        assert_eq!(json["id"], "ORD-001");
        assert_eq!(json["items"].as_array().unwrap().len(), 3);
        assert_eq!(json["discount"]["percentage"], 10.0);
    }

    fn items_strategy() -> impl Strategy<Value = Vec<LineItem>> {
        prop::collection::vec(
            ("[A-Za-z]{1,8}", 0.0f64..1_000_000.0, 0u32..100)
                .prop_map(|(name, price, qty)| LineItem::new(name, price, qty)),
            0..8,
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: total == (S + D) * (1 - P/100), or S + D without discount.
        #[test]
        fn total_matches_formula(
            items in items_strategy(),
            delivery in 0.0f64..100_000.0,
            percentage in prop::option::of(0.0f64..=100.0),
        ) {
            let mut order = Order::new("ORD-P");
            for item in items.iter().cloned() {
                order.add_item(item);
            }
            order.set_delivery_cost(delivery);
            if let Some(p) = percentage {
                order.set_discount(Discount::new("P", p));
            }

            let s: f64 = items.iter().map(|i| i.unit_price * f64::from(i.quantity)).sum();
            let gross = s + delivery;
            let expected = match percentage {
                Some(p) => gross * (1.0 - p / 100.0),
                None => gross,
            };

            prop_assert!((order.compute_total() - expected).abs() <= 1e-6 * expected.max(1.0));
        }

        /// Property: removing every item from the duplicate never changes the original.
        #[test]
        fn duplicate_is_independent(items in items_strategy()) {
            let mut original = Order::new("ORD-P");
            for item in items {
                original.add_item(item);
            }
            let before = original.clone();

            let mut copy = original.duplicate();
            let names: Vec<String> = copy.items().iter().map(|i| i.name.clone()).collect();
            for name in names {
                copy.remove_items_named(&name);
            }

            prop_assert!(copy.items().is_empty());
            prop_assert_eq!(&original, &before);
            prop_assert_ne!(copy.id(), original.id());
        }
    }
}
