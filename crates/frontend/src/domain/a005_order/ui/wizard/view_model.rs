use crate::domain::a005_order::api;
use crate::shared::api_utils::ApiClient;
use crate::shared::date_utils::today;
use crate::shared::request_scope::RequestScope;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a003_item::aggregate::Item;
use contracts::domain::a005_order::aggregate::{DraftLine, Order, OrderDraft, OrderStep};
use contracts::domain::common::{opt_str, EntityId};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct OrderWizardViewModel {
    pub draft: RwSignal<OrderDraft>,
    pub step: RwSignal<OrderStep>,
    pub customers: RwSignal<Vec<Customer>>,
    pub items: RwSignal<Vec<Item>>,
    pub options_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    scope: StoredValue<RequestScope>,
}

impl OrderWizardViewModel {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(OrderDraft::new()),
            step: RwSignal::new(OrderStep::Customer),
            customers: RwSignal::new(Vec::new()),
            items: RwSignal::new(Vec::new()),
            options_loading: RwSignal::new(false),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            scope: StoredValue::new(RequestScope::for_component()),
        }
    }

    pub fn load_options(&self, api_client: ApiClient) {
        let customers = self.customers;
        let items = self.items;
        let loading = self.options_loading;
        let error = self.error;
        let Some(scope) = self.scope.try_get_value() else {
            return;
        };
        loading.set(true);
        scope.spawn(
            async move { api::fetch_order_options(&api_client).await },
            move |result| {
                match result {
                    Ok((c, i)) => {
                        customers.set(c);
                        items.set(i);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            },
        );
    }

    /// Selecting a customer also pre-fills an empty shipping address.
    pub fn select_customer(&self, raw_id: &str) {
        let id = raw_id.parse::<EntityId>().ok();
        let customer = id.and_then(|id| {
            self.customers
                .with_untracked(|list| list.iter().find(|c| c.id == id).cloned())
        });
        self.draft.update(|d| apply_customer(d, customer.as_ref()));
    }

    pub fn select_item(&self, index: usize, raw_id: &str) {
        let id = raw_id.parse::<EntityId>().ok();
        let item = id.and_then(|id| {
            self.items
                .with_untracked(|list| list.iter().find(|i| i.id == id).cloned())
        });
        self.draft.update(|d| {
            if let Some(line) = d.lines.get_mut(index) {
                apply_item(line, item.as_ref());
            }
        });
    }

    pub fn set_quantity(&self, index: usize, quantity: String) {
        self.draft.update(|d| {
            if let Some(line) = d.lines.get_mut(index) {
                line.quantity = quantity;
            }
        });
    }

    pub fn add_line(&self) {
        self.draft.update(|d| {
            d.lines.push(DraftLine {
                quantity: "1".into(),
                ..Default::default()
            })
        });
    }

    /// The last remaining line is kept.
    pub fn remove_line(&self, index: usize) {
        self.draft.update(|d| {
            if d.lines.len() > 1 && index < d.lines.len() {
                d.lines.remove(index);
            }
        });
    }

    pub fn next(&self) {
        let step = self.step.get_untracked();
        match self.draft.with_untracked(|d| d.validate_step(step)) {
            Ok(()) => {
                self.error.set(None);
                if let Some(next) = step.next() {
                    self.step.set(next);
                }
            }
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }

    pub fn prev(&self) {
        if let Some(prev) = self.step.get_untracked().prev() {
            self.error.set(None);
            self.step.set(prev);
        }
    }

    pub fn submit(&self, api_client: ApiClient, on_created: Callback<Order>) {
        let payload = match self.draft.with_untracked(|d| d.to_payload(today())) {
            Ok(payload) => payload,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let Some(scope) = self.scope.try_get_value() else {
            return;
        };
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        scope.run(
            async move { api::create_order(&api_client, &payload).await },
            move |result| {
                saving.set(false);
                match result {
                    Ok(order) => {
                        log::info!("order {} created", order.id);
                        on_created.run(order);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            },
        );
    }
}

impl Default for OrderWizardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_customer(draft: &mut OrderDraft, customer: Option<&Customer>) {
    draft.customer_id = customer.map(|c| c.id);
    draft.customer_name = customer.map(|c| c.name.clone()).unwrap_or_default();
    if draft.shipping_address.trim().is_empty() {
        if let Some(c) = customer {
            draft.shipping_address = opt_str(&c.address).to_string();
        }
    }
}

fn apply_item(line: &mut DraftLine, item: Option<&Item>) {
    line.item_id = item.map(|i| i.id);
    line.item_name = item.map(|i| i.name.clone()).unwrap_or_default();
    line.unit_price = item.map(|i| i.unit_price).unwrap_or(0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::mock_data;

    #[test]
    fn test_customer_prefills_blank_address_only() {
        let customers = mock_data::customers();
        let mut draft = OrderDraft::new();
        apply_customer(&mut draft, Some(&customers[0]));
        assert_eq!(draft.customer_id, Some(customers[0].id));
        assert_eq!(draft.shipping_address, opt_str(&customers[0].address));

        draft.shipping_address = "東京都港区1-1".into();
        apply_customer(&mut draft, Some(&customers[1]));
        assert_eq!(draft.shipping_address, "東京都港区1-1");

        apply_customer(&mut draft, None);
        assert_eq!(draft.customer_id, None);
        assert!(draft.customer_name.is_empty());
    }

    #[test]
    fn test_item_selection_copies_price() {
        let items = mock_data::items();
        let mut line = DraftLine {
            quantity: "3".into(),
            ..Default::default()
        };
        apply_item(&mut line, Some(&items[2]));
        assert_eq!(line.item_id, Some(items[2].id));
        assert_eq!(line.subtotal(), items[2].unit_price * 3.0);

        apply_item(&mut line, None);
        assert_eq!(line.subtotal(), 0.0);
    }
}
