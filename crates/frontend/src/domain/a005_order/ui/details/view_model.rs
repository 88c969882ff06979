use crate::domain::a005_order::api;
use crate::shared::api_utils::ApiClient;
use crate::shared::request_scope::RequestScope;
use contracts::domain::a005_order::aggregate::Order;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    pub id: EntityId,
    pub order: RwSignal<Option<Order>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    scope: StoredValue<RequestScope>,
}

impl OrderDetailsViewModel {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            order: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            scope: StoredValue::new(RequestScope::for_component()),
        }
    }

    pub fn load(&self, api_client: ApiClient) {
        let id = self.id;
        let order = self.order;
        let loading = self.loading;
        let error = self.error;
        let Some(scope) = self.scope.try_get_value() else {
            return;
        };
        loading.set(true);
        error.set(None);
        scope.spawn(
            async move { api::fetch_order(&api_client, id).await },
            move |result| {
                match result {
                    Ok(o) => order.set(Some(o)),
                    Err(e) => {
                        log::warn!("order {} failed to load: {}", id, e);
                        order.set(None);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            },
        );
    }
}
