use crate::domain::a003_item::api;
use crate::shared::api_utils::ApiClient;
use crate::shared::request_scope::RequestScope;
use contracts::domain::a003_item::aggregate::{Item, ItemDto, ItemPayload};
use contracts::shared::validation::ValidationError;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ItemDetailsViewModel {
    pub form: RwSignal<ItemDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    scope: StoredValue<RequestScope>,
}

impl ItemDetailsViewModel {
    pub fn new(initial: Option<Item>) -> Self {
        Self {
            form: RwSignal::new(initial.as_ref().map(ItemDto::from).unwrap_or_default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            scope: StoredValue::new(RequestScope::for_component()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Required fields first, then number parsing.
    fn validated_payload(dto: &ItemDto) -> Result<ItemPayload, ValidationError> {
        if let Some(field) = dto.missing_required().first().copied() {
            return Err(ValidationError::Required(field));
        }
        dto.to_payload()
    }

    pub fn save_command(&self, api_client: ApiClient, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        let payload = match Self::validated_payload(&current) {
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
            async move { api::save_item(&api_client, current.id, &payload).await },
            move |result| {
                saving.set(false);
                match result {
                    Ok(_) => on_saved.run(()),
                    Err(e) => error.set(Some(e.to_string())),
                }
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_checked_before_numbers() {
        let dto = ItemDto {
            unit_price: "abc".into(),
            ..ItemDto::default()
        };
        let err = ItemDetailsViewModel::validated_payload(&dto).unwrap_err();
        assert_eq!(err.to_string(), "部品コードは必須です");
    }

    #[test]
    fn test_valid_form_yields_payload() {
        let dto = ItemDto {
            code: "P-100".into(),
            name: "ワッシャー".into(),
            unit_price: "4.5".into(),
            min_stock: "100".into(),
            current_stock: "20".into(),
            ..ItemDto::default()
        };
        let payload = ItemDetailsViewModel::validated_payload(&dto).unwrap();
        assert_eq!(payload.unit, "個");
        assert_eq!(payload.current_stock, 20);
    }
}
