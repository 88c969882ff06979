use crate::domain::a002_supplier::api;
use crate::shared::api_utils::ApiClient;
use crate::shared::request_scope::RequestScope;
use contracts::domain::a002_supplier::aggregate::{Supplier, SupplierDto};
use contracts::shared::validation::ValidationError;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SupplierDetailsViewModel {
    pub form: RwSignal<SupplierDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    scope: StoredValue<RequestScope>,
}

impl SupplierDetailsViewModel {
    pub fn new(initial: Option<Supplier>) -> Self {
        Self {
            form: RwSignal::new(initial.as_ref().map(SupplierDto::from).unwrap_or_default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            scope: StoredValue::new(RequestScope::for_component()),
        }
    }

    pub fn title(&self) -> &'static str {
        self.form.with(|f| f.title())
    }

    pub fn save_command(&self, api_client: ApiClient, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Some(field) = current.missing_required().first().copied() {
            self.error.set(Some(ValidationError::Required(field).to_string()));
            return;
        }

        let payload = current.to_payload();
        let Some(scope) = self.scope.try_get_value() else {
            return;
        };
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        scope.run(
            async move {
                match current.id {
                    Some(id) => api::update_supplier(&api_client, id, &payload).await,
                    None => api::create_supplier(&api_client, &payload).await,
                }
            },
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
    use crate::shared::config::AppConfig;
    use crate::system::auth::context::SessionContext;

    #[test]
    fn test_missing_required_field_issues_no_request() {
        let owner = Owner::new();
        owner.with(|| {
            let api_client = ApiClient::new(&AppConfig::default(), SessionContext::new(30));
            let vm = SupplierDetailsViewModel::new(None);
            vm.form.update(|f| f.code = "S-001".into());

            vm.save_command(api_client, Callback::new(|_| panic!("saved without a supplier name")));

            assert!(!vm.saving.get_untracked());
            assert_eq!(vm.error.get_untracked().as_deref(), Some("取引先名は必須です"));
        });
    }
}
