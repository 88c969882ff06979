use crate::domain::a001_customer::api;
use crate::shared::api_utils::ApiClient;
use crate::shared::request_scope::RequestScope;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto};
use contracts::shared::validation::ValidationError;
use leptos::prelude::*;

/// ViewModel for the customer form
#[derive(Clone, Copy)]
pub struct CustomerDetailsViewModel {
    pub form: RwSignal<CustomerDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    scope: StoredValue<RequestScope>,
}

impl CustomerDetailsViewModel {
    pub fn new(initial: Option<Customer>) -> Self {
        let dto = initial.as_ref().map(CustomerDto::from).unwrap_or_default();
        Self {
            form: RwSignal::new(dto),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            scope: StoredValue::new(RequestScope::for_component()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Issues POST/PUT unless a required field is empty.
    pub fn save_command(&self, api_client: ApiClient, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Some(field) = current.missing_required().first().copied() {
            self.error.set(Some(ValidationError::Required(field).to_string()));
            return;
        }

        let Some(scope) = self.scope.try_get_value() else {
            return;
        };
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        scope.run(
            async move { api::save_customer(&api_client, &current).await },
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
            let vm = CustomerDetailsViewModel::new(None);
            vm.form.update(|f| f.name = "山田商事".into());

            vm.save_command(api_client, Callback::new(|_| panic!("saved without a customer code")));

            assert!(!vm.saving.get_untracked());
            assert_eq!(vm.error.get_untracked().as_deref(), Some("顧客コードは必須です"));
        });
    }
}
