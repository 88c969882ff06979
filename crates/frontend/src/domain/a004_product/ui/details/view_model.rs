use crate::domain::a004_product::api;
use crate::shared::api_utils::ApiClient;
use crate::shared::request_scope::RequestScope;
use contracts::domain::a004_product::aggregate::{Product, ProductDto};
use contracts::shared::validation::ValidationError;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    scope: StoredValue<RequestScope>,
}

impl ProductDetailsViewModel {
    pub fn new(initial: Option<Product>) -> Self {
        Self {
            form: RwSignal::new(initial.as_ref().map(ProductDto::from).unwrap_or_default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            scope: StoredValue::new(RequestScope::for_component()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Preview source for the image field; blank hides the preview.
    pub fn image_preview(&self) -> Option<String> {
        self.form
            .with(|f| Some(f.image_url.trim().to_string()).filter(|s| !s.is_empty()))
    }

    pub fn save_command(&self, api_client: ApiClient, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Some(field) = current.missing_required().first().copied() {
            self.error.set(Some(ValidationError::Required(field).to_string()));
            return;
        }
        let payload = match current.to_payload() {
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
            async move {
                match current.id {
                    Some(id) => api::update_product(&api_client, id, &payload).await,
                    None => api::create_product(&api_client, &payload).await,
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
            let vm = ProductDetailsViewModel::new(None);
            vm.form.update(|f| f.name = "緑茶".into());

            vm.save_command(api_client, Callback::new(|_| panic!("saved without a product code")));

            assert!(!vm.saving.get_untracked());
            assert_eq!(vm.error.get_untracked().as_deref(), Some("商品コードは必須です"));
        });
    }

    #[test]
    fn test_unparsable_price_issues_no_request() {
        let owner = Owner::new();
        owner.with(|| {
            let api_client = ApiClient::new(&AppConfig::default(), SessionContext::new(30));
            let vm = ProductDetailsViewModel::new(None);
            vm.form.update(|f| {
                f.code = "P-001".into();
                f.name = "緑茶".into();
                f.price = "高い".into();
            });

            vm.save_command(api_client, Callback::new(|_| panic!("saved with a bad price")));

            assert!(!vm.saving.get_untracked());
            assert!(vm.error.get_untracked().is_some());
        });
    }
}
