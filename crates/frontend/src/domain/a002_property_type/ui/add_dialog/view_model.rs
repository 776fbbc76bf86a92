use super::model;
use contracts::domain::a002_property_type::NewPropertyType;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel of the "add property type" dialog
#[derive(Clone, Copy)]
pub struct AddPropertyTypeViewModel {
    pub form: RwSignal<NewPropertyType>,
    pub field_errors: RwSignal<FieldErrors>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    attempted: RwSignal<bool>,
}

impl AddPropertyTypeViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(NewPropertyType {
                n_values: "1".to_string(),
                ..NewPropertyType::default()
            }),
            field_errors: RwSignal::new(FieldErrors::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            attempted: RwSignal::new(false),
        }
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let field_errors = self.field_errors;
        Signal::derive(move || field_errors.with(|e| e.get(field).cloned()))
    }

    pub fn is_type_allowed(&self, type_name: &str) -> bool {
        self.form.with(|f| f.allowed_types.iter().any(|t| t == type_name))
    }

    /// Apply an edit; once a save was attempted the messages follow the input
    pub fn edit(&self, f: impl FnOnce(&mut NewPropertyType)) {
        self.form.update(f);
        if self.attempted.get_untracked() {
            let errors = self.form.with_untracked(|form| form.validate().err().unwrap_or_default());
            self.field_errors.set(errors);
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        self.attempted.set(true);
        let params = match self.form.with_untracked(|form| form.to_params()) {
            Ok(params) => params,
            Err(errors) => {
                self.field_errors.set(errors);
                return;
            }
        };
        self.field_errors.set(FieldErrors::new());
        self.error.set(None);
        self.saving.set(true);

        let error = self.error;
        let saving = self.saving;
        spawn_local(async move {
            let result = model::save_form(&params).await;
            saving.try_set(false);
            match result {
                Ok(()) => {
                    log::info!("property type '{}' saved", params.name);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("saving property type '{}' failed: {}", params.name, e);
                    error.try_set(Some(e));
                }
            }
        });
    }
}
