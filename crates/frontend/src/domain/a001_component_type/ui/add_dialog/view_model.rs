use super::model;
use contracts::domain::a001_component_type::NewComponentType;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel of the "add component type" dialog
#[derive(Clone, Copy)]
pub struct AddComponentTypeViewModel {
    pub form: RwSignal<NewComponentType>,
    pub field_errors: RwSignal<FieldErrors>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    attempted: RwSignal<bool>,
}

impl AddComponentTypeViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(NewComponentType::default()),
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

    /// Apply an edit; once a save was attempted the messages follow the input
    pub fn edit(&self, f: impl FnOnce(&mut NewComponentType)) {
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
                    log::info!("component type '{}' saved", params.name);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("saving component type '{}' failed: {}", params.name, e);
                    error.try_set(Some(e));
                }
            }
        });
    }
}
