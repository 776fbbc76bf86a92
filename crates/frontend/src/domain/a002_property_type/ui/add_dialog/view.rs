use super::view_model::AddPropertyTypeViewModel;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_component_type::ComponentTypeRevisions;
use leptos::prelude::*;

#[component]
pub fn AddPropertyTypeDialog(
    /// Component types offered as allowed types
    #[prop(into)]
    types: Signal<Vec<ComponentTypeRevisions>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = AddPropertyTypeViewModel::new();
    let allowed_types_error = vm.field_error("allowed_types");

    view! {
        <Modal title="Add property type".to_string() on_close=on_cancel>
            <div class="details-form">
                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Input
                    id="property-type-name"
                    label="Name"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v: String| vm.edit(|f| f.name = v))
                    error=vm.field_error("name")
                />
                <Input
                    id="property-type-units"
                    label="Units"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.units.clone()))
                    on_input=Callback::new(move |v: String| vm.edit(|f| f.units = v))
                    error=vm.field_error("units")
                    placeholder="e.g. dB"
                />
                <Input
                    id="property-type-regex"
                    label="Allowed regex"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.allowed_regex.clone()))
                    on_input=Callback::new(move |v: String| vm.edit(|f| f.allowed_regex = v))
                    error=vm.field_error("allowed_regex")
                    placeholder="e.g. ^[0-9.]+$"
                />
                <Input
                    id="property-type-n-values"
                    label="Number of values"
                    input_type="number"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.n_values.clone()))
                    on_input=Callback::new(move |v: String| vm.edit(|f| f.n_values = v))
                    error=vm.field_error("n_values")
                />

                <div class="form__group">
                    <label class="form__label">
                        "Allowed component types"
                        <span class="form__required">" *"</span>
                    </label>
                    <div class="form__checkbox-list">
                        <For
                            each=move || types.get()
                            key=|t| t.name.clone()
                            children=move |t| {
                                let name = StoredValue::new(t.name.clone());
                                view! {
                                    <label class="form__checkbox">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || name.with_value(|n| vm.is_type_allowed(n))
                                            on:change=move |_| {
                                                name.with_value(|n| vm.edit(|f| f.toggle_allowed_type(n)))
                                            }
                                        />
                                        {t.name}
                                    </label>
                                }
                            }
                        />
                        <Show when=move || types.with(|t| t.is_empty())>
                            <span class="form__hint">"No component types loaded"</span>
                        </Show>
                    </div>
                    {move || allowed_types_error.get().map(|e| view! { <div class="form__error">{e}</div> })}
                </div>

                <Textarea
                    id="property-type-comments"
                    label="Comments"
                    value=Signal::derive(move || vm.form.with(|f| f.comments.clone()))
                    on_input=Callback::new(move |v: String| vm.edit(|f| f.comments = v))
                />
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || vm.saving.get()
                    on:click=move |_| vm.save_command(on_saved)
                >
                    {icon("save")}
                    {move || if vm.saving.get() { " Saving..." } else { " Save" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </Modal>
    }
}
