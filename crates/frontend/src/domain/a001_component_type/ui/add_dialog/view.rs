use super::view_model::AddComponentTypeViewModel;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use leptos::prelude::*;

#[component]
pub fn AddComponentTypeDialog(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = AddComponentTypeViewModel::new();

    view! {
        <Modal title="Add component type".to_string() on_close=on_cancel>
            <div class="details-form">
                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Input
                    id="component-type-name"
                    label="Name"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v: String| vm.edit(|f| f.name = v))
                    error=vm.field_error("name")
                    placeholder="e.g. LNA"
                />
                <Textarea
                    id="component-type-comments"
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
