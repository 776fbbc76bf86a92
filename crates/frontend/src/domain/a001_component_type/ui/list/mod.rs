use super::add_dialog::AddComponentTypeDialog;
use crate::shared::components::element_table::{Column, ElementTable};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::range_panel::RangePanel;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_resource::{bind_list, create_list_state};
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_component_type::ComponentType;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ComponentTypeList() -> impl IntoView {
    let state = create_list_state::<ComponentType>();
    bind_list(state);

    let is_filter_expanded = RwSignal::new(true);
    let show_add = RwSignal::new(false);

    let columns = vec![
        Column::sortable("Name", "name", 200.0, |t: &ComponentType| {
            view! { <span class="table__strong">{t.name.clone()}</span> }.into_any()
        }),
        Column::plain("Comments", 300.0, |t: &ComponentType| t.comments.clone().into_any()),
    ];

    let on_saved = Callback::new(move |_: ()| {
        show_add.set(false);
        state.update(|s| s.request_reload());
    });

    view! {
        <PageFrame page_id="a001_component_type--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Component types"</h1>
                    <Badge variant="primary">
                        {move || state.with(|s| s.window.count).to_string()}
                    </Badge>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=Signal::derive(move || state.with(|s| s.active_filters_count()))
                    pagination_controls=move || view! {
                        <RangePanel
                            window=Signal::derive(move || state.with(|s| s.window))
                            on_back=Callback::new(move |_| state.update(|s| s.back()))
                            on_forward=Callback::new(move |_| state.update(|s| s.forward()))
                            on_range_change=Callback::new(move |range| state.update(|s| s.set_range(range)))
                        />
                    }
                    actions=move || view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| state.update(|s| s.request_reload())
                        >
                            {icon("refresh")}
                            " Refresh"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| show_add.set(true)
                        >
                            {icon("plus")}
                            " Add"
                        </Button>
                    }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Name contains:"</Label>
                                <SearchInput
                                    value=Signal::derive(move || state.with(|s| s.name_substring.clone()))
                                    on_change=Callback::new(move |v: String| state.update(|s| s.set_name_substring(&v)))
                                    placeholder="Component type name"
                                />
                            </Flex>
                        </Flex>
                    }
                />

                {move || state.with(|s| s.error()).map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <ElementTable
                    columns=columns
                    items=Signal::derive(move || state.with(|s| s.items.clone()))
                    loading=Signal::derive(move || state.with(|s| s.is_loading()))
                    order_by=Signal::derive(move || state.with(|s| s.order_by.clone()))
                    order_direction=Signal::derive(move || state.with(|s| s.order_direction))
                    on_sort=Callback::new(move |key: String| state.update(|s| s.toggle_sort(&key)))
                />
            </div>

            <Show when=move || show_add.get()>
                <AddComponentTypeDialog
                    on_saved=on_saved
                    on_cancel=Callback::new(move |_| show_add.set(false))
                />
            </Show>
        </PageFrame>
    }
}
