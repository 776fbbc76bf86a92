//! Generic table of list records
//!
//! ```ignore
//! let columns = vec![
//!     Column::sortable("Name", "name", 200.0, |c: &Component| c.name.clone().into_any()),
//!     Column::plain("Added", 140.0, |c: &Component| format_added(c).into_any()),
//! ];
//! view! {
//!     <ElementTable
//!         columns=columns
//!         items=Signal::derive(move || state.with(|s| s.items.clone()))
//!         loading=Signal::derive(move || state.with(|s| s.is_loading()))
//!         order_by=Signal::derive(move || state.with(|s| s.order_by.clone()))
//!         order_direction=Signal::derive(move || state.with(|s| s.order_direction))
//!         on_sort=Callback::new(move |key: String| state.update(|s| s.toggle_sort(&key)))
//!     />
//! }
//! ```

use super::table::SortableHeaderCell;
use contracts::shared::list::OrderDirection;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// Column descriptor: header label, optional sort key and cell renderer
pub struct Column<T> {
    pub label: &'static str,
    pub sort_key: Option<&'static str>,
    pub min_width: f64,
    render: CellRenderer<T>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            sort_key: self.sort_key,
            min_width: self.min_width,
            render: Arc::clone(&self.render),
        }
    }
}

impl<T> Column<T> {
    pub fn sortable(
        label: &'static str,
        sort_key: &'static str,
        min_width: f64,
        render: impl Fn(&T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            label,
            sort_key: Some(sort_key),
            min_width,
            render: Arc::new(render),
        }
    }

    pub fn plain(
        label: &'static str,
        min_width: f64,
        render: impl Fn(&T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            label,
            sort_key: None,
            min_width,
            render: Arc::new(render),
        }
    }

    pub fn render(&self, item: &T) -> AnyView {
        (self.render)(item)
    }
}

#[component]
pub fn ElementTable<T>(
    columns: Vec<Column<T>>,

    #[prop(into)]
    items: Signal<Vec<T>>,

    /// While true a loading row is shown above the previous records
    #[prop(into)]
    loading: Signal<bool>,

    #[prop(into)]
    order_by: Signal<String>,

    #[prop(into)]
    order_direction: Signal<OrderDirection>,

    on_sort: Callback<String>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let column_count = columns.len();
    let header_columns = columns.clone();
    let body_columns = StoredValue::new(columns);

    let header = header_columns
        .into_iter()
        .map(|column| match column.sort_key {
            Some(key) => view! {
                <SortableHeaderCell
                    label=column.label
                    sort_field=key
                    current_sort_field=order_by
                    order_direction=order_direction
                    on_sort=on_sort
                    min_width=column.min_width
                />
            }
            .into_any(),
            None => view! {
                <TableHeaderCell min_width=column.min_width>{column.label}</TableHeaderCell>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>{header}</TableRow>
                </TableHeader>
                <TableBody>
                    <Show when=move || loading.get()>
                        <TableRow>
                            <TableCell attr:colspan=column_count.to_string()>
                                <div class="table__loading">
                                    <Spinner />
                                    " Loading..."
                                </div>
                            </TableCell>
                        </TableRow>
                    </Show>
                    <Show when=move || !loading.get() && items.with(|i| i.is_empty())>
                        <TableRow>
                            <TableCell attr:colspan=column_count.to_string()>
                                <div class="table__empty">"No records"</div>
                            </TableCell>
                        </TableRow>
                    </Show>
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|item| {
                                let cells = body_columns.with_value(|columns| {
                                    columns
                                        .iter()
                                        .map(|column| {
                                            let cell = column.render(&item);
                                            view! {
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {cell}
                                                    </TableCellLayout>
                                                </TableCell>
                                            }
                                        })
                                        .collect_view()
                                });
                                view! { <TableRow>{cells}</TableRow> }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
