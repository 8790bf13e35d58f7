//! Order List Component
//!
//! Order table with a detail overlay. Staff roles can switch one row at a
//! time into edit mode and change its status; the cached list is patched
//! only after the backend accepted the change.

use leptos::prelude::*;
use leptos::task::spawn_local;

use rms_domain::{ApiResult, patch_status};

use crate::api;
use crate::components::{ErrorBanner, OrderDetailModal, OrderStatusBadge};
use crate::context::use_session;
use crate::lifecycle::MountGuard;
use crate::models::{Order, OrderStatus, Role};

/// How a row renders its status cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowMode {
    /// Status badge
    View,
    /// Status dropdown
    Edit,
}

/// Whether the "Edit Status" control is offered at all
fn can_edit(role: Option<Role>) -> bool {
    role.is_some_and(|r| r.can_edit_orders())
}

/// A row is in edit mode only if it is the one being edited and the
/// resolved role may edit. An unresolved role never edits.
fn row_mode(editing: Option<u32>, order_id: u32, role: Option<Role>) -> RowMode {
    if editing == Some(order_id) && can_edit(role) {
        RowMode::Edit
    } else {
        RowMode::View
    }
}

/// What the list area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListBody {
    /// "No orders found." and no table
    Empty,
    /// Table with this many rows
    Table(usize),
}

fn list_body(orders: &[Order]) -> ListBody {
    match orders.len() {
        0 => ListBody::Empty,
        n => ListBody::Table(n),
    }
}

/// Apply a finished list fetch. A successful reload replaces the list and
/// clears an earlier error; a failed one keeps the previous list.
fn apply_list_result(orders: &mut Vec<Order>, error: &mut Option<String>, result: ApiResult<Vec<Order>>) {
    match result {
        Ok(list) => {
            *orders = list;
            *error = None;
        }
        Err(e) => *error = Some(e.to_string()),
    }
}

/// Apply a finished status update. Only success touches the list and leaves
/// edit mode; on failure nothing changes and the message is returned.
fn apply_status_result(
    orders: &mut [Order],
    editing: &mut Option<u32>,
    order_id: u32,
    status: OrderStatus,
    result: ApiResult<()>,
) -> Result<(), String> {
    match result {
        Ok(()) => {
            patch_status(orders, order_id, status);
            if *editing == Some(order_id) {
                *editing = None;
            }
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

/// Full order list view
#[component]
pub fn OrderList(#[prop(into)] title: String) -> impl IntoView {
    let session = use_session();
    let guard = MountGuard::new();

    let (orders, set_orders) = signal(Vec::<Order>::new());
    // Fetch failure of the list itself; a later successful reload clears it
    let (load_error, set_load_error) = signal(None::<String>);
    // Role and status update failures
    let (error, set_error) = signal(None::<String>);
    let (role, set_role) = signal(None::<Role>);
    let (editing_order_id, set_editing_order_id) = signal(None::<u32>);
    let (updating_order_id, set_updating_order_id) = signal(None::<u32>);
    let (selected_order_id, set_selected_order_id) = signal(None::<u32>);
    // Bumped after a failed update so the dropdown re-renders on its placeholder
    let (failed_updates, set_failed_updates) = signal(0u32);

    // List orders and resolve the role independently; either may land first.
    // Edit controls stay hidden until the role is known.
    {
        let guard = guard.clone();
        Effect::new(move |_| {
            let token = session.token.get();
            let guard = guard.clone();
            spawn_local(async move {
                let result = api::list_orders(token.as_deref()).await;
                if !guard.check("orders") {
                    return;
                }
                // Ignore answers for a token that was replaced meanwhile
                if session.token.get_untracked() != token {
                    log::debug!("[ORDERS] Dropping orders for a replaced session");
                    return;
                }
                if let Ok(list) = &result {
                    log::debug!("[ORDERS] Loaded {} orders", list.len());
                }
                let mut list = orders.get_untracked();
                let mut message = load_error.get_untracked();
                apply_list_result(&mut list, &mut message, result);
                set_orders.set(list);
                set_load_error.set(message);
            });
        });
    }
    {
        let guard = guard.clone();
        Effect::new(move |_| {
            let token = session.token.get();
            let guard = guard.clone();
            spawn_local(async move {
                let result = api::fetch_profile(token.as_deref()).await;
                if !guard.check("role") || session.token.get_untracked() != token {
                    return;
                }
                match result {
                    Ok(profile) => set_role.set(Some(profile.role())),
                    Err(e) => {
                        log::error!("[ORDERS] Error fetching user role: {}", e);
                        set_role.set(None);
                        set_error.set(Some(e.to_string()));
                    }
                }
            });
        });
    }

    let change_status = Callback::new(move |(order_id, status): (u32, OrderStatus)| {
        if !can_edit(role.get_untracked()) || updating_order_id.get_untracked().is_some() {
            return;
        }
        set_updating_order_id.set(Some(order_id));
        let token = session.token_value();
        let guard = guard.clone();
        spawn_local(async move {
            let result = api::update_order_status(token.as_deref(), order_id, status).await;
            if !guard.check("status update") {
                return;
            }
            let mut list = orders.get_untracked();
            let mut editing = editing_order_id.get_untracked();
            match apply_status_result(&mut list, &mut editing, order_id, status, result) {
                Ok(()) => {
                    log::debug!("[ORDERS] Order #{} -> {}", order_id, status.as_str());
                    set_orders.set(list);
                    set_editing_order_id.set(editing);
                }
                // Row stays in edit mode so the user can retry
                Err(message) => {
                    set_error.set(Some(message));
                    set_failed_updates.update(|n| *n += 1);
                }
            }
            set_updating_order_id.set(None);
        });
    });

    let show_details = Callback::new(move |order_id: u32| set_selected_order_id.set(Some(order_id)));
    let close_details = Callback::new(move |_: ()| set_selected_order_id.set(None));

    // Overlay reads from the cached list, no extra fetch
    let selected_order = Memo::new(move |_| {
        let id = selected_order_id.get()?;
        orders.with(|list| list.iter().find(|o| o.id == id).cloned())
    });
    let overlay_updating = Signal::derive(move || updating_order_id.get().is_some());

    view! {
        <div class="order-list">
            <h2 class="mb-4">{title}</h2>

            <ErrorBanner error=load_error />
            <ErrorBanner error=error set_error=set_error />

            <Show
                when=move || orders.with(|list| list_body(list) != ListBody::Empty)
                fallback=|| view! { <p>"No orders found."</p> }
            >
                <table class="table table-striped">
                    <thead>
                        <tr>
                            <th>"Order ID"</th>
                            <th>"Date"</th>
                            <th>"Customer Name"</th>
                            <th>"Amount"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || orders.get()
                            key=|order| (order.id, order.status)
                            children=move |order| view! {
                                <OrderRow
                                    order=order
                                    role=role
                                    editing_order_id=editing_order_id
                                    set_editing_order_id=set_editing_order_id
                                    updating_order_id=updating_order_id
                                    failed_updates=failed_updates
                                    on_change=change_status
                                    on_view=show_details
                                />
                            }
                        />
                    </tbody>
                </table>
            </Show>

            <OrderDetailModal order=selected_order updating=overlay_updating on_close=close_details />
        </div>
    }
}

/// One table row
#[component]
fn OrderRow(
    order: Order,
    role: ReadSignal<Option<Role>>,
    editing_order_id: ReadSignal<Option<u32>>,
    set_editing_order_id: WriteSignal<Option<u32>>,
    updating_order_id: ReadSignal<Option<u32>>,
    failed_updates: ReadSignal<u32>,
    on_change: Callback<(u32, OrderStatus)>,
    on_view: Callback<u32>,
) -> impl IntoView {
    let id = order.id;
    let status = order.status;
    let mode = move || row_mode(editing_order_id.get(), id, role.get());
    let is_updating = move || updating_order_id.get() == Some(id);

    view! {
        <tr>
            <td>"#" {id}</td>
            <td>{order.display_date()}</td>
            <td>{order.customer().to_string()}</td>
            <td>{order.total.to_string()}</td>
            <td>
                {move || {
                    failed_updates.track();
                    match mode() {
                        RowMode::Edit => view! {
                            <span class="status-edit d-inline-flex gap-1">
                                <select
                                    class="form-select form-select-sm"
                                    prop:disabled=is_updating
                                    on:change=move |ev| {
                                        let next = OrderStatus::from_str(&event_target_value(&ev));
                                        if next != OrderStatus::Unknown {
                                            on_change.run((id, next));
                                        }
                                    }
                                >
                                    <option value="" selected=true disabled=true>{status.as_str()}</option>
                                    {OrderStatus::SETTABLE
                                        .iter()
                                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                                        .collect_view()}
                                </select>
                                <button
                                    class="btn btn-sm btn-link"
                                    prop:disabled=is_updating
                                    on:click=move |_| set_editing_order_id.set(None)
                                >
                                    "Cancel"
                                </button>
                            </span>
                        }.into_any(),
                        RowMode::View => view! { <OrderStatusBadge status=status /> }.into_any(),
                    }
                }}
                <Show when=is_updating>
                    <small class="text-muted ms-2">"Updating status..."</small>
                </Show>
            </td>
            <td>
                <button
                    class="btn btn-sm btn-link"
                    title="View details"
                    on:click=move |_| on_view.run(id)
                >
                    "👁"
                </button>
                <Show when=move || can_edit(role.get())>
                    <button
                        class="btn btn-sm btn-link"
                        on:click=move |_| set_editing_order_id.set(Some(id))
                    >
                        "Edit Status"
                    </button>
                </Show>
            </td>
        </tr>
    }
}
