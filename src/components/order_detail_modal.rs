//! Order Detail Modal Component
//!
//! Overlay showing one cached order's line items.

use leptos::prelude::*;

use crate::components::OrderStatusBadge;
use crate::models::Order;

#[component]
pub fn OrderDetailModal(
    #[prop(into)] order: Signal<Option<Order>>,
    #[prop(into)] updating: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || order.with(Option::is_some)>
            <div class="modal-backdrop fade show"></div>
            <div
                class="modal d-block"
                tabindex="-1"
                on:click=move |_| on_close.run(())
            >
                <div class="modal-dialog modal-lg" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-content">
                        {move || order.get().map(|order| view! {
                            <div class="modal-header">
                                <h5 class="modal-title">"Order #" {order.id}</h5>
                                <button
                                    type="button"
                                    class="btn-close"
                                    aria-label="Close"
                                    on:click=move |_| on_close.run(())
                                ></button>
                            </div>
                            <div class="modal-body">
                                <p>
                                    <strong>"Customer: "</strong>
                                    {order.customer().to_string()}
                                </p>
                                <p>
                                    <strong>"Date: "</strong>
                                    {order.display_date()}
                                </p>
                                <p>
                                    <strong>"Status: "</strong>
                                    <OrderStatusBadge status=order.status />
                                    <Show when=move || updating.get()>
                                        <small class="text-muted ms-2">"Updating status..."</small>
                                    </Show>
                                </p>
                                <table class="table table-sm">
                                    <thead>
                                        <tr>
                                            <th>"Item"</th>
                                            <th>"Quantity"</th>
                                            <th>"Price"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {order.items.iter().map(|item| view! {
                                            <tr>
                                                <td>{item.menu_item.title.clone()}</td>
                                                <td>{item.quantity}</td>
                                                <td>{item.price.to_string()}</td>
                                            </tr>
                                        }).collect_view()}
                                    </tbody>
                                </table>
                                <p class="text-end fw-bold">"Total: " {order.total.to_string()}</p>
                            </div>
                            <div class="modal-footer">
                                <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                                    "Close"
                                </button>
                            </div>
                        })}
                    </div>
                </div>
            </div>
        </Show>
    }
}
