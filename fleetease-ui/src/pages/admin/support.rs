//! Support tickets opened with the platform team

use fleetease::access::AdminRoute;
use fleetease::models::{SenderType, TicketCategory, TicketPriority, TicketStatus};
use fleetease::panel::SupportPage;
use leptos::*;

use crate::components::{Badge, EmptyState, Loading, Modal, Protected};
use crate::format::format_date;
use crate::pages::form::{select, text_area, text_input, BUTTON_SECONDARY, INPUT};
use crate::state::{drive, use_auth, use_global};

fn status_color(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Open => "blue",
        TicketStatus::InProgress => "yellow",
        TicketStatus::WaitingCustomer => "orange",
        TicketStatus::Resolved => "green",
        TicketStatus::Closed => "gray",
    }
}

#[component]
pub fn Support() -> impl IntoView {
    view! {
        <Protected route=AdminRoute::Support>
            <SupportContent />
        </Protected>
    }
}

#[component]
fn SupportContent() -> impl IntoView {
    let global = use_global();
    let api = use_auth().operator.api();
    let page = create_rw_signal(SupportPage {
        loading: true,
        ..Default::default()
    });

    let load_api = api.clone();
    drive(page, move |p| {
        Box::pin(async move {
            p.load(&load_api, &global).await;
        })
    });

    let create_api = api.clone();
    let create = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let api = create_api.clone();
        drive(page, move |p| {
            Box::pin(async move {
                p.create(&api, &global).await;
            })
        });
    };

    let open_api = api.clone();
    let open = move |id: String| {
        let api = open_api.clone();
        drive(page, move |p| {
            Box::pin(async move {
                p.open(&api, &global, &id).await;
            })
        });
    };

    let reply = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        drive(page, move |p| {
            Box::pin(async move {
                p.send_reply(&api, &global).await;
            })
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Support"</h1>
                    <p class="text-gray-500 mt-1">"Questions and issues for the FleetEase team"</p>
                </div>
                <button
                    class="px-4 py-2 rounded-lg btn-theme font-medium"
                    on:click=move |_| page.update(|p| p.create_open = true)
                >
                    "+ New ticket"
                </button>
            </div>

            <Show when=move || !page.with(|p| p.loading) fallback=|| view! { <Loading /> }>
                <div class="grid grid-cols-1 lg:grid-cols-5 gap-6">
                    <div class="lg:col-span-2 space-y-2">
                        {
                            let open = open.clone();
                            move || {
                                let tickets = page.with(|p| p.tickets.clone());
                                if tickets.is_empty() {
                                    return view! { <EmptyState message="No tickets yet" /> }.into_view();
                                }
                                tickets.into_iter().map(|ticket| {
                                    let open = open.clone();
                                    let id = ticket.id.clone();
                                    let selected_id = ticket.id.clone();
                                    let selected = move || page.with(|p| {
                                        p.selected.as_ref().map(|s| s.id == selected_id).unwrap_or(false)
                                    });
                                    view! {
                                        <button
                                            class=move || if selected() {
                                                "w-full text-left bg-white rounded-xl shadow-sm p-4 ring-2 ring-blue-500"
                                            } else {
                                                "w-full text-left bg-white rounded-xl shadow-sm p-4 hover:bg-gray-50"
                                            }
                                            on:click=move |_| open(id.clone())
                                        >
                                            <div class="flex items-center justify-between">
                                                <span class="font-mono text-xs text-gray-500">{ticket.ticket_number.clone()}</span>
                                                <Badge label=ticket.status.label() color=status_color(ticket.status) />
                                            </div>
                                            <p class="font-medium mt-1">{ticket.subject.clone()}</p>
                                            <p class="text-xs text-gray-500 mt-1">
                                                {format!("{} · {} · {} messages",
                                                    ticket.category.label(),
                                                    ticket.priority.label(),
                                                    ticket.message_count())}
                                            </p>
                                        </button>
                                    }
                                }).collect_view()
                            }
                        }
                    </div>

                    <div class="lg:col-span-3">
                        {let reply = reply.clone(); move || match page.with(|p| p.selected.clone()) {
                            None => view! { <EmptyState message="Select a ticket to read the conversation" /> }.into_view(),
                            Some(ticket) => view! {
                                <div class="bg-white rounded-xl shadow-sm p-6 space-y-4">
                                    <div class="flex items-start justify-between">
                                        <div>
                                            <p class="font-mono text-xs text-gray-500">{ticket.ticket_number.clone()}</p>
                                            <h2 class="text-xl font-semibold">{ticket.subject.clone()}</h2>
                                        </div>
                                        <button class="text-gray-400 hover:text-gray-600" on:click=move |_| page.update(|p| p.close())>
                                            "✕"
                                        </button>
                                    </div>
                                    <div class="space-y-3 max-h-[50vh] overflow-y-auto">
                                        {ticket.messages.iter().map(|message| {
                                            let (align, bubble) = match message.sender_type {
                                                SenderType::Support => ("justify-start", "bg-gray-100"),
                                                _ => ("justify-end", "bg-blue-50"),
                                            };
                                            view! {
                                                <div class=format!("flex {}", align)>
                                                    <div class=format!("rounded-lg px-4 py-2 max-w-[80%] {}", bubble)>
                                                        <p class="text-xs text-gray-500">
                                                            {message.sender_name.clone().unwrap_or_default()}
                                                            " "
                                                            {message.created_at.map(format_date).unwrap_or_default()}
                                                        </p>
                                                        <p class="whitespace-pre-wrap">{message.message.clone()}</p>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                    {if ticket.accepts_replies() {
                                        view! {
                                            <form class="flex gap-2" on:submit=reply.clone()>
                                                <input
                                                    type="text"
                                                    placeholder="Write a reply"
                                                    class=INPUT
                                                    prop:value=move || page.with(|p| p.reply.clone())
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        page.update(|p| p.reply = value);
                                                    }
                                                />
                                                <button type="submit" class="px-4 py-2 rounded-lg btn-theme font-medium">"Send"</button>
                                            </form>
                                        }.into_view()
                                    } else {
                                        view! { <p class="text-sm text-gray-500">"This ticket is closed."</p> }.into_view()
                                    }}
                                </div>
                            }.into_view(),
                        }}
                    </div>
                </div>
            </Show>

            <Modal
                title="New ticket"
                open=Signal::derive(move || page.with(|p| p.create_open))
                on_close=move |_| page.update(|p| p.create_open = false)
            >
                <form class="space-y-4" on:submit=create.clone()>
                    {text_input(page, "Subject", "text", |p| p.new_ticket.subject.clone(), |p, v| p.new_ticket.subject = v)}
                    <div class="grid grid-cols-2 gap-4">
                        {select(page, "Category", &TicketCategory::ALL, TicketCategory::label,
                            |p| p.new_ticket.category, |p, v| p.new_ticket.category = v)}
                        {select(page, "Priority", &TicketPriority::ALL, TicketPriority::label,
                            |p| p.new_ticket.priority, |p, v| p.new_ticket.priority = v)}
                    </div>
                    {text_area(page, "Message", |p| p.new_ticket.message.clone(), |p, v| p.new_ticket.message = v)}
                    <div class="flex justify-end space-x-2">
                        <button type="button" class=BUTTON_SECONDARY on:click=move |_| page.update(|p| p.create_open = false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="px-4 py-2 rounded-lg btn-theme font-medium">"Open ticket"</button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
