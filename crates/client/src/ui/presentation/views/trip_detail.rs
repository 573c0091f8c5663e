//! Trip detail page: route summary, members, join flow, and live chat.

use dioxus::prelude::*;

use crate::infrastructure::spawn_task;
use crate::presentation::components::trips::ChatPanel;
use crate::presentation::services::use_services;
use crate::presentation::state::{use_auth_state, use_toasts};
use gotogether_domain::{MemberStatus, TripDetail, TripMember};
use gotogether_shared::TripJoinRequest;

#[component]
pub fn TripDetailView(id: String) -> Element {
    let services = use_services();
    let mut auth = use_auth_state();
    let mut toasts = use_toasts();

    let mut detail = use_signal(|| Option::<TripDetail>::None);
    let mut loading = use_signal(|| true);

    let load_id = id.clone();
    use_future(move || {
        let services = services.clone();
        let trip_id = load_id.clone();
        async move {
            match services.trips.get_trip(&trip_id).await {
                Ok(fetched) => detail.set(Some(fetched)),
                Err(e) => {
                    if e.is_unauthorized() {
                        services.auth.logout();
                        auth.sign_out();
                    }
                    toasts.error(e.user_message());
                }
            }
            loading.set(false);
        }
    });

    rsx! {
        div {
            class: "max-w-lg mx-auto p-6 space-y-4",
            if loading() {
                p { class: "text-gray-500", "Loading trip…" }
            } else if let Some(current) = detail.read().clone() {
                TripSummary { detail: current.clone() }
                MembersSection { detail: current, state: detail }
                ChatPanel { trip_id: id.clone() }
            } else {
                p { class: "text-gray-500", "Trip not found." }
            }
        }
    }
}

#[component]
fn TripSummary(detail: TripDetail) -> Element {
    let trip = &detail.trip;
    let route = format!(
        "{} → {}",
        trip.origin_address.as_deref().unwrap_or("Unknown"),
        trip.dest_address.as_deref().unwrap_or("Unknown")
    );
    let when = trip.departure_time.format("%A %d %B, %H:%M").to_string();

    rsx! {
        div {
            class: "border border-gray-200 rounded-lg bg-white p-4",
            h1 { class: "text-xl font-bold mb-1", "{route}" }
            p { class: "text-sm text-gray-600", "{when}" }
            div {
                class: "flex items-center justify-between text-sm text-gray-600 mt-2",
                span { "Driver: {detail.driver.display_name()}" }
                span { "{trip.vehicle_type.label()} · {trip.available_seats} seats · ₹{trip.fare_per_person}" }
            }
            if let Some(description) = trip.description.clone() {
                p { class: "text-sm text-gray-700 mt-2", "{description}" }
            }
        }
    }
}

#[component]
fn MembersSection(detail: TripDetail, state: Signal<Option<TripDetail>>) -> Element {
    let auth = use_auth_state();
    let viewer_id = auth.user_id();
    let is_driver = viewer_id == Some(detail.trip.driver_id);
    let already_member = viewer_id
        .map(|me| detail.members.iter().any(|m| m.user_id == me))
        .unwrap_or(false);

    rsx! {
        div {
            class: "border border-gray-200 rounded-lg bg-white p-4",
            h2 { class: "text-lg font-semibold mb-2", "Riders" }

            if detail.members.is_empty() {
                p { class: "text-sm text-gray-500", "No join requests yet." }
            } else {
                ul {
                    class: "space-y-2",
                    for member in detail.members.clone() {
                        MemberRow {
                            key: "{member.id}",
                            member: member,
                            trip_id: detail.trip.id.to_string(),
                            is_driver,
                            state,
                        }
                    }
                }
            }

            if !is_driver && !already_member {
                JoinForm { trip_id: detail.trip.id.to_string(), state }
            }
        }
    }
}

#[component]
fn MemberRow(
    member: TripMember,
    trip_id: String,
    is_driver: bool,
    state: Signal<Option<TripDetail>>,
) -> Element {
    let services = use_services();
    let mut toasts = use_toasts();
    let mut busy = use_signal(|| false);

    let status_class = match member.status {
        MemberStatus::Approved => "text-sm text-green-600",
        MemberStatus::Pending => "text-sm text-gray-500",
        MemberStatus::Rejected => "text-sm text-red-600",
        MemberStatus::Completed => "text-sm text-gray-500",
    };
    let status_label = format!("{:?}", member.status).to_lowercase();

    let member_id = member.id.to_string();
    let on_approve = move |_| {
        if busy() {
            return;
        }
        let services = services.clone();
        let trip_id = trip_id.clone();
        let member_id = member_id.clone();
        let mut state = state;
        spawn_task(async move {
            busy.set(true);
            match services.trips.approve_member(&trip_id, &member_id).await {
                Ok(updated) => {
                    toasts.success(format!("{} approved", updated.user.display_name()));
                    if let Some(detail) = state.write().as_mut() {
                        if let Some(row) = detail.members.iter_mut().find(|m| m.id == updated.id) {
                            *row = updated;
                        }
                    }
                }
                Err(e) => {
                    toasts.error(e.user_message());
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        li {
            class: "flex items-center justify-between",
            div {
                span { class: "text-sm font-semibold", "{member.user.display_name()}" }
                span { class: "text-sm text-gray-500", " · {member.seats_requested} seats" }
                if let Some(note) = member.message.clone() {
                    p { class: "text-sm text-gray-500", "{note}" }
                }
            }
            div {
                class: "flex items-center gap-2",
                span { class: "{status_class}", "{status_label}" }
                if is_driver && member.status == MemberStatus::Pending {
                    button {
                        class: "bg-green-600 text-white rounded px-2 text-sm disabled:opacity-50",
                        disabled: busy(),
                        onclick: on_approve,
                        "Approve"
                    }
                }
            }
        }
    }
}

#[component]
fn JoinForm(trip_id: String, state: Signal<Option<TripDetail>>) -> Element {
    let services = use_services();
    let mut toasts = use_toasts();

    let seats = use_signal(|| "1".to_string());
    let note = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let on_join = move |evt: Event<FormData>| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let seats_requested: u8 = match seats().parse() {
            Ok(n) => n,
            Err(_) => {
                toasts.error("Seats must be a number between 1 and 4");
                return;
            }
        };
        let note_value = note().trim().to_string();
        let request = TripJoinRequest {
            seats_requested,
            message: (!note_value.is_empty()).then_some(note_value),
        };

        let services = services.clone();
        let trip_id = trip_id.clone();
        let mut state = state;
        spawn_task(async move {
            busy.set(true);
            match services.trips.join_trip(&trip_id, &request).await {
                Ok(member) => {
                    toasts.success("Request sent; waiting for the driver");
                    if let Some(detail) = state.write().as_mut() {
                        detail.members.push(member);
                    }
                }
                Err(e) => {
                    toasts.error(e.user_message());
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        form {
            class: "mt-3 flex items-center gap-2",
            onsubmit: on_join,
            input {
                class: "border border-gray-300 rounded p-2 text-sm w-20",
                r#type: "number",
                min: "1",
                max: "4",
                value: "{seats}",
                oninput: {
                    let mut seats = seats;
                    move |evt: Event<FormData>| seats.set(evt.value())
                },
            }
            input {
                class: "w-full border border-gray-300 rounded p-2 text-sm",
                r#type: "text",
                placeholder: "Note to the driver (optional)",
                value: "{note}",
                oninput: {
                    let mut note = note;
                    move |evt: Event<FormData>| note.set(evt.value())
                },
            }
            button {
                class: "bg-blue-600 hover:bg-blue-700 text-white rounded px-4 p-2 text-sm disabled:opacity-50",
                r#type: "submit",
                disabled: busy(),
                "Join"
            }
        }
    }
}
