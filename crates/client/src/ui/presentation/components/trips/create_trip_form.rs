//! Trip creation form
//!
//! Origin and destination come from [`LocationInput`] fields, so they are
//! either picked suggestions with real coordinates or unresolved raw
//! text. The draft is validated locally before the service posts it.

use chrono::NaiveDateTime;
use dioxus::prelude::*;

use crate::infrastructure::spawn_task;
use crate::presentation::components::common::FormField;
use crate::presentation::components::LocationInput;
use crate::presentation::services::use_services;
use crate::presentation::state::use_toasts;
use crate::ui::routes::Route;
use gotogether_domain::{Location, VehicleType};
use gotogether_shared::TripCreateRequest;

#[component]
pub fn CreateTripForm() -> Element {
    let services = use_services();
    let mut toasts = use_toasts();
    let navigator = use_navigator();

    let mut origin = use_signal(|| Option::<Location>::None);
    let mut destination = use_signal(|| Option::<Location>::None);
    let departure = use_signal(String::new);
    let seats = use_signal(|| "1".to_string());
    let fare = use_signal(String::new);
    let mut vehicle = use_signal(|| VehicleType::Car);
    let description = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if busy() {
            return;
        }

        let request = match build_request(
            origin(),
            destination(),
            &departure(),
            &seats(),
            &fare(),
            vehicle(),
            &description(),
        ) {
            Ok(request) => request,
            Err(message) => {
                toasts.error(message);
                return;
            }
        };

        let services = services.clone();
        spawn_task(async move {
            busy.set(true);
            match services.trips.create_trip(&request).await {
                Ok(trip) => {
                    toasts.success("Trip created");
                    navigator.push(Route::TripDetail {
                        id: trip.id.to_string(),
                    });
                }
                Err(e) => {
                    toasts.error(e.user_message());
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "max-w-md mx-auto p-6",
            h1 { class: "text-2xl font-bold mb-4", "Offer a trip" }

            form {
                onsubmit: on_submit,
                LocationInput {
                    label: "From",
                    placeholder: "Pickup point",
                    on_commit: move |location| origin.set(Some(location)),
                }
                LocationInput {
                    label: "To",
                    placeholder: "Destination",
                    on_commit: move |location| destination.set(Some(location)),
                }
                FormField {
                    label: "Departure",
                    value: departure,
                    input_type: "datetime-local",
                }
                FormField {
                    label: "Seats offered (1-8)",
                    value: seats,
                    input_type: "number",
                }
                FormField {
                    label: "Fare per person",
                    value: fare,
                    input_type: "number",
                    placeholder: "40",
                }
                label {
                    class: "block mb-3",
                    span { class: "block text-sm text-gray-600 mb-1", "Vehicle" }
                    select {
                        class: "w-full border border-gray-300 rounded p-2 text-sm",
                        onchange: move |evt| {
                            let picked = VehicleType::ALL
                                .into_iter()
                                .find(|v| v.label() == evt.value());
                            if let Some(v) = picked {
                                vehicle.set(v);
                            }
                        },
                        for v in VehicleType::ALL {
                            option {
                                value: "{v.label()}",
                                selected: vehicle() == v,
                                "{v.label()}"
                            }
                        }
                    }
                }
                FormField {
                    label: "Notes (optional)",
                    value: description,
                    placeholder: "Luggage space, music, stops…",
                }
                button {
                    class: "w-full bg-blue-600 hover:bg-blue-700 text-white rounded p-2 disabled:opacity-50",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Publishing…" } else { "Publish trip" }
                }
            }
        }
    }
}

/// Assemble the wire request from raw form state, with field-level error
/// messages for anything unparseable.
fn build_request(
    origin: Option<Location>,
    destination: Option<Location>,
    departure: &str,
    seats: &str,
    fare: &str,
    vehicle: VehicleType,
    description: &str,
) -> Result<TripCreateRequest, String> {
    let origin = origin.ok_or("Pick a pickup point")?;
    let destination = destination.ok_or("Pick a destination")?;

    // datetime-local values carry no zone; interpreted as UTC.
    let departure_time = NaiveDateTime::parse_from_str(departure, "%Y-%m-%dT%H:%M")
        .map_err(|_| "Enter a departure time")?
        .and_utc();

    let total_seats: u8 = seats.parse().map_err(|_| "Seats must be a number")?;
    let fare_per_person: f64 = fare.parse().map_err(|_| "Fare must be a number")?;
    let description = description.trim();

    Ok(TripCreateRequest {
        origin_lat: origin.point.lat,
        origin_lng: origin.point.lng,
        origin_address: Some(origin.address),
        dest_lat: destination.point.lat,
        dest_lng: destination.point.lng,
        dest_address: Some(destination.address),
        departure_time,
        total_seats,
        fare_per_person,
        vehicle_type: vehicle,
        description: (!description.is_empty()).then(|| description.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_request_from_valid_form_state() {
        let request = build_request(
            Some(Location::unresolved("Sector 19")),
            Some(Location::unresolved("Panposh")),
            "2026-09-01T08:30",
            "3",
            "45.5",
            VehicleType::Auto,
            "  ",
        )
        .expect("valid form");

        assert_eq!(request.total_seats, 3);
        assert_eq!(request.fare_per_person, 45.5);
        assert_eq!(request.origin_address.as_deref(), Some("Sector 19"));
        assert!(request.description.is_none());
    }

    #[test]
    fn rejects_missing_locations_and_bad_numbers() {
        assert!(build_request(
            None,
            Some(Location::unresolved("x")),
            "2026-09-01T08:30",
            "3",
            "45",
            VehicleType::Car,
            ""
        )
        .is_err());

        assert!(build_request(
            Some(Location::unresolved("a")),
            Some(Location::unresolved("b")),
            "not a time",
            "3",
            "45",
            VehicleType::Car,
            ""
        )
        .is_err());

        assert!(build_request(
            Some(Location::unresolved("a")),
            Some(Location::unresolved("b")),
            "2026-09-01T08:30",
            "many",
            "45",
            VehicleType::Car,
            ""
        )
        .is_err());
    }
}
