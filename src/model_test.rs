use super::*;

#[test]
fn parse_full_ticket() {
    let json = serde_json::json!({
        "success": true,
        "fichas": [{
            "codigo": "UPT-2025-0089",
            "id": 89,
            "tipo_equipo": "Laptop Dell Latitude 5420",
            "modelo": "Intel Core i7 - 16GB RAM",
            "estado": "reparacion",
            "progreso": 60,
            "fechaIngreso": "01 Oct 2025",
            "fechaEstimada": "",
            "timeline": [
                {
                    "fecha": "01 Oct 2025 - 09:30 AM",
                    "titulo": "Equipo Recibido",
                    "descripcion": "Tu equipo ha sido recibido.",
                    "estado": "completed",
                    "icono": "📦"
                },
                {
                    "fecha": "05 Oct 2025 - 10:00 AM",
                    "titulo": "En Reparación",
                    "descripcion": "Instalación de disco SSD.",
                    "estado": "active"
                }
            ]
        }]
    })
    .to_string();

    let reply = parse_lookup_reply(&json).unwrap();
    assert!(reply.has_results());
    assert_eq!(reply.tickets.len(), 1);

    let ticket = &reply.tickets[0];
    assert_eq!(ticket.code, "UPT-2025-0089");
    assert_eq!(ticket.name, "Laptop Dell Latitude 5420");
    assert_eq!(ticket.status, RepairStatus::InRepair);
    assert_eq!(ticket.progress, 60);
    assert_eq!(ticket.estimated_date, "");
    assert_eq!(ticket.timeline.len(), 2);
    assert_eq!(ticket.timeline[0].icon, "📦");
    assert_eq!(ticket.timeline[1].status, StepStatus::Active);
}

#[test]
fn parse_keeps_timeline_order() {
    let json = serde_json::json!({
        "success": true,
        "fichas": [{
            "codigo": "UPT-1",
            "timeline": [
                { "titulo": "c", "estado": "pending" },
                { "titulo": "a", "estado": "completed" },
                { "titulo": "b", "estado": "active" }
            ]
        }]
    })
    .to_string();

    let reply = parse_lookup_reply(&json).unwrap();
    let titles: Vec<&str> = reply.tickets[0].timeline.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["c", "a", "b"]);
}

#[test]
fn parse_defaults_missing_fields() {
    let json = serde_json::json!({ "success": true, "fichas": [{ "id": 42 }] }).to_string();
    let reply = parse_lookup_reply(&json).unwrap();
    let ticket = &reply.tickets[0];
    assert_eq!(ticket.code, "ID-42");
    assert_eq!(ticket.name, "");
    assert_eq!(ticket.model, "");
    assert_eq!(ticket.status, RepairStatus::Received);
    assert_eq!(ticket.progress, 0);
    assert_eq!(ticket.intake_date, "");
    assert!(ticket.timeline.is_empty());
}

#[test]
fn parse_name_falls_back_to_codigo() {
    let json = serde_json::json!({ "success": true, "fichas": [{ "codigo": "UPT-7" }] }).to_string();
    let reply = parse_lookup_reply(&json).unwrap();
    assert_eq!(reply.tickets[0].name, "UPT-7");
}

#[test]
fn parse_empty_codigo_treated_as_missing() {
    let json = serde_json::json!({ "success": true, "fichas": [{ "codigo": "", "id": 7 }] }).to_string();
    let reply = parse_lookup_reply(&json).unwrap();
    assert_eq!(reply.tickets[0].code, "ID-7");
}

#[test]
fn parse_progress_out_of_range_passes_through() {
    // The progress value is deliberately not clamped.
    let json = serde_json::json!({ "success": true, "fichas": [{ "codigo": "x", "progreso": 140 }] }).to_string();
    assert_eq!(parse_lookup_reply(&json).unwrap().tickets[0].progress, 140);

    let json = serde_json::json!({ "success": true, "fichas": [{ "codigo": "x", "progreso": -5 }] }).to_string();
    assert_eq!(parse_lookup_reply(&json).unwrap().tickets[0].progress, -5);
}

#[test]
fn parse_progress_accepts_float() {
    let json = serde_json::json!({ "success": true, "fichas": [{ "codigo": "x", "progreso": 60.9 }] }).to_string();
    assert_eq!(parse_lookup_reply(&json).unwrap().tickets[0].progress, 60);
}

#[test]
fn parse_success_false_has_no_results() {
    let json = serde_json::json!({ "success": false, "fichas": [{ "codigo": "UPT-1" }] }).to_string();
    let reply = parse_lookup_reply(&json).unwrap();
    assert!(!reply.has_results());
    assert_eq!(reply.tickets.len(), 1);
}

#[test]
fn parse_missing_fichas_has_no_results() {
    let reply = parse_lookup_reply(r#"{"success": true}"#).unwrap();
    assert!(!reply.has_results());
    assert!(reply.tickets.is_empty());
}

#[test]
fn parse_invalid_json_errors() {
    assert!(matches!(parse_lookup_reply("not json"), Err(crate::error::TrackError::Parse(_))));
}

#[test]
fn repair_status_wire_round_trip() {
    assert_eq!(RepairStatus::from_wire("recibido"), RepairStatus::Received);
    assert_eq!(RepairStatus::from_wire("DIAGNOSTICO"), RepairStatus::Diagnosing);
    assert_eq!(RepairStatus::from_wire("reparacion"), RepairStatus::InRepair);
    assert_eq!(RepairStatus::from_wire("completado"), RepairStatus::Completed);
    assert_eq!(RepairStatus::from_wire(""), RepairStatus::Received);
}

#[test]
fn repair_status_unknown_keeps_raw_and_labels_explicitly() {
    let status = RepairStatus::from_wire("garantia");
    assert_eq!(status, RepairStatus::Unknown("garantia".into()));
    assert_eq!(status.label(), "Desconocido");
    assert_eq!(status.css_class(), "desconocido");
}

#[test]
fn repair_status_labels() {
    assert_eq!(RepairStatus::InRepair.label(), "En Reparación");
    assert_eq!(RepairStatus::Completed.label(), "Completado");
    assert_eq!(RepairStatus::Diagnosing.label(), "En Diagnóstico");
}

#[test]
fn step_status_unknown_is_pending() {
    assert_eq!(StepStatus::from_wire("whatever"), StepStatus::Pending);
    assert_eq!(StepStatus::from_wire(""), StepStatus::Pending);
}

#[test]
fn fallback_icon_table() {
    assert_eq!(fallback_icon("recepcion"), "📦");
    assert_eq!(fallback_icon("diagnostico"), "🔍");
    assert_eq!(fallback_icon("reparacion"), "🔧");
    assert_eq!(fallback_icon("pruebas"), "✅");
    assert_eq!(fallback_icon("completed"), "📌");
}

#[test]
fn event_icon_prefers_explicit_glyph() {
    let json = serde_json::json!({
        "success": true,
        "fichas": [{
            "codigo": "x",
            "timeline": [
                { "titulo": "a", "estado": "reparacion", "icono": "🛠️" },
                { "titulo": "b", "estado": "reparacion" },
                { "titulo": "c", "estado": "completed", "icono": "" }
            ]
        }]
    })
    .to_string();
    let reply = parse_lookup_reply(&json).unwrap();
    let timeline = &reply.tickets[0].timeline;
    assert_eq!(timeline[0].icon, "🛠️");
    assert_eq!(timeline[1].icon, "🔧");
    // Empty explicit icon falls back like a missing one.
    assert_eq!(timeline[2].icon, "📌");
}

#[test]
fn event_video_empty_string_is_none() {
    let json = serde_json::json!({
        "success": true,
        "fichas": [{
            "codigo": "x",
            "timeline": [
                { "titulo": "a", "video": "" },
                { "titulo": "b", "video": "https://example.test/v.mp4" }
            ]
        }]
    })
    .to_string();
    let reply = parse_lookup_reply(&json).unwrap();
    let timeline = &reply.tickets[0].timeline;
    assert!(timeline[0].video.is_none());
    assert_eq!(timeline[1].video.as_deref(), Some("https://example.test/v.mp4"));
}
