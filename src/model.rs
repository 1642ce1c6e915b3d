//! Ticket data model and defensive wire parsing.
//!
//! DESIGN
//! ======
//! The backend reply is `{ success: bool, fichas: [...] }`. Field presence is
//! not guaranteed, so parsing walks `serde_json::Value` and falls back to
//! safe defaults instead of failing the whole reply on a missing field.
//! Timeline order is display order: events are kept exactly as received,
//! never sorted or reordered here.

use serde_json::Value;

use crate::error::TrackError;

// =============================================================================
// STATUSES
// =============================================================================

/// Repair status of a ticket.
///
/// Wire values are the backend's Spanish identifiers. Anything unrecognized
/// parses to [`RepairStatus::Unknown`] with the raw value retained, so an
/// unexpected status renders an explicit fallback label instead of nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairStatus {
    Received,
    Diagnosing,
    InRepair,
    Completed,
    Unknown(String),
}

impl RepairStatus {
    /// Parse a wire status. Empty input defaults to `recibido`, matching the
    /// backend mapping. Input is lower-cased before matching.
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        let raw = raw.trim().to_lowercase();
        match raw.as_str() {
            "" | "recibido" => Self::Received,
            "diagnostico" => Self::Diagnosing,
            "reparacion" => Self::InRepair,
            "completado" => Self::Completed,
            _ => Self::Unknown(raw),
        }
    }

    /// Badge label shown to the user.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Received => "Recibido",
            Self::Diagnosing => "En Diagnóstico",
            Self::InRepair => "En Reparación",
            Self::Completed => "Completado",
            Self::Unknown(_) => "Desconocido",
        }
    }

    /// Suffix for the badge's `status-*` CSS class.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Received => "recibido",
            Self::Diagnosing => "diagnostico",
            Self::InRepair => "reparacion",
            Self::Completed => "completado",
            Self::Unknown(_) => "desconocido",
        }
    }
}

/// Status of a single timeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

impl StepStatus {
    /// Parse a wire step status. Unrecognized values are treated as pending.
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "completed" => Self::Completed,
            "active" => Self::Active,
            _ => Self::Pending,
        }
    }

    /// CSS class on the timeline item.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Active => "active",
            Self::Pending => "pending",
        }
    }
}

/// Icon fallback for timeline steps that carry no explicit glyph. Keys are
/// the backend's phase identifiers; anything else gets the generic marker.
#[must_use]
pub fn fallback_icon(raw_status: &str) -> &'static str {
    match raw_status {
        "recepcion" => "📦",
        "diagnostico" => "🔍",
        "reparacion" => "🔧",
        "pruebas" => "✅",
        _ => "📌",
    }
}

// =============================================================================
// TICKETS
// =============================================================================

/// One step in a ticket's repair lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEvent {
    /// Display string; empty for pending steps.
    pub date: String,
    pub title: String,
    pub description: String,
    pub status: StepStatus,
    /// Resolved at parse time: explicit glyph, else the phase fallback.
    pub icon: String,
    /// Optional link to a video of the step.
    pub video: Option<String>,
}

/// A single equipment repair record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Institutional code, e.g. `UPT-2025-0089`.
    pub code: String,
    pub name: String,
    pub model: String,
    pub status: RepairStatus,
    /// Percentage as reported by the backend. Deliberately not clamped —
    /// out-of-range values pass through to the progress bar unchanged.
    pub progress: i64,
    pub intake_date: String,
    pub estimated_date: String,
    pub timeline: Vec<TimelineEvent>,
}

/// Parsed lookup reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupReply {
    pub success: bool,
    pub tickets: Vec<Ticket>,
}

impl LookupReply {
    /// True when there is something to render as results. A `success: false`
    /// reply or an empty ticket list goes to the empty state instead.
    #[must_use]
    pub fn has_results(&self) -> bool {
        self.success && !self.tickets.is_empty()
    }
}

// =============================================================================
// WIRE PARSING
// =============================================================================

/// Parse the backend's `{ success, fichas }` reply body.
///
/// # Errors
///
/// Returns [`TrackError::Parse`] only when the body is not valid JSON.
/// Missing or oddly typed fields inside a valid body fall back to defaults.
pub fn parse_lookup_reply(json_text: &str) -> Result<LookupReply, TrackError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| TrackError::Parse(e.to_string()))?;
    let success = root.get("success").and_then(Value::as_bool).unwrap_or(false);
    let tickets = root
        .get("fichas")
        .and_then(Value::as_array)
        .map(|fichas| fichas.iter().map(parse_ticket).collect())
        .unwrap_or_default();
    Ok(LookupReply { success, tickets })
}

fn parse_ticket(ficha: &Value) -> Ticket {
    let codigo = non_empty_str(ficha, "codigo");
    let code = codigo.map_or_else(
        || {
            let id = ficha.get("id").and_then(Value::as_i64).unwrap_or(0);
            format!("ID-{id}")
        },
        str::to_owned,
    );
    let name = non_empty_str(ficha, "tipo_equipo")
        .or(codigo)
        .unwrap_or_default()
        .to_owned();

    Ticket {
        code,
        name,
        model: str_or_empty(ficha, "modelo"),
        status: RepairStatus::from_wire(ficha.get("estado").and_then(Value::as_str).unwrap_or("")),
        progress: number_or_zero(ficha, "progreso"),
        intake_date: str_or_empty(ficha, "fechaIngreso"),
        estimated_date: str_or_empty(ficha, "fechaEstimada"),
        timeline: ficha
            .get("timeline")
            .and_then(Value::as_array)
            .map(|events| events.iter().map(parse_event).collect())
            .unwrap_or_default(),
    }
}

fn parse_event(event: &Value) -> TimelineEvent {
    let raw_status = event.get("estado").and_then(Value::as_str).unwrap_or("");
    let icon = non_empty_str(event, "icono").map_or_else(|| fallback_icon(raw_status).to_owned(), str::to_owned);
    TimelineEvent {
        date: str_or_empty(event, "fecha"),
        title: str_or_empty(event, "titulo"),
        description: str_or_empty(event, "descripcion"),
        status: StepStatus::from_wire(raw_status),
        icon,
        video: non_empty_str(event, "video").map(str::to_owned),
    }
}

/// String field, treating absent and empty alike (the backend's falsy checks).
fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn str_or_empty(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// Numeric field with a zero default. Accepts integer or float wire values;
/// floats are truncated.
fn number_or_zero(value: &Value, key: &str) -> i64 {
    let Some(field) = value.get(key) else { return 0 };
    if let Some(n) = field.as_i64() {
        return n;
    }
    #[allow(clippy::cast_possible_truncation)]
    let truncated = field.as_f64().map(|f| f as i64);
    truncated.unwrap_or(0)
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
