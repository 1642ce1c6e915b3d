//! HTML rendering for the status view.
//!
//! DESIGN
//! ======
//! Pure functions from typed tickets to markup. Every interpolated text
//! field goes through [`escape_html`]: backend-supplied strings are never
//! trusted into the markup raw. Class names and labels come from the status
//! enums, not from wire strings.

use std::fmt::Write;

use crate::model::{Ticket, TimelineEvent};

/// Rendered output for the presentation surface: a plain-text summary line
/// and the HTML body that goes inside the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub summary: String,
    pub body: String,
}

impl RenderedView {
    /// Combine summary and body into one HTML fragment, for callers that
    /// take the whole view as markup (the summary is escaped here since it
    /// is plain text everywhere else).
    #[must_use]
    pub fn to_fragment(&self) -> String {
        format!(
            "<div class=\"modal-summary\">{}</div>\n<div class=\"modal-body\">{}</div>",
            escape_html(&self.summary),
            self.body
        )
    }
}

/// Minimal HTML escaping for text interpolated into markup.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the result view: summary line plus one card per ticket, in the
/// order received.
#[must_use]
pub fn render_results(tickets: &[Ticket], cedula: &str) -> RenderedView {
    let summary = format!("CI: {cedula} • {} equipo(s) registrado(s)", tickets.len());
    let mut body = String::new();
    for ticket in tickets {
        render_card(&mut body, ticket);
    }
    RenderedView { summary, body }
}

/// Render the "no equipment found" placeholder.
#[must_use]
pub fn render_empty_state(cedula: &str) -> RenderedView {
    let body = "\
<div class=\"empty-state\">\
<div class=\"empty-icon\">📦</div>\
<h3>No se encontraron equipos</h3>\
<p>No hay equipos registrados con ese numero de cédula.</p>\
<p style=\"margin-top: 15px;\">Si acabas de dejar tu equipo, puede tardar algunas horas en aparecer en el sistema. Por favor intenta más tarde.</p>\
</div>"
        .to_string();
    RenderedView { summary: format!("CI: {cedula}"), body }
}

fn render_card(out: &mut String, ticket: &Ticket) {
    let _ = write!(
        out,
        "<div class=\"equipment-card\">\
<div class=\"equipment-header\">\
<div class=\"equipment-info\">\
<h3>{name}</h3>\
<span class=\"equipment-code\">{code}</span>\
<p style=\"color: #6b7280; margin-top: 8px; font-size: 0.95rem;\">{model}</p>\
</div>\
<span class=\"status-badge status-{status_class}\">{status_label}</span>\
</div>\
<div class=\"progress-container\">\
<div class=\"progress-bar\">\
<div class=\"progress-fill\" style=\"width: {progress}%\"></div>\
</div>\
<div class=\"progress-info\">\
<span><strong>Ingreso:</strong> {intake}</span>\
<span><strong>Entrega estimada:</strong> {estimated}</span>\
</div>\
</div>\
<div class=\"timeline\">",
        name = escape_html(&ticket.name),
        code = escape_html(&ticket.code),
        model = escape_html(&ticket.model),
        status_class = ticket.status.css_class(),
        status_label = ticket.status.label(),
        progress = ticket.progress,
        intake = escape_html(&ticket.intake_date),
        estimated = escape_html(&ticket.estimated_date),
    );
    for event in &ticket.timeline {
        render_event(out, event);
    }
    out.push_str("</div></div>");
}

fn render_event(out: &mut String, event: &TimelineEvent) {
    let _ = write!(
        out,
        "<div class=\"timeline-item {status_class}\">\
<div class=\"timeline-dot\"></div>\
<div class=\"timeline-content\">\
<div class=\"timeline-date\">{date}</div>\
<div class=\"timeline-title\">{icon} {title}</div>\
<div class=\"timeline-desc\">{desc}</div>",
        status_class = event.status.css_class(),
        date = escape_html(&event.date),
        icon = escape_html(&event.icon),
        title = escape_html(&event.title),
        desc = escape_html(&event.description),
    );
    if let Some(video) = &event.video {
        let _ = write!(
            out,
            "<div class=\"timeline-video\"><a href=\"{}\" target=\"_blank\">Ver video</a></div>",
            escape_html(video)
        );
    }
    out.push_str("</div></div>");
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
