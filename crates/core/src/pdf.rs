//! PDF rendering of a request's captured data.
//!
//! Produces a linear textual document: a header block (institution name,
//! format name, request id, generation date), a depth-first indented dump of
//! the captured data, and a footer line. Layout is intentionally simple;
//! the output is an archival artifact, not typography.

use chrono::Utc;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use uuid::Uuid;

use crate::error::CoreError;

// US Letter.
const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const MARGIN_MM: f32 = 20.0;
const BODY_SIZE: f32 = 10.0;
const LINE_HEIGHT_MM: f32 = 5.0;
const INDENT_MM: f32 = 5.0;

/// One line of the flattened data dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLine {
    pub depth: usize,
    pub text: String,
}

impl RenderLine {
    fn new(depth: usize, text: impl Into<String>) -> Self {
        RenderLine {
            depth,
            text: text.into(),
        }
    }
}

/// Flatten an arbitrary JSON document into indented lines, depth-first.
///
/// Sequences are numbered by index (`[0]`, `[1]`, ...), mappings by key, and
/// leaves are printed as `key: value`. A scalar at the top level becomes a
/// single line.
pub fn flatten_data(data: &serde_json::Value) -> Vec<RenderLine> {
    let mut lines = Vec::new();
    flatten_into(data, 0, &mut lines);
    lines
}

fn flatten_into(data: &serde_json::Value, depth: usize, lines: &mut Vec<RenderLine>) {
    match data {
        serde_json::Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                lines.push(RenderLine::new(depth, format!("[{index}]")));
                flatten_into(item, depth + 1, lines);
            }
        }
        serde_json::Value::Object(map) => {
            for (key, value) in map {
                if value.is_object() || value.is_array() {
                    lines.push(RenderLine::new(depth, format!("{key}:")));
                    flatten_into(value, depth + 1, lines);
                } else {
                    lines.push(RenderLine::new(depth, format!("{key}: {}", scalar_text(value))));
                }
            }
        }
        scalar => lines.push(RenderLine::new(depth, scalar_text(scalar))),
    }
}

/// Display a JSON scalar without the quoting its serialization would add.
fn scalar_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Write cursor that starts new pages when the current one fills up.
struct PageWriter<'a> {
    doc: &'a printpdf::PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl<'a> PageWriter<'a> {
    fn write(&mut self, text: &str, size: f32, x: f32, font: &IndirectFontRef) {
        if self.y < MARGIN_MM {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        self.layer
            .use_text(text, size, Mm(x), Mm(self.y), font);
        self.y -= LINE_HEIGHT_MM * (size / BODY_SIZE);
    }

    fn write_centered(&mut self, text: &str, size: f32, font: &IndirectFontRef) {
        // Approximate width with an average glyph factor; good enough for a
        // visually centered header.
        let text_width_mm = text.chars().count() as f32 * size * 0.5 * 0.3528;
        let x = ((PAGE_WIDTH_MM - text_width_mm) / 2.0).max(MARGIN_MM);
        self.write(text, size, x, font);
    }

    fn skip(&mut self, lines: f32) {
        self.y -= LINE_HEIGHT_MM * lines;
    }
}

/// Render the full PDF artifact for a request, returning the raw bytes.
pub fn render_request_pdf(
    institution_name: &str,
    format_name: &str,
    request_id: Uuid,
    data: &serde_json::Value,
) -> Result<Vec<u8>, CoreError> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Solicitud {request_id}"),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| CoreError::Internal(format!("pdf font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| CoreError::Internal(format!("pdf font error: {e}")))?;

    let mut writer = PageWriter {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        y: PAGE_HEIGHT_MM - MARGIN_MM,
    };

    // Header block.
    writer.write_centered(institution_name, 20.0, &bold);
    writer.write_centered(&format!("Formato: {format_name}"), 14.0, &regular);
    writer.skip(1.0);
    writer.write(&format!("ID Solicitud: {request_id}"), BODY_SIZE, MARGIN_MM, &regular);
    writer.write(
        &format!("Fecha: {}", Utc::now().format("%d/%m/%Y")),
        BODY_SIZE,
        MARGIN_MM,
        &regular,
    );
    writer.skip(1.0);
    writer.write("Datos Capturados", 12.0, MARGIN_MM, &bold);

    // Captured data, depth-first.
    for line in flatten_data(data) {
        let x = MARGIN_MM + INDENT_MM * line.depth as f32;
        writer.write(&line.text, BODY_SIZE, x, &regular);
    }

    writer.skip(1.0);
    writer.write_centered(
        "Este documento fue generado automáticamente por el Sistema de Gestión de Trámites",
        8.0,
        &regular,
    );

    doc.save_to_bytes()
        .map_err(|e| CoreError::Internal(format!("pdf serialization error: {e}")))
}
