//! SVG bar charts
//!
//! Hand-built horizontal bar charts for the three explanation views. One
//! shared helper renders every chart, so the sign-to-color contract cannot
//! drift between views. Bar lengths are proportional to the exact supplied
//! magnitudes; nothing is clamped or re-normalized.

use serde::Serialize;

use crate::logic::explain::transform::MalformedEntry;
use crate::logic::explain::types::{ImportanceRow, SignedRow, IMPORTANCE_COLOR};
use crate::logic::explain::{importance_rows, signed_rows};
use crate::models::ExplanationRecord;

const CHART_WIDTH: u32 = 680;
const LABEL_WIDTH: u32 = 150;
const RIGHT_MARGIN: u32 = 30;
const ROW_HEIGHT: u32 = 28;
const BAR_HEIGHT: u32 = 18;
const MARGIN: u32 = 20;
const EMPTY_HEIGHT: u32 = 60;

/// One labeled explanation view, ready for the page template
#[derive(Debug, Clone, Serialize)]
pub struct ChartSection {
    pub title: &'static str,
    pub caption: &'static str,
    pub svg: String,
    /// Signed views carry the red/green color legend
    pub legend: bool,
}

/// The three labeled views, in display order. A mapping missing from the
/// record charts as empty; a non-numeric weight aborts the render.
pub fn explanation_sections(record: &ExplanationRecord) -> Result<Vec<ChartSection>, MalformedEntry> {
    let shap = signed_rows(&record.shap_values)?;
    let importance = importance_rows(&record.feature_importance)?;
    let lime = signed_rows(&record.lime_explanation)?;

    Ok(vec![
        ChartSection {
            title: "SHAP Values",
            caption: "SHAP values show how each feature contributed to this specific prediction:",
            svg: signed_bar_chart(&shap, "Impact"),
            legend: true,
        },
        ChartSection {
            title: "Feature Importance",
            caption: "Feature importance shows which factors generally matter most in heart disease prediction:",
            svg: importance_bar_chart(&importance),
            legend: false,
        },
        ChartSection {
            title: "LIME Explanation",
            caption: "LIME explains the model by perturbing the input and observing changes:",
            svg: signed_bar_chart(&lime, "Weight"),
            legend: true,
        },
    ])
}

struct Bar {
    label: String,
    length: f64,
    color: &'static str,
    tooltip: String,
}

/// Chart for a signed view. Both signed views go through here with the same
/// color contract; only the tooltip label differs.
pub fn signed_bar_chart(rows: &[SignedRow], tooltip_label: &str) -> String {
    let bars: Vec<Bar> = rows
        .iter()
        .map(|row| Bar {
            label: row.feature.clone(),
            length: row.magnitude,
            color: row.direction.fill_color(),
            tooltip: format!(
                "{}: {:.4} ({})",
                tooltip_label,
                row.magnitude,
                row.direction.label()
            ),
        })
        .collect();
    render_bars(&bars)
}

/// Chart for the unsigned global-importance view
pub fn importance_bar_chart(rows: &[ImportanceRow]) -> String {
    let bars: Vec<Bar> = rows
        .iter()
        .map(|row| Bar {
            label: row.feature.clone(),
            length: row.importance,
            color: IMPORTANCE_COLOR,
            tooltip: format!("Importance: {:.4}", row.importance),
        })
        .collect();
    render_bars(&bars)
}

fn render_bars(bars: &[Bar]) -> String {
    let height = if bars.is_empty() {
        EMPTY_HEIGHT
    } else {
        2 * MARGIN + bars.len() as u32 * ROW_HEIGHT
    };
    let usable = (CHART_WIDTH - LABEL_WIDTH - RIGHT_MARGIN) as f64;
    let max_length = bars.iter().map(|b| b.length).fold(0.0, f64::max);

    let mut body = String::new();
    for (i, bar) in bars.iter().enumerate() {
        let row_y = MARGIN + i as u32 * ROW_HEIGHT;
        let bar_y = row_y + (ROW_HEIGHT - BAR_HEIGHT) / 2;
        let text_y = bar_y + BAR_HEIGHT / 2 + 4;
        let width = if max_length > 0.0 {
            bar.length / max_length * usable
        } else {
            0.0
        };

        body.push_str(&format!(
            r##"<text x="{}" y="{}" text-anchor="end" font-size="12" fill="#595959">{}</text>"##,
            LABEL_WIDTH - 8,
            text_y,
            xml_escape(&bar.label)
        ));
        body.push('\n');
        body.push_str(&format!(
            r##"<rect x="{}" y="{}" width="{:.1}" height="{}" fill="{}" opacity="0.9"><title>{}</title></rect>"##,
            LABEL_WIDTH + 1,
            bar_y,
            width,
            BAR_HEIGHT,
            bar.color,
            xml_escape(&bar.tooltip)
        ));
        body.push('\n');
    }

    format!(
        r##"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg" role="img">
<line x1="{axis}" y1="{m}" x2="{axis}" y2="{bottom}" stroke="#d9d9d9" stroke-width="2"/>
<line x1="{axis}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="#d9d9d9" stroke-width="2"/>
{body}</svg>"##,
        w = CHART_WIDTH,
        h = height,
        axis = LABEL_WIDTH,
        m = MARGIN,
        bottom = height - MARGIN,
        right = CHART_WIDTH - RIGHT_MARGIN,
        body = body,
    )
}

fn xml_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
