//! Static SVG rendering of a dot plot
//!
//! Pure string construction: background, frame, axes with tick labels, then
//! one line segment per hit. Forward hits run along the main diagonal,
//! reverse hits along the anti-diagonal.

use dotmatch_core::{MatchSet, Position, Sequence};

/// Plot appearance and geometry.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub background_color: String,
    pub forward_color: String,
    pub reverse_color: String,
    pub font_family: String,
    pub font_size: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 900,
            margin: 75,
            background_color: "#ffffff".to_string(),
            forward_color: "dodgerblue".to_string(),
            reverse_color: "red".to_string(),
            font_family: "sans-serif".to_string(),
            font_size: 12,
        }
    }
}

const TICK_COUNT: usize = 5;

/// Linear map from sequence positions to pixel coordinates.
struct Scale {
    offset: f64,
    span: f64,
    domain: f64,
}

impl Scale {
    fn new(offset: u32, span: u32, domain: usize) -> Self {
        Self {
            offset: offset as f64,
            span: span as f64,
            domain: domain.max(1) as f64,
        }
    }

    fn apply(&self, pos: Position) -> f64 {
        self.offset + (pos as f64 / self.domain) * self.span
    }
}

/// Render the hit set of one comparison as a standalone SVG document.
///
/// Output is deterministic for deterministic input.
pub fn render_svg(
    config: &PlotConfig,
    reference: &Sequence,
    query: &Sequence,
    matches: &MatchSet,
) -> String {
    let inner_width = config.width.saturating_sub(2 * config.margin);
    let inner_height = config.height.saturating_sub(2 * config.margin);
    let x = Scale::new(config.margin, inner_width, reference.len());
    let y = Scale::new(config.margin, inner_height, query.len());

    let mut svg = SvgBuilder::new(config);
    svg.add_background();
    svg.add_frame(inner_width, inner_height);
    svg.add_axes(&x, &y, reference.len(), query.len());
    svg.add_axis_titles(reference.id(), query.id(), inner_width, inner_height);
    svg.add_hits(&x, &y, matches);
    svg.finish()
}

/// SVG document builder.
struct SvgBuilder {
    config: PlotConfig,
    elements: Vec<String>,
}

impl SvgBuilder {
    fn new(config: &PlotConfig) -> Self {
        Self {
            config: config.clone(),
            elements: Vec::new(),
        }
    }

    fn add_background(&mut self) {
        self.elements.push(format!(
            r#"<rect width="{}" height="{}" fill="{}"/>"#,
            self.config.width, self.config.height, self.config.background_color
        ));
    }

    fn add_frame(&mut self, inner_width: u32, inner_height: u32) {
        self.elements.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="black" stroke-width="1"/>"#,
            self.config.margin, self.config.margin, inner_width, inner_height
        ));
    }

    fn add_axes(&mut self, x: &Scale, y: &Scale, ref_len: usize, query_len: usize) {
        let margin = self.config.margin as f64;
        for i in 0..=TICK_COUNT {
            let ref_pos = ref_len * i / TICK_COUNT;
            let px = x.apply(ref_pos);
            self.elements.push(format!(
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="black" stroke-width="1"/>"#,
                px,
                margin - 6.0,
                px,
                margin
            ));
            self.elements.push(format!(
                r#"<text x="{:.2}" y="{:.2}" font-family="{}" font-size="{}px" text-anchor="middle">{}</text>"#,
                px,
                margin - 10.0,
                self.config.font_family,
                self.config.font_size - 2,
                ref_pos
            ));

            let query_pos = query_len * i / TICK_COUNT;
            let py = y.apply(query_pos);
            self.elements.push(format!(
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="black" stroke-width="1"/>"#,
                margin - 6.0,
                py,
                margin,
                py
            ));
            self.elements.push(format!(
                r#"<text x="{:.2}" y="{:.2}" font-family="{}" font-size="{}px" text-anchor="end" dominant-baseline="middle">{}</text>"#,
                margin - 10.0,
                py,
                self.config.font_family,
                self.config.font_size - 2,
                query_pos
            ));
        }
    }

    fn add_axis_titles(&mut self, ref_id: &str, query_id: &str, inner_width: u32, inner_height: u32) {
        let margin = self.config.margin as f64;
        let center_x = margin + inner_width as f64 / 2.0;
        let center_y = margin + inner_height as f64 / 2.0;
        self.elements.push(format!(
            r#"<text x="{:.2}" y="{:.2}" font-family="{}" font-size="{}px" text-anchor="middle">{}</text>"#,
            center_x,
            margin - 40.0,
            self.config.font_family,
            self.config.font_size,
            escape_text(ref_id)
        ));
        self.elements.push(format!(
            r#"<text x="{:.2}" y="{:.2}" transform="rotate(-90 {:.2} {:.2})" font-family="{}" font-size="{}px" text-anchor="middle">{}</text>"#,
            margin - 45.0,
            center_y,
            margin - 45.0,
            center_y,
            self.config.font_family,
            self.config.font_size,
            escape_text(query_id)
        ));
    }

    fn add_hits(&mut self, x: &Scale, y: &Scale, matches: &MatchSet) {
        let forward_color = self.config.forward_color.clone();
        let reverse_color = self.config.reverse_color.clone();
        for (hits, color) in [
            (&matches.forward, forward_color),
            (&matches.reverse, reverse_color),
        ] {
            if hits.is_empty() {
                continue;
            }
            let mut group = format!(r#"<g stroke="{}" stroke-width="1">"#, color);
            for hit in hits {
                let ((x1, y1), (x2, y2)) = hit.segment();
                group.push_str(&format!(
                    r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
                    x.apply(x1),
                    y.apply(y1),
                    x.apply(x2),
                    y.apply(y2)
                ));
            }
            group.push_str("</g>");
            self.elements.push(group);
        }
    }

    fn finish(self) -> String {
        let mut out = String::new();
        out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        out.push('\n');
        out.push_str(&format!(
            r#"<svg width="{}" height="{}" viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">"#,
            self.config.width, self.config.height, self.config.width, self.config.height
        ));
        out.push('\n');
        for element in &self.elements {
            out.push_str("  ");
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
