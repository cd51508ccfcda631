//! The SVG overlay: a background path and a progress path over the element

use std::fmt::Write as _;

use super::dash::DashArray;
use super::defaults;
use super::path_builder::PathData;
use super::types::ConfigSignature;
use crate::types::{Dimensions, Px, fmt_num};

/// One `<path>` of the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct PathNode {
    pub class: &'static str,
    pub d: PathData,
    pub stroke: String,
    pub stroke_width: Px,
    pub stroke_linecap: Option<&'static str>,
    /// CSS `transition` applied through the inline style
    pub transition: Option<String>,
    pub dasharray: Option<DashArray>,
    pub dashoffset: Option<f64>,
    /// Cached path length (`data-length`)
    pub data_length: Option<f64>,
}

impl PathNode {
    fn write_markup(&self, out: &mut String) {
        let _ = write!(
            out,
            r#"<path class="{}" d="{}" stroke="{}" stroke-width="{}" fill="none""#,
            self.class,
            self.d,
            escape_attr(&self.stroke),
            self.stroke_width
        );
        if let Some(linecap) = self.stroke_linecap {
            let _ = write!(out, r#" stroke-linecap="{linecap}""#);
        }
        if let Some(transition) = &self.transition {
            let _ = write!(out, r#" style="transition: {}""#, escape_attr(transition));
        }
        if let Some(dasharray) = &self.dasharray {
            let _ = write!(out, r#" stroke-dasharray="{dasharray}""#);
        }
        if let Some(dashoffset) = self.dashoffset {
            let _ = write!(out, r#" stroke-dashoffset="{}""#, fmt_num(dashoffset));
        }
        if let Some(length) = self.data_length {
            let _ = write!(out, r#" data-length="{}""#, fmt_num(length));
        }
        out.push_str("/>");
    }
}

/// The `<svg class="stroke-dash-aligned-svg">` overlay and its two paths.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySvg {
    /// Identity of this overlay node; a rebuild creates a new one
    pub node_id: u64,
    pub config: ConfigSignature,
    /// Path length shared by both paths
    pub length: f64,
    pub background: PathNode,
    pub progress: PathNode,
}

impl OverlaySvg {
    /// Fresh overlay: background painted in `remaining_color`, progress path
    /// transparent so its first paint can grow in.
    pub fn build(
        node_id: u64,
        config: ConfigSignature,
        d: PathData,
        length: f64,
        remaining_color: &str,
        transition: String,
    ) -> Self {
        let background = PathNode {
            class: defaults::BACKGROUND_CLASS,
            d: d.clone(),
            stroke: remaining_color.to_string(),
            stroke_width: config.stroke_width,
            stroke_linecap: None,
            transition: None,
            dasharray: None,
            dashoffset: None,
            data_length: None,
        };
        let progress = PathNode {
            class: defaults::PROGRESS_CLASS,
            d,
            stroke: defaults::TRANSPARENT.to_string(),
            stroke_width: config.stroke_width,
            stroke_linecap: Some("round"),
            transition: Some(transition),
            dasharray: None,
            dashoffset: None,
            data_length: Some(length),
        };

        Self {
            node_id,
            config,
            length,
            background,
            progress,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions()
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.config.width, self.config.height)
    }

    /// Inline style of the root element
    pub fn style(&self) -> String {
        format!(
            "position:absolute;top:0;left:0;width:{}px;height:{}px;pointer-events:none",
            self.config.width, self.config.height
        )
    }

    /// Serialize as standalone SVG markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="{}" class="{}" viewBox="{}" style="{}" data-config="{}">"#,
            defaults::SVG_NS,
            defaults::SVG_CLASS,
            self.view_box(),
            self.style(),
            self.config
        );
        self.background.write_markup(&mut out);
        self.progress.write_markup(&mut out);
        out.push_str("</svg>");
        out
    }
}

fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
