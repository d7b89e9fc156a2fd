//! Gradient definitions: extraction, lookup, and XAML brush rendering.
//!
//! The table is a plain value built once per conversion and threaded into
//! shape translation as an argument, so overlapping conversions can never
//! alias each other's definitions.

use std::collections::HashMap;
use std::io::Write;
use std::sync::OnceLock;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use regex::Regex;

use super::color::{normalize_color, scale_alpha};
use super::dom::Element;

/// One gradient stop, kept exactly as encountered: offsets are neither
/// sorted nor clamped here.
#[derive(Debug, Clone)]
pub struct GradientStop {
    /// Percentage (`"50%"`) or unit-scale fraction (`"0.5"`).
    pub offset: String,
    /// Raw color token; normalized only at brush-rendering time.
    pub color: String,
    pub opacity: f32,
}

/// Parsed gradient descriptor.
///
/// Coordinates stay in their source form (percentage or bare number) until
/// the brush is rendered.
#[derive(Debug, Clone)]
pub enum Gradient {
    Linear {
        x1: String,
        y1: String,
        x2: String,
        y2: String,
        stops: Vec<GradientStop>,
    },
    Radial {
        cx: String,
        cy: String,
        r: String,
        stops: Vec<GradientStop>,
    },
}

/// Per-conversion table of gradient definitions, keyed by `id`.
#[derive(Debug, Default)]
pub struct GradientTable {
    defs: HashMap<String, Gradient>,
}

impl GradientTable {
    /// Collect every `linearGradient`/`radialGradient` carrying an `id`,
    /// wherever it appears in the tree (not only inside `<defs>`).
    /// Definitions without an id are skipped silently.
    pub fn extract(root: &Element) -> Self {
        let mut table = Self::default();
        table.collect(root);
        table
    }

    fn collect(&mut self, element: &Element) {
        for child in &element.children {
            match child.name.as_str() {
                "linearGradient" => {
                    if let Some(id) = child.attr("id") {
                        self.defs.insert(id.to_owned(), parse_linear(child));
                    }
                }
                "radialGradient" => {
                    if let Some(id) = child.attr("id") {
                        self.defs.insert(id.to_owned(), parse_radial(child));
                    }
                }
                _ => self.collect(child),
            }
        }
    }

    /// Pure lookup; an absent result means "treat as no paint", not an error.
    pub fn resolve(&self, id: &str) -> Option<&Gradient> {
        self.defs.get(id)
    }
}

/// Extract the gradient id from a `url(#id)` paint reference.
pub fn fill_reference(value: &str) -> Option<&str> {
    static REFERENCE: OnceLock<Regex> = OnceLock::new();
    let re = REFERENCE.get_or_init(|| Regex::new(r"url\(#([^)]+)\)").expect("valid regex"));
    re.captures(value).and_then(|c| c.get(1)).map(|m| m.as_str())
}

fn parse_linear(element: &Element) -> Gradient {
    // Default is a horizontal 0% -> 100% ramp.
    Gradient::Linear {
        x1: element.attr_or("x1", "0%").to_owned(),
        y1: element.attr_or("y1", "0%").to_owned(),
        x2: element.attr_or("x2", "100%").to_owned(),
        y2: element.attr_or("y2", "0%").to_owned(),
        stops: parse_stops(element),
    }
}

fn parse_radial(element: &Element) -> Gradient {
    Gradient::Radial {
        cx: element.attr_or("cx", "50%").to_owned(),
        cy: element.attr_or("cy", "50%").to_owned(),
        r: element.attr_or("r", "50%").to_owned(),
        stops: parse_stops(element),
    }
}

fn parse_stops(element: &Element) -> Vec<GradientStop> {
    element
        .children
        .iter()
        .filter(|child| child.name == "stop")
        .map(|stop| GradientStop {
            offset: stop.attr_or("offset", "0").to_owned(),
            color: stop.attr_or("stop-color", "#000000").to_owned(),
            opacity: stop
                .attr("stop-opacity")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(1.0),
        })
        .collect()
}

impl Gradient {
    /// Render this descriptor as a XAML gradient brush.
    ///
    /// Coordinates are converted to the unit interval: percentages divide by
    /// 100, bare numbers are taken as already unit-scale. This is a
    /// deliberate simplification, not a true coordinate-system transform.
    pub fn write_brush<W: Write>(&self, writer: &mut Writer<W>) -> std::io::Result<()> {
        match self {
            Self::Linear {
                x1,
                y1,
                x2,
                y2,
                stops,
            } => {
                let mut brush = BytesStart::new("LinearGradientBrush");
                brush.push_attribute(("StartPoint", unit_point(x1, y1).as_str()));
                brush.push_attribute(("EndPoint", unit_point(x2, y2).as_str()));
                writer.write_event(Event::Start(brush))?;
                write_stops(writer, "LinearGradientBrush.GradientStops", stops)?;
                writer.write_event(Event::End(BytesEnd::new("LinearGradientBrush")))
            }
            Self::Radial { cx, cy, r, stops } => {
                // SVG radial gradients are circular; the one radius serves
                // both XAML axes.
                let radius = to_unit_string(r);
                let mut brush = BytesStart::new("RadialGradientBrush");
                brush.push_attribute(("Center", unit_point(cx, cy).as_str()));
                brush.push_attribute(("RadiusX", radius.as_str()));
                brush.push_attribute(("RadiusY", radius.as_str()));
                writer.write_event(Event::Start(brush))?;
                write_stops(writer, "RadialGradientBrush.GradientStops", stops)?;
                writer.write_event(Event::End(BytesEnd::new("RadialGradientBrush")))
            }
        }
    }
}

fn write_stops<W: Write>(
    writer: &mut Writer<W>,
    wrapper: &str,
    stops: &[GradientStop],
) -> std::io::Result<()> {
    if stops.is_empty() {
        return Ok(());
    }
    writer.write_event(Event::Start(BytesStart::new(wrapper)))?;
    for stop in stops {
        let color = scale_alpha(&normalize_color(&stop.color), stop.opacity);
        let mut elem = BytesStart::new("GradientStop");
        elem.push_attribute(("Color", color.as_str()));
        elem.push_attribute(("Offset", to_unit_string(&stop.offset).as_str()));
        writer.write_event(Event::Empty(elem))?;
    }
    writer.write_event(Event::End(BytesEnd::new(wrapper)))
}

/// Convert a percentage-or-bare-number value to unit scale.
/// Unparsable values degrade to 0.
fn to_unit(value: &str) -> f64 {
    let trimmed = value.trim();
    match trimmed.strip_suffix('%') {
        Some(percent) => percent.trim().parse::<f64>().unwrap_or(0.0) / 100.0,
        None => trimmed.parse::<f64>().unwrap_or(0.0),
    }
}

fn to_unit_string(value: &str) -> String {
    format!("{}", to_unit(value))
}

fn unit_point(x: &str, y: &str) -> String {
    format!("{},{}", to_unit(x), to_unit(y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::dom::parse_document;
    use std::io::Cursor;

    fn render_brush(gradient: &Gradient) -> String {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        gradient.write_brush(&mut writer).unwrap();
        String::from_utf8(writer.into_inner().into_inner()).unwrap()
    }

    fn table_for(svg: &str) -> GradientTable {
        GradientTable::extract(&parse_document(svg).unwrap())
    }

    #[test]
    fn test_extract_finds_definitions_inside_defs() {
        let table = table_for(
            r##"<svg><defs><linearGradient id="grad"><stop offset="0%" stop-color="#ff0000"/></linearGradient></defs></svg>"##,
        );
        assert!(table.resolve("grad").is_some());
    }

    #[test]
    fn test_extract_finds_definitions_outside_defs() {
        let table = table_for(r#"<svg><radialGradient id="r"></radialGradient></svg>"#);
        assert!(matches!(table.resolve("r"), Some(Gradient::Radial { .. })));
    }

    #[test]
    fn test_definitions_without_id_are_skipped() {
        let table = table_for(r"<svg><linearGradient></linearGradient></svg>");
        assert!(table.resolve("").is_none());
    }

    #[test]
    fn test_resolve_unknown_id_is_absent() {
        let table = table_for("<svg></svg>");
        assert!(table.resolve("nope").is_none());
    }

    #[test]
    fn test_linear_coordinate_defaults() {
        let table = table_for(r#"<svg><linearGradient id="g"></linearGradient></svg>"#);
        let Some(Gradient::Linear { x1, y1, x2, y2, .. }) = table.resolve("g") else {
            panic!("expected linear gradient");
        };
        assert_eq!((x1.as_str(), y1.as_str()), ("0%", "0%"));
        assert_eq!((x2.as_str(), y2.as_str()), ("100%", "0%"));
    }

    #[test]
    fn test_radial_coordinate_defaults() {
        let table = table_for(r#"<svg><radialGradient id="g"></radialGradient></svg>"#);
        let Some(Gradient::Radial { cx, cy, r, .. }) = table.resolve("g") else {
            panic!("expected radial gradient");
        };
        assert_eq!((cx.as_str(), cy.as_str(), r.as_str()), ("50%", "50%", "50%"));
    }

    #[test]
    fn test_stop_defaults() {
        let table = table_for(r#"<svg><linearGradient id="g"><stop/></linearGradient></svg>"#);
        let Some(Gradient::Linear { stops, .. }) = table.resolve("g") else {
            panic!("expected linear gradient");
        };
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].offset, "0");
        assert_eq!(stops[0].color, "#000000");
        assert!((stops[0].opacity - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_stops_keep_encounter_order() {
        let table = table_for(
            r#"<svg><linearGradient id="g"><stop offset="100%"/><stop offset="0%"/></linearGradient></svg>"#,
        );
        let Some(Gradient::Linear { stops, .. }) = table.resolve("g") else {
            panic!("expected linear gradient");
        };
        assert_eq!(stops[0].offset, "100%");
        assert_eq!(stops[1].offset, "0%");
    }

    #[test]
    fn test_default_linear_brush_spans_unit_ramp() {
        let table = table_for(
            r##"<svg><linearGradient id="g"><stop offset="0%" stop-color="#ff0000"/><stop offset="100%" stop-color="#0000ff"/></linearGradient></svg>"##,
        );
        let brush = render_brush(table.resolve("g").unwrap());
        assert!(brush.contains(r#"StartPoint="0,0""#));
        assert!(brush.contains(r#"EndPoint="1,0""#));
        assert!(brush.contains(r##"<GradientStop Color="#FFff0000" Offset="0"/>"##));
        assert!(brush.contains(r##"<GradientStop Color="#FF0000ff" Offset="1"/>"##));
    }

    #[test]
    fn test_bare_number_coordinates_pass_through() {
        let table = table_for(
            r#"<svg><linearGradient id="g" x1="0.25" y1="0" x2="0.75" y2="1"></linearGradient></svg>"#,
        );
        let brush = render_brush(table.resolve("g").unwrap());
        assert!(brush.contains(r#"StartPoint="0.25,0""#));
        assert!(brush.contains(r#"EndPoint="0.75,1""#));
    }

    #[test]
    fn test_radial_brush_reuses_radius_for_both_axes() {
        let table = table_for(
            r#"<svg><radialGradient id="g" cx="50%" cy="50%" r="40%"></radialGradient></svg>"#,
        );
        let brush = render_brush(table.resolve("g").unwrap());
        assert!(brush.contains(r#"Center="0.5,0.5""#));
        assert!(brush.contains(r#"RadiusX="0.4""#));
        assert!(brush.contains(r#"RadiusY="0.4""#));
    }

    #[test]
    fn test_stop_opacity_folds_into_alpha() {
        let table = table_for(
            r##"<svg><linearGradient id="g"><stop offset="0" stop-color="#ff0000" stop-opacity="0.5"/></linearGradient></svg>"##,
        );
        let brush = render_brush(table.resolve("g").unwrap());
        assert!(brush.contains(r##"Color="#80ff0000""##));
    }

    #[test]
    fn test_brush_without_stops_has_no_stop_wrapper() {
        let table = table_for(r#"<svg><linearGradient id="g"></linearGradient></svg>"#);
        let brush = render_brush(table.resolve("g").unwrap());
        assert!(!brush.contains("GradientStops"));
    }

    #[test]
    fn test_fill_reference_extraction() {
        assert_eq!(fill_reference("url(#grad1)"), Some("grad1"));
        assert_eq!(fill_reference("#grad1"), None);
        assert_eq!(fill_reference("red"), None);
        assert_eq!(fill_reference("url()"), None);
    }

    #[test]
    fn test_to_unit_conversions() {
        assert_eq!(to_unit_string("50%"), "0.5");
        assert_eq!(to_unit_string("100%"), "1");
        assert_eq!(to_unit_string("0.25"), "0.25");
        assert_eq!(to_unit_string("garbage"), "0");
    }
}
