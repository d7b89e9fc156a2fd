//! Shape translation: one XAML `GeometryDrawing` per surviving SVG element.
//!
//! A single ordered scan of the defs-stripped body dispatches on element
//! kind inline, so source z-order survives the conversion. Culling runs
//! before any output: degenerate geometry, invisible elements, and elements
//! with neither fill nor stroke all drop silently.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use super::color::normalize_color;
use super::dom::Element;
use super::gradient::{Gradient, GradientTable, fill_reference};

/// Document-level paint context shared by every shape.
pub struct PaintContext<'a> {
    /// Default fill from the `<svg>` root; a `none` default disables the
    /// inheritance instead of painting transparent.
    pub default_fill: Option<&'a str>,
    pub gradients: &'a GradientTable,
}

/// Resolved fill for one element.
enum Fill<'a> {
    Solid(String),
    Gradient(&'a Gradient),
}

/// Resolved stroke: brush color and thickness.
struct Pen {
    brush: String,
    thickness: String,
}

/// Target geometry for one element. Geometry values stay in source form;
/// the target coordinate space matches the source viewBox.
enum Geometry {
    Path {
        figures: String,
        fill_rule: &'static str,
    },
    Ellipse {
        center: String,
        rx: String,
        ry: String,
    },
    Rect {
        bounds: String,
    },
}

/// Walk the body in document order and emit a drawing per surviving shape.
pub fn write_shapes<W: Write>(
    writer: &mut Writer<W>,
    parent: &Element,
    ctx: &PaintContext<'_>,
) -> std::io::Result<()> {
    for child in &parent.children {
        match child.name.as_str() {
            // Definitions never produce drawable output; skipping the whole
            // subtree keeps defs-nested shape tags out of the scan.
            "defs" => {}
            "path" | "circle" | "rect" | "ellipse" => translate(writer, child, ctx)?,
            _ => write_shapes(writer, child, ctx)?,
        }
    }
    Ok(())
}

fn translate<W: Write>(
    writer: &mut Writer<W>,
    elem: &Element,
    ctx: &PaintContext<'_>,
) -> std::io::Result<()> {
    let Some(geometry) = extract_geometry(elem) else {
        return Ok(());
    };
    if is_invisible(elem) {
        return Ok(());
    }

    let fill_attr = elem
        .attr("fill")
        .or_else(|| ctx.default_fill.filter(|fill| *fill != "none"));
    let stroke_attr = elem.attr("stroke").filter(|stroke| *stroke != "none");

    if fill_attr.is_none_or(|fill| fill == "none") && stroke_attr.is_none() {
        return Ok(());
    }

    let fill = resolve_fill(fill_attr, ctx);
    let pen = stroke_attr.map(|stroke| Pen {
        brush: normalize_color(stroke),
        thickness: elem.attr_or("stroke-width", "1").to_owned(),
    });

    // An unresolvable gradient reference degrades to no fill; with no
    // stroke either, there is nothing left to paint.
    if fill.is_none() && pen.is_none() {
        return Ok(());
    }

    emit(writer, &geometry, fill.as_ref(), pen.as_ref())
}

fn resolve_fill<'a>(fill: Option<&str>, ctx: &PaintContext<'a>) -> Option<Fill<'a>> {
    let value = fill.filter(|fill| *fill != "none")?;
    match fill_reference(value) {
        Some(id) => ctx.gradients.resolve(id).map(Fill::Gradient),
        None => Some(Fill::Solid(normalize_color(value))),
    }
}

fn extract_geometry(elem: &Element) -> Option<Geometry> {
    match elem.name.as_str() {
        "path" => Some(Geometry::Path {
            figures: collapse_whitespace(elem.attr_or("d", "")),
            fill_rule: match elem.attr("fill-rule") {
                Some("evenodd") => "EvenOdd",
                _ => "Nonzero",
            },
        }),
        "circle" => {
            let r = elem.attr_or("r", "5");
            Some(Geometry::Ellipse {
                center: format!("{},{}", elem.attr_or("cx", "0"), elem.attr_or("cy", "0")),
                rx: r.to_owned(),
                ry: r.to_owned(),
            })
        }
        "rect" => {
            let width = elem.attr_or("width", "0");
            let height = elem.attr_or("height", "0");
            if non_positive(width) || non_positive(height) {
                return None;
            }
            Some(Geometry::Rect {
                bounds: format!(
                    "{},{},{},{}",
                    elem.attr_or("x", "0"),
                    elem.attr_or("y", "0"),
                    width,
                    height
                ),
            })
        }
        "ellipse" => {
            let rx = elem.attr_or("rx", "5");
            let ry = elem.attr_or("ry", "5");
            if non_positive(rx) || non_positive(ry) {
                return None;
            }
            Some(Geometry::Ellipse {
                center: format!("{},{}", elem.attr_or("cx", "0"), elem.attr_or("cy", "0")),
                rx: rx.to_owned(),
                ry: ry.to_owned(),
            })
        }
        _ => None,
    }
}

/// Only a value that actually parses to <= 0 culls the element; anything
/// unparsable passes through to the output untouched.
fn non_positive(value: &str) -> bool {
    value.trim().parse::<f32>().is_ok_and(|v| v <= 0.0)
}

/// Uniform invisibility predicate for all shape kinds: explicit opacity of
/// exactly 0, `visibility="hidden"`, or `display="none"`. Missing
/// attributes default to visible and opaque.
fn is_invisible(elem: &Element) -> bool {
    let opacity_zero = elem
        .attr("opacity")
        .and_then(|v| v.trim().parse::<f32>().ok())
        .is_some_and(|v| v == 0.0);

    opacity_zero
        || elem.attr("visibility") == Some("hidden")
        || elem.attr("display") == Some("none")
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn emit<W: Write>(
    writer: &mut Writer<W>,
    geometry: &Geometry,
    fill: Option<&Fill<'_>>,
    pen: Option<&Pen>,
) -> std::io::Result<()> {
    let mut drawing = BytesStart::new("GeometryDrawing");
    if let Some(Fill::Solid(color)) = fill {
        drawing.push_attribute(("Brush", color.as_str()));
    }
    writer.write_event(Event::Start(drawing))?;

    if let Some(Fill::Gradient(gradient)) = fill {
        writer.write_event(Event::Start(BytesStart::new("GeometryDrawing.Brush")))?;
        gradient.write_brush(writer)?;
        writer.write_event(Event::End(BytesEnd::new("GeometryDrawing.Brush")))?;
    }

    if let Some(pen) = pen {
        writer.write_event(Event::Start(BytesStart::new("GeometryDrawing.Pen")))?;
        let mut pen_elem = BytesStart::new("Pen");
        pen_elem.push_attribute(("Brush", pen.brush.as_str()));
        pen_elem.push_attribute(("Thickness", pen.thickness.as_str()));
        // Cap and join style are fixed, not derived from the source.
        pen_elem.push_attribute(("StartLineCap", "Flat"));
        pen_elem.push_attribute(("EndLineCap", "Flat"));
        pen_elem.push_attribute(("LineJoin", "Miter"));
        writer.write_event(Event::Empty(pen_elem))?;
        writer.write_event(Event::End(BytesEnd::new("GeometryDrawing.Pen")))?;
    }

    writer.write_event(Event::Start(BytesStart::new("GeometryDrawing.Geometry")))?;
    let geometry_elem = match geometry {
        Geometry::Path { figures, fill_rule } => {
            let mut elem = BytesStart::new("PathGeometry");
            elem.push_attribute(("FillRule", *fill_rule));
            elem.push_attribute(("Figures", figures.as_str()));
            elem
        }
        Geometry::Ellipse { center, rx, ry } => {
            let mut elem = BytesStart::new("EllipseGeometry");
            elem.push_attribute(("Center", center.as_str()));
            elem.push_attribute(("RadiusX", rx.as_str()));
            elem.push_attribute(("RadiusY", ry.as_str()));
            elem
        }
        Geometry::Rect { bounds } => {
            let mut elem = BytesStart::new("RectangleGeometry");
            elem.push_attribute(("Rect", bounds.as_str()));
            elem
        }
    };
    writer.write_event(Event::Empty(geometry_elem))?;
    writer.write_event(Event::End(BytesEnd::new("GeometryDrawing.Geometry")))?;
    writer.write_event(Event::End(BytesEnd::new("GeometryDrawing")))
}
