//! XAML document assembly over a structured writer.
//!
//! Events, not string splicing: attribute values pass through the writer's
//! escaping, so a stray quote or angle bracket in path data cannot break
//! the document structure.

use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use super::dom::Element;
use super::error::ConvertError;
use super::gradient::GradientTable;
use super::shape::{PaintContext, write_shapes};

/// Placeholder substituted with the final resource key by the caller. The
/// assembler stays identifier-agnostic.
pub const KEY_PLACEHOLDER: &str = "{{NODE_NAME}}";

/// Assemble the complete `DrawingImage` resource for a parsed document:
/// root wrapper, a single nested drawing group, and the ordered drawing
/// sequence. Output is unindented; the caller runs it through the
/// pretty-printer.
pub fn build_drawing_image(
    root: &Element,
    gradients: &GradientTable,
) -> Result<String, ConvertError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    let mut image = BytesStart::new("DrawingImage");
    image.push_attribute(("x:Key", KEY_PLACEHOLDER));
    writer.write_event(Event::Start(image))?;
    writer.write_event(Event::Start(BytesStart::new("DrawingImage.Drawing")))?;
    writer.write_event(Event::Start(BytesStart::new("DrawingGroup")))?;

    let ctx = PaintContext {
        default_fill: root.attr("fill"),
        gradients,
    };
    write_shapes(&mut writer, root, &ctx)?;

    writer.write_event(Event::End(BytesEnd::new("DrawingGroup")))?;
    writer.write_event(Event::End(BytesEnd::new("DrawingImage.Drawing")))?;
    writer.write_event(Event::End(BytesEnd::new("DrawingImage")))?;

    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
