//! SVG to XAML conversion core.
//!
//! Pipeline: structural parse, gradient extraction, ordered shape
//! translation, assembly, pretty-printing:
//!
//! ```text
//! SVG source text
//!       │
//!       ▼
//!  ┌─────────┐
//!  │   dom   │ ──► element tree (root <svg> required)
//!  └────┬────┘
//!       ├──────────► gradient table (url(#id) targets)
//!       ▼
//!  ┌─────────┐
//!  │  shape  │ ──► one GeometryDrawing per surviving element
//!  └────┬────┘
//!       ▼
//!  ┌─────────┐
//!  │  xaml   │ ──► DrawingImage scaffold with key placeholder
//!  └────┬────┘
//!       ▼
//!  ┌─────────┐
//!  │ format  │ ──► canonical 4-space indentation
//!  └─────────┘
//! ```
//!
//! Best-effort by design: local problems (unknown colors, unresolvable
//! gradient references, degenerate or invisible shapes) degrade to defaults
//! or drop the element. The only hard failure is a source without a usable
//! `<svg>` root.

pub mod color;
pub mod dom;
mod error;
pub mod format;
pub mod gradient;
pub mod shape;
mod xaml;

pub use error::ConvertError;
pub use format::{pretty_print, reformat_svg};
pub use xaml::KEY_PLACEHOLDER;

use gradient::GradientTable;

/// Convert an SVG document into a XAML `DrawingImage` resource string.
///
/// The result carries [`KEY_PLACEHOLDER`] where the resource key belongs;
/// substitute it with [`apply_key`] once the final identifier is known.
pub fn convert_document(svg: &str) -> Result<String, ConvertError> {
    let root = dom::parse_document(svg)?;
    let gradients = GradientTable::extract(&root);
    let xaml = xaml::build_drawing_image(&root, &gradients)?;
    Ok(format::pretty_print(&xaml))
}

/// Substitute the final resource key into a converted document.
pub fn apply_key(xaml: &str, key: &str) -> String {
    xaml.replacen(KEY_PLACEHOLDER, key, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_circle_end_to_end() {
        let svg = r#"<svg width="10" height="10"><circle cx="5" cy="5" r="4" fill="red"/></svg>"#;
        let xaml = convert_document(svg).unwrap();

        let expected = "\
<DrawingImage x:Key=\"{{NODE_NAME}}\">
    <DrawingImage.Drawing>
        <DrawingGroup>
            <GeometryDrawing Brush=\"#FFFF0000\">
                <GeometryDrawing.Geometry>
                    <EllipseGeometry Center=\"5,5\" RadiusX=\"4\" RadiusY=\"4\"/>
                </GeometryDrawing.Geometry>
            </GeometryDrawing>
        </DrawingGroup>
    </DrawingImage.Drawing>
</DrawingImage>";
        assert_eq!(xaml, expected);
    }

    #[test]
    fn test_gradient_fill_end_to_end() {
        let svg = r##"<svg width="24" height="24">
            <defs>
                <linearGradient id="grad">
                    <stop offset="0%" stop-color="#ff0000"/>
                    <stop offset="100%" stop-color="#0000ff"/>
                </linearGradient>
            </defs>
            <rect width="24" height="24" fill="url(#grad)"/>
        </svg>"##;
        let xaml = convert_document(svg).unwrap();

        assert!(xaml.contains(r#"<LinearGradientBrush StartPoint="0,0" EndPoint="1,0">"#));
        assert!(xaml.contains(r##"<GradientStop Color="#FFff0000" Offset="0"/>"##));
        assert!(xaml.contains(r##"<GradientStop Color="#FF0000ff" Offset="1"/>"##));
        assert!(xaml.contains(r#"<RectangleGeometry Rect="0,0,24,24"/>"#));
        // The defs block itself must not leak drawable elements.
        assert_eq!(xaml.matches("</GeometryDrawing>").count(), 1);
    }

    #[test]
    fn test_output_is_canonically_indented() {
        let svg = r#"<svg><path d="M0 0 L1 1" fill="red" stroke="blue"/></svg>"#;
        let xaml = convert_document(svg).unwrap();
        assert_eq!(pretty_print(&xaml), xaml);
    }

    #[test]
    fn test_invalid_source_aborts() {
        let err = convert_document("<div>not svg</div>").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidDocument(_)));
    }

    #[test]
    fn test_empty_body_converts_to_empty_group() {
        let xaml = convert_document("<svg></svg>").unwrap();
        assert!(xaml.contains("<DrawingGroup>\n        </DrawingGroup>"));
        assert!(!xaml.contains("GeometryDrawing"));
    }

    #[test]
    fn test_apply_key_substitutes_placeholder() {
        let xaml = convert_document("<svg></svg>").unwrap();
        let keyed = apply_key(&xaml, "HomeIcon");
        assert!(keyed.contains(r#"x:Key="HomeIcon""#));
        assert!(!keyed.contains(KEY_PLACEHOLDER));
    }

    #[test]
    fn test_mixed_document_preserves_source_order() {
        let svg = r#"<svg>
            <rect x="0" y="0" width="2" height="2" fill="red"/>
            <circle cx="1" cy="1" r="1" fill="blue"/>
            <path d="M0 0" stroke="black"/>
        </svg>"#;
        let xaml = convert_document(svg).unwrap();
        let rect = xaml.find("RectangleGeometry").unwrap();
        let circle = xaml.find("EllipseGeometry").unwrap();
        let path = xaml.find("PathGeometry").unwrap();
        assert!(rect < circle && circle < path);
    }
}
