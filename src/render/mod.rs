//! Rendering module for converting documents to HWPML and JSON.

mod hml;
mod json;
mod options;
mod result;
pub mod template;

pub use hml::{manifest, to_hml, to_hml_with_stats, HmlRenderer};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use result::{ConversionStats, RenderResult};
pub use template::{HwpmlTemplate, PageGeometry, TemplateParts, TemplateProvider};
