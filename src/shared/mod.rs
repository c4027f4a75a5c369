//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Konfiguration, die sowohl `app` als auch die Substrat-Adapter lesen.

pub mod options;

pub use options::{
    EditorOptions, GlyphStyle, OptimizeParams, PreviewParams, DEFAULT_ORIGIN_PX, HEADING_WEIGHT,
};
