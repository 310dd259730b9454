// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports record extraction, plan building and the SVG backend.

pub mod axis;
pub mod backend;
pub mod chart;
pub mod diagnostics;
pub mod element;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod record;
pub mod scale;
pub mod series;
pub mod svg;
pub mod theme;
pub mod time;
pub mod types;

pub use axis::{Axis, AxisOrient, Tick};
pub use backend::Renderer;
pub use chart::{render, Chart, Label, LinePath, Panel, PlanOptions, RenderPlan};
pub use diagnostics::{Diagnostics, LogDiagnostics};
pub use element::{ChartElement, ResizePolicy};
pub use error::PlanError;
pub use record::{extract, AttributeBag, Record};
pub use series::{group_by_name, Series};
pub use svg::{SvgLayout, SvgRenderer};
pub use theme::{Color, Theme, PALETTE};
