// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart widgets, animation driver and scene output.

pub mod animation;
pub mod bar;
pub mod chart;
pub mod config;
pub mod geometry;
pub mod pie;
pub mod radar;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod types;
pub mod widget;

pub use animation::{Animation, AnimationTask, Easing, Frame, FrameRequest, TaskState};
pub use bar::BarChart;
pub use chart::{Chart, MountedChart};
pub use config::{Attributes, BarConfig, ChartKind, ConfigError, PieConfig, RadarConfig};
pub use geometry::{lerp, Point};
pub use pie::PieChart;
pub use radar::RadarChart;
pub use scene::{Label, LabelPlacement, PathData, Primitive, Scene, Shape, Style};
pub use theme::{Palette, Theme};
pub use widget::{ChartEvent, FixedViewport, HitTarget, HoverState, Viewport, Widget};
