// File: crates/chart-dioxus/src/host.rs
// Summary: Toolkit-agnostic glue between a display host and a mounted chart.
// Notes:
// - Owns the mounted chart, the latest scene and the clock origin.
// - UI layers call `tick` on their frame timer and `hover` from pointer events.

use chart_core::{
    Attributes, Chart, ChartEvent, ChartKind, ConfigError, FixedViewport, FrameRequest, HitTarget,
    MountedChart, Scene, Theme,
};

/// Frame interval for timer-driven hosts, close to a 60 Hz refresh.
pub const FRAME_INTERVAL_MS: u64 = 16;

pub struct ChartHost {
    mounted: MountedChart,
    viewport: FixedViewport,
    theme: Theme,
    scene: Scene,
}

impl ChartHost {
    /// Build and mount at time 0 of the host clock.
    pub fn new(
        kind: ChartKind,
        attrs: &Attributes,
        width: f64,
        height: f64,
        theme: Theme,
    ) -> Result<Self, ConfigError> {
        let viewport = FixedViewport::new(width, height);
        let mut mounted = Chart::from_attrs(kind, attrs)?.mount(0.0);
        // First frame at t=0 so the initial scene reflects the measured size.
        mounted.on_frame(0.0, &viewport);
        let scene = mounted.scene(&theme);
        Ok(Self { mounted, viewport, theme, scene })
    }

    pub fn scene(&self) -> &Scene { &self.scene }

    pub fn theme(&self) -> Theme { self.theme }

    pub fn is_animating(&self) -> bool { self.mounted.is_animating() }

    pub fn is_disposed(&self) -> bool { self.mounted.is_disposed() }

    /// Advance to `now` ms since mount; `Idle` means the host can stop its timer.
    pub fn tick(&mut self, now: f64) -> FrameRequest {
        let request = self.mounted.on_frame(now, &self.viewport);
        self.scene = self.mounted.scene(&self.theme);
        request
    }

    /// Forward pointer enter/leave; returns the events the chart emitted.
    pub fn hover(&mut self, target: HitTarget, entered: bool) -> Vec<ChartEvent> {
        if entered {
            self.mounted.pointer_enter(target);
        } else {
            self.mounted.pointer_leave(target);
        }
        self.scene = self.mounted.scene(&self.theme);
        self.mounted.drain_events()
    }

    /// Resize the container. Mid-animation, bar heights follow on the next tick;
    /// a settled chart is laid out again immediately.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = FixedViewport::new(width, height);
        self.mounted.relayout(&self.viewport);
        self.scene = self.mounted.scene(&self.theme);
    }

    pub fn dispose(&mut self) {
        if !self.mounted.is_disposed() {
            tracing::debug!(kind = ?self.mounted.kind(), "chart host disposed");
            self.mounted.dispose();
        }
    }
}
