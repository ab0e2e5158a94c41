// File: crates/chart-core/src/chart.rs
// Summary: Explicit chart construction from attributes and the mounted handle that drives frames.

use crate::animation::{AnimationTask, FrameRequest, TaskState};
use crate::bar::BarChart;
use crate::config::{Attributes, BarConfig, ChartKind, ConfigError, PieConfig, RadarConfig};
use crate::pie::PieChart;
use crate::radar::RadarChart;
use crate::scene::Scene;
use crate::theme::Theme;
use crate::types::Millis;
use crate::widget::{ChartEvent, HitTarget, Viewport, Widget};

/// One of the three chart widgets.
pub enum Chart {
    Pie(PieChart),
    Bar(BarChart),
    Radar(RadarChart),
}

impl Chart {
    /// Build a chart of `kind` from flat attributes. Only a missing series fails.
    pub fn from_attrs(kind: ChartKind, attrs: &Attributes) -> Result<Self, ConfigError> {
        Ok(match kind {
            ChartKind::Pie => {
                let pie = PieChart::new(PieConfig::from_attrs(attrs)?);
                match attrs.get("id") {
                    Some(id) => Chart::Pie(pie.with_mask_id(format!("{id}-mask"))),
                    None => Chart::Pie(pie),
                }
            }
            ChartKind::Bar => Chart::Bar(BarChart::new(BarConfig::from_attrs(attrs)?)),
            ChartKind::Radar => Chart::Radar(RadarChart::new(RadarConfig::from_attrs(attrs)?)),
        })
    }

    pub fn widget(&self) -> &dyn Widget {
        match self {
            Chart::Pie(w) => w,
            Chart::Bar(w) => w,
            Chart::Radar(w) => w,
        }
    }

    pub fn widget_mut(&mut self) -> &mut dyn Widget {
        match self {
            Chart::Pie(w) => w,
            Chart::Bar(w) => w,
            Chart::Radar(w) => w,
        }
    }

    pub fn kind(&self) -> ChartKind { self.widget().kind() }

    /// Final, unanimated state for a container of the given size.
    pub fn settled_scene(&mut self, viewport: &dyn Viewport, theme: &Theme) -> Scene {
        let widget = self.widget_mut();
        widget.draw(1.0, viewport);
        widget.scene(theme)
    }

    /// Attach to a display at `now`; animated charts start their frame task.
    pub fn mount(self, now: Millis) -> MountedChart {
        let task = self.widget().animation().map(|a| AnimationTask::start(a, now));
        tracing::debug!(kind = ?self.kind(), animated = task.is_some(), "chart mounted");
        MountedChart { chart: self, task, events: Vec::new(), disposed: false }
    }
}

/// A chart attached to a display. Owns its widget and its frame task.
pub struct MountedChart {
    chart: Chart,
    task: Option<AnimationTask>,
    events: Vec<ChartEvent>,
    disposed: bool,
}

impl MountedChart {
    pub fn chart(&self) -> &Chart { &self.chart }

    pub fn kind(&self) -> ChartKind { self.chart.kind() }

    /// True while the host should keep delivering frames.
    pub fn is_animating(&self) -> bool {
        !self.disposed && self.task.as_ref().is_some_and(AnimationTask::is_active)
    }

    pub fn task_state(&self) -> Option<TaskState> {
        self.task.as_ref().map(AnimationTask::state)
    }

    pub fn is_disposed(&self) -> bool { self.disposed }

    /// Deliver one display-refresh tick.
    pub fn on_frame(&mut self, now: Millis, viewport: &dyn Viewport) -> FrameRequest {
        if self.disposed {
            return FrameRequest::Idle;
        }
        let Some(task) = self.task.as_mut() else { return FrameRequest::Idle };
        let Some(frame) = task.tick(now) else { return FrameRequest::Idle };
        self.chart.widget_mut().draw(frame.progress, viewport);
        if frame.finished {
            tracing::debug!(kind = ?self.chart.kind(), "animation finished");
            FrameRequest::Idle
        } else {
            FrameRequest::Continue
        }
    }

    /// Drive frames every `step` milliseconds from the mount time until the animation ends.
    /// Returns the number of frames delivered.
    pub fn run_to_completion(&mut self, step: Millis, viewport: &dyn Viewport) -> usize {
        let Some(start) = self.task.as_ref().map(AnimationTask::started_at) else { return 0 };
        let step = if step > 0.0 { step } else { 16.0 };
        let mut frames = 0;
        let mut now = start;
        loop {
            now += step;
            frames += 1;
            if self.on_frame(now, viewport) == FrameRequest::Idle {
                return frames;
            }
        }
    }

    /// Lay a settled chart out again for a new container size. While the animation
    /// runs this is a no-op; the next frame measures the container.
    pub fn relayout(&mut self, viewport: &dyn Viewport) {
        if self.disposed || self.is_animating() {
            return;
        }
        self.chart.widget_mut().draw(1.0, viewport);
    }

    pub fn scene(&self, theme: &Theme) -> Scene {
        self.chart.widget().scene(theme)
    }

    pub fn pointer_enter(&mut self, target: HitTarget) {
        if self.disposed {
            return;
        }
        if let Some(event) = self.chart.widget_mut().pointer_enter(target) {
            self.events.push(event);
        }
    }

    pub fn pointer_leave(&mut self, target: HitTarget) {
        if !self.disposed {
            self.chart.widget_mut().pointer_leave(target);
        }
    }

    /// Take the events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<ChartEvent> {
        std::mem::take(&mut self.events)
    }

    /// Detach: cancel the frame task; later frames and pointer input are no-ops.
    pub fn dispose(&mut self) {
        if let Some(task) = self.task.as_mut() {
            task.cancel();
        }
        self.disposed = true;
        self.events.clear();
    }
}

impl Drop for MountedChart {
    fn drop(&mut self) {
        if !self.disposed {
            self.dispose();
        }
    }
}
