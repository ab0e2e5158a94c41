// File: crates/demo/src/output.rs
// Summary: Build a chart's settled scene and write it as SVG, HTML or PNG.

use anyhow::{Context, Result};
use chart_core::{Attributes, Chart, ChartKind, FixedViewport, Scene, Theme};
use chart_render_skia::{RenderOptions, SkiaRenderer};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Svg,
    Html,
    Png,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Svg => "svg",
            Format::Html => "html",
            Format::Png => "png",
        }
    }

    /// Guess from a file extension; unknown extensions mean SVG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("png") => Format::Png,
            Some("html") | Some("htm") => Format::Html,
            _ => Format::Svg,
        }
    }
}

/// Output size and look shared by every chart written in one run.
pub struct Target {
    pub width: u32,
    pub height: u32,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Target {
    pub fn scene(&self, kind: ChartKind, attrs: &Attributes) -> Result<Scene> {
        let mut chart = Chart::from_attrs(kind, attrs).with_context(|| format!("building {}", kind.tag()))?;
        Ok(chart.settled_scene(&FixedViewport::new(self.width as f64, self.height as f64), &self.theme))
    }

    pub fn write(&self, scene: &Scene, format: Format, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        match format {
            Format::Svg => std::fs::write(path, scene.to_svg(&self.theme))?,
            Format::Html => std::fs::write(path, scene.to_html(&self.theme))?,
            Format::Png => {
                let opts = RenderOptions {
                    width: self.width as i32,
                    height: self.height as i32,
                    background: None,
                    draw_labels: self.draw_labels,
                    theme: self.theme,
                };
                SkiaRenderer::new().render_png(scene, &opts, path)?;
            }
        }
        tracing::info!(path = %path.display(), ?format, "wrote chart");
        Ok(())
    }

    pub fn render(&self, kind: ChartKind, attrs: &Attributes, format: Format, path: &Path) -> Result<PathBuf> {
        let scene = self.scene(kind, attrs)?;
        self.write(&scene, format, path)?;
        Ok(path.to_path_buf())
    }
}
