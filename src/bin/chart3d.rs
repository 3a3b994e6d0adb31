//! Interactive 3D wireframe viewer for numbered point series files.
//!
//! ```sh
//! chart3d                      # loads data/1.txt, data/2.txt, ...
//! chart3d --data-dir runs/a    # another directory
//! chart3d a.txt b.txt --dark   # explicit files
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use gpui_chart3d::{
    ChartViewConfig, GpuiChartView, SceneModel, Theme, load_dir, load_files,
};

#[derive(Parser)]
#[command(name = "chart3d")]
#[command(about = "Rotate 3D point series as a wireframe chart")]
#[command(version)]
struct Cli {
    /// Series files to load, in order. Overrides --data-dir.
    files: Vec<PathBuf>,
    /// Directory holding numbered series files (1.txt, 2.txt, ...).
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,
    /// Initial window width in pixels.
    #[arg(long, default_value_t = 1024.0)]
    width: f32,
    /// Initial window height in pixels.
    #[arg(long, default_value_t = 768.0)]
    height: f32,
    /// Use the dark theme.
    #[arg(long)]
    dark: bool,
    /// Hide the series legend.
    #[arg(long)]
    no_legend: bool,
    /// Hide tick markers and tick labels.
    #[arg(long)]
    no_grid: bool,
    /// Initial tilt about the X axis, in degrees.
    #[arg(long)]
    tilt: Option<f64>,
}

impl Cli {
    fn load(&self) -> anyhow::Result<SceneModel> {
        if self.files.is_empty() {
            load_dir(&self.data_dir)
                .with_context(|| format!("loading series from {}", self.data_dir.display()))
        } else {
            load_files(&self.files).context("loading series files")
        }
    }

    fn view_config(&self) -> ChartViewConfig {
        let mut config = ChartViewConfig::default();
        if self.dark {
            config.theme = Theme::dark();
        }
        if let Some(tilt) = self.tilt {
            config.initial_tilt_degrees = tilt;
        }
        config.scene.show_legend = !self.no_legend;
        config.scene.show_grid = !self.no_grid;
        config
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let model = Arc::new(cli.load()?);
    let config = cli.view_config();
    let window_size = size(px(cli.width.max(1.0)), px(cli.height.max(1.0)));
    log::info!(
        "opening {}x{} window with {} series",
        cli.width,
        cli.height,
        model.series().len()
    );

    Application::new().run(move |cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                window_size,
                cx,
            ))),
            ..Default::default()
        };

        let opened = cx.open_window(options, |_window, cx| {
            let view = GpuiChartView::with_config(model, config);
            cx.new(|_| view)
        });
        if let Err(err) = opened {
            log::error!("failed to open window: {err:?}");
            cx.quit();
        }
    });
    Ok(())
}
