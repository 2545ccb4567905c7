mod cli;

use std::fs::File;
use std::io::BufWriter;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use navbar::config::{NavBarConfig, SchemeChoice, load_config, save_config};
use navbar::layout::ContainerMetrics;
use navbar::navbar::TabLabel;
use navbar::render::CommandRecorder;
use navbar::render::cpu::PixelSurface;
use navbar::{NavBar, Tab, TabHost, TabId, TabStyle};

/// Prints where each label and content pane ends up.
struct LogHost;

impl TabHost for LogHost {
    fn place_label(&mut self, id: TabId, label: &TabLabel<'_>) {
        log::info!(
            "label {:?} {:?} at ({:.1}, {:.1}) {:.1}x{:.1}",
            id,
            label.text,
            label.rect.x,
            label.rect.y,
            label.rect.w,
            label.rect.h
        );
    }

    fn place_content(&mut self, id: TabId, _rect: navbar::core::Rect, visible: bool) {
        if visible {
            log::info!("content of {id:?} shown");
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path).with_context(|| format!("loading {}", path.display()))?,
        None => NavBarConfig::default(),
    };
    if let Some(scheme) = cli.scheme {
        config.colors = SchemeChoice::from(scheme).resolve();
    }
    if let Some(shape) = &cli.shape {
        config.tab_shape = shape.clone();
    }
    config.extend_past_bounds |= cli.extend;

    if let Some(path) = &cli.save_config {
        save_config(path, &config).with_context(|| format!("saving {}", path.display()))?;
    }

    let (width, height) = (cli.width as f32, cli.height as f32);
    let background = config.colors.background;
    let mut bar = NavBar::new(config, ContainerMetrics::full(width, height));
    for i in 0..cli.tabs {
        bar.add_tab(Tab::new(TabId(i), TabStyle::with_text(format!("Tab {}", i + 1))));
    }
    if cli.tabs > 0 && !bar.switch_to(TabId(cli.active)) {
        anyhow::bail!("active tab {} out of range (0..{})", cli.active, cli.tabs);
    }

    let mut recorder = CommandRecorder::new();
    let snapshot = bar
        .layout(&mut recorder, &mut LogHost)
        .context("layout pass failed")?;
    log::info!(
        "{} tab(s), {:?}, {} draw command(s)",
        snapshot.tabs.len(),
        snapshot.justification,
        recorder.len()
    );

    if cli.dump {
        for command in recorder.commands() {
            println!("{command:?}");
        }
    }

    if let Some(path) = &cli.out {
        let mut surface = PixelSurface::new(cli.width as usize, cli.height as usize).with_clear_color(background);
        recorder.replay(&mut surface);
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        surface
            .write_ppm(BufWriter::new(file))
            .with_context(|| format!("writing {}", path.display()))?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
