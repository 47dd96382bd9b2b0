use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;

mod config;
mod constants;
mod engine;
mod geometry;
mod gesture;
mod input;
mod logging;
mod order;
mod product;
mod state;
mod stories;
mod texture_loader;
mod transition;
mod ui;

use crate::config::Config;
use crate::constants::*;
use crate::engine::View;
use crate::input::FrameInput;
use crate::order::{OrderChannel, SystemBrowser, WebhookChannel};
use crate::product::{ProductPanel, ProductView};
use crate::state::Screen;
use crate::stories::StoriesView;
use crate::stories::slide::intro_slides;

fn build_view(
    screen: Screen,
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    config: &Config,
    channel: &Arc<dyn OrderChannel>,
) -> Box<dyn View> {
    match screen {
        Screen::Stories => Box::new(StoriesView::new(intro_slides())),
        Screen::Product => {
            let panels = ProductPanel::load_all(rl, thread, &config.assets);
            info!(pages = panels.len(), "product page ready");
            Box::new(ProductView::new(config.product(), panels, Arc::clone(channel), Box::new(SystemBrowser)))
        }
    }
}

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(config.verbose);
    info!(endpoint = %config.endpoint, assets = %config.assets.display(), "starting storefront");

    let channel: Arc<dyn OrderChannel> = Arc::new(
        WebhookChannel::new(config.endpoint.clone(), config.product()).context("Failed to set up order channel")?,
    );

    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title("Dumpling")
        .vsync()
        .resizable()
        .build();
    rl.set_window_min_size(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape belongs to the order form, not to quitting
    rl.set_exit_key(None);

    let mut screen = if config.skip_intro { Screen::Product } else { Screen::Stories };
    let mut view = build_view(screen, &mut rl, &thread, &config, &channel);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = match rl.get_frame_time() {
            t if t > 0.0 => t.min(MAX_FRAME_TIME),
            _ => FRAME_TIME, // first frame has no measured time yet
        };
        let input = FrameInput::capture(&mut rl);

        if let Some(next) = view.update(&input, dt) {
            if next != screen {
                info!(from = ?screen, to = ?next, "switching screen");
                view.dispose();
                screen = next;
                view = build_view(screen, &mut rl, &thread, &config, &channel);
            }
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        view.draw(&mut d);
    }

    view.dispose();
    info!("storefront closed");
    Ok(())
}
