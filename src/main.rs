use anyhow::Context;
use clap::Parser;
use macroquad::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use life_canvas::{
    Cli, GameState, LifeConfig,
    rendering::{self, MacroquadFrames, MacroquadSurface},
    input, ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 900,
        window_height: 700,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = LifeConfig::resolve(&cli).context("loading configuration")?;
    let mut state = GameState::new(&config, MacroquadFrames::default())
        .context("initialising simulation")?;
    tracing::info!(size = config.grid_size, rate = config.rate, "life_canvas ready");

    loop {
        let mouse_pos = mouse_position();
        let layout = ui::GridLayout::for_screen(state.size(), config.cell_size);
        let buttons = ui::create_buttons(state.is_running());
        let (speed, grid_size) = ui::create_steppers();

        // Input
        input::process_button_clicks(&mut state, &buttons, mouse_pos);
        input::process_steppers(&mut state, &speed, &grid_size, mouse_pos);
        input::handle_grid_click(&mut state, &layout, mouse_pos);
        input::process_keyboard_input(&mut state);

        // Fire the tick the driver requested on the previous frame
        state.on_frame(get_time() * 1000.0);

        // Render
        clear_background(Color::from_rgba(20, 20, 20, 255));
        let mut surface = MacroquadSurface::new(layout);
        rendering::draw_grid(state.grid(), &mut surface);
        rendering::draw_controls(&state, &buttons, &speed, &grid_size, mouse_pos);

        next_frame().await;
    }
}
