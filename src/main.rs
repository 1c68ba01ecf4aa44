use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sortviz::prelude::*;
use sortviz::{ControlError, Error};

fn window_title(controller: &Controller) -> String {
    let state = if controller.is_running() { "sorting" } else { "idle" };
    format!(
        "Sorting Algorithm Visualizer - {} | size {} | speed {} | {}",
        controller.algorithm(),
        controller.size(),
        controller.speed(),
        state
    )
}

/// Applies one command. Returns `false` when the app should exit.
fn handle_command(
    command: Command,
    controller: &mut Controller,
    window: &mut Window,
    renderer: &mut BarRenderer,
) -> Result<bool, Error> {
    let size_step = controller.config().size_step;
    let speed_step = controller.config().speed_step;

    let result = match command {
        Command::Quit => return Ok(false),
        Command::Resize(w, h) => {
            window.resize(w, h)?;
            renderer.resize(w, h);
            Ok(())
        }
        Command::StartStop => controller.toggle(),
        Command::Cancel => {
            controller.cancel();
            Ok(())
        }
        Command::Reset => controller.reset(),
        Command::Grow => controller.set_size(controller.size() + size_step),
        Command::Shrink => controller.set_size(controller.size().saturating_sub(size_step)),
        Command::Faster => {
            controller.set_speed(controller.speed() + speed_step);
            Ok(())
        }
        Command::Slower => {
            controller.set_speed(controller.speed().saturating_sub(speed_step));
            Ok(())
        }
        Command::NextAlgorithm => controller.next_algorithm(),
        Command::SelectAlgorithm(algorithm) => controller.select_algorithm(algorithm),
        Command::Screenshot => {
            match renderer.save_screenshot(&controller.config().screenshot_dir) {
                Ok(path) => info!(path = %path.display(), "screenshot saved"),
                // A failed write must not end the session.
                Err(err) => warn!(error = %err, "screenshot failed"),
            }
            Ok(())
        }
    };

    match result {
        // Selector is locked while sorting; ignore like a disabled widget.
        Err(ControlError::RunActive) => warn!(?command, "ignored while a sort is running"),
        other => other?,
    }
    Ok(true)
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sortviz=info")),
        )
        .init();

    let config = Config::default();
    let mut controller = Controller::new(config.clone())?;
    let mut window = Window::new(&window_title(&controller), config.window_width, config.window_height)?;
    let mut renderer = BarRenderer::new(window.width(), window.height());
    let mut frame_limiter = FrameLimiter::new(&window, config.fps);

    let mut title = String::new();
    let mut is_running = true;

    while is_running {
        for command in window.poll_commands() {
            if !handle_command(command, &mut controller, &mut window, &mut renderer)? {
                is_running = false;
            }
        }

        if let Some(report) = controller.poll()? {
            info!(
                algorithm = %report.algorithm,
                steps = report.outcome.steps,
                cancelled = report.outcome.is_cancelled(),
                "run collected"
            );
        }

        let next_title = window_title(&controller);
        if next_title != title {
            window.set_title(&next_title)?;
            title = next_title;
        }

        renderer.draw_bars(
            controller.values(),
            config.max_bar_height,
            controller.highlight(),
        );
        window.present(renderer.as_bytes())?;

        frame_limiter.wait_and_get_delta(&window);
    }

    controller.cancel();
    controller.wait()?;
    Ok(())
}
