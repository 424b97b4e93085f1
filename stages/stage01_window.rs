//! Stage 01: open a window and clear it to a single color.
//!
//! Nothing is drawn yet, the render pass only clears the frame.

use invaders::{Frame, Game, GameConfig, Input};

/// Stage without any state.
struct Stage;

impl Game for Stage {
    fn update(&mut self, _input: &Input) -> bool {
        true
    }

    fn render(&mut self, frame: &mut Frame) {
        // Opening the pass clears the frame to the background color
        frame.pass();
    }
}

fn main() -> miette::Result<()> {
    invaders::run(
        GameConfig::default()
            .with_title("invaders - stage 01: window")
            // The tutorial starts out clearing to white
            .with_background_color(0xFFFF_FFFF),
        |_graphics| Ok(Stage),
    )
}
