//! Stage 18: replace the player quad with an animated sprite sheet.
//!
//! The ship sheet holds two exhaust frames on top of each other, the
//! simulation's animation counter flips between them three ticks at a time.

use invaders::{
    sim::{Simulation, SimulationConfig},
    Frame, Game, GameConfig, Input, ShaderProgram, Sprite,
};

/// UV rectangles of the two ship frames, the center column of the sheet.
const SHIP_FRAMES: [[f32; 4]; 2] = [[0.4, 0.5, 0.6, 1.0], [0.4, 0.0, 0.6, 0.5]];

/// Stage with only the textured player ship.
struct Stage {
    /// Playfield without enemies or firing.
    simulation: Simulation,
    /// Program for textured sprite quads.
    program: ShaderProgram,
    /// Two-frame ship sheet.
    ship: Sprite,
}

impl Game for Stage {
    fn update(&mut self, input: &Input) -> bool {
        self.simulation
            .set_move_intent(input.left().held(), input.right().held());

        self.simulation.tick();

        true
    }

    fn render(&mut self, frame: &mut Frame) {
        if self.simulation.take_redraw() {
            self.ship.clear();

            // Batch on the frame the animation counter currently shows
            let player = self.simulation.player();
            self.ship.push(player.frame(), player.position());
        }

        self.ship.upload(frame);

        let mut pass = frame.pass();
        self.program.bind(&mut pass);
        self.ship.draw(&mut pass);
    }
}

fn main() -> miette::Result<()> {
    invaders::run(
        GameConfig::default().with_title("invaders - stage 18: sprite sheet"),
        |graphics| {
            let config = SimulationConfig::default()
                .with_player_speed(3.0)
                .with_grid(0, 0);
            let simulation = Simulation::new(config);

            let program = ShaderProgram::textured(
                graphics,
                "shaders/sprite/vertex.wgsl",
                "shaders/sprite/fragment.wgsl",
            )?;

            let ship = Sprite::new(graphics, "assets/ship.png", 24.0, &SHIP_FRAMES)?;

            Ok(Stage {
                simulation,
                program,
                ship,
            })
        },
    )
}
