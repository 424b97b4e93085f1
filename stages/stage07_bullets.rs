//! Stage 07: steer the player ship and fire from a bullet pool.
//!
//! The arrow keys move the ship, clamped to the screen, and space fires one
//! bullet per press from a pool of seven slots. Everything is still drawn as
//! colored quads.

use invaders::{
    sim::{Simulation, SimulationConfig},
    Frame, Game, GameConfig, Input, ShaderProgram, Shape,
};

/// Stage with the player half of the simulation.
struct Stage {
    /// Playfield without any enemies.
    simulation: Simulation,
    /// Program for untextured colored geometry.
    program: ShaderProgram,
    /// Quad for the player ship.
    ship: Shape,
    /// Quad for every player bullet in flight.
    bullets: Shape,
}

impl Game for Stage {
    fn update(&mut self, input: &Input) -> bool {
        self.simulation
            .set_move_intent(input.left().held(), input.right().held());

        // The held flag on the player makes this edge triggered
        if input.fire().held() {
            self.simulation.try_fire();
        } else {
            self.simulation.release_fire();
        }

        self.simulation.tick();

        true
    }

    fn render(&mut self, frame: &mut Frame) {
        // Only rebatch when a tick moved something
        if self.simulation.take_redraw() {
            self.ship.clear();
            self.ship.push(self.simulation.player().position());

            self.bullets.clear();
            for (_, bullet) in self.simulation.player().bullets().iter_active() {
                self.bullets.push(bullet.position());
            }
        }

        self.ship.upload(frame);
        self.bullets.upload(frame);

        let mut pass = frame.pass();
        self.program.bind(&mut pass);
        self.ship.draw(&mut pass);
        self.bullets.draw(&mut pass);
    }
}

fn main() -> miette::Result<()> {
    invaders::run(
        GameConfig::default().with_title("invaders - stage 07: bullets"),
        |graphics| {
            // This stage still uses the slower ship and the small bullets,
            // and spawns no enemies at all
            let config = SimulationConfig::default()
                .with_player_speed(3.0)
                .with_player_bullets(7, 5.0)
                .with_grid(0, 0);

            let bullet_radius = config.player_bullet_radius;
            let simulation = Simulation::new(config);

            let program = ShaderProgram::flat(
                graphics,
                "shaders/flat/vertex.wgsl",
                "shaders/flat/fragment.wgsl",
            )?;

            let ship = Shape::quad(graphics, 24.0, [0.0, 0.4, 0.8]);
            let bullets = Shape::quad(graphics, bullet_radius, [0.9, 0.2, 0.1]);

            Ok(Stage {
                simulation,
                program,
                ship,
                bullets,
            })
        },
    )
}
