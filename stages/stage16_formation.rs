//! Stage 16: an enemy formation that drifts, bounces, descends and shoots back.
//!
//! Player bullets down enemies on contact, enemies return fire from a shared
//! pool of twenty bullets. This stage runs a wider grid of four rows than the
//! final game.

use invaders::{
    sim::{Simulation, SimulationConfig},
    Frame, Game, GameConfig, Input, ShaderProgram, Shape,
};

/// Stage with the complete simulation as colored quads.
struct Stage {
    /// Playfield with the full enemy grid.
    simulation: Simulation,
    /// Program for untextured colored geometry.
    program: ShaderProgram,
    /// Quad for the player ship.
    ship: Shape,
    /// Quad for every player bullet in flight.
    bullets: Shape,
    /// Quad for every living enemy.
    enemies: Shape,
    /// Quad for every enemy bullet in flight.
    enemy_bullets: Shape,
}

impl Game for Stage {
    fn update(&mut self, input: &Input) -> bool {
        self.simulation
            .set_move_intent(input.left().held(), input.right().held());

        if input.fire().held() {
            self.simulation.try_fire();
        } else {
            self.simulation.release_fire();
        }

        self.simulation.tick();

        true
    }

    fn render(&mut self, frame: &mut Frame) {
        if self.simulation.take_redraw() {
            self.ship.clear();
            self.ship.push(self.simulation.player().position());

            self.bullets.clear();
            for (_, bullet) in self.simulation.player().bullets().iter_active() {
                self.bullets.push(bullet.position());
            }

            self.enemies.clear();
            for (_, enemy) in self.simulation.formation().iter_active() {
                self.enemies.push(enemy.position());
            }

            self.enemy_bullets.clear();
            for (_, bullet) in self.simulation.formation().bullets().iter_active() {
                self.enemy_bullets.push(bullet.position());
            }
        }

        self.ship.upload(frame);
        self.bullets.upload(frame);
        self.enemies.upload(frame);
        self.enemy_bullets.upload(frame);

        let mut pass = frame.pass();
        self.program.bind(&mut pass);
        self.ship.draw(&mut pass);
        self.bullets.draw(&mut pass);
        self.enemies.draw(&mut pass);
        self.enemy_bullets.draw(&mut pass);
    }
}

fn main() -> miette::Result<()> {
    invaders::run(
        GameConfig::default().with_title("invaders - stage 16: formation"),
        |graphics| {
            // Slow ship and small bullets as before, but now with a grid of
            // four rows to shoot at
            let config = SimulationConfig::default()
                .with_player_speed(3.0)
                .with_player_bullets(7, 5.0)
                .with_grid(4, 10);

            let bullet_radius = config.player_bullet_radius;
            let enemy_radius = config.enemy_radius;
            let enemy_bullet_radius = config.enemy_bullet_radius;
            let simulation = Simulation::new(config);

            let program = ShaderProgram::flat(
                graphics,
                "shaders/flat/vertex.wgsl",
                "shaders/flat/fragment.wgsl",
            )?;

            let ship = Shape::quad(graphics, 24.0, [0.0, 0.4, 0.8]);
            let bullets = Shape::quad(graphics, bullet_radius, [0.9, 0.2, 0.1]);
            let enemies = Shape::quad(graphics, enemy_radius, [0.5, 0.1, 0.6]);
            let enemy_bullets = Shape::quad(graphics, enemy_bullet_radius, [0.9, 0.6, 0.1]);

            Ok(Stage {
                simulation,
                program,
                ship,
                bullets,
                enemies,
                enemy_bullets,
            })
        },
    )
}
