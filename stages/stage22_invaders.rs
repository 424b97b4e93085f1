//! Stage 22: the complete game.
//!
//! All entities draw from sprite sheets, the player bolts and the enemy
//! bolts share one sheet cut into different rows. This stage runs the final
//! tuning, the fast ship, the big bullets and the three-row grid.

use invaders::{
    sim::{Simulation, SimulationConfig},
    Frame, Game, GameConfig, Input, ShaderProgram, Sprite,
};

/// UV rectangles of the two ship frames, the center column of the sheet.
const SHIP_FRAMES: [[f32; 4]; 2] = [[0.4, 0.5, 0.6, 1.0], [0.4, 0.0, 0.6, 0.5]];

/// UV rectangles of the two enemy frames, side by side on the sheet.
const ENEMY_FRAMES: [[f32; 4]; 2] = [[0.0, 0.0, 0.5, 1.0], [0.5, 0.0, 1.0, 1.0]];

/// UV rectangles of the player bolt frames, the bottom row of the bolt sheet.
const PLAYER_BOLT_FRAMES: [[f32; 4]; 2] = [[0.0, 0.5, 0.5, 1.0], [0.5, 0.5, 1.0, 1.0]];

/// UV rectangles of the enemy bolt frames, the top row of the bolt sheet.
const ENEMY_BOLT_FRAMES: [[f32; 4]; 2] = [[0.0, 0.0, 0.5, 0.5], [0.5, 0.0, 1.0, 0.5]];

/// Stage with the full simulation drawn from sprite sheets.
struct Stage {
    /// Playfield with the final tuning.
    simulation: Simulation,
    /// Program for textured sprite quads.
    program: ShaderProgram,
    /// Two-frame ship sheet.
    ship: Sprite,
    /// Two-frame enemy sheet, shared by every living enemy.
    enemies: Sprite,
    /// Bolt sheet cut to the player row.
    bullets: Sprite,
    /// Bolt sheet cut to the enemy row.
    enemy_bullets: Sprite,
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
            let player = self.simulation.player();
            self.ship.push(player.frame(), player.position());

            self.bullets.clear();
            for (_, bullet) in self.simulation.player().bullets().iter_active() {
                self.bullets.push(bullet.frame(), bullet.position());
            }

            self.enemies.clear();
            for (_, enemy) in self.simulation.formation().iter_active() {
                self.enemies.push(enemy.frame(), enemy.position());
            }

            self.enemy_bullets.clear();
            for (_, bullet) in self.simulation.formation().bullets().iter_active() {
                self.enemy_bullets.push(bullet.frame(), bullet.position());
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
        GameConfig::default().with_title("invaders - stage 22: invaders"),
        |graphics| {
            // The final tuning is the default configuration
            let config = SimulationConfig::default();

            let bullet_radius = config.player_bullet_radius;
            let enemy_radius = config.enemy_radius;
            let enemy_bullet_radius = config.enemy_bullet_radius;
            let simulation = Simulation::new(config);

            let program = ShaderProgram::textured(
                graphics,
                "shaders/sprite/vertex.wgsl",
                "shaders/sprite/fragment.wgsl",
            )?;

            let ship = Sprite::new(graphics, "assets/ship.png", 24.0, &SHIP_FRAMES)?;
            let enemies = Sprite::new(
                graphics,
                "assets/enemy-small.png",
                enemy_radius,
                &ENEMY_FRAMES,
            )?;
            let bullets = Sprite::new(
                graphics,
                "assets/laser-bolts.png",
                bullet_radius,
                &PLAYER_BOLT_FRAMES,
            )?;
            let enemy_bullets = Sprite::new(
                graphics,
                "assets/laser-bolts.png",
                enemy_bullet_radius,
                &ENEMY_BOLT_FRAMES,
            )?;

            Ok(Stage {
                simulation,
                program,
                ship,
                enemies,
                bullets,
                enemy_bullets,
            })
        },
    )
}
