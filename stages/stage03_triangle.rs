//! Stage 03: compile a shader program from two files and draw a triangle.
//!
//! The triangle spans most of the screen in world units, proving the
//! orthographic projection maps the 640x480 world onto the window.

use glam::Vec3;
use invaders::{ColoredVertex, Frame, Game, GameConfig, Input, ShaderProgram, Shape};

/// Stage drawing a single static triangle.
struct Stage {
    /// Program for untextured colored geometry.
    program: ShaderProgram,
    /// The triangle with one batched copy.
    triangle: Shape,
}

impl Game for Stage {
    fn update(&mut self, _input: &Input) -> bool {
        true
    }

    fn render(&mut self, frame: &mut Frame) {
        self.triangle.upload(frame);

        let mut pass = frame.pass();
        self.program.bind(&mut pass);
        self.triangle.draw(&mut pass);
    }
}

fn main() -> miette::Result<()> {
    invaders::run(
        GameConfig::default().with_title("invaders - stage 03: triangle"),
        |graphics| {
            let program = ShaderProgram::flat(
                graphics,
                "shaders/flat/vertex.wgsl",
                "shaders/flat/fragment.wgsl",
            )?;

            // One corner at the top center, two at the bottom edges, with a
            // color interpolated between them
            let vertices = [
                ColoredVertex::new(Vec3::new(320.0, 460.0, 0.0), [1.0, 0.0, 0.0]),
                ColoredVertex::new(Vec3::new(20.0, 20.0, 0.0), [0.0, 1.0, 0.0]),
                ColoredVertex::new(Vec3::new(620.0, 20.0, 0.0), [0.0, 0.0, 1.0]),
            ];
            let mut triangle = Shape::from_vertices(graphics, &vertices, &[0, 1, 2]);

            // A single copy without a translation
            triangle.push(Vec3::ZERO);

            Ok(Stage { program, triangle })
        },
    )
}
