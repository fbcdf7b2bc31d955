//! Rendering bridge
//!
//! Turns a frame's draw commands into one triangle list a GPU host can
//! upload as-is. Command order is kept, so later shapes paint over earlier ones.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use crate::sim::DrawCommand;

/// Triangle list for the given commands, in order
pub fn tessellate(commands: &[DrawCommand]) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for command in commands {
        match *command {
            DrawCommand::Square {
                center,
                half_width,
                color,
            } => vertices.extend(shapes::square(center, half_width, color.to_rgba(1.0))),
            DrawCommand::Polygon {
                center,
                radius,
                color,
                segments,
            } => vertices.extend(shapes::circle(center, radius, color.to_rgba(1.0), segments)),
        }
    }

    vertices
}
