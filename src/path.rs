//! Renderable path descriptor.
//!
//! The engine never paints; it hands the rendering layer an ordered list of
//! drawing instructions fully determined by the samples and the plot
//! geometry.

use eyre::{bail, Result};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    CubicTo {
        ctrl1: Vec2,
        ctrl2: Vec2,
        to: Vec2,
    },
    LineTo(Vec2),
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

#[derive(Debug, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, point: Vec2) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn cubic_to(&mut self, ctrl1: Vec2, ctrl2: Vec2, to: Vec2) {
        self.commands.push(PathCommand::CubicTo { ctrl1, ctrl2, to });
    }

    pub fn line_to(&mut self, point: Vec2) {
        self.commands.push(PathCommand::LineTo(point));
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn build(self) -> Result<Path> {
        if self.commands.is_empty() {
            bail!("path has no commands");
        }
        if !matches!(self.commands[0], PathCommand::MoveTo(_)) {
            bail!("path must start with a move-to");
        }
        Ok(Path {
            commands: self.commands,
        })
    }
}
