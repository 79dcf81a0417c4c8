//! Content of a single generated line.
//!
//! A line is the decimal representation of every value in
//! `0..VALUES_PER_LINE`, after an optional transform, concatenated with no
//! separators.

use crate::constants::{DOUBLING_FACTOR, VALUES_PER_LINE};

/// Transform applied to each value before it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTransform {
    /// Value rendered as-is (`data.txt`)
    Identity,
    /// Value multiplied by [`DOUBLING_FACTOR`] (`data2.txt`)
    Doubled,
}

impl ValueTransform {
    /// Apply the transform to a single value.
    #[must_use]
    pub const fn apply(self, value: u32) -> u32 {
        match self {
            ValueTransform::Identity => value,
            ValueTransform::Doubled => value * DOUBLING_FACTOR,
        }
    }

    /// Append the rendered value to `line`.
    pub fn push_value(self, line: &mut String, value: u32) {
        line.push_str(&self.apply(value).to_string());
    }

    /// Render a complete line body (without the line break).
    #[must_use]
    pub fn render_line(self) -> String {
        let mut line = String::with_capacity(self.line_len());
        for value in 0..VALUES_PER_LINE {
            self.push_value(&mut line, value);
        }
        line
    }

    /// Length in bytes of a rendered line body, computed from digit counts.
    #[must_use]
    pub fn line_len(self) -> usize {
        (0..VALUES_PER_LINE).map(|value| decimal_width(self.apply(value))).sum()
    }
}

fn decimal_width(value: u32) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}
