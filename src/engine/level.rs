//! Level assignment — converts classified fragments into nesting levels.

use regex::Regex;

use crate::model::{BlockKind, ClassifiedFragment, HeadingLevel, OutlineEntry};

use super::EngineOptions;

/// Per-document state threaded through the assignment pass.
///
/// `indent_stack` records the x-position of each currently open
/// un-numbered heading level; `last_heading_level` is 0 until the first
/// heading is emitted. Both are fresh for every engine run.
#[derive(Debug, Clone, Default)]
pub struct LevelState {
    /// Open indentation levels, shallowest first. Depth never exceeds the
    /// configured maximum level.
    pub indent_stack: Vec<f32>,
    /// Level of the most recently emitted heading, 0 for none.
    pub last_heading_level: u8,
}

impl LevelState {
    /// Create fresh state for one document run.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Stateful pass assigning a final nesting level to each classified
/// fragment in document order.
pub struct LevelAssigner {
    options: EngineOptions,
    numbered_prefix: Regex,
}

impl LevelAssigner {
    /// Create a new level assigner with the given options.
    pub fn new(options: EngineOptions) -> Self {
        Self {
            options,
            numbered_prefix: Regex::new(r"^(\d+(?:\.\d+)*)(\.)?\s").unwrap(),
        }
    }

    /// Assign a level to one classified fragment, updating state, and
    /// emit the resulting outline entry.
    pub fn assign(&self, state: &mut LevelState, classified: &ClassifiedFragment) -> OutlineEntry {
        let fragment = &classified.fragment;

        let level = match classified.kind {
            // List items nest one step under the nearest heading and leave
            // the state untouched.
            BlockKind::ListItem => (state.last_heading_level + 1).min(self.options.max_level),
            BlockKind::Heading => {
                let level = if let Some(depth) = self.numbering_depth(&fragment.text) {
                    self.reseed(state, depth, fragment.x_pos)
                } else {
                    self.indent_level(state, fragment.x_pos)
                };
                let level = level.clamp(1, self.options.max_level);
                state.last_heading_level = level;
                level
            }
        };

        OutlineEntry::new(
            HeadingLevel::from_depth(level),
            fragment.text.clone(),
            fragment.page,
        )
    }

    /// Depth encoded by an explicit numbering prefix, if any.
    ///
    /// "1." is depth 1, "1.1" depth 2, "1.1.1" depth 3; deeper prefixes
    /// clamp to the maximum later. A bare "1 Title" carries no dot and no
    /// explicit level, so it falls back to indentation inference.
    fn numbering_depth(&self, text: &str) -> Option<u8> {
        let caps = self.numbered_prefix.captures(text)?;
        let dots = caps[1].matches('.').count();
        if dots == 0 && caps.get(2).is_none() {
            return None;
        }
        Some(dots as u8 + 1)
    }

    /// Numbering overrides indentation state, then reseeds the stack at
    /// this fragment's x-position so later un-numbered headings at
    /// shallower indentation pop back to level 1.
    fn reseed(&self, state: &mut LevelState, depth: u8, x: f32) -> u8 {
        let level = depth.min(self.options.max_level);
        state.indent_stack.clear();
        state.indent_stack.resize(level as usize, x);
        log::debug!("numbered heading depth {depth} reseeds indent stack at x={x:.1}");
        level
    }

    /// Infer a level from horizontal position alone.
    fn indent_level(&self, state: &mut LevelState, x: f32) -> u8 {
        let tolerance = self.options.indent_tolerance;

        // Close out levels that were indented deeper than this fragment.
        while let Some(&top) = state.indent_stack.last() {
            if top > x + tolerance {
                state.indent_stack.pop();
            } else {
                break;
            }
        }

        let deeper = match state.indent_stack.last() {
            None => true,
            Some(&top) => x > top + tolerance,
        };
        if deeper && (state.indent_stack.len() as u8) < self.options.max_level {
            state.indent_stack.push(x);
            log::debug!(
                "opened indent level {} at x={x:.1}",
                state.indent_stack.len()
            );
        }

        (state.indent_stack.len() as u8).max(1)
    }
}
