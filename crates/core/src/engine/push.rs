//! Raw appends to the document body.
//!
//! None of these can fail. Any `Display` value is accepted; the `c`-prefixed
//! variants clean the chosen text first.

use super::Engine;
use crate::buffer::Partition;
use crate::escape::clean;
use std::fmt::Display;
use texloom_types::Fragment;

impl Engine {
    pub fn push(&mut self, value: impl Display) {
        self.buffer.append(Partition::Body, Fragment::display(value));
    }

    /// Appends `value`, or an empty fragment when `condition` is false.
    pub fn push_if(&mut self, condition: bool, value: impl Display) {
        let fragment = if condition {
            Fragment::display(value)
        } else {
            Fragment::empty()
        };
        self.buffer.append(Partition::Body, fragment);
    }

    pub fn push_if_else(&mut self, condition: bool, when_true: impl Display, when_false: impl Display) {
        let fragment = if condition {
            Fragment::display(when_true)
        } else {
            Fragment::display(when_false)
        };
        self.buffer.append(Partition::Body, fragment);
    }

    pub fn cpush(&mut self, value: impl Display) {
        self.push(clean(&value.to_string()));
    }

    pub fn cpush_if(&mut self, condition: bool, value: impl Display) {
        let text = if condition { clean(&value.to_string()) } else { String::new() };
        self.push(text);
    }

    pub fn cpush_if_else(&mut self, condition: bool, when_true: impl Display, when_false: impl Display) {
        let text = if condition {
            clean(&when_true.to_string())
        } else {
            clean(&when_false.to_string())
        };
        self.push(text);
    }

    /// Removes the last body fragment.
    pub fn pop(&mut self) -> Option<Fragment> {
        self.buffer.remove_last(Partition::Body)
    }

    pub fn pop_if(&mut self, condition: bool) -> Option<Fragment> {
        if condition { self.pop() } else { None }
    }
}
