// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Session, SessionControl};
use crate::{Dispatch, EditOp, KeyReader, ReadlineError};
use std::io::Write;

impl Session<'_> {
    /// Feed one raw key through the dispatcher and apply whatever it resolves to.
    ///
    /// # Errors
    ///
    /// [`ReadlineError::Interrupted`] for the interrupt op, or whatever the nested search
    /// session returns.
    pub fn handle_key(
        &mut self,
        key: char,
        reader: &mut dyn KeyReader,
        term: &mut dyn Write,
    ) -> Result<SessionControl, ReadlineError> {
        match self.line_state.dispatcher.feed(key) {
            None => Ok(SessionControl::Continue),
            Some(Dispatch::Fallback(action, key)) => {
                action.apply(&mut self.line_state.buffer, key);
                Ok(SessionControl::Continue)
            }
            Some(Dispatch::Op(op)) => self.apply_op(op, reader, term),
        }
    }

    fn apply_op(
        &mut self,
        op: EditOp,
        reader: &mut dyn KeyReader,
        term: &mut dyn Write,
    ) -> Result<SessionControl, ReadlineError> {
        match op {
            EditOp::AcceptLine => return Ok(SessionControl::Accept),
            EditOp::Interrupt => {
                self.erase_overlay(term)?;
                return Err(ReadlineError::Interrupted);
            }
            EditOp::Swallow => {}
            EditOp::HistoryPrevious => {
                if let Some(history) = self.history {
                    let line_state = &mut self.line_state;
                    line_state.navigator.previous(history, &mut line_state.buffer);
                }
            }
            EditOp::HistoryNext => {
                if let Some(history) = self.history {
                    let line_state = &mut self.line_state;
                    line_state.navigator.next(history, &mut line_state.buffer);
                }
            }
            EditOp::InteractiveSearch => self.interactive_search(reader, term)?,
            buffer_op => {
                buffer_op.apply_to_buffer(&mut self.line_state.buffer, self.boundaries);
            }
        }
        Ok(SessionControl::Continue)
    }
}
