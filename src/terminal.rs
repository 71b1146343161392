//! Line-based stand-in for the dialog window.
//!
//! Each line replaces the filename text and submits it. An empty line submits
//! the text as shown, end of input cancels.

use crate::templates::dialog::{
    ConfirmOutcome, DialogPhase, NameDialog, LABEL_CANCEL, LABEL_CREATE, LABEL_FILENAME,
};
use std::io::{self, BufRead, Write};

pub struct TerminalDialog<R, O> {
    input: R,
    output: O,
}

impl<R: BufRead, O: Write> TerminalDialog<R, O> {
    pub fn new(input: R, output: O) -> Self {
        Self { input, output }
    }

    /// Drives `dialog` until it is confirmed or cancelled.
    pub fn run<W>(&mut self, dialog: &mut NameDialog<W>) -> io::Result<DialogPhase> {
        writeln!(self.output, "{}", dialog.title())?;
        writeln!(
            self.output,
            "Enter: {}, end of input: {}",
            LABEL_CREATE, LABEL_CANCEL
        )?;

        while !dialog.is_closed() {
            write!(
                self.output,
                "{} [{}]: ",
                LABEL_FILENAME,
                dialog.state().current_text
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                writeln!(self.output, "{}", LABEL_CANCEL)?;
                dialog.on_cancel();
                break;
            }

            let text = line.trim_end_matches(['\r', '\n']);
            if !text.is_empty() {
                dialog.on_text_changed(text);
            }

            match dialog.on_confirm() {
                Ok(ConfirmOutcome::Created(path)) => {
                    writeln!(self.output, "Created {}", path.display())?;
                }
                Ok(ConfirmOutcome::Rejected(problem)) => {
                    writeln!(self.output, "{}", problem)?;
                }
                Ok(ConfirmOutcome::Closed) => {}
                Err(e) => {
                    writeln!(self.output, "Error: {}", e)?;
                }
            }
        }

        Ok(dialog.phase())
    }

    pub fn into_output(self) -> O {
        self.output
    }
}
