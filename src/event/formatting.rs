//! Event block formatting
use crate::{diagnostics::Diagnostics, event::Event};

impl Event {
    /// Formats this [Event]: the summary line followed by all picks,
    /// in insertion order, each line terminated by '\n'.
    /// No archive terminator line is produced.
    pub fn pack(&self) -> String {
        let mut diagnostics = Diagnostics::new();
        self.pack_with(&mut diagnostics)
    }

    /// Formats this [Event], reporting values that could not
    /// be written into `diagnostics`.
    pub fn pack_with(&self, diagnostics: &mut Diagnostics) -> String {
        let mut content = String::with_capacity(165 + 114 * self.picks.len());

        diagnostics.set_line(Some(0));
        content.push_str(&self.summary.pack_with(diagnostics));
        content.push('\n');

        for (index, pick) in self.picks.iter().enumerate() {
            diagnostics.set_line(Some(index + 1));
            content.push_str(&pick.pack_with(diagnostics));
            content.push('\n');
        }

        diagnostics.set_line(None);
        content
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.pack())
    }
}
