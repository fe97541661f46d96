//! Event block parsing
use std::str::FromStr;

#[cfg(feature = "log")]
use log::debug;

use crate::{diagnostics::Diagnostics, error::Error, event::Event, pick::Pick, summary::Summary};

/*
 * Summary lines start with the origin date (YYYYMMDD)
 */
fn is_summary_line(line: &str) -> bool {
    line.len() >= 8 && line.bytes().take(8).all(|b| b.is_ascii_digit())
}

/*
 * Archive terminator lines only have a blank station column
 */
fn is_terminator_line(line: &str) -> bool {
    line.chars().take(5).all(|c| c.is_whitespace())
}

impl Event {
    /// Resets this [Event] and rebuilds it from `lines`: the first line
    /// is the summary line, all following lines are picks. Lines that
    /// cannot be decoded and picks that cannot be inserted are reported
    /// and skipped.
    pub fn unpack<S: AsRef<str>>(&mut self, lines: &[S]) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        self.clear();

        let mut lines = lines.iter().map(|line| line.as_ref()).enumerate();

        if let Some((index, line)) = lines.next() {
            diagnostics.set_line(Some(index));
            match Summary::unpack(line) {
                Ok((summary, events)) => {
                    diagnostics.merge(events);
                    self.summary = summary;
                },
                Err(e) => diagnostics.error(format!("summary line dropped: {}", e)),
            }
        }

        for (index, line) in lines {
            diagnostics.set_line(Some(index));
            let pick = match Pick::unpack(line) {
                Ok((pick, events)) => {
                    diagnostics.merge(events);
                    pick
                },
                Err(e) => {
                    diagnostics.error(format!("pick line dropped: {}", e));
                    continue;
                },
            };
            let inserted = if pick.p_remark().is_some() {
                self.add_p_pick(pick)
            } else {
                self.add_s_pick(pick)
            };
            if let Err(e) = inserted {
                diagnostics.error(format!("pick skipped: {}", e));
            }
        }

        diagnostics.set_line(None);

        #[cfg(feature = "log")]
        debug!(
            "event {:?}: {} picks",
            self.summary.event_id(),
            self.picks.len()
        );

        diagnostics
    }

    /// Builds an [Event] from `lines`, see [Self::unpack].
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> (Self, Diagnostics) {
        let mut event = Self::default();
        let diagnostics = event.unpack(lines);
        (event, diagnostics)
    }
}

impl FromStr for Event {
    type Err = Error;
    /// Decodes one event block. Blank lines and archive
    /// terminator lines are ignored.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let lines = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>();

        let summary = lines
            .first()
            .ok_or_else(|| Error::MalformedInput("empty event block".to_string()))?;

        let mut block = vec![*summary];
        block.extend(
            lines
                .iter()
                .skip(1)
                .filter(|line| !is_terminator_line(line)),
        );

        let (event, _) = Self::from_lines(&block);
        Ok(event)
    }
}

/*
 * Decodes a pending block of (line index, line) pairs
 */
fn flush(block: Option<Vec<(usize, &str)>>, events: &mut Vec<Event>, diagnostics: &mut Diagnostics) {
    if let Some(block) = block {
        let lines = block.iter().map(|(_, line)| *line).collect::<Vec<_>>();
        let (event, mut block_diagnostics) = Event::from_lines(&lines);
        block_diagnostics.map_lines(|i| block.get(i).map_or(i, |(index, _)| *index));
        diagnostics.merge(block_diagnostics);
        events.push(event);
    }
}

/// Decodes all events of a Y2000 archive. Each summary line opens
/// a new event, terminator lines close it. Reported [Diagnostics]
/// are attached to line indexes within `content`.
pub fn events_from_str(content: &str) -> (Vec<Event>, Diagnostics) {
    let mut events = Vec::new();
    let mut diagnostics = Diagnostics::new();

    let mut block: Option<Vec<(usize, &str)>> = None;

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if is_summary_line(line) {
            flush(block.take(), &mut events, &mut diagnostics);
            block = Some(vec![(index, line)]);
        } else if is_terminator_line(line) {
            flush(block.take(), &mut events, &mut diagnostics);
        } else {
            match block.as_mut() {
                Some(lines) => lines.push((index, line)),
                None => {
                    diagnostics.set_line(Some(index));
                    diagnostics.error("pick line outside of any event");
                    diagnostics.set_line(None);
                },
            }
        }
    }

    flush(block, &mut events, &mut diagnostics);

    (events, diagnostics)
}
