//! Canonical text printout for decoded patterns.

use std::fmt::{self, Write};

use crate::{Pattern, Track};

const BLOCK_SIZE: usize = 4;
const BLOCK_SEPARATOR: char = '|';
const SYMBOL_STEP_ON: char = 'x';
const SYMBOL_STEP_OFF: char = '-';

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved with HW Version: {}", self.version)?;
        writeln!(f, "Tempo: {}", self.tempo)?;
        for track in &self.tracks {
            writeln!(f, "{track}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}\t", self.id, self.name)?;
        for (i, &enabled) in self.steps.iter().enumerate() {
            if i % BLOCK_SIZE == 0 {
                f.write_char(BLOCK_SEPARATOR)?;
            }
            f.write_char(if enabled { SYMBOL_STEP_ON } else { SYMBOL_STEP_OFF })?;
        }
        f.write_char(BLOCK_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Pattern, Track};

    fn four_on_the_floor() -> [bool; 16] {
        let mut steps = [false; 16];
        for slot in (0..16).step_by(4) {
            steps[slot] = true;
        }
        steps
    }

    #[test]
    fn renders_title_tempo_and_tracks() {
        let pattern = Pattern {
            version: "0.808-alpha".to_string(),
            tempo: 120.0,
            tracks: vec![Track {
                id: 0,
                name: "kck".to_string(),
                steps: four_on_the_floor(),
            }],
        };

        assert_eq!(
            pattern.to_string(),
            "Saved with HW Version: 0.808-alpha\nTempo: 120\n(0) kck\t|x---|x---|x---|x---|\n"
        );
    }

    #[test]
    fn fractional_tempo_keeps_fraction() {
        let pattern = Pattern {
            version: "0.909".to_string(),
            tempo: 98.4,
            tracks: Vec::new(),
        };

        assert_eq!(
            pattern.to_string(),
            "Saved with HW Version: 0.909\nTempo: 98.4\n"
        );
    }

    #[test]
    fn empty_track_list_renders_header_only() {
        let pattern = Pattern {
            version: "v1".to_string(),
            tempo: 240.0,
            tracks: Vec::new(),
        };

        assert_eq!(pattern.to_string(), "Saved with HW Version: v1\nTempo: 240\n");
    }
}
