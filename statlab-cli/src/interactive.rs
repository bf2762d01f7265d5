//! Menu-driven session: pick an input modality, enter data, pick a statistic.
//!
//! Every prompt repeats until it gets a valid answer. End of input at any
//! prompt ends the session.

use anyhow::Result;
use statlab_core::data::{
    expand_stem_leaf, load_from_path, load_reference_heights, parse_frequencies, parse_list,
    parse_stem_leaf_row, RowOutcome,
};
use statlab_core::{Dataset, Statistic, StatlabConfig};
use std::io::{BufRead, Write};
use std::path::Path;

use crate::render::{format_stat, write_error};

const SOURCE_MENU: &str = "
What kind of data would like to analyse?
(1) A list of space-separated data
(2) Values and their frequencies
(3) Stem-and-leaf data
(4) Filepath (csv style)
(5) Sample (heights.txt)
Enter the number next to your choice: ";

const STATISTIC_MENU: &str = "Choose an option for what you would like to calculate;
(1) Mean (2) Median
(3) Mode (4) Range
(5) Interquartile Range
(6) Standard Deviation
(7) Five-number summary
Enter the number next to your choice: ";

const NEXT_STEP_MENU: &str = "
What would you like to do next?
(1) Perform additional statistical analysis on current data
(2) Enter new data of the same type as before
(3) Start over from the beginning
(4) Exit
";

/// Input modality, numbered as in the source menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    List,
    Frequencies,
    StemLeaf,
    File,
    Heights,
}

impl InputKind {
    fn from_menu_index(index: usize) -> Option<Self> {
        match index {
            1 => Some(InputKind::List),
            2 => Some(InputKind::Frequencies),
            3 => Some(InputKind::StemLeaf),
            4 => Some(InputKind::File),
            5 => Some(InputKind::Heights),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextStep {
    AnalyseAgain,
    NewDataSameKind,
    StartOver,
    Exit,
}

pub struct Session<'a, R, W> {
    input: R,
    out: W,
    config: &'a StatlabConfig,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(input: R, out: W, config: &'a StatlabConfig) -> Self {
        Self { input, out, config }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        let mut next = NextStep::StartOver;
        let mut kind = InputKind::List;
        let mut data: Option<Dataset> = None;

        loop {
            if next == NextStep::StartOver {
                match self.prompt_index(SOURCE_MENU, (1, 5), true)? {
                    Some(index) => kind = InputKind::from_menu_index(index).unwrap_or(kind),
                    None => break,
                }
            }
            if next != NextStep::AnalyseAgain || data.is_none() {
                match self.read_dataset(kind)? {
                    Some(d) => data = Some(d),
                    None => break,
                }
            }
            let Some(dataset) = data.as_ref() else {
                break;
            };

            let Some(stat) = self
                .prompt_index(STATISTIC_MENU, (1, 7), false)?
                .and_then(Statistic::from_menu_index)
            else {
                break;
            };
            match stat.compute(dataset, self.config.analysis.quartile_policy) {
                Ok(value) => writeln!(self.out, "{}", format_stat(stat, &value))?,
                Err(e) => self.error(&e.to_string())?,
            }

            next = match self.prompt_index(NEXT_STEP_MENU, (1, 4), false)? {
                Some(1) => NextStep::AnalyseAgain,
                Some(2) => NextStep::NewDataSameKind,
                Some(3) => NextStep::StartOver,
                _ => NextStep::Exit,
            };
            if next == NextStep::Exit {
                break;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn error(&mut self, msg: &str) -> Result<()> {
        write_error(&mut self.out, msg, self.config.output.color_errors)?;
        Ok(())
    }

    /// Print `prompt` and read one line; `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask for an integer in `[lo, hi]`. With `nullable`, a blank answer
    /// returns `None` like end of input does.
    fn prompt_index(
        &mut self,
        prompt: &str,
        (lo, hi): (usize, usize),
        nullable: bool,
    ) -> Result<Option<usize>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            let answer = line.trim();
            if answer.is_empty() {
                if nullable {
                    return Ok(None);
                }
                self.error("Value must be a number")?;
                continue;
            }
            match answer.parse::<usize>() {
                Ok(value) if (lo..=hi).contains(&value) => return Ok(Some(value)),
                Ok(_) => self.error(&format!("Value must be between {lo} and {hi}"))?,
                Err(_) => self.error("Input parsing error.")?,
            }
        }
    }

    fn read_dataset(&mut self, kind: InputKind) -> Result<Option<Dataset>> {
        loop {
            let values = match kind {
                InputKind::List => self.read_list()?,
                InputKind::Frequencies => self.read_frequencies()?,
                InputKind::StemLeaf => self.read_stem_leaf()?,
                InputKind::File => self.read_file()?,
                InputKind::Heights => self.read_heights()?,
            };
            let Some(values) = values else {
                return Ok(None);
            };
            match Dataset::new(values) {
                Ok(dataset) => return Ok(Some(dataset)),
                Err(e) => self.error(&e.to_string())?,
            }
        }
    }

    fn read_list(&mut self) -> Result<Option<Vec<f64>>> {
        let prompt = "
You have selected to enter space-separated data.
Enter or paste the list of data separated by spaces:
";
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse_list(&line) {
                Ok(values) => return Ok(Some(values)),
                Err(e) => self.error(&e.to_string())?,
            }
        }
    }

    fn read_frequencies(&mut self) -> Result<Option<Vec<f64>>> {
        let values_prompt = "
You have selected to enter VALUES and their FREQUENCIES.
First, enter or paste the VALUES, separated by spaces: ";
        let frequencies_prompt = "
Now enter the corresponding FREQUENCIES separated by spaces: ";

        let values_line = loop {
            let Some(line) = self.read_line(values_prompt)? else {
                return Ok(None);
            };
            match parse_list(&line) {
                Ok(_) => break line,
                Err(e) => self.error(&e.to_string())?,
            }
        };
        loop {
            let Some(line) = self.read_line(frequencies_prompt)? else {
                return Ok(None);
            };
            match parse_frequencies(&values_line, &line) {
                Ok(values) => return Ok(Some(values)),
                Err(e) => self.error(&e.to_string())?,
            }
        }
    }

    fn read_stem_leaf(&mut self) -> Result<Option<Vec<f64>>> {
        writeln!(
            self.out,
            "
You have selected stem-and-leaf data.
Enter data row by row, separated by spaces.
Press enter without typing anything when done."
        )?;

        let mut rows = Vec::new();
        loop {
            let Some(line) = self.read_line("Enter row: ")? else {
                return Ok(None);
            };
            match parse_stem_leaf_row(&line) {
                Ok(RowOutcome::End) if rows.is_empty() => {
                    self.error("You must enter at least one row!")?
                }
                Ok(RowOutcome::End) => break,
                Ok(RowOutcome::NoLeaves { .. }) => {
                    self.error("This row will be ignored (no leaves)!")?
                }
                Ok(RowOutcome::Row(row)) => rows.push(row),
                Err(e) => self.error(&e.to_string())?,
            }
        }
        Ok(Some(expand_stem_leaf(&rows)))
    }

    fn read_file(&mut self) -> Result<Option<Vec<f64>>> {
        loop {
            let Some(line) = self.read_line("filepath: ")? else {
                return Ok(None);
            };
            let path = Path::new(line.trim());
            if !path.exists() {
                self.error("Filepath doesn't exist.")?;
                continue;
            }
            match load_from_path(path) {
                Ok(values) => return Ok(Some(values)),
                Err(e) => self.error(&e.to_string())?,
            }
        }
    }

    fn read_heights(&mut self) -> Result<Option<Vec<f64>>> {
        if !self.config.dataset.heights_cache.exists() {
            writeln!(
                self.out,
                "Downloading {}...",
                self.config.dataset.heights_cache.display()
            )?;
        }
        match load_reference_heights(&self.config.dataset) {
            Ok(values) => Ok(Some(values)),
            Err(e) => {
                self.error(&e.to_string())?;
                Ok(None)
            }
        }
    }
}
