use crate::domain::Source;

/// Per-source selection sizes supplied by the CLI. Zero means the source is
/// left out of the action entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCounts {
    pub abc: usize,
    pub sbs: usize,
    pub weatherzone: usize,
    pub courier_mail: usize,
}

impl SelectionCounts {
    pub fn get(&self, source: Source) -> usize {
        match source {
            Source::Abc => self.abc,
            Source::Sbs => self.sbs,
            Source::Weatherzone => self.weatherzone,
            Source::CourierMail => self.courier_mail,
        }
    }

    pub fn is_empty(&self) -> bool {
        Source::ALL.iter().all(|s| self.get(*s) == 0)
    }
}
