use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Abc,
    Sbs,
    Weatherzone,
    CourierMail,
}

impl Source {
    /// Fixed ordering shared by preview, digest and save.
    pub const ALL: [Source; 4] = [
        Source::Abc,
        Source::Sbs,
        Source::Weatherzone,
        Source::CourierMail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Abc => "abc",
            Source::Sbs => "sbs",
            Source::Weatherzone => "weatherzone",
            Source::CourierMail => "courier_mail",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Source::Abc => "ABC News",
            Source::Sbs => "SBS News",
            Source::Weatherzone => "Weatherzone",
            Source::CourierMail => "Courier Mail",
        }
    }

    /// Live sources are fetched over the network; the rest come from local
    /// XML snapshots.
    pub fn is_live(&self) -> bool {
        matches!(self, Source::Abc | Source::Sbs)
    }
}

impl std::str::FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abc" => Ok(Source::Abc),
            "sbs" => Ok(Source::Sbs),
            "weatherzone" => Ok(Source::Weatherzone),
            "courier_mail" => Ok(Source::CourierMail),
            _ => Err(format!("Unknown source: {}", s)),
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
