use clap::{Args, Parser, Subcommand};

use crate::domain::SelectionCounts;

#[derive(Parser)]
#[command(name = "newsmix")]
#[command(about = "Mix headlines from fixed weather-news sources into an HTML digest or SQLite log")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// How many headlines to take from each source. Zero leaves a source out;
/// anything above what the source currently offers is rejected.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct CountArgs {
    /// Number of ABC News headlines to include
    #[arg(long, default_value_t = 0)]
    pub abc: usize,

    /// Number of SBS News headlines to include
    #[arg(long, default_value_t = 0)]
    pub sbs: usize,

    /// Number of Weatherzone headlines to include
    #[arg(long, default_value_t = 0)]
    pub weatherzone: usize,

    /// Number of Courier Mail headlines to include
    #[arg(long, default_value_t = 0)]
    pub courier_mail: usize,
}

impl From<CountArgs> for SelectionCounts {
    fn from(args: CountArgs) -> Self {
        SelectionCounts {
            abc: args.abc,
            sbs: args.sbs,
            weatherzone: args.weatherzone,
            courier_mail: args.courier_mail,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the selected headlines to stdout
    Preview {
        #[command(flatten)]
        counts: CountArgs,
    },

    /// Write the selected headlines to the HTML digest file
    Export {
        #[command(flatten)]
        counts: CountArgs,

        /// Output file path (overrides NEWSMIX_HTML_PATH)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Replace the selected_stories table with the selected headlines
    Save {
        #[command(flatten)]
        counts: CountArgs,
    },

    /// Show how many headlines each source currently offers
    Counts {
        /// Print the counts as JSON
        #[arg(long)]
        json: bool,
    },
}
