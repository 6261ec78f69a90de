use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;

mod client;
mod commands;
mod constants;
mod domain;
mod logging;
mod search;
mod state;
mod store;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::search::{
    Locale, ParsedSearch, SearchType, classify, label_long, label_long_in, label_short,
    label_short_in,
};
use crate::state::platform::AppPaths;
use crate::state::{App, Page, StartupOptions};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r"
██╗      ██████╗ ██╗   ██╗██████╗ ███████╗
██║     ██╔═══██╗██║   ██║██╔══██╗██╔════╝
██║     ██║   ██║██║   ██║██████╔╝█████╗
██║     ██║   ██║██║   ██║██╔═══╝ ██╔══╝
███████╗╚██████╔╝╚██████╔╝██║     ███████╗
╚══════╝ ╚═════╝  ╚═════╝ ╚═╝     ╚══════╝
";

/// LOUPE - counterparty checks, deals and team tools for P2P traders
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Page to open on startup
    #[arg(long, value_enum)]
    page: Option<PageArg>,

    /// Look up a counterparty right after startup
    #[arg(long, value_name = "QUERY")]
    search: Option<String>,

    /// Keep all data in memory for this session
    #[arg(long)]
    ephemeral: bool,

    /// Directory for the store and the log file
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print how a search query is recognized
    Classify {
        /// The query; several words are joined with a space
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Print JSON instead of tab-separated fields
        #[arg(long)]
        json: bool,

        /// Language of the search type label
        #[arg(long, value_enum)]
        locale: Option<LocaleArg>,
    },
    /// Display version with ASCII art
    Version,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PageArg {
    Home,
    Deals,
    Team,
    Statistics,
    Settings,
}

impl From<PageArg> for Page {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::Home => Self::Home,
            PageArg::Deals => Self::Deals,
            PageArg::Team => Self::Team,
            PageArg::Statistics => Self::Statistics,
            PageArg::Settings => Self::Settings,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LocaleArg {
    En,
    Ru,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Self::En,
            LocaleArg::Ru => Self::Ru,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Version) => {
            println!("{LOGO}");
            println!("LOUPE v{VERSION}");
            return Ok(());
        }
        Some(Commands::Classify {
            query,
            json,
            locale,
        }) => {
            let parsed = classify(&query.join(" "));
            let locale = locale.map(Locale::from);
            println!("{}", format_classification(&parsed, json, locale)?);
            return Ok(());
        }
        None => {}
    }

    let options = StartupOptions {
        page: cli.page.map(Page::from),
        search: cli.search,
        ephemeral: cli.ephemeral,
        data_dir: cli.data_dir,
    };

    let paths = options
        .data_dir
        .clone()
        .map_or_else(AppPaths::new, AppPaths::with_data_dir);
    // A missing log file must not keep the TUI from starting.
    if let Err(err) = start_file_logging(&paths) {
        eprintln!("loupe: file logging disabled: {err}");
    }

    let mut terminal = tui::init()?;
    let result = match App::new(options).await {
        Ok(mut app) => app.run(&mut terminal).await,
        Err(err) => Err(err),
    };
    tui::restore()?;

    if let Err(err) = &result {
        tracing::error!("application error: {err:?}");
    }
    tracing::info!("shutting down");
    result
}

/// Points the global subscriber at `loupe.log` in the data directory.
fn start_file_logging(paths: &AppPaths) -> Result<()> {
    logging::init(&paths.log_file()?)
}

/// Short and long labels of a type, English unless asked otherwise.
fn type_labels(search_type: SearchType, locale: Locale) -> (&'static str, &'static str) {
    match locale {
        Locale::En => (label_short(search_type), label_long(search_type)),
        Locale::Ru => (
            label_short_in(search_type, locale),
            label_long_in(search_type, locale),
        ),
    }
}

/// Renders a classification for stdout.
///
/// Plain output is `type<TAB>normalized[<TAB>exchange]`; a locale appends
/// the short and long labels of the type.
fn format_classification(
    parsed: &ParsedSearch,
    json: bool,
    locale: Option<Locale>,
) -> Result<String> {
    if json {
        let mut value = serde_json::to_value(parsed)?;
        if let (Some(locale), Some(object)) = (locale, value.as_object_mut()) {
            let (short, long) = type_labels(parsed.search_type, locale);
            object.insert("label".to_string(), long.into());
            object.insert("label_short".to_string(), short.into());
        }
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut fields = vec![
        parsed.search_type.as_str().to_string(),
        parsed.normalized.clone(),
    ];
    if let Some(exchange) = parsed.exchange {
        fields.push(exchange.id().to_string());
    }
    if let Some(locale) = locale {
        let (short, long) = type_labels(parsed.search_type, locale);
        fields.push(short.to_string());
        fields.push(long.to_string());
    }
    Ok(fields.join("\t"))
}
