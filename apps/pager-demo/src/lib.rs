pub mod app;

use std::fmt::{self, Write as _};

use anyhow::Context as _;
use clap::Parser;
use tumble_core::{LessonIndex, Platform};

/// Repository whose lessons the demo lists.
pub const LESSON_REPO: &str = "rn-tumblr";

#[derive(Parser, Debug)]
#[command(name = "pager-demo")]
#[command(about = "Render the photo pager for a platform and print the node tree", long_about = None)]
pub struct Cli {
    /// Reject platform identifiers other than `ios` and `android`
    #[arg(long)]
    pub strict: bool,

    /// Platform to render for; defaults to the compile target
    #[arg(value_name = "PLATFORM")]
    pub platform: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DemoOptions {
    pub platform: Platform,
}

impl DemoOptions {
    /// Parses `[--strict] [platform]`, without the program name.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let cli = Cli::try_parse_from(std::iter::once("pager-demo".to_owned()).chain(args))?;
        Self::from_cli(cli)
    }

    /// Without a platform argument the compile target is used. Unknown
    /// identifiers fall back to the emulated pager unless `--strict` is given.
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let platform = match cli.platform {
            None => Platform::current(),
            Some(identifier) if cli.strict => identifier
                .parse::<Platform>()
                .with_context(|| format!("--strict rejects platform {identifier:?}"))?,
            Some(identifier) => Platform::from_identifier(&identifier),
        };
        Ok(Self { platform })
    }
}

/// Renders the photo modal and lists the lessons of [`LESSON_REPO`].
pub fn run(options: &DemoOptions) -> Result<String, fmt::Error> {
    let tree = app::photo_modal(&options.platform, &app::PHOTOS);
    log::info!("rendered photo pager for {}", options.platform);

    let mut out = String::new();
    writeln!(out, "=== Photo pager on {} ===", options.platform)?;
    writeln!(out, "{tree}")?;
    writeln!(out, "=== Lessons in {LESSON_REPO} ===")?;
    let lessons = LessonIndex::builtin();
    for lesson in lessons.by_repo(LESSON_REPO) {
        writeln!(out, "{:<28} discourse #{}", lesson.id, lesson.discourse_id)?;
    }
    Ok(out)
}
