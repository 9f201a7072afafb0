//! CLI for urlcanon.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use urlcanon_core::config::{self, PathStyleSetting};
use urlcanon_core::{Canonicalizer, Resources};

use commands::{
    run_canonicalize, run_decode, run_encode, run_exists, run_is_absolute, run_is_local, run_join,
    run_last_modified, run_name, run_parent,
};

/// Top-level CLI for urlcanon.
#[derive(Debug, Parser)]
#[command(name = "urlcanon")]
#[command(about = "urlcanon: canonicalize, join, classify and probe URLs and paths", long_about = None)]
pub struct Cli {
    /// Separator style for platform paths; overrides `path_style` in config.toml.
    #[arg(long, global = true, value_enum, value_name = "STYLE")]
    pub style: Option<StyleArg>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    Native,
    Unix,
    Windows,
}

impl From<StyleArg> for PathStyleSetting {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Native => PathStyleSetting::Native,
            StyleArg::Unix => PathStyleSetting::Unix,
            StyleArg::Windows => PathStyleSetting::Windows,
        }
    }
}

/// Which codec `encode` applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EncodeKind {
    /// application/x-www-form-urlencoded (space → `+`).
    Url,
    /// URL path; `/` and pchar characters stay literal.
    Path,
    /// Single path segment; `/` is escaped too.
    Segment,
}

/// Which codec `decode` applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DecodeKind {
    /// application/x-www-form-urlencoded (`+` → space).
    Url,
    /// URL path (`+` stays a plus sign).
    Path,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve `.` and `..` segments of a URL or path.
    Canonicalize {
        /// URL (e.g. file:///usr/share/../lib) or platform path.
        url: String,
    },

    /// Join a base and a relative path or URL into a canonical URL.
    Join {
        /// Base directory or URL.
        base: String,
        /// Relative path (or a URL, which wins outright).
        relative: Option<String>,
    },

    /// Print the last path segment.
    Name {
        url: String,
        /// Strip the final `.ext`.
        #[arg(long)]
        short: bool,
    },

    /// Print the URL with its last segment removed.
    Parent {
        url: String,
        /// Canonicalize before taking the parent.
        #[arg(long)]
        canonical: bool,
    },

    /// Is this a URL on the local filesystem (no host)?
    IsLocal { url: String },

    /// Is this path absolute (rooted, drive letter, or URL)?
    IsAbsolute { path: String },

    /// Does the resource exist (stat for local files, HEAD for remote URLs)?
    Exists { url: String },

    /// Last-modified time in milliseconds since the epoch (-1 if unreachable).
    LastModified { url: String },

    /// Percent-encode text.
    Encode {
        #[arg(value_enum)]
        kind: EncodeKind,
        text: String,
    },

    /// Percent-decode text.
    Decode {
        #[arg(value_enum)]
        kind: DecodeKind,
        text: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        if let Some(style) = cli.style {
            cfg.path_style = style.into();
        }
        tracing::debug!("loaded config: {:?}", cfg);

        let canon = Canonicalizer::from_config(&cfg);
        let resources = Resources::new(cfg.probe.clone());

        match cli.command {
            CliCommand::Canonicalize { url } => run_canonicalize(&canon, &url)?,
            CliCommand::Join { base, relative } => {
                run_join(&canon, &base, relative.as_deref().unwrap_or(""))?
            }
            CliCommand::Name { url, short } => run_name(&canon, &url, short)?,
            CliCommand::Parent { url, canonical } => run_parent(&canon, &url, canonical)?,
            CliCommand::IsLocal { url } => run_is_local(&canon, &url)?,
            CliCommand::IsAbsolute { path } => run_is_absolute(&canon, &path),
            CliCommand::Exists { url } => run_exists(&canon, &resources, &url)?,
            CliCommand::LastModified { url } => run_last_modified(&canon, &resources, &url)?,
            CliCommand::Encode { kind, text } => run_encode(kind, &text),
            CliCommand::Decode { kind, text } => run_decode(kind, &text),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
