use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::error::PomResult;
use crate::options::Options;
use crate::project::{self, Project};

#[derive(Parser, Debug)]
#[command(name = "pompilot")]
#[command(about = "Generates pom.xml and a Java project skeleton", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Options (--k=v, --k, --no-k), project name and dependencies
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Parses the tokens that follow the program name.
    ///
    /// An escape `--` is placed in front so clap consumes none of them; a
    /// literal `--` from the command line stays in `args`.
    pub fn from_tokens<I, T>(tokens: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv = [OsString::from("pompilot"), OsString::from("--")]
            .into_iter()
            .chain(tokens.into_iter().map(Into::into));
        Cli::try_parse_from(argv)
    }
}

pub const USAGE: &str = r#"
POM Pilot
=========

Overview
--------

Generates pom.xml file with dependencies and creates Java project
directory structure.

Usage
-----

    pompilot [options] project-name dependency1 [dependencies]

Options
-------

    --jdk=1.7        Emit code for Java 1.7 (default)
    --jdk=1.8        Emit code for Java 1.8
    --config=<path>  Read defaults from this TOML file
                     (default: ~/.pompilot.toml when present)
    --debug          Print full error detail on failure

Examples
--------

Example 1: Generate project pom.xml has JUnit dependency in test scope

    pompilot linux-lab1 junit:junit:4.12:scope=test

Example 2: pom.xml for Hadoop app

    pompilot mapreduce-lab2 \
        org.apache.hadoop:hadoop-aws:2.7.1 \
        org.apache.hadoop:hadoop-client:2.7.1 \
        com.amazonaws:aws-java-sdk-s3:1.10.30 \
        org.apache.mrunit:mrunit:1.1.0:classifier=hadoop2:scope=test \
        junit:junit:4.12:scope=test
"#;

const HELP_FLAGS: [&str; 2] = ["--help", "--h"];

/// Usage is shown for an explicit help flag in first position, or when the
/// project name or every dependency is missing.
pub fn wants_usage(raw_args: &[String], options: &Options) -> bool {
    let asked_for_help = raw_args
        .first()
        .is_some_and(|arg| HELP_FLAGS.contains(&arg.as_str()));

    asked_for_help || options.args().len() < 2
}

/// Validates, renders and writes the project under `base_dir`.
///
/// Returns the written paths in write order.
pub fn run(options: &Options, config: &Config, base_dir: &Path) -> PomResult<Vec<PathBuf>> {
    let project = Project::from_options(options, config)?;
    debug!("Resolved project: {:?}", project);

    let artifacts = project.render(base_dir)?;
    project::materialize(&artifacts)
}
