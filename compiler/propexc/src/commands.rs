//! Subcommands.
//!
//! Each command reads one C# file, selects a property by name and prints
//! what it found or the rewritten source. `--write` sends the rewritten
//! source back to the file instead.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use propex_fmt::FileEmitter;
use propex_ir::{MemberPath, NodeKind, SharedInterner, SyntaxTree};
use propex_refactor::{Candidate, DeclarationResolver, Rewrite};

use crate::CliError;

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// List the properties of a file with their paths and candidates.
    Parse { file: PathBuf },
    /// Print which rewrite a property offers.
    Classify { file: PathBuf, property: String },
    Explode {
        file: PathBuf,
        property: String,
        write: bool,
    },
    Crunch {
        file: PathBuf,
        property: String,
        write: bool,
    },
}

impl Command {
    /// Build a command from its name and the arguments after it.
    pub fn from_args(name: &str, args: &[String]) -> Result<Command, CliError> {
        let mut write = false;
        let mut positional = Vec::with_capacity(2);
        for arg in args {
            match arg.as_str() {
                "--write" | "-w" => write = true,
                flag if flag.starts_with('-') => {
                    return Err(CliError::Usage(format!("unknown option `{flag}`")));
                }
                _ => positional.push(arg.as_str()),
            }
        }
        if write && !matches!(name, "explode" | "crunch") {
            return Err(CliError::Usage(format!(
                "`--write` only applies to explode and crunch, not {name}"
            )));
        }

        match (name, positional.as_slice()) {
            ("parse", [file]) => Ok(Command::Parse {
                file: PathBuf::from(file),
            }),
            ("classify", [file, property]) => Ok(Command::Classify {
                file: PathBuf::from(file),
                property: (*property).to_owned(),
            }),
            ("explode", [file, property]) => Ok(Command::Explode {
                file: PathBuf::from(file),
                property: (*property).to_owned(),
                write,
            }),
            ("crunch", [file, property]) => Ok(Command::Crunch {
                file: PathBuf::from(file),
                property: (*property).to_owned(),
                write,
            }),
            ("parse", _) => Err(CliError::Usage("usage: propex parse <file.cs>".to_owned())),
            ("classify" | "explode" | "crunch", _) => Err(CliError::Usage(format!(
                "usage: propex {name} <file.cs> <Property>{}",
                if name == "classify" { "" } else { " [--write]" }
            ))),
            _ => Err(CliError::Usage(format!("unknown command `{name}`"))),
        }
    }

    fn file(&self) -> &Path {
        match self {
            Command::Parse { file }
            | Command::Classify { file, .. }
            | Command::Explode { file, .. }
            | Command::Crunch { file, .. } => file,
        }
    }
}

/// What a command produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Text for stdout.
    pub stdout: String,
    /// Status line for stderr.
    pub note: Option<String>,
}

impl Outcome {
    fn print(stdout: String) -> Self {
        Outcome { stdout, note: None }
    }
}

/// Run a command.
#[tracing::instrument(level = "debug", skip_all, fields(file = %command.file().display()))]
pub fn run(command: &Command) -> Result<Outcome, CliError> {
    let path = command.file();
    let text = std::fs::read_to_string(path).map_err(|error| CliError::Io {
        path: path.to_path_buf(),
        error,
    })?;
    let interner = SharedInterner::new();
    let tree = match propex_parse::parse(&text, &interner) {
        Ok(tree) => tree,
        Err(error) => {
            return Err(CliError::Parse {
                path: path.to_path_buf(),
                text,
                error,
            })
        }
    };

    match command {
        Command::Parse { .. } => Ok(Outcome::print(list_properties(&tree))),
        Command::Classify { property, .. } => {
            let target = select(&tree, path, property)?;
            let candidate = propex_refactor::classify(&tree, &target);
            Ok(Outcome::print(format!("{}\n", candidate_label(candidate))))
        }
        Command::Explode {
            property, write, ..
        } => {
            let target = select(&tree, path, property)?;
            let parent = target.parent().unwrap_or_else(MemberPath::root);
            let exploded = propex_refactor::explode(&tree, &parent, &target)?;
            finish(&exploded.tree, path, *write)
        }
        Command::Crunch {
            property, write, ..
        } => {
            let target = select(&tree, path, property)?;
            let resolver = DeclarationResolver::new(&tree);
            let field = propex_refactor::resolve_backing_field(&tree, &target, &resolver);
            match propex_refactor::crunch(&tree, field.as_ref(), &target)? {
                Rewrite::Applied(rewritten) => finish(&rewritten, path, *write),
                Rewrite::NotApplicable => Ok(Outcome {
                    stdout: if *write { String::new() } else { text },
                    note: Some(format!("`{property}` has no backing field; nothing to crunch")),
                }),
            }
        }
    }
}

fn select(tree: &SyntaxTree, path: &Path, query: &str) -> Result<MemberPath, CliError> {
    let found = tree.find_property(query);
    tracing::debug!(query, path = ?found.as_ref().map(ToString::to_string), "selected property");
    found.ok_or_else(|| CliError::UnknownProperty {
        path: path.to_path_buf(),
        query: query.to_owned(),
    })
}

/// Print a rewritten tree, or write it back to `path`.
fn finish(tree: &SyntaxTree, path: &Path, write: bool) -> Result<Outcome, CliError> {
    if !write {
        return Ok(Outcome::print(propex_fmt::render(tree)));
    }
    let io_error = |error| CliError::Io {
        path: path.to_path_buf(),
        error,
    };
    let mut emitter = FileEmitter::new(path).map_err(io_error)?;
    propex_fmt::print(tree, &mut emitter);
    emitter.finish().map_err(io_error)?;
    Ok(Outcome {
        stdout: String::new(),
        note: Some(format!("rewrote {}", path.display())),
    })
}

/// One line per property: path, qualified name, candidate.
fn list_properties(tree: &SyntaxTree) -> String {
    let mut out = String::new();
    for (path, id) in tree.properties() {
        let NodeKind::Property { name, .. } = *tree.kind(id) else {
            continue;
        };
        let owner = tree
            .declaring_type(&path)
            .map(|key| format!("{}.", tree.name_str(key.0)))
            .unwrap_or_default();
        let candidate = propex_refactor::classify(tree, &path);
        let _ = writeln!(
            out,
            "{path}\t{owner}{}\t{}",
            tree.text(name),
            candidate_label(candidate)
        );
    }
    out
}

fn candidate_label(candidate: Candidate) -> &'static str {
    match candidate {
        Candidate::Explode => "explode",
        Candidate::Crunch => "crunch",
        Candidate::None => "none",
    }
}

#[cfg(test)]
mod tests;
