mod error;
mod parser;
use parser::Scanner;

pub use error::{ConfigError, Error, Result};

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Whether an option consumes a parameter token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// The option stands alone
    None,
    /// The option consumes exactly one parameter
    Required,
}

/// Declaration of a single recognized option
///
/// An `Opt` couples the option's names and usage text with a handler
/// closure that is invoked once per matched occurrence. The handler
/// receives `Some(text)` for a `Required`-arity option and `None` for a
/// parameterless one. Handlers typically borrow caller state mutably,
/// so a descriptor (and any processor holding it) cannot outlive the
/// state its handler writes into.
pub struct Opt<'h> {
    /// Short name (e.g. 'o' for -o)
    short: Option<char>,
    /// Long name (e.g. "output" for --output)
    long: Option<String>,
    /// Help description shown in usage text
    help: String,
    /// Whether the option takes a parameter
    arity: Arity,
    /// Parameter name shown in usage text (e.g. "pathname")
    placeholder: Option<String>,
    /// Invoked when the option is matched
    handler: Box<dyn FnMut(Option<&str>) + 'h>,
}

impl<'h> Opt<'h> {
    /// Create a new option descriptor
    ///
    /// Pass `None` for `short` or the empty string for `long` to omit
    /// that form; at least one of the two must be present. An option
    /// with `Arity::Required` must name its parameter via `placeholder`
    /// so the usage text stays unambiguous; an empty placeholder is
    /// rejected rather than defaulted.
    pub fn new(
        short: impl Into<Option<char>>,
        long: &str,
        help: &str,
        arity: Arity,
        placeholder: &str,
        handler: impl FnMut(Option<&str>) + 'h,
    ) -> Result<Self, ConfigError> {
        let short = short.into();
        let long = (!long.is_empty()).then(|| long.to_string());

        if short.is_none() && long.is_none() {
            return Err(ConfigError::Unnamed);
        }
        if arity == Arity::Required && placeholder.is_empty() {
            // At least one name is present, checked above.
            let option = match &long {
                Some(l) => format!("--{}", l),
                None => short.map(|c| format!("-{}", c)).unwrap_or_default(),
            };
            return Err(ConfigError::MissingPlaceholder { option });
        }

        Ok(Self {
            short,
            long,
            help: help.to_string(),
            arity,
            placeholder: (!placeholder.is_empty()).then(|| placeholder.to_string()),
            handler: Box::new(handler),
        })
    }

    /// Short name, if the option has one
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// Long name, if the option has one
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// Help description
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Parameter arity
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Parameter placeholder for usage text
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Run the handler for one matched occurrence
    pub(crate) fn invoke(&mut self, param: Option<&str>) {
        (self.handler)(param)
    }
}

impl fmt::Debug for Opt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opt")
            .field("short", &self.short)
            .field("long", &self.long)
            .field("help", &self.help)
            .field("arity", &self.arity)
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

/// Scans an argument vector against a table of option descriptors
///
/// A processor is bound to its descriptor table and a banner string at
/// construction. One call to [`Processor::process`] makes one
/// left-to-right pass over an argument vector, invoking each matched
/// option's handler in token order and returning the tokens it did not
/// consume.
pub struct Processor<'h> {
    /// Descriptors in registration order
    opts: Vec<Opt<'h>>,
    /// Map from short name to descriptor index
    short_map: HashMap<char, usize>,
    /// Map from long name to descriptor index
    long_map: HashMap<String, usize>,
    /// Basename of argv[0]
    program_name: String,
    /// Caller-supplied text shown at the top of usage output
    banner: String,
}

impl<'h> Processor<'h> {
    /// Create a processor bound to `opts` and a usage banner
    ///
    /// The program name is the basename of `argv[0]` (empty when the
    /// vector is empty). Every short and long name must be unique
    /// across the table; a collision is a [`ConfigError`], detected
    /// here before any scanning can happen.
    pub fn new(
        argv: &[String],
        opts: Vec<Opt<'h>>,
        banner: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let mut short_map = HashMap::new();
        let mut long_map = HashMap::new();

        for (i, opt) in opts.iter().enumerate() {
            if let Some(c) = opt.short
                && short_map.insert(c, i).is_some()
            {
                return Err(ConfigError::DuplicateShort(c));
            }
            if let Some(ref l) = opt.long
                && long_map.insert(l.clone(), i).is_some()
            {
                return Err(ConfigError::DuplicateLong(l.clone()));
            }
        }

        let program_name = match argv.first() {
            Some(arg0) => {
                let path = Path::new(arg0);
                path.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| arg0.clone())
            }
            None => String::new(),
        };

        Ok(Self {
            opts,
            short_map,
            long_map,
            program_name,
            banner: banner.into(),
        })
    }

    /// Basename of argv[0], captured at construction
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// Scan `argv`, dispatching handlers and collecting positionals
    ///
    /// The first element is the program path and is not scanned. Each
    /// matched option's handler runs synchronously, in the order the
    /// tokens appear. Tokens that are not option-shaped (and everything
    /// after a lone `--`) are returned as positional arguments in their
    /// original relative order, program path excluded.
    ///
    /// The scan stops at the first malformed token. Handlers that ran
    /// before the failure are not rolled back; callers must treat
    /// partial application as possible on [`Error`]. A scan keeps no
    /// state on the processor, so a second vector may be processed with
    /// the same instance; every matched handler fires again.
    pub fn process(&mut self, argv: Vec<String>) -> Result<Vec<String>> {
        let mut args = argv.into_iter();
        // Index 0 is the program path, already consumed by new().
        args.next();
        Scanner::new(&mut self.opts, &self.short_map, &self.long_map).scan(args)
    }

    /// Render the usage banner for the registered descriptors
    pub fn usage(&self) -> String {
        let mut out = String::new();

        out.push_str(&self.banner);
        out.push('\n');
        out.push_str(&format!("Usage: {} [OPTIONS] [ARGS]...\n", self.program_name));

        if !self.opts.is_empty() {
            out.push_str("\nOptions:\n");
            for opt in &self.opts {
                let mut line = String::from("  ");

                if let Some(c) = opt.short {
                    line.push_str(&format!("-{}", c));
                    if opt.long.is_some() {
                        line.push_str(", ");
                    }
                } else {
                    line.push_str("    ");
                }

                if let Some(l) = &opt.long {
                    line.push_str(&format!("--{}", l));
                }

                if let Some(p) = &opt.placeholder {
                    line.push_str(&format!(" <{}>", p));
                }

                // Pad for alignment
                let pad = 28usize.saturating_sub(line.len());
                line.push_str(&" ".repeat(pad));

                line.push_str(&opt.help);
                out.push_str(line.trim_end());
                out.push('\n');
            }
        }

        out
    }
}

impl fmt::Debug for Processor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Processor")
            .field("opts", &self.opts)
            .field("program_name", &self.program_name)
            .field("banner", &self.banner)
            .finish_non_exhaustive()
    }
}

/// Convenience function to declare a parameterless option
#[inline]
pub fn flag<'h>(
    short: impl Into<Option<char>>,
    long: &str,
    help: &str,
    mut f: impl FnMut() + 'h,
) -> Result<Opt<'h>, ConfigError> {
    Opt::new(short, long, help, Arity::None, "", move |_| f())
}

/// Convenience function to declare an option taking one parameter
#[inline]
pub fn param<'h>(
    short: impl Into<Option<char>>,
    long: &str,
    help: &str,
    placeholder: &str,
    mut f: impl FnMut(&str) + 'h,
) -> Result<Opt<'h>, ConfigError> {
    Opt::new(short, long, help, Arity::Required, placeholder, move |p| {
        if let Some(p) = p {
            f(p)
        }
    })
}
