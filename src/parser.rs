use std::collections::HashMap;
use std::iter::Peekable;
use std::vec;

use crate::error::{Error, Result};
use crate::{Arity, Opt};

/// Internal scanning engine
///
/// Borrows the processor's descriptor table and lookup maps for the
/// duration of one pass.
pub(crate) struct Scanner<'p, 'h> {
    /// Descriptors, mutable so handlers can run
    opts: &'p mut Vec<Opt<'h>>,
    /// Map from short name to descriptor index
    short_map: &'p HashMap<char, usize>,
    /// Map from long name to descriptor index
    long_map: &'p HashMap<String, usize>,
}

type Args = Peekable<vec::IntoIter<String>>;

impl<'p, 'h> Scanner<'p, 'h> {
    pub(crate) fn new(
        opts: &'p mut Vec<Opt<'h>>,
        short_map: &'p HashMap<char, usize>,
        long_map: &'p HashMap<String, usize>,
    ) -> Self {
        Self {
            opts,
            short_map,
            long_map,
        }
    }

    /// One left-to-right pass over the tokens
    ///
    /// Matched options have their handlers invoked in token order;
    /// everything else is collected and returned in its original
    /// relative order.
    pub(crate) fn scan(mut self, args: vec::IntoIter<String>) -> Result<Vec<String>> {
        let mut positionals = Vec::new();
        let mut args = args.peekable();
        let mut seen_double_dash = false;

        while let Some(arg) = args.next() {
            // After --, everything is positional
            if seen_double_dash {
                positionals.push(arg);
                continue;
            }

            // Check for --
            if arg == "--" {
                seen_double_dash = true;
                continue;
            }

            // Long option
            if let Some(body) = arg.strip_prefix("--") {
                self.scan_long(body, &mut args)?;
            }
            // Short option cluster
            else if let Some(body) = arg.strip_prefix('-') {
                if body.is_empty() {
                    // Bare "-" is treated as a positional
                    positionals.push(arg);
                } else {
                    self.scan_cluster(body, &mut args)?;
                }
            }
            // Positional argument
            else {
                positionals.push(arg);
            }
        }

        Ok(positionals)
    }

    /// Dispatch one `--name` or `--name=value` token
    fn scan_long(&mut self, body: &str, args: &mut Args) -> Result<()> {
        // Split off a single inline =value
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        let Some(&i) = self.long_map.get(name) else {
            return Err(Error::UnknownOption {
                token: format!("--{}", name),
            });
        };
        let opt = &mut self.opts[i];

        match opt.arity() {
            Arity::None => {
                if inline.is_some() {
                    return Err(Error::UnexpectedParameter {
                        option: format!("--{}", name),
                    });
                }
                opt.invoke(None);
            }
            Arity::Required => match inline {
                Some(value) => opt.invoke(Some(value)),
                None => {
                    let Some(value) = take_param(args) else {
                        return Err(Error::MissingParameter {
                            option: format!("--{}", name),
                        });
                    };
                    opt.invoke(Some(&value));
                }
            },
        }

        Ok(())
    }

    /// Walk one short-option cluster (the token body after `-`)
    ///
    /// Parameterless options may be bundled freely. A parameter-taking
    /// option is only valid at the head of the token, where the rest of
    /// the token (or the next token) is its parameter.
    fn scan_cluster(&mut self, body: &str, args: &mut Args) -> Result<()> {
        for (pos, c) in body.char_indices() {
            let Some(&i) = self.short_map.get(&c) else {
                return Err(Error::UnknownOption {
                    token: format!("-{}", c),
                });
            };
            let opt = &mut self.opts[i];

            match opt.arity() {
                Arity::None => opt.invoke(None),
                Arity::Required if pos == 0 => {
                    let rest = &body[c.len_utf8()..];
                    if rest.is_empty() {
                        let Some(value) = take_param(args) else {
                            return Err(Error::MissingParameter {
                                option: format!("-{}", c),
                            });
                        };
                        opt.invoke(Some(&value));
                    } else {
                        opt.invoke(Some(rest));
                    }
                    return Ok(());
                }
                Arity::Required => {
                    return Err(Error::ClusteredParameter {
                        option: format!("-{}", c),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Consume the next token as a parameter, unless it looks like an option
fn take_param(args: &mut Args) -> Option<String> {
    match args.peek() {
        Some(token) if !option_shaped(token) => args.next(),
        _ => None,
    }
}

/// A token is option-shaped when it starts with `-` and is more than
/// the bare dash
fn option_shaped(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}
