use std::env;
use std::process::exit;

use argtable::{Arity, Opt, Processor};

const BANNER: &str = "sample: option table walkthrough";

/// Program state container
#[derive(Debug, Default)]
struct RuntimeState {
    debug: bool,
    output_pathname: String,
    verbose: bool,
}

/// Declare the option table and run one scan over `argv`
fn process_arguments(argv: Vec<String>, state: &mut RuntimeState) -> Vec<String> {
    // --debug, no short variant
    let debug = Opt::new(None, "debug", "Enable debug mode", Arity::None, "", |_| {
        state.debug = true;
    })
    .unwrap();

    // -o,--output <pathname>
    let output = Opt::new(
        'o',
        "output",
        "Output file pathname",
        Arity::Required,
        "pathname",
        |p| {
            if let Some(p) = p {
                state.output_pathname = p.to_string();
            }
        },
    )
    .unwrap();

    // -v (verbosity), no long variant
    let verbose = Opt::new('v', "", "Increase verbosity", Arity::None, "", |_| {
        state.verbose = true;
    })
    .unwrap();

    let mut machine = Processor::new(&argv, vec![debug, output, verbose], BANNER).unwrap();
    match machine.process(argv) {
        Ok(rest) => rest,
        Err(e) => {
            eprintln!("{}: {}", machine.program_name(), e);
            exit(1);
        }
    }
}

fn main() {
    let mut state = RuntimeState::default();
    let rest = process_arguments(env::args().collect(), &mut state);

    println!("debug {}", state.debug);
    println!("output {}", state.output_pathname);
    println!("verbose {}", state.verbose);

    if rest.is_empty() {
        println!("no input arguments");
    } else {
        println!(
            "{} input argument{}:",
            rest.len(),
            if rest.len() != 1 { "s" } else { "" }
        );
        for arg in &rest {
            println!("{}", arg);
        }
    }
}
