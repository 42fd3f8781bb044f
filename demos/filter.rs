use std::env;
use std::process::exit;

use argtable::{Processor, flag, param};

const BANNER: &str = "filter: join words with a separator";

fn main() {
    let argv: Vec<String> = env::args().collect();

    let mut numbered = false;
    let mut reverse = false;
    let mut separator = String::from(" ");
    let mut help = false;

    // The scan happens in an inner scope so the option table (and its
    // borrows of the locals above) is gone before we read them back.
    let (mut words, usage) = {
        let opts = vec![
            flag('n', "line-numbers", "Number each word in the output", || {
                numbered = true;
            })
            .unwrap(),
            flag('r', "reverse", "Emit words in reverse order", || {
                reverse = true;
            })
            .unwrap(),
            param('s', "separator", "Separator between words", "text", |s| {
                separator = s.to_string();
            })
            .unwrap(),
            flag('h', "help", "Show this help", || help = true).unwrap(),
        ];

        let mut machine = Processor::new(&argv, opts, BANNER).unwrap();
        let words = match machine.process(argv) {
            Ok(rest) => rest,
            Err(e) => {
                eprintln!("{}: {}", machine.program_name(), e);
                exit(1);
            }
        };
        (words, machine.usage())
    };

    if help {
        print!("{}", usage);
        return;
    }

    if reverse {
        words.reverse();
    }

    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push_str(&separator);
        }
        if numbered {
            out.push_str(&format!("{}:", i + 1));
        }
        out.push_str(word);
    }
    println!("{}", out);
}
