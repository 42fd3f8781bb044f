use argtable::{Arity, ConfigError, Error, Opt, Processor, flag, param};

fn argv(args: &[&str]) -> Vec<String> {
    std::iter::once("prog")
        .chain(args.iter().copied())
        .map(String::from)
        .collect()
}

#[test]
fn missing_parameter_at_end_of_input() {
    let err = {
        let opts = vec![
            param('o', "output", "Output file pathname", "pathname", |_| ()).unwrap(),
        ];
        let args = argv(&["--output"]);
        let mut machine = Processor::new(&args, opts, "test").unwrap();
        machine.process(args).unwrap_err()
    };

    assert_eq!(
        err,
        Error::MissingParameter {
            option: "--output".into()
        }
    );
    assert!(err.to_string().contains("output"));
}

#[test]
fn option_shaped_token_is_not_a_parameter() {
    let mut debug = false;
    let mut output = String::new();

    let err = {
        let opts = vec![
            flag(None, "debug", "Enable debug mode", || debug = true).unwrap(),
            param('o', "output", "Output file pathname", "pathname", |p| {
                output = p.to_string();
            })
            .unwrap(),
        ];
        let args = argv(&["-o", "--debug"]);
        let mut machine = Processor::new(&args, opts, "test").unwrap();
        machine.process(args).unwrap_err()
    };

    assert_eq!(
        err,
        Error::MissingParameter {
            option: "-o".into()
        }
    );
    assert!(output.is_empty());
    assert!(!debug, "the would-be parameter must not be dispatched");
}

#[test]
fn unknown_long_option_invokes_no_handler() {
    let mut debug = false;

    let err = {
        let opts = vec![flag(None, "debug", "Enable debug mode", || debug = true).unwrap()];
        let args = argv(&["--frobnicate", "--debug"]);
        let mut machine = Processor::new(&args, opts, "test").unwrap();
        machine.process(args).unwrap_err()
    };

    assert_eq!(
        err,
        Error::UnknownOption {
            token: "--frobnicate".into()
        }
    );
    assert!(err.to_string().contains("frobnicate"));
    assert!(!debug, "scan must stop before later tokens are dispatched");
}

#[test]
fn unknown_short_stops_the_cluster() {
    let mut verbose = false;

    let err = {
        let opts = vec![flag('v', "", "Increase verbosity", || verbose = true).unwrap()];
        let args = argv(&["-vx"]);
        let mut machine = Processor::new(&args, opts, "test").unwrap();
        machine.process(args).unwrap_err()
    };

    assert_eq!(err, Error::UnknownOption { token: "-x".into() });
    // Handlers matched earlier in the scan are not rolled back.
    assert!(verbose);
}

#[test]
fn parameter_option_cannot_be_bundled() {
    let mut verbose = false;
    let mut output = String::new();

    let err = {
        let opts = vec![
            flag('v', "", "Increase verbosity", || verbose = true).unwrap(),
            param('o', "output", "Output file pathname", "pathname", |p| {
                output = p.to_string();
            })
            .unwrap(),
        ];
        let args = argv(&["-vo", "file"]);
        let mut machine = Processor::new(&args, opts, "test").unwrap();
        machine.process(args).unwrap_err()
    };

    assert_eq!(
        err,
        Error::ClusteredParameter {
            option: "-o".into()
        }
    );
    assert!(verbose);
    assert!(output.is_empty());
}

#[test]
fn inline_value_on_parameterless_option() {
    let mut debug = false;

    let err = {
        let opts = vec![flag(None, "debug", "Enable debug mode", || debug = true).unwrap()];
        let args = argv(&["--debug=yes"]);
        let mut machine = Processor::new(&args, opts, "test").unwrap();
        machine.process(args).unwrap_err()
    };

    assert_eq!(
        err,
        Error::UnexpectedParameter {
            option: "--debug".into()
        }
    );
    assert!(!debug);
}

#[test]
fn duplicate_short_name_fails_construction() {
    let opts = vec![
        param('o', "output", "Output file pathname", "pathname", |_| ()).unwrap(),
        flag('o', "overwrite", "Replace existing files", || ()).unwrap(),
    ];
    let err = Processor::new(&argv(&[]), opts, "test").unwrap_err();
    assert_eq!(err, ConfigError::DuplicateShort('o'));
}

#[test]
fn duplicate_long_name_fails_construction() {
    let opts = vec![
        flag('a', "debug", "Enable debug mode", || ()).unwrap(),
        flag('b', "debug", "Enable debug mode again", || ()).unwrap(),
    ];
    let err = Processor::new(&argv(&[]), opts, "test").unwrap_err();
    assert_eq!(err, ConfigError::DuplicateLong("debug".into()));
}

#[test]
fn option_must_have_a_name() {
    let err = Opt::new(None, "", "an unnameable thing", Arity::None, "", |_| ()).unwrap_err();
    assert_eq!(err, ConfigError::Unnamed);
}

#[test]
fn parameter_option_must_have_a_placeholder() {
    let err = Opt::new('o', "output", "Output file pathname", Arity::Required, "", |_| ())
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::MissingPlaceholder {
            option: "--output".into()
        }
    );

    let err = Opt::new('o', "", "Output file pathname", Arity::Required, "", |_| ()).unwrap_err();
    assert_eq!(
        err,
        ConfigError::MissingPlaceholder {
            option: "-o".into()
        }
    );
}
