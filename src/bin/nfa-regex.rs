use nfa_regex_rs::Regex;
use std::env;
use std::process;

fn print_usage() {
    eprintln!("usage: nfa-regex -r <regex> -s <string>");
    eprintln!("Available options are:");
    eprintln!("  -r, --regex <regex>    the regular expression to test");
    eprintln!("  -s, --string <string>  the string to test against the regular expression");
    eprintln!("  -h, --help             show this help");
}

#[derive(Default)]
struct Options {
    regex: Option<String>,
    subject: Option<String>,
    show_help: bool,
}

fn parse_args<I>(args: I) -> Result<Options, String>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-r" | "--regex" => {
                opts.regex = Some(args.next().ok_or("'-r' needs argument")?);
            }
            "-s" | "--string" => {
                opts.subject = Some(args.next().ok_or("'-s' needs argument")?);
            }
            "-h" | "--help" => opts.show_help = true,
            other => {
                if let Some(value) = other.strip_prefix("--regex=") {
                    opts.regex = Some(value.to_string());
                } else if let Some(value) = other.strip_prefix("--string=") {
                    opts.subject = Some(value.to_string());
                } else {
                    return Err(format!("unrecognized option '{other}'"));
                }
            }
        }
    }

    Ok(opts)
}

fn fail(message: &str) -> ! {
    eprintln!("nfa-regex: {message}");
    process::exit(1);
}

fn main() {
    let opts = match parse_args(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(message) => {
            eprintln!("nfa-regex: {message}");
            print_usage();
            process::exit(1);
        }
    };

    if opts.show_help {
        print_usage();
        return;
    }

    let (Some(regex), Some(subject)) = (opts.regex, opts.subject) else {
        fail("you must provide both regex and string arguments");
    };
    if regex.is_empty() || subject.is_empty() {
        fail("you must provide both regex and string arguments");
    }

    match Regex::new(&regex) {
        Ok(re) => println!("{}", re.is_match(&subject)),
        Err(err) => fail(&err.to_string()),
    }
}
