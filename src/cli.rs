//! Command-line helpers shared by the binaries.

use std::ffi::OsString;

use clap::Command;

/// Accept single-dash long flags alongside clap's double-dash ones.
///
/// `-port 8080`, `-port=8080` and `-version` become `--port 8080`,
/// `--port=8080` and `--version` when the name is a long flag (or visible
/// alias) of `cmd`. Short flags, values, the program name and everything
/// after `--` pass through untouched.
pub fn normalize_args<I, T>(cmd: &Command, args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let longs: Vec<&str> = cmd
        .get_arguments()
        .flat_map(|arg| arg.get_long_and_visible_aliases().unwrap_or_default())
        .chain(["help"])
        .collect();

    let mut out = Vec::new();
    let mut passthrough = false;

    for (idx, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if idx == 0 || passthrough {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let single_dash_long = arg
            .to_str()
            .and_then(|s| s.strip_prefix('-'))
            .filter(|rest| !rest.starts_with('-'))
            .map(|rest| rest.split('=').next().unwrap_or(rest))
            .is_some_and(|name| longs.contains(&name));

        if single_dash_long {
            let mut fixed = OsString::from("-");
            fixed.push(&arg);
            out.push(fixed);
        } else {
            out.push(arg);
        }
    }

    out
}
