use std::path::PathBuf;

/// Where cases come from and where each verdict sends them. Built once
/// at startup and handed to the app by value; there is no global options
/// object.
#[derive(Clone, Debug)]
pub struct TriageConfig {
    pub triage_dir: PathBuf,
    pub neuro_dir: PathBuf,
    pub evil_dir: PathBuf,
    pub none_dir: PathBuf,
    /// Interleaved channel extracted for display. The detector records
    /// the stream of interest on the second channel, hence the default.
    pub channel: usize,
}

pub const USAGE: &str = "Usage:\n  cliptriage --triage <dir> --neuro <dir> --evil <dir> --none <dir> [--channel <n>]\n\nOptions:\n  -t, --triage <dir>   directory of candidate cases (sound files + .json sidecars)\n  -n, --neuro <dir>    output directory for cases classified as neuro\n  -e, --evil <dir>     output directory for cases classified as evil\n  -x, --none <dir>     output directory for cases classified as none\n      --channel <n>    channel extracted for display (default 1)\n  -h, --help           this message";

pub fn parse_args(mut args: impl Iterator<Item = String>) -> Result<TriageConfig, String> {
    let mut triage: Option<PathBuf> = None;
    let mut neuro: Option<PathBuf> = None;
    let mut evil: Option<PathBuf> = None;
    let mut none: Option<PathBuf> = None;
    let mut channel = 1usize;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-t" | "--triage" => triage = Some(PathBuf::from(take_value(&mut args, &arg)?)),
            "-n" | "--neuro" => neuro = Some(PathBuf::from(take_value(&mut args, &arg)?)),
            "-e" | "--evil" => evil = Some(PathBuf::from(take_value(&mut args, &arg)?)),
            "-x" | "--none" => none = Some(PathBuf::from(take_value(&mut args, &arg)?)),
            "--channel" => {
                let v = take_value(&mut args, &arg)?;
                channel = v
                    .parse()
                    .map_err(|_| format!("option --channel needs an integer, got {v}"))?;
            }
            "-h" | "--help" => {
                eprintln!("{USAGE}");
                std::process::exit(0);
            }
            _ => return Err(format!("unknown option: {arg}")),
        }
    }
    Ok(TriageConfig {
        triage_dir: triage.ok_or_else(|| required("--triage"))?,
        neuro_dir: neuro.ok_or_else(|| required("--neuro"))?,
        evil_dir: evil.ok_or_else(|| required("--evil"))?,
        none_dir: none.ok_or_else(|| required("--none"))?,
        channel,
    })
}

fn required(opt: &str) -> String {
    format!("option {opt} is required")
}

fn take_value(args: &mut impl Iterator<Item = String>, opt: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("option {opt} needs a value"))
}
