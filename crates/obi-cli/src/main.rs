use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    NotFound(PathBuf),
    Yaml { path: String, message: String },
    Chart(obi::Error),
    UnknownChartType(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::NotFound(path) => write!(f, "file not found: {}", path.display()),
            CliError::Yaml { path, message } => {
                write!(f, "YAML parse error in {path}: {message}")
            }
            CliError::Chart(err) => write!(f, "{err}"),
            CliError::UnknownChartType(kind) => write!(f, "unknown chart type: {kind}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<obi::Error> for CliError {
    fn from(value: obi::Error) -> Self {
        Self::Chart(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum ChartType {
    #[default]
    Band,
}

impl FromStr for ChartType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "band" => Ok(Self::Band),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    chart_type: ChartType,
    source: Option<String>,
    style: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "obi-cli\n\
\n\
USAGE:\n\
  obi-cli generate [--type band] [--style <path>] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', chart data is read from stdin.\n\
  - --style points to a YAML file of per-label color overrides; without it no\n\
    overrides are applied.\n\
  - SVG is written next to the source file (extension replaced by .svg) by\n\
    default; use --out to pick a path. Stdin input prints to stdout.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut saw_generate = false;

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "generate" if !saw_generate => saw_generate = true,
            "--type" => {
                let Some(kind) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.chart_type = kind
                    .parse::<ChartType>()
                    .map_err(|_| CliError::UnknownChartType(kind.clone()))?;
            }
            "--style" => {
                let Some(style) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.style = Some(style.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other if other.starts_with("--") => return Err(CliError::Usage(usage())),
            path => {
                if args.source.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.source = Some(path.to_string());
            }
        }
    }

    if !saw_generate {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => {
            if !Path::new(path).exists() {
                return Err(CliError::NotFound(PathBuf::from(path)));
            }
            Ok(std::fs::read_to_string(path)?)
        }
    }
}

fn parse_yaml(text: &str, path: &str) -> Result<Value, CliError> {
    serde_yaml::from_str(text).map_err(|e| CliError::Yaml {
        path: path.to_string(),
        message: e.to_string(),
    })
}

fn default_out_path(source: &str) -> PathBuf {
    PathBuf::from(source).with_extension("svg")
}

fn run(args: Args) -> Result<(), CliError> {
    let ChartType::Band = args.chart_type;

    let source = args.source.as_deref();
    let source_text = read_input(source)?;
    let data = parse_yaml(&source_text, source.unwrap_or("<stdin>"))?;

    let style = match args.style.as_deref() {
        Some(path) => {
            let text = read_input(Some(path))?;
            parse_yaml(&text, path)?
        }
        None => serde_json::json!({ "colors": [] }),
    };

    let svg = obi::generate_band_chart(&data, &style)?;

    match (args.out.as_deref(), source) {
        (Some(out), _) => {
            std::fs::write(out, &svg)?;
            println!("Generated: {out}");
        }
        (None, Some(path)) if path != "-" => {
            let out = default_out_path(path);
            std::fs::write(&out, &svg)?;
            println!("Generated: {}", out.display());
        }
        _ => print!("{svg}"),
    }
    Ok(())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
