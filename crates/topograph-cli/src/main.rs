use serde::Serialize;
use std::io::Read;
use topograph::{Error, VertexId, alg, matrix};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Input(Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Input(err) => write!(f, "Input file: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<Error> for CliError {
    fn from(value: Error) -> Self {
        Self::Input(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Sort,
    Dump,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    json: bool,
    pretty: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
enum SortOut {
    Order { order: Vec<VertexId> },
    Cycle { cycle_detected: bool, remaining_edges: usize },
}

#[derive(Serialize)]
struct NodeOut {
    id: VertexId,
    out: Vec<VertexId>,
    #[serde(rename = "in")]
    in_: Vec<VertexId>,
}

#[derive(Serialize)]
struct DumpOut {
    vertex_count: usize,
    edge_count: usize,
    nodes: Vec<NodeOut>,
}

fn usage() -> &'static str {
    "topograph-cli\n\
\n\
USAGE:\n\
  topograph-cli [sort] [--json] [--pretty] [<path>|-]\n\
  topograph-cli dump [--json] [--pretty] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - The input is an adjacency matrix: a vertex count N on the first line, then N rows of\n\
    N '0'/'1' characters; '1' at row i, column j is the edge (i, j).\n\
  - sort prints the topological order as comma-separated ids, or 'CYCLE DETECTED!'.\n\
  - dump prints each vertex's outgoing and incoming neighbor lists.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "sort" => args.command = Command::Sort,
            "dump" => args.command = Command::Dump,
            "--json" => args.json = true,
            "--pretty" => args.pretty = true,
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                while it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
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
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn format_ids(ids: &[VertexId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let mut g = matrix::parse(&text)?;

    match args.command {
        Command::Sort => {
            match alg::topological_sort(&mut g) {
                Ok(order) => {
                    if args.json {
                        write_json(&SortOut::Order { order }, args.pretty)?;
                    } else {
                        println!("{}", format_ids(&order));
                    }
                }
                // A cycle is a computed result, not a failure.
                Err(Error::CycleDetected { remaining }) => {
                    if args.json {
                        write_json(
                            &SortOut::Cycle {
                                cycle_detected: true,
                                remaining_edges: remaining,
                            },
                            args.pretty,
                        )?;
                    } else {
                        println!("CYCLE DETECTED!");
                    }
                }
                Err(err) => return Err(err.into()),
            }
            Ok(())
        }
        Command::Dump => {
            if args.json {
                let nodes = (0..g.vertex_count())
                    .map(|id| NodeOut {
                        id,
                        out: g.out_neighbors(id).collect(),
                        in_: g.in_neighbors(id).collect(),
                    })
                    .collect();
                write_json(
                    &DumpOut {
                        vertex_count: g.vertex_count(),
                        edge_count: g.edge_count(),
                        nodes,
                    },
                    args.pretty,
                )?;
            } else {
                for id in 0..g.vertex_count() {
                    println!("**NODE {id}**");
                    println!("Out: {}", format_ids(&g.out_neighbors(id).collect::<Vec<_>>()));
                    println!("In: {}", format_ids(&g.in_neighbors(id).collect::<Vec<_>>()));
                    println!();
                }
            }
            Ok(())
        }
    }
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
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
