use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use glob::glob;
use hrdscope_core::descriptors::avc_timing_hrd::layout;
use hrdscope_core::{AvcTimingHrdDescriptor, Element, display_payload, format_hex, parse_hex};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("HRDSCOPE_BUILD_COMMIT"),
    ", ",
    env!("HRDSCOPE_BUILD_DATE"),
    ")"
);

const EXAMPLES: &str = "Examples:\n  hrdscope encode timing.json -o timing.bin\n  hrdscope decode timing.bin --pretty\n  hrdscope display dump.hex --hex-input --indent 2";

#[derive(Parser, Debug)]
#[command(name = "hrdscope")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Bit-exact codec for the MPEG AVC timing and HRD descriptor.",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    /// Enable debug logging on stderr (overrides RUST_LOG)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode an attribute tree (JSON) into descriptor bytes.
    Encode {
        /// Path to a JSON attribute tree
        input: PathBuf,

        /// Output path for the encoded bytes
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        output: Option<PathBuf>,

        /// Write the encoded bytes to stdout
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Write lowercase hex text instead of raw bytes
        #[arg(long)]
        hex: bool,

        /// Prefix the payload with the descriptor tag and length
        #[arg(long)]
        framed: bool,
    },
    /// Decode descriptor bytes into an attribute tree.
    Decode {
        /// Path to the encoded bytes
        input: PathBuf,

        #[command(flatten)]
        bytes: ByteInputArgs,

        /// Output path for the tree (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Print the tree as a single XML element instead of JSON
        #[arg(long, conflicts_with_all = ["pretty", "compact"])]
        xml: bool,
    },
    /// Render descriptor bytes as human-readable text.
    Display {
        /// Path to the encoded bytes
        input: PathBuf,

        #[command(flatten)]
        bytes: ByteInputArgs,

        /// Number of spaces before each line
        #[arg(long, default_value_t = 0)]
        indent: usize,
    },
}

#[derive(clap::Args, Debug)]
struct ByteInputArgs {
    /// Read the input as whitespace-separated hex (implied for .hex files)
    #[arg(long)]
    hex_input: bool,

    /// Input starts with the descriptor tag and length
    #[arg(long)]
    framed: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            stdout,
            hex,
            framed,
        } => cmd_encode(input, output, stdout, hex, framed, cli.quiet),
        Commands::Decode {
            input,
            bytes,
            output,
            pretty,
            compact,
            xml,
        } => cmd_decode(input, bytes, output, pretty, compact, xml, cli.quiet),
        Commands::Display {
            input,
            bytes,
            indent,
        } => cmd_display(input, bytes, indent),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

fn cmd_encode(
    input: PathBuf,
    output: Option<PathBuf>,
    stdout: bool,
    hex: bool,
    framed: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let input = resolve_input_path(&input)?;
    validate_input_file(&input)?;
    if let Some(output) = output.as_ref() {
        ensure_distinct_paths(&input, output)?;
    }

    let json = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    let element: Element = serde_json::from_str(&json).map_err(|err| {
        CliError::new(
            format!("invalid attribute tree in {}: {}", input.display(), err),
            Some("expected {\"name\": ..., \"attributes\": {...}}".to_string()),
        )
    })?;
    let desc = AvcTimingHrdDescriptor::from_text(&element).map_err(|err| {
        CliError::new(
            err.to_string(),
            Some(
                "hrd_management_valid, fixed_frame_rate, temporal_poc and \
                 picture_to_display_conversion are required booleans"
                    .to_string(),
            ),
        )
    })?;
    if !desc.is_wire_consistent() {
        warn!(
            "N_90khz/K_90khz are only encoded as a pair together with num_units_in_tick; \
             they will be dropped"
        );
    }

    let bytes = if framed {
        desc.to_descriptor()
    } else {
        desc.serialize()
    };
    debug!(len = bytes.len(), framed, "encoded descriptor");
    let encoded = if hex {
        format!("{}\n", format_hex(&bytes)).into_bytes()
    } else {
        bytes
    };

    match output {
        None if stdout => {
            std::io::stdout()
                .write_all(&encoded)
                .context("Failed to write to stdout")?;
            Ok(())
        }
        Some(output) => {
            write_output(&output, &encoded)?;
            if !quiet {
                eprintln!("OK: descriptor written -> {}", output.display());
            }
            Ok(())
        }
        None => Err(CliError::new(
            "missing output path",
            Some("use -o/--output or --stdout".to_string()),
        )),
    }
}

fn cmd_decode(
    input: PathBuf,
    args: ByteInputArgs,
    output: Option<PathBuf>,
    pretty: bool,
    compact: bool,
    xml: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let input = resolve_input_path(&input)?;
    validate_input_file(&input)?;
    if let Some(output) = output.as_ref() {
        ensure_distinct_paths(&input, output)?;
    }

    let bytes = read_input_bytes(&input, args.hex_input)?;
    let decoded = if args.framed {
        AvcTimingHrdDescriptor::from_descriptor(&bytes)
    } else {
        AvcTimingHrdDescriptor::deserialize(&bytes)
    };
    let desc = decoded.map_err(|err| {
        CliError::new(
            format!("cannot decode {}: {}", input.display(), err),
            Some("use `hrdscope display` to inspect truncated input".to_string()),
        )
    })?;

    let element = desc.to_text();
    let mut text = if xml {
        element.to_string()
    } else {
        serialize_tree(&element, pretty, compact)?
    };
    text.push('\n');

    match output {
        Some(output) => {
            write_output(&output, text.as_bytes())?;
            if !quiet {
                eprintln!("OK: tree written -> {}", output.display());
            }
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn cmd_display(input: PathBuf, args: ByteInputArgs, indent: usize) -> Result<(), CliError> {
    let input = resolve_input_path(&input)?;
    validate_input_file(&input)?;
    let bytes = read_input_bytes(&input, args.hex_input)?;

    if !args.framed {
        print!("{}", display_payload(&bytes, indent));
        return Ok(());
    }

    let Some((header, payload)) = bytes.split_at_checked(layout::DESCRIPTOR_HEADER_LEN) else {
        return Err(CliError::new(
            format!(
                "input too short for a descriptor header: {} bytes",
                bytes.len()
            ),
            Some("drop --framed to render a bare payload".to_string()),
        ));
    };
    if header[0] != layout::DESCRIPTOR_TAG {
        warn!(tag = header[0], "unexpected descriptor tag");
    }
    println!(
        "{}Descriptor 0x{:02X}, {} bytes",
        " ".repeat(indent),
        header[0],
        header[1]
    );
    print!("{}", display_payload(payload, indent + 2));
    Ok(())
}

fn serialize_tree(element: &Element, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(element)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(element)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn read_input_bytes(input: &Path, hex_input: bool) -> Result<Vec<u8>, CliError> {
    let is_hex_file = input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("hex"));
    let raw = fs::read(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    if !(hex_input || is_hex_file) {
        return Ok(raw);
    }
    std::str::from_utf8(&raw)
        .ok()
        .and_then(parse_hex)
        .ok_or_else(|| {
            CliError::new(
                format!("invalid hex input: {}", input.display()),
                Some("expected whitespace-separated hex byte pairs, e.g. `7e 1f`".to_string()),
            )
        })
}

fn write_output(output: &Path, contents: &[u8]) -> Result<(), CliError> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(output, contents)
        .with_context(|| format!("Failed to write output: {}", output.display()))?;
    Ok(())
}

fn ensure_distinct_paths(input: &Path, output: &Path) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let output_dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // A missing output directory is created later and cannot hold the input.
    let Ok(output_dir) = fs::canonicalize(output_dir) else {
        return Ok(());
    };
    let file_name = output
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid output path: {}", output.display()))?;
    if output_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!("output path must differ from input: {}", output.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            None,
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    match matches.len() {
        0 => Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        )),
        1 => Ok(matches.remove(0)),
        count => {
            let listed = matches
                .iter()
                .take(3)
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let more = if count > 3 { ", ..." } else { "" };
            Err(CliError::new(
                format!(
                    "multiple files match pattern '{}' ({} matches); matches: {}{}",
                    pattern, count, listed, more
                ),
                Some("pass a single file, or run once per file".to_string()),
            ))
        }
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
