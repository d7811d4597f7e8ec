use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use numcsv::{read_dataset, write_dataset, Dataset, FloatFormat, Reader, ReaderConfig, Writer, WriterConfig};

/// Inspect and normalize numeric delimited data files.
#[derive(Parser)]
#[command(name = "numcsv", version, about)]
struct Cli {
    /// Log debug output to stderr (otherwise RUST_LOG applies, default warn)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the dimensions and column names of a file
    Inspect {
        /// Input file; stdin when omitted or "-"
        file: Option<PathBuf>,

        #[command(flatten)]
        read: ReadArgs,
    },
    /// Read a file and write it back out in a normalized layout
    Convert {
        /// Input file; stdin when omitted or "-"
        file: Option<PathBuf>,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit the dataset as JSON instead of delimited text
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        read: ReadArgs,

        #[command(flatten)]
        write: WriteArgs,
    },
}

#[derive(Args)]
struct ReadArgs {
    /// Load reader settings from a JSON file; flags below override it
    #[arg(long, value_name = "PATH")]
    reader_config: Option<PathBuf>,

    /// Field delimiter (`\t` for tab)
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Delimiter for the heading line, if different
    #[arg(long)]
    heading_delimiter: Option<String>,

    /// Skip lines starting with this prefix before the heading
    #[arg(short, long)]
    comment: Option<String>,

    /// Expected number of fields per line
    #[arg(long)]
    fields: Option<usize>,

    /// The input has no heading line
    #[arg(long)]
    no_heading: bool,

    /// Also skip blank and comment lines between records
    #[arg(long)]
    skip_blank: bool,
}

#[derive(Args)]
struct WriteArgs {
    /// Load writer settings from a JSON file; flags below override it
    #[arg(long, value_name = "PATH")]
    writer_config: Option<PathBuf>,

    /// Output field delimiter (`\t` for tab)
    #[arg(long)]
    out_delimiter: Option<String>,

    /// Terminate lines with CRLF
    #[arg(long)]
    crlf: bool,

    /// Wrap column names in double quotes
    #[arg(long)]
    quote_heading: bool,

    /// Number format for values
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Scientific,
    UpperScientific,
    Fixed,
    General,
}

impl From<FormatArg> for FloatFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Scientific => FloatFormat::Scientific,
            FormatArg::UpperScientific => FloatFormat::UpperScientific,
            FormatArg::Fixed => FloatFormat::Fixed,
            FormatArg::General => FloatFormat::General,
        }
    }
}

impl ReadArgs {
    fn to_config(&self) -> Result<ReaderConfig> {
        let mut config = match &self.reader_config {
            Some(path) => ReaderConfig::load_json(&path.to_string_lossy())
                .with_context(|| format!("loading reader config {}", path.display()))?,
            None => ReaderConfig::default(),
        };
        if let Some(d) = &self.delimiter {
            config.delimiter = unescape(d);
        }
        if let Some(d) = &self.heading_delimiter {
            config.heading_delimiter = Some(unescape(d));
        }
        if let Some(c) = &self.comment {
            config.comment = Some(c.clone());
        }
        if let Some(n) = self.fields {
            config.fields_per_record = Some(n);
        }
        config.no_heading |= self.no_heading;
        config.skip_blank_records |= self.skip_blank;
        Ok(config)
    }
}

impl WriteArgs {
    fn to_config(&self) -> Result<WriterConfig> {
        let mut config = match &self.writer_config {
            Some(path) => WriterConfig::load_json(&path.to_string_lossy())
                .with_context(|| format!("loading writer config {}", path.display()))?,
            None => WriterConfig::default(),
        };
        if let Some(d) = &self.out_delimiter {
            config.delimiter = unescape(d);
        }
        if let Some(f) = self.format {
            config.float_format = f.into();
        }
        config.use_crlf |= self.crlf;
        config.quote_heading |= self.quote_heading;
        Ok(config)
    }
}

fn unescape(delimiter: &str) -> String {
    delimiter.replace("\\t", "\t")
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn open_input(file: Option<&Path>) -> Result<Box<dyn Read>> {
    match file {
        Some(path) if path != Path::new("-") => {
            let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            Ok(Box::new(f))
        }
        _ => Ok(Box::new(io::stdin())),
    }
}

fn load(file: Option<&Path>, read: &ReadArgs) -> Result<Dataset> {
    let config = read.to_config()?;
    let name = file.map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
    let mut reader = Reader::from_reader(open_input(file)?, config);
    read_dataset(&mut reader).with_context(|| format!("reading {name}"))
}

fn inspect(file: Option<&Path>, read: &ReadArgs) -> Result<()> {
    let dataset = load(file, read)?;
    let (rows, cols) = dataset.table.dims();
    info!(rows, cols, "inspected");

    let mut out = io::stdout().lock();
    writeln!(out, "rows: {rows}")?;
    writeln!(out, "cols: {cols}")?;
    match &dataset.heading {
        Some(names) => writeln!(out, "heading: {}", names.join(", "))?,
        None => writeln!(out, "heading: none")?,
    }
    Ok(())
}

fn convert(
    file: Option<&Path>,
    output: Option<&Path>,
    json: bool,
    read: &ReadArgs,
    write: &WriteArgs,
) -> Result<()> {
    let dataset = load(file, read)?;
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    if json {
        let mut sink = sink;
        serde_json::to_writer_pretty(&mut sink, &dataset).context("writing JSON")?;
        writeln!(sink)?;
        sink.flush()?;
    } else {
        let mut writer = Writer::with_config(sink, write.to_config()?);
        write_dataset(&mut writer, &dataset).context("writing output")?;
    }
    info!(rows = dataset.table.rows(), json, "converted");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Inspect { file, read } => inspect(file.as_deref(), read),
        Command::Convert { file, output, json, read, write } => {
            convert(file.as_deref(), output.as_deref(), *json, read, write)
        }
    }
}
