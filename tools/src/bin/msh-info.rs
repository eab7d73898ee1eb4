use anyhow::Context as _;
use anyhow::Result;
use itertools::Itertools as _;
use msh_io::DecodeOptions;
use msh_io::Mesh;
use msh_io::NodeIndexing;
use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::io::Write as _;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::Registry;
use tracing_tree::HierarchicalLayer;

const USAGE: &str = "Usage: msh-info [options] [in.msh]";

/// Summary of a decoded mesh, as printed on standard output.
struct Report<'a> {
    mesh: &'a Mesh,
    verbose: bool,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = self.mesh.format();
        writeln!(
            f,
            "Format:   MSH {} ({}, data size {})",
            format.version,
            if format.is_ascii { "ASCII" } else { "binary" },
            format.data_size,
        )?;
        writeln!(f, "Nodes:    {:12}", self.mesh.node_count())?;
        writeln!(f, "Elements: {:12}", self.mesh.element_count())?;

        let kind_counts = self
            .mesh
            .blocks()
            .iter()
            .map(|block| (block.element_type().kind(), block.len()))
            .into_grouping_map()
            .sum();
        for (kind, count) in kind_counts.into_iter().sorted() {
            writeln!(f, " - {:<12} {:12}", kind.to_string(), count)?;
        }

        if self.verbose {
            writeln!(f, "Blocks:")?;
            for block in self.mesh.blocks() {
                writeln!(
                    f,
                    " - entity {} (dimension {}): {} x {}",
                    block.entity_tag(),
                    block.entity_dimension(),
                    block.len(),
                    block.element_type(),
                )?;
            }
        }

        let warnings = self.mesh.warnings();
        if !warnings.is_empty() {
            writeln!(f, "Warnings:")?;
            for warning in warnings {
                writeln!(f, " - {warning}")?;
            }
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let mut options = getopts::Options::new();
    options.optflag("h", "help", "print this help menu");
    options.optopt(
        "i",
        "indexing",
        "how node tags are resolved: lookup (default) or offset",
        "MODE",
    );
    options.optflag("s", "strict", "reject files whose tag ranges are wrong");
    options.optopt("t", "trace", "emit a chrome trace", "FILE");
    options.optflag("v", "verbose", "print per-block details");

    let matches = options.parse(env::args().skip(1))?;

    if matches.opt_present("h") {
        eprintln!("{}", options.usage(USAGE));
        return Ok(());
    }
    if matches.free.len() > 1 {
        anyhow::bail!("too many arguments\n\n{}", options.usage(USAGE));
    }

    let registry = Registry::default().with(EnvFilter::from_env("LOG")).with(
        HierarchicalLayer::new(4)
            .with_thread_ids(true)
            .with_targets(true)
            .with_bracketed_fields(true),
    );
    let _chrome_trace_guard = match matches.opt_str("t") {
        Some(filename) => {
            let (chrome_layer, guard) = tracing_chrome::ChromeLayerBuilder::new()
                .file(filename)
                .build();
            registry.with(chrome_layer).init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    };

    let decode_options = DecodeOptions {
        node_indexing: matches
            .opt_get::<NodeIndexing>("i")
            .context("invalid value for option 'indexing'")?
            .unwrap_or_default(),
        strict_tag_ranges: matches.opt_present("s"),
    };

    let mesh = match matches.free.first() {
        Some(filename) => {
            let file = fs::File::open(filename)
                .with_context(|| format!("failed to open {filename:?}"))?;
            msh_io::decode_with(io::BufReader::new(file), &decode_options)
                .with_context(|| format!("failed to read mesh file {filename:?}"))?
        }
        None => msh_io::decode_with(io::stdin().lock(), &decode_options)
            .context("failed to read mesh from standard input")?,
    };

    let report = Report {
        mesh: &mesh,
        verbose: matches.opt_present("v"),
    };
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    write!(stdout, "{report}").context("failed to print mesh summary")?;

    Ok(())
}
