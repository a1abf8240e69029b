//! CLI entry point for servdiag

use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use chrono::Local;
use clap::{Parser, ValueEnum};
use servdiag::output::{TreeCounts, print_report, print_tree_header};
use servdiag::report::PortRange;
use servdiag::{
    HostProbe, OutputConfig, ReportConfig, StreamingFormatter, TextCollector, TreeConfig,
    TreeMode, TreeWalker, assemble, save_artifacts, stream_tree,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "servdiag")]
#[command(about = "Snapshot a directory tree and this machine's vitals")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Tree type: "min" hides .git and other VCS metadata, "full" shows everything
    #[arg(short = 't', long = "tree-type", value_name = "TYPE")]
    tree_type: Option<String>,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Directory the timestamped report folder is written to
    #[arg(short = 'o', long = "output-dir", default_value = "test")]
    output_dir: PathBuf,

    /// Only render the tree, skip system diagnostics
    #[arg(long = "tree-only")]
    tree_only: bool,

    /// Do not write report files
    #[arg(long = "no-save")]
    no_save: bool,

    /// Skip the public IP lookup
    #[arg(long = "offline")]
    offline: bool,

    /// Local port range to scan, START-END (end exclusive)
    #[arg(long = "ports", value_name = "START-END", default_value = "1024-10000")]
    ports: PortRange,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn init_logging(quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.quiet);

    let mode = TreeMode::from_name_or_default(args.tree_type.as_deref());
    let tree_config = TreeConfig {
        mode,
        ignore_patterns: args.ignore.clone(),
    };
    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        show_summary: true,
    };

    let now = Local::now();

    let walk = match TreeWalker::new(tree_config).walk(&args.path) {
        Ok(walk) => walk,
        Err(e) => {
            eprintln!("servdiag: {}", e);
            process::exit(1);
        }
    };
    let root = fs::canonicalize(&args.path).unwrap_or_else(|_| {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    });

    if let Err(e) = print_tree_header(&output_config, mode, &root) {
        eprintln!("servdiag: error writing output: {}", e);
        process::exit(1);
    }

    let mut console = StreamingFormatter::new(output_config.clone());
    let mut text = TextCollector::new();
    match stream_tree(walk, &mut (&mut console, &mut text)) {
        Ok(TreeCounts { dirs, files }) => {
            log::debug!("rendered {} directories, {} files", dirs, files)
        }
        Err(e) => {
            eprintln!("servdiag: error writing output: {}", e);
            process::exit(1);
        }
    }

    let tree_text = text.into_string();

    let report = if args.tree_only {
        None
    } else {
        log::info!("Starting system diagnostics...");
        let report_config = ReportConfig {
            ports: args.ports,
            lookup_public_ip: !args.offline,
            ..Default::default()
        };
        let mut probe = HostProbe::new(report_config);
        let report = assemble(&mut probe, &root, &now);
        if let Err(e) = print_report(&report, &output_config) {
            eprintln!("servdiag: error writing output: {}", e);
            process::exit(1);
        }
        Some(report)
    };

    if !args.no_save {
        match save_artifacts(&args.output_dir, &now, &tree_text, report.as_ref()) {
            Ok(paths) => log::info!("Reports saved to {}", paths.dir.display()),
            Err(e) => {
                eprintln!(
                    "servdiag: cannot write reports to '{}': {}",
                    args.output_dir.display(),
                    e
                );
                process::exit(1);
            }
        }
    }

    log::info!("Diagnostic operation completed successfully!");
}
