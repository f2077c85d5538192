//! tytable CLI - render table model JSON to Typst

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use tytable::{
    column_title, create_empty_table, render_table_model_to_typst, table_from_json,
    table_to_json_pretty, EmptyTableOptions, TableModel, TypstExportOptions,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tytable")]
#[command(version)]
#[command(about = "tytable - table model JSON to Typst table converter", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input model JSON (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Indentation width in spaces
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Do not repeat header rows on following pages
    #[arg(long)]
    no_repeat_header: bool,

    /// Emit a bare #table even when the model has a caption
    #[arg(long)]
    no_figure: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Print an empty table model as JSON
    New {
        /// Number of rows
        #[arg(short, long)]
        rows: usize,

        /// Number of columns
        #[arg(short, long)]
        columns: usize,

        /// Number of header rows
        #[arg(long)]
        header_rows: Option<usize>,

        /// Table caption
        #[arg(long)]
        caption: Option<String>,
    },

    /// Print the normalized JSON of a model
    Normalize {
        /// Input model JSON
        input: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print a plain text preview of a model
    Show {
        /// Input model JSON
        input: Option<String>,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(cmd) => handle_subcommand(cmd),
        None => render(&cli),
    };

    if let Err(message) = result {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn render(cli: &Cli) -> Result<(), String> {
    let model = load_model(cli.input_file.as_deref())?;
    let options = TypstExportOptions {
        repeat_header: !cli.no_repeat_header,
        wrap_figure: !cli.no_figure,
        ..Default::default()
    }
    .with_indent_width(cli.indent);

    let typst = render_table_model_to_typst(&model, &options);
    write_output(cli.output.as_deref(), &typst)
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> Result<(), String> {
    match cmd {
        Commands::New {
            rows,
            columns,
            header_rows,
            caption,
        } => {
            let model = create_empty_table(
                rows,
                columns,
                EmptyTableOptions {
                    header_rows,
                    caption,
                    ..Default::default()
                },
            )
            .map_err(|e| e.to_string())?;
            println!("{}", to_json(&model)?);
        }

        Commands::Normalize { input, output } => {
            let model = load_model(input.as_deref())?;
            write_output(output.as_deref(), &to_json(&model)?)?;
        }

        Commands::Show { input } => {
            let model = load_model(input.as_deref())?;
            println!("{}", preview(&model));
        }

        Commands::Info => {
            println!("tytable - table model JSON to Typst table converter");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ Normalized table model (ragged rows, header clamping)");
            println!("  ✓ Typst #table export with header, hline and vline");
            println!("  ✓ Figure wrapping for captioned tables");
            println!("  ✓ JSON import and export");
            println!();
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn load_model(path: Option<&str>) -> Result<TableModel, String> {
    let input = read_input(path).map_err(|e| format!("cannot read input: {}", e))?;
    table_from_json(&input).map_err(|e| e.to_string())
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, content: &str) -> Result<(), String> {
    match path {
        Some(path) => {
            let mut file = fs::File::create(path).map_err(|e| format!("{}: {}", path, e))?;
            writeln!(file, "{}", content).map_err(|e| format!("{}: {}", path, e))?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => println!("{}", content),
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn to_json(model: &TableModel) -> Result<String, String> {
    table_to_json_pretty(model).map_err(|e| e.to_string())
}

/// Grid preview: column titles on top, header rows separated by a rule
#[cfg(feature = "cli")]
fn preview(model: &TableModel) -> String {
    let titles: Vec<String> = (0..model.column_count()).map(column_title).collect();
    let widths: Vec<usize> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            model
                .rows()
                .iter()
                .map(|row| row[i].text.chars().count())
                .chain(std::iter::once(title.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(text, width)| format!("{:<width$}", text, width = width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };
    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut lines = vec![
        format_line(titles.iter().map(String::as_str).collect()),
        rule.clone(),
    ];
    for (i, row) in model.rows().iter().enumerate() {
        if i > 0 && i == model.header_rows() {
            lines.push(rule.clone());
        }
        lines.push(format_line(row.iter().map(|c| c.text.as_str()).collect()));
    }
    if let Some(caption) = model.caption() {
        lines.push(String::new());
        lines.push(format!("Caption: {}", caption));
    }
    lines.join("\n")
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tytable --features cli");
    eprintln!("  tytable [OPTIONS] [INPUT_FILE]");
}
